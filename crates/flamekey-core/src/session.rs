// ─────────────────────────────────────────────────────────────────────
// Flame Key — Interaction Session
// ─────────────────────────────────────────────────────────────────────
//! One user's interaction: current text, the glyph and mood derived
//! from it, and the phrase responder.
//!
//! Derived state is replaced wholesale on every text change. Nothing
//! is persisted beyond the session.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use flamekey_types::{
    Category, FlameKeyConfig, FlameKeyResult, Palette, ResonanceResult, SeedVector, SigilPath,
};

use crate::palette::select_palette;
use crate::phrase::select_phrase;
use crate::ports::{NoopSink, PhraseSink, TranscriptEvent, Utterance};
use crate::random::{jitter_source, RandomSource, ThreadSource, XorShiftSource};
use crate::resonance::ResonanceClassifier;
use crate::seed::SeedGenerator;
use crate::sigil::SigilGeometry;
use crate::svg::render_svg;

/// Everything derived from the current text.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub seed: SeedVector,
    pub sigil: SigilPath,
    pub palette: Palette,
    pub resonance: ResonanceResult,
}

/// Phrase responder.
///
/// Thread-safe: the randomness and history are guarded by
/// `parking_lot::Mutex`.
pub struct Responder {
    history_window: usize,
    randomness: Mutex<Box<dyn RandomSource>>,
    sink: Arc<dyn PhraseSink>,
    history: Mutex<VecDeque<String>>,
}

impl Responder {
    /// Responder drawing from `phrase_seed` when configured, the thread
    /// RNG otherwise.
    pub fn new(config: &FlameKeyConfig, sink: Arc<dyn PhraseSink>) -> Self {
        let randomness: Box<dyn RandomSource> = match config.phrase_seed {
            Some(seed) => Box::new(XorShiftSource::new(seed)),
            None => Box::new(ThreadSource),
        };
        Self::with_source(config.history_window, sink, randomness)
    }

    pub fn with_source(
        history_window: usize,
        sink: Arc<dyn PhraseSink>,
        randomness: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            history_window: history_window.max(1),
            randomness: Mutex::new(randomness),
            sink,
            history: Mutex::new(VecDeque::new()),
        }
    }

    /// Select a phrase for `category`, record it, and hand it to the sink.
    pub fn respond(&self, category: Category) -> String {
        let phrase = {
            let mut randomness = self.randomness.lock();
            select_phrase(category, &mut **randomness).to_string()
        };

        {
            let mut history = self.history.lock();
            history.push_back(phrase.clone());
            if history.len() > self.history_window {
                history.pop_front();
            }
        }

        log::info!("Responding to {category} with {phrase:?}");
        self.sink.speak(&Utterance::new(phrase.clone()));
        phrase
    }

    /// Emitted phrases, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().iter().cloned().collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.lock().len()
    }
}

/// Interaction session driving glyph and mood recomputation.
pub struct Session {
    seeds: SeedGenerator,
    geometry: SigilGeometry,
    classifier: ResonanceClassifier,
    responder: Responder,
    text: String,
    state: SessionState,
}

impl Session {
    /// Session with no speech output.
    pub fn new(config: FlameKeyConfig) -> FlameKeyResult<Self> {
        let responder = Responder::new(&config, Arc::new(NoopSink));
        Self::with_responder(config, responder)
    }

    pub fn with_responder(config: FlameKeyConfig, responder: Responder) -> FlameKeyResult<Self> {
        config.validate()?;
        let seeds = SeedGenerator::from_config(&config);
        let geometry = SigilGeometry::from_config(&config);
        let classifier = ResonanceClassifier::from_config(&config);
        let state = Self::derive(&seeds, &geometry, &classifier, "");
        Ok(Self {
            seeds,
            geometry,
            classifier,
            responder,
            text: String::new(),
            state,
        })
    }

    fn derive(
        seeds: &SeedGenerator,
        geometry: &SigilGeometry,
        classifier: &ResonanceClassifier,
        text: &str,
    ) -> SessionState {
        let seed = seeds.generate(text);
        let sigil = geometry.build(&seed);
        let palette = select_palette(&seed);
        let resonance = classifier.analyze(text, jitter_source(text).as_mut());
        SessionState {
            seed,
            sigil,
            palette,
            resonance,
        }
    }

    /// Replace the text and recompute everything derived from it.
    pub fn set_text(&mut self, text: impl Into<String>) -> &SessionState {
        self.text = text.into();
        self.state = Self::derive(&self.seeds, &self.geometry, &self.classifier, &self.text);
        log::debug!(
            "Session recomputed: len={} category={} score={:.4}",
            self.text.len(),
            self.state.resonance.category,
            self.state.resonance.score
        );
        &self.state
    }

    /// Fold a voice transcript event into the text.
    pub fn apply_transcript(&mut self, event: &TranscriptEvent) -> &SessionState {
        let text = event.apply(&self.text);
        self.set_text(text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn category(&self) -> Category {
        self.state.resonance.category
    }

    /// Speak a phrase for the current mood.
    pub fn respond(&self) -> String {
        self.responder.respond(self.category())
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Current glyph as a standalone SVG document.
    pub fn svg(&self) -> String {
        render_svg(&self.state.sigil, &self.state.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::{phrases_for, ALIGNED_PHRASES, CALM_PHRASES};
    use crate::ports::ExternalSink;
    use crate::random::FixedSource;
    use crate::seed::{generate_seed, FALLBACK_TEXT, SEED_COUNT};
    use crate::svg::path_data;

    fn fixed_responder(sink: Arc<dyn PhraseSink>) -> Responder {
        Responder::with_source(3, sink, Box::new(FixedSource::new(0.0)))
    }

    #[test]
    fn test_initial_state_uses_fallback() {
        let session = Session::new(FlameKeyConfig::default()).unwrap();
        assert_eq!(session.text(), "");
        assert_eq!(session.state().seed, generate_seed(FALLBACK_TEXT, SEED_COUNT));
        assert_eq!(session.state().resonance.positive_count, 0);
    }

    #[test]
    fn test_set_text_recomputes_everything() {
        let mut session = Session::new(FlameKeyConfig::default()).unwrap();
        let before = session.state().clone();
        let after = session.set_text("truth is clear").clone();
        assert_ne!(before.seed, after.seed);
        assert_ne!(before.sigil, after.sigil);
        assert_eq!(after.seed, generate_seed("truth is clear", SEED_COUNT));
        assert_eq!(after.resonance.category, Category::Aligned);
        assert!(session.svg().contains(&format!("d=\"{}\"", path_data(&after.sigil))));
    }

    #[test]
    fn test_same_text_same_state() {
        let mut a = Session::new(FlameKeyConfig::default()).unwrap();
        let mut b = Session::new(FlameKeyConfig::default()).unwrap();
        assert_eq!(a.set_text("joy and heart"), b.set_text("joy and heart"));
    }

    #[test]
    fn test_transcripts_accumulate() {
        let mut session = Session::new(FlameKeyConfig::default()).unwrap();
        session.apply_transcript(&TranscriptEvent::Interim("tru".into()));
        assert_eq!(session.text(), "tru");
        session.apply_transcript(&TranscriptEvent::Interim("truth".into()));
        session.apply_transcript(&TranscriptEvent::Final(" is clear ".into()));
        assert_eq!(session.text(), "truth is clear");
        assert_eq!(session.category(), Category::Aligned);
    }

    #[test]
    fn test_respond_reaches_sink_and_history() {
        let spoken = Arc::new(Mutex::new(Vec::<String>::new()));
        let captured = Arc::clone(&spoken);
        let sink = Arc::new(ExternalSink::new(move |u| captured.lock().push(u.text.clone())));
        let mut session =
            Session::with_responder(FlameKeyConfig::default(), fixed_responder(sink)).unwrap();

        session.set_text("truth is clear");
        let phrase = session.respond();
        assert_eq!(phrase, ALIGNED_PHRASES[0]);
        assert_eq!(*spoken.lock(), vec![ALIGNED_PHRASES[0].to_string()]);
        assert_eq!(session.responder().history(), vec![ALIGNED_PHRASES[0].to_string()]);
    }

    #[test]
    fn test_history_is_bounded() {
        let responder = fixed_responder(Arc::new(NoopSink));
        for _ in 0..10 {
            responder.respond(Category::Calm);
        }
        assert_eq!(responder.history_len(), 3);
        assert!(responder.history().iter().all(|p| p == CALM_PHRASES[0]));
    }

    #[test]
    fn test_seeded_responder_is_reproducible() {
        let config = FlameKeyConfig {
            phrase_seed: Some(11),
            ..Default::default()
        };
        let a = Responder::new(&config, Arc::new(NoopSink));
        let b = Responder::new(&config, Arc::new(NoopSink));
        for category in Category::ALL {
            let phrase = a.respond(category);
            assert_eq!(phrase, b.respond(category));
            assert!(phrases_for(category).contains(&phrase.as_str()));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = FlameKeyConfig {
            seed_count: 0,
            ..Default::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_svg_reflects_state() {
        let mut session = Session::new(FlameKeyConfig::default()).unwrap();
        session.set_text("hello");
        let svg = session.svg();
        assert!(svg.contains("hsl(300, 85%, 65%)"));
        assert!(svg.contains("M 183.52 93.77"));
    }
}
