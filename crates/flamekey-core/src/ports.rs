// ─────────────────────────────────────────────────────────────────────
// Flame Key — Collaborator Ports
// ─────────────────────────────────────────────────────────────────────
//! Speech output and voice transcript interfaces.
//!
//! Availability of speech synthesis and recognition varies by host.
//! The core only ever sees these ports; a host without them plugs in
//! [`NoopSink`] and plain text input.

use serde::{Deserialize, Serialize};

/// A phrase ready for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub pitch: f64,
    pub rate: f64,
    pub volume: f64,
    /// Preferred voice language prefix (matched case-insensitively).
    pub language_prefix: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pitch: 1.05,
            rate: 0.95,
            volume: 0.9,
            language_prefix: "en".to_string(),
        }
    }
}

/// Fire-and-forget phrase output.
///
/// Implementations must not block and must swallow their own failures.
pub trait PhraseSink: Send + Sync {
    fn speak(&self, utterance: &Utterance);
}

/// Sink for hosts without speech output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl PhraseSink for NoopSink {
    fn speak(&self, _utterance: &Utterance) {}
}

/// Sink that forwards to a closure.
///
/// Used by the Python binding to hand phrases to a host-side speech
/// engine.
type SpeakFn = Box<dyn Fn(&Utterance) + Send + Sync>;

pub struct ExternalSink {
    speak_fn: SpeakFn,
}

impl ExternalSink {
    pub fn new(speak_fn: impl Fn(&Utterance) + Send + Sync + 'static) -> Self {
        Self {
            speak_fn: Box::new(speak_fn),
        }
    }
}

impl PhraseSink for ExternalSink {
    fn speak(&self, utterance: &Utterance) {
        (self.speak_fn)(utterance)
    }
}

/// Result delivered by a speech-to-text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranscriptEvent {
    /// Provisional recognition; replaces the current text.
    Interim(String),
    /// Settled recognition; appended to the current text.
    Final(String),
}

impl TranscriptEvent {
    /// Text after applying this event to `current`.
    pub fn apply(&self, current: &str) -> String {
        match self {
            TranscriptEvent::Interim(text) => text.clone(),
            TranscriptEvent::Final(text) => {
                let text = text.trim();
                match (current.is_empty(), text.is_empty()) {
                    (_, true) => current.to_string(),
                    (true, false) => text.to_string(),
                    (false, false) => format!("{current} {text}"),
                }
            }
        }
    }
}
