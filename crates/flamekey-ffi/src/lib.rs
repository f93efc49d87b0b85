// ─────────────────────────────────────────────────────────────────────
// Flame Key — PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied: PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the Flame Key engine.
//!
//! Exposes `FlameKeyConfig`, `ResonanceResult`, `FlameKeySession`,
//! `GlobeDriver`, and the stateless generation functions.
//!
//! # FFI Safety
//!
//! - GIL acquired via `Python::with_gil` before every Python callback.
//! - A failing speech callback is swallowed; the session never sees it.
//! - All config validated before storage.
//!
//! Usage from Python:
//! ```python
//! from flame_key import FlameKeySession
//!
//! session = FlameKeySession(speak_callback=print)
//! result = session.set_text("truth is clear")
//! session.respond()          # prints an "aligned" phrase
//! open("sigil.svg", "w").write(session.svg())
//! ```

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use flamekey_core::{
    analyze_resonance as core_analyze, build_sigil as core_build_sigil,
    generate_seed as core_generate_seed, jitter_source, render_svg as core_render_svg,
    select_palette as core_select_palette, select_phrase_named, ExternalSink, FixedSource,
    NoopSink, PhraseSink, RandomSource, Responder, Session, ThreadSource, TranscriptEvent,
    Utterance, XorShiftSource, BLESSING,
};
use flamekey_globe::{GlobeConfig, GlobeDriver, GlobeProjector, NetworkNode};
use flamekey_types::{FlameKeyConfig, FlameKeyError, Palette, ResonanceResult, SigilPath};

fn value_error(e: FlameKeyError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn points_of(path: &SigilPath) -> Vec<(f64, f64)> {
    path.points().iter().map(|p| (p.x, p.y)).collect()
}

fn palette_dict<'py>(py: Python<'py>, palette: &Palette) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("hue", palette.hue)?;
    dict.set_item("primary", palette.primary.to_string())?;
    dict.set_item("secondary", palette.secondary.to_string())?;
    dict.set_item("primary_hex", palette.primary.to_hex())?;
    dict.set_item("secondary_hex", palette.secondary.to_hex())?;
    Ok(dict)
}

// ─── PyFlameKeyConfig ───────────────────────────────────────────────

/// Python-visible configuration for the Flame Key engine.
#[pyclass(name = "FlameKeyConfig")]
#[derive(Clone)]
struct PyFlameKeyConfig {
    inner: FlameKeyConfig,
}

#[pymethods]
impl PyFlameKeyConfig {
    #[new]
    #[pyo3(signature = (
        seed_count = 12,
        fallback_text = "universal-guard-trust".to_string(),
        sigil_radius = 110.0,
        polarity_weight = 0.4,
        length_weight = 0.3,
        jitter_weight = 0.2,
        aligned_threshold = 0.6,
        deep_threshold = 0.5,
        history_window = 5,
        phrase_seed = None,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        seed_count: usize,
        fallback_text: String,
        sigil_radius: f64,
        polarity_weight: f64,
        length_weight: f64,
        jitter_weight: f64,
        aligned_threshold: f64,
        deep_threshold: f64,
        history_window: usize,
        phrase_seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = FlameKeyConfig {
            seed_count,
            fallback_text,
            sigil_radius,
            polarity_weight,
            length_weight,
            jitter_weight,
            aligned_threshold,
            deep_threshold,
            history_window,
            phrase_seed,
            ..Default::default()
        };
        config.validate().map_err(value_error)?;
        Ok(Self { inner: config })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = FlameKeyConfig::from_json(json).map_err(value_error)?;
        config.validate().map_err(value_error)?;
        Ok(Self { inner: config })
    }

    fn __repr__(&self) -> String {
        format!(
            "FlameKeyConfig(seed_count={}, sigil_radius={}, aligned_threshold={}, deep_threshold={})",
            self.inner.seed_count,
            self.inner.sigil_radius,
            self.inner.aligned_threshold,
            self.inner.deep_threshold
        )
    }
}

// ─── PyResonanceResult ──────────────────────────────────────────────

/// Python-visible resonance classification.
#[pyclass(name = "ResonanceResult")]
#[derive(Clone)]
struct PyResonanceResult {
    inner: ResonanceResult,
}

#[pymethods]
impl PyResonanceResult {
    #[getter]
    fn score(&self) -> f64 {
        self.inner.score
    }

    #[getter]
    fn category(&self) -> &'static str {
        self.inner.category.as_str()
    }

    #[getter]
    fn color_state(&self) -> &'static str {
        self.inner.category.color_state()
    }

    #[getter]
    fn percent(&self) -> u32 {
        self.inner.percent()
    }

    #[getter]
    fn positive_count(&self) -> u32 {
        self.inner.positive_count
    }

    #[getter]
    fn negative_count(&self) -> u32 {
        self.inner.negative_count
    }

    #[getter]
    fn emotion_count(&self) -> u32 {
        self.inner.emotion_count
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("score", self.inner.score)?;
        dict.set_item("category", self.inner.category.as_str())?;
        dict.set_item("positive_count", self.inner.positive_count)?;
        dict.set_item("negative_count", self.inner.negative_count)?;
        dict.set_item("emotion_count", self.inner.emotion_count)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "ResonanceResult(score={:.4}, category={}, pos={}, neg={}, emo={})",
            self.inner.score,
            self.inner.category,
            self.inner.positive_count,
            self.inner.negative_count,
            self.inner.emotion_count
        )
    }
}

// ─── FlameKeySession ────────────────────────────────────────────────

/// Interactive session: text in, glyph and mood out.
#[pyclass(name = "FlameKeySession")]
struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// Args:
    ///     config: Optional FlameKeyConfig (uses defaults if None).
    ///     speak_callback: Optional Callable[[str], None] receiving each
    ///                     phrase. If None, phrases are only recorded.
    #[new]
    #[pyo3(signature = (config = None, speak_callback = None))]
    fn new(config: Option<PyFlameKeyConfig>, speak_callback: Option<PyObject>) -> PyResult<Self> {
        let cfg = config.map(|c| c.inner).unwrap_or_default();

        let sink: Arc<dyn PhraseSink> = match speak_callback {
            Some(cb) => Arc::new(ExternalSink::new(move |utterance: &Utterance| {
                Python::with_gil(|py| {
                    let _ = cb.call1(py, (utterance.text.as_str(),));
                })
            })),
            None => Arc::new(NoopSink),
        };

        let responder = Responder::new(&cfg, sink);
        let inner = Session::with_responder(cfg, responder).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Replace the text and recompute the glyph and mood.
    fn set_text(&mut self, text: &str) -> PyResonanceResult {
        let state = self.inner.set_text(text);
        PyResonanceResult {
            inner: state.resonance.clone(),
        }
    }

    /// Fold a speech-recognition result into the text.
    #[pyo3(signature = (text, is_final = true))]
    fn apply_transcript(&mut self, text: String, is_final: bool) -> PyResonanceResult {
        let event = if is_final {
            TranscriptEvent::Final(text)
        } else {
            TranscriptEvent::Interim(text)
        };
        let state = self.inner.apply_transcript(&event);
        PyResonanceResult {
            inner: state.resonance.clone(),
        }
    }

    /// Speak a phrase for the current mood and return it.
    fn respond(&self) -> String {
        self.inner.respond()
    }

    fn svg(&self) -> String {
        self.inner.svg()
    }

    fn palette<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        palette_dict(py, &self.inner.state().palette)
    }

    #[getter]
    fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[getter]
    fn resonance(&self) -> PyResonanceResult {
        PyResonanceResult {
            inner: self.inner.state().resonance.clone(),
        }
    }

    #[getter]
    fn seed(&self) -> Vec<f64> {
        self.inner.state().seed.values().to_vec()
    }

    #[getter]
    fn sigil_points(&self) -> Vec<(f64, f64)> {
        points_of(&self.inner.state().sigil)
    }

    #[getter]
    fn ring_gradient(&self) -> Vec<&'static str> {
        self.inner.category().ring_gradient().to_vec()
    }

    #[getter]
    fn history(&self) -> Vec<String> {
        self.inner.responder().history()
    }
}

// ─── GlobeDriver ────────────────────────────────────────────────────

/// Rotating network globe.
#[pyclass(name = "GlobeDriver")]
struct PyGlobeDriver {
    inner: GlobeDriver,
}

#[pymethods]
impl PyGlobeDriver {
    #[new]
    #[pyo3(signature = (node_count = 48, rotation_step = 0.2))]
    fn new(node_count: usize, rotation_step: f64) -> PyResult<Self> {
        let config = GlobeConfig {
            node_count,
            rotation_step,
            ..Default::default()
        };
        Ok(Self {
            inner: GlobeDriver::new(config).map_err(value_error)?,
        })
    }

    /// Construct from JSON string.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config = GlobeConfig::from_json(json).map_err(value_error)?;
        Ok(Self {
            inner: GlobeDriver::new(config).map_err(value_error)?,
        })
    }

    /// Advance one animation tick; returns the new rotation.
    fn tick(&mut self) -> f64 {
        self.inner.tick()
    }

    #[getter]
    fn rotation(&self) -> f64 {
        self.inner.rotation()
    }

    /// Frame for a `width × height` viewport.
    ///
    /// Returns: dict with `radius`, `rotation`, `rings` (list of
    /// polylines) and `nodes` (list of dicts with x, y, size, alpha).
    fn frame<'py>(&self, py: Python<'py>, width: f64, height: f64) -> PyResult<Bound<'py, PyDict>> {
        let frame = self.inner.frame(width, height);
        let nodes = frame
            .nodes
            .iter()
            .map(|sprite| {
                let dict = PyDict::new(py);
                dict.set_item("x", sprite.x)?;
                dict.set_item("y", sprite.y)?;
                dict.set_item("size", sprite.size)?;
                dict.set_item("alpha", sprite.alpha)?;
                Ok(dict)
            })
            .collect::<PyResult<Vec<_>>>()?;

        let dict = PyDict::new(py);
        dict.set_item("radius", frame.radius)?;
        dict.set_item("rotation", frame.rotation)?;
        dict.set_item("rings", frame.rings)?;
        dict.set_item("nodes", nodes)?;
        Ok(dict)
    }
}

// ─── Stateless functions ────────────────────────────────────────────

/// Seed vector for `text`.
#[pyfunction]
#[pyo3(signature = (text, count = 12))]
fn generate_seed(text: &str, count: usize) -> Vec<f64> {
    core_generate_seed(text, count).into_inner()
}

/// Sigil anchor points for `text`, first point first.
#[pyfunction]
fn build_sigil(text: &str) -> Vec<(f64, f64)> {
    points_of(&core_build_sigil(&core_generate_seed(text, 12)))
}

/// Palette for `text`.
#[pyfunction]
fn select_palette<'py>(py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyDict>> {
    palette_dict(py, &core_select_palette(&core_generate_seed(text, 12)))
}

/// Standalone SVG document for `text`.
#[pyfunction]
fn render_svg(text: &str) -> String {
    let seed = core_generate_seed(text, 12);
    core_render_svg(&core_build_sigil(&seed), &core_select_palette(&seed))
}

/// Classify `text`. `jitter` pins the random draw; otherwise it is
/// derived from the text.
#[pyfunction]
#[pyo3(signature = (text, jitter = None))]
fn analyze_resonance(text: &str, jitter: Option<f64>) -> PyResonanceResult {
    let mut randomness: Box<dyn RandomSource> = match jitter {
        Some(value) => Box::new(FixedSource::new(value)),
        None => jitter_source(text),
    };
    PyResonanceResult {
        inner: core_analyze(text, randomness.as_mut()),
    }
}

/// Phrase for a category name; unknown names use the calm list.
#[pyfunction]
#[pyo3(signature = (category, seed = None))]
fn select_phrase(category: &str, seed: Option<u64>) -> &'static str {
    let mut randomness: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(XorShiftSource::new(seed)),
        None => Box::new(ThreadSource),
    };
    select_phrase_named(category, randomness.as_mut())
}

/// Perspective projection of one point.
///
/// Returns: tuple(x, y, depth, scale)
#[pyfunction]
#[pyo3(signature = (latitude, longitude, rotation, radius, strength = 1.0))]
fn project(
    latitude: f64,
    longitude: f64,
    rotation: f64,
    radius: f64,
    strength: f64,
) -> (f64, f64, f64, f64) {
    let node = NetworkNode::new(latitude, longitude, strength);
    let p = GlobeProjector::new(radius).project(&node, rotation);
    (p.x, p.y, p.depth, p.scale)
}

/// Flame Key Python module.
///
/// Exports:
/// - `FlameKeyConfig`: configuration
/// - `FlameKeySession`: text in, sigil and mood out
/// - `ResonanceResult`: classification result
/// - `GlobeDriver`: rotating network globe
#[pymodule]
fn flame_key(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFlameKeyConfig>()?;
    m.add_class::<PyResonanceResult>()?;
    m.add_class::<PySession>()?;
    m.add_class::<PyGlobeDriver>()?;

    m.add_function(wrap_pyfunction!(generate_seed, m)?)?;
    m.add_function(wrap_pyfunction!(build_sigil, m)?)?;
    m.add_function(wrap_pyfunction!(select_palette, m)?)?;
    m.add_function(wrap_pyfunction!(render_svg, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_resonance, m)?)?;
    m.add_function(wrap_pyfunction!(select_phrase, m)?)?;
    m.add_function(wrap_pyfunction!(project, m)?)?;

    m.add("BLESSING", BLESSING)?;
    Ok(())
}
