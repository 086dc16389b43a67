//! N-API bindings for the MindFlow content triage engine.
//!
//! The quick-add box calls `analyzeContent(text)` on every keystroke; these
//! bindings keep that signature so the JS side swaps its inline heuristics
//! for the native engine without renaming anything. Results cross the
//! boundary as plain JSON values via serde_json.

use std::sync::Once;

use napi_derive::napi;

use triage_core::{ContentClassifier, TriageConfig};

static TRACING_INIT: Once = Once::new();

/// Install a process-wide tracing subscriber, once. Filtering comes from
/// `RUST_LOG`; the core crate itself never installs a subscriber.
fn ensure_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn to_js(classification: triage_core::Classification) -> napi::Result<serde_json::Value> {
    serde_json::to_value(classification)
        .map_err(|e| napi::Error::from_reason(format!("serialize classification: {e}")))
}

/// Classify quick-add text with the built-in pattern tables.
#[napi]
pub fn analyze_content(text: String) -> napi::Result<serde_json::Value> {
    ensure_tracing();
    to_js(triage_core::classify(&text))
}

/// Classify quick-add text under a caller-supplied TOML pattern table.
///
/// Config problems (unreadable TOML, bad regex) surface as JS errors here;
/// classification itself cannot fail.
#[napi]
pub fn analyze_with_config(config_toml: String, text: String) -> napi::Result<serde_json::Value> {
    ensure_tracing();
    let config = TriageConfig::from_toml_str(&config_toml)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    let classifier = ContentClassifier::with_config(config)
        .map_err(|e| napi::Error::from_reason(e.to_string()))?;
    to_js(classifier.classify(&text))
}
