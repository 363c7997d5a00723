//! Adapter implementations for port traits
//!
//! - `static_table` - Fixed department/category lookup
//! - `llm/` - Language-model classifier with static fallback
//!
//! [`build_classifier`] picks the implementation from configuration.

pub mod llm;
pub mod static_table;

pub use static_table::StaticClassifier;

use crate::config::{ClassifierConfig, ClassifierMode};
use crate::core::ports::Classifier;

/// Build the classifier selected by configuration
///
/// Asking for the remote classifier in a build without the `llm` feature is
/// a configuration error rather than a silent downgrade.
pub fn build_classifier(config: &ClassifierConfig) -> anyhow::Result<Box<dyn Classifier>> {
    match config.mode {
        ClassifierMode::Static => Ok(Box::new(StaticClassifier)),
        ClassifierMode::Remote => build_remote(config),
    }
}

#[cfg(feature = "llm")]
fn build_remote(config: &ClassifierConfig) -> anyhow::Result<Box<dyn Classifier>> {
    let backend = llm::http::HttpCompletion::from_config(config)?;
    log::info!("Remote classifier using {} ({})", config.endpoint, config.model);
    Ok(Box::new(llm::LlmClassifier::new(backend)))
}

#[cfg(not(feature = "llm"))]
fn build_remote(_config: &ClassifierConfig) -> anyhow::Result<Box<dyn Classifier>> {
    anyhow::bail!(
        "classifier mode 'remote' requires mau2 to be built with the `llm` feature; \
         set classifier.mode = \"static\" or rebuild with --features llm"
    )
}
