//! Route a single report or petition from the shell

use std::path::Path;

use mau2::adapters;
use mau2::config::AppConfig;
use mau2::core::models::{PetitionCategory, ReportType};
use mau2::output::{OutputMode, PetitionRoutingResult, ReportRoutingResult};

/// Classify an incident report with the configured classifier
pub fn classify_report(
    config_path: Option<&Path>,
    report_type: &str,
    description: &str,
    location: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let report_type: ReportType = report_type.parse().map_err(anyhow::Error::msg)?;
    let config = AppConfig::load(config_path)?;
    let classifier = adapters::build_classifier(&config.classifier)?;

    let routing = classifier.route_report(report_type, description.trim(), location.trim());
    ReportRoutingResult {
        report_type: report_type.label().to_string(),
        routing,
    }
    .render(mode);
    Ok(())
}

/// Categorize a petition with the configured classifier
pub fn classify_petition(
    config_path: Option<&Path>,
    category: &str,
    title: &str,
    description: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let category: PetitionCategory = category.parse().map_err(anyhow::Error::msg)?;
    let config = AppConfig::load(config_path)?;
    let classifier = adapters::build_classifier(&config.classifier)?;

    let categorization = classifier.categorize_petition(category, title.trim(), description.trim());
    PetitionRoutingResult {
        category: category.label().to_string(),
        categorization,
    }
    .render(mode);
    Ok(())
}
