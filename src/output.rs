//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::static_table;
use crate::core::models::{
    Categorization, PetitionCategory, ReportType, Routing, RoutingSource, Urgency,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of classifying a report
#[derive(Debug, Serialize)]
pub struct ReportRoutingResult {
    /// Report type label
    pub report_type: String,
    /// Classifier answer
    pub routing: Routing,
}

/// Result of categorizing a petition
#[derive(Debug, Serialize)]
pub struct PetitionRoutingResult {
    /// Category label
    pub category: String,
    /// Classifier answer
    pub categorization: Categorization,
}

/// The static routing table
#[derive(Debug, Serialize)]
pub struct RoutingTableResult {
    /// One row per report type
    pub reports: Vec<ReportRouteRow>,
    /// One row per petition category
    pub petitions: Vec<PetitionRouteRow>,
}

/// Report type routing
#[derive(Debug, Serialize)]
pub struct ReportRouteRow {
    /// Report type label
    pub report_type: String,
    /// Handling department
    pub department: String,
    /// Default urgency
    pub urgency: Urgency,
}

/// Petition category routing
#[derive(Debug, Serialize)]
pub struct PetitionRouteRow {
    /// Category label
    pub category: String,
    /// Receiving public body
    pub department: String,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn source_label(source: RoutingSource) -> String {
    match source {
        RoutingSource::Static => source.to_string().normal().to_string(),
        RoutingSource::Remote => source.to_string().green().to_string(),
        RoutingSource::Fallback => source.to_string().yellow().to_string(),
    }
}

fn urgency_label(urgency: Urgency) -> String {
    match urgency {
        Urgency::Low => urgency.to_string().normal().to_string(),
        Urgency::Medium => urgency.to_string().yellow().to_string(),
        Urgency::High => urgency.to_string().red().bold().to_string(),
    }
}

impl ReportRoutingResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn human(&self) -> String {
        format!(
            "{} -> {}\n  urgency:    {}\n  source:     {}\n  confidence: {}",
            self.report_type,
            self.routing.department.bold(),
            urgency_label(self.routing.urgency),
            source_label(self.routing.source),
            self.routing.confidence
        )
    }
}

impl PetitionRoutingResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn human(&self) -> String {
        format!(
            "{} -> {}\n  source:     {}\n  confidence: {}",
            self.category,
            self.categorization.department.bold(),
            source_label(self.categorization.source),
            self.categorization.confidence
        )
    }
}

impl RoutingTableResult {
    /// Snapshot of the static table
    #[must_use]
    pub fn from_static_table() -> Self {
        let reports = ReportType::ALL
            .into_iter()
            .map(|t| {
                let (department, urgency) = static_table::report_route(t);
                ReportRouteRow {
                    report_type: t.label().to_string(),
                    department: department.to_string(),
                    urgency,
                }
            })
            .collect();
        let petitions = PetitionCategory::ALL
            .into_iter()
            .map(|c| PetitionRouteRow {
                category: c.label().to_string(),
                department: static_table::petition_department(c).to_string(),
            })
            .collect();
        Self { reports, petitions }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn human(&self) -> String {
        let mut out = format!("{}\n", "Reports".bold());
        for row in &self.reports {
            out.push_str(&format!(
                "  {:<16} {} ({})\n",
                row.report_type,
                row.department,
                urgency_label(row.urgency)
            ));
        }
        out.push_str(&format!("\n{}\n", "Petitions".bold()));
        for row in &self.petitions {
            out.push_str(&format!("  {:<16} {}\n", row.category, row.department));
        }
        out.trim_end().to_string()
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
