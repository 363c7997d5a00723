//! Language-model classifier
//!
//! [`LlmClassifier`] turns a report or petition into a prompt, sends it
//! through a [`CompletionBackend`] and parses the `Key: value` lines of the
//! reply. Any failure along the way is logged and answered from the static
//! table instead, marked [`RoutingSource::Fallback`].
//!
//! The HTTP backend lives in [`http`] and is only compiled with the `llm`
//! feature.

#[cfg(feature = "llm")]
pub mod http;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::static_table::StaticClassifier;
use crate::core::models::{
    Categorization, MODEL_CONFIDENCE, PetitionCategory, ReportType, Routing, RoutingSource,
    Urgency,
};
use crate::core::ports::Classifier;

/// Failures of a remote completion
#[derive(Debug, Error)]
pub enum LlmError {
    /// The API key variable is unset or empty
    #[error("API key not set (environment variable {0})")]
    MissingApiKey(String),

    /// Connection, timeout or body decoding failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// Reply carried no text
    #[error("reply has no content")]
    EmptyReply,

    /// Reply text lacks the expected fields
    #[error("could not parse reply: missing {0}")]
    Unparseable(&'static str),
}

/// Sends a prompt to a text-generation service and returns its reply
pub trait CompletionBackend: Send + Sync {
    /// Complete a single prompt
    fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

// =============================================================================
// WIRE FORMAT (OpenAI-compatible chat completions)
// =============================================================================

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user", "system" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,
    /// Conversation, a single user prompt here
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
}

impl ChatRequest {
    /// Request for a single user prompt
    #[must_use]
    pub fn single(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.0,
        }
    }
}

/// Chat-completions response body (fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One generated choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Result<String, LlmError> {
        self.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(LlmError::EmptyReply)
    }
}

// =============================================================================
// PROMPTS
// =============================================================================

/// Prompt asking for the department and urgency of a report
#[must_use]
pub fn report_prompt(report_type: ReportType, description: &str, location: &str) -> String {
    format!(
        "You route citizen incident reports to municipal departments.\n\
         Report type: {report_type}\n\
         Location: {location}\n\
         Description: {description}\n\n\
         Answer with exactly two lines:\n\
         Department: <department name>\n\
         Urgency: <low|medium|high>"
    )
}

/// Prompt asking for the category and responsible body of a petition
#[must_use]
pub fn petition_prompt(category: PetitionCategory, title: &str, description: &str) -> String {
    let categories = PetitionCategory::ALL.map(PetitionCategory::label).join(", ");
    format!(
        "You categorize citizen petitions for a local government.\n\
         Title: {title}\n\
         Suggested category: {category}\n\
         Description: {description}\n\n\
         Choose the category from: {categories}.\n\
         Answer with exactly two lines:\n\
         Category: <category>\n\
         Department: <public body responsible>"
    )
}

// =============================================================================
// REPLY PARSING
// =============================================================================

/// Value of the first `key: value` line, ignoring case and list markup
fn field<'a>(reply: &'a str, key: &str) -> Option<&'a str> {
    reply.lines().find_map(|line| {
        let line = line.trim().trim_start_matches(['-', '*', ' ']);
        let (k, v) = line.split_once(':')?;
        let k = k.trim().trim_matches('*');
        let v = v.trim().trim_matches('*').trim();
        (k.eq_ignore_ascii_case(key) && !v.is_empty()).then_some(v)
    })
}

/// Parse a report reply into department and (optional) urgency
pub fn parse_report_reply(reply: &str) -> Result<(String, Option<Urgency>), LlmError> {
    let department = field(reply, "department").ok_or(LlmError::Unparseable("department"))?;
    let urgency = field(reply, "urgency").and_then(|u| u.parse().ok());
    Ok((department.to_string(), urgency))
}

/// Parse a petition reply into (optional) category and department
pub fn parse_petition_reply(
    reply: &str,
) -> Result<(Option<PetitionCategory>, String), LlmError> {
    let department = field(reply, "department").ok_or(LlmError::Unparseable("department"))?;
    let category = field(reply, "category").and_then(|c| c.parse().ok());
    Ok((category, department.to_string()))
}

// =============================================================================
// CLASSIFIER
// =============================================================================

/// Classifier backed by a language model, falling back to the static table
#[derive(Debug)]
pub struct LlmClassifier<B> {
    backend: B,
}

impl<B: CompletionBackend> LlmClassifier<B> {
    /// Wrap a completion backend
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    fn try_route(
        &self,
        report_type: ReportType,
        description: &str,
        location: &str,
    ) -> Result<Routing, LlmError> {
        let reply = self.backend.complete(&report_prompt(report_type, description, location))?;
        let (department, urgency) = parse_report_reply(&reply)?;
        let (_, default_urgency) = super::static_table::report_route(report_type);
        Ok(Routing {
            department,
            urgency: urgency.unwrap_or(default_urgency),
            source: RoutingSource::Remote,
            confidence: MODEL_CONFIDENCE.to_string(),
        })
    }

    fn try_categorize(
        &self,
        category: PetitionCategory,
        title: &str,
        description: &str,
    ) -> Result<Categorization, LlmError> {
        let reply = self.backend.complete(&petition_prompt(category, title, description))?;
        let (suggested, department) = parse_petition_reply(&reply)?;
        Ok(Categorization {
            category: suggested.unwrap_or(category),
            department,
            source: RoutingSource::Remote,
            confidence: MODEL_CONFIDENCE.to_string(),
        })
    }
}

impl<B: CompletionBackend> Classifier for LlmClassifier<B> {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn route_report(&self, report_type: ReportType, description: &str, location: &str) -> Routing {
        self.try_route(report_type, description, location).unwrap_or_else(|e| {
            log::warn!("Remote routing failed ({e}), using static table");
            StaticClassifier::routing(report_type).into_fallback()
        })
    }

    fn categorize_petition(
        &self,
        category: PetitionCategory,
        title: &str,
        description: &str,
    ) -> Categorization {
        self.try_categorize(category, title, description).unwrap_or_else(|e| {
            log::warn!("Remote categorization failed ({e}), using static table");
            StaticClassifier::categorization(category).into_fallback()
        })
    }
}
