// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Send a built prompt to a chat-completion service and turn every result into displayable text
// role: summarizer/gateway
// inputs: user prompt, system instruction, SummarizerParams (api key, base URL, model)
// outputs: SummaryOutcome (Generated | Failed(reason) | Unavailable)
// side_effects: One blocking POST to {base_url}/chat/completions when a key is configured
// invariants:
// - No key configured ⇒ Unavailable without any request
// - Never returns an error; failures become Failed(reason) data
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::model::SummaryStatus;
use crate::params::SummarizerParams;

pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
pub const UNAVAILABLE_TEXT: &str = "Summary unavailable: no completion API key is configured.";

#[derive(Debug, Error)]
pub enum CompletionError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error("service returned HTTP {status}: {body}")]
  Status { status: u16, body: String },

  #[error("could not decode completion response: {0}")]
  Decode(String),

  #[error("completion response contained no text")]
  Empty,
}

// --- Trait seam for the completion service ---
pub trait CompletionService {
  fn complete(&self, system: &str, prompt: &str, model: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
  Generated(String),
  Failed(String),
  Unavailable,
}

impl SummaryOutcome {
  pub fn status(&self) -> SummaryStatus {
    match self {
      SummaryOutcome::Generated(_) => SummaryStatus::Generated,
      SummaryOutcome::Failed(_) => SummaryStatus::Failed,
      SummaryOutcome::Unavailable => SummaryStatus::Unavailable,
    }
  }

  /// Text to show the caller in place of (or as) the summary.
  pub fn text(&self) -> String {
    match self {
      SummaryOutcome::Generated(text) => text.clone(),
      SummaryOutcome::Failed(reason) => format!("Summary generation failed: {}", reason),
      SummaryOutcome::Unavailable => UNAVAILABLE_TEXT.to_string(),
    }
  }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage<'a>>,
}

#[derive(Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
  message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
  #[serde(default)]
  content: Option<String>,
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiChatClient {
  agent: ureq::Agent,
  endpoint: String,
  api_key: String,
}

impl OpenAiChatClient {
  pub fn new(base_url: Option<&str>, api_key: &str) -> Self {
    let base = base_url
      .map(str::trim)
      .filter(|b| !b.is_empty())
      .unwrap_or(DEFAULT_API_BASE_URL)
      .trim_end_matches('/');

    let agent: ureq::Agent = ureq::Agent::config_builder().http_status_as_error(false).build().into();

    Self {
      agent,
      endpoint: format!("{}/chat/completions", base),
      api_key: api_key.to_string(),
    }
  }
}

impl CompletionService for OpenAiChatClient {
  fn complete(&self, system: &str, prompt: &str, model: &str) -> Result<String, CompletionError> {
    let body = ChatRequest {
      model,
      messages: vec![
        ChatMessage { role: "system", content: system },
        ChatMessage { role: "user", content: prompt },
      ],
    };

    let mut resp = self
      .agent
      .post(&self.endpoint)
      .header("Authorization", &format!("Bearer {}", self.api_key))
      .header("User-Agent", "gitea-work-report")
      .send_json(&body)
      .map_err(|e| CompletionError::Transport(e.to_string()))?;

    let status = resp.status().as_u16();
    let text = resp
      .body_mut()
      .read_to_string()
      .map_err(|e| CompletionError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
      return Err(CompletionError::Status { status, body: text });
    }

    let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| CompletionError::Decode(e.to_string()))?;

    parsed
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .filter(|c| !c.trim().is_empty())
      .ok_or(CompletionError::Empty)
  }
}

/// Summarization entry point: a configured completion service plus the model to ask.
pub struct SummarizerGateway {
  service: Option<Box<dyn CompletionService>>,
  model: String,
}

impl SummarizerGateway {
  pub fn from_params(params: &SummarizerParams) -> Self {
    let service: Option<Box<dyn CompletionService>> = params
      .api_key()
      .map(|key| Box::new(OpenAiChatClient::new(params.base_url.as_deref(), key)) as Box<dyn CompletionService>);

    Self {
      service,
      model: params.model.clone(),
    }
  }

  pub fn with_service(service: Box<dyn CompletionService>, model: impl Into<String>) -> Self {
    Self {
      service: Some(service),
      model: model.into(),
    }
  }

  pub fn unavailable() -> Self {
    Self {
      service: None,
      model: String::new(),
    }
  }

  pub fn is_available(&self) -> bool {
    self.service.is_some()
  }

  pub fn summarize(&self, prompt: &str, system: &str) -> SummaryOutcome {
    let Some(service) = self.service.as_ref() else {
      return SummaryOutcome::Unavailable;
    };

    info!(model = %self.model, prompt_chars = prompt.len(), "requesting summary");

    match service.complete(system, prompt, &self.model) {
      Ok(text) => SummaryOutcome::Generated(text),
      Err(e) => {
        warn!(error = %e, "summary generation failed");
        SummaryOutcome::Failed(e.to_string())
      }
    }
  }
}
