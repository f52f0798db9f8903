use std::time::Duration;

use crate::error::ReportError;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Connection settings for one user's activity feed.
#[derive(Debug, Clone)]
pub struct FeedParams {
  pub base_url: String,
  pub token: String,
  pub username: String,
  pub request_timeout: Duration,
}

impl FeedParams {
  pub fn new(base_url: impl Into<String>, token: impl Into<String>, username: impl Into<String>) -> Self {
    let base_url: String = base_url.into();
    let token: String = token.into();
    let username: String = username.into();
    Self {
      base_url: base_url.trim().trim_end_matches('/').to_string(),
      token: token.trim().to_string(),
      username: username.trim().to_string(),
      request_timeout: DEFAULT_FEED_TIMEOUT,
    }
  }

  /// Fails with every missing field named, before any request is made.
  pub fn validate(&self) -> Result<(), ReportError> {
    let mut missing: Vec<&str> = Vec::new();

    if self.base_url.is_empty() {
      missing.push("server URL (GITEA_URL)");
    }
    if self.token.is_empty() {
      missing.push("token (GITEA_TOKEN)");
    }
    if self.username.is_empty() {
      missing.push("username (GITEA_USERNAME)");
    }

    if missing.is_empty() {
      Ok(())
    } else {
      Err(ReportError::Configuration(format!(
        "incomplete Gitea configuration, missing {}",
        missing.join(", ")
      )))
    }
  }
}

/// Completion service settings; an absent key means summaries are unavailable.
#[derive(Debug, Clone)]
pub struct SummarizerParams {
  pub api_key: Option<String>,
  pub base_url: Option<String>,
  pub model: String,
}

impl SummarizerParams {
  pub fn api_key(&self) -> Option<&str> {
    self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
  }
}

impl Default for SummarizerParams {
  fn default() -> Self {
    Self {
      api_key: None,
      base_url: None,
      model: DEFAULT_MODEL.to_string(),
    }
  }
}

/// How far and how fast the feed is paged through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingPolicy {
  pub page_size: u32,
  pub max_pages: u32,
  pub page_delay: Duration,
}

impl Default for PagingPolicy {
  fn default() -> Self {
    Self {
      page_size: DEFAULT_PAGE_SIZE,
      max_pages: DEFAULT_MAX_PAGES,
      page_delay: DEFAULT_PAGE_DELAY,
    }
  }
}
