// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fetch one page of a user's Gitea activity feed over HTTP
// role: feed/client
// inputs: FeedParams (base URL, token, username, timeout), page size, 1-based page number
// outputs: Vec<FeedEntry> for the page (possibly empty), one per feed element in feed order
// side_effects: One blocking GET per call
// invariants:
// - Never retries; every failure maps to exactly one ReportError variant
// - Holds no state beyond the configured agent; safe to share across threads
// errors: Connectivity, Timeout, Authentication (401), NotFound (404), Remote (other non-2xx), Protocol (body not a JSON array)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::{PayloadError, ReportError};
use crate::model::ActivityEvent;
use crate::params::{FeedParams, PagingPolicy};

/// One feed element: the decoded event, or why it could not be decoded.
pub type FeedEntry = Result<ActivityEvent, PayloadError>;

// --- Trait seam for the activity feed ---
pub trait FeedSource {
  fn fetch_page(&self, page: u32) -> Result<Vec<FeedEntry>, ReportError>;
}

pub struct GiteaFeedClient {
  agent: ureq::Agent,
  feed_url: String,
  token: String,
  page_size: u32,
}

impl GiteaFeedClient {
  pub fn new(params: &FeedParams, policy: &PagingPolicy) -> Self {
    let agent: ureq::Agent = ureq::Agent::config_builder()
      .timeout_global(Some(params.request_timeout))
      .http_status_as_error(false)
      .build()
      .into();

    Self {
      agent,
      feed_url: feed_url(&params.base_url, &params.username),
      token: params.token.clone(),
      page_size: policy.page_size,
    }
  }
}

pub fn feed_url(base_url: &str, username: &str) -> String {
  format!("{}/users/{}/activities/feeds", base_url.trim_end_matches('/'), username)
}

impl FeedSource for GiteaFeedClient {
  fn fetch_page(&self, page: u32) -> Result<Vec<FeedEntry>, ReportError> {
    let resp = self
      .agent
      .get(&self.feed_url)
      .query("limit", self.page_size.to_string())
      .query("page", page.to_string())
      .header("Authorization", &format!("token {}", self.token))
      .header("Accept", "application/json")
      .header("User-Agent", "gitea-work-report")
      .call();

    let mut resp = match resp {
      Ok(r) => r,
      Err(e) => return Err(map_transport_error(e)),
    };

    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
      return Err(ReportError::from_status(status));
    }

    let body = resp.body_mut().read_to_string().map_err(map_transport_error)?;
    parse_page(&body)
  }
}

/// Decode a feed response body. Only a body that is not a JSON array is a
/// protocol error; each element is decoded on its own.
pub fn parse_page(body: &str) -> Result<Vec<FeedEntry>, ReportError> {
  let raw: Vec<serde_json::Value> = serde_json::from_str(body).map_err(|e| ReportError::Protocol(e.to_string()))?;

  Ok(raw.into_iter().map(decode_event).collect())
}

pub fn decode_event(raw: serde_json::Value) -> FeedEntry {
  serde_json::from_value(raw).map_err(PayloadError::UndecodableEvent)
}

fn map_transport_error(err: ureq::Error) -> ReportError {
  match &err {
    ureq::Error::Timeout(_) => ReportError::Timeout,
    ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => ReportError::Timeout,
    ureq::Error::StatusCode(status) => ReportError::from_status(*status),
    ureq::Error::BadUri(uri) => ReportError::Configuration(format!("invalid server URL: {}", uri)),
    _ => ReportError::Connectivity(err.to_string()),
  }
}
