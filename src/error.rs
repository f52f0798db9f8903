// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed failures for report generation (configuration, feed transport, feed protocol) and per-event payload decoding
// role: errors/taxonomy
// outputs: ReportError (fatal to a retrieval call), PayloadError (swallowed per event, including undecodable feed elements)
// invariants:
// - Display text of every ReportError is safe to show to an end user verbatim
// - Transport-library errors never escape; they are mapped to a ReportError variant
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
  #[error("configuration error: {0}")]
  Configuration(String),

  #[error("cannot connect to the Gitea server, check the network or the server URL ({0})")]
  Connectivity(String),

  #[error("request to the Gitea server timed out, check the network or retry later")]
  Timeout,

  #[error("authentication failed: the token is invalid or expired")]
  Authentication,

  #[error("the requested user does not exist, check the username")]
  NotFound,

  #[error("the Gitea server returned an error: HTTP {status}")]
  Remote { status: u16 },

  #[error("unexpected response from the Gitea activity feed: {0}")]
  Protocol(String),
}

impl ReportError {
  /// Map a non-2xx HTTP status from the feed endpoint.
  pub fn from_status(status: u16) -> Self {
    match status {
      401 => ReportError::Authentication,
      404 => ReportError::NotFound,
      other => ReportError::Remote { status: other },
    }
  }
}

/// Why a single push event could not be turned into commit records.
#[derive(Debug, Error)]
pub enum PayloadError {
  #[error("push content is not valid JSON: {0}")]
  InvalidContent(#[from] serde_json::Error),

  #[error("push content is missing or not a JSON string")]
  ContentNotText,

  #[error("push event has no repository name")]
  MissingRepository,

  #[error("activity event could not be decoded: {0}")]
  UndecodableEvent(serde_json::Error),
}
