// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the feed wire shapes (activity events, push payloads) and the report model (commit records, generated report)
// role: model/types
// outputs: Serializable structs with stable field names shared by extraction, rendering and the CLI JSON output
// invariants: CommitRecord serializes as {repo, date, msg}; wire structs tolerate missing fields via serde defaults
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

/// Operation tag Gitea uses for "commits pushed to a repository".
pub const PUSH_OP_TYPE: &str = "commit_repo";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ActUser {
  #[serde(default)]
  pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ActivityRepo {
  #[serde(default)]
  pub full_name: Option<String>,
}

/// One raw item of `/users/{username}/activities/feeds`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ActivityEvent {
  #[serde(default)]
  pub act_user: Option<ActUser>,
  #[serde(default)]
  pub op_type: String,
  #[serde(default)]
  pub created: String,
  /// Payload as sent. Push events carry a JSON document encoded as a string.
  #[serde(default)]
  pub content: Option<serde_json::Value>,
  #[serde(default)]
  pub repo: Option<ActivityRepo>,
}

impl ActivityEvent {
  pub fn actor(&self) -> Option<&str> {
    self.act_user.as_ref().and_then(|u| u.username.as_deref())
  }

  pub fn repo_full_name(&self) -> Option<&str> {
    self.repo.as_ref().and_then(|r| r.full_name.as_deref())
  }

  pub fn is_push(&self) -> bool {
    self.op_type == PUSH_OP_TYPE
  }

  /// Day part (`YYYY-MM-DD`) of the event creation timestamp.
  pub fn created_date(&self) -> &str {
    self.created.get(..10).unwrap_or(&self.created)
  }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PushCommit {
  #[serde(rename = "Message", default)]
  pub message: String,
}

/// Decoded `content` of a push event.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PushPayload {
  #[serde(rename = "Commits", default)]
  pub commits: Option<Vec<PushCommit>>,
}

/// A single pushed commit attributed to the target user.
///
/// `date` is the day the push event was recorded, not the commit's own
/// timestamp; the feed does not reliably expose per-commit times.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CommitRecord {
  #[serde(rename = "repo")]
  pub repository: String,
  pub date: String,
  #[serde(rename = "msg")]
  pub message: String,
}

impl CommitRecord {
  pub fn new(repository: impl Into<String>, date: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      repository: repository.into(),
      date: date.into(),
      message: message.into(),
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
  Daily,
  Weekly,
}

impl ReportKind {
  pub fn label(self) -> &'static str {
    match self {
      ReportKind::Daily => "daily report",
      ReportKind::Weekly => "weekly report",
    }
  }

  pub fn period(self) -> &'static str {
    match self {
      ReportKind::Daily => "today",
      ReportKind::Weekly => "this week",
    }
  }

  pub fn plan_heading(self) -> &'static str {
    match self {
      ReportKind::Daily => "Plan for tomorrow",
      ReportKind::Weekly => "Plan for next week",
    }
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
  EmptyPage,
  Cutoff,
  PageCeiling,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RetrievalStats {
  pub pages_fetched: u32,
  pub skipped_events: usize,
  pub stop_reason: StopReason,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
  Generated,
  Failed,
  Unavailable,
  NothingToReport,
}

/// Everything one report run hands back to its caller.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratedReport {
  pub kind: ReportKind,
  pub since: String,
  pub username: String,
  pub commits: Vec<CommitRecord>,
  pub summary: String,
  pub summary_status: SummaryStatus,
  pub retrieval: RetrievalStats,
}
