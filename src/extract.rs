// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Filter one page of activity events down to the target user's in-window pushes and turn them into commit records
// role: feed/extraction
// inputs: &[FeedEntry] in feed order (newest first), target username, inclusive `since` timestamp
// outputs: PageExtract { commits, skipped_events, cutoff_reached }
// invariants:
// - Other actors' events never produce records and never trigger the cutoff
// - The first own event with created < since stops the page; later events are not looked at
// - A malformed push or an undecodable feed element is skipped and counted, never fatal
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::warn;

use crate::error::PayloadError;
use crate::feed::FeedEntry;
use crate::model::{ActivityEvent, CommitRecord, PushPayload};

/// Per-event decision, in the order the checks are applied.
#[derive(Debug)]
pub enum EventOutcome {
  /// Authored by someone else.
  Foreign,
  /// Older than the window; ends the scan.
  BeforeCutoff,
  /// Own, in-window, but not a push.
  NotPush,
  Commits(Vec<CommitRecord>),
  Malformed(PayloadError),
}

#[derive(Debug, Default)]
pub struct PageExtract {
  pub commits: Vec<CommitRecord>,
  pub skipped_events: usize,
  pub cutoff_reached: bool,
}

/// ISO-8601 UTC strings of equal width order the same as the instants they name.
pub fn is_before_cutoff(created: &str, since: &str) -> bool {
  created < since
}

pub fn classify_event(event: &ActivityEvent, username: &str, since: &str) -> EventOutcome {
  if event.actor() != Some(username) {
    return EventOutcome::Foreign;
  }
  if is_before_cutoff(&event.created, since) {
    return EventOutcome::BeforeCutoff;
  }
  if !event.is_push() {
    return EventOutcome::NotPush;
  }

  match decode_push(event) {
    Ok(commits) => EventOutcome::Commits(commits),
    Err(e) => EventOutcome::Malformed(e),
  }
}

/// One record per pushed commit, all dated by the push event.
pub fn decode_push(event: &ActivityEvent) -> Result<Vec<CommitRecord>, PayloadError> {
  let content = match &event.content {
    Some(serde_json::Value::String(text)) => text,
    _ => return Err(PayloadError::ContentNotText),
  };
  let payload: PushPayload = serde_json::from_str(content)?;
  let repository = event.repo_full_name().ok_or(PayloadError::MissingRepository)?;
  let date = event.created_date();

  let records = payload
    .commits
    .unwrap_or_default()
    .into_iter()
    .map(|c| CommitRecord::new(repository, date, c.message.trim()))
    .collect();

  Ok(records)
}

pub fn extract_page(entries: &[FeedEntry], username: &str, since: &str) -> PageExtract {
  let mut out = PageExtract::default();

  for entry in entries {
    let event = match entry {
      Ok(event) => event,
      Err(e) => {
        warn!(error = %e, "skipping undecodable feed element");
        out.skipped_events += 1;
        continue;
      }
    };

    match classify_event(event, username, since) {
      EventOutcome::Foreign | EventOutcome::NotPush => {}
      EventOutcome::BeforeCutoff => {
        out.cutoff_reached = true;
        break;
      }
      EventOutcome::Commits(records) => out.commits.extend(records),
      EventOutcome::Malformed(e) => {
        warn!(
          repo = event.repo_full_name().unwrap_or("<unknown>"),
          created = %event.created,
          error = %e,
          "skipping malformed push event"
        );
        out.skipped_events += 1;
      }
    }
  }

  out
}
