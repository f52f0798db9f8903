// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Drive the page-by-page walk of the activity feed until an empty page, the cutoff, or the page ceiling
// role: feed/orchestrator
// inputs: FeedSource, target username, inclusive `since`, PagingPolicy
// outputs: Retrieval { commits in extraction order, pages fetched, skipped events, stop reason }
// side_effects: Sleeps `page_delay` between consecutive page requests
// invariants:
// - Pages are fetched strictly in order starting at 1; never more than max_pages (minimum 1)
// - Once the cutoff is hit no further page is requested
// errors: First feed error aborts the whole retrieval
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::{debug, info};

use crate::error::ReportError;
use crate::extract::extract_page;
use crate::feed::FeedSource;
use crate::model::{CommitRecord, RetrievalStats, StopReason};
use crate::params::PagingPolicy;

#[derive(Debug)]
pub struct Retrieval {
  pub commits: Vec<CommitRecord>,
  pub pages_fetched: u32,
  pub skipped_events: usize,
  pub stop_reason: StopReason,
}

impl Retrieval {
  pub fn stats(&self) -> RetrievalStats {
    RetrievalStats {
      pages_fetched: self.pages_fetched,
      skipped_events: self.skipped_events,
      stop_reason: self.stop_reason,
    }
  }
}

pub fn collect_commits(
  source: &dyn FeedSource,
  username: &str,
  since: &str,
  policy: &PagingPolicy,
) -> Result<Retrieval, ReportError> {
  let max_pages = policy.max_pages.max(1);
  let mut commits: Vec<CommitRecord> = Vec::new();
  let mut skipped_events = 0usize;
  let mut page: u32 = 1;

  let stop_reason = loop {
    let events = source.fetch_page(page)?;
    debug!(page, events = events.len(), "fetched activity page");

    if events.is_empty() {
      break StopReason::EmptyPage;
    }

    let extracted = extract_page(&events, username, since);
    commits.extend(extracted.commits);
    skipped_events += extracted.skipped_events;

    if extracted.cutoff_reached {
      break StopReason::Cutoff;
    }
    if page >= max_pages {
      break StopReason::PageCeiling;
    }

    page += 1;
    if !policy.page_delay.is_zero() {
      std::thread::sleep(policy.page_delay);
    }
  };

  info!(
    pages = page,
    commits = commits.len(),
    skipped = skipped_events,
    stop = ?stop_reason,
    "activity retrieval finished"
  );

  Ok(Retrieval {
    commits,
    pages_fetched: page,
    skipped_events,
    stop_reason,
  })
}
