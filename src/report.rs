// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Single entry point that turns one user's feed into commits plus a summary
// role: report/orchestrator
// inputs: ReportRequest (feed params, kind, manual input, paging policy, optional now), SummarizerParams
// outputs: GeneratedReport { commits in aggregate order, summary text and status, retrieval stats }
// invariants:
// - Configuration is validated before any network I/O
// - No commits and blank manual input ⇒ NothingToReport, summarizer not called
// - Summarizer problems never fail the report; feed problems always do
// errors: ReportError from configuration or feed retrieval
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Local};

use crate::aggregate::aggregate;
use crate::error::ReportError;
use crate::feed::{FeedSource, GiteaFeedClient};
use crate::model::{GeneratedReport, ReportKind, SummaryStatus};
use crate::params::{FeedParams, PagingPolicy, SummarizerParams};
use crate::prompt::{build_prompt, system_instruction};
use crate::retrieval::collect_commits;
use crate::summarizer::SummarizerGateway;
use crate::window::{effective_now, since_for};

#[derive(Debug, Clone)]
pub struct ReportRequest {
  pub feed: FeedParams,
  pub kind: ReportKind,
  pub manual_input: String,
  pub paging: PagingPolicy,
  pub now: Option<DateTime<Local>>,
}

impl ReportRequest {
  pub fn new(feed: FeedParams, kind: ReportKind) -> Self {
    Self {
      feed,
      kind,
      manual_input: String::new(),
      paging: PagingPolicy::default(),
      now: None,
    }
  }

  pub fn since(&self) -> String {
    since_for(self.kind, effective_now(self.now))
  }
}

pub fn nothing_to_report_text(username: &str) -> String {
  format!(
    "--- {} has no commit records and no manual notes for this period ---",
    username
  )
}

/// Fetch, aggregate and summarize one user's activity over HTTP.
pub fn generate_report(request: &ReportRequest, summarizer: &SummarizerParams) -> Result<GeneratedReport, ReportError> {
  let client = GiteaFeedClient::new(&request.feed, &request.paging);
  let gateway = SummarizerGateway::from_params(summarizer);

  generate_report_with(request, &client, &gateway)
}

/// Same as [`generate_report`] with the feed and summarizer supplied by the caller.
pub fn generate_report_with(
  request: &ReportRequest,
  source: &dyn FeedSource,
  gateway: &SummarizerGateway,
) -> Result<GeneratedReport, ReportError> {
  request.feed.validate()?;

  let username = request.feed.username.as_str();
  let since = request.since();

  let retrieval = collect_commits(source, username, &since, &request.paging)?;
  let stats = retrieval.stats();
  let commits = aggregate(retrieval.commits);

  let (summary, summary_status) = if commits.is_empty() && request.manual_input.trim().is_empty() {
    (nothing_to_report_text(username), SummaryStatus::NothingToReport)
  } else {
    let prompt = build_prompt(&commits, request.kind, &request.manual_input);
    let outcome = gateway.summarize(&prompt, &system_instruction(request.kind));
    (outcome.text(), outcome.status())
  };

  Ok(GeneratedReport {
    kind: request.kind,
    since,
    username: username.to_string(),
    commits,
    summary,
    summary_status,
    retrieval: stats,
  })
}
