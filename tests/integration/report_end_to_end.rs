use std::time::Duration;

use chrono::{Local, TimeZone};
use gitea_work_report::model::{StopReason, SummaryStatus};
use gitea_work_report::{generate_report, FeedParams, ReportError, ReportKind, ReportRequest, SummarizerParams};
use test_support::{other_event, page, push_event, Canned, StubServer};

fn request(feed: &StubServer, kind: ReportKind, manual: &str) -> ReportRequest {
  let mut req = ReportRequest::new(FeedParams::new(feed.base_url(), "tok", "alice"), kind);
  req.manual_input = manual.to_string();
  req.paging.page_delay = Duration::ZERO;
  // Wednesday; daily window starts 2024-01-03, weekly on Monday 2024-01-01
  req.now = Local.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).single();
  req
}

fn summarizer_at(server: &StubServer) -> SummarizerParams {
  SummarizerParams {
    api_key: Some("sk-test".into()),
    base_url: Some(server.root_url()),
    model: "local-model".into(),
  }
}

fn feed_page() -> String {
  page(vec![
    push_event("alice", "2024-01-03T10:00:00Z", "acme/web", &["feat: dark mode"]),
    push_event("bob", "2024-01-03T09:30:00Z", "acme/api", &["chore: not mine"]),
    other_event("alice", "2024-01-03T09:00:00Z", "create_issue"),
    push_event("alice", "2024-01-03T08:00:00Z", "acme/api", &["fix: login", "test: login"]),
    push_event("alice", "2024-01-02T18:00:00Z", "acme/api", &["old: yesterday"]),
  ])
}

#[test]
fn daily_report_collects_sorts_and_summarizes() {
  test_support::init_tracing();
  let feed = StubServer::start(vec![Canned::json(200, feed_page())]);
  let llm = StubServer::start(vec![Canned::json(
    200,
    r#"{"choices":[{"message":{"content":"Core output: dark mode and login fix."}}]}"#,
  )]);

  let report = generate_report(&request(&feed, ReportKind::Daily, ""), &summarizer_at(&llm)).unwrap();

  assert_eq!(report.since, "2024-01-03T00:00:00Z");
  assert_eq!(report.username, "alice");
  let listed: Vec<(&str, &str)> = report
    .commits
    .iter()
    .map(|c| (c.repository.as_str(), c.message.as_str()))
    .collect();
  assert_eq!(
    listed,
    vec![
      ("acme/api", "fix: login"),
      ("acme/api", "test: login"),
      ("acme/web", "feat: dark mode"),
    ]
  );
  assert!(report.commits.iter().all(|c| c.date == "2024-01-03"));

  assert_eq!(report.retrieval.pages_fetched, 1);
  assert_eq!(report.retrieval.stop_reason, StopReason::Cutoff);
  assert_eq!(feed.requests().len(), 1);

  assert_eq!(report.summary_status, SummaryStatus::Generated);
  assert_eq!(report.summary, "Core output: dark mode and login fix.");

  let sent = &llm.requests()[0];
  let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
  let prompt = body["messages"][1]["content"].as_str().unwrap();
  assert!(prompt.contains("[2024-01-03] acme/api: fix: login"));
  assert!(!prompt.contains("not mine"));
  assert!(!prompt.contains("yesterday"));
}

#[test]
fn nothing_to_report_skips_summarizer() {
  let feed = StubServer::start(vec![Canned::json(
    200,
    page(vec![push_event("alice", "2023-12-29T10:00:00Z", "acme/api", &["old"])]),
  )]);
  let llm = StubServer::start(Vec::new());

  let report = generate_report(&request(&feed, ReportKind::Weekly, "  "), &summarizer_at(&llm)).unwrap();

  assert_eq!(report.since, "2024-01-01T00:00:00Z");
  assert!(report.commits.is_empty());
  assert_eq!(report.summary_status, SummaryStatus::NothingToReport);
  assert!(report.summary.contains("alice"));
  assert!(llm.requests().is_empty());
}

#[test]
fn manual_notes_alone_still_summarize() {
  let feed = StubServer::start(vec![Canned::json(200, "[]")]);
  let llm = StubServer::start(vec![Canned::json(200, r#"{"choices":[{"message":{"content":"ok"}}]}"#)]);

  let report = generate_report(
    &request(&feed, ReportKind::Daily, "Interviewed two candidates"),
    &summarizer_at(&llm),
  )
  .unwrap();

  assert_eq!(report.retrieval.stop_reason, StopReason::EmptyPage);
  assert_eq!(report.summary_status, SummaryStatus::Generated);
  assert!(llm.requests()[0].body.contains("Interviewed two candidates"));
}

#[test]
fn summarizer_failure_is_reported_not_raised() {
  let feed = StubServer::start(vec![Canned::json(200, feed_page())]);
  let llm = StubServer::start(vec![Canned::json(502, "upstream down")]);

  let report = generate_report(&request(&feed, ReportKind::Daily, ""), &summarizer_at(&llm)).unwrap();

  assert_eq!(report.commits.len(), 3);
  assert_eq!(report.summary_status, SummaryStatus::Failed);
  assert!(report.summary.starts_with("Summary generation failed:"));
}

#[test]
fn missing_key_leaves_summary_unavailable() {
  let feed = StubServer::start(vec![Canned::json(200, feed_page())]);

  let report = generate_report(&request(&feed, ReportKind::Daily, ""), &SummarizerParams::default()).unwrap();

  assert_eq!(report.commits.len(), 3);
  assert_eq!(report.summary_status, SummaryStatus::Unavailable);
}

#[test]
fn feed_error_fails_the_report() {
  let feed = StubServer::start(vec![Canned::json(401, r#"{"message":"bad token"}"#)]);

  let err = generate_report(&request(&feed, ReportKind::Daily, ""), &SummarizerParams::default()).unwrap_err();
  assert!(matches!(err, ReportError::Authentication));
}

#[test]
fn missing_configuration_fails_before_network() {
  let req = ReportRequest::new(FeedParams::new("", "", "alice"), ReportKind::Daily);
  let err = generate_report(&req, &SummarizerParams::default()).unwrap_err();
  match err {
    ReportError::Configuration(msg) => {
      assert!(msg.contains("GITEA_URL"));
      assert!(msg.contains("GITEA_TOKEN"));
      assert!(!msg.contains("GITEA_USERNAME"));
    }
    other => panic!("unexpected error: {:?}", other),
  }
}

#[test]
fn undecodable_feed_elements_are_skipped_and_counted() {
  let body = format!(
    "[{}, {}, {}]",
    push_event("alice", "2024-01-03T10:00:00Z", "acme/web", &["feat: dark mode"]),
    r#"{"act_user":{"username":"alice"},"op_type":"commit_repo","created":null,"content":"{}"}"#,
    r#"{"act_user":{"username":"alice"},"op_type":"commit_repo","created":"2024-01-03T09:00:00Z","content":{"Commits":[]},"repo":{"full_name":"acme/api"}}"#,
  );
  let feed = StubServer::start(vec![Canned::json(200, body), Canned::json(200, "[]")]);

  let report = generate_report(&request(&feed, ReportKind::Daily, ""), &SummarizerParams::default()).unwrap();

  assert_eq!(report.commits.len(), 1);
  assert_eq!(report.commits[0].message, "feat: dark mode");
  assert_eq!(report.retrieval.skipped_events, 2);
  assert_eq!(report.retrieval.stop_reason, StopReason::EmptyPage);
}
