use std::cell::RefCell;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use gitea_work_report::feed::{FeedEntry, FeedSource};
use gitea_work_report::model::{ActivityEvent, StopReason};
use gitea_work_report::retrieval::collect_commits;
use gitea_work_report::{PagingPolicy, ReportError};
use proptest::prelude::*;

// 2024-01-03T00:00:00Z
const SINCE_EPOCH: i64 = 1_704_240_000;
const SINCE: &str = "2024-01-03T00:00:00Z";

struct Paged {
  pages: Vec<Vec<ActivityEvent>>,
  requested: RefCell<Vec<u32>>,
}

impl FeedSource for Paged {
  fn fetch_page(&self, page: u32) -> Result<Vec<FeedEntry>, ReportError> {
    self.requested.borrow_mut().push(page);
    let events = self.pages.get(page as usize - 1).cloned().unwrap_or_default();
    Ok(events.into_iter().map(Ok).collect())
  }
}

fn stamp(epoch: i64) -> String {
  Utc
    .timestamp_opt(epoch, 0)
    .single()
    .unwrap()
    .format("%Y-%m-%dT%H:%M:%SZ")
    .to_string()
}

fn event(epoch: i64, idx: usize) -> ActivityEvent {
  let msg = idx.to_string();
  let v = test_support::push_event("alice", &stamp(epoch), "acme/api", &[msg.as_str()]);
  serde_json::from_value(v).unwrap()
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn newest_first_feed_stops_at_first_old_event(
    start in -86_400i64..86_400,
    steps in prop::collection::vec(0i64..7_200, 1..60),
    chunk in 1usize..10,
  ) {
    let mut epochs = Vec::with_capacity(steps.len());
    let mut t = SINCE_EPOCH + start;
    for s in &steps {
      t -= s;
      epochs.push(t);
    }

    let events: Vec<ActivityEvent> = epochs.iter().enumerate().map(|(i, e)| event(*e, i)).collect();
    let pages: Vec<Vec<ActivityEvent>> = events.chunks(chunk).map(|c| c.to_vec()).collect();
    let page_count = pages.len() as u32;
    let feed = Paged { pages, requested: RefCell::new(Vec::new()) };

    let policy = PagingPolicy { max_pages: 100, page_delay: Duration::ZERO, ..PagingPolicy::default() };
    let got = collect_commits(&feed, "alice", SINCE, &policy).unwrap();

    let expected: Vec<String> = epochs
      .iter()
      .enumerate()
      .take_while(|(_, e)| **e >= SINCE_EPOCH)
      .map(|(i, _)| i.to_string())
      .collect();
    let messages: Vec<String> = got.commits.iter().map(|c| c.message.clone()).collect();
    prop_assert_eq!(&messages, &expected);

    match epochs.iter().position(|e| *e < SINCE_EPOCH) {
      Some(first_old) => {
        let cutoff_page = (first_old / chunk) as u32 + 1;
        prop_assert_eq!(got.stop_reason, StopReason::Cutoff);
        prop_assert_eq!(got.pages_fetched, cutoff_page);
        prop_assert_eq!(feed.requested.borrow().clone(), (1..=cutoff_page).collect::<Vec<u32>>());
      }
      None => {
        prop_assert_eq!(got.stop_reason, StopReason::EmptyPage);
        prop_assert_eq!(got.pages_fetched, page_count + 1);
      }
    }
  }
}
