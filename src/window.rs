use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::model::ReportKind;

// Window start for a report kind. The feed has no upper bound; "now" is implicit.

/// First calendar day covered by a report of `kind` generated at `now`.
pub fn window_start(kind: ReportKind, now: DateTime<Local>) -> NaiveDate {
  let today = now.date_naive();
  match kind {
    ReportKind::Daily => today,
    ReportKind::Weekly => {
      let back = today.weekday().num_days_from_monday() as i64;
      today - chrono::Duration::days(back)
    }
  }
}

/// Inclusive cutoff as the feed spells timestamps: `YYYY-MM-DDT00:00:00Z`.
///
/// The calendar day comes from local "now" and is written as UTC midnight,
/// so that it compares byte-for-byte against the feed's `created` values.
pub fn since_for(kind: ReportKind, now: DateTime<Local>) -> String {
  window_start(kind, now).format("%Y-%m-%dT00:00:00Z").to_string()
}

/// Parse a `--now-override` string into a local DateTime.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}

pub fn effective_now(override_now: Option<DateTime<Local>>) -> DateTime<Local> {
  override_now.unwrap_or_else(Local::now)
}
