use crate::model::CommitRecord;

/// Canonical report ordering: repository, then date. Stable, so equal keys
/// keep extraction order and a second pass changes nothing.
pub fn aggregate(mut records: Vec<CommitRecord>) -> Vec<CommitRecord> {
  records.sort_by(|a, b| {
    a.repository
      .cmp(&b.repository)
      .then_with(|| a.date.cmp(&b.date))
  });
  records
}

#[derive(Debug, PartialEq, Eq)]
pub struct RepositoryGroup<'a> {
  pub repository: &'a str,
  pub commits: Vec<&'a CommitRecord>,
}

/// Split already aggregated records into consecutive per-repository runs.
pub fn group_by_repository(sorted: &[CommitRecord]) -> Vec<RepositoryGroup<'_>> {
  let mut groups: Vec<RepositoryGroup<'_>> = Vec::new();

  for rec in sorted {
    match groups.last_mut() {
      Some(g) if g.repository == rec.repository => g.commits.push(rec),
      _ => groups.push(RepositoryGroup {
        repository: &rec.repository,
        commits: vec![rec],
      }),
    }
  }

  groups
}

/// Human-readable listing; continuation lines of a message are indented under it.
pub fn render_listing(sorted: &[CommitRecord]) -> String {
  let mut out = String::new();

  for (i, group) in group_by_repository(sorted).iter().enumerate() {
    if i > 0 {
      out.push('\n');
    }
    out.push_str(&format!("Repository: {}\n", group.repository));

    for rec in &group.commits {
      out.push_str(&format!("  - [{}] {}\n", rec.date, indent_continuation(&rec.message)));
    }
  }

  out
}

fn indent_continuation(message: &str) -> String {
  message
    .lines()
    .enumerate()
    .map(|(i, line)| {
      if i == 0 || line.is_empty() {
        line.to_string()
      } else {
        format!("    {}", line)
      }
    })
    .collect::<Vec<_>>()
    .join("\n")
}
