// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render aggregated commit records and manual notes into the fixed report instruction for the completion service
// role: prompt/rendering
// inputs: records in aggregate order, ReportKind, manual input text
// outputs: user prompt string and system instruction string
// invariants:
// - Deterministic: same inputs give byte-identical prompts
// - One `[date] repository: message` line per record, in input order, messages never truncated
// - Placeholders stand in for no records and for blank manual input
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::model::{CommitRecord, ReportKind};

pub const NO_COMMITS_PLACEHOLDER: &str = "(no Git commit records)";
pub const NO_MANUAL_PLACEHOLDER: &str = "(no manual supplement)";

/// One line per record.
pub fn render_commit_lines(sorted: &[CommitRecord]) -> String {
  sorted
    .iter()
    .map(|r| format!("[{}] {}: {}", r.date, r.repository, r.message))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn build_prompt(sorted: &[CommitRecord], kind: ReportKind, manual_input: &str) -> String {
  let commit_text = if sorted.is_empty() {
    NO_COMMITS_PLACEHOLDER.to_string()
  } else {
    render_commit_lines(sorted)
  };

  let manual = manual_input.trim();
  let manual = if manual.is_empty() { NO_MANUAL_PLACEHOLDER } else { manual };

  let label = kind.label();

  format!(
    "You are a professional software engineer. Based on my Git commit records from {period} and the \
work I added manually below, write a high-quality work {label}.

Requirements:
1. Show the volume and quality of the work: do not just list commit messages, turn the technical details \
into a description of valuable results. Use precise technical terms that show the depth and complexity \
of the problems solved.
2. Clear structure:
   - Core output: summarize the completed core tasks, grouped by project or functional module.
   - Technical highlights / hard problems solved: (if any) describe the challenges met and how they were \
solved, showing technical ability.
   - {plan}: plan the follow-up work based on the current progress.
3. Professional tone: confident, concise and well organized. Plain text only, no Markdown or other markup.

Git commit records:
{commit_text}

Manually added work:
{manual}

Please write a well-presented, substantive {label}.",
    period = kind.period(),
    label = label,
    plan = kind.plan_heading(),
    commit_text = commit_text,
    manual = manual,
  )
}

pub fn system_instruction(kind: ReportKind) -> String {
  format!(
    "You are an assistant that writes a {} from git commit logs. Write clearly in a professional tone, \
keep the layout simple, and do not use Markdown syntax.",
    kind.label()
  )
}
