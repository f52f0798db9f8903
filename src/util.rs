// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Small helpers for the binary: man page rendering and secret masking
// role: utilities/helpers
// inputs: clap CommandFactory; secret strings
// outputs: troff text; masked display strings
// invariants: mask_secret never reveals more than the first three characters
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use clap::CommandFactory;

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

/// Show that a secret is present without printing it.
pub fn mask_secret(secret: Option<&str>) -> String {
  match secret.map(str::trim).filter(|s| !s.is_empty()) {
    Some(s) => {
      let head: String = s.chars().take(3).collect();
      format!("present (starts with {}...)", head)
    }
    None => "MISSING".to_string(),
  }
}
