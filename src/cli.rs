use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::model::ReportKind;
use crate::params::{FeedParams, PagingPolicy, SummarizerParams, DEFAULT_MODEL};
use crate::report::ReportRequest;
use crate::window::parse_now_override;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "gitea-work-report",
    version,
    about = "Summarize your Gitea push activity into a daily or weekly work report",
    long_about = None
)]
pub struct Cli {
  /// Weekly report (since Monday); default is a daily report (since midnight)
  #[arg(short = 'w', long)]
  pub week: bool,

  /// Extra work to mention that has no commits behind it
  #[arg(long, default_value = "")]
  pub manual: String,

  /// Output format
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Gitea API base URL, e.g. https://git.example.com/api/v1
  #[arg(long, env = "GITEA_URL")]
  pub server_url: Option<String>,

  /// Gitea access token
  #[arg(long, env = "GITEA_TOKEN", hide_env_values = true)]
  pub token: Option<String>,

  /// Gitea username whose activity is reported
  #[arg(long, env = "GITEA_USERNAME")]
  pub username: Option<String>,

  /// API key for the chat-completion service (summaries are skipped without it)
  #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
  pub api_key: Option<String>,

  /// Base URL of an OpenAI-compatible API (default: https://api.openai.com/v1)
  #[arg(long, env = "OPENAI_BASE_URL")]
  pub api_base_url: Option<String>,

  /// Model used for the summary
  #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
  pub model: String,

  /// Stop after this many feed pages
  #[arg(long, default_value_t = 20)]
  pub max_pages: u32,

  /// Pause between feed pages, in milliseconds
  #[arg(long, default_value_t = 500)]
  pub page_delay_ms: u64,

  /// Feed request timeout, in seconds
  #[arg(long, default_value_t = 30)]
  pub timeout_secs: u64,

  /// Check the summarizer configuration and send a sample request, then exit
  #[arg(long)]
  pub check_summarizer: bool,

  /// Log progress to stderr
  #[arg(short, long)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant used to compute the window (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
  pub request: ReportRequest,
  pub summarizer: SummarizerParams,
  pub format: OutputFormat,
  pub check_summarizer: bool,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let kind = if cli.week { ReportKind::Weekly } else { ReportKind::Daily };

  let now = match cli.now_override.as_deref() {
    Some(raw) => match parse_now_override(Some(raw)) {
      Some(dt) => Some(dt),
      None => anyhow::bail!("invalid --now-override: {}", raw),
    },
    None => None,
  };

  let mut feed = FeedParams::new(
    cli.server_url.unwrap_or_default(),
    cli.token.unwrap_or_default(),
    cli.username.unwrap_or_default(),
  );
  feed.request_timeout = Duration::from_secs(cli.timeout_secs);

  let paging = PagingPolicy {
    max_pages: cli.max_pages,
    page_delay: Duration::from_millis(cli.page_delay_ms),
    ..PagingPolicy::default()
  };

  let request = ReportRequest {
    feed,
    kind,
    manual_input: cli.manual,
    paging,
    now,
  };

  let summarizer = SummarizerParams {
    api_key: cli.api_key,
    base_url: cli.api_base_url,
    model: cli.model,
  };

  Ok(EffectiveConfig {
    request,
    summarizer,
    format: cli.format,
    check_summarizer: cli.check_summarizer,
  })
}
