//! Turn a user's Gitea push activity into a daily or weekly work report.
//!
//! The pipeline is: page through the activity feed until the window cutoff
//! ([`retrieval`]), keep the user's own pushes ([`extract`]), order the
//! commit records ([`aggregate`]), render a prompt ([`prompt`]) and ask a
//! chat-completion service for the summary ([`summarizer`]).
//! [`report::generate_report`] runs all of it for one request.

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod extract;
pub mod feed;
pub mod logging;
pub mod model;
pub mod params;
pub mod prompt;
pub mod report;
pub mod retrieval;
pub mod runner;
pub mod summarizer;
pub mod util;
pub mod window;

pub use error::{PayloadError, ReportError};
pub use model::{CommitRecord, GeneratedReport, ReportKind};
pub use params::{FeedParams, PagingPolicy, SummarizerParams};
pub use report::{generate_report, generate_report_with, ReportRequest};
