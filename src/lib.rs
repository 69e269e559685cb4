// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Sender-maturity quarantine reviewer
//!
//! Talks to a security management appliance's quarantine REST API, reports
//! messages held only in the `sender-maturity` quarantine, saves their bodies
//! as HTML files and releases a chosen message.
//!
//! # Example
//!
//! ```no_run
//! use sma_quarantine::{ClientOptions, Credentials, SmaClient, TimeWindow, report_all};
//! use std::path::Path;
//!
//! let client = SmaClient::new(
//!     "https://sma.example.com",
//!     Credentials::new("admin", "secret"),
//!     &ClientOptions::default(),
//! )?;
//! let window = TimeWindow::last_hours(24);
//! let appliances = vec!["192.0.2.10".to_string()];
//! let summary = report_all(&client, &window, &appliances, Path::new("."), &mut std::io::stdout())?;
//! println!("{} messages reported", summary.reported.len());
//! # Ok::<(), sma_quarantine::QuarantineError>(())
//! ```

mod cleanup;
mod client;
mod config;
mod error;
mod parser;
mod prompt;
mod release;
mod report;
mod types;

pub use cleanup::{body_files, cleanup_files};
pub use client::{ClientOptions, QuarantineApi, SmaClient, details_url, listing_url, release_url};
pub use config::Cli;
pub use error::{QuarantineError, Result};
pub use parser::{extract_sender_detail, parse_details, parse_listing};
pub use prompt::{is_quit, prompt_line};
pub use release::{ReleaseOutcome, release_message};
pub use report::{ReportSummary, report_all, report_appliance, write_body_file};
pub use types::*;
