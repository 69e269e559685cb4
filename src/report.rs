//! Filtering and reporting of sender-maturity messages

use crate::client::QuarantineApi;
use crate::error::{QuarantineError, Result};
use crate::types::{Mid, PAGE_LIMIT, QuarantineDetail, QuarantineEntry, TimeWindow, body_file_name};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// What one reporting pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Entries returned by the listing
    pub listed: usize,

    /// Messages that passed the sender-maturity filter, in listing order
    pub reported: Vec<Mid>,

    /// Body files written
    pub files: Vec<PathBuf>,

    /// The listing filled a whole page, so later results were not fetched
    pub truncated: bool,
}

impl ReportSummary {
    fn merge(&mut self, other: Self) {
        self.listed += other.listed;
        self.reported.extend(other.reported);
        self.files.extend(other.files);
        self.truncated |= other.truncated;
    }
}

/// Report every configured appliance in order
pub fn report_all<A, W>(
    api: &A,
    window: &TimeWindow,
    appliances: &[String],
    output_dir: &Path,
    out: &mut W,
) -> Result<ReportSummary>
where
    A: QuarantineApi + ?Sized,
    W: Write,
{
    let mut summary = ReportSummary::default();
    for esa in appliances {
        summary.merge(report_appliance(api, window, esa, output_dir, out)?);
    }
    Ok(summary)
}

/// List one appliance's quarantine and print the messages held only for
/// sender maturity.
///
/// A refused or failed listing is printed and yields an empty summary.
pub fn report_appliance<A, W>(
    api: &A,
    window: &TimeWindow,
    esa: &str,
    output_dir: &Path,
    out: &mut W,
) -> Result<ReportSummary>
where
    A: QuarantineApi + ?Sized,
    W: Write,
{
    info!("Listing sender-maturity quarantine for {esa}");

    let entries = match api.list_messages(window, esa) {
        Ok(entries) => entries,
        Err(QuarantineError::Status(code)) => {
            writeln!(out, "Failed to fetch data: {code}")?;
            return Ok(ReportSummary::default());
        }
        Err(QuarantineError::Http(e)) => {
            warn!("Listing for {esa} failed: {e}");
            writeln!(out, "Failed to fetch data: {e}")?;
            return Ok(ReportSummary::default());
        }
        Err(e) => return Err(e),
    };

    let mut summary = ReportSummary {
        listed: entries.len(),
        truncated: entries.len() >= PAGE_LIMIT,
        ..ReportSummary::default()
    };

    if summary.truncated {
        warn!("Listing for {esa} returned a full page of {PAGE_LIMIT}; later results are not fetched");
        writeln!(
            out,
            "Note: {esa} returned {PAGE_LIMIT} messages, further messages may exist beyond the first page."
        )?;
    }

    for entry in &entries {
        let Some(mid) = entry.mid else {
            warn!("Skipping listing entry without a mid from {esa}");
            continue;
        };

        let detail = api.message_details(mid)?;
        if !detail.is_sender_maturity_only() {
            debug!("Skipping {mid}: held in {:?}", detail.quarantine_names);
            continue;
        }

        print_entry(out, entry, mid, &detail)?;
        if let Some(body) = &detail.message_body {
            let path = write_body_file(output_dir, entry.sender(), mid, body)?;
            summary.files.push(path);
        }
        writeln!(out, "-------")?;

        summary.reported.push(mid);
    }

    Ok(summary)
}

fn print_entry<W: Write>(
    out: &mut W,
    entry: &QuarantineEntry,
    mid: Mid,
    detail: &QuarantineDetail,
) -> Result<()> {
    writeln!(out, "Sender: {}", entry.sender())?;
    writeln!(out, "Recipient/s: {}", entry.recipients_joined())?;
    writeln!(out, "Subject: {}", entry.subject())?;
    writeln!(out, "Mail id: {mid}")?;
    writeln!(
        out,
        "Sender Detail from email header: {}",
        detail.sender_detail.as_deref().unwrap_or("None")
    )?;
    writeln!(out, "Quarantine Reason: {}", detail.quarantine_reason())?;
    Ok(())
}

/// Write a message body wrapped in a minimal HTML page
pub fn write_body_file(output_dir: &Path, sender: &str, mid: Mid, body: &str) -> Result<PathBuf> {
    let path = output_dir.join(body_file_name(sender, mid));
    fs::write(&path, format!("<html><body><pre>\n{body}\n</pre></body></html>"))?;
    debug!("Wrote {}", path.display());
    Ok(path)
}
