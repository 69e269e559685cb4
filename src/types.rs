//! Core types for quarantine listings, details and release requests

use crate::error::QuarantineError;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quarantine bucket this tool works on
pub const SENDER_MATURITY: &str = "sender-maturity";

/// Quarantine type used for every call (policy, virus and outbreak)
pub const QUARANTINE_TYPE: &str = "pvo";

/// Page size requested from the listing endpoint. Only the first page is read.
pub const PAGE_LIMIT: usize = 100;

/// Longest listing window accepted on the command line (one leap year)
pub const MAX_WINDOW_HOURS: u32 = 24 * 366;

/// Prefix shared by every generated message body file
pub const BODY_FILE_PREFIX: &str = "message_body_";

/// Suffix shared by every generated message body file
pub const BODY_FILE_SUFFIX: &str = ".html";

/// Appliance message identifier (MID)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Mid(pub u64);

impl Mid {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for Mid {
    type Err = QuarantineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| QuarantineError::InvalidMid(s.to_string()))
    }
}

impl fmt::Display for Mid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator credentials, sent as basic auth on every request
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Listing window sent as `startDate`/`endDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `hours` ending at `now` truncated to the minute.
    ///
    /// The start saturates at the earliest representable instant.
    #[must_use]
    pub fn ending_at(now: DateTime<Utc>, hours: u32) -> Self {
        let end = now.duration_trunc(TimeDelta::minutes(1)).unwrap_or(now);
        let start = end
            .checked_sub_signed(TimeDelta::hours(i64::from(hours)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start, end }
    }

    /// Window of `hours` ending now
    #[must_use]
    pub fn last_hours(hours: u32) -> Self {
        Self::ending_at(Utc::now(), hours)
    }

    #[must_use]
    pub fn start_param(&self) -> String {
        format_timestamp(self.start)
    }

    #[must_use]
    pub fn end_param(&self) -> String {
        format_timestamp(self.end)
    }
}

fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// One row of the quarantine listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarantineEntry {
    /// Message id; entries without one cannot be looked up
    #[serde(default)]
    pub mid: Option<Mid>,

    #[serde(default)]
    pub attributes: EntryAttributes,
}

/// Attributes reported for a listed message
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryAttributes {
    #[serde(default)]
    pub sender: Option<String>,

    #[serde(default, rename = "recipient")]
    pub recipients: Option<Vec<String>>,

    #[serde(default)]
    pub subject: Option<String>,
}

impl QuarantineEntry {
    #[must_use]
    pub fn sender(&self) -> &str {
        self.attributes.sender.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.attributes.subject.as_deref().unwrap_or_default()
    }

    /// Recipients joined with `", "`
    #[must_use]
    pub fn recipients_joined(&self) -> String {
        self.attributes
            .recipients
            .as_deref()
            .unwrap_or_default()
            .join(", ")
    }
}

/// Detail lookup result for one message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuarantineDetail {
    /// Host taken from the first `Received: from` header line
    pub sender_detail: Option<String>,

    /// Quarantines holding the message, in response order
    pub quarantine_names: Vec<String>,

    /// Raw message body, if the appliance returned one
    pub message_body: Option<String>,
}

impl QuarantineDetail {
    /// True when the message is held in `sender-maturity` and nowhere else
    #[must_use]
    pub fn is_sender_maturity_only(&self) -> bool {
        matches!(self.quarantine_names.as_slice(), [name] if name == SENDER_MATURITY)
    }

    #[must_use]
    pub fn quarantine_reason(&self) -> String {
        self.quarantine_names.join(", ")
    }
}

/// Body of the release POST
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub action: &'static str,
    pub mids: Vec<Mid>,
    pub quarantine_name: &'static str,
    pub quarantine_type: &'static str,
}

impl ReleaseRequest {
    /// Release a single message from the sender-maturity quarantine
    #[must_use]
    pub fn sender_maturity(mid: Mid) -> Self {
        Self {
            action: "release",
            mids: vec![mid],
            quarantine_name: SENDER_MATURITY,
            quarantine_type: QUARANTINE_TYPE,
        }
    }
}

/// File name used for a reported message body.
///
/// Path separators in the sender are replaced so the file stays in the
/// output directory.
#[must_use]
pub fn body_file_name(sender: &str, mid: Mid) -> String {
    let sender: String = sender
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{BODY_FILE_PREFIX}{sender}_{mid}{BODY_FILE_SUFFIX}")
}

/// Whether `name` looks like a file produced by [`body_file_name`]
#[must_use]
pub fn is_body_file_name(name: &str) -> bool {
    name.starts_with(BODY_FILE_PREFIX) && name.ends_with(BODY_FILE_SUFFIX)
}
