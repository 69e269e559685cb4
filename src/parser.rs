//! Decoding of appliance JSON responses

use crate::error::Result;
use crate::types::{QuarantineDetail, QuarantineEntry};
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

static RECEIVED_FROM_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"Received: from (.*?)<br>").unwrap());

#[derive(Debug, Deserialize)]
struct ListingResponse {
    data: Vec<QuarantineEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    data: Option<DetailData>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailData {
    #[serde(default)]
    attributes: Option<DetailAttributes>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailAttributes {
    #[serde(default)]
    quarantine_details: Option<Vec<QuarantineDetailEntry>>,
    #[serde(default)]
    headers: Option<String>,
    #[serde(default)]
    message_body: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuarantineDetailEntry {
    #[serde(default)]
    quarantine_name: Option<String>,
}

/// Parse the body of a quarantine listing.
///
/// A response without a `data` array is an error.
pub fn parse_listing(body: &str) -> Result<Vec<QuarantineEntry>> {
    let listing: ListingResponse = serde_json::from_str(body)?;
    debug!("Listing returned {} entries", listing.data.len());
    Ok(listing.data)
}

/// Parse the body of a message detail lookup.
///
/// Missing `data`, `attributes` or any field inside them yields an empty
/// value rather than an error.
pub fn parse_details(body: &str) -> Result<QuarantineDetail> {
    let response: DetailResponse = serde_json::from_str(body)?;
    let attributes = response
        .data
        .and_then(|data| data.attributes)
        .unwrap_or_default();

    let quarantine_names = attributes
        .quarantine_details
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| entry.quarantine_name)
        .filter(|name| !name.is_empty())
        .collect();

    let sender_detail = attributes
        .headers
        .as_deref()
        .and_then(extract_sender_detail);

    Ok(QuarantineDetail {
        sender_detail,
        quarantine_names,
        message_body: attributes.message_body,
    })
}

/// Host of the first `Received: from <host><br>` line in an HTML header blob
#[must_use]
pub fn extract_sender_detail(headers: &str) -> Option<String> {
    RECEIVED_FROM_REGEX
        .captures(headers)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
