//! HTTP access to the appliance quarantine API

use crate::error::{QuarantineError, Result};
use crate::parser::{parse_details, parse_listing};
use crate::types::{
    Credentials, Mid, PAGE_LIMIT, QUARANTINE_TYPE, QuarantineDetail, QuarantineEntry,
    ReleaseRequest, SENDER_MATURITY, TimeWindow,
};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};

const MESSAGES_PATH: &str = "sma/api/v2.0/quarantine/messages";
const DETAILS_PATH: &str = "sma/api/v2.0/quarantine/messages/details";

/// Operations the quarantine workflow needs from an appliance
pub trait QuarantineApi {
    /// First page of sender-maturity messages seen by `esa` inside `window`.
    ///
    /// A non-200 answer is reported as [`QuarantineError::Status`].
    fn list_messages(&self, window: &TimeWindow, esa: &str) -> Result<Vec<QuarantineEntry>>;

    /// Detail lookup for one message. Lookups the appliance refuses, or that
    /// fail in transport, come back as an empty [`QuarantineDetail`].
    fn message_details(&self, mid: Mid) -> Result<QuarantineDetail>;

    /// Submit a release request and return the HTTP status code.
    fn release(&self, request: &ReleaseRequest) -> Result<u16>;
}

/// Transport settings for [`SmaClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,

    /// Connect directly, ignoring `HTTP_PROXY`/`HTTPS_PROXY`
    pub bypass_proxy: bool,
}

/// Blocking client for the security management appliance REST API
#[derive(Debug)]
pub struct SmaClient {
    base_url: String,
    credentials: Credentials,
    http: Client,
}

impl SmaClient {
    pub fn new(base_url: &str, credentials: Credentials, options: &ClientOptions) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| QuarantineError::Config(format!("base URL {base_url:?}: {e}")))?;

        let mut builder = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs);
        if options.bypass_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;

        Ok(Self {
            base_url,
            credentials,
            http,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(CONTENT_TYPE, "application/json")
    }
}

impl QuarantineApi for SmaClient {
    fn list_messages(&self, window: &TimeWindow, esa: &str) -> Result<Vec<QuarantineEntry>> {
        let url = listing_url(&self.base_url, window, esa)?;
        debug!("GET {url}");

        let response = self.authorized(self.http.get(url)).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuarantineError::Status(status.as_u16()));
        }

        parse_listing(&response.text()?)
    }

    fn message_details(&self, mid: Mid) -> Result<QuarantineDetail> {
        let url = details_url(&self.base_url, mid)?;
        debug!("GET {url}");

        let response = match self.authorized(self.http.get(url)).send() {
            Ok(response) => response,
            Err(e) => {
                debug!("Detail lookup for {mid} failed: {e}");
                return Ok(QuarantineDetail::default());
            }
        };
        let status = response.status();
        if status != StatusCode::OK {
            debug!("Detail lookup for {mid} returned {status}");
            return Ok(QuarantineDetail::default());
        }

        match response.text() {
            Ok(body) => parse_details(&body),
            Err(e) => {
                debug!("Reading detail body for {mid} failed: {e}");
                Ok(QuarantineDetail::default())
            }
        }
    }

    fn release(&self, request: &ReleaseRequest) -> Result<u16> {
        let url = release_url(&self.base_url)?;
        info!("Releasing {:?} from {}", request.mids, request.quarantine_name);

        let response = self.authorized(self.http.post(url)).json(request).send()?;
        Ok(response.status().as_u16())
    }
}

/// Listing URL for one appliance, with parameters in the order the API
/// documents them
pub fn listing_url(base_url: &str, window: &TimeWindow, esa: &str) -> Result<Url> {
    let limit = PAGE_LIMIT.to_string();
    let end = window.end_param();
    let start = window.start_param();
    build_url(
        base_url,
        MESSAGES_PATH,
        &[
            ("endDate", end.as_str()),
            ("limit", limit.as_str()),
            ("offset", "0"),
            ("orderBy", "sender"),
            ("orderDir", "desc"),
            ("quarantineType", QUARANTINE_TYPE),
            ("quarantines", SENDER_MATURITY),
            ("startDate", start.as_str()),
            ("originatingEsaIp", esa),
        ],
    )
}

pub fn details_url(base_url: &str, mid: Mid) -> Result<Url> {
    let mid = mid.to_string();
    build_url(
        base_url,
        DETAILS_PATH,
        &[("quarantineType", QUARANTINE_TYPE), ("mid", mid.as_str())],
    )
}

pub fn release_url(base_url: &str) -> Result<Url> {
    build_url(base_url, MESSAGES_PATH, &[])
}

fn build_url(base_url: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let raw = format!("{}/{path}", base_url.trim_end_matches('/'));
    let url = if params.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, params)
    };
    url.map_err(|e| QuarantineError::Config(format!("cannot build URL from {raw:?}: {e}")))
}
