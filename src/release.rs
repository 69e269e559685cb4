//! Releasing a single message from the sender-maturity quarantine

use crate::client::QuarantineApi;
use crate::error::Result;
use crate::types::{Mid, ReleaseRequest};
use std::io::Write;
use tracing::warn;

/// Result of a release attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Input was not a message id; nothing was sent
    InvalidInput(String),

    /// The appliance accepted the release
    Released { mid: Mid },

    /// The appliance answered with a non-200 status
    Failed { mid: Mid, status: u16 },
}

impl ReleaseOutcome {
    /// Status code returned by the appliance, if a request was made
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Released { .. } => Some(200),
            Self::Failed { status, .. } => Some(*status),
        }
    }
}

/// Parse the operator's input and ask the appliance to release that message
pub fn release_message<A, W>(api: &A, input: &str, out: &mut W) -> Result<ReleaseOutcome>
where
    A: QuarantineApi + ?Sized,
    W: Write,
{
    let mid: Mid = match input.parse() {
        Ok(mid) => mid,
        Err(e) => {
            warn!("{e}");
            writeln!(out, "Invalid MID value. Please enter a valid integer.")?;
            return Ok(ReleaseOutcome::InvalidInput(input.to_string()));
        }
    };

    let status = api.release(&ReleaseRequest::sender_maturity(mid))?;
    if status == 200 {
        writeln!(out, "Successfully released the email.")?;
        Ok(ReleaseOutcome::Released { mid })
    } else {
        writeln!(out, "Failed to release the email. Status code: {status}")?;
        Ok(ReleaseOutcome::Failed { mid, status })
    }
}
