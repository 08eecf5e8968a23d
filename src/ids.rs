//! Per-request correlation ids.
//!
//! Every [`Request`](crate::dispatcher::Request) carries a [`RequestId`]; the
//! router and the stock middleware log it as `request_id` on every event, so
//! one request's route match, middleware decisions and not-found fallback can
//! be grouped together. A transport that already has an id (the CLI reads
//! `x-request-id`) passes it through instead of minting a new one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// ULID identifying one routed request
///
/// ULIDs sort by creation time, so ids in a log stream line up with arrival
/// order.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RequestId(pub ulid::Ulid);

impl RequestId {
    /// A fresh id for a request that arrived without one
    #[must_use]
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    /// Reuse the id a client supplied, or mint one when it is absent or not
    /// a ULID
    ///
    /// Surrounding whitespace in the header value is ignored.
    #[must_use]
    pub fn from_header_or_new(header_value: Option<&str>) -> Self {
        match header_value.map(str::trim).map(str::parse::<RequestId>) {
            Some(Ok(id)) => id,
            _ => Self::new(),
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for RequestId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ulid::Ulid::from_string(s).map(Self)
    }
}
