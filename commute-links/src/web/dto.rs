//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::LinkBoard;

/// Query for the visibility-change refresh endpoint.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    /// Document visibility state (`visible` or `hidden`); absent means a
    /// plain refresh
    pub visibility: Option<String>,
}

/// JSON form of a refresh.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    /// Displayed time, formatted for the heading
    pub time: String,

    /// Time of the clock reading the links were built from (ISO 8601)
    pub generated_at: String,

    /// Links for both directions
    pub links: LinkBoard,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
