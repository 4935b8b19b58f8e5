//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// Route form submission.
///
/// A field is missing when its control has no value, e.g. a selector with
/// no options.
#[derive(Debug, Default, Deserialize)]
pub struct FindRequest {
    /// Origin stop ID
    pub from: Option<String>,

    /// Destination stop ID
    pub to: Option<String>,

    /// Departure time as typed
    pub time: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
