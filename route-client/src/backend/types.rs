//! Wire types for the routing backend's JSON API.

use std::fmt;

use serde::Deserialize;

/// Opaque stop identifier.
///
/// The backend may send identifiers as JSON strings or integers. Both are
/// accepted and kept as text, since the client only ever echoes them back.
///
/// ```
/// use route_client::backend::StopId;
///
/// let from_int: StopId = serde_json::from_str("42").unwrap();
/// let from_str: StopId = serde_json::from_str("\"42\"").unwrap();
/// assert_eq!(from_int, from_str);
/// assert_eq!(from_int.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawStopId")]
pub struct StopId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStopId {
    Text(String),
    Integer(i64),
}

impl From<RawStopId> for StopId {
    fn from(raw: RawStopId) -> Self {
        match raw {
            RawStopId::Text(s) => StopId(s),
            RawStopId::Integer(n) => StopId(n.to_string()),
        }
    }
}

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named transit stop from `GET /api/stops`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StopId::new(id),
            name: name.into(),
        }
    }
}

/// Parameters of one `GET /api/route` request.
///
/// Built fresh from the control values on every submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub from: StopId,
    pub to: StopId,
    /// Departure time exactly as entered (normally "HH:MM").
    pub time: String,
}

impl RouteQuery {
    pub fn new(from: StopId, to: StopId, time: impl Into<String>) -> Self {
        Self {
            from,
            to,
            time: time.into(),
        }
    }

    /// Query-string pairs in the order the backend documents them.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("from", self.from.as_str()),
            ("to", self.to.as_str()),
            ("time", self.time.as_str()),
        ]
    }
}

/// One route option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteResult {
    pub arrival_time: String,
    pub trips: u32,
}

impl RouteResult {
    pub fn new(arrival_time: impl Into<String>, trips: u32) -> Self {
        Self {
            arrival_time: arrival_time.into(),
            trips,
        }
    }
}

/// Backend answer to a [`RouteQuery`].
///
/// `from` and `to` are the backend's display labels for the endpoints, not
/// the identifiers that were sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    /// Missing or `null` means no route was found.
    #[serde(default)]
    pub results: Option<Vec<RouteResult>>,
}

impl RouteResponse {
    pub fn new(from: impl Into<String>, to: impl Into<String>, results: Vec<RouteResult>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            results: Some(results),
        }
    }

    /// Route options in backend order; empty when none were returned.
    pub fn options(&self) -> &[RouteResult] {
        self.results.as_deref().unwrap_or_default()
    }
}
