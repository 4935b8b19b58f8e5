//! How concurrent route responses compete for the results area.

use std::fmt;
use std::str::FromStr;

/// Policy for applying route responses that resolve out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Whichever response resolves last is displayed, even if it answers an
    /// older submission.
    #[default]
    LastResolved,
    /// A response is displayed only if no newer submission has written the
    /// results area yet.
    LatestSubmitted,
}

/// Error returned when parsing an unknown ordering name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response ordering {0:?} (expected \"last-resolved\" or \"latest-submitted\")")]
pub struct UnknownOrdering(String);

impl ResponseOrdering {
    /// Whether a response for `sequence` may replace content written by
    /// submission `shown`.
    pub fn accepts(self, sequence: u64, shown: u64) -> bool {
        match self {
            ResponseOrdering::LastResolved => true,
            ResponseOrdering::LatestSubmitted => sequence >= shown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseOrdering::LastResolved => "last-resolved",
            ResponseOrdering::LatestSubmitted => "latest-submitted",
        }
    }
}

impl FromStr for ResponseOrdering {
    type Err = UnknownOrdering;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-resolved" => Ok(ResponseOrdering::LastResolved),
            "latest-submitted" => Ok(ResponseOrdering::LatestSubmitted),
            _ => Err(UnknownOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for ResponseOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_resolved_accepts_everything() {
        let ordering = ResponseOrdering::LastResolved;
        assert!(ordering.accepts(1, 2));
        assert!(ordering.accepts(2, 1));
    }

    #[test]
    fn latest_submitted_rejects_older() {
        let ordering = ResponseOrdering::LatestSubmitted;
        assert!(!ordering.accepts(1, 2));
        assert!(ordering.accepts(2, 2));
        assert!(ordering.accepts(3, 2));
    }

    #[test]
    fn parse_names() {
        assert_eq!(
            "last-resolved".parse::<ResponseOrdering>(),
            Ok(ResponseOrdering::LastResolved)
        );
        assert_eq!(
            " Latest-Submitted ".parse::<ResponseOrdering>(),
            Ok(ResponseOrdering::LatestSubmitted)
        );
        assert!("newest".parse::<ResponseOrdering>().is_err());
        assert_eq!(ResponseOrdering::default().to_string(), "last-resolved");
    }
}
