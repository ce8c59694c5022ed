//! Terminal classification of a single lookup.

use std::fmt;

/// What a lookup resolved to. Exactly one per response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service returned at least one product; carries the first title.
    Found { title: String },

    /// The service answered 200 with an empty product list.
    NotFound,

    /// The service answered with a status other than 200.
    RequestFailed { status: u16 },
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found { title } => write!(f, "Product found: {title}"),
            LookupOutcome::NotFound => write!(f, "Product not found."),
            LookupOutcome::RequestFailed { status } => {
                write!(f, "API request failed with status code: {status}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_renders_title() {
        let outcome = LookupOutcome::Found {
            title: "Choco Bar".to_string(),
        };
        assert_eq!(outcome.to_string(), "Product found: Choco Bar");
    }

    #[test]
    fn not_found_renders_literal() {
        assert_eq!(LookupOutcome::NotFound.to_string(), "Product not found.");
    }

    #[test]
    fn request_failed_renders_status() {
        let outcome = LookupOutcome::RequestFailed { status: 404 };
        assert_eq!(
            outcome.to_string(),
            "API request failed with status code: 404"
        );
    }
}
