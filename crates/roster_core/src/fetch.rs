//! Outcome of fetching the member list, and the source abstraction behind it.

use thiserror::Error;

use crate::member::{MemberRecord, SynagogueId};
use crate::view::LoadStatus;

/// Why a member fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Result of one fetch, with success, empty and failure kept apart.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// At least one record
    Members(Vec<MemberRecord>),
    /// Successful response with no records
    Empty,
    Failed(FetchError),
}

impl FetchOutcome {
    /// Classify a raw client result. Failures are logged here, once.
    pub fn from_result(result: Result<Vec<MemberRecord>, FetchError>) -> Self {
        match result {
            Ok(members) if members.is_empty() => FetchOutcome::Empty,
            Ok(members) => FetchOutcome::Members(members),
            Err(err) => {
                log::error!("Failed to fetch members: {err}");
                FetchOutcome::Failed(err)
            }
        }
    }

    pub fn status(&self) -> LoadStatus {
        match self {
            FetchOutcome::Members(_) => LoadStatus::Ok,
            FetchOutcome::Empty => LoadStatus::Empty,
            FetchOutcome::Failed(err) => LoadStatus::Failed(err.to_string()),
        }
    }

    /// The fetched records; empty for both `Empty` and `Failed`.
    pub fn into_members(self) -> Vec<MemberRecord> {
        match self {
            FetchOutcome::Members(members) => members,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Anything that can produce the member list of a synagogue.
///
/// Implementations never fail outright: errors come back as
/// [`FetchOutcome::Failed`].
#[allow(async_fn_in_trait)]
pub trait MemberSource {
    /// Fetch members, scoped to one synagogue when `synagogue` is given.
    async fn fetch_members(&self, synagogue: Option<SynagogueId>) -> FetchOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log;

    #[test]
    fn test_empty_result_is_empty() {
        let outcome = FetchOutcome::from_result(Ok(vec![]));

        assert_eq!(outcome, FetchOutcome::Empty);
        assert_eq!(outcome.status(), LoadStatus::Empty);
        assert!(outcome.into_members().is_empty());
    }

    #[test]
    fn test_members_result() {
        let outcome = FetchOutcome::from_result(Ok(vec![MemberRecord::new(1)]));

        assert_eq!(outcome.status(), LoadStatus::Ok);
        assert_eq!(outcome.into_members().len(), 1);
    }

    #[test]
    fn test_failure_is_logged_once_and_yields_nothing() {
        test_log::capture();

        let err = FetchError::Status {
            url: "/api/members".to_string(),
            status: 500,
        };
        let outcome = FetchOutcome::from_result(Err(err.clone()));

        let errors = test_log::take_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("HTTP 500"));

        assert_eq!(
            outcome.status(),
            LoadStatus::Failed("/api/members responded with HTTP 500".to_string())
        );
        assert!(outcome.into_members().is_empty());
    }

    #[test]
    fn test_error_messages() {
        let transport = FetchError::Transport {
            url: "/api/members".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            transport.to_string(),
            "request to /api/members failed: connection refused"
        );

        let decode = FetchError::Decode("expected an array".to_string());
        assert_eq!(
            decode.to_string(),
            "could not decode response: expected an array"
        );
    }
}
