//! Core types for the yaamod synagogue roster front-end.
//!
//! This crate holds everything that does not need a browser: the member
//! record model, the mapping from a record to table cells, the fetch outcome
//! types, and the state behind the member list view.

pub mod api;
pub mod auth;
pub mod fetch;
pub mod member;
pub mod register;
pub mod row;
pub mod view;

pub use api::{ApiConfig, ApiError, DEFAULT_API_BASE};
pub use auth::{Credentials, CredentialsError, SessionToken};
pub use fetch::{FetchError, FetchOutcome, MemberSource};
pub use member::{MemberId, MemberRecord, PersonRef, SynagogueId, SynagogueSummary};
pub use register::{RegistrationDraft, RegistrationStep, RegistrationWizard};
pub use row::{COLUMN_COUNT, Cell, Column, PLACEHOLDER, PersonClick, Relation, member_cells};
pub use view::{Liveness, LoadState, LoadStatus, MountTicket, load_members};

#[cfg(test)]
pub(crate) mod test_log;
