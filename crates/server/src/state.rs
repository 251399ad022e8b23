//! Application state for the development server.

use roster_core::{MemberId, MemberRecord, SynagogueId, SynagogueSummary};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Demo roster used when no fixture file is given.
const DEMO_ROSTER: &str = include_str!("../fixtures/demo_roster.json");

/// Errors from loading a roster fixture.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate synagogue id {0}")]
    DuplicateSynagogue(SynagogueId),

    #[error("duplicate member id {0}")]
    DuplicateMember(MemberId),
}

/// On-disk fixture layout.
#[derive(Debug, Deserialize)]
struct RosterFixture {
    synagogues: Vec<SynagogueFixture>,
}

#[derive(Debug, Deserialize)]
struct SynagogueFixture {
    id: SynagogueId,
    name: String,
    #[serde(default)]
    members: Vec<MemberRecord>,
}

/// Read-only roster: synagogues and their members.
#[derive(Debug, Default)]
pub struct Roster {
    synagogues: Vec<SynagogueSummary>,
    members: HashMap<SynagogueId, Vec<MemberRecord>>,
}

impl Roster {
    /// Parse a fixture. Member ids must be unique across the whole roster.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let fixture: RosterFixture = serde_json::from_str(json)?;

        let mut roster = Roster::default();
        let mut member_ids = HashSet::new();

        for synagogue in fixture.synagogues {
            if roster.members.contains_key(&synagogue.id) {
                return Err(RosterError::DuplicateSynagogue(synagogue.id));
            }
            for member in &synagogue.members {
                if !member_ids.insert(member.id) {
                    return Err(RosterError::DuplicateMember(member.id));
                }
            }

            roster.synagogues.push(SynagogueSummary {
                id: synagogue.id,
                name: synagogue.name,
            });
            roster.members.insert(synagogue.id, synagogue.members);
        }

        Ok(roster)
    }

    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The bundled demo roster.
    pub fn builtin() -> Result<Self, RosterError> {
        Self::from_json(DEMO_ROSTER)
    }

    pub fn synagogues(&self) -> &[SynagogueSummary] {
        &self.synagogues
    }

    /// Members of one synagogue, or `None` for an unknown id.
    pub fn members_of(&self, synagogue: SynagogueId) -> Option<&[MemberRecord]> {
        self.members.get(&synagogue).map(Vec::as_slice)
    }

    /// Every member, grouped in synagogue order.
    pub fn all_members(&self) -> Vec<MemberRecord> {
        self.synagogues
            .iter()
            .filter_map(|s| self.members.get(&s.id))
            .flatten()
            .cloned()
            .collect()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
    /// Issued login tokens and the username each was issued to.
    sessions: Arc<RwLock<HashMap<Uuid, String>>>,
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issue a new session token.
    pub async fn create_session(&self, username: String) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.write().await.insert(token, username);
        token
    }

    /// Revoke a token, returning the username it was issued to.
    pub async fn end_session(&self, token: Uuid) -> Option<String> {
        self.sessions.write().await.remove(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_SHULS: &str = r#"{
        "synagogues": [
            {"id": 1, "name": "Ohel Moshe", "members": [{"id": 1}, {"id": 2}]},
            {"id": 2, "name": "Heichal Shlomo", "members": [{"id": 3}]},
            {"id": 3, "name": "Empty"}
        ]
    }"#;

    #[test]
    fn test_roster_from_json() {
        let roster = Roster::from_json(TWO_SHULS).unwrap();

        assert_eq!(roster.synagogues().len(), 3);
        assert_eq!(roster.members_of(1).unwrap().len(), 2);
        assert_eq!(roster.members_of(3).unwrap().len(), 0);
        assert!(roster.members_of(99).is_none());

        let ids: Vec<MemberId> = roster.all_members().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let json = r#"{"synagogues": [
            {"id": 1, "name": "A", "members": [{"id": 1}]},
            {"id": 2, "name": "B", "members": [{"id": 1}]}
        ]}"#;

        assert!(matches!(
            Roster::from_json(json),
            Err(RosterError::DuplicateMember(1))
        ));
    }

    #[test]
    fn test_duplicate_synagogue_rejected() {
        let json = r#"{"synagogues": [{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]}"#;

        assert!(matches!(
            Roster::from_json(json),
            Err(RosterError::DuplicateSynagogue(1))
        ));
    }

    #[test]
    fn test_builtin_roster_is_valid() {
        let roster = Roster::builtin().unwrap();

        assert!(!roster.synagogues().is_empty());
        assert!(!roster.all_members().is_empty());
    }

    #[test]
    fn test_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_SHULS.as_bytes()).unwrap();

        let roster = Roster::from_file(file.path()).unwrap();

        assert_eq!(roster.synagogues()[0].name, "Ohel Moshe");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = Roster::from_file(&path).unwrap_err();

        assert!(matches!(err, RosterError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_session_creation() {
        let state = AppState::new(Roster::default());

        let token = state.create_session("gabbai".to_string()).await;

        assert!(state.end_session(Uuid::new_v4()).await.is_none());
        assert_eq!(state.end_session(token).await.as_deref(), Some("gabbai"));
        assert!(state.end_session(token).await.is_none());
    }
}
