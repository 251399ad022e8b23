//! State behind the member list view.
//!
//! The view renders from a [`LoadState`] it does not own. A fetch is started
//! once per mount and may only write its result back while the mount that
//! started it is still current; [`Liveness`] tracks that with a generation
//! counter rather than a boolean so a quick unmount/remount cannot let a
//! stale response through.

use std::cell::Cell;
use std::rc::Rc;

use crate::fetch::{FetchOutcome, MemberSource};
use crate::member::{MemberRecord, SynagogueId};

/// How a completed load went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Ok,
    Empty,
    /// The fetch failed; the message is for display only
    Failed(String),
}

/// Member list view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded {
        members: Vec<MemberRecord>,
        status: LoadStatus,
    },
}

impl LoadState {
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        let status = outcome.status();
        LoadState::Loaded {
            members: outcome.into_members(),
            status,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded records; empty while loading.
    pub fn members(&self) -> &[MemberRecord] {
        match self {
            LoadState::Loading => &[],
            LoadState::Loaded { members, .. } => members,
        }
    }

    pub fn status(&self) -> Option<&LoadStatus> {
        match self {
            LoadState::Loading => None,
            LoadState::Loaded { status, .. } => Some(status),
        }
    }
}

/// Mount generation counter owned by one view instance.
#[derive(Debug, Clone, Default)]
pub struct Liveness {
    generation: Rc<Cell<u64>>,
}

impl Liveness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new mount, invalidating every earlier ticket.
    pub fn mount(&self) -> MountTicket {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        MountTicket {
            generation,
            current: Rc::clone(&self.generation),
        }
    }

    /// Tear down the current mount.
    pub fn unmount(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

/// Proof that a fetch was started by a particular mount.
#[derive(Debug, Clone)]
pub struct MountTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl MountTicket {
    /// Whether the mount that issued this ticket is still the current one.
    pub fn is_live(&self) -> bool {
        self.current.get() == self.generation
    }
}

/// Fetch the member list for one mount.
///
/// Returns the state to apply, or `None` when the view was torn down (or
/// remounted) while the request was in flight.
pub async fn load_members<S: MemberSource>(
    source: &S,
    synagogue: Option<SynagogueId>,
    ticket: &MountTicket,
) -> Option<LoadState> {
    let outcome = source.fetch_members(synagogue).await;

    if !ticket.is_live() {
        log::debug!("Discarding member list fetched for an unmounted view");
        return None;
    }

    Some(LoadState::from_outcome(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::test_log;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Source that records each call and answers with a fixed outcome.
    struct FixedSource {
        outcome: FetchOutcome,
        calls: RefCell<Vec<Option<SynagogueId>>>,
    }

    impl FixedSource {
        fn new(outcome: FetchOutcome) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MemberSource for FixedSource {
        async fn fetch_members(&self, synagogue: Option<SynagogueId>) -> FetchOutcome {
            self.calls.borrow_mut().push(synagogue);
            self.outcome.clone()
        }
    }

    /// Source whose response is released by the test.
    struct GatedSource {
        gate: RefCell<Option<oneshot::Receiver<FetchOutcome>>>,
    }

    impl MemberSource for GatedSource {
        async fn fetch_members(&self, _synagogue: Option<SynagogueId>) -> FetchOutcome {
            let receiver = self.gate.borrow_mut().take();
            match receiver {
                Some(receiver) => receiver.await.unwrap_or(FetchOutcome::Empty),
                None => FetchOutcome::Empty,
            }
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = LoadState::default();

        assert!(state.is_loading());
        assert!(state.members().is_empty());
        assert_eq!(state.status(), None);
    }

    #[test]
    fn test_ticket_lifecycle() {
        let liveness = Liveness::new();

        let first = liveness.mount();
        assert!(first.is_live());

        liveness.unmount();
        assert!(!first.is_live());

        let second = liveness.mount();
        assert!(second.is_live());
        assert!(!first.is_live());
    }

    #[test]
    fn test_remount_invalidates_previous_ticket() {
        let liveness = Liveness::new();

        let first = liveness.mount();
        let second = liveness.mount();

        assert!(!first.is_live());
        assert!(second.is_live());
    }

    #[test]
    fn test_views_do_not_share_liveness() {
        let a = Liveness::new();
        let b = Liveness::new();

        let ticket = a.mount();
        b.mount();
        b.unmount();

        assert!(ticket.is_live());
    }

    #[test]
    fn test_load_applies_fetched_members() {
        let source = FixedSource::new(FetchOutcome::Members(vec![MemberRecord::new(1)]));
        let liveness = Liveness::new();
        let ticket = liveness.mount();

        let state = block_on(load_members(&source, None, &ticket)).unwrap();

        assert_eq!(state.members().len(), 1);
        assert_eq!(state.status(), Some(&LoadStatus::Ok));
    }

    #[test]
    fn test_load_passes_synagogue_through() {
        let source = FixedSource::new(FetchOutcome::Empty);
        let ticket = Liveness::new().mount();

        block_on(load_members(&source, Some(3), &ticket));

        assert_eq!(source.calls.borrow().as_slice(), &[Some(3)]);
    }

    #[test]
    fn test_empty_fetch_ends_loaded() {
        let source = FixedSource::new(FetchOutcome::Empty);
        let ticket = Liveness::new().mount();

        let state = block_on(load_members(&source, None, &ticket)).unwrap();

        assert!(!state.is_loading());
        assert!(state.members().is_empty());
        assert_eq!(state.status(), Some(&LoadStatus::Empty));
    }

    #[test]
    fn test_failed_fetch_ends_loaded_with_nothing() {
        test_log::capture();

        let result = Err(FetchError::Transport {
            url: "/api/members".to_string(),
            message: "offline".to_string(),
        });
        let source = FixedSource::new(FetchOutcome::from_result(result));
        let ticket = Liveness::new().mount();

        let state = block_on(load_members(&source, None, &ticket)).unwrap();

        assert!(!state.is_loading());
        assert!(state.members().is_empty());
        assert!(matches!(state.status(), Some(LoadStatus::Failed(_))));
        assert_eq!(test_log::take_errors().len(), 1);
    }

    #[test]
    fn test_response_after_unmount_is_discarded() {
        let (sender, receiver) = oneshot::channel();
        let source = GatedSource {
            gate: RefCell::new(Some(receiver)),
        };
        let liveness = Liveness::new();
        let ticket = liveness.mount();

        let pending = load_members(&source, None, &ticket);
        liveness.unmount();
        sender
            .send(FetchOutcome::Members(vec![MemberRecord::new(1)]))
            .unwrap();

        assert_eq!(block_on(pending), None);
    }

    #[test]
    fn test_response_after_remount_is_discarded() {
        let (sender, receiver) = oneshot::channel();
        let source = GatedSource {
            gate: RefCell::new(Some(receiver)),
        };
        let liveness = Liveness::new();
        let stale = liveness.mount();

        let pending = load_members(&source, None, &stale);
        liveness.unmount();
        let fresh = liveness.mount();
        sender.send(FetchOutcome::Empty).unwrap();

        assert_eq!(block_on(pending), None);
        assert!(fresh.is_live());
    }
}
