//! Multi-step registration wizard state.

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
    Credentials,
    SynagogueDetails,
    Terms,
    Finish,
}

impl RegistrationStep {
    pub const ALL: [RegistrationStep; 4] = [
        RegistrationStep::Credentials,
        RegistrationStep::SynagogueDetails,
        RegistrationStep::Terms,
        RegistrationStep::Finish,
    ];

    /// Localized step title.
    pub fn title(self) -> &'static str {
        match self {
            RegistrationStep::Credentials => "פרטי התחברות",
            RegistrationStep::SynagogueDetails => "פרטי בית הכנסת",
            RegistrationStep::Terms => "אישור התנאים",
            RegistrationStep::Finish => "סיום",
        }
    }
}

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub synagogue_name: String,
    pub synagogue_address: String,
    pub accepted_terms: bool,
}

impl RegistrationDraft {
    /// Whether the fields belonging to `step` are filled in.
    pub fn is_step_complete(&self, step: RegistrationStep) -> bool {
        match step {
            RegistrationStep::Credentials => {
                !self.username.trim().is_empty()
                    && self.email.contains('@')
                    && !self.password.is_empty()
            }
            RegistrationStep::SynagogueDetails => !self.synagogue_name.trim().is_empty(),
            RegistrationStep::Terms => self.accepted_terms,
            RegistrationStep::Finish => true,
        }
    }
}

/// Position in the wizard. Moves are clamped to the step range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationWizard {
    current: usize,
    completed: bool,
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> RegistrationStep {
        RegistrationStep::ALL[self.current]
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < RegistrationStep::ALL.len()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn next(self) -> Self {
        if !self.has_next() {
            return self;
        }
        Self {
            current: self.current + 1,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if !self.has_prev() {
            return self;
        }
        Self {
            current: self.current - 1,
            completed: false,
        }
    }

    /// Mark the wizard done. Only allowed from the last step.
    pub fn finish(self) -> Self {
        Self {
            completed: self.is_last(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_step() {
        let wizard = RegistrationWizard::new();

        assert_eq!(wizard.current(), RegistrationStep::Credentials);
        assert!(!wizard.has_prev());
        assert!(wizard.has_next());
        assert!(!wizard.is_completed());
    }

    #[test]
    fn test_next_stops_at_last_step() {
        let mut wizard = RegistrationWizard::new();
        for _ in 0..10 {
            wizard = wizard.next();
        }

        assert_eq!(wizard.current(), RegistrationStep::Finish);
        assert_eq!(wizard.index(), 3);
        assert!(wizard.is_last());
    }

    #[test]
    fn test_prev_stops_at_first_step() {
        let wizard = RegistrationWizard::new().next().prev().prev();

        assert_eq!(wizard.index(), 0);
    }

    #[test]
    fn test_finish_only_from_last_step() {
        let early = RegistrationWizard::new().next().finish();
        assert!(!early.is_completed());

        let done = RegistrationWizard::new().next().next().next().finish();
        assert!(done.is_completed());

        assert!(!done.prev().is_completed());
    }

    #[test]
    fn test_step_titles() {
        let titles: Vec<&str> = RegistrationStep::ALL.iter().map(|s| s.title()).collect();

        assert_eq!(
            titles,
            vec!["פרטי התחברות", "פרטי בית הכנסת", "אישור התנאים", "סיום"]
        );
    }

    #[test]
    fn test_step_completion() {
        let mut draft = RegistrationDraft::default();
        assert!(!draft.is_step_complete(RegistrationStep::Credentials));
        assert!(draft.is_step_complete(RegistrationStep::Finish));

        draft.username = "gabbai".to_string();
        draft.email = "gabbai.example.com".to_string();
        draft.password = "secret".to_string();
        assert!(!draft.is_step_complete(RegistrationStep::Credentials));

        draft.email = "gabbai@example.com".to_string();
        assert!(draft.is_step_complete(RegistrationStep::Credentials));

        assert!(!draft.is_step_complete(RegistrationStep::SynagogueDetails));
        draft.synagogue_name = "Ohel Moshe".to_string();
        assert!(draft.is_step_complete(RegistrationStep::SynagogueDetails));

        assert!(!draft.is_step_complete(RegistrationStep::Terms));
        draft.accepted_terms = true;
        assert!(draft.is_step_complete(RegistrationStep::Terms));
    }
}
