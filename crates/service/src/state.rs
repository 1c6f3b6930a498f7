use vantage_dash_core::{
    Aggregation, DocSkillSummary, ReviewSummary, Session, Skill, TransactionRecord, total_pages,
};

/// Everything the dashboard remembers between requests.
///
/// Created empty at startup, mutated by each action, reset on logout. Derived
/// data is always replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub session: Option<Session>,
    pub skills: Vec<Skill>,
    pub records: Vec<TransactionRecord>,
    pub review_summary: ReviewSummary,
    pub docskill_summary: DocSkillSummary,
    pub last_error: Option<String>,
}

impl DashboardState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Connected vendor host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.host.as_str())
    }

    /// Skills offered in the fetch form.
    pub fn process_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(|s| s.is_process())
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(&self.records)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.last_error = if message.is_empty() { None } else { Some(message) };
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(crate) fn apply(&mut self, aggregation: Aggregation) {
        self.records = aggregation.records;
        self.review_summary = aggregation.review_summary;
        self.docskill_summary = aggregation.docskill_summary;
    }

    pub(crate) fn clear_results(&mut self) {
        self.records.clear();
        self.review_summary = ReviewSummary::default();
        self.docskill_summary.clear();
    }

    /// Back to the unauthenticated startup state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_dash_core::SecretString;

    #[test]
    fn test_reset_clears_everything() {
        let mut state = DashboardState {
            session: Session::new("host", SecretString::new("tok")).ok(),
            skills: vec![Skill::default()],
            records: vec![TransactionRecord { page_count: 3, ..TransactionRecord::default() }],
            review_summary: ReviewSummary { with_manual_review: 1, straight_through: 0 },
            ..DashboardState::default()
        };
        state.set_error("boom");
        assert!(state.is_authenticated());
        assert_eq!(state.total_pages(), 3);

        state.reset();
        assert!(!state.is_authenticated());
        assert!(state.skills.is_empty());
        assert!(state.records.is_empty());
        assert_eq!(state.review_summary.total(), 0);
        assert!(state.docskill_summary.is_empty());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_empty_error_clears_banner() {
        let mut state = DashboardState::default();
        state.set_error("x");
        state.set_error("");
        assert!(state.last_error.is_none());
    }
}
