use std::rc::Rc;

use yew::Reducible;

/// Shared invalidation counter. Views take its value as an effect dependency,
/// so every bump is one full reload per view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshSignal(u64);

impl RefreshSignal {
    pub fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub refresh: RefreshSignal,
    pub last_upload_count: Option<usize>,
}

impl DashboardState {
    pub fn record_upload(&mut self, count: usize) {
        self.last_upload_count = Some(count);
        self.refresh.bump();
        log::info!(
            "{} transactions uploaded, refresh #{}",
            count,
            self.refresh.value()
        );
    }

    pub fn badge(&self) -> Option<String> {
        self.last_upload_count
            .map(|count| format!("{} transactions uploaded", count))
    }
}

pub enum DashboardAction {
    UploadCompleted(usize),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DashboardAction::UploadCompleted(count) => {
                let mut next = (*self).clone();
                next.record_upload(count);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_bumps_signal_by_exactly_one() {
        let mut state = DashboardState::default();
        assert_eq!(state.badge(), None);

        state.record_upload(1);
        assert_eq!(state.refresh.value(), 1);
        assert_eq!(state.badge().as_deref(), Some("1 transactions uploaded"));

        state.record_upload(12);
        assert_eq!(state.refresh.value(), 2);
        assert_eq!(state.badge().as_deref(), Some("12 transactions uploaded"));
    }

    #[test]
    fn reducer_applies_to_latest_state() {
        let state = Rc::new(DashboardState::default());
        let state = state.reduce(DashboardAction::UploadCompleted(3));
        let state = state.reduce(DashboardAction::UploadCompleted(5));
        assert_eq!(state.refresh.value(), 2);
        assert_eq!(state.last_upload_count, Some(5));
    }

    #[test]
    fn signal_never_goes_backwards() {
        let mut signal = RefreshSignal::default();
        let before = signal;
        signal.bump();
        assert!(signal > before);
    }
}
