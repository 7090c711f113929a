use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::GatewayError;

/// What a data view can be showing. Empty data is `Ready` with an empty
/// collection; each view decides how to say so.
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> From<Result<T, GatewayError>> for RemoteState<T> {
    fn from(outcome: Result<T, GatewayError>) -> Self {
        match outcome {
            Ok(data) => RemoteState::Ready(data),
            Err(err) => RemoteState::Failed(err.to_string()),
        }
    }
}

impl<T> RemoteState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Per-view counter of fetch cycles. Only the newest ticket may commit.
#[derive(Clone, Debug, Default)]
pub struct FetchGeneration(Rc<Cell<u64>>);

impl FetchGeneration {
    pub fn begin(&self) -> FetchTicket {
        let id = self.0.get() + 1;
        self.0.set(id);
        FetchTicket {
            generation: self.0.clone(),
            id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchTicket {
    generation: Rc<Cell<u64>>,
    id: u64,
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }

    /// Retire this cycle without starting another, e.g. on unmount.
    pub fn cancel(&self) {
        if self.is_current() {
            self.generation.set(self.id + 1);
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Awaits `fetch` and returns the state to commit, or `None` when a newer
/// cycle started (or the view went away) in the meantime. The request itself
/// is never aborted.
pub async fn settle<T, F>(ticket: &FetchTicket, fetch: F) -> Option<RemoteState<T>>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    let outcome = fetch.await;
    if ticket.is_current() {
        Some(outcome.into())
    } else {
        log::debug!("discarding stale result of fetch cycle {}", ticket.id());
        None
    }
}

/// Runs `loader` on mount and again whenever `deps` changes, committing only
/// the latest cycle's outcome.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, loader: F) -> RemoteState<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, GatewayError>> + 'static,
{
    let state = use_state(|| RemoteState::Loading);
    let generation = use_state(FetchGeneration::default);

    {
        let state = state.clone();
        let generation = (*generation).clone();
        use_effect_with_deps(
            move |deps: &D| {
                let ticket = generation.begin();
                state.set(RemoteState::Loading);

                let fetch = loader(deps.clone());
                let cycle = ticket.clone();
                spawn_local(async move {
                    if let Some(next) = settle(&cycle, fetch).await {
                        state.set(next);
                    }
                });

                move || ticket.cancel()
            },
            deps,
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::ScriptedBackend;
    use crate::gateway::fetch_summary;
    use crate::refresh::RefreshSignal;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    #[test]
    fn newer_cycle_supersedes_older() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        assert!(first.is_current());
        let second = generation.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.id(), 2);
    }

    #[test]
    fn cancel_retires_only_the_current_cycle() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        first.cancel();
        assert!(second.is_current());
        second.cancel();
        assert!(!second.is_current());
    }

    #[test]
    fn stale_result_is_discarded_even_if_it_arrives_last() {
        let generation = FetchGeneration::default();
        let (first_tx, first_rx) = oneshot::channel::<Result<u32, GatewayError>>();
        let (second_tx, second_rx) = oneshot::channel::<Result<u32, GatewayError>>();

        let first = generation.begin();
        let second = generation.begin();

        second_tx.send(Ok(2)).unwrap();
        let latest = block_on(settle(&second, async { second_rx.await.unwrap() }));
        assert_eq!(latest, Some(RemoteState::Ready(2)));

        first_tx.send(Ok(1)).unwrap();
        let stale = block_on(settle(&first, async { first_rx.await.unwrap() }));
        assert_eq!(stale, None);
    }

    #[test]
    fn stale_error_is_discarded_too() {
        let generation = FetchGeneration::default();
        let first = generation.begin();
        let _second = generation.begin();
        let stale = block_on(settle(&first, async {
            Err::<u32, _>(GatewayError::Network("offline".into()))
        }));
        assert_eq!(stale, None);
    }

    #[test]
    fn each_refresh_issues_one_fetch_and_only_the_last_commits() {
        let body = r#"[{"category":"Food","total":300},{"category":"Rent","total":700}]"#;
        let backend = ScriptedBackend::with(vec![ScriptedBackend::ok(body), ScriptedBackend::ok(body)]);
        let generation = FetchGeneration::default();
        let mut signal = RefreshSignal::default();

        let mut cycles = Vec::new();
        for _ in 0..2 {
            signal.bump();
            cycles.push(generation.begin());
        }
        assert_eq!(signal.value(), 2);

        let results: Vec<_> = cycles
            .iter()
            .map(|ticket| block_on(settle(ticket, fetch_summary(&backend))))
            .collect();

        assert_eq!(backend.calls(), 2);
        assert_eq!(results[0], None);
        assert!(matches!(&results[1], Some(RemoteState::Ready(items)) if items.len() == 2));
    }

    #[test]
    fn failures_become_error_text() {
        let state: RemoteState<Vec<u8>> = Err(GatewayError::Status {
            status: 500,
            message: "Failed to fetch summary".into(),
        })
        .into();
        assert_eq!(state, RemoteState::Failed("Failed to fetch summary".into()));
        assert_eq!(state.ready(), None);
    }
}
