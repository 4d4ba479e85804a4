use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::data_provider::{load_tournament, TournamentDataProvider};

use super::action::{Action, Effect};
use super::reducer::reduce;
use super::state::AppState;

/// Owns the application state, runs actions through the reducer and
/// executes the effects it returns.
pub struct Runtime {
    state: AppState,

    /// Actions from background tasks are queued here
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    provider: Arc<dyn TournamentDataProvider>,
}

impl Runtime {
    pub fn new(initial_state: AppState, provider: Arc<dyn TournamentDataProvider>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
            provider,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take so the state is moved through the reducer, not cloned.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::LoadTournament => {
                debug!("EFFECT: Spawning tournament load");
                let provider = Arc::clone(&self.provider);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let result = load_tournament(provider.as_ref())
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(Action::TournamentLoaded(result));
                });
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockProvider;
    use std::time::Duration;

    async fn wait_for_actions(runtime: &mut Runtime) -> usize {
        for _ in 0..100 {
            let processed = runtime.process_actions();
            if processed > 0 {
                return processed;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        0
    }

    #[tokio::test]
    async fn test_load_effect_delivers_store() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(MockProvider::new()));
        runtime.dispatch(Action::LoadTournament);
        assert!(runtime.state().data.loading);

        assert_eq!(wait_for_actions(&mut runtime).await, 1);
        let state = runtime.state();
        assert!(!state.data.loading);
        assert_eq!(state.data.store.as_ref().map(|s| s.teams().len()), Some(8));
    }

    #[tokio::test]
    async fn test_load_failure_reported() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(MockProvider::failing()));
        runtime.dispatch(Action::LoadTournament);

        assert_eq!(wait_for_actions(&mut runtime).await, 1);
        assert!(runtime.state().data.load_error.is_some());
        assert!(runtime.state().system.status_is_error);
    }

    #[tokio::test]
    async fn test_external_sender() {
        let mut runtime = Runtime::new(AppState::default(), Arc::new(MockProvider::new()));
        runtime
            .action_sender()
            .send(Action::SetStatusMessage {
                message: "hi".to_string(),
                is_error: false,
            })
            .unwrap();
        assert_eq!(runtime.process_actions(), 1);
        assert_eq!(runtime.state().system.status_message.as_deref(), Some("hi"));
    }
}
