//! Background fetch with a published display state.
//!
//! A front end triggers `request_fact` and watches the state channel; the
//! fetch itself runs on a spawned task and the outcome is pushed to every
//! subscriber once it lands. Only the latest state is retained.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::service::CatFactService;
use crate::transport::{Transport, UreqTransport};

/// What the front end should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading,
    Fact(String),
    Failed(String),
}

impl DisplayState {
    /// True once a request has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, DisplayState::Fact(_) | DisplayState::Failed(_))
    }
}

pub struct FactPresenter<T = UreqTransport> {
    service: CatFactService<T>,
    state: Arc<watch::Sender<DisplayState>>,
}

impl<T: Transport + 'static> FactPresenter<T> {
    pub fn new(service: CatFactService<T>) -> Self {
        let (state, _) = watch::channel(DisplayState::Idle);
        Self {
            service,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    /// Start fetching a fact. Must be called from within a Tokio runtime.
    pub fn request_fact(&self, length: Option<u32>) -> JoinHandle<()> {
        self.state.send_replace(DisplayState::Loading);

        let service = self.service.clone();
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            let next = match service.get_cat_fact(length).await {
                Ok(fact) => DisplayState::Fact(fact.fact),
                Err(err) => {
                    debug!(error = %err, "fact request failed");
                    DisplayState::Failed(err.to_string())
                }
            };
            state.send_replace(next);
        })
    }
}
