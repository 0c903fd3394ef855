use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::models::Movie;
use crate::omdb::{LookupError, OmdbApi};

pub const EMPTY_TITLE_MESSAGE: &str = "movie title must not be empty";

/// Outcome state observed by the presentation layer. Reset when a search
/// starts, written once with the terminal outcome when it completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub movie: Option<Movie>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl SearchState {
    fn loading() -> Self {
        Self {
            movie: None,
            is_loading: true,
            error_message: None,
        }
    }

    fn found(movie: Movie) -> Self {
        Self {
            movie: Some(movie),
            is_loading: false,
            error_message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            movie: None,
            is_loading: false,
            error_message: Some(message.into()),
        }
    }
}

/// Drives one title search at a time against an [`OmdbApi`] and publishes
/// the outcome over a watch channel. The controller is the only writer;
/// observers hold receivers from [`SearchController::subscribe`].
///
/// Overlapping searches are not serialized. Each one takes a sequence
/// number, and a completion whose number is no longer current is dropped,
/// so the newest search always owns the visible state.
pub struct SearchController {
    api: Arc<dyn OmdbApi>,
    state: watch::Sender<SearchState>,
    seq: AtomicU64,
}

impl SearchController {
    pub fn new(api: Arc<dyn OmdbApi>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            api,
            state,
            seq: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub async fn search(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.seq.fetch_add(1, Ordering::SeqCst);
            self.state.send_replace(SearchState::failed(EMPTY_TITLE_MESSAGE));
            return;
        }

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SearchState::loading());

        let outcome = self.api.fetch_movie(title).await;

        // A newer search superseded this one while we were in flight.
        if self.seq.load(Ordering::SeqCst) != seq {
            debug!(title, "discarding stale search outcome");
            return;
        }

        match outcome {
            Ok(movie) => {
                self.state.send_replace(SearchState::found(movie));
            }
            Err(err) => {
                if let LookupError::Decoding { body, .. } = &err {
                    debug!(%body, "raw body of undecodable response");
                }
                self.state.send_replace(SearchState::failed(err.to_string()));
            }
        }
    }
}
