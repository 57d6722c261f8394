//! Profile view state machine.
//!
//! The controller owns the [`ViewState`] shown on screen. A load is split
//! into [`ProfileController::begin_load`] (synchronous, returns a ticket)
//! and [`ProfileController::complete`] so the fetch itself can run on a
//! spawned task while the UI keeps drawing. Only the completion carrying
//! the most recent ticket is applied.

use std::sync::Arc;

use crate::client::ProfileClient;
use crate::error::FetchError;
use crate::models::UserProfile;

/// What the profile screen is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; the message is shown verbatim.
    Error(String),
    /// The backend answered without a profile.
    Empty,
    /// A profile is available.
    Loaded(Arc<UserProfile>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn profile(&self) -> Option<&Arc<UserProfile>> {
        match self {
            ViewState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error(_) => "error",
            ViewState::Empty => "empty",
            ViewState::Loaded(_) => "loaded",
        }
    }
}

/// Identifies one call to [`ProfileController::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Result of a single fetch, as handed back to the controller.
pub type FetchOutcome = Result<Option<UserProfile>, FetchError>;

/// Owns the view state and the client used to refresh it.
#[derive(Debug)]
pub struct ProfileController {
    client: ProfileClient,
    state: ViewState,
    latest: u64,
}

impl ProfileController {
    /// A controller in the `Loading` state. No request is sent until
    /// [`begin_load`](Self::begin_load) or [`load_profile`](Self::load_profile).
    pub fn new(client: ProfileClient) -> Self {
        Self {
            client,
            state: ViewState::Loading,
            latest: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn profile(&self) -> Option<&Arc<UserProfile>> {
        self.state.profile()
    }

    pub fn client(&self) -> &ProfileClient {
        &self.client
    }

    /// Enter `Loading` and issue a new ticket.
    ///
    /// Any previously issued ticket becomes stale.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.latest += 1;
        self.state = ViewState::Loading;
        tracing::debug!(ticket = self.latest, "Profile load started");
        RequestTicket(self.latest)
    }

    /// Apply a fetch result.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` is not
    /// the most recently issued one.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: FetchOutcome) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Dropping stale profile response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(Some(profile)) => ViewState::Loaded(Arc::new(profile)),
            Ok(None) => ViewState::Empty,
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    reauth = err.requires_reauth(),
                    "Profile load failed: {}",
                    err
                );
                ViewState::Error(err.display_message())
            }
        };
        tracing::info!(state = self.state.name(), "Profile load finished");
        true
    }

    /// Fetch and apply in one step.
    pub async fn load_profile(&mut self) -> &ViewState {
        let ticket = self.begin_load();
        let outcome = self.client.fetch_profile().await;
        self.complete(ticket, outcome);
        &self.state
    }
}
