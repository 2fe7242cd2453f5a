//! Request sequencing for last-initiated-wins async results.
//!
//! - `RequestToken`: identifies one issued request by a monotonically
//!   increasing generation.
//! - `RequestSeq`: issues tokens and answers whether a token is still the
//!   latest one issued.
//! - `TaskHandle`: pairs a token with a `CancellationToken` so a superseded
//!   request can be asked to stop early.
//!
//! Cancellation is cooperative and only an optimisation: results must still be
//! checked with [`RequestSeq::is_latest`] before being applied, because a
//! superseded request can complete before it observes the cancellation.

use tokio_util::sync::CancellationToken;

/// Generation of an issued request. Higher generations were issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Position of this request in issue order, starting at 1.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues request tokens in call order.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
    current: Option<TaskHandle>,
}

impl RequestSeq {
    /// A sequence that has issued nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next token and cancels the handle of the request it supersedes.
    pub fn issue(&mut self) -> TaskHandle {
        self.latest += 1;
        let handle = TaskHandle::new(RequestToken(self.latest), CancellationToken::new());
        if let Some(previous) = self.current.replace(handle.clone()) {
            previous.cancel();
        }
        handle
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Marks `token` as finished so its handle is no longer tracked.
    pub fn finish(&mut self, token: RequestToken) {
        if self.current.as_ref().is_some_and(|h| h.token() == token) {
            self.current = None;
        }
    }

    /// Whether the latest issued request has not finished yet.
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }
}

/// Handle to an issued request with cooperative cancellation support.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    token: RequestToken,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    /// Pairs a token with the cancellation token its work observes.
    pub fn new(token: RequestToken, cancel_token: CancellationToken) -> Self {
        Self {
            token,
            cancel_token,
        }
    }

    /// The token to present to [`RequestSeq::is_latest`] once the work completes.
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// A clone of the cancellation token, for the async work itself.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Requests cooperative cancellation. The task must observe it.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    /// Whether a newer request has superseded this one.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
