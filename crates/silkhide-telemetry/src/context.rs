//! Context propagation helpers for process and action spans.
//!
//! # Design
//! - A process-level span carries the front end and build info.
//! - Each action invocation runs inside its own span keyed by a fresh invocation id.

use tracing::span::{Entered, EnteredSpan};
use tracing::{Span, field};
use uuid::Uuid;

use crate::init::build_sha;

/// Guard that keeps the process-level span entered for the lifetime of the process.
pub struct GlobalContextGuard {
    _guard: Entered<'static>,
}

impl GlobalContextGuard {
    #[must_use]
    /// Enter the process-level tracing span for the lifetime of the guard.
    pub fn new(front_end: impl Into<String>) -> Self {
        let front_end = front_end.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "silkhide",
            front_end = %front_end,
            build_sha = %build_sha()
        )));
        let guard = span.enter();
        Self { _guard: guard }
    }
}

/// Guard that keeps one action invocation's span entered.
pub struct InvocationGuard {
    invocation_id: Uuid,
    _span: EnteredSpan,
}

impl InvocationGuard {
    /// Enter a new `action` span for `action_name`.
    #[must_use]
    pub fn enter(action_name: &str) -> Self {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "action",
            action = %action_name,
            invocation_id = %invocation_id,
            outcome = field::Empty
        );
        Self {
            invocation_id,
            _span: span.entered(),
        }
    }

    /// Identifier of this invocation.
    #[must_use]
    pub const fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }
}

/// Record the outcome of the current action invocation on its span.
pub fn record_outcome(outcome: &str) {
    Span::current().record("outcome", field::display(outcome));
}
