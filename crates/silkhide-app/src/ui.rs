//! User interaction seam between the action pipeline and whatever front end runs it.
//!
//! # Design
//! - The pipeline only ever shows acknowledge-only messages or asks for one decision.
//! - Dialog layout belongs to the front end; the pipeline supplies count and defaults.

use serde::Serialize;
use silkhide_core::HideRequest;

/// Title of the decision dialog.
pub const DECISION_TITLE: &str = "Choose what to hide";

/// Severity of an acknowledge-only message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSeverity {
    /// Something was not done because of the user's input.
    Warning,
    /// The action could not run.
    Error,
}

impl MessageSeverity {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Acknowledge-only message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMessage {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub body: &'static str,
    /// Severity icon to show.
    pub severity: MessageSeverity,
}

impl UserMessage {
    /// Shown when the selection resolves to no footprints.
    #[must_use]
    pub const fn no_footprints_selected() -> Self {
        Self {
            title: "No footprints selected",
            body: "Please select one or multiple footprints!\n...or use Ctrl+A to select everything.",
            severity: MessageSeverity::Error,
        }
    }

    /// Shown when the user confirms the dialog with nothing to hide.
    #[must_use]
    pub const fn no_option_selected() -> Self {
        Self {
            title: "No option selected",
            body: "Please select at least one option to hide.",
            severity: MessageSeverity::Warning,
        }
    }
}

/// What the decision dialog is asked to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionPrompt {
    /// Dialog title.
    pub title: &'static str,
    /// Number of footprints that will be affected.
    pub placements: usize,
    /// Initial checkbox state.
    pub defaults: HideRequest,
}

impl DecisionPrompt {
    /// Prompt for `placements` footprints with the given initial state.
    #[must_use]
    pub const fn new(placements: usize, defaults: HideRequest) -> Self {
        Self {
            title: DECISION_TITLE,
            placements,
            defaults,
        }
    }
}

/// Result of the decision dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// The user confirmed with these flags; not yet validated.
    Confirmed(HideRequest),
    /// The user dismissed the dialog.
    Cancelled,
}

/// Front end the action talks to.
pub trait UserInterface {
    /// Show an acknowledge-only message.
    fn show(&mut self, message: &UserMessage);

    /// Ask which labels to hide.
    fn acquire_decision(&mut self, prompt: &DecisionPrompt) -> DecisionOutcome;
}
