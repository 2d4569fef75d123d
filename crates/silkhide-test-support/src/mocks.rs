//! Test doubles for the user interface.

use std::collections::VecDeque;

use silkhide_app::{DecisionOutcome, DecisionPrompt, UserInterface, UserMessage};
use silkhide_core::HideRequest;

/// User interface that answers from a script and records everything it is shown.
///
/// Once the script runs out every further dialog is cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedUi {
    answers: VecDeque<DecisionOutcome>,
    prompts: Vec<DecisionPrompt>,
    shown: Vec<UserMessage>,
}

impl ScriptedUi {
    /// Answer dialogs with `answers`, in order.
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = DecisionOutcome>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Confirm the first dialog with the given flags.
    #[must_use]
    pub fn confirming(hide_reference: bool, hide_value: bool) -> Self {
        Self::new([DecisionOutcome::Confirmed(HideRequest::new(
            hide_reference,
            hide_value,
        ))])
    }

    /// Cancel every dialog.
    #[must_use]
    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Prompts presented so far.
    #[must_use]
    pub fn prompts(&self) -> &[DecisionPrompt] {
        &self.prompts
    }

    /// Messages shown so far.
    #[must_use]
    pub fn shown(&self) -> &[UserMessage] {
        &self.shown
    }
}

impl UserInterface for ScriptedUi {
    fn show(&mut self, message: &UserMessage) {
        self.shown.push(message.clone());
    }

    fn acquire_decision(&mut self, prompt: &DecisionPrompt) -> DecisionOutcome {
        self.prompts.push(*prompt);
        self.answers
            .pop_front()
            .unwrap_or(DecisionOutcome::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_ui_cancels_once_exhausted() {
        let mut ui = ScriptedUi::confirming(true, false);
        let prompt = DecisionPrompt::new(1, HideRequest::new(true, true));

        assert_eq!(
            ui.acquire_decision(&prompt),
            DecisionOutcome::Confirmed(HideRequest::new(true, false))
        );
        assert_eq!(ui.acquire_decision(&prompt), DecisionOutcome::Cancelled);
        assert_eq!(ui.prompts().len(), 2);
    }
}
