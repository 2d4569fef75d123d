//! Explicit action registry populated by the hosting shell at start-up.

use silkhide_core::EditorHost;
use tracing::{debug, info};

use crate::action::{Action, ActionDescriptor, ActionOutcome};
use crate::error::{AppError, AppResult};
use crate::ui::UserInterface;

/// Actions keyed by display name, in registration order.
#[derive(Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Box<dyn Action>>,
}

impl ActionRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `action` under its descriptor name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateAction`] when the name is already taken.
    pub fn register(&mut self, action: Box<dyn Action>) -> AppResult<()> {
        let name = &action.descriptor().name;
        if self.get(name).is_some() {
            return Err(AppError::DuplicateAction { name: name.clone() });
        }
        info!(action = %name, category = %action.descriptor().category, "action registered");
        self.actions.push(action);
        Ok(())
    }

    /// Action registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|action| action.descriptor().name == name)
            .map(AsRef::as_ref)
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ActionDescriptor> {
        self.actions.iter().map(|action| action.descriptor())
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run the action registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownAction`] when nothing is registered under `name`.
    pub fn run(
        &self,
        name: &str,
        host: &mut dyn EditorHost,
        ui: &mut dyn UserInterface,
    ) -> AppResult<ActionOutcome> {
        let action = self.get(name).ok_or_else(|| AppError::UnknownAction {
            name: name.to_string(),
        })?;
        debug!(action = %name, "dispatching action");
        Ok(action.run(host, ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silkhide_core::{HideRequest, SelectionResolver};
    use silkhide_document::{BoardDocument, DocumentHost};

    use crate::action::BulkHideAction;
    use crate::ui::{DecisionOutcome, DecisionPrompt, UserMessage};

    struct Silent;

    impl UserInterface for Silent {
        fn show(&mut self, _message: &UserMessage) {}

        fn acquire_decision(&mut self, _prompt: &DecisionPrompt) -> DecisionOutcome {
            DecisionOutcome::Cancelled
        }
    }

    fn named(name: &str) -> Box<dyn Action> {
        Box::new(BulkHideAction::new(
            ActionDescriptor {
                name: name.to_string(),
                category: "Silkscreen".to_string(),
                description: String::new(),
                show_toolbar_button: false,
                icon: None,
            },
            SelectionResolver::default(),
            HideRequest::new(true, true),
        ))
    }

    #[test]
    fn duplicate_names_are_rejected() -> AppResult<()> {
        let mut registry = ActionRegistry::new();
        registry.register(named("Bulk hide"))?;
        registry.register(named("Other"))?;

        let err = registry.register(named("Bulk hide"));

        assert!(matches!(err, Err(AppError::DuplicateAction { ref name }) if name == "Bulk hide"));
        let names: Vec<_> = registry.descriptors().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Bulk hide", "Other"]);
        Ok(())
    }

    #[test]
    fn unknown_action_is_an_error() {
        let registry = ActionRegistry::new();
        let mut host = DocumentHost::new(BoardDocument::default())
            .unwrap_or_else(|err| panic!("empty board: {err}"));

        let result = registry.run("Missing", &mut host, &mut Silent);

        assert!(matches!(result, Err(AppError::UnknownAction { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn run_dispatches_by_name() -> AppResult<()> {
        let mut registry = ActionRegistry::new();
        registry.register(named("Bulk hide"))?;
        let mut host = DocumentHost::new(BoardDocument::default())
            .unwrap_or_else(|err| panic!("empty board: {err}"));

        let outcome = registry.run("Bulk hide", &mut host, &mut Silent)?;

        assert_eq!(outcome.as_str(), "nothing_resolved");
        assert_eq!(registry.len(), 1);
        Ok(())
    }
}
