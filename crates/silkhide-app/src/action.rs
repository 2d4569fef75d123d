//! The bulk-hide action: resolve, ask, validate, apply.
//!
//! # Design
//! - One invocation runs inside its own `action` span and records its outcome there.
//! - Every user-visible failure ends the invocation cleanly; nothing is retried.
//! - The pipeline never touches the host between a rejected or cancelled decision and
//!   the end of the run, so those paths leave no redraw behind.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use silkhide_config::LoadedConfig;
use silkhide_core::{
    ApplyReport, EditorHost, HideDecision, HideRequest, ResolutionPath, SelectionResolver,
    apply_hide,
};
use silkhide_telemetry::{InvocationGuard, record_outcome};
use tracing::info;

use crate::ui::{DecisionOutcome, DecisionPrompt, UserInterface, UserMessage};

/// Registration metadata of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    /// Display name; also the registry key.
    pub name: String,
    /// Menu category.
    pub category: String,
    /// Short description.
    pub description: String,
    /// Whether the host shows a toolbar button.
    pub show_toolbar_button: bool,
    /// Icon location, resolved against the configuration file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

impl ActionDescriptor {
    /// Descriptor described by a loaded configuration.
    #[must_use]
    pub fn from_config(loaded: &LoadedConfig) -> Self {
        let action = &loaded.config.action;
        Self {
            name: action.name.clone(),
            category: action.category.clone(),
            description: action.description.clone(),
            show_toolbar_button: action.show_toolbar_button,
            icon: loaded.icon_path(),
        }
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The selection resolved to no footprints; the user was told so.
    NothingResolved {
        /// Resolution pass that ran last.
        path: ResolutionPath,
    },
    /// The user dismissed the decision dialog.
    Cancelled {
        /// Resolution pass used.
        path: ResolutionPath,
        /// Footprints that would have been affected.
        placements: usize,
    },
    /// The user confirmed with nothing to hide; the user was warned.
    Rejected {
        /// Resolution pass used.
        path: ResolutionPath,
        /// Footprints that would have been affected.
        placements: usize,
    },
    /// Labels were hidden and a redraw requested.
    Applied {
        /// Resolution pass used.
        path: ResolutionPath,
        /// Applicator counters.
        report: ApplyReport,
    },
}

impl ActionOutcome {
    /// Stable snake-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NothingResolved { .. } => "nothing_resolved",
            Self::Cancelled { .. } => "cancelled",
            Self::Rejected { .. } => "rejected",
            Self::Applied { .. } => "applied",
        }
    }

    /// Resolution pass behind this outcome.
    #[must_use]
    pub const fn path(&self) -> ResolutionPath {
        match self {
            Self::NothingResolved { path }
            | Self::Cancelled { path, .. }
            | Self::Rejected { path, .. }
            | Self::Applied { path, .. } => *path,
        }
    }

    /// Whether the host document was modified.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Editor action a hosting shell can register and run.
pub trait Action: fmt::Debug {
    /// Registration metadata.
    fn descriptor(&self) -> &ActionDescriptor;

    /// Run one invocation against `host`, talking to the user through `ui`.
    fn run(&self, host: &mut dyn EditorHost, ui: &mut dyn UserInterface) -> ActionOutcome;
}

/// Hides reference designators and/or values of the selected footprints.
#[derive(Debug, Clone)]
pub struct BulkHideAction {
    descriptor: ActionDescriptor,
    resolver: SelectionResolver,
    dialog_defaults: HideRequest,
}

impl BulkHideAction {
    /// Action with explicit collaborators.
    #[must_use]
    pub const fn new(
        descriptor: ActionDescriptor,
        resolver: SelectionResolver,
        dialog_defaults: HideRequest,
    ) -> Self {
        Self {
            descriptor,
            resolver,
            dialog_defaults,
        }
    }

    /// Action configured from a loaded configuration.
    #[must_use]
    pub fn from_config(loaded: &LoadedConfig) -> Self {
        Self::new(
            ActionDescriptor::from_config(loaded),
            loaded.config.resolver.resolver(),
            loaded.config.dialog.request(),
        )
    }

    fn execute(&self, host: &mut dyn EditorHost, ui: &mut dyn UserInterface) -> ActionOutcome {
        let resolution = self.resolver.resolve_host(&*host);
        let path = resolution.path();
        let Some(targets) = resolution.targets() else {
            info!(path = path.as_str(), "no footprints resolved");
            ui.show(&UserMessage::no_footprints_selected());
            return ActionOutcome::NothingResolved { path };
        };
        let placements = targets.len();
        info!(path = path.as_str(), placements, "selection resolved");

        let prompt = DecisionPrompt::new(placements, self.dialog_defaults);
        let request = match ui.acquire_decision(&prompt) {
            DecisionOutcome::Confirmed(request) => request,
            DecisionOutcome::Cancelled => {
                info!(placements, "decision dialog cancelled");
                return ActionOutcome::Cancelled { path, placements };
            }
        };
        let Ok(decision) = HideDecision::try_from(request) else {
            info!(placements, "decision rejected: no option selected");
            ui.show(&UserMessage::no_option_selected());
            return ActionOutcome::Rejected { path, placements };
        };

        let report = apply_hide(targets, decision, host);
        ActionOutcome::Applied { path, report }
    }
}

impl Action for BulkHideAction {
    fn descriptor(&self) -> &ActionDescriptor {
        &self.descriptor
    }

    fn run(&self, host: &mut dyn EditorHost, ui: &mut dyn UserInterface) -> ActionOutcome {
        let invocation = InvocationGuard::enter(&self.descriptor.name);
        let outcome = self.execute(host, ui);
        record_outcome(outcome.as_str());
        info!(
            invocation_id = %invocation.invocation_id(),
            outcome = outcome.as_str(),
            "action finished"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silkhide_core::{LabelRole, PlacementId, SelectionItem};
    use silkhide_document::{BoardDocument, DocumentHost, Footprint, SelectionRecord, TextLabel};

    #[derive(Debug)]
    struct Answer {
        decision: DecisionOutcome,
        prompts: Vec<DecisionPrompt>,
        shown: Vec<UserMessage>,
    }

    impl Answer {
        const fn with(decision: DecisionOutcome) -> Self {
            Self {
                decision,
                prompts: Vec::new(),
                shown: Vec::new(),
            }
        }
    }

    impl UserInterface for Answer {
        fn show(&mut self, message: &UserMessage) {
            self.shown.push(message.clone());
        }

        fn acquire_decision(&mut self, prompt: &DecisionPrompt) -> DecisionOutcome {
            self.prompts.push(*prompt);
            self.decision
        }
    }

    fn action() -> BulkHideAction {
        BulkHideAction::from_config(&LoadedConfig {
            config: silkhide_config::ActionConfig::default(),
            source: None,
        })
    }

    fn host(selected: &[u64]) -> DocumentHost {
        let footprints = (1..=3)
            .map(|raw| Footprint {
                id: PlacementId::new(raw),
                selected: false,
                reference: Some(TextLabel::field(format!("R{raw}"))),
                value: Some(TextLabel::field("1k")),
            })
            .collect();
        let items = selected
            .iter()
            .map(|raw| SelectionItem::placement(PlacementId::new(*raw)))
            .collect();
        let document = BoardDocument {
            footprints,
            selection: SelectionRecord::of(items),
        };
        DocumentHost::new(document).unwrap_or_else(|err| panic!("fixture board: {err}"))
    }

    fn all_visible(host: &DocumentHost) -> bool {
        host.document().footprints.iter().all(|footprint| {
            LabelRole::ALL
                .into_iter()
                .filter_map(|role| footprint.label(role))
                .all(|label| label.visible)
        })
    }

    #[test]
    fn empty_selection_only_shows_message() {
        let mut host = host(&[]);
        let mut ui = Answer::with(DecisionOutcome::Cancelled);

        let outcome = action().run(&mut host, &mut ui);

        assert_eq!(
            outcome,
            ActionOutcome::NothingResolved {
                path: ResolutionPath::Selection
            }
        );
        assert_eq!(ui.shown, vec![UserMessage::no_footprints_selected()]);
        assert!(ui.prompts.is_empty());
        assert_eq!(host.redraw_requests(), 0);
    }

    #[test]
    fn cancelled_dialog_leaves_board_untouched() {
        let mut host = host(&[1, 2]);
        let mut ui = Answer::with(DecisionOutcome::Cancelled);

        let outcome = action().run(&mut host, &mut ui);

        assert_eq!(outcome.as_str(), "cancelled");
        assert!(ui.shown.is_empty());
        assert!(all_visible(&host));
        assert_eq!(host.redraw_requests(), 0);
    }

    #[test]
    fn empty_decision_is_rejected_with_warning() {
        let mut host = host(&[1, 2]);
        let mut ui = Answer::with(DecisionOutcome::Confirmed(HideRequest::new(false, false)));

        let outcome = action().run(&mut host, &mut ui);

        assert_eq!(
            outcome,
            ActionOutcome::Rejected {
                path: ResolutionPath::Selection,
                placements: 2
            }
        );
        assert_eq!(ui.shown, vec![UserMessage::no_option_selected()]);
        assert!(all_visible(&host));
        assert_eq!(host.redraw_requests(), 0);
    }

    #[test]
    fn prompt_carries_count_and_configured_defaults() {
        let mut host = host(&[3, 1, 3]);
        let mut ui = Answer::with(DecisionOutcome::Confirmed(HideRequest::new(true, false)));

        let outcome = action().run(&mut host, &mut ui);

        assert!(outcome.is_applied());
        assert_eq!(
            ui.prompts,
            vec![DecisionPrompt::new(2, HideRequest::new(true, true))]
        );
        assert_eq!(host.redraw_requests(), 1);
    }
}
