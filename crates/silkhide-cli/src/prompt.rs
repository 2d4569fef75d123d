//! Terminal implementation of the user interaction seam.
//!
//! Messages and questions go to the output writer (stderr in production) so stdout
//! stays reserved for rendered results.

use std::fmt;
use std::io::{BufRead, Write};

use silkhide_app::{DecisionOutcome, DecisionPrompt, UserInterface, UserMessage};
use silkhide_core::HideRequest;
use tracing::debug;

/// Hide flags given on the command line; `None` defers to the dialog defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FlagOverrides {
    pub(crate) reference: Option<bool>,
    pub(crate) value: Option<bool>,
}

impl FlagOverrides {
    pub(crate) const fn is_complete(self) -> bool {
        self.reference.is_some() && self.value.is_some()
    }

    fn apply(self, defaults: HideRequest) -> HideRequest {
        HideRequest::new(
            self.reference.unwrap_or(defaults.hide_reference),
            self.value.unwrap_or(defaults.hide_value),
        )
    }
}

/// Answers decision dialogs from flags or, when attached to a terminal, by asking.
pub(crate) struct TerminalUi<R, W> {
    input: Option<R>,
    output: W,
    overrides: FlagOverrides,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    /// `input` is `None` when nobody can be asked.
    pub(crate) const fn new(
        input: Option<R>,
        output: W,
        overrides: FlagOverrides,
        assume_yes: bool,
    ) -> Self {
        Self {
            input,
            output,
            overrides,
            assume_yes,
        }
    }

    fn write(&mut self, args: fmt::Arguments<'_>) {
        let written = self
            .output
            .write_fmt(args)
            .and_then(|()| self.output.flush());
        if let Err(err) = written {
            debug!(error = %err, "failed to write to terminal");
        }
    }

    /// Ask a yes/no question; `None` when the user quits or input ends.
    fn ask(&mut self, question: &str, default: bool) -> Option<bool> {
        let hint = if default { "[Y/n/q]" } else { "[y/N/q]" };
        loop {
            self.write(format_args!("{question} {hint} "));
            let input = self.input.as_mut()?;
            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "" => return Some(default),
                "y" | "yes" => return Some(true),
                "n" | "no" => return Some(false),
                "q" | "quit" => return None,
                _ => self.write(format_args!("please answer y, n or q\n")),
            }
        }
    }

    fn answer(&mut self, flag: Option<bool>, question: &str, default: bool) -> Option<bool> {
        flag.or_else(|| self.ask(question, default))
    }
}

impl<R: BufRead, W: Write> UserInterface for TerminalUi<R, W> {
    fn show(&mut self, message: &UserMessage) {
        self.write(format_args!(
            "{}: {}\n{}\n",
            message.severity.as_str(),
            message.title,
            message.body
        ));
    }

    fn acquire_decision(&mut self, prompt: &DecisionPrompt) -> DecisionOutcome {
        let request = self.overrides.apply(prompt.defaults);
        if self.assume_yes || self.overrides.is_complete() {
            return DecisionOutcome::Confirmed(request);
        }
        if self.input.is_none() {
            self.write(format_args!(
                "{}: no terminal to ask; pass --yes or both --[no-]reference and --[no-]value\n",
                prompt.title
            ));
            return DecisionOutcome::Cancelled;
        }

        let noun = if prompt.placements == 1 { "footprint" } else { "footprints" };
        self.write(format_args!("{} ({} {noun})\n", prompt.title, prompt.placements));
        let Some(hide_reference) = self.answer(
            self.overrides.reference,
            "Hide reference designators?",
            request.hide_reference,
        ) else {
            return DecisionOutcome::Cancelled;
        };
        let Some(hide_value) =
            self.answer(self.overrides.value, "Hide values?", request.hide_value)
        else {
            return DecisionOutcome::Cancelled;
        };
        DecisionOutcome::Confirmed(HideRequest::new(hide_reference, hide_value))
    }
}
