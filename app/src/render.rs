//! Pure terminal renderer for the screen.
//!
//! `render` is a function of `(snapshot, theme)` only: same inputs, same
//! string. The store's subscribers call it on every new snapshot and the
//! shell prints the result.

use crate::theme::{Rgb, Theme};
use crate::types::TaskListState;
use std::fmt::Write as _;

const RESET: &str = "\x1b[0m";
const STRIKE: &str = "\x1b[9m";
const BOLD: &str = "\x1b[1m";

/// Placeholder shown when the draft is empty
pub const PLACEHOLDER: &str = "Enter a new task...";

/// Label on the bulk-clear affordance
pub const CLEAR_LABEL: &str = "Clear Completed";

fn fg(colour: Rgb) -> String {
    let Rgb(r, g, b) = colour;
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Render the screen to a string
///
/// Layout, top to bottom:
/// - title
/// - input row: the draft as typed, or the placeholder in the muted colour
/// - one row per task, in insertion order; done tasks are struck through
///   in the muted colour; every row carries a delete affordance
/// - the clear-completed affordance, present iff at least one task is done
#[must_use]
pub fn render(state: &TaskListState, theme: Theme) -> String {
    let palette = theme.palette();
    let mut out = String::new();

    let _ = writeln!(out, "{}{BOLD}My To-Do App{RESET}", fg(palette.text));

    if state.draft.is_empty() {
        let _ = writeln!(
            out,
            "{}[ {PLACEHOLDER} ]{RESET} {}[ADD]{RESET}",
            fg(palette.muted),
            fg(palette.accent),
        );
    } else {
        let _ = writeln!(
            out,
            "{}[ {} ]{RESET} {}[ADD]{RESET}",
            fg(palette.text),
            state.draft,
            fg(palette.accent),
        );
    }

    for task in &state.tasks {
        let mark = if task.done { "x" } else { " " };
        let row_style = if task.done {
            format!("{}{STRIKE}", fg(palette.muted))
        } else {
            fg(palette.text)
        };
        let _ = writeln!(
            out,
            "  [{mark}] {row_style}{}{RESET} {}(x){RESET}",
            task.text,
            fg(palette.danger),
        );
    }

    if state.has_completed() {
        let _ = writeln!(out, "{}[{CLEAR_LABEL}]{RESET}", fg(palette.danger));
    }

    out
}
