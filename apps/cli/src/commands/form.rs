//! # Interactive Form
//!
//! Prompts for the two fields, submits, prints the result, and starts
//! over. End of input closes the session.
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──► Name? ──EOF──────────────────────────────────────────► done      │
//! │   │      │                                                              │
//! │   │      ▼                                                              │
//! │   │   Birthdate [current]? ──invalid──► error, keep old value           │
//! │   │      │                                                              │
//! │   │      ▼                                                              │
//! │   │   submit() ──empty name──► warning ─────────┐                       │
//! │   │      │                                      │                       │
//! │   │      ▼                                      │                       │
//! │   │   result screen                             │                       │
//! │   └──────┴──────────────────────────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field values carry over between rounds, so a warning can be fixed by
//! typing just the name again.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::reading::{submit, Submission};
use crate::error::ApiError;
use crate::render::{render, render_error, render_warning, ui_text};
use crate::state::{ConfigState, FormState};
use crate::Outcome;

/// What a form session produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormSummary {
    pub readings: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl FormSummary {
    /// A session fails only when there were errors and nothing was shown.
    pub fn outcome(&self) -> Outcome {
        if self.errors > 0 && self.readings == 0 {
            Outcome::Failure
        } else {
            Outcome::Success
        }
    }
}

/// Runs the interactive form until `input` is exhausted.
///
/// Results go to `out`; prompts, warnings and errors go to `err`.
pub fn run_form<R, W, E>(
    config: &ConfigState,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<FormSummary, ApiError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let text = ui_text(config.language);
    let mut form = FormState::new(config.default_birthdate);
    let mut summary = FormSummary::default();

    writeln!(err, "{}", text.title)?;
    writeln!(err, "{}", text.intro)?;

    loop {
        write!(err, "\n{}: ", text.name_prompt)?;
        err.flush()?;
        let Some(name) = read_line(&mut input)? else {
            break;
        };
        form.set_name(&name);

        write!(err, "{} [{}]: ", text.birthdate_prompt, form.birthdate())?;
        err.flush()?;
        let Some(birthdate) = read_line(&mut input)? else {
            break;
        };
        if let Err(e) = form.set_birthdate(&birthdate) {
            summary.errors += 1;
            writeln!(err, "{}", render_error(&ApiError::from(e), config.output_format))?;
            continue;
        }

        debug!(birthdate = %form.birthdate(), "Form submitted");
        match submit(&form.submission(), config.language)? {
            Submission::Completed(reading) => {
                summary.readings += 1;
                let rendered = render(&reading, config.output_format, config.mark_master_numbers)?;
                writeln!(out, "{}", rendered.trim_end())?;
                out.flush()?;
            }
            Submission::Warning(message) => {
                summary.warnings += 1;
                writeln!(err, "{}", render_warning(&message, config.output_format))?;
            }
        }
    }

    writeln!(err)?;
    Ok(summary)
}

/// Reads one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ApiError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
