//! # Reading Command
//!
//! One press of the submit button.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  numero read --name "Ada Lovelace" --birthdate 1990-05-15               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit() ← THIS FUNCTION                                               │
//! │       │                                                                 │
//! │       ├── name empty?  → Submission::Warning (nothing computed)         │
//! │       │                                                                 │
//! │       ├── date bad?    → ApiError (VALIDATION_ERROR)                    │
//! │       │                                                                 │
//! │       └── OK → Submission::Completed(Reading)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use numero_core::{Language, Reading, ReadingRequest};

use crate::error::ApiError;
use crate::render::ui_text;

/// Outcome of a submission that didn't fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The result screen.
    Completed(Reading),

    /// Non-blocking warning; the user may fix the form and resubmit.
    Warning(String),
}

/// Runs one computation pass for a submitted form.
pub fn submit(request: &ReadingRequest, language: Language) -> Result<Submission, ApiError> {
    match Reading::compute(request, language) {
        Ok(reading) => {
            info!(
                birthdate = %reading.birthdate,
                life_path = reading.profile.life_path,
                repeated = reading.repeated.len(),
                "Reading computed"
            );
            Ok(Submission::Completed(reading))
        }
        Err(err) if err.is_missing_name() => {
            info!("Submission without a name");
            Ok(Submission::Warning(ui_text(language).name_warning.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}
