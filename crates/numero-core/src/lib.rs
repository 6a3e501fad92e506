//! # numero-core: Pure Numerology for Numero
//!
//! This crate is the **heart** of Numero. It derives the four numbers of a
//! reading as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Numero Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    numero CLI (apps/cli)                        │   │
//! │  │      Form (args / prompt) ──► Submit ──► Result screen          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReadingRequest                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ numero-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ reduction │  │  cipher   │  │  numbers  │  │  meaning  │  │   │
//! │  │   │  reduce   │  │ A=1..I=9  │  │ life path │  │  tables   │  │   │
//! │  │   │  masters  │  │  vowels   │  │ soul urge │  │ + default │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │repetition │  │validation │  │  reading  │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`reduction`] - Digit reduction with master-number halting
//! - [`cipher`] - Pythagorean letter values
//! - [`numbers`] - Life path, birth day, expression, soul urge
//! - [`meaning`] - Interpretation tables with a placeholder default
//! - [`repetition`] - Repeated-value notices
//! - [`reading`] - One full computation pass
//! - [`validation`] - Form input rules
//! - [`types`] - Domain types
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use numero_core::{Language, Reading, ReadingRequest};
//!
//! let birthdate = NaiveDate::from_ymd_opt(1979, 1, 5).unwrap();
//! let reading = Reading::compute(&ReadingRequest::new("Noa", birthdate), Language::En).unwrap();
//!
//! assert_eq!(reading.profile.values(), [5, 5, 3, 7]);
//! assert_eq!(reading.repeated, vec![5]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cipher;
pub mod error;
pub mod meaning;
pub mod numbers;
pub mod reading;
pub mod reduction;
pub mod repetition;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use reduction::{is_master, reduce};
pub use types::*;
