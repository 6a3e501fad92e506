//! # State Module
//!
//! Application state for the CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │    ConfigState       │          │     FormState        │            │
//! │  │                      │ default  │                      │            │
//! │  │  • language          │ birthdate│  • name              │            │
//! │  │  • default_birthdate │─────────►│  • birthdate         │            │
//! │  │  • output_format     │          │                      │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! │  FormState: owned by one form session, single-threaded                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use self::config::{ConfigError, ConfigState, OutputFormat, CONFIG_FILE_NAME, ENV_PREFIX};
pub use form::FormState;
