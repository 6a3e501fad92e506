//! # Commands Module
//!
//! Everything the `numero` binary can do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── reading.rs  ◄─── One submission → Reading or warning
//! ├── form.rs     ◄─── Interactive prompt loop around reading.rs
//! └── config.rs   ◄─── Effective configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  $ numero read --name Ada --birthdate 1990-05-15                        │
//! │         │                                                               │
//! │         │ (clap parsing)                                                │
//! │         ▼                                                               │
//! │  fn submit(                                                             │
//! │      request: &ReadingRequest,  ◄── From the form fields               │
//! │      language: Language,        ◄── From ConfigState                   │
//! │  ) -> Result<Submission, ApiError>                                      │
//! │         │                                                               │
//! │         │ (render text / JSON)                                          │
//! │         ▼                                                               │
//! │  stdout                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod form;
pub mod reading;
