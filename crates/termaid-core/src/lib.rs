//! # termaid-core - Core Domain Types
//!
//! Foundation crate for termaid. Provides domain types, error handling,
//! logging setup, and prompt path formatting.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`TerminalLine`] - Command echo, output, error, or the live cursor line
//! - [`ChatMessage`], [`Sender`] - Entries in the assistant chat pane
//! - [`ConnectivityStatus`] - Outcome of the backend health probe
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Paths (`path`)
//! - [`shorten()`] - Collapse long working directories for prompt display
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use termaid_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod path;
pub mod types;

/// Prelude for common imports used throughout all termaid crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use path::{format_prompt, shorten, MAX_DISPLAY_LEN};
pub use types::{ChatMessage, ConnectivityStatus, ResultKind, Sender, TerminalLine};
