//! # multablib
//!
//! Multiplication tables over arithmetic sequences: read min, max and
//! increment from a properties file at a declared numeric kind, validate
//! them, and produce the outer-product grid.
//!
//! ## Overview
//!
//! The pipeline has three stages, each usable on its own:
//!
//! - **Parsing**: [`Properties`] loads the key/value configuration and
//!   [`NumericKind`] coerces the raw strings at a declared width (`byte`,
//!   `int`, `long`, `float`, `double`) into the canonical `f64` [`Range`].
//! - **Validation**: [`validate()`] checks a range and reports problems
//!   through an injected [`Diagnostics`] sink; an invalid range is a normal
//!   `false`, not an error value.
//! - **Generation**: [`rows`] streams the grid one row at a time, [`Table`]
//!   materializes it for structured output, and [`format_row`] renders the
//!   fixed-width cells.
//!
//! Every kind is computed in `f64`; the kind decides parsing width and
//! diagnostics only, so the validation and generation logic exists once.
//!
//! ## Example
//!
//! ```rust
//! use multablib::{validate, MemoryDiagnostics, NumericKind, Properties, Range, Table};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a configuration file
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("config.properties");
//! fs::write(&path, "min=1\nmax=3\nincrement=1\n").unwrap();
//!
//! // Load and coerce the values
//! let props = Properties::load(&path).unwrap();
//! let range = Range::parse(
//!     NumericKind::Int32,
//!     props.require("min").unwrap(),
//!     props.require("max").unwrap(),
//!     props.require("increment").unwrap(),
//! )
//! .unwrap();
//!
//! // Validate, then generate
//! let diag = MemoryDiagnostics::new();
//! assert!(validate(&range, &diag));
//!
//! let table = Table::generate(&range);
//! assert_eq!(table.rows[2], vec![3.0, 6.0, 9.0]);
//! ```

pub mod diag;
pub mod error;
pub mod kind;
pub mod properties;
pub mod range;
pub mod table;
pub mod validate;

pub use diag::{Diagnostics, MemoryDiagnostics, Severity, TracingDiagnostics};
pub use error::MultabError;
pub use kind::NumericKind;
pub use properties::Properties;
pub use range::Range;
pub use table::{format_row, rows, step_count, terms, CELL_PRECISION, CELL_WIDTH, Rows, Table};
pub use validate::validate;

/// Result type for multablib operations
pub type Result<T> = std::result::Result<T, MultabError>;
