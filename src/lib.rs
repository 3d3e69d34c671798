//! # Liberty Core
//!
//! A parser and query engine for Liberty (.lib) standard-cell libraries.
//!
//! This library provides:
//! - A parser that turns Liberty text into an owned attribute tree
//! - Shallow, first-match lookups for navigating library → cell → pin
//! - Typed attribute extraction with integer-to-float widening
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`liberty`] - Line-continuation folding, tokenizer, parser, and the tree types
//! - [`query`] - Read-only lookups over a parsed tree
//! - [`lookup`] - Cell/pin capacitance reports for command-line and WASM use
//! - [`error`] - The unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! liberty asap7sc7p5t_AO_LVT_TT_nldm_211120.lib A2O1A1Ixp33_ASAP7_75t_L A1
//! ```
//!
//! ### Library
//!
//! ```
//! use liberty_core::{liberty, query};
//!
//! let lib = liberty::parse(
//!     "library (L) { cell (C) { pin (A1) { capacitance : 1.25 ; } } }",
//! )?;
//! let pin = query::resolve_path(lib.root(), &[("cell", "C"), ("pin", "A1")]).unwrap();
//! assert_eq!(query::find_attribute_numeric(pin, "capacitance"), Some(1.25));
//! # Ok::<(), liberty_core::LibertyError>(())
//! ```
//!
//! Parsing runs synchronously over a fully buffered input. A parsed
//! [`Library`] is immutable and owns its whole tree, so independent files
//! can be parsed and queried on separate threads.

pub mod error;
pub mod liberty;
pub mod lookup;
pub mod query;

// Re-export main types for convenience
pub use error::{LibertyError, Result};
pub use liberty::{parse, Group, Library, Scalar, Statement};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLibrary;
