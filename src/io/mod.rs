//! I/O module
//!
//! Handles script parsing and balance sheet output.
//!
//! # Components
//!
//! - `script_format` - CSV format handling (row conversion, balance serialization)
//! - `script_reader` - Streaming script reader with iterator interface

pub mod script_format;
pub mod script_reader;

pub use script_format::{write_balances_csv, ScriptRecord};
pub use script_reader::ScriptReader;
