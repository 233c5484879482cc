//! Core types for docmap
//!
//! This crate defines the foundational types shared by every converter:
//! - Value: the store's wire primitives
//! - Timestamp: UTC instants (the temporal wire type)
//! - CalendarDate: dates without time of day or zone
//! - Error: the coercion error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod temporal;
pub mod value;

pub use error::{Error, Result};
pub use temporal::{CalendarDate, Timestamp};
pub use value::Value;
