//! Riffle — record-processing vocabulary.
//!
//! This crate is the single source of truth for the types every chain
//! member speaks: the [`Record`] flowing through a processing chain, the
//! [`Processor`] capability each chain member implements, and the
//! [`ProcessError`] taxonomy they propagate.

pub mod error;
pub mod processor;
pub mod record;

pub use error::ProcessError;
pub use processor::Processor;
pub use record::{Header, Headers, Record};
