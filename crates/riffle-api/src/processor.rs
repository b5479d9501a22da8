//! The processor capability — the one method a chain member implements.

use crate::error::ProcessError;
use crate::record::Record;

/// A record handler in a processing chain.
///
/// Invoked synchronously on whatever thread the surrounding record-feed
/// infrastructure uses; implementations complete before returning control
/// and perform no suspension. Decorators hold their inner handler as
/// `Box<dyn Processor>` and implement exactly this method — nothing else
/// is forwarded, because nothing else exists.
pub trait Processor: Send + Sync {
    /// Process one record.
    ///
    /// The record is borrowed for the duration of the call and must not be
    /// retained. Errors surface to the caller unchanged.
    fn process(&self, record: &Record) -> Result<(), ProcessError>;

    /// Handler name for logging and chain diagnostics.
    fn name(&self) -> &str;
}
