use super::error::Unmatched;
use crate::model::{Lambda, LambdaField};

/// One stage of the generator pipeline.
///
/// A stage sees one entity at a time and returns what replaces it:
///
/// - several entities to expand (the arity stage fans one shape out to 1..=3 inputs)
/// - one entity to annotate (the package stage fills in `package`)
/// - no entity to filter
///
/// Returning [`Unmatched`] signals that no rule of the stage applies. Stages
/// may only change the fields listed in [`Processor::owned_fields`].
pub trait Processor {
    /// Stable stage name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fields this stage is allowed to change.
    fn owned_fields(&self) -> &'static [LambdaField];

    /// Entities this stage contributes before processing its input.
    /// Only the first stage of a chain seeds.
    fn seed(&self) -> Vec<Lambda> {
        Vec::new()
    }

    /// Produce the replacement for one input entity.
    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched>;
}
