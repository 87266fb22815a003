use crate::model::{Lambda, LambdaField, MethodStyle};
use crate::pipeline::{Processor, Unmatched};

/// Adds a throwing twin for every entity.
///
/// The twin differs from its source only in `throwable` and `method_style`.
/// When disabled the stage passes entities through untouched.
#[derive(Debug, Clone, Copy)]
pub struct ThrowableProcessor {
    enabled: bool,
}

impl ThrowableProcessor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for ThrowableProcessor {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Processor for ThrowableProcessor {
    fn name(&self) -> &'static str {
        "Throwable"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Throwable, LambdaField::MethodStyle]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        if !self.enabled || lambda.throwable() {
            return Ok(vec![lambda.clone()]);
        }
        Ok(vec![
            lambda.clone(),
            lambda
                .clone()
                .with_throwable(true)
                .with_method_style(MethodStyle::Throws),
        ])
    }
}
