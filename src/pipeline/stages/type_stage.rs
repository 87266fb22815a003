use crate::model::{Lambda, LambdaField, LambdaType};
use crate::pipeline::{Processor, Unmatched};

/// Seeds the pipeline with one stub per functional shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeProcessor;

impl Processor for TypeProcessor {
    fn name(&self) -> &'static str {
        "Type"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Kind]
    }

    fn seed(&self) -> Vec<Lambda> {
        LambdaType::ALL.iter().map(|k| Lambda::new(*k)).collect()
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        Ok(vec![lambda.clone()])
    }
}
