use crate::model::{Lambda, LambdaField, LambdaType};
use crate::pipeline::{Processor, Unmatched};

/// Fans each shape out across the arities it supports.
///
/// Operator stubs are dropped here: operators only arise when the
/// change-operator stage reclassifies a same-type primitive function.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArityProcessor;

impl ArityProcessor {
    pub fn arities_for(kind: LambdaType) -> &'static [u8] {
        match kind {
            LambdaType::Runnable | LambdaType::Supplier => &[0],
            LambdaType::Comparator => &[2],
            LambdaType::Consumer | LambdaType::Function | LambdaType::Predicate => &[1, 2, 3],
            LambdaType::Operator => &[],
        }
    }
}

impl Processor for ArityProcessor {
    fn name(&self) -> &'static str {
        "Arity"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Arity]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        Ok(Self::arities_for(lambda.kind())
            .iter()
            .map(|arity| lambda.clone().with_arity(*arity))
            .collect())
    }
}
