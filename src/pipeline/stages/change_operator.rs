use crate::model::{Lambda, LambdaField, LambdaType, TypeEntity};
use crate::pipeline::{Processor, Unmatched};

/// Relabels same-type primitive functions as operators.
///
/// A function whose inputs are all the primitive `P` and whose return is `P`
/// becomes an operator (`int -> int` is `IntUnaryOperator`, not `IntToIntFunction`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ChangeOperatorProcessor;

impl ChangeOperatorProcessor {
    pub fn is_operator(lambda: &Lambda) -> bool {
        if lambda.kind() != LambdaType::Function || lambda.arity() == 0 {
            return false;
        }
        let Some(ret) = lambda.return_type().and_then(TypeEntity::class) else {
            return false;
        };
        lambda.inputs().count() == usize::from(lambda.arity())
            && lambda.inputs().all(|t| t.class() == Some(ret))
    }
}

impl Processor for ChangeOperatorProcessor {
    fn name(&self) -> &'static str {
        "ChangeOperator"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Kind]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        if Self::is_operator(lambda) {
            Ok(vec![lambda.clone().with_kind(LambdaType::Operator)])
        } else {
            Ok(vec![lambda.clone()])
        }
    }
}
