use crate::model::{
    Lambda, LambdaField, LambdaType, Primitive, TypeEntity, INPUT_PLACEHOLDERS,
};
use crate::pipeline::{Processor, Unmatched};

/// Fills one input position with every candidate type.
///
/// Entities whose arity is below the position pass through. The candidates
/// are the positional placeholder (`T`, `U`, `V`) and every primitive. A
/// comparator's second slot mirrors its first. A primitive input of a
/// function whose primitive return differs from it is marked as a conversion.
#[derive(Debug, Clone, Copy)]
pub struct InputTypeProcessor {
    position: usize,
}

impl InputTypeProcessor {
    pub fn one() -> Self {
        Self { position: 1 }
    }

    pub fn two() -> Self {
        Self { position: 2 }
    }

    pub fn three() -> Self {
        Self { position: 3 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn candidates(&self, lambda: &Lambda) -> Vec<TypeEntity> {
        let placeholder = INPUT_PLACEHOLDERS
            .get(self.position - 1)
            .copied()
            .unwrap_or("T");
        let conversion = match (lambda.kind(), lambda.return_type().and_then(TypeEntity::class)) {
            (LambdaType::Function, Some(ret)) => Some(ret),
            _ => None,
        };
        std::iter::once(TypeEntity::placeholder(placeholder))
            .chain(Primitive::ALL.into_iter().map(|p| {
                let ty = TypeEntity::primitive(p);
                match conversion {
                    Some(target) if target != p => ty.with_conversion_target(target),
                    _ => ty,
                }
            }))
            .collect()
    }
}

impl Processor for InputTypeProcessor {
    fn name(&self) -> &'static str {
        match self.position {
            1 => "InputTypeOne",
            2 => "InputTypeTwo",
            _ => "InputTypeThree",
        }
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        match self.position {
            1 => &[LambdaField::InputOne, LambdaField::Primitive],
            2 => &[LambdaField::InputTwo, LambdaField::Primitive],
            _ => &[LambdaField::InputThree, LambdaField::Primitive],
        }
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        if usize::from(lambda.arity()) < self.position {
            return Ok(vec![lambda.clone()]);
        }
        if self.position > 1 && lambda.input(self.position - 1).is_none() {
            return Err(Unmatched::new(format!(
                "input {} is unset, cannot fill input {}",
                self.position - 1,
                self.position
            )));
        }

        if lambda.kind() == LambdaType::Comparator && self.position == 2 {
            let first = lambda
                .input_one()
                .cloned()
                .ok_or_else(|| Unmatched::new("comparator without a first input"))?;
            return Ok(vec![lambda.clone().with_input(2, first)]);
        }

        Ok(self
            .candidates(lambda)
            .into_iter()
            .map(|ty| {
                let primitive = lambda.primitive() || ty.is_primitive();
                lambda
                    .clone()
                    .with_input(self.position, ty)
                    .with_primitive(primitive)
            })
            .collect())
    }
}
