use crate::model::{Lambda, LambdaField, LambdaType, Primitive, TypeEntity, RETURN_PLACEHOLDER};
use crate::pipeline::{Processor, Unmatched};

/// Attaches return types.
///
/// Predicates and comparators get their fixed `boolean`/`int` result, which
/// does not count as a primitive specialization. Suppliers vary over `R` and
/// every primitive; functions over `R` and every primitive but `boolean`
/// (a boolean-valued function is a predicate).
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnTypeProcessor;

impl ReturnTypeProcessor {
    fn candidates(kind: LambdaType) -> Vec<TypeEntity> {
        let primitives = Primitive::ALL
            .into_iter()
            .filter(move |p| kind != LambdaType::Function || *p != Primitive::Boolean)
            .map(TypeEntity::primitive);
        std::iter::once(TypeEntity::placeholder(RETURN_PLACEHOLDER))
            .chain(primitives)
            .collect()
    }
}

impl Processor for ReturnTypeProcessor {
    fn name(&self) -> &'static str {
        "ReturnType"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::ReturnType, LambdaField::Primitive]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        match lambda.kind() {
            LambdaType::Consumer | LambdaType::Runnable => Ok(vec![lambda.clone()]),
            LambdaType::Predicate => Ok(vec![lambda
                .clone()
                .with_return_type(TypeEntity::primitive(Primitive::Boolean))]),
            LambdaType::Comparator => Ok(vec![lambda
                .clone()
                .with_return_type(TypeEntity::primitive(Primitive::Int))]),
            LambdaType::Supplier | LambdaType::Function => Ok(Self::candidates(lambda.kind())
                .into_iter()
                .map(|ty| {
                    let primitive = lambda.primitive() || ty.is_primitive();
                    lambda.clone().with_return_type(ty).with_primitive(primitive)
                })
                .collect()),
            LambdaType::Operator => Err(Unmatched::new(
                "operators take their return type from their inputs",
            )),
        }
    }
}
