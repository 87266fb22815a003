use crate::model::{Lambda, LambdaField, LambdaType, TypeEntity};
use crate::pipeline::{Processor, Unmatched};

/// How the slots of a lambda mix primitives and placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// No primitive specialization
    Generic,
    /// A placeholder input mixed with a primitive slot
    Obj,
    /// All inputs primitive, or no inputs and a primitive return
    Primitive,
    /// A function from primitives to a primitive of another type
    Conversion,
}

impl Composition {
    pub fn of(lambda: &Lambda) -> Self {
        if !lambda.primitive() {
            return Composition::Generic;
        }
        if lambda.inputs().any(|t| !t.is_primitive()) {
            return Composition::Obj;
        }
        let primitive_return = lambda.return_type().is_some_and(TypeEntity::is_primitive);
        if lambda.kind() == LambdaType::Function && lambda.arity() > 0 && primitive_return {
            return Composition::Conversion;
        }
        Composition::Primitive
    }

    pub fn segment(self) -> Option<&'static str> {
        match self {
            Composition::Generic => None,
            Composition::Obj => Some("obj"),
            Composition::Primitive => Some("primitive"),
            Composition::Conversion => Some("conversion"),
        }
    }
}

/// Derives the destination package from shape and slot composition:
/// `<root>.<shape>[.obj|.primitive|.conversion]`.
#[derive(Debug, Clone)]
pub struct PackageProcessor {
    root: String,
}

impl PackageProcessor {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn package_for(&self, lambda: &Lambda) -> String {
        let base = format!("{}.{}", self.root, lambda.kind().package_segment());
        match Composition::of(lambda).segment() {
            Some(segment) => format!("{base}.{segment}"),
            None => base,
        }
    }
}

impl Processor for PackageProcessor {
    fn name(&self) -> &'static str {
        "Package"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Package]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        Ok(vec![lambda.clone().with_package(self.package_for(lambda))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Primitive;

    fn packages() -> PackageProcessor {
        PackageProcessor::new("io.lambdagen")
    }

    #[test]
    fn test_generic_function() {
        let lambda = Lambda::new(LambdaType::Function)
            .with_arity(1)
            .with_return_type(TypeEntity::placeholder("R"))
            .with_input(1, TypeEntity::placeholder("T"));
        assert_eq!(packages().package_for(&lambda), "io.lambdagen.function");
    }

    #[test]
    fn test_primitive_function() {
        let lambda = Lambda::new(LambdaType::Function)
            .with_arity(1)
            .with_return_type(TypeEntity::placeholder("R"))
            .with_input(1, TypeEntity::primitive(Primitive::Byte))
            .with_primitive(true);
        assert_eq!(
            packages().package_for(&lambda),
            "io.lambdagen.function.primitive"
        );
    }

    #[test]
    fn test_obj_mix() {
        let lambda = Lambda::new(LambdaType::Consumer)
            .with_arity(2)
            .with_input(1, TypeEntity::placeholder("T"))
            .with_input(2, TypeEntity::primitive(Primitive::Int))
            .with_primitive(true);
        assert_eq!(packages().package_for(&lambda), "io.lambdagen.consumer.obj");
    }

    #[test]
    fn test_conversion() {
        let lambda = Lambda::new(LambdaType::Function)
            .with_arity(1)
            .with_return_type(TypeEntity::primitive(Primitive::Float))
            .with_input(1, TypeEntity::primitive(Primitive::Byte))
            .with_primitive(true);
        assert_eq!(
            packages().package_for(&lambda),
            "io.lambdagen.function.conversion"
        );
    }

    #[test]
    fn test_primitive_supplier_and_operator() {
        let supplier = Lambda::new(LambdaType::Supplier)
            .with_return_type(TypeEntity::primitive(Primitive::Int))
            .with_primitive(true);
        assert_eq!(
            packages().package_for(&supplier),
            "io.lambdagen.supplier.primitive"
        );
        let operator = Lambda::new(LambdaType::Operator)
            .with_arity(1)
            .with_return_type(TypeEntity::primitive(Primitive::Int))
            .with_input(1, TypeEntity::primitive(Primitive::Int))
            .with_primitive(true);
        assert_eq!(
            packages().package_for(&operator),
            "io.lambdagen.operator.primitive"
        );
    }

    #[test]
    fn test_fixed_predicate_return_is_generic() {
        let lambda = Lambda::new(LambdaType::Predicate)
            .with_arity(1)
            .with_return_type(TypeEntity::primitive(Primitive::Boolean))
            .with_input(1, TypeEntity::placeholder("T"));
        assert_eq!(packages().package_for(&lambda), "io.lambdagen.predicate");
    }
}
