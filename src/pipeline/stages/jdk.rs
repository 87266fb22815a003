use super::name::THROWABLE_PREFIX;
use crate::model::{Lambda, LambdaField};
use crate::pipeline::{Processor, Unmatched};

/// Functional interfaces already shipped by the JDK
/// (`java.util.function`, `java.lang.Runnable`, `java.util.Comparator`).
pub const JDK_INTERFACES: &[&str] = &[
    "BiConsumer",
    "BiFunction",
    "BinaryOperator",
    "BiPredicate",
    "BooleanSupplier",
    "Comparator",
    "Consumer",
    "DoubleBinaryOperator",
    "DoubleConsumer",
    "DoubleFunction",
    "DoublePredicate",
    "DoubleSupplier",
    "DoubleToIntFunction",
    "DoubleToLongFunction",
    "DoubleUnaryOperator",
    "Function",
    "IntBinaryOperator",
    "IntConsumer",
    "IntFunction",
    "IntPredicate",
    "IntSupplier",
    "IntToDoubleFunction",
    "IntToLongFunction",
    "IntUnaryOperator",
    "LongBinaryOperator",
    "LongConsumer",
    "LongFunction",
    "LongPredicate",
    "LongSupplier",
    "LongToDoubleFunction",
    "LongToIntFunction",
    "LongUnaryOperator",
    "ObjDoubleConsumer",
    "ObjIntConsumer",
    "ObjLongConsumer",
    "Predicate",
    "Runnable",
    "Supplier",
    "ToDoubleBiFunction",
    "ToDoubleFunction",
    "ToIntBiFunction",
    "ToIntFunction",
    "ToLongBiFunction",
    "ToLongFunction",
    "UnaryOperator",
];

pub fn is_jdk_interface(name: &str) -> bool {
    JDK_INTERFACES.contains(&name)
}

/// Flags entities whose non-throwing name is a JDK interface.
///
/// A throwing twin shares its source's flag; only non-throwing entities are
/// renamed later, so the flag alone never changes a throwing name.
#[derive(Debug, Default, Clone, Copy)]
pub struct JdkProcessor;

impl Processor for JdkProcessor {
    fn name(&self) -> &'static str {
        "Jdk"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::FromJdk]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        let name = lambda
            .name()
            .ok_or_else(|| Unmatched::new("entity has no name yet"))?;
        let base = if lambda.throwable() {
            name.strip_prefix(THROWABLE_PREFIX).unwrap_or(name)
        } else {
            name
        };
        Ok(vec![lambda.clone().with_from_jdk(is_jdk_interface(base))])
    }
}
