use crate::model::{
    Lambda, LambdaField, LambdaType, MethodSignature, MethodStyle, Parameter, TypeEntity,
};
use crate::pipeline::{Processor, Unmatched};

const PARAMETER_NAMES: [&str; 3] = ["t", "u", "v"];
const COMPARATOR_PARAMETER_NAMES: [&str; 2] = ["o1", "o2"];

/// Computes the functional method following the `java.util.function`
/// conventions: `apply`, `accept`, `test`, `get`, `run`, `compare`, with an
/// `As<Prim>` suffix for primitive results (`applyAsInt`, `getAsBoolean`).
/// The throwing style appends `Throws` and declares `throws Throwable`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodProcessor;

impl MethodProcessor {
    pub fn base_name(lambda: &Lambda) -> String {
        let verb = match lambda.kind() {
            LambdaType::Comparator => "compare",
            LambdaType::Consumer => "accept",
            LambdaType::Function | LambdaType::Operator => "apply",
            LambdaType::Predicate => "test",
            LambdaType::Runnable => "run",
            LambdaType::Supplier => "get",
        };
        let specialized = matches!(
            lambda.kind(),
            LambdaType::Function | LambdaType::Operator | LambdaType::Supplier
        );
        match lambda.return_type().and_then(TypeEntity::class) {
            Some(ret) if specialized => format!("{verb}As{}", ret.token()),
            _ => verb.to_string(),
        }
    }

    pub fn signature(lambda: &Lambda) -> MethodSignature {
        let base_name = Self::base_name(lambda);
        let return_type = if lambda.kind().has_return() {
            lambda
                .return_type()
                .map(|t| t.name().to_string())
                .unwrap_or_else(|| "void".to_string())
        } else {
            "void".to_string()
        };
        let parameters = lambda
            .inputs()
            .enumerate()
            .map(|(idx, ty)| {
                let name = if lambda.kind() == LambdaType::Comparator {
                    COMPARATOR_PARAMETER_NAMES.get(idx)
                } else {
                    PARAMETER_NAMES.get(idx)
                };
                Parameter {
                    java_type: ty.name().to_string(),
                    name: name.copied().unwrap_or("arg").to_string(),
                }
            })
            .collect();
        let style = lambda.method_style();
        MethodSignature {
            name: format!("{base_name}{}", style.suffix()),
            base_name,
            return_type,
            parameters,
            throws: match style {
                MethodStyle::Plain => None,
                MethodStyle::Throws => Some("Throwable".to_string()),
            },
        }
    }
}

impl Processor for MethodProcessor {
    fn name(&self) -> &'static str {
        "Method"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Method]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        Ok(vec![lambda.clone().with_method(Self::signature(lambda))])
    }
}
