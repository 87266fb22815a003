use crate::model::{Lambda, LambdaField, LambdaType, Primitive, TypeEntity};
use crate::pipeline::{Processor, Unmatched};

/// Prefix marking the throwing twin of an interface.
pub const THROWABLE_PREFIX: &str = "Throwable";

/// How the input slots read when composed into a name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputShape {
    None,
    /// Every input is a placeholder: `""`, `Bi`, `Tri`
    Placeholders(u8),
    /// Every input is the same primitive: `Int`, `IntBi`, `IntTri`
    Uniform(Primitive, u8),
    /// Anything else: one token per position (`ObjInt`, `ByteIntLong`)
    Mixed(String),
}

impl InputShape {
    fn of(lambda: &Lambda) -> Self {
        let inputs: Vec<&TypeEntity> = lambda.inputs().collect();
        let Some(first) = inputs.first() else {
            return InputShape::None;
        };
        let arity = inputs.len() as u8;
        if inputs.iter().all(|t| !t.is_primitive()) {
            return InputShape::Placeholders(arity);
        }
        if let Some(p) = first.class() {
            if inputs.iter().all(|t| t.class() == Some(p)) {
                return InputShape::Uniform(p, arity);
            }
        }
        InputShape::Mixed(inputs.iter().map(|t| t.token()).collect())
    }

    fn render(&self) -> String {
        match self {
            InputShape::None => String::new(),
            InputShape::Placeholders(arity) => arity_prefix(*arity).to_string(),
            InputShape::Uniform(p, arity) => format!("{}{}", p.token(), arity_prefix(*arity)),
            InputShape::Mixed(tokens) => tokens.clone(),
        }
    }
}

fn arity_prefix(arity: u8) -> &'static str {
    match arity {
        2 => "Bi",
        3 => "Tri",
        _ => "",
    }
}

fn operator_arity(arity: u8) -> Option<&'static str> {
    match arity {
        1 => Some("Unary"),
        2 => Some("Binary"),
        3 => Some("Ternary"),
        _ => None,
    }
}

/// Synthesizes interface names.
///
/// Names are composed from prefix-free tokens (`Obj`, primitive tokens, `Bi`,
/// `Tri`, `To`) followed by the shape name, so distinct slot tuples never
/// collide:
///
/// | slots | name |
/// |---|---|
/// | `(T) -> R` | `Function` |
/// | `(byte) -> R` | `ByteFunction` |
/// | `(T, U) -> int` | `ToIntBiFunction` |
/// | `(int) -> long` | `IntToLongFunction` |
/// | `(int, int) -> int` | `IntBinaryOperator` |
/// | `(T, int)` consumer | `ObjIntConsumer` |
/// | `() -> boolean` | `BooleanSupplier` |
///
/// Throwing twins get the `Throwable` prefix.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameProcessor;

impl NameProcessor {
    pub fn base_name(lambda: &Lambda) -> Result<String, Unmatched> {
        let shape = InputShape::of(lambda);
        let ret = lambda.return_type().and_then(TypeEntity::class);
        let kind = lambda.kind();
        let name = match kind {
            LambdaType::Runnable => kind.simple_name().to_string(),
            LambdaType::Supplier => match ret {
                Some(p) => format!("{}{}", p.token(), kind.simple_name()),
                None => kind.simple_name().to_string(),
            },
            LambdaType::Comparator => match shape {
                InputShape::Placeholders(2) => kind.simple_name().to_string(),
                InputShape::Uniform(p, 2) => format!("{}{}", p.token(), kind.simple_name()),
                _ => return Err(Unmatched::new("comparator inputs must match")),
            },
            LambdaType::Consumer | LambdaType::Predicate => {
                if shape == InputShape::None {
                    return Err(Unmatched::new("no inputs to name"));
                }
                format!("{}{}", shape.render(), kind.simple_name())
            }
            LambdaType::Function => match (ret, &shape) {
                (_, InputShape::None) => return Err(Unmatched::new("no inputs to name")),
                (None, _) => format!("{}{}", shape.render(), kind.simple_name()),
                (Some(q), InputShape::Placeholders(arity)) => format!(
                    "To{}{}{}",
                    q.token(),
                    arity_prefix(*arity),
                    kind.simple_name()
                ),
                (Some(q), _) => format!("{}To{}{}", shape.render(), q.token(), kind.simple_name()),
            },
            LambdaType::Operator => match shape {
                InputShape::Uniform(p, arity) => {
                    let prefix = operator_arity(arity)
                        .ok_or_else(|| Unmatched::new("operator arity out of range"))?;
                    format!("{}{}{}", p.token(), prefix, kind.simple_name())
                }
                _ => return Err(Unmatched::new("operator inputs must share one primitive")),
            },
        };
        Ok(name)
    }

    pub fn synthesize(lambda: &Lambda) -> Result<String, Unmatched> {
        let base = Self::base_name(lambda)?;
        if lambda.throwable() {
            Ok(format!("{THROWABLE_PREFIX}{base}"))
        } else {
            Ok(base)
        }
    }
}

impl Processor for NameProcessor {
    fn name(&self) -> &'static str {
        "Name"
    }

    fn owned_fields(&self) -> &'static [LambdaField] {
        &[LambdaField::Name]
    }

    fn process(&self, lambda: &Lambda) -> Result<Vec<Lambda>, Unmatched> {
        let name = Self::synthesize(lambda)?;
        Ok(vec![lambda.clone().with_name(name)])
    }
}
