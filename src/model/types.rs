use serde::Serialize;
use std::fmt;

/// Generic placeholders for input positions one to three.
pub const INPUT_PLACEHOLDERS: [&str; 3] = ["T", "U", "V"];

/// Generic placeholder for a non-specialized return value.
pub const RETURN_PLACEHOLDER: &str = "R";

/// The closed set of Java primitive types a slot can be specialized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Double,
        Primitive::Float,
        Primitive::Int,
        Primitive::Long,
        Primitive::Short,
    ];

    /// The keyword used in Java source (`int`).
    pub fn java_name(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
        }
    }

    /// The wrapper class name (`Integer`).
    pub fn boxed_name(self) -> &'static str {
        match self {
            Primitive::Boolean => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Char => "Character",
            Primitive::Double => "Double",
            Primitive::Float => "Float",
            Primitive::Int => "Integer",
            Primitive::Long => "Long",
            Primitive::Short => "Short",
        }
    }

    /// The capitalized token used when composing interface names (`Int`).
    pub fn token(self) -> &'static str {
        match self {
            Primitive::Boolean => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Char => "Char",
            Primitive::Double => "Double",
            Primitive::Float => "Float",
            Primitive::Int => "Int",
            Primitive::Long => "Long",
            Primitive::Short => "Short",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.java_name())
    }
}

/// A concrete type that can occupy an input or return slot.
///
/// `class` is `None` only for unconstrained generic placeholders (`T`, `R`).
/// Values are never mutated once built; stages replace them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeEntity {
    class: Option<Primitive>,
    name: String,
    generic_name: String,
    conversion_target: Option<Primitive>,
}

impl TypeEntity {
    /// A slot specialized to a primitive.
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            class: Some(primitive),
            name: primitive.java_name().to_string(),
            generic_name: primitive.boxed_name().to_string(),
            conversion_target: None,
        }
    }

    /// An unconstrained generic placeholder such as `T` or `R`.
    pub fn placeholder(name: &str) -> Self {
        Self {
            class: None,
            name: name.to_string(),
            generic_name: name.to_string(),
            conversion_target: None,
        }
    }

    /// Copy of this entity marking a widening/narrowing conversion to `target`.
    pub fn with_conversion_target(&self, target: Primitive) -> Self {
        Self {
            conversion_target: Some(target),
            ..self.clone()
        }
    }

    pub fn class(&self) -> Option<Primitive> {
        self.class
    }

    pub fn is_primitive(&self) -> bool {
        self.class.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generic_name(&self) -> &str {
        &self.generic_name
    }

    pub fn conversion_target(&self) -> Option<Primitive> {
        self.conversion_target
    }

    /// Positional name token: `Obj` for placeholders, otherwise the primitive token.
    pub fn token(&self) -> &'static str {
        match self.class {
            Some(p) => p.token(),
            None => "Obj",
        }
    }
}

impl fmt::Display for TypeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conversion_target {
            Some(target) => write!(f, "{}->{}", self.name, target),
            None => f.write_str(&self.name),
        }
    }
}
