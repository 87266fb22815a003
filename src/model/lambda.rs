use super::types::TypeEntity;
use serde::Serialize;
use std::fmt;

/// Functional shape of a generated interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LambdaType {
    Comparator,
    Consumer,
    Function,
    Operator,
    Predicate,
    Runnable,
    Supplier,
}

impl LambdaType {
    pub const ALL: [LambdaType; 7] = [
        LambdaType::Comparator,
        LambdaType::Consumer,
        LambdaType::Function,
        LambdaType::Operator,
        LambdaType::Predicate,
        LambdaType::Runnable,
        LambdaType::Supplier,
    ];

    /// Suffix used in interface names (`Consumer`).
    pub fn simple_name(self) -> &'static str {
        match self {
            LambdaType::Comparator => "Comparator",
            LambdaType::Consumer => "Consumer",
            LambdaType::Function => "Function",
            LambdaType::Operator => "Operator",
            LambdaType::Predicate => "Predicate",
            LambdaType::Runnable => "Runnable",
            LambdaType::Supplier => "Supplier",
        }
    }

    /// Package segment the shape lives under (`consumer`).
    pub fn package_segment(self) -> &'static str {
        match self {
            LambdaType::Comparator => "comparator",
            LambdaType::Consumer => "consumer",
            LambdaType::Function => "function",
            LambdaType::Operator => "operator",
            LambdaType::Predicate => "predicate",
            LambdaType::Runnable => "runnable",
            LambdaType::Supplier => "supplier",
        }
    }

    /// Whether the functional method produces a value.
    pub fn has_return(self) -> bool {
        !matches!(self, LambdaType::Consumer | LambdaType::Runnable)
    }
}

impl fmt::Display for LambdaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

/// Naming convention of the functional method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MethodStyle {
    /// `apply`, `accept`, ...
    #[default]
    Plain,
    /// `applyThrows`, `acceptThrows`, ... declaring `throws Throwable`.
    Throws,
}

impl MethodStyle {
    pub fn suffix(self) -> &'static str {
        match self {
            MethodStyle::Plain => "",
            MethodStyle::Throws => "Throws",
        }
    }
}

/// One parameter of the functional method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    pub java_type: String,
    pub name: String,
}

/// The functional method of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MethodSignature {
    /// Method name including the `Throws` suffix when applicable.
    pub name: String,
    /// Method name without any style suffix (`applyAsInt`).
    pub base_name: String,
    /// Java return type text; `void` for consumers and runnables.
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// Declared checked exception, if any.
    pub throws: Option<String>,
}

impl MethodSignature {
    /// `R apply(T t, U u) throws Throwable`
    pub fn declaration(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.java_type, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        match &self.throws {
            Some(throws) => format!(
                "{} {}({}) throws {}",
                self.return_type, self.name, params, throws
            ),
            None => format!("{} {}({})", self.return_type, self.name, params),
        }
    }

    /// Comma separated argument names, for forwarding calls.
    pub fn arguments(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Every attribute of a [`Lambda`], used to state which stage owns what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LambdaField {
    Kind,
    Arity,
    InputOne,
    InputTwo,
    InputThree,
    ReturnType,
    Primitive,
    Throwable,
    MethodStyle,
    Package,
    Method,
    Name,
    FromJdk,
}

impl fmt::Display for LambdaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LambdaField::Kind => "kind",
            LambdaField::Arity => "arity",
            LambdaField::InputOne => "input_one",
            LambdaField::InputTwo => "input_two",
            LambdaField::InputThree => "input_three",
            LambdaField::ReturnType => "return_type",
            LambdaField::Primitive => "primitive",
            LambdaField::Throwable => "throwable",
            LambdaField::MethodStyle => "method_style",
            LambdaField::Package => "package",
            LambdaField::Method => "method",
            LambdaField::Name => "name",
            LambdaField::FromJdk => "from_jdk",
        };
        f.write_str(name)
    }
}

/// Identity tuple of a lambda: two entities with equal keys would generate the
/// same interface. Derived attributes (name, package, method, JDK flag) are not
/// part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LambdaKey {
    pub kind: LambdaType,
    pub arity: u8,
    pub inputs: [Option<String>; 3],
    pub return_type: Option<String>,
    pub primitive: bool,
    pub throwable: bool,
}

/// Descriptor of one generated interface.
///
/// Instances are immutable: every stage builds new values through the
/// `with_*` copy-with-update methods.
///
/// `==` and `Hash` are structural and compare every field, derived ones
/// included, so stage outputs can be checked exactly. Identity of the
/// generated interface is [`Lambda::key`]: deduplicate and index by the key,
/// not by the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lambda {
    kind: LambdaType,
    arity: u8,
    inputs: [Option<TypeEntity>; 3],
    return_type: Option<TypeEntity>,
    primitive: bool,
    throwable: bool,
    method_style: MethodStyle,
    package: Option<String>,
    method: Option<MethodSignature>,
    name: Option<String>,
    from_jdk: bool,
}

impl Lambda {
    /// A fresh stub carrying only its functional shape.
    pub fn new(kind: LambdaType) -> Self {
        Self {
            kind,
            arity: 0,
            inputs: [None, None, None],
            return_type: None,
            primitive: false,
            throwable: false,
            method_style: MethodStyle::Plain,
            package: None,
            method: None,
            name: None,
            from_jdk: false,
        }
    }

    pub fn kind(&self) -> LambdaType {
        self.kind
    }

    pub fn arity(&self) -> u8 {
        self.arity
    }

    /// Input slot by 1-based position.
    pub fn input(&self, position: usize) -> Option<&TypeEntity> {
        position
            .checked_sub(1)
            .and_then(|idx| self.inputs.get(idx))
            .and_then(Option::as_ref)
    }

    pub fn input_one(&self) -> Option<&TypeEntity> {
        self.input(1)
    }

    pub fn input_two(&self) -> Option<&TypeEntity> {
        self.input(2)
    }

    pub fn input_three(&self) -> Option<&TypeEntity> {
        self.input(3)
    }

    /// Populated input slots in position order.
    pub fn inputs(&self) -> impl Iterator<Item = &TypeEntity> {
        self.inputs.iter().flatten()
    }

    pub fn return_type(&self) -> Option<&TypeEntity> {
        self.return_type.as_ref()
    }

    pub fn primitive(&self) -> bool {
        self.primitive
    }

    pub fn throwable(&self) -> bool {
        self.throwable
    }

    pub fn method_style(&self) -> MethodStyle {
        self.method_style
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn method(&self) -> Option<&MethodSignature> {
        self.method.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn from_jdk(&self) -> bool {
        self.from_jdk
    }

    /// Fully qualified interface name, once both package and name are known.
    pub fn qualified_name(&self) -> Option<String> {
        match (&self.package, &self.name) {
            (Some(package), Some(name)) => Some(format!("{package}.{name}")),
            _ => None,
        }
    }

    pub fn with_kind(mut self, kind: LambdaType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_arity(mut self, arity: u8) -> Self {
        self.arity = arity;
        self
    }

    /// Set the input slot at a 1-based position. Positions outside 1..=3 are ignored.
    pub fn with_input(mut self, position: usize, ty: TypeEntity) -> Self {
        if let Some(slot) = position
            .checked_sub(1)
            .and_then(|idx| self.inputs.get_mut(idx))
        {
            *slot = Some(ty);
        }
        self
    }

    pub fn with_return_type(mut self, ty: TypeEntity) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn with_primitive(mut self, primitive: bool) -> Self {
        self.primitive = primitive;
        self
    }

    pub fn with_throwable(mut self, throwable: bool) -> Self {
        self.throwable = throwable;
        self
    }

    pub fn with_method_style(mut self, style: MethodStyle) -> Self {
        self.method_style = style;
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_from_jdk(mut self, from_jdk: bool) -> Self {
        self.from_jdk = from_jdk;
        self
    }

    /// The identity tuple used for deduplication.
    pub fn key(&self) -> LambdaKey {
        LambdaKey {
            kind: self.kind,
            arity: self.arity,
            inputs: [
                self.inputs[0].as_ref().map(|t| t.name().to_string()),
                self.inputs[1].as_ref().map(|t| t.name().to_string()),
                self.inputs[2].as_ref().map(|t| t.name().to_string()),
            ],
            return_type: self.return_type.as_ref().map(|t| t.name().to_string()),
            primitive: self.primitive,
            throwable: self.throwable,
        }
    }

    /// Fields whose values differ between `self` and `other`.
    pub fn differing_fields(&self, other: &Lambda) -> Vec<LambdaField> {
        let mut fields = Vec::new();
        if self.kind != other.kind {
            fields.push(LambdaField::Kind);
        }
        if self.arity != other.arity {
            fields.push(LambdaField::Arity);
        }
        if self.inputs[0] != other.inputs[0] {
            fields.push(LambdaField::InputOne);
        }
        if self.inputs[1] != other.inputs[1] {
            fields.push(LambdaField::InputTwo);
        }
        if self.inputs[2] != other.inputs[2] {
            fields.push(LambdaField::InputThree);
        }
        if self.return_type != other.return_type {
            fields.push(LambdaField::ReturnType);
        }
        if self.primitive != other.primitive {
            fields.push(LambdaField::Primitive);
        }
        if self.throwable != other.throwable {
            fields.push(LambdaField::Throwable);
        }
        if self.method_style != other.method_style {
            fields.push(LambdaField::MethodStyle);
        }
        if self.package != other.package {
            fields.push(LambdaField::Package);
        }
        if self.method != other.method {
            fields.push(LambdaField::Method);
        }
        if self.name != other.name {
            fields.push(LambdaField::Name);
        }
        if self.from_jdk != other.from_jdk {
            fields.push(LambdaField::FromJdk);
        }
        fields
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self
            .inputs()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}/{}({})", self.kind, self.arity, inputs)?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        if self.primitive {
            f.write_str(" [primitive]")?;
        }
        if self.throwable {
            f.write_str(" [throwable]")?;
        }
        if self.from_jdk {
            f.write_str(" [jdk]")?;
        }
        if let Some(name) = self.qualified_name().or_else(|| self.name.clone()) {
            write!(f, " {name}")?;
        }
        Ok(())
    }
}
