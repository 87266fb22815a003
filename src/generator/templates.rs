use askama::Template;
use serde::Serialize;

use super::helpers::{jdk_equivalent, summary, type_parameter_clause};
use crate::model::{AnnotationEntity, Lambda, MethodSignature};

/// Flattened, string-only view of one finished lambda.
///
/// Both template engines read the same view, so a user template sees exactly
/// the variables the built-in one does.
#[derive(Debug, Clone, Serialize)]
pub struct LambdaView {
    /// Interface simple name (`IntToLongFunction`)
    pub name: String,
    /// Destination package
    pub package: String,
    /// Functional shape (`Function`, `Consumer`, ...)
    pub kind: String,
    /// `<T, U, R>` or empty
    pub type_params: String,
    /// Full declaration of the functional method
    pub method_decl: String,
    /// Name of the functional method (`applyAsIntThrows`)
    pub method_name: String,
    /// Declaration without the `Throws` suffix and clause
    pub plain_decl: String,
    /// Comma separated parameter names
    pub arguments: String,
    /// Java return type text, `void` when nothing is returned
    pub return_type: String,
    pub returns_value: bool,
    pub throwable: bool,
    pub from_jdk: bool,
    /// JDK interface this one duplicates, empty otherwise
    pub jdk_name: String,
    /// One-sentence javadoc summary
    pub summary: String,
}

fn plain_declaration(method: &MethodSignature) -> String {
    MethodSignature {
        name: method.base_name.clone(),
        throws: None,
        ..method.clone()
    }
    .declaration()
}

impl LambdaView {
    /// Build the view, or `None` when the lambda never got a name, package
    /// or method.
    pub fn from_lambda(lambda: &Lambda) -> Option<Self> {
        let method = lambda.method()?;
        Some(LambdaView {
            name: lambda.name()?.to_string(),
            package: lambda.package()?.to_string(),
            kind: lambda.kind().to_string(),
            type_params: type_parameter_clause(lambda),
            method_decl: method.declaration(),
            method_name: method.name.clone(),
            plain_decl: plain_declaration(method),
            arguments: method.arguments(),
            return_type: method.return_type.clone(),
            returns_value: method.return_type != "void",
            throwable: lambda.throwable(),
            from_jdk: lambda.from_jdk(),
            jdk_name: jdk_equivalent(lambda).unwrap_or_default(),
            summary: summary(lambda),
        })
    }
}

/// Template data for one generated `.java` source file
#[derive(Template, Serialize)]
#[template(path = "lambda.java.txt", escape = "none")]
pub struct RenderContext {
    pub lambda: LambdaView,
    pub annotation: AnnotationEntity,
}

impl RenderContext {
    pub fn new(lambda: LambdaView, annotation: AnnotationEntity) -> Self {
        RenderContext { lambda, annotation }
    }
}
