//! Helper functions available to templates.
//!
//! The template engines only see plain strings, so everything that needs
//! logic (type parameter clauses, javadoc wording) is computed here.

use crate::model::{Lambda, LambdaType, TypeEntity};
use crate::pipeline::stages::THROWABLE_PREFIX;

/// Generic type parameters in declaration order (inputs, then return).
pub fn type_parameters(lambda: &Lambda) -> Vec<String> {
    let mut params: Vec<String> = Vec::new();
    let slots = lambda.inputs().chain(lambda.return_type());
    for ty in slots.filter(|t| !t.is_primitive()) {
        let name = ty.generic_name().to_string();
        if !params.contains(&name) {
            params.push(name);
        }
    }
    params
}

/// `<T, U, R>`, or an empty string for fully specialized interfaces.
pub fn type_parameter_clause(lambda: &Lambda) -> String {
    let params = type_parameters(lambda);
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}

fn describe_inputs(lambda: &Lambda) -> String {
    let types: Vec<&str> = lambda.inputs().map(TypeEntity::name).collect();
    let count = match types.len() {
        0 => return "no arguments".to_string(),
        1 => "one argument",
        2 => "two arguments",
        _ => "three arguments",
    };
    format!("{count} ({})", types.join(", "))
}

fn describe_result(lambda: &Lambda) -> String {
    match lambda.return_type().and_then(TypeEntity::class) {
        Some(p) => format!("a {p}-valued result"),
        None => "a result".to_string(),
    }
}

/// One-sentence javadoc summary.
pub fn summary(lambda: &Lambda) -> String {
    let mut text = match lambda.kind() {
        LambdaType::Function => format!(
            "Represents a function that accepts {} and produces {}.",
            describe_inputs(lambda),
            describe_result(lambda)
        ),
        LambdaType::Operator => format!(
            "Represents an operation on {} that produces {} of the same type.",
            describe_inputs(lambda),
            describe_result(lambda)
        ),
        LambdaType::Consumer => format!(
            "Represents an operation that accepts {} and returns no result.",
            describe_inputs(lambda)
        ),
        LambdaType::Predicate => format!(
            "Represents a predicate (boolean-valued function) of {}.",
            describe_inputs(lambda)
        ),
        LambdaType::Supplier => format!("Represents a supplier of {}.", describe_result(lambda)),
        LambdaType::Runnable => {
            "Represents an action that takes no arguments and returns no result.".to_string()
        }
        LambdaType::Comparator => format!(
            "A comparison function imposing a total ordering on {}.",
            describe_inputs(lambda)
        ),
    };
    if let Some((from, to)) = lambda
        .inputs()
        .find_map(|t| t.conversion_target().map(|to| (t.name(), to)))
    {
        text.push_str(&format!(" Converts {from} to {to}."));
    }
    text
}

/// Name of the JDK interface this entity duplicates, if any.
pub fn jdk_equivalent(lambda: &Lambda) -> Option<String> {
    if !lambda.from_jdk() {
        return None;
    }
    let name = lambda.name()?;
    let base = name.strip_prefix(THROWABLE_PREFIX).unwrap_or(name);
    Some(base.trim_end_matches('2').to_string())
}
