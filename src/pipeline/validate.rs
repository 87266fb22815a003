//! Invariant checks over the finished lambda set.
//!
//! Run after post-processing and before any file is written. A non-empty
//! result aborts generation.

use crate::model::{Lambda, LambdaKey, LambdaType, Primitive, TypeEntity};
use std::collections::HashMap;
use std::fmt;

/// One violated invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Entity the issue was found on (name, or diagnostic form if unnamed)
    pub location: String,
    /// Machine readable kind, e.g. `duplicate_name`
    pub kind: String,
    /// Human readable description
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

fn location(lambda: &Lambda) -> String {
    lambda
        .qualified_name()
        .unwrap_or_else(|| lambda.to_string())
}

/// Check every invariant of the finished set.
pub fn validate_lambdas(lambdas: &[Lambda]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for lambda in lambdas {
        check_entity(lambda, &mut issues);
    }
    check_unique(lambdas, &mut issues);
    issues
}

fn check_entity(lambda: &Lambda, issues: &mut Vec<ValidationIssue>) {
    let loc = location(lambda);

    // slots 1..=arity populated, the rest empty
    let arity = usize::from(lambda.arity());
    let gapless = (1..=3).all(|pos| lambda.input(pos).is_some() == (pos <= arity));
    if !gapless {
        issues.push(ValidationIssue::new(
            &loc,
            "arity_mismatch",
            format!(
                "arity {} but {} input slot(s) populated",
                arity,
                lambda.inputs().count()
            ),
        ));
    }

    match lambda.kind() {
        LambdaType::Consumer | LambdaType::Runnable => {
            if lambda.return_type().is_some() {
                issues.push(ValidationIssue::new(
                    &loc,
                    "unexpected_return",
                    format!("{} must not declare a return type", lambda.kind()),
                ));
            }
        }
        LambdaType::Predicate => {
            if lambda.return_type().and_then(TypeEntity::class) != Some(Primitive::Boolean) {
                issues.push(ValidationIssue::new(
                    &loc,
                    "predicate_return",
                    "Predicate must return boolean",
                ));
            }
        }
        _ => {
            if lambda.return_type().is_none() {
                issues.push(ValidationIssue::new(
                    &loc,
                    "missing_return",
                    format!("{} must declare a return type", lambda.kind()),
                ));
            }
        }
    }

    if lambda.name().is_none() {
        issues.push(ValidationIssue::new(&loc, "missing_name", "entity was never named"));
    }
    if lambda.package().is_none() {
        issues.push(ValidationIssue::new(
            &loc,
            "missing_package",
            "entity has no package",
        ));
    }
    if lambda.method().is_none() {
        issues.push(ValidationIssue::new(
            &loc,
            "missing_method",
            "entity has no functional method",
        ));
    }

    if let Some(name) = lambda.name() {
        let suffixed = name.ends_with('2');
        let expected = lambda.from_jdk() && !lambda.throwable();
        if suffixed != expected {
            issues.push(ValidationIssue::new(
                &loc,
                "jdk_suffix",
                if expected {
                    "non-throwing JDK duplicate must carry the '2' suffix"
                } else {
                    "only non-throwing JDK duplicates carry the '2' suffix"
                },
            ));
        }
    }
}

fn check_unique(lambdas: &[Lambda], issues: &mut Vec<ValidationIssue>) {
    let mut keys: HashMap<LambdaKey, usize> = HashMap::new();
    let mut names: HashMap<String, usize> = HashMap::new();
    for (idx, lambda) in lambdas.iter().enumerate() {
        if let Some(first) = keys.insert(lambda.key(), idx) {
            issues.push(ValidationIssue::new(
                location(lambda),
                "duplicate_key",
                format!("same attribute tuple as {}", location(&lambdas[first])),
            ));
        }
        if let Some(name) = lambda.qualified_name() {
            if let Some(first) = names.insert(name.clone(), idx) {
                issues.push(ValidationIssue::new(
                    name,
                    "duplicate_name",
                    format!("name already produced by {}", lambdas[first]),
                ));
            }
        }
    }
}
