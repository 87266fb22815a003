use super::validate::ValidationIssue;
use crate::model::LambdaField;
use std::fmt;

/// Returned by a stage that has no rule for the entity it was given.
///
/// The chain either passes the entity through unchanged or, in strict mode,
/// turns this into [`GeneratorError::Unmatched`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unmatched {
    /// Why no rule applied
    pub reason: String,
}

impl Unmatched {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Unmatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Pipeline error
///
/// Any of these aborts the run before a single file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// A stage did not recognize an entity and the chain runs in strict mode
    Unmatched {
        /// Stage name
        stage: &'static str,
        /// Diagnostic form of the entity
        lambda: String,
        /// Reason reported by the stage
        reason: String,
    },
    /// A stage changed a field it does not own
    FieldOverwrite {
        /// Stage name
        stage: &'static str,
        /// The field that changed
        field: LambdaField,
        /// Diagnostic form of the source entity
        lambda: String,
    },
    /// The finished set violates one or more invariants
    Validation(Vec<ValidationIssue>),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Unmatched {
                stage,
                lambda,
                reason,
            } => {
                write!(
                    f,
                    "pipeline error: stage {stage} has no rule for {lambda}: {reason}"
                )
            }
            GeneratorError::FieldOverwrite {
                stage,
                field,
                lambda,
            } => {
                write!(
                    f,
                    "pipeline error: stage {stage} overwrote field '{field}' it does not own on {lambda}"
                )
            }
            GeneratorError::Validation(issues) => {
                write!(
                    f,
                    "validation failed with {} issue(s)",
                    issues.len()
                )?;
                for issue in issues {
                    write!(f, "\n  {issue}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GeneratorError {}
