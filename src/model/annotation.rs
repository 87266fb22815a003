use serde::Serialize;

/// Annotations injected above each generated interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationEntity {
    /// Annotation source text, one per line (`@FunctionalInterface`)
    pub values: Vec<String>,
}

impl AnnotationEntity {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// The default set: just `@FunctionalInterface`.
    pub fn functional_interface() -> Self {
        Self::new(vec!["@FunctionalInterface".to_string()])
    }

    /// Append an annotation, skipping exact duplicates.
    pub fn with(mut self, annotation: impl Into<String>) -> Self {
        let annotation = annotation.into();
        if !self.values.contains(&annotation) {
            self.values.push(annotation);
        }
        self
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
