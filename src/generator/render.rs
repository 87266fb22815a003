//! Template engines.
//!
//! The built-in layout is compiled in through askama. A user supplied
//! template file is rendered at runtime with minijinja against the same
//! [`RenderContext`] serialized as a map, so both see `lambda.*` and
//! `annotation.values`.

use anyhow::Context;
use askama::Template;
use minijinja::Environment;
use std::fs;
use std::path::Path;

use super::templates::RenderContext;

/// Renders one source file from its context.
pub trait TemplateEngine {
    fn name(&self) -> &'static str;
    fn render(&self, context: &RenderContext) -> anyhow::Result<String>;
}

/// The compiled-in `lambda.java.txt` layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct AskamaEngine;

impl TemplateEngine for AskamaEngine {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn render(&self, context: &RenderContext) -> anyhow::Result<String> {
        Ok(context.render()?)
    }
}

/// A template loaded at runtime, jinja syntax.
///
/// The template is parsed once when the engine is built, so syntax errors
/// surface before anything is written.
#[derive(Debug, Clone)]
pub struct JinjaEngine {
    env: Environment<'static>,
}

impl JinjaEngine {
    const TEMPLATE: &'static str = "lambda";

    pub fn new(source: impl Into<String>) -> anyhow::Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        let source: String = source.into();
        env.add_template_owned(Self::TEMPLATE, source)?;
        Ok(JinjaEngine { env })
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?;
        Self::new(source).with_context(|| format!("invalid template {}", path.display()))
    }
}

impl TemplateEngine for JinjaEngine {
    fn name(&self) -> &'static str {
        "jinja"
    }

    fn render(&self, context: &RenderContext) -> anyhow::Result<String> {
        let rendered = self.env.get_template(Self::TEMPLATE)?.render(context)?;
        Ok(rendered)
    }
}

/// Built-in engine unless a template override is configured.
pub fn engine_for(template: Option<&Path>) -> anyhow::Result<Box<dyn TemplateEngine>> {
    match template {
        Some(path) => Ok(Box::new(JinjaEngine::from_file(path)?)),
        None => Ok(Box::new(AskamaEngine)),
    }
}
