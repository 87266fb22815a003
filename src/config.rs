//! Generator configuration.
//!
//! Values are layered: built-in defaults, then an optional `lambdagen.toml`,
//! then `LAMBDAGEN_*` environment variables, then command-line flags (applied
//! by the CLI).

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::model::AnnotationEntity;
use crate::pipeline::{PipelineOptions, DEFAULT_ROOT_PACKAGE};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lambdagen.toml";

/// Java keywords and literals, none of which may name a package segment.
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

fn is_package_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !JAVA_RESERVED.contains(&segment)
}

/// Everything a generation run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory generated sources are written under
    pub output_dir: Option<PathBuf>,
    /// Root package every generated package hangs off
    pub root_package: String,
    /// Emit `Throwable*` twins
    pub throwing: bool,
    /// Fail on entities no stage rule recognizes
    pub strict: bool,
    /// Annotations placed above each interface
    pub annotations: Vec<String>,
    /// Jinja template replacing the built-in layout
    pub template: Option<PathBuf>,
    /// Extension of generated files, without the dot
    pub file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: None,
            root_package: DEFAULT_ROOT_PACKAGE.to_string(),
            throwing: true,
            strict: false,
            annotations: AnnotationEntity::functional_interface().values,
            template: None,
            file_extension: "java".to_string(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key}: expected a boolean, got '{other}'"),
    }
}

impl GeneratorConfig {
    /// Overlay `LAMBDAGEN_*` variables resolved through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("LAMBDAGEN_OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(package) = lookup("LAMBDAGEN_ROOT_PACKAGE") {
            self.root_package = package;
        }
        if let Some(value) = lookup("LAMBDAGEN_THROWING") {
            self.throwing = parse_bool("LAMBDAGEN_THROWING", &value)?;
        }
        if let Some(value) = lookup("LAMBDAGEN_STRICT") {
            self.strict = parse_bool("LAMBDAGEN_STRICT", &value)?;
        }
        if let Some(template) = lookup("LAMBDAGEN_TEMPLATE") {
            self.template = Some(PathBuf::from(template));
        }
        Ok(())
    }

    /// Overlay the process environment.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// Reject values no run could succeed with.
    pub fn check(&self) -> anyhow::Result<()> {
        let valid_package =
            !self.root_package.is_empty() && self.root_package.split('.').all(is_package_segment);
        if !valid_package {
            bail!("invalid root package '{}'", self.root_package);
        }
        if self.file_extension.is_empty() || self.file_extension.contains(['.', '/', '\\']) {
            bail!("invalid file extension '{}'", self.file_extension);
        }
        Ok(())
    }

    pub fn to_pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            root_package: self.root_package.clone(),
            throwing: self.throwing,
            strict: self.strict,
        }
    }

    pub fn annotation(&self) -> AnnotationEntity {
        self.annotations
            .iter()
            .fold(AnnotationEntity::default(), |acc, a| acc.with(a.as_str()))
    }
}

/// Load a TOML config file.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// cannot be read or parsed.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
    Ok(Some(config))
}

/// Resolve the config path.
///
/// Priority:
/// 1. Explicitly provided path (must exist)
/// 2. `lambdagen.toml` in the working directory
/// 3. None (defaults only)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit_path {
        if !path.exists() {
            bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    Ok(default.exists().then_some(default))
}
