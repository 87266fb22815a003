use anyhow::{anyhow, Context};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use super::output::{output_path, write_source};
use super::render::{engine_for, TemplateEngine};
use super::templates::{LambdaView, RenderContext};
use crate::cache::LambdaCache;
use crate::config::GeneratorConfig;
use crate::model::{AnnotationEntity, Lambda, LambdaType};
use crate::pipeline::{canonical_chain, validate_lambdas, ChainReport, GeneratorError};

/// Suffix appended to non-throwing interfaces that duplicate a JDK name.
pub const JDK_SUFFIX: &str = "2";

/// A validated, ordered lambda set ready for rendering.
#[derive(Debug, Clone)]
pub struct Plan {
    pub cache: LambdaCache,
    pub report: ChainReport,
}

/// What a [`generate`] run produced.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output_dir: PathBuf,
    /// Number of source files written
    pub written: usize,
    pub report: ChainReport,
    pub by_kind: BTreeMap<LambdaType, usize>,
}

/// Rename non-throwing JDK duplicates so they do not shadow the JDK types.
pub fn apply_jdk_suffix(lambdas: Vec<Lambda>) -> Vec<Lambda> {
    lambdas
        .into_iter()
        .map(|lambda| match lambda.name() {
            Some(name) if lambda.from_jdk() && !lambda.throwable() => {
                let renamed = format!("{name}{JDK_SUFFIX}");
                lambda.with_name(renamed)
            }
            _ => lambda,
        })
        .collect()
}

/// Run the chain and post-process it without touching the filesystem.
pub fn plan(config: &GeneratorConfig) -> Result<Plan, GeneratorError> {
    plan_traced(config, |_, _| {})
}

/// [`plan`], handing each stage's output to `observer`.
pub fn plan_traced<F>(config: &GeneratorConfig, observer: F) -> Result<Plan, GeneratorError>
where
    F: FnMut(&'static str, &[Lambda]),
{
    let chain = canonical_chain(&config.to_pipeline_options());
    let output = chain.invoke_traced(observer)?;

    let mut lambdas = apply_jdk_suffix(output.lambdas);
    lambdas.sort_by(|a, b| (a.package(), a.name()).cmp(&(b.package(), b.name())));

    let issues = validate_lambdas(&lambdas);
    if !issues.is_empty() {
        return Err(GeneratorError::Validation(issues));
    }

    let mut cache = LambdaCache::new();
    cache.set_lambdas(lambdas);
    Ok(Plan {
        cache,
        report: output.report,
    })
}

/// Render every lambda of the plan into `out_dir`, returning the file count.
pub fn render_all(
    plan: &Plan,
    engine: &dyn TemplateEngine,
    annotation: &AnnotationEntity,
    out_dir: &Path,
    extension: &str,
) -> anyhow::Result<usize> {
    let mut written = 0;
    let mut per_package: BTreeMap<&str, usize> = BTreeMap::new();
    for lambda in plan.cache.lambdas() {
        let view = LambdaView::from_lambda(lambda)
            .ok_or_else(|| anyhow!("lambda is not fully populated: {lambda}"))?;
        let path = output_path(out_dir, &view.package, &view.name, extension);
        let context = RenderContext::new(view, annotation.clone());
        let source = engine
            .render(&context)
            .with_context(|| format!("failed to render {}", context.lambda.name))?;
        write_source(&path, &source)?;
        debug!(path = %path.display(), "Wrote source");
        *per_package.entry(lambda.package().unwrap_or_default()).or_default() += 1;
        written += 1;
    }
    for (package, count) in &per_package {
        println!("✅ Generated {count} interfaces in {package}");
    }
    Ok(written)
}

/// Generate all interfaces described by `config` into its output directory.
pub fn generate(config: &GeneratorConfig) -> anyhow::Result<GenerationSummary> {
    config.check()?;
    let output_dir = config
        .output_dir
        .clone()
        .ok_or_else(|| anyhow!("no output directory configured"))?;
    let started = Instant::now();

    let plan = plan(config)?;
    let engine = engine_for(config.template.as_deref())?;
    info!(
        lambdas = plan.cache.len(),
        engine = engine.name(),
        output_dir = %output_dir.display(),
        "Rendering interfaces"
    );

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let written = render_all(
        &plan,
        engine.as_ref(),
        &config.annotation(),
        &output_dir,
        &config.file_extension,
    )?;

    info!(
        written,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Generation complete"
    );
    Ok(GenerationSummary {
        output_dir,
        written,
        by_kind: plan.cache.counts_by_kind(),
        report: plan.report,
    })
}
