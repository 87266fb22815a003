use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::{load_config, resolve_config_path, GeneratorConfig};
use crate::generator::{generate, plan, plan_traced, Plan};
use crate::logging::LogConfig;
use crate::model::Lambda;
use crate::pipeline::ChainReport;

/// Command-line interface for lambdagen
///
/// Generates the full set of functional interface sources under
/// `OUTPUT_DIR`.
#[derive(Parser, Debug)]
#[command(name = "lambdagen", version)]
#[command(about = "Generate primitive-specialized and throwing Java functional interfaces", long_about = None)]
pub struct Cli {
    /// Directory the package tree is written under (created with parents)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a lambdagen.toml config file
    /// If not provided, ./lambdagen.toml is used when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root package of generated interfaces (e.g. com.example.function)
    #[arg(short = 'p', long = "package")]
    pub root_package: Option<String>,

    /// Do not generate Throwable* twins
    #[arg(long, default_value_t = false)]
    pub no_throwing: bool,

    /// Fail if any stage sees an entity it has no rule for
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Perform a dry run: show what would be generated without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Jinja template replacing the built-in layout
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Log level: trace/debug/info/warn/error (overrides LAMBDAGEN_LOG_LEVEL)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print per-stage entity counts
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

impl Cli {
    /// Logging settings: environment first, `--log-level` on top.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::from_env();
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }

    /// Layer config file, environment and flags, in that order.
    pub fn resolve_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match resolve_config_path(self.config.as_deref())? {
            Some(path) => load_config(&path)?.unwrap_or_default(),
            None => GeneratorConfig::default(),
        };
        config
            .apply_env()
            .context("invalid LAMBDAGEN_* environment")?;
        self.apply_flags(&mut config);
        config.check()?;
        Ok(config)
    }

    fn apply_flags(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(package) = &self.root_package {
            config.root_package = package.clone();
        }
        if self.no_throwing {
            config.throwing = false;
        }
        if self.strict {
            config.strict = true;
        }
        if let Some(template) = &self.template {
            config.template = Some(template.clone());
        }
    }
}

fn print_report(report: &ChainReport) {
    println!("{:<16} {:>8} {:>8} {:>10}", "stage", "input", "output", "unmatched");
    for stats in &report.stages {
        println!(
            "{:<16} {:>8} {:>8} {:>10}",
            stats.stage, stats.input, stats.output, stats.unmatched
        );
    }
}

fn print_plan(plan: &Plan) {
    println!("📋 {} interfaces would be generated", plan.cache.len());
    for (kind, count) in plan.cache.counts_by_kind() {
        println!("   {:<12} {count}", kind.to_string());
    }
}

fn plan_with_samples(config: &GeneratorConfig) -> anyhow::Result<Plan> {
    let plan = plan_traced(config, |stage, lambdas: &[Lambda]| {
        if let Some(first) = lambdas.first() {
            println!("🔎 {stage}: {} entities, e.g. {first}", lambdas.len());
        }
    })?;
    Ok(plan)
}

/// Run the parsed command line.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    info!(
        root_package = %config.root_package,
        throwing = config.throwing,
        strict = config.strict,
        "Resolved configuration"
    );

    if cli.dry_run {
        let plan = if cli.trace {
            plan_with_samples(&config)?
        } else {
            plan(&config)?
        };
        if cli.trace {
            print_report(&plan.report);
        }
        print_plan(&plan);
        return Ok(());
    }

    if config.output_dir.is_none() {
        anyhow::bail!("OUTPUT_DIR is required unless --dry-run is given");
    }
    let summary = generate(&config)?;
    if cli.trace {
        print_report(&summary.report);
    }
    println!(
        "✅ Wrote {} interfaces to {}",
        summary.written,
        summary.output_dir.display()
    );
    Ok(())
}
