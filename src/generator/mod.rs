//! # Generator Module
//!
//! The generator turns the pipeline's output into Java source files, one
//! functional interface per file.
//!
//! ## Architecture
//!
//! ```text
//! Config → ProcessorChain → JDK suffix → sort → validate → LambdaCache → render → write
//! ```
//!
//! 1. **Plan** - Runs the canonical chain, renames non-throwing JDK duplicates
//!    (`Function` → `Function2`), orders by package and name and checks every
//!    invariant. Nothing is written if a check fails.
//! 2. **Render** - Each lambda is flattened into a [`LambdaView`] and rendered
//!    with the built-in askama layout or a user supplied jinja template.
//! 3. **Write** - Files land at `<out>/<package as dirs>/<Name>.java`.
//!
//! ## Generated Structure
//!
//! ```text
//! out/
//! └── io/lambdagen/
//!     ├── function/
//!     │   ├── Function2.java
//!     │   ├── obj/ToIntBiFunction2.java
//!     │   ├── primitive/ByteFunction.java
//!     │   └── conversion/ByteToFloatFunction.java
//!     ├── consumer/...
//!     └── runnable/
//!         ├── Runnable2.java
//!         └── ThrowableRunnable.java
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lambdagen::config::GeneratorConfig;
//! use lambdagen::generator::generate;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GeneratorConfig {
//!     output_dir: Some("target/java".into()),
//!     ..GeneratorConfig::default()
//! };
//! let summary = generate(&config)?;
//! println!("{} files", summary.written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Template Customization
//!
//! The built-in layout is `templates/lambda.java.txt`. A jinja template set
//! through `template` in the config (or `--template`) replaces it; it sees
//! `lambda.*` (see [`LambdaView`]) and `annotation.values`.

mod driver;
pub mod helpers;
mod output;
mod render;
mod templates;
#[cfg(test)]
mod tests;

pub use driver::{
    apply_jdk_suffix, generate, plan, plan_traced, render_all, GenerationSummary, Plan, JDK_SUFFIX,
};
pub use output::{output_path, package_dir, write_source};
pub use render::{engine_for, AskamaEngine, JinjaEngine, TemplateEngine};
pub use templates::{LambdaView, RenderContext};
