//! # lambdagen
//!
//! **lambdagen** generates the Java functional interfaces the JDK leaves out:
//! every combination of primitive and generic inputs (up to three) and
//! returns for functions, consumers, predicates, suppliers, comparators and
//! runnables, plus a `Throwable*` twin of each whose functional method may
//! throw anything.
//!
//! ## Overview
//!
//! Generation is a single synchronous pass:
//!
//! ```text
//! GeneratorConfig → ProcessorChain → Plan (LambdaCache) → TemplateEngine → .java files
//! ```
//!
//! The chain starts from one stub per functional shape and every stage either
//! fans entities out along one dimension (arity, return type, each input
//! slot, throwing variant) or fills in one derived attribute (package, method,
//! name, JDK overlap). The result is around sixteen thousand interfaces with
//! unique names.
//!
//! ## Architecture
//!
//! - **[`model`]** - `TypeEntity`, `AnnotationEntity` and the `Lambda` descriptor
//! - **[`pipeline`]** - The `Processor` stages, the `ProcessorChain` and invariant checks
//! - **[`cache`]** - `LambdaCache`, the finished set handed to rendering
//! - **[`generator`]** - Planning, template rendering and file output
//! - **[`config`]** - `GeneratorConfig` layered from TOML, environment and flags
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `lambdagen` command line
//!
//! ## Example
//!
//! ```rust
//! use lambdagen::config::GeneratorConfig;
//! use lambdagen::generator::plan;
//!
//! let plan = plan(&GeneratorConfig::default())?;
//! let byte_function = plan.cache.find("ByteFunction").unwrap();
//! assert_eq!(byte_function.package(), Some("io.lambdagen.function.primitive"));
//! assert!(plan.cache.find("ThrowableByteFunction").is_some());
//! # Ok::<(), lambdagen::pipeline::GeneratorError>(())
//! ```
//!
//! ## Naming
//!
//! Names are built from prefix-free tokens so two different slot tuples never
//! produce the same name. Interfaces that duplicate a JDK type get a `2`
//! suffix (`Function2`, `IntUnaryOperator2`); their throwing twins keep the
//! plain prefixed name (`ThrowableFunction`).

pub mod cache;
pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use cache::LambdaCache;
pub use config::GeneratorConfig;
pub use model::{AnnotationEntity, Lambda, LambdaType, Primitive, TypeEntity};
pub use pipeline::{canonical_chain, GeneratorError, Processor, ProcessorChain};
