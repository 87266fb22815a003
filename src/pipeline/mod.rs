//! # Pipeline Module
//!
//! The pipeline expands the closed enumeration of functional shapes into the
//! full set of interface descriptors.
//!
//! ## Stages
//!
//! Stages run top to bottom in this order; each one relies on the fields of
//! every stage above it and leaves the fields of every stage below it unset.
//!
//! | Stage | Effect | Owns |
//! |---|---|---|
//! | Type | seed one stub per shape | `kind` |
//! | Arity | fan out over supported arities | `arity` |
//! | ReturnType | fan out over return types | `return_type`, `primitive` |
//! | InputTypeOne/Two/Three | fan out over input types | one input slot, `primitive` |
//! | ChangeOperator | same-type primitive functions become operators | `kind` |
//! | Package | destination package | `package` |
//! | Throwable | add a throwing twin | `throwable`, `method_style` |
//! | Method | functional method signature | `method` |
//! | Name | interface name | `name` |
//! | Jdk | flag JDK duplicates | `from_jdk` |
//!
//! ## Usage
//!
//! ```rust
//! use lambdagen::pipeline::{canonical_chain, PipelineOptions};
//!
//! let out = canonical_chain(&PipelineOptions::default()).invoke()?;
//! assert!(out.lambdas.iter().any(|l| l.name() == Some("ByteFunction")));
//! # Ok::<(), lambdagen::pipeline::GeneratorError>(())
//! ```

mod chain;
mod error;
mod processor;
pub mod stages;
mod validate;

pub use chain::{ChainOutput, ChainReport, ProcessorChain, StageStats};
pub use error::{GeneratorError, Unmatched};
pub use processor::Processor;
pub use validate::{validate_lambdas, ValidationIssue};

use stages::{
    ArityProcessor, ChangeOperatorProcessor, InputTypeProcessor, JdkProcessor, MethodProcessor,
    NameProcessor, PackageProcessor, ReturnTypeProcessor, ThrowableProcessor, TypeProcessor,
};

/// Default root package of generated interfaces.
pub const DEFAULT_ROOT_PACKAGE: &str = "io.lambdagen";

/// Knobs of the canonical chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Root package every generated package hangs off
    pub root_package: String,
    /// Emit throwing twins
    pub throwing: bool,
    /// Fail on entities no stage rule recognizes
    pub strict: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            root_package: DEFAULT_ROOT_PACKAGE.to_string(),
            throwing: true,
            strict: false,
        }
    }
}

/// The generator chain, declared in execution order.
pub fn canonical_chain(options: &PipelineOptions) -> ProcessorChain {
    ProcessorChain::new()
        .strict(options.strict)
        .with(TypeProcessor)
        .with(ArityProcessor)
        .with(ReturnTypeProcessor)
        .with(InputTypeProcessor::one())
        .with(InputTypeProcessor::two())
        .with(InputTypeProcessor::three())
        .with(ChangeOperatorProcessor)
        .with(PackageProcessor::new(options.root_package.clone()))
        .with(ThrowableProcessor::new(options.throwing))
        .with(MethodProcessor)
        .with(NameProcessor)
        .with(JdkProcessor)
}
