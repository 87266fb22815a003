//! # Model
//!
//! Value types shared by the pipeline and the renderer:
//!
//! - [`TypeEntity`] - one input or return slot, either a primitive or a generic placeholder
//! - [`AnnotationEntity`] - annotations placed on every generated interface
//! - [`Lambda`] - the descriptor of one generated interface
//!
//! A [`Lambda`] is never mutated in place. Each pipeline stage builds new
//! values with the `with_*` methods, and the chain checks that a stage only
//! changed the [`LambdaField`]s it owns.

mod annotation;
mod lambda;
mod types;

pub use annotation::AnnotationEntity;
pub use lambda::{
    Lambda, LambdaField, LambdaKey, LambdaType, MethodSignature, MethodStyle, Parameter,
};
pub use types::{Primitive, TypeEntity, INPUT_PLACEHOLDERS, RETURN_PLACEHOLDER};
