//! Concrete pipeline stages, one dimension of expansion or annotation each.

mod arity;
mod change_operator;
mod input_type;
mod jdk;
mod method;
mod name;
mod package;
mod return_type;
mod throwable;
mod type_stage;

pub use arity::ArityProcessor;
pub use change_operator::ChangeOperatorProcessor;
pub use input_type::InputTypeProcessor;
pub use jdk::{is_jdk_interface, JdkProcessor, JDK_INTERFACES};
pub use method::MethodProcessor;
pub use name::{NameProcessor, THROWABLE_PREFIX};
pub use package::{Composition, PackageProcessor};
pub use return_type::ReturnTypeProcessor;
pub use throwable::ThrowableProcessor;
pub use type_stage::TypeProcessor;
