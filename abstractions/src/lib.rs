pub mod chain;
pub mod error;
pub mod handlers;
pub mod predicate;

pub use error::*;
pub use handlers::*;
pub use predicate::*;
