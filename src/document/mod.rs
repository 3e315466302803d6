pub mod builder;
pub mod dispatch;

pub use builder::*;
pub use dispatch::*;
