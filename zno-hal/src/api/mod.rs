mod builder;
mod context;

pub use builder::*;
pub use context::*;
