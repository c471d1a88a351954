mod backend;
mod bootstrap;
mod builder;
mod context;
mod field;
mod native;
mod parameters;

pub use backend::*;
pub use bootstrap::*;
pub use builder::*;
pub use context::*;
pub use field::*;
pub use native::*;
pub use parameters::*;
