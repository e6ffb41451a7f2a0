pub mod alternatives;
pub mod resolver;
pub mod snapshot;

pub use alternatives::*;
pub use resolver::*;
pub use snapshot::*;
