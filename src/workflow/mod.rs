pub mod conversion;
pub mod definition;

mod dot;

pub use conversion::*;
pub use definition::*;
