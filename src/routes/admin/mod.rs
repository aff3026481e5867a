mod approve;
mod get;

pub use approve::*;
pub use get::*;
