mod basic;
mod error;
mod manager;
mod manager_middleware;

pub use error::*;
pub use manager::*;
pub use manager_middleware::*;
