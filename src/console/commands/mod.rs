mod callable;
pub mod db;

pub use callable::*;
