mod admin;
mod public;

pub use admin::Admin;
pub use public::Public;
