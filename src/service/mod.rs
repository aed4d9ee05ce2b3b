//! Services composed from several client calls.

mod catalog;
mod composite;

pub use catalog::*;
pub use composite::*;
