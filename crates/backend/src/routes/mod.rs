//! Route handlers.

pub mod hello;
pub mod root;
