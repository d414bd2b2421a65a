//! Memory game level resources library exports

pub mod levels;
pub mod store;
