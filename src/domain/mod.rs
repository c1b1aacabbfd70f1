//! Domain layer - contract interfaces and quoting logic

pub mod contracts;
pub mod quote;
