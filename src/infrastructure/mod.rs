//! Infrastructure layer - access to external systems

pub mod blockchain;
