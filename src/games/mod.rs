//! Drivers built on the rules engine.

pub mod table;
