//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod editing;
pub mod elements;
pub mod selection;
