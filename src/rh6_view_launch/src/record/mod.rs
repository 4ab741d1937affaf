//! Record module for the emitted launch plan

pub mod generator;
pub mod types;

pub use generator::assemble_view_nodes;
pub use types::{ArgumentRecord, LaunchPlan, NodeRecord, Output};
