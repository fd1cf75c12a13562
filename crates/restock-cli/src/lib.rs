//! Library side of the `restock` command-line planner.

pub mod logging;
pub mod pipeline;
