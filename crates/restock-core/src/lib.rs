//! Transfer allocation engine.
//!
//! Records are partitioned into variant groups, each group's rows are
//! classified into receivers and suppliers, and the matcher pairs them
//! greedily under the caps carried by [`AllocationConfig`].
//!
//! [`AllocationConfig`]: restock_model::AllocationConfig

pub mod classifier;
pub mod engine;
pub mod grouper;
pub mod matcher;

pub use classifier::{
    Candidate, Classification, ClassifiedGroup, SkipReason, classify_group, receive_need,
    send_capacity,
};
pub use engine::{Allocation, AllocationStats, allocate};
pub use grouper::{VariantGroup, group_by_variant};
pub use matcher::Matcher;
