//! Graph algorithm implementations.
//!
//! Every algorithm borrows the graph immutably and owns its working state
//! for the duration of the call.

pub mod articulation;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
