//! A disjoint-set forest over the elements `0..n`, with union by rank and path compression, and a
//! few graph algorithms that use it.

mod connectivity;
mod error;
mod union_find;

pub use self::connectivity::{
    WeightedEdge, connected_components, first_cycle_edge, minimum_spanning_forest,
};
pub use self::error::{DisjointSetError, InvalidLength};
pub use self::union_find::{DisjointSet, MAX_LEN};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
