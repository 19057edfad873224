//! Graph algorithms built on top of [`DisjointSet`]. Vertices are numbered `0..len`, and edges are
//! undirected.

use crate::error::DisjointSetError;
use crate::union_find::{DisjointSet, checked_len};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightedEdge<W> {
    pub from: u32,
    pub to: u32,
    pub weight: W,
}

// Validates the length and all endpoints before allocating the forest.
fn forest_for(
    len: u32,
    edges: impl Iterator<Item = (u32, u32)>,
) -> Result<DisjointSet, DisjointSetError> {
    checked_len(len.into())?;
    for (from, to) in edges {
        for element in [from, to] {
            if element >= len {
                return Err(DisjointSetError::OutOfRange { element, len });
            }
        }
    }
    DisjointSet::new(len)
}

/// Splits the vertices into connected components, ordered like [`DisjointSet::sets`].
pub fn connected_components(
    len: u32,
    edges: &[(u32, u32)],
) -> Result<Vec<Vec<u32>>, DisjointSetError> {
    let mut set = forest_for(len, edges.iter().copied())?;
    for &(from, to) in edges {
        set.merge(from, to);
    }
    debug!(
        "{} vertices and {} edges form {} components",
        len,
        edges.len(),
        set.count_sets(),
    );
    Ok(set.sets())
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Returns indices into `edges` in the order the edges were picked, i.e. by non-decreasing weight.
/// Among edges of equal weight, the one listed first wins.
pub fn minimum_spanning_forest<W: Ord>(
    len: u32,
    edges: &[WeightedEdge<W>],
) -> Result<Vec<usize>, DisjointSetError> {
    let mut set = forest_for(len, edges.iter().map(|edge| (edge.from, edge.to)))?;

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[a].weight.cmp(&edges[b].weight));

    let mut picked = Vec::with_capacity((len as usize).saturating_sub(1));
    for index in order {
        // Everything is connected already
        if set.count_sets() <= 1 {
            break;
        }
        let edge = &edges[index];
        if set.merge(edge.from, edge.to) {
            picked.push(index);
        }
    }

    debug!(
        "spanning forest over {} vertices uses {} of {} edges",
        len,
        picked.len(),
        edges.len(),
    );
    Ok(picked)
}

/// Returns the index of the first edge that connects two already connected vertices, if any.
/// Self-loops count as cycles.
pub fn first_cycle_edge(len: u32, edges: &[(u32, u32)]) -> Result<Option<usize>, DisjointSetError> {
    let mut set = forest_for(len, edges.iter().copied())?;
    let cycle = edges.iter().position(|&(from, to)| !set.merge(from, to));
    if let Some(index) = cycle {
        debug!("edge #{index} {:?} closes a cycle", edges[index]);
    }
    Ok(cycle)
}
