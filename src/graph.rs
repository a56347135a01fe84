//! Undirected graph over [`EdgeSet`] adjacency and the mutual-connections
//! query.
//!
//! The graph is a node-id → neighbor-set index. Edges are symmetric by
//! construction: [`Graph::add`] inserts both directions and treats any
//! disagreement between the two insertions as corrupted state, not a
//! recoverable error. O(1) node lookups via FxHashMap.

use rustc_hash::FxHashMap;

use crate::edge_set::{EdgeSet, NodeId};

/// An undirected graph over integer-identified nodes.
///
/// A node exists once it appears as either endpoint of an added edge;
/// there is no node or edge removal. All mutation requires exclusive
/// access — external locking is the caller's concern for shared use.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    index: FxHashMap<NodeId, EdgeSet>,
}

/// The result of a [`Graph::mutual`] query.
///
/// Freshly allocated per query and independent of graph internals; the
/// caller may keep or mutate it freely.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutualConnections {
    /// Every neighbor of the query node confirmed by at least one shared
    /// connection, sorted ascending.
    pub ids: EdgeSet,
    /// How many of the query node's neighbors also neighbor each id in
    /// `ids`.
    pub weights: FxHashMap<NodeId, u32>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes that have appeared in at least one edge.
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if `id` has appeared in at least one edge.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// The neighbor set of `id`, or `None` for a node the graph has never
    /// seen.
    pub fn neighbors(&self, id: NodeId) -> Option<&EdgeSet> {
        self.index.get(&id)
    }

    /// Iterates all known node ids in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index.keys().copied()
    }

    /// Returns the neighbor set for `id`, creating an empty one on first
    /// reference. Idempotent.
    pub fn get_or_create(&mut self, id: NodeId) -> &mut EdgeSet {
        self.index.entry(id).or_default()
    }

    /// Adds the undirected edge `a`–`b`, returning whether it was new.
    ///
    /// Self-loops are rejected (`false`, no mutation), as is re-adding an
    /// existing edge. Both endpoint insertions must agree on edge newness;
    /// a mismatch means earlier calls already corrupted the adjacency
    /// symmetry, so this panics rather than continue on inconsistent data.
    pub fn add(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b {
            return false;
        }

        let a_new = self.get_or_create(a).insert(b);
        let b_new = self.get_or_create(b).insert(a);

        if a_new != b_new {
            panic!("adjacency symmetry violated between {a} and {b}");
        }

        a_new
    }

    /// Computes the mutual connections of `from`.
    ///
    /// For each neighbor `t` of `from`, intersects `from`'s neighbor set
    /// with `t`'s. Every id in the intersection earns one confirmation
    /// weight, and the intersections accumulate into the result set. The
    /// result is therefore always a subset of `from`'s direct neighbors:
    /// exactly those also reachable through some other neighbor.
    ///
    /// A node the graph has never seen yields an empty result, not an
    /// error.
    pub fn mutual(&self, from: NodeId) -> MutualConnections {
        let Some(from_set) = self.index.get(&from) else {
            return MutualConnections::default();
        };

        let mut out = MutualConnections::default();
        for &to in from_set {
            let to_set = self
                .index
                .get(&to)
                .unwrap_or_else(|| panic!("adjacency symmetry violated: {to} unindexed"));

            let matched = from_set.intersection(to_set);
            for &id in &matched {
                *out.weights.entry(id).or_insert(0) += 1;
            }
            // merge_replace stays linear however large the accumulator grows
            out.ids.merge_replace(&matched);
        }

        out
    }
}
