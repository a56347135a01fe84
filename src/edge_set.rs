//! Sorted neighbor sets and the ordered-merge set algebra.
//!
//! An [`EdgeSet`] is an ordered, duplicate-free sequence of node ids backed
//! by a contiguous array. Every algorithm in this crate leans on that
//! sortedness invariant:
//!
//! - membership is a binary search,
//! - intersection is a linear two-cursor merge,
//! - union comes in two flavors: [`merge`](EdgeSet::merge) (repeated
//!   insertion, simple but potentially quadratic) and
//!   [`merge_replace`](EdgeSet::merge_replace) (one linear three-way merge
//!   pass, the choice for hot paths).

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Maximum size for inline storage in SmallVec.
///
/// Most nodes in sparse social graphs have small degree, so the common
/// case stays on the stack.
const INLINE_SET_SIZE: usize = 8;

/// Extra capacity reserved by `merge_replace` beyond `max(len, other.len())`.
///
/// Covers the frequent case of mostly-disjoint operands without a second
/// allocation; the buffer grows geometrically if the heuristic undershoots.
const MERGE_SLACK: usize = 5;

/// A unique identifier for a node in the graph.
///
/// NodeId implements Ord/PartialOrd for stable, deterministic iteration
/// and for the sorted adjacency representation. Uses u32 internally for
/// efficient storage and indexing.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

/// An ordered, duplicate-free set of node ids.
///
/// Invariant: after every public operation the backing sequence is
/// strictly increasing. Operations either fully succeed or leave the set
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    ids: SmallVec<[NodeId; INLINE_SET_SIZE]>,
}

impl EdgeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of ids in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the set holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` iff `id` is a member. O(log n) binary search.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    /// Inserts `id` if absent, returning whether an insertion occurred.
    ///
    /// Appending a value greater than the current maximum is O(1); this is
    /// the common case when edges arrive sorted, as in published edge-list
    /// datasets. Otherwise a binary search locates the insertion point and
    /// the tail shifts right, O(n) worst case. Per-node degree is normally
    /// far smaller than graph size, so the shift stays cheap in practice.
    pub fn insert(&mut self, id: NodeId) -> bool {
        match self.ids.last() {
            // optimize add-highest case (covers the empty set too)
            None => {
                self.ids.push(id);
                true
            }
            Some(&max) if max < id => {
                self.ids.push(id);
                true
            }
            Some(_) => match self.ids.binary_search(&id) {
                Ok(_) => false,
                Err(idx) => {
                    self.ids.insert(idx, id);
                    true
                }
            },
        }
    }

    /// Discards current contents and adopts `ids`, sorted and deduplicated.
    ///
    /// An empty input clears the set. Duplicates in the input are collapsed
    /// so the sortedness/uniqueness invariant holds regardless of caller
    /// input.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.ids.clear();
        self.ids.extend(ids);
        self.ids.sort_unstable();
        self.ids.dedup();
    }

    /// Returns a new set holding exactly the ids present in both operands.
    ///
    /// Classic linear ordered merge: two cursors advance in lock-step
    /// comparison until either input is exhausted. O(|self| + |other|),
    /// no allocation beyond the output.
    pub fn intersection(&self, other: &EdgeSet) -> EdgeSet {
        let mut out = SmallVec::new();
        let (mut si, mut oi) = (0, 0);

        while si < self.ids.len() && oi < other.ids.len() {
            match self.ids[si].cmp(&other.ids[oi]) {
                Ordering::Equal => {
                    out.push(self.ids[si]);
                    si += 1;
                    oi += 1;
                }
                Ordering::Less => si += 1,
                Ordering::Greater => oi += 1,
            }
        }

        EdgeSet { ids: out }
    }

    /// Unions `other` into `self` by repeated single-element insertion.
    ///
    /// O(|other| · |self|) worst case. Fine for small sets or rare merges;
    /// prefer [`merge_replace`](Self::merge_replace) when either operand
    /// can be large.
    pub fn merge(&mut self, other: &EdgeSet) {
        for &id in &other.ids {
            self.insert(id);
        }
    }

    /// Unions `other` into `self` in one linear three-way merge pass.
    ///
    /// Ids unique to either operand and ids common to both are each
    /// emitted once, in order, into a pre-sized buffer that then replaces
    /// the backing storage. O(|self| + |other|) regardless of overlap,
    /// which is why the mutual-connections hot path accumulates results
    /// through this instead of [`merge`](Self::merge).
    pub fn merge_replace(&mut self, other: &EdgeSet) {
        let mut out: SmallVec<[NodeId; INLINE_SET_SIZE]> =
            SmallVec::with_capacity(self.len().max(other.len()) + MERGE_SLACK);
        let (mut si, mut oi) = (0, 0);

        while si < self.ids.len() && oi < other.ids.len() {
            match self.ids[si].cmp(&other.ids[oi]) {
                Ordering::Equal => {
                    out.push(self.ids[si]);
                    si += 1;
                    oi += 1;
                }
                Ordering::Less => {
                    out.push(self.ids[si]);
                    si += 1;
                }
                Ordering::Greater => {
                    out.push(other.ids[oi]);
                    oi += 1;
                }
            }
        }

        out.extend_from_slice(&self.ids[si..]);
        out.extend_from_slice(&other.ids[oi..]);

        self.ids = out;
    }

    /// The backing ids, sorted ascending.
    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Iterates the ids in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.ids.iter()
    }
}

impl FromIterator<NodeId> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = EdgeSet::new();
        set.replace(iter);
        set
    }
}

impl FromIterator<u32> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().map(NodeId).collect()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
