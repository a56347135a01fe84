//! # Fofgraph - Mutual-Connections Graph Core
//!
//! Fofgraph answers "friends of friends" queries over an undirected social
//! graph: given a node, which nodes share at least one neighbor with it,
//! and how many neighbors do they share?
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - **edge_set**: Sorted, duplicate-free neighbor sets with ordered-merge
//!   set algebra (intersection, incremental merge, bulk merge)
//! - **graph**: Adjacency index over [`EdgeSet`]s and the
//!   [`mutual`](Graph::mutual) query
//! - **loader**: Edge-list ingestion from whitespace-separated text
//! - **errors**: Recoverable error types for ingestion
//!
//! ## Usage
//!
//! ```rust
//! use fofgraph::{Graph, NodeId};
//!
//! let mut graph = Graph::new();
//! graph.add(NodeId(1), NodeId(2));
//! graph.add(NodeId(1), NodeId(3));
//! graph.add(NodeId(2), NodeId(3));
//!
//! let result = graph.mutual(NodeId(1));
//! assert!(result.ids.contains(NodeId(2)));
//! assert_eq!(result.weights[&NodeId(3)], 1);
//! ```
//!
//! ## Concurrency
//!
//! The core is single-threaded by design: no operation blocks or
//! synchronizes, and a [`Graph`] must not be mutated concurrently. Wrap
//! the whole graph in an external lock if shared access is needed.

#![forbid(unsafe_code)]

pub mod edge_set;
pub mod errors;
pub mod graph;
pub mod loader;

// Re-export commonly used types
pub use edge_set::{EdgeSet, NodeId};
pub use errors::LoadError;
pub use graph::{Graph, MutualConnections};
pub use loader::{load_edge_list, parse_edge_list};
