//! Edge-list ingestion.
//!
//! Reads the common published edge-list format: one edge per line as two
//! whitespace-separated unsigned node ids, e.g. the SNAP social-network
//! datasets. Blank lines and lines starting with `#` are skipped. Extra
//! tokens after the first two are ignored. Self-loops and repeated edges
//! in the input are tolerated; the graph rejects them as non-edges.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::edge_set::NodeId;
use crate::errors::LoadError;
use crate::graph::Graph;

/// Parses an edge list from `reader` into a [`Graph`].
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let (Some(a), Some(b)) = (tokens.next(), tokens.next()) else {
            return Err(LoadError::Malformed {
                line_no,
                line: trimmed.to_string(),
            });
        };

        graph.add(parse_id(a, line_no)?, parse_id(b, line_no)?);
    }

    Ok(graph)
}

/// Opens `path` and parses it as an edge list.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

fn parse_id(token: &str, line_no: usize) -> Result<NodeId, LoadError> {
    token
        .parse::<u32>()
        .map(NodeId)
        .map_err(|_| LoadError::BadId {
            line_no,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_edge_list() {
        let input = b"0 1\n0 2\n1 2\n" as &[u8];
        let g = parse_edge_list(input).unwrap();

        assert_eq!(g.node_count(), 3);
        assert!(g.neighbors(NodeId(0)).unwrap().contains(NodeId(2)));
        assert!(g.neighbors(NodeId(2)).unwrap().contains(NodeId(0)));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = b"# snap-style header\n\n0 1\n  \n# trailing comment\n" as &[u8];
        let g = parse_edge_list(input).unwrap();
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn rejects_single_token_line() {
        let input = b"0 1\n7\n" as &[u8];
        let err = parse_edge_list(input).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line_no: 2, .. }));
    }

    #[test]
    fn rejects_non_numeric_id() {
        let input = b"0 one\n" as &[u8];
        let err = parse_edge_list(input).unwrap_err();
        assert!(matches!(err, LoadError::BadId { line_no: 1, ref token } if token == "one"));
    }

    #[test]
    fn tolerates_self_loops_and_duplicates() {
        let input = b"3 3\n0 1\n1 0\n" as &[u8];
        let g = parse_edge_list(input).unwrap();
        assert_eq!(g.neighbors(NodeId(0)).unwrap().len(), 1);
    }
}
