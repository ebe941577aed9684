//! Adjacency Graph Loader and Writer.
//!
//! Binary layout, all integers `u32` little-endian, no padding:
//!
//! ```text
//! [node_count N]
//! N times: [neighbor_count k] [id_0] [id_1] ... [id_{k-1}]
//! ```
//!
//! Bytes after the last node are ignored. A stream that ends before every
//! declared count and id has been read is `MalformedData`.

use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use crate::model::{AdjacencyGraph, Neighbors, WordId};
use crate::{Error, Result};

/// Upper bound on capacity reserved up front from a declared count.
/// Declared counts come from the file and may be garbage.
const RESERVE_LIMIT: usize = 1 << 16;

/// Load the adjacency file at `path`.
pub fn load_adjacency(path: impl AsRef<Path>) -> Result<AdjacencyGraph> {
    let path = path.as_ref();
    let file = super::open(path)?;
    let graph = read_adjacency(&mut BufReader::new(file))?;
    debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "adjacency loaded"
    );
    Ok(graph)
}

/// Parse the binary adjacency layout from any reader.
pub fn read_adjacency<R: Read>(reader: &mut R) -> Result<AdjacencyGraph> {
    let node_count = read_u32(reader, || "node count".to_string())?;
    let mut lists = Vec::with_capacity((node_count as usize).min(RESERVE_LIMIT));

    for node in 0..node_count {
        let k = read_u32(reader, || format!("neighbor count of node {node}"))?;
        let mut neighbors = Neighbors::with_capacity((k as usize).min(RESERVE_LIMIT));
        for i in 0..k {
            let id = read_u32(reader, || {
                format!("neighbor {i} of {k} for node {node}")
            })?;
            neighbors.push(WordId(id));
        }
        lists.push(neighbors);
    }

    Ok(AdjacencyGraph::new(lists))
}

/// Serialize `graph` in the binary adjacency layout.
pub fn write_adjacency<W: Write>(writer: &mut W, graph: &AdjacencyGraph) -> Result<()> {
    writer.write_u32::<LittleEndian>(checked_u32(graph.node_count(), "node count")?)?;
    for (node, neighbors) in graph.iter() {
        writer.write_u32::<LittleEndian>(checked_u32(
            neighbors.len(),
            &format!("neighbor count of node {node}"),
        )?)?;
        for id in neighbors {
            writer.write_u32::<LittleEndian>(id.0)?;
        }
    }
    Ok(())
}

/// Write `graph` to a file at `path`.
pub fn save_adjacency(path: impl AsRef<Path>, graph: &AdjacencyGraph) -> Result<()> {
    let mut writer = BufWriter::new(super::create(path.as_ref())?);
    write_adjacency(&mut writer, graph)?;
    writer.flush()?;
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R, what: impl FnOnce() -> String) -> Result<u32> {
    reader.read_u32::<LittleEndian>().map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => {
            Error::MalformedData(format!("adjacency stream ended while reading {}", what()))
        }
        _ => Error::Io(e),
    })
}

fn checked_u32(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| Error::MalformedData(format!("{what} {value} does not fit in u32")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-encode a graph without going through the writer.
    fn encode(lists: &[&[u32]]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(lists.len() as u32).to_le_bytes());
        for list in lists {
            bytes.extend_from_slice(&(list.len() as u32).to_le_bytes());
            for id in *list {
                bytes.extend_from_slice(&id.to_le_bytes());
            }
        }
        bytes
    }

    #[test]
    fn test_reads_declared_counts() {
        let bytes = encode(&[&[1], &[0, 2], &[1, 3], &[2]]);
        let graph = read_adjacency(&mut bytes.as_slice()).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.neighbors(WordId(1)).unwrap(), &[WordId(0), WordId(2)]);
        assert_eq!(graph.neighbors(WordId(3)).unwrap(), &[WordId(2)]);
    }

    #[test]
    fn test_isolated_nodes() {
        let bytes = encode(&[&[], &[], &[]]);
        let graph = read_adjacency(&mut bytes.as_slice()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_empty_graph() {
        let bytes = encode(&[]);
        assert_eq!(read_adjacency(&mut bytes.as_slice()).unwrap().node_count(), 0);
    }

    #[test]
    fn test_truncated_neighbor_list() {
        let mut bytes = encode(&[&[1, 2, 3]]);
        bytes.truncate(bytes.len() - 4);
        let err = read_adjacency(&mut bytes.as_slice()).unwrap_err();
        match err {
            Error::MalformedData(msg) => assert!(msg.contains("node 0"), "{msg}"),
            other => panic!("expected MalformedData, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_nodes() {
        // Declares 3 nodes, carries 1.
        let mut bytes = 3u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert!(matches!(
            read_adjacency(&mut bytes.as_slice()),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn test_short_header() {
        let bytes = [1u8, 0];
        assert!(matches!(
            read_adjacency(&mut bytes.as_slice()),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn test_huge_declared_count_fails_cleanly() {
        let mut bytes = 1u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&7u32.to_le_bytes());
        assert!(matches!(
            read_adjacency(&mut bytes.as_slice()),
            Err(Error::MalformedData(_))
        ));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = encode(&[&[0]]);
        bytes.extend_from_slice(&[0xde, 0xad]);
        let graph = read_adjacency(&mut bytes.as_slice()).unwrap();
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_writer_matches_layout() {
        let graph = AdjacencyGraph::from_lists(vec![vec![1], vec![0, 2], vec![1]]);
        let mut out = Vec::new();
        write_adjacency(&mut out, &graph).unwrap();
        assert_eq!(out, encode(&[&[1], &[0, 2], &[1]]));
    }

    #[test]
    fn test_missing_file() {
        let result = load_adjacency("/nonexistent/graph.bin");
        assert!(matches!(result, Err(Error::ResourceUnavailable { .. })));
    }
}
