use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    graph::AdjacencyGraph,
};

/// Loads a graph stored in the plain-text adjacency format.
///
/// The first token of the file is the node count `n`. Every following
/// non-blank line reads `node neighbor neighbor ...` and adds the directed
/// edges `node -> neighbor`. Nodes without outgoing edges may be left out,
/// and a node may appear on several lines.
pub fn load_graph(path: impl AsRef<Path>) -> Result<AdjacencyGraph> {
    let path = path.as_ref();
    let graph = parse_graph(BufReader::new(File::open(path)?))?;
    debug!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parses the adjacency format described in [`load_graph`] from any reader.
pub fn parse_graph<R: BufRead>(reader: R) -> Result<AdjacencyGraph> {
    let mut lines = reader.lines().enumerate();

    let mut graph = loop {
        let Some((index, line)) = lines.next() else {
            return Err(Error::MissingHeader);
        };
        let line = line?;
        let mut tokens = line.split_whitespace();

        let Some(count) = tokens.next() else {
            continue;
        };
        if tokens.next().is_some() {
            return Err(Error::Parse {
                line: index + 1,
                message: "the header line must hold only the node count".to_string(),
            });
        }
        break AdjacencyGraph::new(parse_id(count, index + 1)?);
    };

    let n = graph.len();
    for (index, line) in lines {
        let line = line?;
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();

        let Some(first) = tokens.next() else {
            continue;
        };
        let node = check_range(parse_id(first, line_number)?, n, line_number)?;
        for token in tokens {
            let neighbor = check_range(parse_id(token, line_number)?, n, line_number)?;
            graph.add_edge(node, neighbor);
        }
    }

    Ok(graph)
}

fn parse_id(token: &str, line: usize) -> Result<usize> {
    token.parse::<usize>().map_err(|e| Error::Parse {
        line,
        message: format!("`{token}` is not a node id ({e})"),
    })
}

fn check_range(node: usize, n: usize, line: usize) -> Result<usize> {
    if node < n {
        Ok(node)
    } else {
        Err(Error::NodeOutOfRange { line, node, n })
    }
}
