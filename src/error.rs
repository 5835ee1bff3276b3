//! Error type shared by the library and the command-line front end.

use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter `{name}`: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("Could not allocate {what}: `{source}`")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
    #[error("Storage for {what} overflows the address space")]
    CapacityOverflow { what: &'static str },
    #[error("I/O error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Graph file is missing its node count header")]
    MissingHeader,
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Node {node} on line {line} is out of range for a graph of {n} nodes")]
    NodeOutOfRange { line: usize, node: usize, n: usize },
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse log directive: `{0}`")]
    LogParse(#[from] tracing_subscriber::filter::ParseError),
    #[error("Job {0} panicked")]
    JobPanicked(usize),
    #[error("Worker thread {0} panicked")]
    WorkerPanicked(usize),
}
