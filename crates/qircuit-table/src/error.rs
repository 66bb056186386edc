//! Error types for reading tables and building circuits from them.

use qircuit_ir::IrError;
use thiserror::Error;

/// Errors that can occur while reading tables or building a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Table file could not be read.
    #[error("Failed to read table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Quoted cell is not closed before the end of its line.
    #[error("Unterminated quoted cell in '{table}' at line {line}")]
    UnterminatedQuote { table: String, line: usize },

    /// Qubit cell does not match `<index>-<partition>`.
    #[error(
        "Malformed qubit cell '{text}' in '{table}' at line {line}, cell {cell}: {reason} (expected '<index>-<partition>')"
    )]
    MalformedQubitCell {
        table: String,
        line: usize,
        cell: usize,
        text: String,
        #[source]
        reason: CellError,
    },

    /// Circuit row names a gate the gate table does not define.
    #[error("Gate \"{gate}\" not found in \"{table}\"")]
    GateNotFound { gate: String, table: String },

    /// Gate definition row has a name but no matrix cell.
    #[error("Gate \"{gate}\" in '{table}' at line {line} has no matrix cell")]
    MissingMatrix {
        gate: String,
        table: String,
        line: usize,
    },

    /// Matrix literal cannot be parsed into a square matrix.
    #[error("Invalid matrix for gate \"{gate}\": {message} in '{literal}'")]
    InvalidMatrix {
        gate: String,
        literal: String,
        message: String,
    },

    /// Row resolved but the model rejected the gate.
    #[error("Invalid gate in '{table}' at line {line}: {source}")]
    InvalidGate {
        table: String,
        line: usize,
        #[source]
        source: IrError,
    },
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Why a qubit cell failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellError {
    /// No `-` between index and partition.
    #[error("missing '-' separator")]
    MissingSeparator,

    /// Index part is not a non-negative integer.
    #[error("invalid qubit index '{0}'")]
    InvalidIndex(String),

    /// Partition part is not a non-negative integer.
    #[error("invalid partition '{0}'")]
    InvalidPartition(String),
}
