//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// A gate was built without any operand qubits.
    #[error("Gate '{gate_name}' must act on at least one qubit")]
    NoQubits {
        /// Name of the gate.
        gate_name: String,
    },

    /// Matrix dimension does not match the number of operand qubits.
    #[error(
        "Gate '{gate_name}' acts on {num_qubits} qubit(s) and needs a {expected}x{expected} matrix, got {got}x{got}"
    )]
    MatrixDimensionMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Number of operand qubits.
        num_qubits: usize,
        /// Expected matrix dimension (2^num_qubits).
        expected: usize,
        /// Actual matrix dimension.
        got: usize,
    },

    /// Matrix rows are empty or not all the same length as the row count.
    #[error("Matrix must be square and non-empty: {0}")]
    NonSquareMatrix(String),

    /// Structure is only defined for single-qubit (2x2) gates.
    #[error(
        "Gate '{gate_name}' has a {rows}x{cols} matrix; structure is only defined for single-qubit gates (expected shape (2, 2))"
    )]
    StructureRequiresSingleQubit {
        /// Name of the gate.
        gate_name: String,
        /// Number of matrix rows.
        rows: usize,
        /// Number of matrix columns.
        cols: usize,
    },

    /// Gate was already added to a circuit.
    #[error("Gate '{gate_name}' is already registered at index {index}")]
    GateAlreadyRegistered {
        /// Name of the gate.
        gate_name: String,
        /// Index assigned at first registration.
        index: usize,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
