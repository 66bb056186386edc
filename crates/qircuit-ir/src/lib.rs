//! Qircuit Circuit Model
//!
//! This crate provides the in-memory model of a partitioned quantum circuit:
//! qubits placed into partitions, and gates (unitary matrices) applied to
//! ordered subsets of those qubits. It answers the classification queries a
//! distributed simulator needs before it can plan any work.
//!
//! # Core Components
//!
//! - **Qubits**: [`Qubit`] pairs a [`QubitId`] with a [`PartitionId`]
//! - **Matrices**: [`Matrix`] square complex matrix, row-major
//! - **Gates**: [`Gate`] a named matrix with ordered operands and predicates
//!   ([`Gate::is_local`], [`Gate::is_single`], [`Gate::is_cnot`],
//!   [`Gate::is_diagonal`], [`Gate::is_structured`])
//! - **Circuit**: [`Circuit`] qubit registry plus gate sequence in program order
//! - **Rendering**: [`render::draw`] ASCII diagram, also used by `Display`
//!
//! # Example: Classifying a Cross-Partition CNOT
//!
//! ```rust
//! use qircuit_ir::{Circuit, Gate, Matrix, Qubit};
//!
//! let mut circuit = Circuit::new("bell");
//!
//! let s = 1.0 / 2f64.sqrt();
//! let h = Matrix::from_real_rows(&[[s, s], [s, -s]]).unwrap();
//! circuit.add_gate(Gate::new("h", h, [Qubit::new(0, 0)]).unwrap()).unwrap();
//!
//! let cnot = Matrix::from_real_rows(&[
//!     [1.0, 0.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0, 0.0],
//!     [0.0, 0.0, 0.0, 1.0],
//!     [0.0, 0.0, 1.0, 0.0],
//! ])
//! .unwrap();
//! circuit
//!     .add_gate(Gate::new("cnot", cnot, [Qubit::new(0, 0), Qubit::new(1, 1)]).unwrap())
//!     .unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.local_gates().len(), 1);
//! assert!(circuit.gates()[1].is_global());
//! assert!(circuit.gates()[1].is_cnot());
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod qubit;
pub mod render;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CNOT, Gate};
pub use matrix::Matrix;
pub use qubit::{PartitionId, Qubit, QubitId};

/// Complex amplitude type used for matrix entries.
pub use num_complex::Complex64;
