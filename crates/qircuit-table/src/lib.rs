//! Tabular Circuit Reader for Qircuit
//!
//! This crate turns two comma-separated tables into a [`qircuit_ir::Circuit`]:
//!
//! - a **circuit table**, one gate per row: `gate_name, index-partition, ...`
//! - a **gate table**, one definition per row: `gate_name, matrix_literal`
//!
//! Operand cells are parsed left to right, so operand order follows the row
//! (for `cnot` the first operand is the control). Gate names are resolved
//! against the first matching definition; an undefined name aborts
//! construction with [`TableError::GateNotFound`].
//!
//! # Matrix Literals
//!
//! | Form | Example |
//! |------|---------|
//! | Space-separated rows | `0 1; 1 0` |
//! | Bracketed, comma-separated (quote the cell) | `"[1, 0; 0, -1]"` |
//! | Complex entries | `0 -1j; 1j 0`, `0.5+0.5j` |
//!
//! # Example
//!
//! ```rust
//! use qircuit_table::{build_circuit, parse_table};
//!
//! let circuit_rows = parse_table("circuit.csv", "h, 0-0\ncnot, 0-0, 1-1\n").unwrap();
//! let gate_rows = parse_table(
//!     "gates.csv",
//!     "h, 0.7071 0.7071; 0.7071 -0.7071\ncnot, 1 0 0 0; 0 1 0 0; 0 0 0 1; 0 0 1 0\n",
//! )
//! .unwrap();
//!
//! let circuit = build_circuit("bell", &circuit_rows, &gate_rows).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.global_gates().len(), 1);
//! ```

mod builder;
mod cell;
mod error;
mod lexer;
mod literal;
mod reader;

pub use builder::{build_circuit, load_circuit};
pub use cell::parse_qubit_cell;
pub use error::{CellError, TableError, TableResult};
pub use literal::parse_matrix;
pub use reader::{Row, Table, parse_table, read_table};
