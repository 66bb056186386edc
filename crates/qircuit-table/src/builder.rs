//! Circuit construction from a circuit table and a gate-definition table.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{info, instrument};

use qircuit_ir::{Circuit, Gate, Matrix, Qubit};

use crate::cell::parse_qubit_cell;
use crate::error::{TableError, TableResult};
use crate::literal::parse_matrix;
use crate::reader::{Row, Table, read_table};

/// Gate definitions indexed by name. The first row defining a name wins.
struct GateDefinitions<'a> {
    table: &'a Table,
    rows: FxHashMap<&'a str, &'a Row>,
    parsed: FxHashMap<&'a str, Matrix>,
}

impl<'a> GateDefinitions<'a> {
    fn new(table: &'a Table) -> Self {
        let mut rows = FxHashMap::default();
        for row in table.rows() {
            if let Some(name) = row.cell(0) {
                rows.entry(name).or_insert(row);
            }
        }
        Self {
            table,
            rows,
            parsed: FxHashMap::default(),
        }
    }

    /// Matrix for `gate`, parsed on first use.
    fn resolve(&mut self, gate: &str) -> TableResult<Matrix> {
        let Some((&name, &row)) = self.rows.get_key_value(gate) else {
            return Err(TableError::GateNotFound {
                gate: gate.to_string(),
                table: self.table.source().to_string(),
            });
        };

        if let Some(matrix) = self.parsed.get(name) {
            return Ok(matrix.clone());
        }

        let literal = row.cell(1).ok_or_else(|| TableError::MissingMatrix {
            gate: gate.to_string(),
            table: self.table.source().to_string(),
            line: row.line,
        })?;
        let matrix = parse_matrix(gate, literal)?;
        self.parsed.insert(name, matrix.clone());
        Ok(matrix)
    }
}

/// Operand qubits of a circuit row, in cell order.
fn row_qubits(table: &Table, row: &Row) -> TableResult<Vec<Qubit>> {
    row.cells
        .iter()
        .enumerate()
        .skip(1)
        .map(|(cell, text)| {
            parse_qubit_cell(text).map_err(|reason| TableError::MalformedQubitCell {
                table: table.source().to_string(),
                line: row.line,
                cell: cell + 1,
                text: text.clone(),
                reason,
            })
        })
        .collect()
}

/// Build a circuit from already-read tables.
///
/// Each circuit row is `[gate_name, "index-partition", ...]`; each gate row
/// is `[gate_name, matrix_literal]`. Rows are registered in table order and
/// any failure aborts construction.
pub fn build_circuit(
    name: impl Into<String>,
    circuit_table: &Table,
    gate_table: &Table,
) -> TableResult<Circuit> {
    let mut circuit = Circuit::new(name);
    let mut definitions = GateDefinitions::new(gate_table);

    for row in circuit_table.rows() {
        let gate_name = row.cell(0).unwrap_or_default();
        let qubits = row_qubits(circuit_table, row)?;
        let matrix = definitions.resolve(gate_name)?;

        let invalid = |source| TableError::InvalidGate {
            table: circuit_table.source().to_string(),
            line: row.line,
            source,
        };
        let gate = Gate::new(gate_name, matrix, qubits).map_err(invalid)?;
        circuit.add_gate(gate).map_err(invalid)?;
    }

    info!(
        "Built circuit '{}': {} qubits, {} gates, {} partitions",
        circuit.name(),
        circuit.num_qubits(),
        circuit.num_gates(),
        circuit.partitions().len()
    );
    Ok(circuit)
}

/// Read both tables from disk and build the circuit.
///
/// The circuit is named after the circuit table's file stem.
#[instrument]
pub fn load_circuit(circuit_path: &Path, gates_path: &Path) -> TableResult<Circuit> {
    let circuit_table = read_table(circuit_path)?;
    let gate_table = read_table(gates_path)?;
    let name = circuit_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "circuit".to_string());
    build_circuit(name, &circuit_table, &gate_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CellError;
    use crate::reader::parse_table;
    use qircuit_ir::{IrError, PartitionId, QubitId};

    const GATES: &str = "h, \"0.7071067811865475 0.7071067811865475; 0.7071067811865475 -0.7071067811865475\"\n\
                         cnot, 1 0 0 0; 0 1 0 0; 0 0 0 1; 0 0 1 0\n\
                         x, 0 1; 1 0\n";

    fn build(circuit: &str) -> TableResult<Circuit> {
        let circuit = parse_table("circuit.csv", circuit).unwrap();
        let gates = parse_table("gates.csv", GATES).unwrap();
        build_circuit("test", &circuit, &gates)
    }

    #[test]
    fn test_build_bell() {
        let circuit = build("h,0-0\ncnot,0-0,1-1\n").unwrap();

        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_gates(), 2);
        assert_eq!(
            circuit.qubit(QubitId(1)).map(|q| q.partition),
            Some(PartitionId(1))
        );
        assert_eq!(circuit.gates()[0].name(), "h");
        assert_eq!(circuit.gates()[1].index(), Some(1));
        assert!(circuit.gates()[1].is_global());
        assert_eq!(circuit.local_gates(), vec![&circuit.gates()[0]]);
        assert_eq!(circuit.global_gates(), vec![&circuit.gates()[1]]);
    }

    #[test]
    fn test_operand_order_preserved() {
        let circuit = build("cnot,1-0,0-0\n").unwrap();
        let ids: Vec<_> = circuit.gates()[0].qubit_ids().collect();
        assert_eq!(ids, vec![QubitId(1), QubitId(0)]);
    }

    #[test]
    fn test_unknown_gate() {
        let err = build("h,0-0\ntoffoli,0-0,1-0,2-0\n").unwrap_err();
        match err {
            TableError::GateNotFound { gate, table } => {
                assert_eq!(gate, "toffoli");
                assert_eq!(table, "gates.csv");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_cell_context() {
        let err = build("h,0-0\nx,0:1\n").unwrap_err();
        match err {
            TableError::MalformedQubitCell {
                line, cell, text, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(cell, 2);
                assert_eq!(text, "0:1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_signed_cell_is_rejected() {
        let err = build("x,+1-0\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::MalformedQubitCell {
                reason: CellError::InvalidIndex(ref part),
                ..
            } if part == "+1"
        ));
    }

    #[test]
    fn test_row_without_qubits() {
        let err = build("x\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidGate {
                line: 1,
                source: IrError::NoQubits { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_operand_count_must_match_matrix() {
        let err = build("x,0-0,1-0\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidGate {
                source: IrError::MatrixDimensionMismatch { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_first_definition_wins() {
        let circuit = parse_table("c", "x,0-0\n").unwrap();
        let gates = parse_table("g", "x,1 0; 0 1\nx,0 1; 1 0\n").unwrap();
        let built = build_circuit("t", &circuit, &gates).unwrap();
        assert!(built.gates()[0].is_diagonal());
    }

    #[test]
    fn test_missing_matrix_cell() {
        let circuit = parse_table("c", "x,0-0\n").unwrap();
        let gates = parse_table("g", "x\n").unwrap();
        let err = build_circuit("t", &circuit, &gates).unwrap_err();
        assert!(matches!(err, TableError::MissingMatrix { line: 1, .. }));
    }

    #[test]
    fn test_unused_bad_definition_is_ignored() {
        let circuit = parse_table("c", "x,0-0\n").unwrap();
        let gates = parse_table("g", "x,0 1; 1 0\nbroken,1 2 3\n").unwrap();
        assert!(build_circuit("t", &circuit, &gates).is_ok());
    }
}
