//! Loading circuits from table files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use qircuit_ir::{PartitionId, QubitId};
use qircuit_table::{TableError, load_circuit};
use tempfile::TempDir;

const GATES: &str = "\
h, 0.7071067811865475 0.7071067811865475; 0.7071067811865475 -0.7071067811865475
x, 0 1; 1 0
z, \"[1, 0; 0, -1]\"
cnot, 1 0 0 0; 0 1 0 0; 0 0 0 1; 0 0 1 0
";

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn fixture(circuit: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let circuit_path = write(dir.path(), "bell.csv", circuit);
    let gates_path = write(dir.path(), "gates.csv", GATES);
    (dir, circuit_path, gates_path)
}

#[test]
fn test_load_bell_across_partitions() {
    let (_dir, circuit_path, gates_path) = fixture("h,0-0\ncnot,0-0,1-1\n");
    let circuit = load_circuit(&circuit_path, &gates_path).unwrap();

    assert_eq!(circuit.name(), "bell");
    assert_eq!(circuit.num_qubits(), 2);
    assert_eq!(circuit.qubit(QubitId(0)).unwrap().partition, PartitionId(0));
    assert_eq!(circuit.qubit(QubitId(1)).unwrap().partition, PartitionId(1));

    let gates = circuit.gates();
    assert_eq!(gates.len(), 2);
    assert_eq!(gates[0].index(), Some(0));
    assert_eq!(gates[1].index(), Some(1));
    assert!(!gates[1].is_local());
    assert_eq!(circuit.local_gates(), vec![&gates[0]]);
    assert_eq!(circuit.global_gates(), vec![&gates[1]]);
}

#[test]
fn test_classification_of_loaded_gates() {
    let (_dir, circuit_path, gates_path) = fixture("x,0-0\nz,1-0\nh,0-0\ncnot,0-0,1-0\n");
    let circuit = load_circuit(&circuit_path, &gates_path).unwrap();
    let gates = circuit.gates();

    assert!(gates[0].is_structured().unwrap());
    assert!(!gates[0].is_diagonal());
    assert!(gates[1].is_structured().unwrap());
    assert!(gates[1].is_diagonal());
    assert!(!gates[2].is_structured().unwrap());
    assert!(gates[3].is_cnot());
    assert!(gates[3].is_local());
    assert!(gates[3].is_structured().is_err());
    assert!(circuit.global_gates().is_empty());
}

#[test]
fn test_repeated_qubit_is_registered_once() {
    let (_dir, circuit_path, gates_path) = fixture("h,0-0\nx,0-0\nx,0-1\n");
    let circuit = load_circuit(&circuit_path, &gates_path).unwrap();

    assert_eq!(circuit.num_qubits(), 1);
    assert_eq!(circuit.qubit(QubitId(0)).unwrap().partition, PartitionId(0));
    assert!(
        circuit
            .gates()
            .iter()
            .all(|g| g.qubits()[0].partition == PartitionId(0))
    );
}

#[test]
fn test_unknown_gate_names_gate_and_table() {
    let (_dir, circuit_path, gates_path) = fixture("h,0-0\nswap,0-0,1-0\n");
    let err = load_circuit(&circuit_path, &gates_path).unwrap_err();

    assert!(matches!(err, TableError::GateNotFound { ref gate, .. } if gate == "swap"));
    let msg = err.to_string();
    assert!(msg.contains("swap"));
    assert!(msg.contains("gates.csv"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let gates_path = write(dir.path(), "gates.csv", GATES);
    let err = load_circuit(&dir.path().join("missing.csv"), &gates_path).unwrap_err();
    assert!(matches!(err, TableError::Io { .. }));
}

#[test]
fn test_building_twice_is_identical() {
    let (_dir, circuit_path, gates_path) =
        fixture("h,0-0\ncnot,0-0,1-1\nx,3-1\ncnot,3-1,1-1\nz,2-0\n");
    let first = load_circuit(&circuit_path, &gates_path).unwrap();
    let second = load_circuit(&circuit_path, &gates_path).unwrap();
    assert_eq!(first, second);
}
