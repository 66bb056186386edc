//! Property-based tests for circuit construction from tables.
//!
//! Generates circuit tables of `x` and `cnot` rows over a small qubit pool
//! with a fixed partition per qubit, then checks the built circuit against
//! the rows.

use proptest::prelude::*;
use qircuit_table::{Table, build_circuit, parse_table};

const GATES: &str = "x, 0 1; 1 0\ncnot, 1 0 0 0; 0 1 0 0; 0 0 0 1; 0 0 1 0\n";

#[derive(Debug, Clone)]
enum RowOp {
    X(u32),
    Cnot(u32, u32),
}

fn arb_row(num_qubits: u32) -> impl Strategy<Value = RowOp> {
    prop_oneof![
        (0..num_qubits).prop_map(RowOp::X),
        (0..num_qubits, 0..num_qubits)
            .prop_filter("distinct operands", |(a, b)| a != b)
            .prop_map(|(a, b)| RowOp::Cnot(a, b)),
    ]
}

/// Circuit text plus the partition assigned to each qubit.
fn arb_circuit() -> impl Strategy<Value = (String, Vec<u32>, Vec<RowOp>)> {
    (2_u32..=6).prop_flat_map(|n| {
        (
            prop::collection::vec(0_u32..3, n as usize),
            prop::collection::vec(arb_row(n), 1..=12),
        )
            .prop_map(|(partitions, ops)| {
                let cell = |q: u32| format!("{q}-{}", partitions[q as usize]);
                let text: String = ops
                    .iter()
                    .map(|op| match op {
                        RowOp::X(q) => format!("x, {}\n", cell(*q)),
                        RowOp::Cnot(c, t) => format!("cnot, {}, {}\n", cell(*c), cell(*t)),
                    })
                    .collect();
                (text, partitions, ops)
            })
    })
}

fn gates() -> Table {
    parse_table("gates.csv", GATES).unwrap()
}

proptest! {
    #[test]
    fn build_matches_rows((text, partitions, ops) in arb_circuit()) {
        let table = parse_table("circuit.csv", &text).unwrap();
        let circuit = build_circuit("prop", &table, &gates()).unwrap();

        prop_assert_eq!(circuit.num_gates(), ops.len());
        for (i, (gate, op)) in circuit.gates().iter().zip(&ops).enumerate() {
            prop_assert_eq!(gate.index(), Some(i));
            match op {
                RowOp::X(_) => {
                    prop_assert_eq!(gate.name(), "x");
                    prop_assert!(gate.is_local());
                }
                RowOp::Cnot(c, t) => {
                    prop_assert!(gate.is_cnot());
                    prop_assert_eq!(gate.control().map(|q| q.index.0), Some(*c));
                    prop_assert_eq!(gate.target().map(|q| q.index.0), Some(*t));
                    let same = partitions[*c as usize] == partitions[*t as usize];
                    prop_assert_eq!(gate.is_local(), same);
                }
            }
        }
        for qubit in circuit.qubits() {
            prop_assert_eq!(qubit.partition.0, partitions[qubit.index.0 as usize]);
        }
    }

    #[test]
    fn build_is_deterministic((text, _partitions, _ops) in arb_circuit()) {
        let table = parse_table("circuit.csv", &text).unwrap();
        let first = build_circuit("prop", &table, &gates()).unwrap();
        let second = build_circuit("prop", &table, &gates()).unwrap();
        prop_assert_eq!(first, second);
    }
}
