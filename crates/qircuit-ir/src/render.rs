//! ASCII diagram of a partitioned circuit.
//!
//! One row per registered qubit in index order, one column per gate in
//! program order. Two extra spacer rows mark every partition boundary.
//!
//! ```text
//!  ¦   ¦¦   ¦
//! 0¦―□―¦¦―•―¦
//!  ¦   ¦¦   ¦
//!  ¦   ¦¦   ¦
//!  ¦   ¦¦   ¦
//! 1¦―――¦¦―⊕―¦
//!  ¦   ¦¦   ¦
//! ```

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::qubit::{PartitionId, Qubit};

const CONTROL: char = '•';
const TARGET: char = '⊕';
const OPERAND: char = '□';
const WIRE: char = '―';

/// Render `circuit` as a multi-line diagram.
///
/// Returns an empty string for a circuit without qubits.
pub fn draw(circuit: &Circuit) -> String {
    let width = circuit
        .qubits()
        .map(|q| q.index.0.to_string().len())
        .max()
        .unwrap_or(0);
    if width == 0 {
        return String::new();
    }

    let spacer = format!("{}{}\n", " ".repeat(width), "¦   ¦".repeat(circuit.num_gates()));
    let mut out = String::new();
    let mut previous: Option<PartitionId> = None;

    for qubit in circuit.qubits() {
        if previous.is_some_and(|p| p != qubit.partition) {
            out.push_str(&spacer);
            out.push_str(&spacer);
        }
        previous = Some(qubit.partition);

        out.push_str(&spacer);
        out.push_str(&format!("{:>width$}", qubit.index.0));
        for gate in circuit.gates() {
            out.push_str(&format!("¦{WIRE}{}{WIRE}¦", glyph(gate, qubit)));
        }
        out.push('\n');
    }

    out.push_str(&spacer);
    out
}

fn glyph(gate: &Gate, qubit: &Qubit) -> char {
    if gate.control().is_some_and(|c| c.index == qubit.index) {
        CONTROL
    } else if gate.target().is_some_and(|t| t.index == qubit.index) {
        TARGET
    } else if gate.acts_on(qubit.index) {
        OPERAND
    } else {
        WIRE
    }
}
