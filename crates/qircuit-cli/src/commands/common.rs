//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use qircuit_ir::{Circuit, Gate};

/// Load a circuit from its circuit table and gate-definition table.
pub fn load_circuit(circuit: &Path, gates: &Path) -> Result<Circuit> {
    if !circuit.exists() {
        anyhow::bail!("File not found: {}", circuit.display());
    }
    if !gates.exists() {
        anyhow::bail!("File not found: {}", gates.display());
    }

    debug!(circuit = %circuit.display(), gates = %gates.display(), "loading tables");
    qircuit_table::load_circuit(circuit, gates)
        .with_context(|| format!("Failed to build circuit from {}", circuit.display()))
}

/// Comma-separated operand list, e.g. `q0@p0, q1@p1`.
pub fn format_operands(gate: &Gate) -> String {
    gate.qubits()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
