//! Summary command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the summary command.
pub fn execute(circuit_path: &Path, gates_path: &Path) -> Result<()> {
    let circuit = load_circuit(circuit_path, gates_path)?;

    let partitions = circuit.partitions();
    let local = circuit.local_gates().len();
    let global = circuit.global_gates().len();

    println!(
        "{} {}",
        style("Circuit").cyan().bold(),
        style(circuit.name()).green()
    );
    println!("  Qubits:     {}", circuit.num_qubits());
    println!("  Gates:      {}", circuit.num_gates());
    println!("  Partitions: {}", partitions.len());
    println!("  Local:      {}", style(local).green());
    println!("  Global:     {}", style(global).yellow());
    println!();

    for partition in partitions {
        let qubits: Vec<String> = circuit
            .qubits()
            .filter(|q| q.partition == partition)
            .map(|q| q.index.to_string())
            .collect();
        println!(
            "  {}: {} ({} gates)",
            style(partition).bold(),
            qubits.join(" "),
            circuit.gates_on_partition(partition).len()
        );
    }

    Ok(())
}
