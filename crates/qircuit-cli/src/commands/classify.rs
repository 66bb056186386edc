//! Classify command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use serde::Serialize;

use qircuit_ir::{Circuit, Gate};

use super::common::{format_operands, load_circuit};

/// Classification of one gate, as printed by `classify`.
#[derive(Debug, Serialize)]
pub struct GateReport {
    pub index: usize,
    pub name: String,
    pub qubits: Vec<u32>,
    pub partitions: Vec<u32>,
    pub local: bool,
    pub single: bool,
    pub cnot: bool,
    pub diagonal: bool,
    /// Only defined for single-qubit gates.
    pub structured: Option<bool>,
}

impl GateReport {
    fn new(position: usize, gate: &Gate) -> Result<Self> {
        let structured = if gate.is_single() {
            Some(gate.is_structured()?)
        } else {
            None
        };

        Ok(Self {
            index: gate.index().unwrap_or(position),
            name: gate.name().to_string(),
            qubits: gate.qubit_ids().map(|q| q.0).collect(),
            partitions: gate.partitions().into_iter().map(|p| p.0).collect(),
            local: gate.is_local(),
            single: gate.is_single(),
            cnot: gate.is_cnot(),
            diagonal: gate.is_diagonal(),
            structured,
        })
    }
}

/// Classify every gate of `circuit` in program order.
pub fn classify(circuit: &Circuit) -> Result<Vec<GateReport>> {
    circuit
        .gates()
        .iter()
        .enumerate()
        .map(|(i, gate)| GateReport::new(i, gate))
        .collect()
}

/// Execute the classify command.
pub fn execute(circuit_path: &Path, gates_path: &Path, format: &str) -> Result<()> {
    let circuit = load_circuit(circuit_path, gates_path)?;
    let reports = classify(&circuit)?;

    match format.to_lowercase().as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        "table" => print_table(&circuit, &reports),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }

    Ok(())
}

fn flag(value: bool) -> console::StyledObject<&'static str> {
    if value {
        style("yes").green()
    } else {
        style("no").dim()
    }
}

fn print_table(circuit: &Circuit, reports: &[GateReport]) {
    println!(
        "{} {} ({} gates)\n",
        style("→").cyan().bold(),
        style(circuit.name()).green(),
        reports.len()
    );

    for (gate, report) in circuit.gates().iter().zip(reports) {
        let scope = if report.local {
            style("local").green()
        } else {
            style("global").yellow()
        };
        println!(
            "  {:>3}  {}  [{}]  {}",
            report.index,
            style(&report.name).bold(),
            format_operands(gate),
            scope
        );
        println!(
            "       single: {}  cnot: {}  diagonal: {}  structured: {}",
            flag(report.single),
            flag(report.cnot),
            flag(report.diagonal),
            match report.structured {
                Some(value) => flag(value),
                None => style("-").dim(),
            }
        );
    }
}
