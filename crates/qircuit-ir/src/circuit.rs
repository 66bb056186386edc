//! Partitioned circuit: qubit registry plus ordered gate sequence.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, warn};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::{PartitionId, Qubit, QubitId};
use crate::render;

/// A quantum circuit whose qubits are grouped into partitions.
///
/// The gate sequence is the circuit's program order. The registry is
/// append-only: the first registration of a qubit index fixes its partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Registered qubits, keyed by index.
    qubits: BTreeMap<QubitId, Qubit>,
    /// Gates in registration order; `gates[i].index() == Some(i)`.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: BTreeMap::new(),
            gates: vec![],
        }
    }

    /// Register a qubit unless its index is already present.
    ///
    /// Returns the registered qubit, which keeps the partition of the first
    /// registration.
    pub fn add_qubit(&mut self, qubit: Qubit) -> Qubit {
        let registered = *self.qubits.entry(qubit.index).or_insert(qubit);
        if registered.partition != qubit.partition {
            warn!(
                "Qubit {} already registered in {}; ignoring {}",
                qubit.index, registered.partition, qubit.partition
            );
        }
        registered
    }

    /// Register a gate and its operands, returning the assigned index.
    ///
    /// Operands are rebound to the registered qubits, so the gate always
    /// sees the registry's partition for each index.
    pub fn add_gate(&mut self, mut gate: Gate) -> IrResult<usize> {
        if let Some(index) = gate.index() {
            return Err(IrError::GateAlreadyRegistered {
                gate_name: gate.name().to_string(),
                index,
            });
        }

        for operand in gate.qubits_mut() {
            *operand = self.add_qubit(*operand);
        }

        let index = self.gates.len();
        gate.set_index(index);
        debug!("Registered gate {gate}");
        self.gates.push(gate);
        Ok(index)
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of registered qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Look up a registered qubit.
    pub fn qubit(&self, index: QubitId) -> Option<&Qubit> {
        self.qubits.get(&index)
    }

    /// Registered qubits in index order.
    pub fn qubits(&self) -> impl Iterator<Item = &Qubit> {
        self.qubits.values()
    }

    /// Gates in program order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Gate at a sequence position.
    pub fn gate(&self, index: usize) -> Option<&Gate> {
        self.gates.get(index)
    }

    /// Distinct partitions across the registry, sorted.
    pub fn partitions(&self) -> BTreeSet<PartitionId> {
        self.qubits.values().map(|q| q.partition).collect()
    }

    /// Gates whose operands all share one partition.
    pub fn local_gates(&self) -> Vec<&Gate> {
        self.gates.iter().filter(|g| g.is_local()).collect()
    }

    /// Gates whose operands span two or more partitions.
    pub fn global_gates(&self) -> Vec<&Gate> {
        self.gates.iter().filter(|g| g.is_global()).collect()
    }

    /// Gates touching at least one qubit of `partition`.
    pub fn gates_on_partition(&self, partition: PartitionId) -> Vec<&Gate> {
        self.gates
            .iter()
            .filter(|g| g.qubits().iter().any(|q| q.partition == partition))
            .collect()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::draw(self))
    }
}
