//! Gates and their classification predicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::matrix::Matrix;
use crate::qubit::{PartitionId, Qubit, QubitId};

/// Name under which a gate is treated as a controlled-NOT.
pub const CNOT: &str = "cnot";

/// A named unitary acting on an ordered list of qubits.
///
/// Operand order is significant: for a CNOT the first operand is the
/// control and the second the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGate")]
pub struct Gate {
    name: String,
    matrix: Matrix,
    qubits: Vec<Qubit>,
    /// Position in the owning circuit, assigned once at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<usize>,
}

/// Unchecked serialized form of [`Gate`], validated through [`Gate::new`].
#[derive(Deserialize)]
struct RawGate {
    name: String,
    matrix: Matrix,
    qubits: Vec<Qubit>,
    #[serde(default)]
    index: Option<usize>,
}

impl TryFrom<RawGate> for Gate {
    type Error = IrError;

    fn try_from(raw: RawGate) -> IrResult<Self> {
        let mut gate = Self::new(raw.name, raw.matrix, raw.qubits)?;
        gate.index = raw.index;
        Ok(gate)
    }
}

impl Gate {
    /// Create an unregistered gate.
    ///
    /// The matrix must be `2^k x 2^k` for `k` operand qubits, and `k >= 1`.
    pub fn new(
        name: impl Into<String>,
        matrix: Matrix,
        qubits: impl IntoIterator<Item = Qubit>,
    ) -> IrResult<Self> {
        let name = name.into();
        let qubits: Vec<Qubit> = qubits.into_iter().collect();

        if qubits.is_empty() {
            return Err(IrError::NoQubits { gate_name: name });
        }

        let expected = u32::try_from(qubits.len())
            .ok()
            .and_then(|k| 1usize.checked_shl(k))
            .unwrap_or(0);
        if matrix.dim() != expected {
            return Err(IrError::MatrixDimensionMismatch {
                gate_name: name,
                num_qubits: qubits.len(),
                expected,
                got: matrix.dim(),
            });
        }

        Ok(Self {
            name,
            matrix,
            qubits,
            index: None,
        })
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the unitary matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Operand qubits, in operand order.
    #[inline]
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Operand qubit ids, in operand order.
    pub fn qubit_ids(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits.iter().map(|q| q.index)
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Position in the circuit's gate sequence, `None` before registration.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn qubits_mut(&mut self) -> &mut [Qubit] {
        &mut self.qubits
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Distinct partitions touched by this gate, sorted.
    pub fn partitions(&self) -> BTreeSet<PartitionId> {
        self.qubits.iter().map(|q| q.partition).collect()
    }

    /// Check whether the gate has `qubit` among its operands.
    pub fn acts_on(&self, qubit: QubitId) -> bool {
        self.qubits.iter().any(|q| q.index == qubit)
    }

    /// True if every operand lives in the same partition.
    pub fn is_local(&self) -> bool {
        self.partitions().len() == 1
    }

    /// True if the operands span two or more partitions.
    pub fn is_global(&self) -> bool {
        !self.is_local()
    }

    /// True if the gate acts on exactly one qubit.
    pub fn is_single(&self) -> bool {
        self.qubits.len() == 1
    }

    /// True if the gate is labelled `cnot`.
    ///
    /// The check trusts the label and ignores the matrix.
    pub fn is_cnot(&self) -> bool {
        self.name == CNOT
    }

    /// True if every nonzero matrix entry lies on the main diagonal.
    pub fn is_diagonal(&self) -> bool {
        self.matrix.is_diagonal()
    }

    /// Check the symmetric-swap structure of a single-qubit matrix.
    ///
    /// Holds when `m00 == m11 && m01 == m10`, or when
    /// `-m00 == m11 && -m01 == m10`.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::StructureRequiresSingleQubit`] if the matrix is not 2x2.
    pub fn is_structured(&self) -> IrResult<bool> {
        let (rows, cols) = self.matrix.shape();
        if (rows, cols) != (2, 2) {
            return Err(IrError::StructureRequiresSingleQubit {
                gate_name: self.name.clone(),
                rows,
                cols,
            });
        }

        let m = &self.matrix;
        let symmetric = m[(0, 0)] == m[(1, 1)] && m[(0, 1)] == m[(1, 0)];
        let antisymmetric = -m[(0, 0)] == m[(1, 1)] && -m[(0, 1)] == m[(1, 0)];
        Ok(symmetric || antisymmetric)
    }

    /// Control operand of a CNOT.
    pub fn control(&self) -> Option<&Qubit> {
        if self.is_cnot() {
            self.qubits.first()
        } else {
            None
        }
    }

    /// Target operand of a CNOT.
    pub fn target(&self) -> Option<&Qubit> {
        if self.is_cnot() {
            self.qubits.get(1)
        } else {
            None
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q.index)?;
        }
        write!(f, ")")?;
        if let Some(index) = self.index {
            write!(f, " #{index}")?;
        }
        Ok(())
    }
}
