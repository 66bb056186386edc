//! Qubit cell parsing (`<index>-<partition>`).

use qircuit_ir::Qubit;

use crate::error::CellError;

/// Parse a qubit cell such as `3-1` (qubit 3, partition 1).
///
/// Both sides of the `-` must be plain ASCII digits. The caller wraps the
/// error with row and cell context.
pub fn parse_qubit_cell(text: &str) -> Result<Qubit, CellError> {
    let (index, partition) = text.split_once('-').ok_or(CellError::MissingSeparator)?;
    let index = parse_number(index).ok_or_else(|| CellError::InvalidIndex(index.to_string()))?;
    let partition =
        parse_number(partition).ok_or_else(|| CellError::InvalidPartition(partition.to_string()))?;
    Ok(Qubit::new(index, partition))
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
