//! Draw command implementation.

use std::path::Path;

use anyhow::Result;

use super::common::load_circuit;

/// Execute the draw command.
pub fn execute(circuit: &Path, gates: &Path) -> Result<()> {
    let circuit = load_circuit(circuit, gates)?;
    print!("{circuit}");
    Ok(())
}
