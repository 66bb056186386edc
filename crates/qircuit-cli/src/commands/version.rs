//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - partitioned quantum circuit inspection",
        style("Qircuit").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qircuit-ir     Circuit model and gate classification");
    println!("  qircuit-table  Circuit and gate table reader");
    println!("  qircuit-cli    Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
