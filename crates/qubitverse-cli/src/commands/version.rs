//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - circuit client for the Qubitverse simulator",
        style("Qubitverse").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qubitverse-circuit  Editor state normalization and text encoding");
    println!("  qubitverse-client   Simulator HTTP client");
    println!("  qubitverse-cli      Command-line interface");
    println!();
    println!("Default endpoint: {}", qubitverse_client::DEFAULT_ENDPOINT);
}
