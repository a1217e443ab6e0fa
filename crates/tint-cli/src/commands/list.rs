//! List command
//!
//! Prints the conversion table.

use anyhow::Result;
use tint_color::Conversion;

pub fn run(verbose: bool) -> Result<()> {
    println!("{:<16} {:<6}    {:<6} STAGES", "CONVERSION", "FROM", "TO");
    for conv in Conversion::ALL {
        let stages: Vec<&str> = conv.stages().into_iter().map(|s| s.name()).collect();
        println!(
            "{:<16} {:<6} -> {:<6} {}",
            conv.name(),
            conv.source().name(),
            conv.target().name(),
            stages.join(" -> ")
        );
    }

    if verbose {
        println!();
        println!("{} conversions, all routed through RGB", Conversion::ALL.len());
    }

    Ok(())
}
