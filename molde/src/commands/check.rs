use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use molde_descriptor::{Manifest, PatternKind};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to molde.toml (defaults to ./molde.toml)
    #[arg(short, long, default_value = "molde.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let declarations = manifest.declarations();

        println!("✓ {} is valid\n", self.config.display());

        println!(
            "  {} declaration{}:",
            declarations.len(),
            if declarations.len() == 1 { "" } else { "s" }
        );
        for declaration in &declarations {
            let pattern = match declaration.pattern {
                PatternKind::Builder => "builder",
                PatternKind::Singleton => "singleton",
            };
            println!(
                "    {} ({}, {} member{})",
                declaration.descriptor.qualified_name(),
                pattern,
                declaration.descriptor.members.len(),
                if declaration.descriptor.members.len() == 1 {
                    ""
                } else {
                    "s"
                }
            );
        }

        Ok(())
    }
}
