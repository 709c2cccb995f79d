use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use molde_codegen::{MemorySink, Report, SourceTreeSink, dispatch};
use molde_descriptor::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to molde.toml (defaults to ./molde.toml)
    #[arg(short, long, default_value = "molde.toml")]
    pub config: PathBuf,

    /// Output directory for the generated source tree
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let declarations = manifest.declarations();

        if self.dry_run {
            self.run_preview(&declarations)
        } else {
            self.run_generation(&declarations)
        }
    }

    fn run_generation(&self, declarations: &[molde_descriptor::Declaration]) -> Result<()> {
        let mut sink = SourceTreeSink::new(&self.output);
        let report = dispatch(declarations, &mut sink);

        for name in &report.written {
            println!("  + {}", name);
        }
        println!();
        println!(
            "Generated {} file{} under {}",
            report.written.len(),
            if report.written.len() == 1 { "" } else { "s" },
            self.output.display()
        );

        Self::print_failures(&report);
        Ok(())
    }

    fn run_preview(&self, declarations: &[molde_descriptor::Declaration]) -> Result<()> {
        let mut sink = MemorySink::new();
        let report = dispatch(declarations, &mut sink);

        for artifact in sink.artifacts() {
            println!("── {} ──", artifact.relative_path().display());
            println!("{}", artifact.source);
        }

        println!("── Summary ──");
        println!("{} files would be generated", sink.artifacts().len());

        Self::print_failures(&report);
        Ok(())
    }

    /// Failures are best-effort diagnostics: reported, never a hard abort
    /// of the batch.
    fn print_failures(report: &Report) {
        if report.is_clean() {
            return;
        }

        println!();
        for failure in &report.failures {
            let kind = if failure.error.is_configuration() {
                "configuration error"
            } else {
                "emission error"
            };
            eprintln!("warning: {} for {}: {}", kind, failure.subject, failure.error);
        }
    }
}
