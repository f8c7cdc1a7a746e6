use std::path::PathBuf;

use canopy_codegen::{Component, Generator, Strategy, scan};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, Report, TerminalOutput,
    WrittenResult,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Component library root to scan
    #[arg(short, long, default_value = "src/lib/components")]
    pub components_dir: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let components = scan(&self.components_dir).unwrap_or_exit();
        let generator = Generator::new(&components);

        let result = if self.dry_run {
            let files = generator
                .preview(&self.components_dir)
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect();
            GenerationResult::Preview(PreviewResult { files })
        } else {
            let run = generator
                .generate()
                .wrap_err("Failed to generate aggregation modules")?;
            GenerationResult::Written(WrittenResult {
                written: run.written,
                created_markers: run.created_markers,
            })
        };

        let report = GenerateReport {
            components: components.iter().map(|c| self.describe(c)).collect(),
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// One display line per component, e.g. "atoms/button (root)".
    fn describe(&self, component: &Component) -> String {
        let path = component
            .dir
            .strip_prefix(&self.components_dir)
            .unwrap_or(&component.dir);
        let strategy = match Strategy::select(component) {
            Strategy::RootComposed => "root",
            Strategy::Barrel => "barrel",
        };

        format!("{} ({})", path.display(), strategy)
    }
}
