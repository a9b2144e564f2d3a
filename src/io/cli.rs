//! Command-line interface for generating survey grid KML files

use std::path::PathBuf;

use clap::Parser;

use crate::grid::generate;
use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{GridError, Result};
use crate::io::kml;
use crate::io::project::Project;

#[derive(Parser)]
#[command(name = "surveygrid")]
#[command(
    author,
    version,
    about = "Generate rotated survey grid KML files from a project description"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Project JSON file describing grids and connection rules
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Output KML path (defaults to the project path with a .kml extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the generated file in the system viewer
    #[arg(long)]
    pub open: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates project loading, generation, stitching, and KML export
pub struct ProjectProcessor {
    cli: Cli,
}

impl ProjectProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the project, generate all grids, and write the KML file
    ///
    /// # Errors
    ///
    /// Returns an error when the project cannot be loaded, a grid
    /// configuration is invalid, or the output cannot be written.
    // Allow print for user feedback on progress and skipped entries
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let project = Project::from_path(&self.cli.project)?;
        let output = generate(&project.grids, &project.connections)?;

        if !self.cli.quiet && output.skipped_entries > 0 {
            eprintln!(
                "Warning: {} connection entries referenced cell numbers no grid produced",
                output.skipped_entries
            );
        }

        let output_path = self.output_path();
        kml::write_document(&output.features, &output_path)?;

        if !self.cli.quiet {
            eprintln!(
                "Wrote {} polygons to {}",
                output.features.len(),
                output_path.display()
            );
        }

        if self.cli.open {
            open::that(&output_path).map_err(|e| GridError::FileSystem {
                path: output_path.clone(),
                operation: "open viewer",
                source: e,
            })?;
        }

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| self.cli.project.with_extension(OUTPUT_EXTENSION))
    }
}
