//! Command-line interface for batch texture generation and state listing

use crate::assembly::registry::StateRegistry;
use crate::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX, METADATA_FILENAME};
use crate::io::error::{Result, file_system, invalid_field};
use crate::io::image::{export_texture, load_frames, properties_path, textures_dir, write_show_index};
use crate::io::progress::ProgressManager;
use crate::show::display::DisplayId;
use crate::show::properties::ShowProperties;
use crate::texture::synthesis::synthesize;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "cinetile")]
#[command(
    author,
    version,
    about = "Cut animated images into per-cell screen textures"
)]
/// Command-line arguments for the screen texture tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Subcommands of the screen texture tool
#[derive(Subcommand)]
pub enum Command {
    /// Generate textures for every show directory under SOURCE
    Generate {
        /// Directory holding one sub-directory per show
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Assets root receiving textures and adjusted configurations
        #[arg(value_name = "ASSETS")]
        assets: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// List every legal cell state name
    States {
        /// Tile columns to enumerate
        #[arg(
            long,
            default_value_t = BLOCKS_X_MAX,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(BLOCKS_X_MAX))
        )]
        blocks_x: u32,

        /// Tile rows to enumerate
        #[arg(
            long,
            default_value_t = BLOCKS_Y_MAX,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(BLOCKS_Y_MAX))
        )]
        blocks_y: u32,
    },
}

impl Cli {
    /// Log level implied by the verbosity flag
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns the first run-fatal error encountered.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Generate {
                source,
                assets,
                quiet,
            } => {
                let report = ShowProcessor::new(source, assets, !quiet).process()?;
                info!(
                    "Generated {} shows, rejected {}",
                    report.generated.len(),
                    report.rejected.len()
                );
                Ok(())
            }
            Command::States { blocks_x, blocks_y } => {
                let registry = StateRegistry::new(blocks_x, blocks_y);
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                for name in registry.names() {
                    writeln!(out, "{name}").map_err(file_system("<stdout>", "write state list"))?;
                }
                Ok(())
            }
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_from_env| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
    {
        warn!("Keeping the existing log subscriber: {e}");
    }
}

/// A show that was skipped by a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedShow {
    /// Source directory of the show
    pub source: PathBuf,
    /// Why it was rejected
    pub reason: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Displays whose textures were written, in processing order
    pub generated: Vec<DisplayId>,
    /// Shows rejected by configuration or input errors
    pub rejected: Vec<RejectedShow>,
}

/// Orchestrates texture generation for a directory of shows
pub struct ShowProcessor {
    source: PathBuf,
    assets: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl ShowProcessor {
    /// Create a processor reading shows from `source` and writing to `assets`
    pub fn new(source: PathBuf, assets: PathBuf, show_progress: bool) -> Self {
        Self {
            source,
            assets,
            progress_manager: show_progress.then(ProgressManager::new),
        }
    }

    /// Process every show directory and write the show index
    ///
    /// Configuration and input errors reject only the affected show.
    ///
    /// # Errors
    ///
    /// Returns the first file system or image I/O error, which aborts the run.
    pub fn process(&mut self) -> Result<BatchReport> {
        let shows = self.collect_shows()?;
        let mut report = BatchReport::default();
        let mut claimed = BTreeSet::new();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(shows.len());
        }

        for (index, show_dir) in shows.iter().enumerate() {
            match self.process_show(show_dir, index, &claimed) {
                Ok(display) => {
                    claimed.insert(display);
                    report.generated.push(display);
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_show(index);
                    }
                }
                Err(e) if e.is_show_local() => {
                    error!("Rejected {}: {e}", show_dir.display());
                    report.rejected.push(RejectedShow {
                        source: show_dir.clone(),
                        reason: e.to_string(),
                    });
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.reject_show(index);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        write_show_index(&self.assets, &report.generated)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(report)
    }

    fn collect_shows(&self) -> Result<Vec<PathBuf>> {
        let mut shows = Vec::new();
        for entry in
            fs::read_dir(&self.source).map_err(file_system(&self.source, "read source directory"))?
        {
            let path = entry
                .map_err(file_system(&self.source, "read source directory"))?
                .path();
            if path.is_dir() {
                shows.push(path);
            }
        }
        shows.sort();
        Ok(shows)
    }

    fn process_show(
        &mut self,
        show_dir: &Path,
        index: usize,
        claimed: &BTreeSet<DisplayId>,
    ) -> Result<DisplayId> {
        let start_time = Instant::now();
        let name = show_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_show(index, &name);
        }

        let props = ShowProperties::load(&show_dir.join(METADATA_FILENAME))?;
        if claimed.contains(&props.display()) {
            return Err(invalid_field(
                "assignToBlock",
                &props.display(),
                &"already assigned to another show",
            ));
        }

        let frames = load_frames(show_dir)?;
        let show = synthesize(&props, &frames)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.set_tiles(index, show.textures.len());
        }

        let textures = textures_dir(&self.assets);
        fs::create_dir_all(&textures).map_err(file_system(&textures, "create directory"))?;
        for texture in &show.textures {
            export_texture(texture, &textures)?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.tile_written(index);
            }
        }

        let display_id = show.properties.display();
        show.properties
            .save(&properties_path(&self.assets, display_id))?;

        info!(
            "{name}: wrote {} textures for {display_id} in {:.2?}",
            show.textures.len(),
            start_time.elapsed()
        );
        Ok(display_id)
    }
}

