//! Command handlers for the carbontrack CLI
//!
//! Each submodule handles one CLI command. Handlers resolve a [`Workspace`]
//! (working directory, configuration and fleet path), do their work through
//! the library modules, and print the results.

pub mod company;
pub mod completions;
pub mod dashboard;
pub mod estimate;
pub mod export;
pub mod init;
pub mod machines;
pub mod register;
pub mod report;

pub use company::{cmd_company, CompanyArgs};
pub use completions::cmd_completions;
pub use dashboard::cmd_dashboard;
pub use estimate::{cmd_estimate, EstimateArgs};
pub use export::cmd_export;
pub use init::cmd_init;
pub use machines::cmd_machines;
pub use register::{cmd_register, RegisterArgs};
pub use report::{cmd_report, ReportOptions, ReportWorkflow};

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigLoader};
use crate::machine::Fleet;

/// Owner recorded on rows created from the CLI
pub const LOCAL_USER_ID: &str = "local";

/// Working directory, loaded configuration and resolved fleet path
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory holding `.carbontrack.toml` and `.carbontrack/`
    pub root: PathBuf,
    /// Loaded configuration, defaults when no file exists
    pub config: ConfigFile,
    /// Fleet document in use
    pub fleet_path: PathBuf,
}

impl Workspace {
    /// Open the current directory as a workspace
    ///
    /// `fleet` overrides the configured fleet file.
    pub fn current(fleet: Option<&Path>) -> Result<Self> {
        let root = env::current_dir().context("Failed to read the current directory")?;
        Self::open(&root, fleet)
    }

    /// Open `root` as a workspace
    pub fn open(root: &Path, fleet: Option<&Path>) -> Result<Self> {
        let config = ConfigLoader::load(root)?;
        let fleet_path = config.fleet_path(root, fleet);
        log::debug!("Using fleet document {}", fleet_path.display());

        Ok(Self {
            root: root.to_path_buf(),
            config,
            fleet_path,
        })
    }

    /// Load the fleet document, empty when it does not exist yet
    pub fn load_fleet(&self) -> Result<Fleet> {
        Fleet::load(&self.fleet_path)
    }

    /// Write the fleet document back
    pub fn save_fleet(&self, fleet: &Fleet) -> Result<()> {
        fleet.save(&self.fleet_path)
    }
}
