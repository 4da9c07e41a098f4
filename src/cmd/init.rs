//! Init command implementation
//!
//! Handles `carbontrack init`, which writes a starter `.carbontrack.toml`
//! with an example yearly emission budget.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::fmt::{to_fixed, BULB, CHECKMARK, INFO, ROCKET, WARNING};

/// Create `.carbontrack.toml` in the current directory
///
/// An existing file is left untouched.
///
/// # Examples
///
/// ```no_run
/// use carbontrack::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    let project_root = env::current_dir()?;
    init_in(&project_root)
}

/// Create `.carbontrack.toml` in `project_root`
pub fn init_in(project_root: &Path) -> Result<()> {
    println!(
        "{} {} Initializing carbontrack",
        ROCKET,
        style("carbontrack init").bold()
    );
    println!();

    if ConfigLoader::path(project_root).exists() {
        println!(
            "{} Config file already exists: {}",
            style(WARNING).yellow(),
            style(CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let config = ConfigFile::starter();
    ConfigLoader::save(&config, project_root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(CONFIG_FILE_NAME).cyan().bold()
    );
    println!();

    println!("{}  Configuration:", INFO);
    println!("   {} report-title = {}", style("•").dim(), style(&config.report_title).green());
    println!("   {} fleet-file = {}", style("•").dim(), style(&config.fleet_file).green());
    if let Some(budget) = &config.emission_budget {
        for (name, value) in [
            ("target-yearly-kg", budget.target_yearly_kg),
            ("warn-yearly-kg", budget.warn_yearly_kg),
            ("max-yearly-kg", budget.max_yearly_kg),
        ] {
            if let Some(kg) = value {
                println!("   {} {} = {}", style("•").dim(), name, style(to_fixed(kg, 0)).green());
            }
        }
    }
    println!();

    println!("{}  Next Steps:", BULB);
    println!(
        "   1. Create your company with {}",
        style("carbontrack company --name <NAME> --email <EMAIL>").cyan()
    );
    println!(
        "   2. Add machines with {}",
        style("carbontrack register").cyan()
    );
    println!(
        "   3. Run {} to enforce the budget",
        style("carbontrack report --check").cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_starter_config() {
        let temp = TempDir::new().unwrap();

        init_in(temp.path()).unwrap();

        let loaded = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(loaded, ConfigFile::starter());
    }

    #[test]
    fn test_init_leaves_existing_config_alone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "report-title = \"Mine\"\n").unwrap();

        init_in(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "report-title = \"Mine\"\n"
        );
    }
}
