//! Reading and writing `.carbontrack.toml`
//!
//! Parsing and validation live on [`ConfigFile`]; this module only moves
//! text between the project root and the filesystem.

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locates, loads and saves the configuration of a project root
pub struct ConfigLoader;

impl ConfigLoader {
    /// Where the config file of `project_root` lives
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration of `project_root`, defaults when it has none
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use carbontrack::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Reports are titled {:?}", config.report_title);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// [`ConfigLoader::load`] through a custom filesystem
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let path = Self::path(project_root);
        if !fs.exists(&path) {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_root.display());
            return Ok(ConfigFile::default());
        }

        let contents = fs
            .read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = ConfigFile::from_toml(&contents)?;
        log::debug!(
            "Loaded {} (fleet file {}, budget {})",
            path.display(),
            config.fleet_file,
            if config.emission_budget.is_some() { "set" } else { "unset" }
        );
        Ok(config)
    }

    /// Write `config` into `project_root`
    pub fn save(config: &ConfigFile, project_root: &Path) -> Result<()> {
        Self::save_with_fs(config, project_root, &RealFileSystem)
    }

    /// [`ConfigLoader::save`] through a custom filesystem
    pub fn save_with_fs<FS: FileSystem>(
        config: &ConfigFile,
        project_root: &Path,
        fs: &FS,
    ) -> Result<()> {
        let path = Self::path(project_root);
        fs.write(&path, config.to_toml()?)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryFileSystem;
    use std::io;

    struct UnreadableFileSystem;

    impl FileSystem for UnreadableFileSystem {
        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            Ok(())
        }

        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }
    }

    #[test]
    fn test_load_with_fs_parses_budget_section() {
        let fs = MemoryFileSystem::with_file(
            "/project/.carbontrack.toml",
            r#"
report-title = "Plant 7"

[emission-budget]
target-yearly-kg = 1000.0
warn-yearly-kg = 1500.0
max-yearly-kg = 2000.0
"#,
        );

        let config = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap();

        assert_eq!(config.report_title, "Plant 7");
        let budget = config.emission_budget.unwrap();
        assert_eq!(budget.warn_yearly_kg, Some(1500.0));
    }

    #[test]
    fn test_load_with_fs_read_error_returns_error() {
        let result = ConfigLoader::load_with_fs(Path::new("/project"), &UnreadableFileSystem);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_save_with_fs_writes_kebab_case_keys() {
        let fs = MemoryFileSystem::default();

        ConfigLoader::save_with_fs(&ConfigFile::starter(), Path::new("/project"), &fs).unwrap();

        let written = fs
            .contents(Path::new("/project/.carbontrack.toml"))
            .unwrap();
        assert!(written.contains("report-title"));
        assert!(written.contains("[emission-budget]"));
        assert!(written.contains("max-yearly-kg"));
        assert!(written.contains("regression-threshold-percent"));
    }

    #[test]
    fn test_load_with_fs_missing_file_is_default_without_reading() {
        // Reads would fail; an absent file must never be read
        struct NothingThere;

        impl FileSystem for NothingThere {
            fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
                Ok(())
            }

            fn read_to_string(&self, _path: &Path) -> io::Result<String> {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            }

            fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
                Ok(())
            }

            fn exists(&self, _path: &Path) -> bool {
                false
            }
        }

        let config = ConfigLoader::load_with_fs(Path::new("/project"), &NothingThere).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_with_fs_invalid_config_writes_nothing() {
        let fs = MemoryFileSystem::default();
        let config = ConfigFile {
            fleet_file: String::new(),
            ..ConfigFile::default()
        };

        assert!(ConfigLoader::save_with_fs(&config, Path::new("/project"), &fs).is_err());
        assert!(fs.contents(Path::new("/project/.carbontrack.toml")).is_none());
    }

    #[test]
    fn test_save_with_fs_write_error_returns_error() {
        let result =
            ConfigLoader::save_with_fs(&ConfigFile::default(), Path::new("/p"), &UnreadableFileSystem);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
