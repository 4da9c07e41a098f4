//! Fleet documents: one tenant's company, machines and emission rows

use super::record::{CompanyProfile, CompanyRecord, EmissionRecord, MachineRecord, ReportRecord};
use super::registration::{MachineForm, Registration, RegistrationError};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Records belonging to one tenant, as exported from the data store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Owning company, absent until the tenant completes sign-up
    #[serde(default)]
    pub company: Option<CompanyRecord>,
    /// Registered machines, oldest first
    #[serde(default)]
    pub machines: Vec<MachineRecord>,
    /// Emission rows, one per machine
    #[serde(default)]
    pub emissions: Vec<EmissionRecord>,
    /// Generated reports, newest first
    #[serde(default)]
    pub reports: Vec<ReportRecord>,
}

impl Fleet {
    /// Load a fleet document
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a fleet document with a custom filesystem implementation
    ///
    /// A missing file yields an empty fleet.
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<Self> {
        if !fs.exists(path) {
            log::debug!("No fleet document at {}, starting empty", path.display());
            return Ok(Self::default());
        }

        let contents = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read fleet document {}", path.display()))?;

        let fleet: Fleet = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse fleet document {}", path.display()))?;

        log::debug!(
            "Loaded {} machines and {} emission rows from {}",
            fleet.machines.len(),
            fleet.emissions.len(),
            path.display()
        );
        Ok(fleet)
    }

    /// Save this fleet document
    pub fn save(&self, path: &Path) -> Result<()> {
        self.save_with_fs(path, &RealFileSystem)
    }

    /// Save this fleet document with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(&self, path: &Path, fs: &FS) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs.create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize fleet document")?;

        fs.write(path, contents)
            .with_context(|| format!("Failed to write fleet document {}", path.display()))?;

        Ok(())
    }

    /// Whether the fleet has no machines
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    /// Emission row recorded for a machine
    ///
    /// When several rows exist for one machine the most recent wins.
    pub fn emission_for(&self, machine_id: &str) -> Option<&EmissionRecord> {
        self.emissions
            .iter()
            .filter(|e| e.machine_id == machine_id)
            .max_by_key(|e| e.created_at)
    }

    /// Create the company, or update its details if it already exists
    pub fn set_company(&mut self, profile: CompanyProfile, user_id: &str) -> &CompanyRecord {
        let company = match self.company.take() {
            Some(mut existing) => {
                profile.apply_to(&mut existing);
                existing
            }
            None => profile.into_record(user_id),
        };
        self.company.insert(company)
    }

    /// Remember a generated report file
    ///
    /// Returns `None` when the fleet has no company to attach it to.
    pub fn record_report(&mut self, report_name: &str, location: &str) -> Option<&ReportRecord> {
        let company = self.company.as_ref()?;
        let record = ReportRecord {
            id: Uuid::new_v4().to_string(),
            company_id: company.id.clone(),
            user_id: company.user_id.clone(),
            report_name: report_name.to_string(),
            report_file_url: location.to_string(),
            created_at: Utc::now(),
        };
        self.reports.insert(0, record);
        self.reports.first()
    }

    /// Register a machine under this fleet's company and keep both rows
    pub fn register(&mut self, form: &MachineForm) -> Result<Registration, RegistrationError> {
        let company = self.company.as_ref().ok_or(RegistrationError::NoCompany)?;
        let registration = form.register(&company.id, &company.user_id)?;

        self.machines.push(registration.machine.clone());
        self.emissions.push(registration.emission.clone());

        Ok(registration)
    }

    /// Remove a machine and its emission rows
    ///
    /// Returns the removed machine, or `None` if no machine has this id.
    pub fn remove_machine(&mut self, machine_id: &str) -> Option<MachineRecord> {
        let index = self.machines.iter().position(|m| m.id == machine_id)?;
        let removed = self.machines.remove(index);
        self.emissions.retain(|e| e.machine_id != machine_id);
        Some(removed)
    }

    /// Machines whose name or type contains `query`, ignoring case
    ///
    /// An empty query matches every machine.
    pub fn search(&self, query: &str) -> Vec<&MachineRecord> {
        let needle = query.trim().to_lowercase();
        self.machines
            .iter()
            .filter(|m| {
                needle.is_empty()
                    || m.machine_name.to_lowercase().contains(&needle)
                    || m.machine_type.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
