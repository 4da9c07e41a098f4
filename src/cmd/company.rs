//! Company command implementation
//!
//! Handles `carbontrack company`, which creates the fleet's company or
//! edits its details. Options left out keep their stored values.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use std::path::Path;

use super::{Workspace, LOCAL_USER_ID};
use crate::error::CarbonTrackError;
use crate::fmt::{CHECKMARK, FACTORY};
use crate::machine::{CompanyProfile, CompanyRecord, RegistrationError};

/// Company details given on the command line
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CompanyArgs {
    /// Company name (required for a new company)
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email (required for a new company)
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Industry classification
    #[arg(long)]
    pub industry: Option<String>,

    /// Head count
    #[arg(long)]
    pub employees: Option<u32>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,

    /// Yearly energy budget, in the company's currency
    #[arg(long, value_name = "AMOUNT")]
    pub energy_budget: Option<f64>,
}

impl CompanyArgs {
    /// True when no option was given
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge these options over an existing company, if any
    ///
    /// # Errors
    ///
    /// [`RegistrationError::MissingField`] when the result has no name or email.
    pub fn into_profile(
        self,
        existing: Option<&CompanyRecord>,
    ) -> Result<CompanyProfile, RegistrationError> {
        let mut profile = existing.map_or_else(CompanyProfile::default, |c| CompanyProfile {
            company_name: c.company_name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            industry_type: c.industry_type.clone(),
            employees: c.employees,
            address: c.address.clone(),
            annual_energy_budget: c.annual_energy_budget,
        });

        if let Some(name) = self.name {
            profile.company_name = name.trim().to_string();
        }
        if let Some(email) = self.email {
            profile.email = email.trim().to_string();
        }
        profile.phone = self.phone.or(profile.phone);
        profile.industry_type = self.industry.or(profile.industry_type);
        profile.employees = self.employees.or(profile.employees);
        profile.address = self.address.or(profile.address);
        profile.annual_energy_budget = self.energy_budget.or(profile.annual_energy_budget);

        if profile.company_name.is_empty() {
            return Err(RegistrationError::MissingField("company_name"));
        }
        if profile.email.is_empty() {
            return Err(RegistrationError::MissingField("email"));
        }
        Ok(profile)
    }
}

/// Create or update the company, or show it when no option is given
pub fn cmd_company(args: CompanyArgs, fleet: Option<&Path>) -> Result<()> {
    let workspace = Workspace::current(fleet)?;
    let mut fleet = workspace.load_fleet()?;

    if args.is_empty() {
        match &fleet.company {
            Some(company) => present_company(company),
            None => println!(
                "No company registered yet. Run {} to create one.",
                style("carbontrack company --name <NAME> --email <EMAIL>").cyan()
            ),
        }
        return Ok(());
    }

    let creating = fleet.company.is_none();
    let profile = args
        .into_profile(fleet.company.as_ref())
        .map_err(CarbonTrackError::from)?;
    let company = fleet.set_company(profile, LOCAL_USER_ID).clone();
    workspace
        .save_fleet(&fleet)
        .context("Failed to save company details")?;

    log::info!(
        "{} company {}",
        if creating { "Created" } else { "Updated" },
        company.id
    );
    println!(
        "{} {} {}",
        CHECKMARK,
        if creating { "Registered" } else { "Updated" },
        style(&company.company_name).bold()
    );
    println!();
    present_company(&company);
    Ok(())
}

fn present_company(company: &CompanyRecord) {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    println!("{} {}", FACTORY, style(&company.company_name).bold().cyan());
    println!("   Email:     {}", company.email);
    println!("   Phone:     {}", or_dash(company.phone.clone()));
    println!("   Industry:  {}", or_dash(company.industry_type.clone()));
    println!(
        "   Employees: {}",
        or_dash(company.employees.map(|n| n.to_string()))
    );
    println!("   Address:   {}", or_dash(company.address.clone()));
    println!(
        "   Energy budget: {}",
        or_dash(company.annual_energy_budget.map(|b| b.to_string()))
    );
}
