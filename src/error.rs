//! Top-level error type with recovery hints
//!
//! Typed errors from the machine and report modules are wrapped in
//! [`CarbonTrackError`] at the command layer so the CLI can print a hint and
//! pick a sysexits-style exit code.
//!
//! # Examples
//!
//! ```
//! use carbontrack::error::CarbonTrackError;
//! use carbontrack::report::ReportError;
//!
//! let err = CarbonTrackError::from(ReportError::NoData);
//! assert_eq!(err.exit_code(), 66);
//! assert!(err.suggestion().unwrap().contains("carbontrack register"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::fmt::to_fixed;
use crate::machine::RegistrationError;
use crate::report::ReportError;

/// Errors surfaced by CLI commands
#[derive(Error, Debug)]
pub enum CarbonTrackError {
    /// Machine registration was rejected
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// A report could not be assembled
    #[error(transparent)]
    Report(#[from] ReportError),

    /// No machine with this id in the fleet
    #[error("Machine not found: {id}")]
    MachineNotFound {
        /// Id that was looked up
        id: String,
    },

    /// Yearly emissions above the configured maximum
    #[error("Yearly emissions ({actual_kg} kg) exceed maximum ({max_kg} kg)")]
    BudgetExceeded {
        /// Fleet's yearly kg CO₂
        actual_kg: f64,
        /// Configured maximum
        max_kg: f64,
        /// Share over the maximum, in percent
        percentage_over: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// What was being read or written
        context: String,
        /// Path involved, if any
        path: Option<PathBuf>,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl CarbonTrackError {
    /// Build an I/O error for a file operation
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Actionable hint for resolving this error, if any
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Registration(RegistrationError::MissingField(field)) => Some(format!(
                "Provide a value for '{}'. Run 'carbontrack register --help' for the full list of options.",
                field
            )),
            Self::Registration(RegistrationError::Invalid(_)) => Some(
                "Readings must be finite and non-negative, and at least one unit must be active."
                    .to_string(),
            ),
            Self::Registration(RegistrationError::NoCompany) => Some(
                "Create the company first: carbontrack company --name <NAME> --email <EMAIL>"
                    .to_string(),
            ),
            Self::Report(ReportError::NoData) => Some(
                "Reports need a company and at least one machine. Add machines with 'carbontrack register'."
                    .to_string(),
            ),
            Self::MachineNotFound { .. } => {
                Some("List machine ids with 'carbontrack machines'.".to_string())
            }
            Self::BudgetExceeded {
                percentage_over, ..
            } => {
                if *percentage_over > 20.0 {
                    Some(format!(
                        "Emissions are {}% over budget. Review the report's recommendations, \
                         starting with renewable energy for coal and fuel machines.",
                        to_fixed(*percentage_over, 0)
                    ))
                } else {
                    Some(format!(
                        "Emissions are {}% over budget. Scheduling maintenance on the noisiest \
                         machines usually closes small gaps.",
                        to_fixed(*percentage_over, 1)
                    ))
                }
            }
            Self::Io { context, path, .. } => Some(match path {
                Some(path) => format!(
                    "Check that {} exists and that you have permissions for {}.",
                    path.display(),
                    context
                ),
                None => format!("Check file permissions and disk space for {}.", context),
            }),
        }
    }

    /// Exit code for scripts and CI jobs
    ///
    /// Follows the sysexits.h conventions: usage errors are 64, bad data 65,
    /// missing input 66 and I/O failures 74. A blown budget exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Registration(RegistrationError::MissingField(_)) => 64, // EX_USAGE
            Self::Registration(RegistrationError::Invalid(_)) => 65,      // EX_DATAERR
            Self::Registration(RegistrationError::NoCompany) => 66,       // EX_NOINPUT
            Self::Report(ReportError::NoData) => 66,
            Self::MachineNotFound { .. } => 65,
            Self::BudgetExceeded { .. } => 1,
            Self::Io { .. } => 74, // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format an error with its cause chain and hint
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(suggestion) = Self::find(error).and_then(CarbonTrackError::suggestion) {
            output.push_str(&format!(
                "\n{} {}\n",
                style("help:").cyan().bold(),
                suggestion
            ));
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, CarbonTrackError::exit_code)
    }

    // Commands add context on top, so look through the whole chain
    fn find(error: &anyhow::Error) -> Option<&CarbonTrackError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<CarbonTrackError>())
    }
}
