//! Energy sources and their emission factors
//!
//! | Source      | kg CO₂ per kWh-equivalent |
//! |-------------|---------------------------|
//! | Electricity | 0.85                      |
//! | Coal        | 2.2                       |
//! | Natural Gas | 0.5                       |
//! | Fuel        | 2.31                      |
//! | Other       | 1.0                       |
//!
//! Source names outside this table are not an error: they use
//! [`DEFAULT_EMISSION_FACTOR`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Factor applied to any source name not present in the table
pub const DEFAULT_EMISSION_FACTOR: f64 = 1.0;

/// Energy source of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergySource {
    /// Grid electricity
    Electricity,
    /// Coal-fired heat or power
    Coal,
    /// Natural gas
    #[serde(rename = "Natural Gas")]
    NaturalGas,
    /// Liquid fuel (diesel, oil)
    Fuel,
    /// Anything else
    Other,
}

impl EnergySource {
    /// All known sources, in the order forms list them
    pub const ALL: [EnergySource; 5] = [
        EnergySource::Electricity,
        EnergySource::Fuel,
        EnergySource::Coal,
        EnergySource::NaturalGas,
        EnergySource::Other,
    ];

    /// Parse an exact source name ("Natural Gas", not "natural_gas")
    ///
    /// # Examples
    ///
    /// ```
    /// use carbontrack::emission::EnergySource;
    ///
    /// assert_eq!(EnergySource::parse("Coal"), Some(EnergySource::Coal));
    /// assert_eq!(EnergySource::parse("Natural Gas"), Some(EnergySource::NaturalGas));
    /// assert_eq!(EnergySource::parse("coal"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Electricity" => Some(Self::Electricity),
            "Coal" => Some(Self::Coal),
            "Natural Gas" => Some(Self::NaturalGas),
            "Fuel" => Some(Self::Fuel),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Display name, identical to the name stored in machine records
    pub fn name(&self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Coal => "Coal",
            Self::NaturalGas => "Natural Gas",
            Self::Fuel => "Fuel",
            Self::Other => "Other",
        }
    }

    /// kg CO₂ per kWh-equivalent
    pub fn factor(&self) -> f64 {
        match self {
            Self::Electricity => 0.85,
            Self::Coal => 2.2,
            Self::NaturalGas => 0.5,
            Self::Fuel => 2.31,
            Self::Other => 1.0,
        }
    }

    /// Whether switching away from this source is worth recommending
    pub fn is_carbon_intensive(&self) -> bool {
        matches!(self, Self::Coal | Self::Fuel)
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the emission factor for a free-form source name
///
/// # Examples
///
/// ```
/// use carbontrack::emission::{emission_factor, DEFAULT_EMISSION_FACTOR};
///
/// assert_eq!(emission_factor("Fuel"), 2.31);
/// assert_eq!(emission_factor("Biomass"), DEFAULT_EMISSION_FACTOR);
/// ```
pub fn emission_factor(source: &str) -> f64 {
    EnergySource::parse(source)
        .map(|s| s.factor())
        .unwrap_or(DEFAULT_EMISSION_FACTOR)
}
