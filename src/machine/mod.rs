//! Machine records, registration and fleet documents
//!
//! This is the boundary around the pure estimation core: readings are
//! validated here before they reach [`crate::emission`] or
//! [`crate::advisor`].

pub mod fleet;
pub mod record;
pub mod registration;
pub mod snapshot;

pub use fleet::Fleet;
pub use record::{CompanyProfile, CompanyRecord, EmissionRecord, MachineRecord, ReportRecord};
pub use registration::{MachineForm, Registration, RegistrationError};
pub use snapshot::{Assessment, MachineSnapshot, ValidationError};
