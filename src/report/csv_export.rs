//! Machine table export as CSV

use crate::fmt::to_fixed;
use crate::machine::{Fleet, MachineRecord};
use std::io;

/// File written when no output path is given
pub const DEFAULT_CSV_FILE: &str = "machines.csv";

/// Column headers, in order
pub const CSV_HEADER: [&str; 8] = [
    "Machine Name",
    "Type",
    "Energy Source",
    "Units",
    "Runtime (h)",
    "Consumption (kWh)",
    "Daily CO₂ (kg)",
    "Monthly CO₂ (kg)",
];

/// One CSV row for a machine
///
/// Emission columns read `0` when the machine has no emission row.
pub fn machine_row(fleet: &Fleet, machine: &MachineRecord) -> [String; 8] {
    let emission = fleet.emission_for(&machine.id);
    [
        machine.machine_name.clone(),
        machine.machine_type.clone(),
        machine.energy_source.clone(),
        machine.active_units.to_string(),
        machine.runtime_hours.to_string(),
        machine.daily_consumption.to_string(),
        emission.map_or_else(|| "0".to_string(), |e| to_fixed(e.daily_emission, 1)),
        emission.map_or_else(|| "0".to_string(), |e| to_fixed(e.monthly_emission, 0)),
    ]
}

/// Write machines matching `query` (name or type, ignoring case), newest first
///
/// Returns the number of data rows written.
pub fn write_csv<W: io::Write>(fleet: &Fleet, query: &str, writer: W) -> Result<usize, csv::Error> {
    let mut machines = fleet.search(query);
    machines.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for machine in &machines {
        wtr.write_record(machine_row(fleet, machine))?;
    }
    wtr.flush()?;

    log::debug!("Exported {} machines to CSV", machines.len());
    Ok(machines.len())
}

/// Render the export into a string
pub fn export_to_string(fleet: &Fleet, query: &str) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(fleet, query, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{emission, machine};
    use chrono::Duration;

    fn fleet() -> Fleet {
        let press = machine("m1", "Hydraulic Press", "Coal", 100.0);
        let mut oven = machine("m2", "Oven, Line 2", "Electricity", 40.5);
        oven.machine_type = "Heating".to_string();
        oven.created_at += Duration::days(1);
        let mut emission_row = emission("m1", 220.04, 1);
        emission_row.monthly_emission = 6601.2;

        Fleet {
            machines: vec![press, oven],
            emissions: vec![emission_row],
            ..Default::default()
        }
    }

    #[test]
    fn test_export_writes_header_first() {
        let csv = export_to_string(&fleet(), "").unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Machine Name,Type,Energy Source,Units,Runtime (h),Consumption (kWh),Daily CO₂ (kg),Monthly CO₂ (kg)"
        );
    }

    #[test]
    fn test_export_orders_newest_first_and_quotes_commas() {
        let csv = export_to_string(&fleet(), "").unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "\"Oven, Line 2\",Heating,Electricity,1,8,40.5,0,0"
        );
        assert_eq!(
            lines[2],
            "Hydraulic Press,Heavy,Coal,1,8,100,220.0,6601"
        );
    }

    #[test]
    fn test_machine_row_rounds_emission_cells_on_stored_values() {
        let fleet = Fleet {
            machines: vec![machine("m1", "Pump", "Electricity", 2.0)],
            emissions: vec![emission("m1", 2.05, 1)],
            ..Default::default()
        };

        let row = machine_row(&fleet, &fleet.machines[0]);
        assert_eq!(row[6], "2.0");
        assert_eq!(row[7], "61");

        let tied = Fleet {
            emissions: vec![emission("m1", 2.25, 1)],
            ..fleet
        };
        let row = machine_row(&tied, &tied.machines[0]);
        assert_eq!(row[6], "2.3");
        assert_eq!(row[7], "68");
    }

    #[test]
    fn test_export_applies_search_filter() {
        let mut buffer = Vec::new();
        let written = write_csv(&fleet(), "heat", &mut buffer).unwrap();

        assert_eq!(written, 1);
        let csv = String::from_utf8(buffer).unwrap();
        assert!(csv.contains("Oven"));
        assert!(!csv.contains("Hydraulic"));
    }

    #[test]
    fn test_export_with_no_matches_writes_only_header() {
        let csv = export_to_string(&fleet(), "lathe").unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
