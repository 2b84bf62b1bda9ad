//! Report files: four fixed-name CSVs and one JSON summary.
//!
//! Every write fully replaces its target file; nothing is ever
//! appended. A tabular write is skipped outright when there are no
//! rows, leaving the previous file untouched rather than erasing it.

use std::fs;
use std::path::PathBuf;

use log::{info, warn};

use crate::error::ReportError;
use crate::parse::{ArpRow, InterfaceStatusRow, MacTableRow, SwitchInfo};

pub const CONNECTED_INTERFACES_CSV: &str = "connected_interfaces.csv";
pub const DISCONNECTED_INTERFACES_CSV: &str = "disconnected_interfaces.csv";
pub const MAC_ADDRESS_TABLE_CSV: &str = "mac_address_table.csv";
pub const IP_ARP_TABLE_CSV: &str = "ip_arp_table.csv";
pub const SWITCH_DATA_JSON: &str = "switch_data.json";

const INTERFACE_HEADER: [&str; 6] = ["Port", "Status", "VLAN", "Duplex", "Speed", "Type"];
const MAC_HEADER: [&str; 4] = ["Vlan", "Mac Address", "Type", "Ports"];
const ARP_HEADER: [&str; 3] = ["Interface", "MAC Address", "IP Address"];

/// Writes the report files into one directory.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write the connected and not-connected interface listings.
    pub fn write_interface_status(
        &self,
        connected: &[InterfaceStatusRow],
        disconnected: &[InterfaceStatusRow],
    ) -> Result<(), ReportError> {
        self.write_interface_file(CONNECTED_INTERFACES_CSV, connected)?;
        self.write_interface_file(DISCONNECTED_INTERFACES_CSV, disconnected)
    }

    fn write_interface_file(
        &self,
        name: &str,
        rows: &[InterfaceStatusRow],
    ) -> Result<(), ReportError> {
        if rows.is_empty() {
            warn!("No rows for {name}, leaving the previous file in place");
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(self.path(name))?;
        writer.write_record(INTERFACE_HEADER)?;
        for row in rows {
            writer.write_record([
                &row.port, &row.status, &row.vlan, &row.duplex, &row.speed, &row.media,
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {name}", rows.len());
        Ok(())
    }

    /// Write the MAC address table report.
    pub fn write_mac_table(&self, rows: &[MacTableRow]) -> Result<(), ReportError> {
        if rows.is_empty() {
            warn!(
                "No rows for {MAC_ADDRESS_TABLE_CSV}, leaving the previous file in place"
            );
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(self.path(MAC_ADDRESS_TABLE_CSV))?;
        writer.write_record(MAC_HEADER)?;
        for row in rows {
            writer.write_record([&row.vlan, &row.mac_address, &row.entry_type, &row.ports])?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {MAC_ADDRESS_TABLE_CSV}", rows.len());
        Ok(())
    }

    /// Write the ARP table report.
    pub fn write_arp_table(&self, rows: &[ArpRow]) -> Result<(), ReportError> {
        if rows.is_empty() {
            warn!("No rows for {IP_ARP_TABLE_CSV}, leaving the previous file in place");
            return Ok(());
        }

        let mut writer = csv::Writer::from_path(self.path(IP_ARP_TABLE_CSV))?;
        writer.write_record(ARP_HEADER)?;
        for row in rows {
            writer.write_record([&row.interface, &row.mac_address, &row.ip_address])?;
        }
        writer.flush()?;

        info!("Wrote {} rows to {IP_ARP_TABLE_CSV}", rows.len());
        Ok(())
    }

    /// Write the switch summary as a single JSON object.
    pub fn write_switch_info(&self, info: &SwitchInfo) -> Result<(), ReportError> {
        let json = serde_json::to_string(info)?;
        fs::write(self.path(SWITCH_DATA_JSON), json)?;

        info!("Wrote switch summary for '{}'", info.switch_name);
        Ok(())
    }

    /// Reset every report to its empty state for the next cycle.
    ///
    /// The CSVs become zero-byte files. The JSON file becomes the
    /// literal `[]` even though the live payload is an object; the
    /// downstream pickup has always treated "empty array" as "nothing
    /// to collect", so the asymmetry stays.
    pub fn reset(&self) -> Result<(), ReportError> {
        for name in [
            CONNECTED_INTERFACES_CSV,
            DISCONNECTED_INTERFACES_CSV,
            IP_ARP_TABLE_CSV,
            MAC_ADDRESS_TABLE_CSV,
        ] {
            fs::write(self.path(name), "")?;
        }
        fs::write(self.path(SWITCH_DATA_JSON), "[]")?;

        info!("Report files reset");
        Ok(())
    }
}

/// Report file names in the order they are produced.
pub fn report_file_names() -> [&'static str; 5] {
    [
        CONNECTED_INTERFACES_CSV,
        DISCONNECTED_INTERFACES_CSV,
        MAC_ADDRESS_TABLE_CSV,
        IP_ARP_TABLE_CSV,
        SWITCH_DATA_JSON,
    ]
}
