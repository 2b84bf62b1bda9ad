//! ARP table parsing from `show ip arp` output.

/// One data row of the ARP table, reordered to interface-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpRow {
    pub interface: String,
    pub mac_address: String,
    pub ip_address: String,
}

/// Parse the ARP table.
///
/// Column contract: the first line is the header; each remaining line
/// whitespace-splits into at least five fields laid out as
/// `Protocol Address Age Hardware-Address Type Interface`. Field 1 is
/// the IP address, field 3 the MAC address, and the last field the
/// interface. Shorter lines are dropped.
pub fn parse_arp_table(output: &str) -> Vec<ArpRow> {
    output.trim().lines().skip(1).filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<ArpRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return None;
    }

    Some(ArpRow {
        interface: fields[fields.len() - 1].to_string(),
        mac_address: fields[3].to_string(),
        ip_address: fields[1].to_string(),
    })
}
