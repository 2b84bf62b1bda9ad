//! MAC address table parsing from `show mac address-table` output.

/// One data row of the MAC address table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacTableRow {
    pub vlan: String,
    pub mac_address: String,
    pub entry_type: String,
    pub ports: String,
}

/// Parse the MAC address table.
///
/// Column contract: the first two lines are the header and separator,
/// the last line is the totals footer; each body line whitespace-splits
/// into at least Vlan, Mac Address, Type, Ports. Any extra trailing
/// fields belong to the port list. Shorter lines are dropped.
pub fn parse_mac_table(output: &str) -> Vec<MacTableRow> {
    let lines: Vec<&str> = output.trim().lines().collect();

    lines
        .get(2..lines.len().saturating_sub(1))
        .unwrap_or_default()
        .iter()
        .filter_map(|line| parse_row(line))
        .collect()
}

fn parse_row(line: &str) -> Option<MacTableRow> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    Some(MacTableRow {
        vlan: fields[0].to_string(),
        mac_address: fields[1].to_string(),
        entry_type: fields[2].to_string(),
        ports: fields[3..].join(" "),
    })
}
