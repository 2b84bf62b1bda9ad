//! Interface status parsing from `show int status` output.

use std::sync::LazyLock;

use regex::Regex;

/// Columns are separated by runs of two or more spaces, so a
/// single-spaced value like "administratively down" stays one field.
static COLUMN_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// One data row of `show int status`.
///
/// Column contract (after splitting a line on 2+ whitespace): field 0
/// is the name/indent column and is not reported; the next six fields
/// are Port, Status, Vlan, Duplex, Speed, Type. Lines with fewer
/// fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStatusRow {
    pub port: String,
    pub status: String,
    pub vlan: String,
    pub duplex: String,
    pub speed: String,
    pub media: String,
}

/// Parse one `show int status` listing (the connected and the
/// not-connected variants use the same shape). The first line is the
/// column header and is always skipped.
pub fn parse_interface_status(output: &str) -> Vec<InterfaceStatusRow> {
    output.trim().lines().skip(1).filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<InterfaceStatusRow> {
    let mut fields = COLUMN_SPLIT.split(line).skip(1);

    Some(InterfaceStatusRow {
        port: fields.next()?.to_string(),
        status: fields.next()?.to_string(),
        vlan: fields.next()?.to_string(),
        duplex: fields.next()?.to_string(),
        speed: fields.next()?.to_string(),
        media: fields.next()?.to_string(),
    })
}
