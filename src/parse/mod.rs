//! Parsers for vendor CLI command output.
//!
//! Every parser here is a pure function over the captured text of one
//! command. They share the same failure semantics: lines that do not
//! match the documented column contract are dropped, empty input
//! yields an empty container, and nothing panics or errors. Abort
//! decisions belong to the command runner, not to parsing.

mod arp;
mod interface;
mod loopback;
mod mac;
mod switch_info;

pub use arp::{ArpRow, parse_arp_table};
pub use interface::{InterfaceStatusRow, parse_interface_status};
pub use loopback::{LoopbackMap, parse_loopbacks};
pub use mac::{MacTableRow, parse_mac_table};
pub use switch_info::{SwitchInfo, count_interfaces, parse_model_numbers, parse_switch_name};
