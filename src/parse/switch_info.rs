//! Switch identity and version metadata.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::loopback::LoopbackMap;

static MODEL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Model number\s+: (.+)").unwrap());

/// Identity and version metadata for one switch, assembled from five
/// independent command outputs. Serialized as the `switch_data.json`
/// report.
#[derive(Debug, Clone, Serialize)]
pub struct SwitchInfo {
    /// Hostname configured on the device, or "N/A".
    pub switch_name: String,

    /// Loopback interface name → IP address.
    pub loopback_ip: LoopbackMap,

    /// Full `show version` output, verbatim.
    pub version: String,

    /// Every model number listed by `show version` (stacks report more
    /// than one).
    pub model: Vec<String>,

    /// Line count of the interface brief minus its header.
    pub interface_count: usize,
}

/// Extract the hostname from a `hostname <name>` configuration line.
/// Anything without a second token (including empty output) reports
/// "N/A".
pub fn parse_switch_name(output: &str) -> String {
    output
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Collect every `Model number : <value>` occurrence.
pub fn parse_model_numbers(output: &str) -> Vec<String> {
    MODEL_NUMBER
        .captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Count interfaces in a `show ip interface brief` listing: one per
/// non-empty line, minus the header.
pub fn count_interfaces(output: &str) -> usize {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_name_is_second_token() {
        assert_eq!(parse_switch_name("hostname SW1-CORE"), "SW1-CORE");
        assert_eq!(parse_switch_name("hostname SW1-CORE extra"), "SW1-CORE");
    }

    #[test]
    fn test_switch_name_falls_back_to_na() {
        assert_eq!(parse_switch_name(""), "N/A");
        assert_eq!(parse_switch_name("   \n"), "N/A");
        // a lone token has no name field either
        assert_eq!(parse_switch_name("hostname"), "N/A");
    }

    #[test]
    fn test_model_numbers_collects_every_match() {
        let output = "\
Model number                    : WS-C2960X-48TS-L
System serial number            : FOC1234X0AB
Model number                    : WS-C2960X-24TS-L";
        assert_eq!(
            parse_model_numbers(output),
            ["WS-C2960X-48TS-L", "WS-C2960X-24TS-L"]
        );
    }

    #[test]
    fn test_model_numbers_empty_when_absent() {
        assert!(parse_model_numbers("").is_empty());
        assert!(parse_model_numbers("System image file is flash:...").is_empty());
    }

    #[test]
    fn test_interface_count_skips_header_and_blanks() {
        let output = "\
Interface              IP-Address      OK? Method Status                Protocol
Vlan1                  10.0.0.2        YES NVRAM  up                    up
FastEthernet0/1        unassigned      YES unset  up                    up

FastEthernet0/2        unassigned      YES unset  down                  down";
        assert_eq!(count_interfaces(output), 3);
    }

    #[test]
    fn test_interface_count_floors_at_zero() {
        assert_eq!(count_interfaces(""), 0);
        assert_eq!(count_interfaces("Interface  IP-Address"), 0);
    }
}
