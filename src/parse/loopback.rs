//! Loopback interface parsing from `show ip interface brief` output.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Interface name to IP address, in first-seen order.
pub type LoopbackMap = IndexMap<String, String>;

/// A reporting line: interface name, whitespace, dotted-decimal address.
static LOOPBACK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+([\d.]+)").unwrap());

/// Parse loopback interfaces into a name → address map.
///
/// ```text
/// Interface              IP-Address      OK? Method Status                Protocol
/// Loopback0              192.168.1.1     YES unset  up                    up
/// Loopback1              10.1.1.1        YES unset  up                    up
/// ```
///
/// becomes `{"Loopback0": "192.168.1.1", "Loopback1": "10.1.1.1"}`.
/// Lines whose second column is not dotted-decimal (the header
/// included) are ignored. A repeated interface name keeps its original
/// position and takes the later address.
pub fn parse_loopbacks(output: &str) -> LoopbackMap {
    let mut map = LoopbackMap::new();

    for line in output.trim().lines() {
        if let Some(caps) = LOOPBACK_LINE.captures(line) {
            map.insert(caps[1].to_string(), caps[2].to_string());
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_name_to_address_pairs() {
        let output = "Loopback0              192.168.1.1     YES unset  up                    up\n\
                      Loopback1              10.1.1.1        YES unset  up                    up";
        let map = parse_loopbacks(output);

        assert_eq!(map.len(), 2);
        assert_eq!(map["Loopback0"], "192.168.1.1");
        assert_eq!(map["Loopback1"], "10.1.1.1");
    }

    #[test]
    fn test_preserves_first_seen_order() {
        let output = "Loopback9  10.0.0.9  YES unset up up\n\
                      Loopback1  10.0.0.1  YES unset up up\n\
                      Loopback5  10.0.0.5  YES unset up up";
        let map = parse_loopbacks(output);

        let names: Vec<&String> = map.keys().collect();
        assert_eq!(names, ["Loopback9", "Loopback1", "Loopback5"]);
    }

    #[test]
    fn test_ignores_header_and_junk_lines() {
        let output = "Interface              IP-Address      OK? Method Status Protocol\n\
                      Loopback0              192.168.1.1     YES unset  up up\n\
                      \n\
                      % incomplete output";
        let map = parse_loopbacks(output);

        assert_eq!(map.len(), 1);
        assert_eq!(map["Loopback0"], "192.168.1.1");
    }

    #[test]
    fn test_duplicate_name_updates_value_in_place() {
        let output = "Loopback0  10.0.0.1  YES\n\
                      Loopback1  10.0.0.2  YES\n\
                      Loopback0  10.0.0.3  YES";
        let map = parse_loopbacks(output);

        assert_eq!(map.len(), 2);
        assert_eq!(map["Loopback0"], "10.0.0.3");
        assert_eq!(map.get_index(0).unwrap().0, "Loopback0");
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(parse_loopbacks("").is_empty());
        assert!(parse_loopbacks("   \n  ").is_empty());
    }
}
