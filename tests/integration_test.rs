//! Integration tests for cidr-range
//!
//! These tests drive the public API the way the binary does: load config,
//! read addresses, compute and group ranges.

use cidr_range::config::Config;
use cidr_range::output::{compute_rows, render_json};
use cidr_range::processing::group_by_range;
use cidr_range::{
    from_ip, from_ip_lossy, from_ipv4, from_ipv6, read_address_file, AddressFamily,
    PrefixOverrides, Prefixes, RangeError,
};

#[test]
fn test_documented_scenarios() {
    let r = from_ipv4("192.168.1.130", 20).unwrap();
    assert_eq!(
        (r.first.to_string(), r.last.to_string()),
        ("192.168.0.0".to_string(), "192.168.15.255".to_string())
    );

    let r = from_ipv4("10.0.0.5", 32).unwrap();
    assert_eq!(r.first, r.last);
    assert_eq!(r.first.to_string(), "10.0.0.5");

    let r = from_ipv6("2001:db8:85a3::8a2e:370:7334", 48).unwrap();
    assert_eq!(r.first.to_string(), "2001:db8:85a3::");
    assert_eq!(r.last.to_string(), "2001:db8:85a3:ffff:ffff:ffff:ffff:ffff");

    assert!(matches!(
        from_ip("not-an-ip", &PrefixOverrides::default()),
        Err(RangeError::InvalidAddress { .. })
    ));

    let r = from_ip("10.1.2.3", &PrefixOverrides::ipv4(24)).unwrap();
    assert_eq!(r.size(), 256);
    assert!(r.contains("10.1.2.3".parse().unwrap()));
}

#[test]
fn test_whole_address_space() {
    let r = from_ipv4("8.8.8.8", 0).unwrap();
    assert_eq!(r.to_string(), "0.0.0.0 - 255.255.255.255");

    let r = from_ipv6("fe80::1", 0).unwrap();
    assert_eq!(r.first.to_string(), "::");
    assert_eq!(r.last.to_string(), "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
    assert_eq!(r.family(), AddressFamily::V6);
}

#[test]
fn test_lossy_call_never_panics() {
    for ip in ["", ".", ":", "1.2.3.4.5", "::g", "999.0.0.1", "2001:db8::1"] {
        let _ = from_ip_lossy(ip, &PrefixOverrides::default());
    }
    assert!(from_ip_lossy("2001:db8::1", &PrefixOverrides::default()).is_some());
}

#[test]
fn test_config_file_drives_prefixes() {
    let config = Config::from_file("src/tests/test_data/config_ipv4_24.json")
        .expect("Failed to read config");
    let rows = compute_rows(["192.168.1.130"], &config.prefixes);
    assert_eq!(rows[0].prefix, 24);
    assert_eq!(
        rows[0].result.as_ref().unwrap().to_string(),
        "192.168.1.0 - 192.168.1.255"
    );

    let err = Config::from_file("src/tests/test_data/config_bad_prefix.json").unwrap_err();
    assert!(err.to_string().contains("/130"));
}

#[test]
fn test_address_file_workflow() {
    let addresses = read_address_file("src/tests/test_data/addresses_01.txt")
        .expect("Failed to read addresses");
    assert_eq!(addresses.len(), 7);

    let groups = group_by_range(&addresses, &Prefixes::default());
    assert_eq!(groups.unresolved, vec!["not-an-ip"]);
    // 192.168.1.130 appears twice in the file
    let busiest = groups.busiest(1);
    assert_eq!(busiest[0].range.to_string(), "192.168.0.0 - 192.168.15.255");
    assert_eq!(busiest[0].members, vec!["192.168.1.130", "192.168.4.7"]);

    let v6 = groups
        .group_of("2001:db8:85a3:42::1")
        .expect("IPv6 address should be grouped");
    assert_eq!(v6.members.len(), 2);

    let rows = compute_rows(&addresses, &Prefixes::default());
    let json: serde_json::Value = serde_json::from_str(&render_json(&rows).unwrap()).unwrap();
    assert_eq!(json["10.0.0.5"], serde_json::json!(["10.0.0.0", "10.0.15.255"]));
    assert_eq!(json["not-an-ip"], serde_json::json!([]));
}
