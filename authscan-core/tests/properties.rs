//! Property tests for the analysis pipeline.
//!
//! Invariants:
//! - Counts sum to the number of matched lines
//! - Classification is pure and monotonic in the threshold
//! - Every suspicious entry is in the frequency map with the same count
//! - CSV export parses back to the same pairs

use std::collections::HashMap;
use std::io::Cursor;

use authscan_core::{aggregate, classify, parse_csv, render_csv, render_txt, Address, FailureScanner};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

/// Addresses drawn from a small pool so duplicates are common.
fn address() -> impl Strategy<Value = String> {
    (0u8..6, 0u16..1000).prop_map(|(host, wide)| {
        if host == 5 {
            format!("{wide}.{wide}.{wide}.{wide}")
        } else {
            format!("10.0.0.{host}")
        }
    })
}

/// A log line: either a failure from an address or unrelated noise.
fn log_line() -> impl Strategy<Value = (Option<String>, String)> {
    prop_oneof![
        address().prop_map(|ip| {
            let line = format!("Jan  1 00:00:00 host sshd[1]: Failed password for root from {ip} port 22 ssh2");
            (Some(ip), line)
        }),
        "[a-z ]{0,40}".prop_map(|noise| (None, format!("Jan  1 00:00:00 host cron[2]: {noise}"))),
    ]
}

fn to_log(lines: &[(Option<String>, String)]) -> String {
    lines.iter().map(|(_, l)| format!("{l}\n")).collect()
}

// =============================================================================
// Aggregation Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_total_equals_matched_lines(lines in vec(log_line(), 0..60)) {
        let expected: Vec<String> = lines.iter().filter_map(|(ip, _)| ip.clone()).collect();
        let log = to_log(&lines);

        let mut scanner = FailureScanner::new(Cursor::new(log.into_bytes()));
        let map = aggregate(scanner.by_ref());

        prop_assert_eq!(map.total(), expected.len() as u64);
        prop_assert_eq!(scanner.stats().lines_matched, expected.len() as u64);
        prop_assert_eq!(scanner.stats().lines_read, lines.len() as u64);

        let mut reference: HashMap<&str, u64> = HashMap::new();
        for ip in &expected {
            *reference.entry(ip.as_str()).or_default() += 1;
        }
        prop_assert_eq!(map.len(), reference.len());
        for (addr, count) in map.iter() {
            prop_assert_eq!(reference.get(addr.as_str()).copied(), Some(count));
        }
    }

    #[test]
    fn prop_noise_only_is_empty(noise in vec("[a-z ]{0,40}", 0..30), threshold in -5i64..10) {
        let log: String = noise.iter().map(|n| format!("{n}\n")).collect();
        let map = aggregate(FailureScanner::new(Cursor::new(log.into_bytes())));
        prop_assert!(map.is_empty());
        prop_assert!(classify(&map, threshold).is_empty());
    }

    // =========================================================================
    // Classification Properties
    // =========================================================================

    #[test]
    fn prop_classify_idempotent(ips in vec(address(), 0..80), threshold in -3i64..10) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        prop_assert_eq!(classify(&map, threshold), classify(&map, threshold));
    }

    #[test]
    fn prop_classify_subset_with_equal_counts(ips in vec(address(), 0..80), threshold in -3i64..10) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        let set = classify(&map, threshold);
        for (addr, count) in set.iter() {
            prop_assert_eq!(map.get(addr.as_str()), Some(count));
            prop_assert!(threshold <= 0 || count >= threshold as u64);
        }
    }

    #[test]
    fn prop_classify_monotonic(ips in vec(address(), 0..80), t1 in -3i64..10, delta in 0i64..10) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        let loose = classify(&map, t1);
        let strict = classify(&map, t1 + delta);
        for (addr, _) in strict.iter() {
            prop_assert!(loose.contains(addr.as_str()));
        }
    }

    #[test]
    fn prop_zero_threshold_is_whole_map(ips in vec(address(), 1..80)) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        let set = classify(&map, 0);
        let whole: Vec<_> = map.iter().collect();
        let selected: Vec<_> = set.iter().collect();
        prop_assert_eq!(whole, selected);
    }

    // =========================================================================
    // Export Properties
    // =========================================================================

    #[test]
    fn prop_csv_round_trip(ips in vec(address(), 0..80), threshold in -3i64..10) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        let set = classify(&map, threshold);

        let mut parsed = parse_csv(&render_csv(&set)).expect("parse own output");
        let mut expected: Vec<_> = set.iter().map(|(a, c)| (a.clone(), c)).collect();
        parsed.sort();
        expected.sort();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_txt_one_line_per_entry(ips in vec(address(), 0..80), threshold in -3i64..10) {
        let map = aggregate(ips.iter().map(|ip| Address::new(ip.as_str())));
        let set = classify(&map, threshold);
        let txt = render_txt(&set);
        prop_assert_eq!(txt.lines().count(), set.len());
        prop_assert!(txt.is_empty() || txt.ends_with('\n'));
    }
}
