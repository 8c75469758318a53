//! Canned net-snmp output, as printed with `-O 0efnqt`.

/// Agent host used throughout the tests (TEST-NET-1).
pub const HOST: &str = "192.0.2.10";

pub const SYS_DESCR: &str = ".1.3.6.1.2.1.1.1.0";
pub const SYS_UPTIME: &str = ".1.3.6.1.2.1.1.3.0";
pub const SYS_NAME: &str = ".1.3.6.1.2.1.1.5.0";

/// snmpwalk output for the system group, including a two-line sysDescr.
pub fn system_walk_output() -> Vec<&'static str> {
    vec![
        ".1.3.6.1.2.1.1.1.0 \"Linux core-sw1 5.15.0",
        "#1 SMP x86_64\"",
        ".1.3.6.1.2.1.1.2.0 .1.3.6.1.4.1.8072.3.2.10",
        ".1.3.6.1.2.1.1.3.0 5040854",
        ".1.3.6.1.2.1.1.4.0 \"noc@example.net\"",
        ".1.3.6.1.2.1.1.5.0 \"core-sw1\"",
        ".1.3.6.1.2.1.1.6.0 \"Rack 4\"",
        ".1.3.6.1.2.1.1.7.0 72",
    ]
}

/// `count` OIDs under a private enterprise arc starting at `start`.
pub fn numbered_oids(start: usize, count: usize) -> Vec<String> {
    (start..start + count)
        .map(|i| format!(".1.3.6.1.4.1.99999.1.{}", i))
        .collect()
}

/// Output lines answering every OID in `oids` with its index times ten.
pub fn numbered_output(oids: &[String]) -> Vec<String> {
    oids.iter()
        .map(|oid| {
            let idx: usize = oid.rsplit('.').next().and_then(|s| s.parse().ok()).unwrap();
            format!("{} {}", oid, idx * 10)
        })
        .collect()
}
