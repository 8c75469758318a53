//! End-to-end tests of ShellRunner against stand-in tool scripts.
//!
//! Each test writes small `sh` scripts named like the net-snmp tools into a
//! temporary directory and points the session at it with `tool_dir`, so
//! the real quoting and process handling are exercised without net-snmp.

#![cfg(unix)]

use snmp_shell::{Error, Session, Tool};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Prints each argument as `.1.3.6.1.9.<position> <argument>`.
const ECHO_ARGS: &str = r#"#!/bin/sh
i=0
for a in "$@"; do
  i=$((i+1))
  printf '.1.3.6.1.9.%d %s\n' "$i" "$a"
done
"#;

fn install(dir: &Path, tool: Tool, script: &str) {
    let path = dir.join(tool.binary());
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
}

fn arg(map: &snmp_shell::VarMap, position: usize) -> Option<&str> {
    map.get_str(&format!(".1.3.6.1.9.{}", position))
}

#[test]
fn arguments_reach_tool_intact() {
    let dir = tempfile::tempdir().unwrap();
    install(dir.path(), Tool::Get, ECHO_ARGS);

    let session = Session::builder("192.0.2.10")
        .community("pub lic")
        .version_str("2c")
        .timeout_secs(7)
        .tool_dir(dir.path())
        .build()
        .unwrap();
    let map = session.get([".1.3.6.1.2.1.1.3.0", ".1.3.6.1.2.1.1.5.0"]).unwrap();

    assert_eq!(arg(&map, 1), Some("192.0.2.10"));
    assert_eq!(arg(&map, 2), Some("-c"));
    assert_eq!(arg(&map, 3), Some("pub lic"));
    assert_eq!(arg(&map, 4), Some("-v"));
    assert_eq!(arg(&map, 5), Some("2c"));
    assert_eq!(arg(&map, 7), Some("7"));
    assert_eq!(arg(&map, 9), Some("0efnqt"));
    assert_eq!(arg(&map, 10), Some(".1.3.6.1.2.1.1.3.0"));
    assert_eq!(arg(&map, 11), Some(".1.3.6.1.2.1.1.5.0"));
    assert_eq!(map.len(), 11);
}

#[test]
fn metacharacters_are_not_interpreted() {
    let dir = tempfile::tempdir().unwrap();
    install(dir.path(), Tool::Walk, ECHO_ARGS);
    let marker = dir.path().join("pwned");
    let payload = format!("x'; touch {}; echo '", marker.display());

    let session = Session::builder(format!("host$(touch {})", marker.display()))
        .community(payload.clone())
        .tool_dir(dir.path())
        .build()
        .unwrap();
    let map = session.walk(&format!(".1.3`touch {}`", marker.display())).unwrap();

    assert!(!marker.exists());
    assert_eq!(arg(&map, 1), Some(format!("host$(touch {})", marker.display()).as_str()));
    assert_eq!(arg(&map, 3), Some(payload.as_str()));
    assert_eq!(arg(&map, 10), Some("-Cc"));
}

#[test]
fn stderr_is_merged_in_order() {
    let dir = tempfile::tempdir().unwrap();
    install(
        dir.path(),
        Tool::Get,
        "#!/bin/sh\necho 'Error in packet' >&2\necho '.1.3.6.1.2.1.1.3.0 5040854'\necho 'trailing note' >&2\nexit 2\n",
    );

    let session = Session::builder("192.0.2.10")
        .tool_dir(dir.path())
        .build()
        .unwrap();
    let map = session.get(".1.3.6.1.2.1.1.3.0").unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map.get_str(".1.3.6.1.2.1.1.3.0"), Some("5040854\ntrailing note"));
}

#[test]
fn timeout_exit_is_soft() {
    let dir = tempfile::tempdir().unwrap();
    install(
        dir.path(),
        Tool::Get,
        "#!/bin/sh\necho \"Timeout: No Response from $1.\" >&2\nexit 1\n",
    );

    let session = Session::builder("192.0.2.10")
        .tool_dir(dir.path())
        .build()
        .unwrap();
    let map = session.get(".1.3.6.1.2.1.1.3.0").unwrap();

    assert!(map.is_empty());
}

#[test]
fn missing_tool_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let session = Session::builder("192.0.2.10")
        .tool_dir(dir.path().join("absent"))
        .build()
        .unwrap();
    let err = session.walk(".1.3.6.1.2.1.1").unwrap_err();

    match *err {
        Error::ToolNotFound { tool, ref message } => {
            assert_eq!(tool, Tool::Walk);
            assert!(message.contains("snmpwalk"), "message: {message}");
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn set_entries_are_shell_text() {
    let dir = tempfile::tempdir().unwrap();
    install(dir.path(), Tool::Set, ECHO_ARGS);

    let session = Session::builder("192.0.2.10")
        .tool_dir(dir.path())
        .build()
        .unwrap();
    let map = session.set(".1.3.6.1.2.1.1.5.0 s 'core sw2'").unwrap();

    assert_eq!(arg(&map, 9), Some("192.0.2.10"));
    assert_eq!(arg(&map, 10), Some(".1.3.6.1.2.1.1.5.0"));
    assert_eq!(arg(&map, 11), Some("s"));
    assert_eq!(arg(&map, 12), Some("core sw2"));
}
