//! Shared test infrastructure for snmp-shell.
//!
//! Provides canned tool output and helpers for building mock sessions.

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::{
    HOST, SYS_DESCR, SYS_NAME, SYS_UPTIME, numbered_oids, numbered_output, system_walk_output,
};

use snmp_shell::runner::MockRunner;
use snmp_shell::{ChunkMode, Session, SessionBuilder};

/// Builder pointed at the documentation test host.
pub fn builder() -> SessionBuilder {
    Session::builder(HOST).community("public")
}

/// Session over a fresh mock runner, returning both.
pub fn mock_session() -> (Session<MockRunner>, MockRunner) {
    let mock = MockRunner::new();
    let session = builder().build_with_runner(mock.clone()).unwrap();
    (session, mock)
}

/// Session with a GET batch limit and chunk mode.
pub fn mock_session_chunked(
    max_oids: usize,
    mode: ChunkMode,
) -> (Session<MockRunner>, MockRunner) {
    let mock = MockRunner::new();
    let session = builder()
        .get_max_oids(max_oids)
        .set_max_oids(max_oids)
        .chunk_mode(mode)
        .build_with_runner(mock.clone())
        .unwrap();
    (session, mock)
}
