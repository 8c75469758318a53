//! Shared pieces of the `ssnmp-*` command-line tools.

pub mod args;
pub mod output;
