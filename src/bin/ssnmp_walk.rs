//! ssnmp-walk: Walk an SNMP subtree with snmpwalk.
//!
//! Part of the snmp-shell CLI utilities.

use clap::Parser;
use snmp_shell::cli::args::{CommonArgs, OutputArgs};
use snmp_shell::cli::output::{EXIT_ERROR, write_error, write_plan, write_results};
use std::process::ExitCode;

/// Walk an SNMP subtree with snmpwalk.
#[derive(Debug, Parser)]
#[command(name = "ssnmp-walk", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Root of the subtree to walk.
    #[arg(value_name = "OID", default_value = ".1.3.6.1.2.1")]
    oid: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let session = match args.common.session_builder().build() {
        Ok(session) => session,
        Err(e) => {
            write_error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if args.output.dry_run {
        let plan = [session.plan_walk(&args.oid)];
        if let Err(e) = write_plan(&mut std::io::stdout().lock(), &plan) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    match session.walk(&args.oid) {
        Ok(map) => {
            if let Err(e) = write_results(&mut std::io::stdout().lock(), args.output.format, &map) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
            tracing::debug!(target: "snmp_shell::cli", { results = map.len() }, "walk complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            write_error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
