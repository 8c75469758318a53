//! ssnmp-get: Retrieve one or more SNMP values with snmpget.
//!
//! Part of the snmp-shell CLI utilities.

use clap::Parser;
use snmp_shell::cli::args::{CommonArgs, OutputArgs};
use snmp_shell::cli::output::{EXIT_ERROR, report_missing, write_error, write_plan, write_results};
use std::process::ExitCode;

/// Retrieve one or more SNMP values with snmpget.
#[derive(Debug, Parser)]
#[command(name = "ssnmp-get", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Numeric OIDs to request (e.g. .1.3.6.1.2.1.1.3.0).
    #[arg(required = true, value_name = "OID")]
    oids: Vec<String>,
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
        let plan = session.plan_get(args.oids.as_slice());
        if let Err(e) = write_plan(&mut std::io::stdout().lock(), &plan) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    match session.get(args.oids.as_slice()) {
        Ok(map) => {
            if let Err(e) = write_results(&mut std::io::stdout().lock(), args.output.format, &map) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::from(report_missing(&map, &args.oids))
        }
        Err(e) => {
            write_error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
