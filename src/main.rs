use clap::{value_parser, Arg, ArgMatches, Command};
use colored::*;
use sysmon::commands::monitor::ReportedFault;

fn build_cli() -> Command {
    Command::new("sysmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Samples CPU, RAM and GPU usage into a size-capped rotating log")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECONDS")
                .help("Seconds between two samples")
                .default_value("5")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("log-file")
                .short('l')
                .long("log-file")
                .value_name("PATH")
                .help("Destination of the rotating log")
                .default_value("system_monitor.log")
                .value_parser(value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("max-bytes")
                .long("max-bytes")
                .value_name("BYTES")
                .help("Rotate the log once it would grow past this size (0 disables rotation)")
                .default_value("5242880")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("backups")
                .long("backups")
                .value_name("COUNT")
                .help("Number of rotated log files to keep")
                .default_value("3")
                .value_parser(value_parser!(usize)),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    if matches.get_flag("version") {
        println!("sysmon {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    sysmon::commands::monitor(matches)
}

/// Whether the console already shows this error
fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ReportedFault>().is_some()
}

fn main() {
    sysmon::init_logging();

    let matches = build_cli().get_matches();

    if let Err(e) = run(&matches) {
        if !already_reported(&e) {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
        std::process::exit(1);
    }
}
