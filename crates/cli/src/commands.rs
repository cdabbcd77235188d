//! clap command tree.
//!
//! One subcommand per collector operation. Field flags on `record` are all
//! optional here so that a missing identity field is reported by the
//! collector's own validation.

use clap::{Arg, ArgAction, Command};

/// Build the top-level `spanlog` command.
pub fn build_cli() -> Command {
    Command::new("spanlog")
        .about("Embedded telemetry collector")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("DIR")
                .global(true)
                .help("Data directory (default: .spanlog, or data_dir from --config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .global(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Keep nothing on disk"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("More log output on stderr (-v debug, -vv trace)"),
        )
        .subcommand(record_command())
        .subcommand(
            Command::new("record-batch")
                .about("Record a JSON array of events, all or nothing")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_name("FILE")
                        .help("JSON file, or - for stdin"),
                ),
        )
        .subcommand(
            Command::new("trace")
                .about("All events of a trace")
                .arg(Arg::new("trace-id").required(true)),
        )
        .subcommand(
            Command::new("timeline")
                .about("Timeline of a trace")
                .arg(Arg::new("trace-id").required(true)),
        )
        .subcommand(
            Command::new("traces")
                .about("Page of trace summaries")
                .arg(Arg::new("page").long("page").value_name("N"))
                .arg(Arg::new("size").long("size").value_name("N"))
                .arg(Arg::new("service").long("service"))
                .arg(Arg::new("operation").long("operation"))
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("SUCCESS, ERROR or TIMEOUT"),
                ),
        )
        .subcommand(Command::new("services").about("Distinct service names"))
        .subcommand(
            Command::new("operations")
                .about("Distinct operations of a service")
                .arg(Arg::new("service").required(true)),
        )
        .subcommand(
            Command::new("metrics")
                .about("Metrics for a service")
                .arg(Arg::new("service").required(true)),
        )
        .subcommand(Command::new("health").about("Event counts and services"))
        .subcommand(
            Command::new("cleanup")
                .about("Delete events older than a number of days")
                .arg(
                    Arg::new("older-than-days")
                        .long("older-than-days")
                        .value_name("DAYS")
                        .allow_negative_numbers(true),
                ),
        )
        .subcommand(
            Command::new("find-status")
                .about("Events with a status")
                .arg(Arg::new("status").required(true)),
        )
        .subcommand(
            Command::new("find-operation")
                .about("Events of one operation on one service")
                .arg(Arg::new("service").required(true))
                .arg(Arg::new("operation").required(true)),
        )
        .subcommand(
            Command::new("find-between")
                .about("Events in an inclusive time range (RFC 3339)")
                .arg(Arg::new("start").required(true))
                .arg(Arg::new("end").required(true)),
        )
}

fn record_command() -> Command {
    let text = |name: &'static str, help: &'static str| {
        Arg::new(name).long(name).value_name("VALUE").help(help)
    };
    Command::new("record")
        .about("Record one event")
        .arg(text("trace-id", "Trace identifier"))
        .arg(text("span-id", "Span identifier"))
        .arg(text("parent-span-id", "Parent span identifier"))
        .arg(text("service", "Emitting service"))
        .arg(text("operation", "Operation name"))
        .arg(text("type", "SPAN, LOG or METRIC (default SPAN)"))
        .arg(text("status", "SUCCESS, ERROR or TIMEOUT (default SUCCESS)"))
        .arg(text("duration-ms", "Duration in milliseconds"))
        .arg(text("timestamp", "RFC 3339 time (default now)"))
        .arg(text("metadata", "Opaque metadata string"))
        .arg(text("http-method", "HTTP method"))
        .arg(text("http-url", "HTTP URL"))
        .arg(text("http-status", "HTTP status code"))
        .arg(text("error-message", "Error message"))
        .arg(text("user-id", "User identifier"))
        .arg(text("correlation-id", "Correlation identifier"))
}
