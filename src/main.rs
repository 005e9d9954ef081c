//! tickly-env - Main Entry Point
//!
//! Resolves an environment configuration from presets, files, environment
//! variables and command line flags, validates it, and prints or writes it.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use tickly_environment::{
    config::{
        parse_feature_assignment, CliArgs, ConfigError, Environment, EnvironmentConfig, Feature,
    },
    logging::init_tracing,
    NAME, VERSION,
};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
}

fn on_off(value: bool, on: &str, off: &str) -> String {
    if value {
        format!("{}{}{}", colors::GREEN, on, colors::RESET)
    } else {
        format!("{}{}{}", colors::YELLOW, off, colors::RESET)
    }
}

fn print_row(label: &str, value: impl std::fmt::Display) {
    println!(
        "  {dim}{:<18}{reset}{}",
        format!("{}:", label),
        value,
        dim = colors::DIM,
        reset = colors::RESET
    );
}

/// Print configuration summary
fn print_config_summary(config: &EnvironmentConfig) {
    println!(
        "{bold}{blue}Environment:{reset}",
        bold = colors::BOLD,
        blue = colors::BLUE,
        reset = colors::RESET
    );
    print_row("Production", on_off(config.production(), "yes", "no"));
    print_row("Version", config.version());
    print_row(
        "API URL",
        if config.api_url().is_empty() {
            "(relative to host)"
        } else {
            config.api_url()
        },
    );
    print_row("Debug Logs", on_off(config.enable_debug_logs(), "enabled", "disabled"));
    print_row(
        "Mocks",
        if config.use_mocks() {
            on_off(true, &format!("enabled ({}ms delay)", config.mock_delay_ms()), "")
        } else {
            on_off(false, "", "disabled")
        },
    );

    for feature in Feature::ALL {
        print_row(
            feature.short_name(),
            on_off(config.features().is_enabled(feature), "on", "off"),
        );
    }

    let sentry = config.sentry();
    print_row(
        "Sentry",
        if sentry.is_reporting_active() {
            on_off(true, sentry.dsn(), "")
        } else {
            on_off(false, "", "disabled")
        },
    );
    println!();
}

/// Build the CLI command parser
fn build_cli() -> Command {
    Command::new(NAME)
        .version(VERSION)
        .author("Tickly Team")
        .about("Resolve and validate Tickly environment configuration")
        .long_about(
            "tickly-env resolves the environment configuration of the Tickly web\n\
             application from a preset or file, TICKLY_* environment variables and\n\
             command line flags, validates it, and prints or writes the result.",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to configuration file (TOML or JSON)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("env")
                .short('e')
                .long("env")
                .value_name("ENV")
                .help("Preset to start from (default: development, or TICKLY_ENV)")
                .value_parser(["dev", "development", "prod", "production"]),
        )
        .arg(
            Arg::new("production")
                .long("production")
                .help("Mark the build as a production build")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-production")
                .long("no-production")
                .help("Mark the build as a non-production build")
                .action(ArgAction::SetTrue)
                .conflicts_with("production"),
        )
        .arg(
            Arg::new("app-version")
                .long("app-version")
                .value_name("SEMVER")
                .help("Application version"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("REST API base URL (empty for relative requests)"),
        )
        .arg(
            Arg::new("debug-logs")
                .long("debug-logs")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-debug-logs")
                .long("no-debug-logs")
                .help("Disable debug logging")
                .action(ArgAction::SetTrue)
                .conflicts_with("debug-logs"),
        )
        .arg(
            Arg::new("mocks")
                .long("mocks")
                .help("Serve simulated API responses")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-mocks")
                .long("no-mocks")
                .help("Use the real API")
                .action(ArgAction::SetTrue)
                .conflicts_with("mocks"),
        )
        .arg(
            Arg::new("mock-delay")
                .long("mock-delay")
                .value_name("MS")
                .help("Artificial latency of mocked responses in milliseconds")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("feature")
                .short('f')
                .long("feature")
                .value_name("NAME=BOOL")
                .help("Override a feature flag, e.g. seating-map=true (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("sentry")
                .long("sentry")
                .help("Enable error reporting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-sentry")
                .long("no-sentry")
                .help("Disable error reporting")
                .action(ArgAction::SetTrue)
                .conflicts_with("sentry"),
        )
        .arg(
            Arg::new("sentry-dsn")
                .long("sentry-dsn")
                .value_name("DSN")
                .help("Error reporting DSN"),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .value_name("FORMAT")
                .help("Print the resolved configuration to stdout")
                .value_parser(["toml", "json"]),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the resolved configuration to a file (.toml or .json)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress output except errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

/// Reads a `--flag` / `--no-flag` pair
fn flag_pair(matches: &clap::ArgMatches, on: &str, off: &str) -> Option<bool> {
    if matches.get_flag(on) {
        Some(true)
    } else if matches.get_flag(off) {
        Some(false)
    } else {
        None
    }
}

/// Parse CLI arguments into CliArgs struct
fn parse_cli_args(matches: &clap::ArgMatches) -> Result<CliArgs, ConfigError> {
    let features = matches
        .get_many::<String>("feature")
        .into_iter()
        .flatten()
        .map(|raw| parse_feature_assignment(raw.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let environment = matches
        .get_one::<String>("env")
        .map(|env| env.parse::<Environment>())
        .transpose()?;

    Ok(CliArgs {
        config_file: matches.get_one::<PathBuf>("config").cloned(),
        environment,
        production: flag_pair(matches, "production", "no-production"),
        version: matches.get_one::<String>("app-version").cloned(),
        api_url: matches.get_one::<String>("api-url").cloned(),
        enable_debug_logs: flag_pair(matches, "debug-logs", "no-debug-logs"),
        use_mocks: flag_pair(matches, "mocks", "no-mocks"),
        mock_delay: matches.get_one::<i64>("mock-delay").copied(),
        features,
        sentry_enabled: flag_pair(matches, "sentry", "no-sentry"),
        sentry_dsn: matches.get_one::<String>("sentry-dsn").cloned(),
    })
}

/// Render the configuration for `--dump` and write it for `--output`.
///
/// Returns the rendered dump, if one was requested.
fn export(
    config: &EnvironmentConfig,
    dump: Option<&str>,
    output: Option<&Path>,
) -> Result<Option<String>> {
    let rendered = match dump {
        Some("json") => Some(config.to_json_string()?),
        Some(_) => Some(config.to_toml_string()?),
        None => None,
    };

    if let Some(path) = output {
        config
            .to_file(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Configuration written to {}", path.display());
    }

    Ok(rendered.map(|r| r.trim_end().to_string()))
}

/// Main application entry point
fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let verbosity = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");

    let cli_args = parse_cli_args(&matches).context("Invalid command line arguments")?;

    // Load configuration with full precedence chain
    let config = cli_args
        .load_settings()
        .context("Failed to load configuration")?;

    init_tracing(&config, verbosity, quiet).context("Failed to initialize logging")?;
    debug!(?config, "Configuration resolved");

    let dump = matches.get_one::<String>("dump");

    if !quiet && dump.is_none() {
        print_config_summary(&config);
    }

    let output = matches.get_one::<PathBuf>("output").map(PathBuf::as_path);
    if let Some(rendered) = export(&config, dump.map(String::as_str), output)? {
        println!("{}", rendered);
    }

    Ok(())
}
