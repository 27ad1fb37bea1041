//! Wayfarer CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use wayfarer_foundation::Error;
use wayfarer_runtime::console::format_error;
use wayfarer_runtime::session::load_world;
use wayfarer_runtime::{Console, ConsoleConfig, Session};
use wayfarer_storage::World;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    world: Option<PathBuf>,
    scripts: Vec<PathBuf>,
    config: Option<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    trace_match: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace-match" => config.trace_match = true,
            "-c" | "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                config.config = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path if config.world.is_none() => config.world = Some(PathBuf::from(path)),
            path => config.scripts.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wayfarer {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load(path).map_err(report)?,
        None => ConsoleConfig::default(),
    };
    init_tracing(&config, cli.trace_match)?;

    let world = match &cli.world {
        Some(path) => load_world(path).map_err(report)?,
        None => World::new(),
    };
    tracing::info!(objects = world.object_count(), "world ready");

    let mut console = Console::new()
        .map_err(report)?
        .with_session(Session::new(world))
        .with_config(&config)
        .map_err(report)?;

    let stdout = io::stdout();
    for script in &cli.scripts {
        console
            .run_script(script, &mut stdout.lock())
            .map_err(report)?;
    }

    if cli.batch_mode {
        return Ok(());
    }

    if cli.world.is_some() {
        let session = console.session();
        println!(
            "{} objects loaded, acting as {}. Type help for commands.",
            session.world().object_count(),
            session.actor()
        );
    }
    console.run().map_err(report)?;
    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &ConsoleConfig, trace_match: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if trace_match {
        filter = filter.add_directive("wayfarer_parser=trace".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn report(err: Error) -> Box<dyn std::error::Error> {
    format_error(&err).into()
}

fn print_help() {
    println!(
        "\x1b[1mWayfarer\x1b[0m - Fuzzy object-name matching console

\x1b[1mUSAGE:\x1b[0m
    wayfarer [OPTIONS] [WORLD] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORLD]         World file (.toml) or snapshot to load
    [SCRIPTS...]    Command scripts to run before the console starts

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Run scripts and exit (no console)
    -c, --config PATH    Console configuration file (TOML)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace-match        Log every score computed while matching

\x1b[1mEXAMPLES:\x1b[0m
    wayfarer armory.toml                 Load a world, then start the console
    wayfarer -b armory.toml checks.txt   Run a script against a world and exit
    RUST_LOG=debug wayfarer armory.toml  Show matcher decisions

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    match <text>           Match text against what the actor can see
    as #<id>               Act as another object
    look                   List the actor's surroundings
    threshold [n]          Show or set the match threshold
    save <path>            Write a world snapshot
    help                   List every command
    Ctrl+D                 Exit"
    );
}
