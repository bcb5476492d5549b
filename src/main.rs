use anyhow::Result;
use clap::Parser;

use ino::cli::locate::{self, SearchArgs};
use ino::cli::{open_environment, Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut env = open_environment(&cli.env)?;

    match cli.command {
        Commands::Tool {
            key,
            items,
            places,
            name,
        } => locate::run_tool(&mut env, &search_args(&key, &items, &places, name.as_deref())),
        Commands::File {
            key,
            items,
            places,
            name,
        } => locate::run_file(&mut env, &search_args(&key, &items, &places, name.as_deref())),
        Commands::Dir {
            key,
            items,
            places,
            name,
        } => locate::run_dir(&mut env, &search_args(&key, &items, &places, name.as_deref())),
        Commands::ArduinoDir {
            key,
            items,
            subpath,
            name,
        } => locate::run_arduino_dir(&mut env, &key, &subpath, &items, name.as_deref()),
        Commands::ArduinoFile { key, subpath, name } => {
            locate::run_arduino_file(&mut env, &key, &subpath, name.as_deref())
        }
        Commands::ArduinoTool { key, subpath, name } => {
            locate::run_arduino_tool(&mut env, &key, &subpath, name.as_deref())
        }
        Commands::Places { parts } => {
            locate::run_places(&env, &parts);
            Ok(())
        }
        Commands::Env { json } => ino::cli::env::run(&env, json),
    }
}

const fn search_args<'a>(
    key: &'a str,
    items: &'a [String],
    places: &'a [String],
    name: Option<&'a str>,
) -> SearchArgs<'a> {
    SearchArgs {
        key,
        items,
        places,
        name,
    }
}
