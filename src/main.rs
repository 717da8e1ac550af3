// src/main.rs
use anyhow::Context;
use clap::Parser;
use rand::rngs::OsRng;
use std::path::Path;

use passgen::cli::{handlers, menu, render, Args, CliCommand};
use passgen::core::{AppState, Config};
use passgen::storage::FileStore;
use passgen::utils::current_timestamp;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    passgen::logging::init(&config, args.verbose).context("failed to set up logging")?;
    log::debug!("Loaded config: {:?}", config);

    let mut store = match args.store.as_ref().or(config.store_file.as_ref()) {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    }
    .context("failed to open password store")?;
    log::debug!("Using store {}", store.path().display());

    let mut state = AppState::load(&store).context("failed to load saved state")?;

    let command = match args.command {
        Some(command) => command,
        None => {
            menu::run_cli_menu(&mut state, &mut store, &config, !args.no_qr)?;
            return Ok(());
        }
    };

    match command {
        CliCommand::Generate(generate) => {
            let options = generate.apply(config.generation_defaults());
            match handlers::handle_generate(&mut state, &mut store, &options, &mut OsRng, &current_timestamp())? {
                Some(report) if args.json => println!("{}", serde_json::to_string_pretty(&report)?),
                Some(report) => {
                    println!("{}", render::render_report(&report, state.theme));
                    if !args.no_qr {
                        println!("{}", render::render_qr(&report.password, state.theme));
                    }
                }
                None => {
                    eprintln!("❌ No characters to choose from: enable at least one character type.");
                    std::process::exit(2);
                }
            }
        }
        CliCommand::Score { password } => {
            let report = handlers::handle_score(&password);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::render_report(&report, state.theme));
            }
        }
        CliCommand::History => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&state.history)?);
            } else {
                println!("{}", render::render_history(&state.history, state.theme));
            }
        }
        CliCommand::Recall { index } => {
            let entry = handlers::handle_recall(&state, index)?;
            let report = handlers::handle_score(&entry.password);
            println!("{}", render::render_report(&report, state.theme));
            println!("Generated at {}", entry.timestamp);
            if !args.no_qr {
                println!("{}", render::render_qr(&entry.password, state.theme));
            }
        }
        CliCommand::ClearHistory => {
            handlers::handle_clear_history(&mut state, &mut store)?;
            println!("✅ History cleared");
        }
        CliCommand::Export { format, dir } => {
            let dir = dir.unwrap_or_else(|| config.export_directory.clone());
            match handlers::handle_export(&state, format, &dir)? {
                Some(path) => println!("✅ History written to {}", path.display()),
                None => println!("History is empty, nothing exported."),
            }
        }
        CliCommand::Theme { name } => {
            let changed = name.is_some();
            handlers::handle_theme(&mut state, &mut store, name)?;
            println!("{}", render::render_themes(state.theme));
            // Redraw the latest password's QR code in the new colour
            if changed && !args.no_qr {
                if let Some(latest) = state.history.get(0) {
                    println!("{}", render::render_qr(&latest.password, state.theme));
                }
            }
        }
    }

    Ok(())
}
