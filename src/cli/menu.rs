// src/cli/menu.rs
use inquire::{Confirm, CustomType, Select, Text};
use rand::rngs::OsRng;

use crate::cli::handlers;
use crate::cli::render;
use crate::core::{AppState, Config};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::models::{GenerationConfig, GenerationMode, Theme, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH};
use crate::storage::KeyValueStore;
use crate::utils::{current_timestamp, truncate_string};

const GENERATE: &str = "🔑  Generate password";
const SCORE: &str = "📊  Check password strength";
const HISTORY: &str = "📜  Browse history";
const CLEAR: &str = "🗑️  Clear history";
const EXPORT: &str = "📤  Export history";
const THEME: &str = "🎨  Change theme";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(
    state: &mut AppState,
    store: &mut dyn KeyValueStore,
    config: &Config,
    show_qr: bool,
) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut options = config.generation_defaults();
    // Password currently on screen, redrawn when the theme changes
    let mut current: Option<String> = None;

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![GENERATE, SCORE, HISTORY, CLEAR, EXPORT, THEME, EXIT],
        )
        .prompt()?;

        match choice {
            GENERATE => {
                options = prompt_options(&options)?;
                match handlers::handle_generate(state, store, &options, &mut OsRng, &current_timestamp())? {
                    Some(report) => {
                        println!("\n{}\n", render::render_report(&report, state.theme));
                        if show_qr {
                            println!("{}\n", render::render_qr(&report.password, state.theme));
                        }
                        current = Some(report.password);
                    }
                    None => println!("❌ Select at least one character type."),
                }
            }
            SCORE => {
                let password = Text::new("Password to check:").prompt()?;
                let report = handlers::handle_score(&password);
                println!("\n{}\n", render::render_report(&report, state.theme));
            }
            HISTORY => {
                if let Some(password) = browse_history(state, show_qr)? {
                    current = Some(password);
                }
            }
            CLEAR => {
                let confirmed = Confirm::new("Clear the password history?")
                    .with_default(false)
                    .prompt()?;
                if confirmed {
                    handlers::handle_clear_history(state, store)?;
                    println!("✅ History cleared");
                }
            }
            EXPORT => {
                let format = Select::new("Export format:", vec!["csv", "txt"]).prompt()?;
                let format: ExportFormat = format.parse().map_err(crate::error::AppError::InvalidInput)?;
                match handlers::handle_export(state, format, &config.export_directory)? {
                    Some(path) => println!("✅ History written to {}", path.display()),
                    None => println!("History is empty, nothing exported."),
                }
            }
            THEME => {
                let theme = Select::new("Theme:", Theme::ALL.to_vec())
                    .with_starting_cursor(Theme::ALL.iter().position(|t| *t == state.theme).unwrap_or(0))
                    .prompt()?;
                handlers::handle_theme(state, store, Some(theme))?;
                println!("{}", render::render_themes(state.theme));
                if show_qr {
                    if let Some(password) = current.as_deref() {
                        println!("\n{}\n", render::render_qr(password, state.theme));
                    }
                }
            }
            _ => {
                println!("👋 Goodbye!");
                return Ok(());
            }
        }
    }
}

fn prompt_options(previous: &GenerationConfig) -> Result<GenerationConfig> {
    let mode = Select::new("Password style:", vec!["All characters", "Easy to say"])
        .with_starting_cursor(match previous.mode {
            GenerationMode::Complex => 0,
            GenerationMode::Pronounceable => 1,
        })
        .prompt()?;
    let mode = if mode == "Easy to say" {
        GenerationMode::Pronounceable
    } else {
        GenerationMode::Complex
    };

    // Out-of-range values are clamped below; only non-numbers are re-asked
    let length = CustomType::<usize>::new(&format!(
        "Password length ({}-{}):",
        MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
    ))
    .with_default(previous.length)
    .with_parser(&parse_length)
    .with_error_message("Please type a whole number")
    .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(previous.include_uppercase)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(previous.include_lowercase)
        .prompt()?;

    // Digits, symbols and ambiguity only matter for complex passwords
    let (include_digits, include_symbols, exclude_ambiguous) = if mode == GenerationMode::Complex {
        (
            Confirm::new("Include numbers?")
                .with_default(previous.include_digits)
                .prompt()?,
            Confirm::new("Include symbols?")
                .with_default(previous.include_symbols)
                .prompt()?,
            Confirm::new("Exclude ambiguous characters (I, l, 1, O, 0)?")
                .with_default(previous.exclude_ambiguous)
                .prompt()?,
        )
    } else {
        (previous.include_digits, previous.include_symbols, previous.exclude_ambiguous)
    };

    let mut options = GenerationConfig {
        length: previous.length,
        mode,
        include_uppercase,
        include_lowercase,
        include_digits,
        include_symbols,
        exclude_ambiguous,
    };
    options.set_length(length);

    Ok(options)
}

// Parse errors make the prompt ask again instead of ending the session
fn parse_length(input: &str) -> std::result::Result<usize, ()> {
    input.trim().parse().map_err(|_| ())
}

fn browse_history(state: &AppState, show_qr: bool) -> Result<Option<String>> {
    if state.history.is_empty() {
        println!("No passwords generated yet.");
        return Ok(None);
    }

    let labels: Vec<String> = state
        .history
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:>2}. {}  ({})", i + 1, truncate_string(&entry.password, 40), entry.timestamp))
        .collect();

    let picked = Select::new("Select a password to view:", labels.clone()).prompt_skippable()?;

    let index = match picked.and_then(|label| labels.iter().position(|l| *l == label)) {
        Some(index) => index,
        None => return Ok(None),
    };

    let entry = handlers::handle_recall(state, index + 1)?;
    let report = handlers::handle_score(&entry.password);
    println!("\n{}\n", render::render_report(&report, state.theme));
    if show_qr {
        println!("{}\n", render::render_qr(&entry.password, state.theme));
    }

    Ok(Some(entry.password.clone()))
}
