use std::io;

use atrium::{
    AtriumError, BudgetRange, ColorScheme, DesignStyle, RecommendationEngine, RoomType, Selection,
    report::{self, OutputFormat},
    ui::{DesignAssistantApp, config::AppConfig},
};
use clap::{Parser, Subcommand};
use egui::Vec2;
use itertools::Itertools;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the design assistant window (default)
    Ui {
        /// Start in dark mode, overriding the saved setting
        #[arg(long)]
        dark: bool,
    },
    /// Print recommendations for a selection without opening a window
    Recommend {
        #[arg(short, long)]
        room: String,

        #[arg(short, long)]
        style: String,

        #[arg(short, long)]
        colors: String,

        #[arg(short, long)]
        budget: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the room types, styles, color schemes and budgets to choose from
    Options,
}

fn ui(dark: bool) -> Result<(), AtriumError> {
    let mut app_config = AppConfig::from_local_file().unwrap_or_default();
    if dark {
        app_config.dark_mode = true;
    }

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_title("Atrium")
        .with_inner_size(Vec2::new(
            app_config.window_width,
            app_config.window_height,
        ));

    info!("Opening design assistant window");
    eframe::run_native(
        "Atrium",
        native_options,
        Box::new(|cc| Ok(Box::new(DesignAssistantApp::new(app_config, cc)))),
    )
    .map_err(|e| AtriumError::UiStartError {
        description: e.to_string(),
    })
}

fn options() {
    let sections = [
        ("Room types", RoomType::ALL.iter().map(|r| r.label()).join(", ")),
        ("Styles", DesignStyle::ALL.iter().map(|s| s.label()).join(", ")),
        ("Color schemes", ColorScheme::ALL.iter().map(|c| c.label()).join(", ")),
        ("Budgets", BudgetRange::ALL.iter().map(|b| b.label()).join(", ")),
    ];
    for (title, values) in sections {
        println!("{}: {}", title, values);
    }
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let result = match cli.command.unwrap_or(Commands::Ui { dark: false }) {
        Commands::Ui { dark } => ui(dark),
        Commands::Recommend {
            room,
            style,
            colors,
            budget,
            format,
        } => report::recommend(
            io::stdout().lock(),
            &RecommendationEngine::new(),
            &Selection::new(room, style, colors, budget),
            format,
        ),
        Commands::Options => {
            options();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
