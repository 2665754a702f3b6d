//! fdo-resolve - Look up freedesktop.org applications and icons
//!
//! Thin command line front-end over `fdo-apps`.

mod functions;
mod services;

use clap::{Parser, Subcommand};
use fdo_wm::WindowInfo;
use functions::formatting::{app_to_text, apps_to_text};
use log::info;
use serde::Serialize;
use services::apps::AppService;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fdo-resolve",
    about = "Resolve freedesktop.org applications and icons"
)]
struct Cli {
    /// Icon theme searched before hicolor.
    #[arg(long, default_value = "hicolor", global = true)]
    theme: String,

    /// Preferred icon size in pixels.
    #[arg(long, default_value_t = 32, global = true)]
    size: u32,

    /// Data directory to search, repeatable. Overrides XDG_DATA_DIRS.
    #[arg(long = "data-dir", global = true)]
    data_dirs: Vec<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the data directories in search order.
    Dirs,
    /// Resolve an icon name to a file.
    Icon { name: String },
    /// Find an application by desktop file name, name or command.
    App { name: String },
    /// Find every application whose name or command contains a fragment.
    Search { fragment: String },
    /// Find the application behind a window.
    Window {
        #[arg(long, default_value = "")]
        title: String,
        /// Window class, repeatable, most specific first.
        #[arg(long = "class")]
        classes: Vec<String>,
        #[arg(long, default_value = "")]
        command: String,
        #[arg(long, default_value = "")]
        icon_name: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let service = AppService::new(&cli.theme, cli.size, cli.data_dirs);
    info!("Searching {:?}", service.data_dirs());

    let found = match cli.command {
        Commands::Dirs => {
            let dirs = service.data_dirs();
            print(cli.json, &dirs, || {
                dirs.iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join("\n")
            })?
        }
        Commands::Icon { name } => match service.icon(&name) {
            Some(path) => print(cli.json, &path, || path.display().to_string())?,
            None => not_found(&format!("icon {name}")),
        },
        Commands::App { name } => match service.app(&name) {
            Some(app) => print(cli.json, &app, || app_to_text(&app))?,
            None => not_found(&format!("application {name}")),
        },
        Commands::Search { fragment } => {
            let apps = service.search(&fragment);
            if apps.is_empty() {
                not_found(&format!("applications matching {fragment}"))
            } else {
                print(cli.json, &apps, || apps_to_text(&apps))?
            }
        }
        Commands::Window {
            title,
            classes,
            command,
            icon_name,
        } => {
            let win = WindowInfo {
                title,
                classes,
                command,
                icon_name,
                ..Default::default()
            };
            match service.window(&win) {
                Some(app) => print(cli.json, &app, || app_to_text(&app))?,
                None => not_found("application for window"),
            }
        }
    };

    if !found {
        std::process::exit(1);
    }

    Ok(())
}

fn print<T, F>(json: bool, value: &T, text: F) -> Result<bool, serde_json::Error>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(true)
}

fn not_found(what: &str) -> bool {
    eprintln!("No {what} found");
    false
}
