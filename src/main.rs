use std::error::Error;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use message_board::config::{self, AppConfig};
use message_board::headless::{self, HeadlessAction};
use message_board::{BoardApp, BoardSession, HttpBoardApi, MessageId};

#[derive(Parser)]
#[command(
    name = "message-board",
    version,
    about = "Desktop client for the message board API"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend origin, e.g. http://localhost:8080
    #[arg(long, env = config::API_BASE_ENV, value_name = "URL")]
    api_base: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the backend health badge (ok / down)
    Health,
    /// Print the current messages, newest first
    List,
    /// Post a message and print the refreshed list
    Post { content: String },
    /// Delete a message by id and print the refreshed list
    Delete { id: String },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the effective configuration to the config file
    Init,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    // RUST_LOG controls verbosity
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config).with_api_base(cli.api_base.clone());

    let action = match cli.command {
        None => return run_desktop(app_config),
        Some(Command::Config {
            action: ConfigAction::Init,
        }) => {
            config::save_config(&cli.config, &app_config)?;
            println!("Wrote {}", cli.config);
            return Ok(());
        }
        Some(Command::Health) => HeadlessAction::Health,
        Some(Command::List) => HeadlessAction::List,
        Some(Command::Post { content }) => HeadlessAction::Post(content),
        Some(Command::Delete { id }) => HeadlessAction::Delete(MessageId::from(id.as_str())),
    };

    run_headless(app_config, action).await
}

async fn run_headless(app_config: AppConfig, action: HeadlessAction) -> Result<(), Box<dyn Error>> {
    let api = HttpBoardApi::new(&app_config.api_base, app_config.request_timeout())?;
    let health_only = action == HeadlessAction::Health;
    let state = headless::run(api, action).await;

    if health_only {
        println!("{}", state.health());
        return Ok(());
    }

    print!("{}", headless::render_messages(&state));
    if !state.error().is_empty() {
        return Err(state.error().to_string().into());
    }
    Ok(())
}

fn run_desktop(app_config: AppConfig) -> Result<(), Box<dyn Error>> {
    let api = HttpBoardApi::new(&app_config.api_base, app_config.request_timeout())?;
    log::info!("Using message board API at {}", api.base_url());

    // API worker runs in the background on the tokio runtime
    let session = BoardSession::spawn(api);

    // UI runs on the main thread
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(BoardApp::new(cc, session)))),
    )?;
    Ok(())
}
