use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use habit_forge::{
    client::{FormField, HabitBoard, HabitClient, HabitForm, view},
    config::ClientConfig,
    entities::Frequency,
    errors::Result,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "habitctl")]
#[command(about = "HabitForge client - build better habits, one day at a time", long_about = None)]
struct Cli {
    /// API base URL (overrides HABIT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every habit
    List,
    /// Show habit counts
    Stats,
    /// Create a new habit
    Add {
        /// What habit do you want to build?
        title: String,
        /// Some motivation or details
        #[arg(short, long, default_value = "")]
        description: String,
        /// daily, weekly or monthly
        #[arg(short, long, default_value = "daily")]
        frequency: Frequency,
    },
    /// Replace an existing habit
    Edit {
        /// Habit id
        id: String,
        /// New title
        title: String,
        /// New description (cleared when omitted)
        #[arg(short, long, default_value = "")]
        description: String,
        /// New frequency (reset to daily when omitted)
        #[arg(short, long, default_value = "daily")]
        frequency: Frequency,
    },
    /// Delete a habit
    Delete {
        /// Habit id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    dotenv().ok();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url.trim_end_matches('/').to_string();
    }

    let mut board = HabitBoard::with_notification_ttl(
        HabitClient::from_config(&config),
        config.notification_ttl,
    );
    let loaded = board.load().await;
    if !loaded && matches!(cli.command, Commands::List | Commands::Stats) {
        print!("{}", view::render_board(&board));
        return Ok(ExitCode::FAILURE);
    }

    let succeeded = match cli.command {
        Commands::List => true,
        Commands::Stats => {
            println!("{}", view::render_stats(&board.stats()));
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Add {
            title,
            description,
            frequency,
        } => {
            board.set_text(FormField::Title, title);
            board.set_text(FormField::Description, description);
            board.set_frequency(frequency);
            board.submit().await.is_some()
        }
        Commands::Edit {
            id,
            title,
            description,
            frequency,
        } => {
            let form = HabitForm::new(title, description, frequency);
            board.edit(&id, &form).await.is_some()
        }
        Commands::Delete { id } => board.remove(&id).await,
    };

    print!("{}", view::render_board(&board));

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
