use anyhow::Result;
use clap::{Parser, Subcommand};
use midining::{
    cli::{self, AboutEdits, PositionSource},
    screens::{AuthMode, Tab},
};
use midining_shared::{Coordinate, preferences::Priority};

/// midining - MI AI Dining in the terminal
#[derive(Parser)]
#[command(name = "midining")]
#[command(about = "Dining halls, menus and your food profile at U-M", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dining halls near you and today's recommendation
    Home {
        /// Device position as "lat,lon" (overrides config file)
        #[arg(long)]
        at: Option<Coordinate>,

        /// Behave as if location permission was denied
        #[arg(long, conflicts_with = "at")]
        no_location: bool,

        /// Open the assistant after the feed
        #[arg(long)]
        chat: bool,
    },
    /// Today's full menu
    Menu {
        /// Only show this dining hall
        #[arg(long)]
        hall: Option<String>,

        #[arg(long)]
        no_color: bool,
    },
    /// View and edit your food preferences
    About {
        #[arg(long, value_enum, default_value_t = Tab::Traits)]
        tab: Tab,

        /// Set a trait priority, e.g. --set spicy=dislike
        #[arg(long = "set", value_parser = cli::parse_trait)]
        traits: Vec<(String, Priority)>,

        /// Flip an allergen flag
        #[arg(long = "toggle")]
        toggles: Vec<String>,

        /// Replace the learned preferences text
        #[arg(long)]
        custom: Option<String>,

        /// Save the edited profile
        #[arg(long)]
        save: bool,

        /// End the session, then go to login
        #[arg(long)]
        logout: bool,
    },
    /// Talk to the dining assistant
    Chat {
        /// Send one message and exit
        #[arg(long)]
        message: Option<String>,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        uniqname: String,

        #[arg(long)]
        password: String,
    },
    /// Sign in
    Login {
        #[arg(long)]
        uniqname: String,

        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = midining::config::Config::load(cli.config.clone())?;
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    midining::observability::init_observability(
        "midining",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Home {
            at,
            no_location,
            chat,
        } => {
            let source = match (at, no_location) {
                (_, true) => PositionSource::Disabled,
                (Some(position), false) => PositionSource::At(position),
                (None, false) => PositionSource::Config,
            };
            cli::home(config, source, chat).await
        }
        Commands::Menu { hall, no_color } => cli::menu(config, hall, !no_color).await,
        Commands::About {
            tab,
            traits,
            toggles,
            custom,
            save,
            logout,
        } => {
            let edits = AboutEdits {
                traits,
                toggles,
                custom,
                save,
                logout,
            };
            cli::about(config, tab, edits).await
        }
        Commands::Chat { message } => cli::chat(config, message).await,
        Commands::Signup { uniqname, password } => {
            cli::authenticate(config, AuthMode::SignUp, uniqname, password)
                .await
                .map(|_| ())
        }
        Commands::Login { uniqname, password } => {
            cli::authenticate(config, AuthMode::Login, uniqname, password)
                .await
                .map(|_| ())
        }
    }
}
