use clap::{Parser, Subcommand};
use trendspotter::console::commands::{self, CallableTrait};
use trendspotter::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(name = "console", about = "TrendSpotter maintenance commands")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Ensure the admin user exists and load the sample catalogue into an empty table
    Seed,
    /// Delete every product and reload the sample catalogue
    Reset,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("console".into(), "warn".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();

    get_command(cli).call()
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::Db { command } => match command {
            DbCommands::Seed => Box::new(commands::db::SeedCommand::new()),
            DbCommands::Reset => Box::new(commands::db::ResetCommand::new()),
        },
    }
}
