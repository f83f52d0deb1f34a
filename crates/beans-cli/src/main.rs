use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "beans-cli", version, about = "Beans CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete onboarding and create the profile
    Onboard(commands::onboard::OnboardArgs),
    /// Show today's challenge
    Today {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Accept today's challenge, pinning it for the day
    Accept {
        /// Challenge id shown by `today`
        challenge_id: String,
    },
    /// Re-roll the shown challenge without committing the day
    Skip {
        /// Challenge id to exclude from the re-roll
        challenge_id: String,
    },
    /// Record how today's challenge went
    Reflect(commands::reflect::ReflectArgs),
    /// Show streaks and totals
    Progress {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show recent reflections
    Feed {
        /// Maximum number of entries
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Seed the challenge catalog from the bundled dataset
    Seed,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard(args) => commands::onboard::run(args),
        Commands::Today { json } => commands::today::run_today(json),
        Commands::Accept { challenge_id } => commands::today::run_accept(&challenge_id),
        Commands::Skip { challenge_id } => commands::today::run_skip(&challenge_id),
        Commands::Reflect(args) => commands::reflect::run(args),
        Commands::Progress { json } => commands::progress::run(json),
        Commands::Feed { limit, json } => commands::feed::run(limit, json),
        Commands::Seed => commands::seed::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
