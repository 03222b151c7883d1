use anyhow::Result;
use clap::{Parser, Subcommand};

use onboarding::cli::{
    handle_journal_command, handle_metrics_command, handle_tutorial_command, MetricsCommands,
    TutorialArgs,
};
use onboarding::config::{paths::OnboardingPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "onboarding",
    version,
    about = "Project analysis onboarding and metric catalog",
    long_about = "Walks you through providing an analysis token and running a first \
                  analysis of your project, and exposes the catalog of metric keys \
                  understood by the analysis server."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the project analysis tutorial
    Tutorial(TutorialArgs),

    /// Metric catalog commands
    #[command(subcommand)]
    Metrics(MetricsCommands),

    /// Show recent tutorial transitions
    Journal {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tutorial(args)) => {
            let paths = OnboardingPaths::new()?;
            let settings = Settings::load_or_create(&paths)?;
            handle_tutorial_command(&paths, &settings, args)?;
        }
        // The catalog is static; it never reads settings
        Some(Commands::Metrics(cmd)) => {
            handle_metrics_command(cmd)?;
        }
        Some(Commands::Journal { limit }) => {
            let paths = OnboardingPaths::new()?;
            handle_journal_command(&paths, limit)?;
        }
        Some(Commands::Init) => {
            let paths = OnboardingPaths::new()?;
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!(
                    "Wrote default settings to: {}",
                    paths.settings_file().display()
                );
            }
        }
        Some(Commands::Config) => {
            let paths = OnboardingPaths::new()?;
            let settings = Settings::load_or_create(&paths)?;
            println!("Onboarding Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Messages file:    {}", paths.messages_file().display());
            println!("Journal file:     {}", paths.journal_file().display());
            println!();
            println!("Settings:");
            println!("  Base URL:        {}", settings.base_url);
            println!("  Instance name:   {}", settings.instance_name);
            println!("  Local server:    {}", settings.is_local);
            println!("  Journal enabled: {}", settings.journal_enabled);
        }
        None => {
            println!("onboarding - project analysis onboarding");
            println!();
            println!("Run 'onboarding --help' for usage information.");
            println!("Run 'onboarding tutorial --project-key <KEY>' to start the tutorial.");
        }
    }

    Ok(())
}
