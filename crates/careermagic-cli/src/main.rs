use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use careermagic_core::ids::ReportId;

mod commands;
mod wizard;

#[derive(Parser, Debug)]
#[command(
    name = "careermagic",
    version,
    about = "Career-recommendation quiz in your terminal"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
    /// Take the quiz and get ranked career matches
    Quiz {
        /// Load answers from a TOML file instead of the interactive wizard
        #[arg(long)]
        answers: Option<PathBuf>,
        /// Name the saved report
        #[arg(long)]
        name: Option<String>,
        /// Skip storing a report for this run
        #[arg(long)]
        no_store: bool,
        #[arg(long)]
        json: bool,
    },
    /// Inspect saved quiz reports
    Report {
        #[command(subcommand)]
        action: ReportCommand,
    },
    /// Manage bookmarked careers
    Bookmark {
        #[command(subcommand)]
        action: BookmarkCommand,
    },
    /// Browse the career catalog
    Careers {
        #[command(subcommand)]
        action: CareersCommand,
    },
    /// Sign in, sign out, or register an account
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },
    Config {
        #[arg(long)]
        print: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    List,
    Show {
        id: ReportId,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkCommand {
    List,
    /// Bookmark (or un-bookmark) one career from a saved report
    Toggle { report: ReportId, career: String },
    /// Bookmark every match in a report under a custom name
    Save {
        report: ReportId,
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
enum CareersCommand {
    List,
    Show { id: String },
}

#[derive(Subcommand, Debug)]
enum AccountCommand {
    Register {
        email: String,
        password: String,
        name: String,
    },
    Login { email: String, password: String },
    Logout,
    Whoami,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => init_config(path, force),
        Commands::Quiz {
            answers,
            name,
            no_store,
            json,
        } => commands::quiz::execute(commands::quiz::QuizInputs {
            config_path: cli.config,
            answers,
            name,
            no_store,
            json,
        }),
        Commands::Report { action } => {
            let action = match action {
                ReportCommand::List => commands::report::ReportAction::List,
                ReportCommand::Show { id, json } => {
                    commands::report::ReportAction::Show { id, json }
                }
            };
            commands::report::execute(cli.config, action)
        }
        Commands::Bookmark { action } => {
            let action = match action {
                BookmarkCommand::List => commands::bookmark::BookmarkAction::List,
                BookmarkCommand::Toggle { report, career } => {
                    commands::bookmark::BookmarkAction::Toggle { report, career }
                }
                BookmarkCommand::Save { report, name } => {
                    commands::bookmark::BookmarkAction::Save { report, name }
                }
            };
            commands::bookmark::execute(cli.config, action)
        }
        Commands::Careers { action } => {
            let action = match action {
                CareersCommand::List => commands::careers::CareersAction::List,
                CareersCommand::Show { id } => commands::careers::CareersAction::Show { id },
            };
            commands::careers::execute(action)
        }
        Commands::Account { action } => {
            let action = match action {
                AccountCommand::Register {
                    email,
                    password,
                    name,
                } => commands::account::AccountAction::Register {
                    email,
                    password,
                    name,
                },
                AccountCommand::Login { email, password } => {
                    commands::account::AccountAction::Login { email, password }
                }
                AccountCommand::Logout => commands::account::AccountAction::Logout,
                AccountCommand::Whoami => commands::account::AccountAction::Whoami,
            };
            commands::account::execute(cli.config, action)
        }
        Commands::Config { print } => {
            if print {
                commands::config::print_effective(cli.config)
            } else {
                Ok(())
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let paths = careermagic_core::config::ConfigPaths::resolve()?;
    let config_path = path.unwrap_or(paths.config_path);
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        ));
    }
    let config = careermagic_core::config::Config::default_config();
    config.save(&config_path)?;
    println!("Config written to {}", config_path.display());
    Ok(())
}
