//! FixMyWard command-line front end.
//!
//! Reports, accounts and the login session are kept as JSON files in the data
//! directory, the same collections the web build keeps in `localStorage`.
//!
//! ```sh
//! fixmyward list --ward 12 --status pending
//! fixmyward report --title "Open manhole" --category Drainage --ward 12 \
//!     --description "Cover missing outside school gate"
//! fixmyward login councillor@ward12.gov.in
//! fixmyward update 4 in-progress --remarks "Plumber assigned"
//! ```

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use api::Session;
use store::{FileStore, ProblemStatus, RecordStore, StoreConfig};

/// Report civic problems and track their resolution by ward councillors.
#[derive(Parser, Debug)]
#[command(name = "fixmyward", version, about)]
struct Cli {
    /// Directory holding the stored collections.
    #[arg(long, env = "FIXMYWARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Configuration file (TOML). Defaults to `<data-dir>/fixmyward.toml` when present.
    #[arg(short, long, env = "FIXMYWARD_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides RUST_LOG.
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List reported problems, most recent first.
    List {
        /// Text to look for in title, description or location.
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<ProblemStatus>,
        #[arg(long)]
        ward: Option<String>,
        /// Show at most this many.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one problem in full.
    Show { id: String },
    /// Report a new problem.
    Report {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        ward: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Create an account and log in.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        /// Register as a ward councillor (requires --ward).
        #[arg(long)]
        councillor: bool,
        #[arg(long)]
        ward: Option<String>,
    },
    /// Log in by email.
    Login { email: String },
    /// End the current session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Councillor view: problems and counts for your ward.
    Panel,
    /// Councillor action: change a problem's status.
    Update {
        id: String,
        status: ProblemStatus,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// Print the effective configuration.
    Config,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fixmyward")
}

fn load_config(explicit: Option<&Path>, data_dir: &Path) -> anyhow::Result<StoreConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = data_dir.join(StoreConfig::filename());
            if !path.exists() {
                return Ok(StoreConfig::default());
            }
            path
        }
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config =
        StoreConfig::from_toml(&text).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = load_config(cli.config.as_deref(), &data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), prefix = %config.storage.prefix, "opening store");

    let store = RecordStore::with_config(FileStore::new(data_dir), config);
    let mut session = Session::restore(&store);

    match cli.command {
        Command::List {
            search,
            category,
            status,
            ward,
            limit,
        } => {
            let filter = api::ProblemFilter {
                search: search.unwrap_or_default(),
                category,
                status,
                ward,
            };
            commands::list(&store, &filter, limit);
        }
        Command::Show { id } => commands::show(&store, &id)?,
        Command::Report {
            title,
            category,
            ward,
            location,
            description,
            image_url,
        } => {
            let form = api::ReportForm {
                title,
                category,
                ward_number: ward,
                location,
                description,
                image_url,
            };
            commands::report(&store, &session, form)?;
        }
        Command::Register {
            email,
            name,
            councillor,
            ward,
        } => {
            let role = if councillor {
                store::Role::Councillor
            } else {
                store::Role::Citizen
            };
            let form = api::Registration {
                email,
                name,
                role,
                ward_number: ward,
            };
            commands::register(&store, &mut session, form)?;
        }
        Command::Login { email } => commands::login(&store, &mut session, &email)?,
        Command::Logout => commands::logout(&store, &mut session),
        Command::Whoami => commands::whoami(&session),
        Command::Panel => commands::panel(&store, &session)?,
        Command::Update {
            id,
            status,
            remarks,
        } => commands::update(&store, &session, &id, status, remarks.as_deref())?,
        Command::Config => commands::print_config(store.config())?,
    }

    Ok(())
}
