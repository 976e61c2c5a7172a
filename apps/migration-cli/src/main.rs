use clap::{Parser, ValueEnum};
use db_infra::config::db::DbProfile;
use db_infra::infra::db::connect_db;
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    Prod,
    Test,
}

impl From<Env> for DbProfile {
    fn from(env: Env) -> Self {
        match env {
            Env::Prod => DbProfile::Prod,
            Env::Test => DbProfile::Test,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Airport facilities database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum)]
    command: Command,

    /// Runtime environment
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let conn = match connect_db(DbProfile::from(args.env)).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, MigrationCommand::from(args.command)).await {
        eprintln!("❌ Migration failed: {e}");
        std::process::exit(1);
    }
}
