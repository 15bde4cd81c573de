use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use taskd::error::Result;
use taskd::server::{self, AppState};
use taskd::store::files::FileStore;

#[derive(Parser)]
#[command(name = "taskd", version, about = "File-backed task-tracking web service")]
struct Args {
    /// Listening port
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Path to the JSON task file
    #[arg(long, env = "TASKS_FILE", default_value = "tasks.json")]
    data_file: PathBuf,

    /// Verbose errors and debug-level logging
    #[arg(long, env = "DEBUG")]
    debug: bool,

    /// Log filter (trace, debug, info, warn, error); overrides --debug
    #[arg(long, env = "TASKD_LOG")]
    log: Option<String>,
}

async fn run(args: Args) -> Result<()> {
    let store = Arc::new(FileStore::new(args.data_file));
    let state = Arc::new(AppState::new(store, args.debug));
    server::serve(state, args.port).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = args.log.clone().unwrap_or_else(|| {
        let level = if args.debug { "debug" } else { "info" };
        level.to_string()
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();

    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
