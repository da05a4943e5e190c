//! dcviz CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dcviz::commands::{
    run_analyze, run_export, run_history, run_login, run_logout, run_reset_password, run_signup,
    CommandContext,
};
use dcviz::{ApiClient, Cli, Commands, Config};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> dcviz::Result<String> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    let client = ApiClient::new(base_url)?;
    let ctx = CommandContext::from_cli(cli.format, cli.verbose);

    match &cli.command {
        Commands::Analyze(args) => run_analyze(args, &client, &ctx),
        Commands::History(args) => run_history(args, &client, &ctx),
        Commands::Login(args) => run_login(args, &client, &ctx),
        Commands::Signup(args) => run_signup(args, &client, &ctx),
        Commands::Logout => run_logout(&client, &ctx),
        Commands::ResetPassword(args) => run_reset_password(args, &client, &ctx),
        Commands::Export(args) => run_export(args, &client, &ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "dcviz=debug" } else { "dcviz=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
