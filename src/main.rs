use clap::Parser;
use restful::cli::Args;
use restful::config::Config;
use restful::orchestrator::{self, RunContext};
use restful::ui::{log_verbose, print_fatal};
use std::io;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            print_fatal(e);
            process::exit(1);
        }
    };

    if let Some(source) = &config.source {
        log_verbose(config.verbose, format!("Config file: {}", source.display()));
    }
    log_verbose(config.verbose, format!("Base URL: {}", config.base_url));

    let context = RunContext::from_args(args, config);
    let mut stdout = io::stdout();

    match orchestrator::run(context, &mut stdout).await {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            print_fatal(e);
            process::exit(1);
        }
    }
}
