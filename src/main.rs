use clap::Parser;
use std::process;

use taskly::cli;
use taskly::cli::commands::{Cli, Commands};

fn main() {
    let cli_args = Cli::parse();
    let json_output = cli_args.json;
    let api_url = cli_args.api_url.clone();
    let api_url = api_url.as_deref();

    let exit_code = match cli_args.command {
        Commands::Signup {
            email,
            name,
            password,
        } => cli::auth::run_signup(&email, &name, &password, json_output, api_url),
        Commands::Login { email, password } => {
            cli::auth::run_login(&email, &password, json_output, api_url)
        }
        Commands::Logout => cli::auth::run_logout(json_output, api_url),
        Commands::Whoami => cli::auth::run_whoami(json_output, api_url),
        Commands::Task(cmd) => cli::task::run(cmd, json_output, api_url),
    };

    process::exit(exit_code);
}
