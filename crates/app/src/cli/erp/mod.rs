use clap::{Args, Subcommand};

mod login;

#[derive(Debug, Args)]
pub(crate) struct ErpCommand {
    #[command(subcommand)]
    command: ErpSubcommand,
}

#[derive(Debug, Subcommand)]
enum ErpSubcommand {
    /// Check the ERP credentials and print the granted user id
    Login(login::LoginArgs),
}

pub(crate) async fn run(command: ErpCommand) -> Result<(), String> {
    match command.command {
        ErpSubcommand::Login(args) => login::run(args).await,
    }
}
