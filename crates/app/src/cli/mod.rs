use clap::{Parser, Subcommand};

mod db;
mod erp;

#[derive(Debug, Parser)]
#[command(name = "showroom-app", about = "Showroom ERP adapter CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Erp(erp::ErpCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Erp(command) => erp::run(command).await,
        }
    }
}
