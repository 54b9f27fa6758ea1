use clap::{Parser, Subcommand};

mod configuration;
mod db;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "lunchline-app", about = "Lunchline CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Token(token::TokenCommand),
    Configuration(configuration::ConfigurationCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Configuration(command) => configuration::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
