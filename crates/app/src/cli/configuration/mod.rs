use clap::{Args, Subcommand};

mod show;

#[derive(Debug, Args)]
pub(crate) struct ConfigurationCommand {
    #[command(subcommand)]
    command: ConfigurationSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigurationSubcommand {
    Show(show::ShowConfigurationArgs),
}

pub(crate) async fn run(command: ConfigurationCommand) -> Result<(), String> {
    match command.command {
        ConfigurationSubcommand::Show(args) => show::run(args).await,
    }
}
