use clap::Args;
use lunchline_app::{
    database::{self, Db},
    domain::configuration::{ConfigurationService, PgConfigurationService},
};

#[derive(Debug, Args)]
pub(crate) struct ShowConfigurationArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ShowConfigurationArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let configuration = PgConfigurationService::new(Db::new(pool))
        .get_configuration()
        .await
        .map_err(|error| format!("failed to read configuration: {error}"))?;

    println!("delivery_time: {}", configuration.delivery_time.strftime("%H:%M"));
    println!("changes_time: {}", configuration.changes_time.strftime("%H:%M"));
    println!("subvention: {}", configuration.subvention);
    println!("updated_at: {}", configuration.updated_at);

    Ok(())
}
