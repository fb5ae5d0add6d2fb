use delete_backup_relay::app::{self, AppState};
use delete_backup_relay::config::Config;
use delete_backup_relay::github::GithubClient;
use delete_backup_relay::utils::logging;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // CONFIG_PATH aponta para um config.json; as variáveis de ambiente valem por cima dele
    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => Config::load_from_file(&path)?.with_env()?,
        Err(_) => Config::from_env()?,
    };

    logging::init_logging(&config);

    let client = GithubClient::new(&config)?;
    logging::log_relay_iniciado(&config.bind_addr, client.url());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    let state = AppState::new(config, Arc::new(client));
    app::serve(listener, state).await?;

    Ok(())
}
