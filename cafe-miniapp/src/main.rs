use cafe_client::{CafeClient, ClientConfig, logger};
use cafe_miniapp::{Host, LaunchParams, NoHost, Storefront};
use chrono::Utc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logger::init_logger("cafe-miniapp");

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Cafe mini app starting");
    let client = CafeClient::from_config(config)?;

    let document = match LaunchParams::from_env().into_host(Utc::now())? {
        Some(host) => render(client, host).await,
        None => render(client, NoHost).await,
    };
    println!("{document}");
    Ok(())
}

async fn render<H: Host>(client: CafeClient, host: H) -> String {
    let mut storefront = Storefront::new(client, host);
    storefront.bootstrap().await;
    storefront.page().document()
}
