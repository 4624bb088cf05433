use cafe_admin::{AdminConfig, Dashboard, DashboardView};
use cafe_client::{NetworkHttpClient, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logger::init_logger("cafe-admin");

    let config = AdminConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Loading admin dashboard");
    let http = NetworkHttpClient::new(config.timeout_ms)?;

    let dashboard = Dashboard::load(&http, &config).await;
    println!("{}", DashboardView::render(&dashboard).document());
    Ok(())
}
