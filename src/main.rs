use makcabs::config::Config;
use makcabs::entities::Fleet;
use makcabs::error::Error;
use makcabs::simulation::{Simulation, Visitor};
use makcabs::ui::LandingPage;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let page = LandingPage::new(config.pricing(), Fleet::default(), config.reservations());

    let status = Simulation::new(page).run(&Visitor::default()).await?;

    tracing::info!("visitor session ended with booking {}", status.name());

    Ok(())
}
