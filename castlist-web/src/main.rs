//! castlist web app - cast gallery and click counter

use castlist_web::config::AppConfig;
use castlist_web::{title, App};
use tracing::info;

fn main() {
    let config = AppConfig::from_env();

    // Only fails if a global subscriber is already installed
    let _ = dioxus::logger::init(config.log_level);

    let baseline = title::capture_baseline();
    info!("Starting castlist (title baseline {baseline:?})");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(App);
}
