use review_lens::config::load_config;
use review_lens::render::render_report;
use review_lens::{Pipeline, RecordStore};
use tracing::{error, info};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let store = match RecordStore::load(&config.reviews_path, &config.summary_path) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load source tables: {}", e);
            return;
        }
    };

    let selector = config.selector();
    info!("Running analysis for {:?}", selector);

    let pipeline = Pipeline::with_binner(config.binner());
    let report = pipeline.run(&store, &selector);

    print!("{}", render_report(&report));
}
