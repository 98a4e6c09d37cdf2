//! Icon set generator entry point.

use shieldicon_app::{BatchConfig, run_batch};

fn main() {
    env_logger::init();
    log::info!("Generating shield icons");

    if let Err(e) = run_batch(&BatchConfig::default()) {
        log::error!("Icon generation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("All icons created successfully!");
}
