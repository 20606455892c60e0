use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::zillow::ZillowClient;
use astra::Server;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;
mod zillow;


fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Bad configuration: {e}");
            std::process::exit(1);
        }
    };

    // Database handle; each worker thread opens its own connection lazily.
    let db = Database::new(config.db_path.clone());

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    if config.zws_id.is_empty() {
        eprintln!("⚠️ ZWS_ID is not set; /zillow routes will fail upstream");
    }

    let zillow = match ZillowClient::new(config.zws_id.clone()) {
        Ok(zillow) => zillow,
        Err(e) => {
            eprintln!("❌ Zillow client init failed: {e}");
            std::process::exit(1);
        }
    };

    println!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db, &zillow) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
