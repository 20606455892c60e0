use std::env;
use std::net::SocketAddr;

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    pub zws_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid BIND_ADDR `{bind_addr}`: {e}"))?;

        let db_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "properties.sqlite3".to_string());

        // The /zillow routes need a zws-id; everything else works without one.
        let zws_id = env::var("ZWS_ID").unwrap_or_default();

        Ok(Self {
            bind_addr,
            db_path,
            zws_id,
        })
    }
}
