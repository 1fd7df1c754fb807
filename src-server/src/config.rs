use std::{net::SocketAddr, path::PathBuf, time::Duration};

use fundlink_core::constants::{DEFAULT_LOCK_TIMEOUT_MS, DEFAULT_STARTING_BALANCE};
use rust_decimal::Decimal;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub static_dir: String,
    pub uploads_dir: PathBuf,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub lock_timeout: Duration,
    pub starting_balance: Decimal,
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FL_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid FL_LISTEN_ADDR");
        let data_dir =
            PathBuf::from(std::env::var("FL_DATA_DIR").unwrap_or_else(|_| "./data".into()));
        let static_dir = std::env::var("FL_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let uploads_dir =
            PathBuf::from(std::env::var("FL_UPLOADS_DIR").unwrap_or_else(|_| "./uploads".into()));
        let cors_allow = std::env::var("FL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("FL_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let lock_timeout_ms: u64 = std::env::var("FL_LOCK_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_LOCK_TIMEOUT_MS.to_string())
            .parse()
            .unwrap_or(DEFAULT_LOCK_TIMEOUT_MS);
        let starting_balance: Decimal = std::env::var("FL_START_BALANCE")
            .unwrap_or_else(|_| DEFAULT_STARTING_BALANCE.to_string())
            .parse()
            .expect("Invalid FL_START_BALANCE");
        let seed_file = std::env::var("FL_SEED_FILE").ok().map(PathBuf::from);

        Self {
            listen_addr,
            data_dir,
            static_dir,
            uploads_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            lock_timeout: Duration::from_millis(lock_timeout_ms),
            starting_balance,
            seed_file,
        }
    }
}
