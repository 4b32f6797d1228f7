pub mod error;
pub mod logging;
pub mod station;

use chrono::prelude::*;
use dotenvy::dotenv;
use std::env;

pub type Timestamp = DateTime<Utc>;

const TEMPEST_PORT: &str = "TEMPEST_PORT";

/// UDP port to listen on, from the environment (or a .env file) if set.
pub fn get_listen_port() -> anyhow::Result<u16> {
    dotenv().ok();
    match env::var(TEMPEST_PORT) {
        Ok(port) => Ok(port.trim().parse::<u16>()?),
        Err(_) => Ok(station::transport::udp::DEFAULT_PORT),
    }
}
