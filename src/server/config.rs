use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("SERVER_PORT".to_string(), value))?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_port,
        })
    }
}
