use std::env;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "0.0.0.0:8000".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn new() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| default_bind_addr());

        Self { bind_addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}
