use serde::{Deserialize, Serialize};

/// Host harness configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Bind address for the harness (default: "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Harness port (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin of the controlled application. Responses whose final URL shares
    /// this origin are classified as basic; everything else is cross-origin.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// URL focused or opened when a notification is clicked
    #[serde(default = "default_start_url")]
    pub start_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            origin: default_origin(),
            start_url: default_start_url(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_origin() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_start_url() -> String {
    "/".to_string()
}
