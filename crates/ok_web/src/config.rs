use std::net::SocketAddr;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "OK_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,
    /// Seconds intermediary caches may reuse a successful response
    #[arg(long, env = "OK_CACHE_SECONDS", default_value_t = 3600)]
    pub cache_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache_seconds: 3600,
        }
    }
}
