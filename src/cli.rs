use crate::config::Config;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "countryinfo",
    about = "HTTP server that aggregates country info, cities and population history",
    version,
    author
)]
pub struct Args {
    /// Port to listen on, overrides PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind, overrides BIND_ADDRESS
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Per-call upstream timeout in seconds, overrides UPSTREAM_TIMEOUT_SECS
    #[arg(long)]
    pub upstream_timeout: Option<u64>,
}

impl Args {
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server_port = port;
        }
        if let Some(bind) = &self.bind {
            config.bind_address = bind.clone();
        }
        if let Some(timeout) = self.upstream_timeout {
            config.upstream_timeout_secs = timeout;
        }
    }
}
