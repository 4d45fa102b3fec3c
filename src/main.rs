use anyhow::Result;
use clap::Parser;
use dotenv::*;

use nfs_client_ip::config::{env_var, trim_allowed_networks, ALLOWED_NETWORKS_SEPARATOR};
use nfs_client_ip::get_nfs_client_ip;

#[derive(Parser, Debug)]
#[command(name = "nfs-client-ip")]
#[command(version)]
#[command(about = "Print the local IPv4 address to use for NFS traffic", long_about = None)]
struct Cli {
    /// Allowed networks in CIDR notation, e.g. 10.0.0.0/24
    #[arg(
        value_name = "CIDR",
        env = env_var::ALLOWED_NETWORKS,
        value_delimiter = ALLOWED_NETWORKS_SEPARATOR
    )]
    networks: Vec<String>,
}

fn main() -> Result<()> {
    // Load .env first so RUST_LOG and the allow-list from it are visible
    dotenv().ok();
    pretty_env_logger::init();

    let cli = Cli::parse();
    let allowed_networks = trim_allowed_networks(cli.networks);
    log::debug!("Resolving NFS client IP against {:?}", allowed_networks);

    let ip = get_nfs_client_ip(&allowed_networks)?;
    println!("{}", ip);

    Ok(())
}
