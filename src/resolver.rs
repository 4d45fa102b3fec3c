use std::collections::HashSet;

use crate::error::ResolveError;
use crate::interfaces::{InterfaceSource, SystemInterfaces};

/// Fetch the IP address to use for NFS traffic from the host's interfaces.
///
/// Returns the first local IPv4 address whose containing network appears in
/// `allowed_networks`, e.g. `"10.0.0.5"` for an interface configured as
/// `10.0.0.5/24` and an allow-list holding `"10.0.0.0/24"`.
pub fn get_nfs_client_ip<S: AsRef<str>>(allowed_networks: &[S]) -> Result<String, ResolveError> {
    resolve_with(&SystemInterfaces, allowed_networks)
}

/// Same as [`get_nfs_client_ip`], reading addresses from `source`.
///
/// Networks are compared by their string form: the allow-list entry must equal
/// `<network>/<prefix>` as configured on the interface, so `10.0.0.0/16` does
/// not cover an address configured as `10.0.0.5/24`.
pub fn resolve_with<I, S>(source: &I, allowed_networks: &[S]) -> Result<String, ResolveError>
where
    I: InterfaceSource + ?Sized,
    S: AsRef<str>,
{
    let addrs = source.interface_addrs().map_err(|e| {
        log::error!("Encountered error while fetching system IP addresses: {}", e);
        ResolveError::Enumeration(e)
    })?;

    let networks: HashSet<&str> = allowed_networks.iter().map(AsRef::as_ref).collect();

    for addr in &addrs {
        // IPv6 and unknown families yield no network
        let Some(parsed) = addr.network() else {
            continue;
        };

        let (ip, cnet) = match parsed {
            Ok(pair) => pair,
            Err(e) => {
                log::error!("Encountered error while parsing IP address: {}", e);
                continue;
            }
        };
        log::debug!("IP address: {} and Network: {} on {}", ip, cnet, addr.name());

        if networks.contains(cnet.to_string().as_str()) {
            log::info!("Found IP address: {}", ip);
            return Ok(ip.to_string());
        }
    }

    Err(ResolveError::NoMatch {
        allowed_networks: allowed_networks
            .iter()
            .map(|n| n.as_ref().to_string())
            .collect(),
    })
}
