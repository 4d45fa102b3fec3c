//! Centralized configuration: environment variable names and allow-list cleanup.

/// **Environment variables:** read by the binary after `.env` has been loaded.
pub mod env_var {
    /// Comma-separated list of networks NFS traffic is allowed on
    /// (e.g. `"10.0.0.0/24,192.168.1.0/24"`).
    pub const ALLOWED_NETWORKS: &str = "NFS_ALLOWED_NETWORKS";
    /// Log filter picked up by `pretty_env_logger` (e.g. `"nfs_client_ip=debug"`).
    pub const LOG_FILTER: &str = "RUST_LOG";
}

/// Separator between entries of [`env_var::ALLOWED_NETWORKS`] and of a single argument.
pub const ALLOWED_NETWORKS_SEPARATOR: char = ',';

/// Trim allow-list entries and drop the empty ones.
///
/// Splitting happens in the argument parser; this only cleans what it hands
/// over (`"10.0.0.0/24, 192.168.1.0/24"` leaves a leading space on the second
/// entry). Entries are not validated: one that is not a canonical network
/// string simply never matches.
pub fn trim_allowed_networks<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_trim_allowed_networks_trims_and_drops_empty() {
        let entries = owned(&[" 10.0.0.0/24 ", "", " 192.168.1.0/24", "  "]);
        let networks = trim_allowed_networks(entries);
        assert_eq!(networks, vec!["10.0.0.0/24", "192.168.1.0/24"]);
    }

    #[test]
    fn test_trim_allowed_networks_empty_input() {
        assert!(trim_allowed_networks(Vec::new()).is_empty());
    }

    #[test]
    fn test_trim_allowed_networks_keeps_duplicates() {
        // Duplicates collapse later in the resolver's set
        let networks = trim_allowed_networks(owned(&["10.0.0.0/24", "10.0.0.0/24"]));
        assert_eq!(networks.len(), 2);
    }
}
