use nfs_client_ip::config::trim_allowed_networks;
use nfs_client_ip::{get_nfs_client_ip, ResolveError};

#[test]
fn test_trimmed_entries_match_like_clean_ones() {
    let entries = vec![" 10.0.0.0/24".to_string(), String::new()];
    assert_eq!(trim_allowed_networks(entries), vec!["10.0.0.0/24"]);
}

#[test]
fn test_system_lookup_with_empty_allow_list() {
    let allowed = trim_allowed_networks(vec![" ".to_string()]);
    // No network can belong to an empty allow-list, whatever the host has
    match get_nfs_client_ip(&allowed) {
        Err(ResolveError::NoMatch { allowed_networks }) => assert!(allowed_networks.is_empty()),
        Err(ResolveError::Enumeration(e)) => println!("Interface listing unavailable here: {}", e),
        Ok(ip) => panic!("empty allow-list matched {}", ip),
    }
}
