pub mod config;
pub mod error;
pub mod interfaces;
pub mod resolver;

pub use error::ResolveError;
pub use interfaces::{InterfaceAddr, InterfaceSource, ParseError, SystemInterfaces};
pub use resolver::{get_nfs_client_ip, resolve_with};
