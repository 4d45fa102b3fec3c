use get_if_addrs::{get_if_addrs, IfAddr};
use ipnet::{ipv4_mask_to_prefix, Ipv4Net};
use std::error::Error;
use std::fmt;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

/// An address bound to one of the host's network interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceAddr {
    /// IPv4 address with the subnet mask configured on the interface
    V4 {
        name: String,
        ip: Ipv4Addr,
        netmask: Ipv4Addr,
    },
    /// IPv6 address, never considered for NFS traffic
    V6 { name: String, ip: Ipv6Addr },
    /// Address record of a family we do not handle
    Other { name: String },
}

impl InterfaceAddr {
    /// Shorthand for an IPv4 record.
    pub fn v4(name: &str, ip: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        InterfaceAddr::V4 {
            name: name.to_string(),
            ip,
            netmask,
        }
    }

    /// Name of the interface the address is bound to.
    pub fn name(&self) -> &str {
        match self {
            InterfaceAddr::V4 { name, .. }
            | InterfaceAddr::V6 { name, .. }
            | InterfaceAddr::Other { name } => name,
        }
    }

    /// The IPv4 address and mask, if this record has an IPv4 form.
    pub fn as_ipv4(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        match self {
            InterfaceAddr::V4 { ip, netmask, .. } => Some((*ip, *netmask)),
            _ => None,
        }
    }

    /// Split an IPv4 record into its address and the network containing it.
    ///
    /// Returns `None` for non-IPv4 records. The network has its host bits
    /// cleared, so `10.0.0.5` with mask `255.255.255.0` gives `10.0.0.0/24`.
    pub fn network(&self) -> Option<Result<(Ipv4Addr, Ipv4Net), ParseError>> {
        let (ip, netmask) = self.as_ipv4()?;
        let parsed = ipv4_mask_to_prefix(netmask)
            .and_then(|prefix_len| Ipv4Net::new(ip, prefix_len))
            .map(|net| (ip, net.trunc()))
            .map_err(|_| ParseError { addr: self.clone() });
        Some(parsed)
    }
}

impl fmt::Display for InterfaceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceAddr::V4 { name, ip, netmask } => write!(f, "{}/{} ({})", ip, netmask, name),
            InterfaceAddr::V6 { name, ip } => write!(f, "{} ({})", ip, name),
            InterfaceAddr::Other { name } => write!(f, "<unknown address> ({})", name),
        }
    }
}

/// An interface address whose mask is not a valid prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub addr: InterfaceAddr,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot derive a network from interface address {}", self.addr)
    }
}

impl Error for ParseError {}

/// Anything that can list the host's interface addresses.
pub trait InterfaceSource {
    fn interface_addrs(&self) -> io::Result<Vec<InterfaceAddr>>;
}

/// Interface addresses as reported by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceSource for SystemInterfaces {
    fn interface_addrs(&self) -> io::Result<Vec<InterfaceAddr>> {
        let ifaces = get_if_addrs()?;
        let addrs = ifaces
            .into_iter()
            .map(|iface| match iface.addr {
                IfAddr::V4(v4addr) => InterfaceAddr::V4 {
                    name: iface.name,
                    ip: v4addr.ip,
                    netmask: v4addr.netmask,
                },
                IfAddr::V6(v6addr) => InterfaceAddr::V6 {
                    name: iface.name,
                    ip: v6addr.ip,
                },
            })
            .collect();
        Ok(addrs)
    }
}

/// A fixed snapshot, reported in order.
impl InterfaceSource for Vec<InterfaceAddr> {
    fn interface_addrs(&self) -> io::Result<Vec<InterfaceAddr>> {
        Ok(self.clone())
    }
}
