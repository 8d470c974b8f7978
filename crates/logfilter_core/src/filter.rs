// filter.rs: destination ranges that cause a line to be dropped
use std::net::{IpAddr, Ipv4Addr};

use ipnetwork::{IpNetwork, Ipv4Network};

/// A set of networks; an address inside any of them is filtered out.
#[derive(Debug, Clone)]
pub struct PrivateRanges {
    networks: Vec<IpNetwork>,
}

impl PrivateRanges {
    /// 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16.
    pub fn rfc1918() -> Self {
        let blocks = [
            (Ipv4Addr::new(10, 0, 0, 0), 8),
            (Ipv4Addr::new(172, 16, 0, 0), 12),
            (Ipv4Addr::new(192, 168, 0, 0), 16),
        ];
        let networks = blocks
            .into_iter()
            .map(|(addr, prefix)| {
                IpNetwork::V4(Ipv4Network::new(addr, prefix).expect("RFC1918 prefix is at most 32"))
            })
            .collect();
        Self { networks }
    }

    pub fn from_networks(networks: Vec<IpNetwork>) -> Self {
        Self { networks }
    }

    pub fn networks(&self) -> &[IpNetwork] {
        &self.networks
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.networks.iter().any(|net| net.contains(*ip))
    }
}
