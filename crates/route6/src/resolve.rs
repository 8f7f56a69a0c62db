//! Address text resolution.
//!
//! net-tools resolves a route target in two phases: a numeric-only parse
//! first, then the system resolver. The phases are modeled as an explicit
//! ordered list of strategies so the fallback policy is visible and can be
//! tested on its own.

use std::net::{Ipv6Addr, SocketAddr, ToSocketAddrs};

use crate::error::{Error, Result};

/// One way of turning address text into an IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Literal parse only (`inet_pton` equivalent).
    Numeric,
    /// System resolver (`getaddrinfo` equivalent). Accepts literals too.
    Hostname,
}

impl Strategy {
    fn try_resolve(self, text: &str) -> Option<Ipv6Addr> {
        match self {
            Strategy::Numeric => text.parse().ok(),
            Strategy::Hostname => {
                // getaddrinfo accepts numeric text without touching DNS;
                // a literal parse first keeps that behavior.
                if let Ok(addr) = text.parse() {
                    return Some(addr);
                }
                let addrs = (text, 0u16).to_socket_addrs().ok()?;
                addrs
                    .filter_map(|sa| match sa {
                        SocketAddr::V6(v6) => Some(*v6.ip()),
                        SocketAddr::V4(_) => None,
                    })
                    .next()
            }
        }
    }
}

/// Strategies tried for a route target: numeric first, hostname fallback.
pub const TARGET_STRATEGIES: &[Strategy] = &[Strategy::Numeric, Strategy::Hostname];

/// Strategies tried for a gateway: the resolver path only.
pub const GATEWAY_STRATEGIES: &[Strategy] = &[Strategy::Hostname];

/// Resolve address text with the given strategies, in order.
///
/// Fails with a lookup error carrying the original text when every
/// strategy comes up empty.
pub fn resolve(strategies: &[Strategy], text: &str) -> Result<Ipv6Addr> {
    strategies
        .iter()
        .find_map(|s| s.try_resolve(text))
        .ok_or_else(|| Error::Lookup {
            host: text.to_string(),
        })
}
