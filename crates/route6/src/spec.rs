//! Route specification parsing.
//!
//! Implements the net-tools route grammar: a mandatory target first
//! (`default`, `ADDR`, or `ADDR/LEN`), then keyword clauses in any order
//! (`gw`/`gateway`, `metric`, `mod`, `dyn`, `dev`/`device`), with a single
//! bare trailing token accepted as an implicit device name.

use std::net::Ipv6Addr;

use crate::error::{Error, Result};
use crate::resolve::{self, GATEWAY_STRATEGIES, TARGET_STRATEGIES};

/// Additive route attribute flags.
///
/// The kernel's RTF_UP bit is always set at request build time and is not
/// tracked here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteFlags {
    /// Destination is reached via a gateway (RTF_GATEWAY).
    pub gateway: bool,
    /// Route was modified dynamically (RTF_MODIFIED).
    pub modified: bool,
    /// Route was installed by a redirect (RTF_DYNAMIC).
    pub dynamic: bool,
}

/// An IPv6 route specification parsed from CLI tokens.
///
/// Built empty at the start of one invocation, populated token by token,
/// and consumed exactly once when the kernel request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// Destination network address.
    pub destination: Ipv6Addr,
    /// Destination prefix length, 0..=128.
    pub prefix_len: u8,
    /// Next-hop address, if routed via a gateway.
    pub gateway: Option<Ipv6Addr>,
    /// Route metric; defaults to 1 like the kernel's own routes.
    pub metric: u32,
    /// Attribute flags accumulated from the token stream.
    pub flags: RouteFlags,
    /// Output device name, resolved to an index only at submission time.
    pub device: Option<String>,
}

impl RouteSpec {
    fn new(destination: Ipv6Addr, prefix_len: u8) -> Self {
        Self {
            destination,
            prefix_len,
            gateway: None,
            metric: 1,
            flags: RouteFlags::default(),
            device: None,
        }
    }
}

/// Parse the target token: `default`, `ADDR`, or `ADDR/LEN`.
///
/// The prefix length is range-checked before any address resolution is
/// attempted; a bare `ADDR` is a host route (/128).
fn parse_target(token: &str) -> Result<RouteSpec> {
    if token == "default" {
        return Ok(RouteSpec::new(Ipv6Addr::UNSPECIFIED, 0));
    }

    let (addr_text, prefix_len) = match token.split_once('/') {
        Some((addr, len_text)) => {
            let len: u16 = len_text
                .parse()
                .map_err(|_| Error::usage(format!("invalid prefix length: {len_text}")))?;
            if len > 128 {
                return Err(Error::usage(format!("invalid prefix length: {len}")));
            }
            (addr, len as u8)
        }
        None => (token, 128),
    };

    let addr = resolve::resolve(TARGET_STRATEGIES, addr_text)?;
    Ok(RouteSpec::new(addr, prefix_len))
}

/// Parse an ordered token stream into a route specification.
///
/// Any malformed clause aborts the whole parse; no partial specification
/// ever reaches the kernel.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<RouteSpec> {
    let Some(target) = tokens.first() else {
        return Err(Error::usage("route specification needs a target"));
    };
    let mut spec = parse_target(target.as_ref())?;

    let next_value = |i: usize, keyword: &str| -> Result<&str> {
        tokens
            .get(i + 1)
            .map(AsRef::as_ref)
            .ok_or_else(|| Error::usage(format!("{keyword} needs a value")))
    };

    let mut i = 1;
    while i < tokens.len() {
        match tokens[i].as_ref() {
            "metric" => {
                let value = next_value(i, "metric")?;
                if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::usage(format!("invalid metric: {value}")));
                }
                spec.metric = value
                    .parse()
                    .map_err(|_| Error::usage(format!("metric out of range: {value}")))?;
                i += 2;
            }
            "gw" | "gateway" => {
                let value = next_value(i, "gw")?;
                if spec.flags.gateway {
                    return Err(Error::usage("gateway already specified"));
                }
                spec.gateway = Some(resolve::resolve(GATEWAY_STRATEGIES, value)?);
                spec.flags.gateway = true;
                i += 2;
            }
            "mod" => {
                spec.flags.modified = true;
                i += 1;
            }
            "dyn" => {
                spec.flags.dynamic = true;
                i += 1;
            }
            "dev" | "device" => {
                spec.device = Some(next_value(i, "dev")?.to_string());
                i += 2;
            }
            bare => {
                // A bare word is only accepted as an implicit device name
                // when nothing follows it; the grammar cannot disambiguate
                // further tokens after an unrecognized word.
                if i + 1 != tokens.len() {
                    return Err(Error::usage(format!("unrecognized token: {bare}")));
                }
                spec.device = Some(bare.to_string());
                i += 1;
            }
        }
    }

    Ok(spec)
}
