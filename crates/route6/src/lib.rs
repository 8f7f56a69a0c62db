//! IPv6 routing table manipulation over the classic ioctl interface.
//!
//! This crate implements the `route`-style grammar for IPv6 route add and
//! delete requests: CLI tokens are parsed into a [`RouteSpec`], converted
//! into the kernel's fixed-layout [`Inet6Rtmsg`] record, and submitted
//! through a short-lived [`RouteChannel`].
//!
//! # Example
//!
//! ```ignore
//! use route6::{RouteAction, build_and_submit};
//!
//! let tokens = ["default", "gw", "fe80::1", "dev", "eth0"];
//! build_and_submit(RouteAction::Add, &tokens)?;
//! ```
//!
//! Listing and flushing the IPv6 routing table are not supported by the
//! ioctl interface; `flush` is rejected with a distinct error.

pub mod channel;
pub mod error;
pub mod request;
pub mod resolve;
pub mod spec;

pub use channel::RouteChannel;
pub use error::{Error, Result};
pub use request::Inet6Rtmsg;
pub use spec::{RouteFlags, RouteSpec};

/// What to do with the parsed route specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// Add a route.
    Add,
    /// Delete a route.
    Delete,
    /// Flush the table (always rejected).
    Flush,
    /// Print the usage text.
    Help,
}

/// Usage text for the route grammar.
pub const USAGE: &str = "\
Usage: route del TARGET
       route add TARGET [gw GW] [metric M] [mod] [dyn] [[dev] IF]
       route flush      NOT supported";

/// Parse a route specification and submit it to the kernel.
///
/// `Flush` is rejected before any token is examined; `Help` prints the
/// usage text and succeeds. `Add` and `Delete` parse the tokens, open the
/// control channel, resolve the device name if one was given, and submit
/// exactly one request. Every failure aborts immediately; nothing partial
/// is ever submitted.
pub fn build_and_submit<S: AsRef<str>>(action: RouteAction, tokens: &[S]) -> Result<()> {
    match action {
        RouteAction::Flush => Err(Error::FlushUnsupported),
        RouteAction::Help => {
            println!("{USAGE}");
            Ok(())
        }
        RouteAction::Add | RouteAction::Delete => {
            let spec = spec::parse_tokens(tokens)?;
            let chan = RouteChannel::open()?;
            let ifindex = match spec.device.as_deref() {
                Some(name) => chan.ifindex(name)?,
                None => 0,
            };
            let request = Inet6Rtmsg::from_spec(&spec, ifindex);
            if action == RouteAction::Add {
                chan.add(&request)
            } else {
                chan.delete(&request)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_rejected_without_looking_at_tokens() {
        // Even nonsense tokens never reach the parser or the channel.
        let err = build_and_submit(RouteAction::Flush, &["not", "a", "route"]).unwrap_err();
        assert!(matches!(err, Error::FlushUnsupported));
        assert!(err.is_usage());
    }

    #[test]
    fn test_usage_error_before_channel_open() {
        let err = build_and_submit(RouteAction::Add, &["fe80::1/200"]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
    }

    #[test]
    fn test_delete_missing_target() {
        let err = build_and_submit::<&str>(RouteAction::Delete, &[]).unwrap_err();
        assert!(err.is_usage());
    }
}
