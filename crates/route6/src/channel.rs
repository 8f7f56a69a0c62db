//! Control channel to the kernel routing stack.
//!
//! Route requests are submitted over an `AF_INET6` datagram socket with the
//! SIOCADDRT/SIOCDELRT ioctls. The socket is a scoped handle: opened just
//! before submission and closed when the handle drops, on every exit path.

use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use crate::error::{Error, Result};
use crate::request::Inet6Rtmsg;

// Routing table ioctls (from linux/sockios.h)
const SIOCADDRT: libc::c_ulong = 0x890B;
const SIOCDELRT: libc::c_ulong = 0x890C;
const SIOCGIFINDEX: libc::c_ulong = 0x8933;

/// Scoped handle to the IPv6 routing control socket.
#[derive(Debug)]
pub struct RouteChannel {
    fd: OwnedFd,
}

impl RouteChannel {
    /// Open the control socket.
    pub fn open() -> Result<Self> {
        let fd = unsafe { libc::socket(libc::AF_INET6, libc::SOCK_DGRAM, 0) };
        if fd < 0 {
            return Err(Error::Socket(io::Error::last_os_error()));
        }
        tracing::debug!(fd, "opened inet6 route control socket");
        Ok(Self {
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        })
    }

    /// Resolve an interface name to its index.
    pub fn ifindex(&self, name: &str) -> Result<libc::c_int> {
        let mut ifr: libc::ifreq = unsafe { std::mem::zeroed() };

        let bytes = name.as_bytes();
        if bytes.is_empty() || bytes.len() >= ifr.ifr_name.len() {
            return Err(Error::InterfaceNotFound {
                name: name.to_string(),
            });
        }
        let name_slice = unsafe { &mut *(&mut ifr.ifr_name as *mut [libc::c_char] as *mut [u8]) };
        name_slice[..bytes.len()].copy_from_slice(bytes);

        let ret = unsafe { libc::ioctl(self.fd.as_raw_fd(), SIOCGIFINDEX, &mut ifr) };
        if ret < 0 {
            return Err(Error::InterfaceNotFound {
                name: name.to_string(),
            });
        }

        let index = unsafe { ifr.ifr_ifru.ifru_ifindex };
        tracing::debug!(name, index, "resolved interface index");
        Ok(index)
    }

    /// Submit an add request.
    pub fn add(&self, request: &Inet6Rtmsg) -> Result<()> {
        self.submit("SIOCADDRT", SIOCADDRT, request)
    }

    /// Submit a delete request.
    pub fn delete(&self, request: &Inet6Rtmsg) -> Result<()> {
        self.submit("SIOCDELRT", SIOCDELRT, request)
    }

    fn submit(&self, name: &'static str, op: libc::c_ulong, request: &Inet6Rtmsg) -> Result<()> {
        let ret = unsafe { libc::ioctl(self.fd.as_raw_fd(), op, request as *const Inet6Rtmsg) };
        if ret < 0 {
            return Err(Error::ioctl(name, io::Error::last_os_error()));
        }
        tracing::debug!(ioctl = name, "route request accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open() {
        // Opening the control socket needs no privileges.
        RouteChannel::open().unwrap();
    }

    #[test]
    fn test_ifindex_loopback() {
        let chan = RouteChannel::open().unwrap();
        assert!(chan.ifindex("lo").unwrap() >= 1);
    }

    #[test]
    fn test_ifindex_missing_interface() {
        let chan = RouteChannel::open().unwrap();
        match chan.ifindex("does-not-exist0") {
            Err(Error::InterfaceNotFound { name }) => assert_eq!(name, "does-not-exist0"),
            other => panic!("expected interface error, got {other:?}"),
        }
    }

    #[test]
    fn test_ifindex_rejects_overlong_name() {
        let chan = RouteChannel::open().unwrap();
        assert!(chan.ifindex("this-name-is-way-too-long").is_err());
    }
}
