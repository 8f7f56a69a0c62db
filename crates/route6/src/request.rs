//! Kernel route request record.
//!
//! [`Inet6Rtmsg`] mirrors `struct in6_rtmsg` from `linux/ipv6_route.h`; the
//! kernel reads it straight out of the SIOCADDRT/SIOCDELRT ioctl argument,
//! so the layout must match field for field.

use crate::spec::{RouteFlags, RouteSpec};

// Route flag bits (from linux/route.h)
/// Route is usable.
pub const RTF_UP: u32 = 0x0001;
/// Destination is reached via a gateway.
pub const RTF_GATEWAY: u32 = 0x0002;
/// Route created dynamically (by redirect).
pub const RTF_DYNAMIC: u32 = 0x0010;
/// Route modified dynamically (by redirect).
pub const RTF_MODIFIED: u32 = 0x0020;

impl RouteFlags {
    /// Kernel flag bits for this flag set. RTF_UP is not included; the
    /// request builder sets it unconditionally.
    pub(crate) fn as_bits(&self) -> u32 {
        let mut bits = 0;
        if self.gateway {
            bits |= RTF_GATEWAY;
        }
        if self.modified {
            bits |= RTF_MODIFIED;
        }
        if self.dynamic {
            bits |= RTF_DYNAMIC;
        }
        bits
    }
}

/// IPv6 route request, layout-compatible with the kernel's `in6_rtmsg`.
///
/// Always built in full from a [`RouteSpec`] before any channel call; a
/// partially populated request never reaches the kernel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inet6Rtmsg {
    /// Destination address bytes.
    pub rtmsg_dst: [u8; 16],
    /// Source address bytes (unused, always zero).
    pub rtmsg_src: [u8; 16],
    /// Gateway address bytes (zero when no gateway).
    pub rtmsg_gateway: [u8; 16],
    /// Route type (unused by the ioctl interface).
    pub rtmsg_type: u32,
    /// Destination prefix length.
    pub rtmsg_dst_len: u16,
    /// Source prefix length (unused, always zero).
    pub rtmsg_src_len: u16,
    /// Route metric.
    pub rtmsg_metric: u32,
    /// Opaque route info (unused, always zero).
    pub rtmsg_info: libc::c_ulong,
    /// RTF_* flag bitmask.
    pub rtmsg_flags: u32,
    /// Output interface index; 0 lets the kernel choose.
    pub rtmsg_ifindex: libc::c_int,
}

impl Inet6Rtmsg {
    fn zeroed() -> Self {
        // All-zero is a valid value for every field.
        unsafe { std::mem::zeroed() }
    }

    /// Build a kernel request from a parsed specification and a resolved
    /// interface index (0 means "kernel chooses the device").
    ///
    /// RTF_UP is always set; add and delete submissions use the identical
    /// record.
    pub fn from_spec(spec: &RouteSpec, ifindex: libc::c_int) -> Self {
        let mut rt = Self::zeroed();
        rt.rtmsg_dst = spec.destination.octets();
        rt.rtmsg_dst_len = spec.prefix_len as u16;
        rt.rtmsg_metric = spec.metric;
        rt.rtmsg_flags = RTF_UP | spec.flags.as_bits();
        if let Some(gateway) = spec.gateway {
            rt.rtmsg_gateway = gateway.octets();
        }
        rt.rtmsg_ifindex = ifindex;
        rt
    }
}
