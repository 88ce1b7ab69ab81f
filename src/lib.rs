#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]

use std::net::{IpAddr, Ipv4Addr};

use iprfc::{FORWARDING_BLACKLIST, RFC6890};

pub use error::EnumerationError;
pub use smallvec_wrapper::SmallVec;

mod error;
mod record;

#[cfg(unix)]
#[path = "unix.rs"]
mod os;

/// Returns up to `max_addrs` IPv4 addresses assigned to the host's
/// network interfaces, in the order the operating system reports them.
///
/// The scan stops as soon as `max_addrs` addresses have been collected,
/// so `max_addrs == 0` returns an empty result without error. Entries of
/// any other address family never consume a capacity slot.
///
/// A failed OS query is reported as [`EnumerationError`]; an empty result
/// always means "no IPv4 addresses configured".
///
/// See also [`ipv4_addrs_by_filter`] and [`fill_ipv4_addrs`].
///
/// ## Example
///
/// ```rust
/// use localaddrs::ipv4_addrs;
///
/// let addrs = ipv4_addrs(16).unwrap();
/// for addr in addrs {
///   println!("{addr}");
/// }
/// ```
pub fn ipv4_addrs(max_addrs: usize) -> Result<SmallVec<Ipv4Addr>, EnumerationError> {
  os::ipv4_addr_table(max_addrs, |_| true)
}

/// Returns up to `max_addrs` IPv4 addresses accepted by the provided
/// filter, in the order the operating system reports them.
///
/// Addresses rejected by the filter do not consume a capacity slot.
///
/// ## Example
///
/// ```rust
/// use localaddrs::ipv4_addrs_by_filter;
///
/// let addrs = ipv4_addrs_by_filter(16, |addr| !addr.is_loopback()).unwrap();
/// for addr in addrs {
///   println!("{addr}");
/// }
/// ```
pub fn ipv4_addrs_by_filter<F>(
  max_addrs: usize,
  f: F,
) -> Result<SmallVec<Ipv4Addr>, EnumerationError>
where
  F: FnMut(&Ipv4Addr) -> bool,
{
  os::ipv4_addr_table(max_addrs, f)
}

/// Writes the host's IPv4 addresses into the front of `buf` and returns
/// the number of addresses written.
///
/// The capacity bound is `buf.len()`; slots past the returned count are
/// left untouched. An empty buffer yields a count of zero without
/// querying beyond the capacity check.
///
/// ## Example
///
/// ```rust
/// use std::net::Ipv4Addr;
///
/// use localaddrs::fill_ipv4_addrs;
///
/// let mut buf = [Ipv4Addr::UNSPECIFIED; 8];
/// let n = fill_ipv4_addrs(&mut buf).unwrap();
/// println!("{:?}", &buf[..n]);
/// ```
pub fn fill_ipv4_addrs(buf: &mut [Ipv4Addr]) -> Result<usize, EnumerationError> {
  let addrs = os::ipv4_addr_table(buf.len(), |_| true)?;
  let n = addrs.len();
  buf[..n].copy_from_slice(&addrs);
  Ok(n)
}

/// Returns up to `max_addrs` IPv4 addresses that are part of [RFC 6890]
/// (private-use and other special-purpose ranges), in the order the
/// operating system reports them.
///
/// ## Example
///
/// ```rust
/// use localaddrs::private_ipv4_addrs;
///
/// let addrs = private_ipv4_addrs(16).unwrap();
/// for addr in addrs {
///   println!("{addr}");
/// }
/// ```
///
/// [RFC 6890]: https://tools.ietf.org/html/rfc6890
pub fn private_ipv4_addrs(max_addrs: usize) -> Result<SmallVec<Ipv4Addr>, EnumerationError> {
  os::ipv4_addr_table(max_addrs, private_ip_filter)
}

#[inline]
fn private_ip_filter(addr: &Ipv4Addr) -> bool {
  let ip = IpAddr::V4(*addr);
  RFC6890.contains(&ip) && !FORWARDING_BLACKLIST.contains(&ip)
}
