use std::net::Ipv4Addr;

use smallvec_wrapper::SmallVec;

/// One entry from the OS interface list: the address family the OS
/// reported and, for IPv4 entries, the four network-order octets of
/// `sin_addr`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord {
  family: i32,
  octets: Option<[u8; 4]>,
}

impl RawRecord {
  #[inline]
  pub(crate) const fn ipv4(octets: [u8; 4]) -> Self {
    Self {
      family: libc::AF_INET,
      octets: Some(octets),
    }
  }

  #[inline]
  pub(crate) const fn other(family: i32) -> Self {
    Self {
      family,
      octets: None,
    }
  }

  /// Interface entries can carry a null `ifa_addr` (e.g. a TUN device
  /// mid-configuration); they still occupy a list node.
  #[inline]
  pub(crate) const fn no_addr() -> Self {
    Self {
      family: libc::AF_UNSPEC,
      octets: None,
    }
  }
}

/// Bounded single-pass scan over an interface list.
///
/// Stops before examining the next entry once `max_addrs` addresses have
/// been collected. Entries whose family is not `AF_INET`, entries with no
/// address, and addresses rejected by `keep` do not consume a slot.
pub(crate) fn collect_ipv4<I, F>(records: I, max_addrs: usize, mut keep: F) -> SmallVec<Ipv4Addr>
where
  I: IntoIterator<Item = RawRecord>,
  F: FnMut(&Ipv4Addr) -> bool,
{
  let mut out = SmallVec::new();
  for rec in records {
    if out.len() == max_addrs {
      break;
    }

    if rec.family != libc::AF_INET {
      continue;
    }

    if let Some(octets) = rec.octets {
      let addr = Ipv4Addr::from(octets);
      if keep(&addr) {
        out.push(addr);
      }
    }
  }

  out
}
