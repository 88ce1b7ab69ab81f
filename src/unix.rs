use std::{io, marker::PhantomData, net::Ipv4Addr, ptr};

use smallvec_wrapper::SmallVec;

use crate::{
  record::{collect_ipv4, RawRecord},
  EnumerationError,
};

/// Owned `getifaddrs(3)` list. The OS allocation is released exactly
/// once, on every exit path, when the guard drops.
pub(crate) struct IfAddrs {
  head: *mut libc::ifaddrs,
}

impl IfAddrs {
  pub(crate) fn fetch() -> Result<Self, EnumerationError> {
    let mut head = ptr::null_mut();
    if unsafe { libc::getifaddrs(&mut head) } != 0 {
      return Err(EnumerationError::from(io::Error::last_os_error()));
    }
    Ok(Self { head })
  }

  pub(crate) fn iter(&self) -> Iter<'_> {
    Iter {
      next: self.head,
      _list: PhantomData,
    }
  }
}

impl Drop for IfAddrs {
  fn drop(&mut self) {
    // A host with no interfaces leaves `head` null.
    if !self.head.is_null() {
      unsafe { libc::freeifaddrs(self.head) };
    }
  }
}

pub(crate) struct Iter<'a> {
  next: *mut libc::ifaddrs,
  _list: PhantomData<&'a IfAddrs>,
}

impl Iterator for Iter<'_> {
  type Item = RawRecord;

  fn next(&mut self) -> Option<Self::Item> {
    if self.next.is_null() {
      return None;
    }

    let ent = unsafe { &*self.next };
    self.next = ent.ifa_next;

    if ent.ifa_addr.is_null() {
      return Some(RawRecord::no_addr());
    }

    let family = unsafe { (*ent.ifa_addr).sa_family } as i32;
    if family != libc::AF_INET {
      return Some(RawRecord::other(family));
    }

    let sin = unsafe { &*(ent.ifa_addr as *const libc::sockaddr_in) };
    Some(RawRecord::ipv4(sin.sin_addr.s_addr.to_ne_bytes()))
  }
}

pub(crate) fn ipv4_addr_table<F>(
  max_addrs: usize,
  f: F,
) -> Result<SmallVec<Ipv4Addr>, EnumerationError>
where
  F: FnMut(&Ipv4Addr) -> bool,
{
  let list = IfAddrs::fetch()?;
  Ok(collect_ipv4(list.iter(), max_addrs, f))
}

#[cfg(test)]
mod tests {
  use super::IfAddrs;

  #[test]
  fn fetch_succeeds_on_the_host() {
    let list = IfAddrs::fetch().unwrap();
    // Every entry is classified; none are silently dropped by the
    // iterator itself.
    let n = list.iter().count();
    let again = list.iter().count();
    assert_eq!(n, again);
  }
}
