use std::io;

/// The operating system interface query failed.
///
/// Returned when `getifaddrs` itself reports an error (resource
/// exhaustion, permission problems). A successful query that finds no
/// IPv4 addresses is not an error; it yields an empty result, so callers
/// can tell "nothing configured" apart from "enumeration failed".
#[derive(Debug, thiserror::Error)]
#[error("interface enumeration failed: {source}")]
pub struct EnumerationError {
  #[from]
  source: io::Error,
}

impl EnumerationError {
  /// Returns the [`io::ErrorKind`] reported by the failed query.
  #[inline]
  pub fn kind(&self) -> io::ErrorKind {
    self.source.kind()
  }
}

impl From<EnumerationError> for io::Error {
  fn from(err: EnumerationError) -> Self {
    err.source
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn preserves_the_os_error() {
    let raw = io::Error::from_raw_os_error(libc::EACCES);
    let kind = raw.kind();
    let err = EnumerationError::from(raw);
    assert_eq!(err.kind(), kind);

    let back = io::Error::from(err);
    assert_eq!(back.raw_os_error(), Some(libc::EACCES));
  }

  #[test]
  fn display_names_the_operation() {
    let err = EnumerationError::from(io::Error::from_raw_os_error(libc::ENOMEM));
    assert!(err.to_string().starts_with("interface enumeration failed"));
  }
}
