//! In RESP, the type of some data depends on the first byte.
//!
//! Every part of the protocol is terminated with "\r\n" (CRLF).
use std::fmt::Display;
use std::io::{self, Write};

pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR_MESSAGE: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

pub const CRLF: &[u8; 2] = b"\r\n";

/// Length used by both null bulk strings and null arrays.
pub const NULL_LENGTH: i64 = -1;

/// Writes `<marker><value>\r\n`.
pub(crate) fn header<W, V>(sink: &mut W, marker: u8, value: V) -> io::Result<()>
where
  W: Write + ?Sized,
  V: Display,
{
  sink.write_all(&[marker])?;
  write!(sink, "{}", value)?;
  sink.write_all(CRLF)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn header() {
    let tests = vec![
      (ARRAY, 3_i64, "*3\r\n"),
      (BULK_STRING, NULL_LENGTH, "$-1\r\n"),
      (INTEGER, 0, ":0\r\n"),
    ];

    for (marker, value, expected) in tests {
      let mut sink = Vec::new();
      super::header(&mut sink, marker, value).unwrap();
      assert_eq!(expected.as_bytes(), &sink[..]);
    }
  }
}
