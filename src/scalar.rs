use std::io::{self, Write};

use crate::encode::{put, Encode};
use crate::marker;

/// Simple Strings are used to transmit non binary safe strings with minimal overhead.
///
/// The text is written verbatim, so it must not contain "\r\n".
///
/// # Examples
///
/// ```terminal
/// "+OK\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleString<'a>(&'a str);

impl<'a> SimpleString<'a> {
  pub fn new(value: &'a str) -> Self {
    Self(value)
  }
}

impl<'a> From<&'a str> for SimpleString<'a> {
  fn from(value: &'a str) -> Self {
    Self::new(value)
  }
}

impl Encode for SimpleString<'_> {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    line(sink, marker::SIMPLE_STRING, self.0)
  }
}

/// Same as a Simple String but the first byte is "-".
///
/// # Examples
///
/// ```terminal
/// "-ERR unknown command 'foobar'\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessage<'a>(&'a str);

impl<'a> ErrorMessage<'a> {
  pub fn new(value: &'a str) -> Self {
    Self(value)
  }
}

impl<'a> From<&'a str> for ErrorMessage<'a> {
  fn from(value: &'a str) -> Self {
    Self::new(value)
  }
}

impl Encode for ErrorMessage<'_> {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    line(sink, marker::ERROR_MESSAGE, self.0)
  }
}

fn line<W: Write + ?Sized>(sink: &mut W, tag: u8, text: &str) -> io::Result<()> {
  sink.write_all(&[tag])?;
  sink.write_all(text.as_bytes())?;
  sink.write_all(marker::CRLF)
}

mod private {
  pub trait Sealed {}
}

/// Primitive integer types that can be sent as a RESP Integer.
///
/// Values are converted with `as i64`: unsigned values above `i64::MAX` wrap
/// (`u64::MAX` is sent as `-1`) and 128 bit values keep their low 64 bits.
pub trait Integral: Copy + private::Sealed {
  fn to_i64(self) -> i64;
}

macro_rules! integral {
  ($($t:ty),+) => {
    $(
      impl private::Sealed for $t {}

      impl Integral for $t {
        #[inline]
        fn to_i64(self) -> i64 {
          self as i64
        }
      }
    )+
  };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A signed 64 bit integer, the first byte is ":".
///
/// # Examples
///
/// ```terminal
/// ":0\r\n"
/// ":1000\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer(i64);

impl Integer {
  pub fn new<T: Integral>(value: T) -> Self {
    Self(value.to_i64())
  }

  pub fn value(&self) -> i64 {
    self.0
  }
}

impl Encode for Integer {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    marker::header(sink, marker::INTEGER, self.0)
  }
}

/// Bulk Strings are used in order to represent a single binary safe string.
///
/// A "$" byte followed by the number of bytes composing the string (a prefixed length), terminated by CRLF.
/// The actual string data.
/// A final CRLF.
///
/// A missing value is sent as the Null Bulk String, which is not the same thing as
/// the empty string.
///
/// # Examples
///
/// ```terminal
/// "$6\r\nfoobar\r\n"
/// "$0\r\n\r\n"
/// "$-1\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkString<'a>(Option<&'a str>);

impl<'a> BulkString<'a> {
  pub fn new(value: &'a str) -> Self {
    Self(Some(value))
  }

  pub fn null() -> Self {
    Self(None)
  }

  pub fn is_null(&self) -> bool {
    self.0.is_none()
  }
}

impl<'a> From<&'a str> for BulkString<'a> {
  fn from(value: &'a str) -> Self {
    Self::new(value)
  }
}

impl<'a> From<Option<&'a str>> for BulkString<'a> {
  fn from(value: Option<&'a str>) -> Self {
    Self(value)
  }
}

impl Encode for BulkString<'_> {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    bulk(sink, self.0.map(str::as_bytes))
  }
}

/// Raw bytes sent with the same framing as a Bulk String.
///
/// Use this instead of [`BulkString`] when the payload is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryData<'a>(Option<&'a [u8]>);

impl<'a> BinaryData<'a> {
  pub fn new(value: &'a [u8]) -> Self {
    Self(Some(value))
  }

  pub fn null() -> Self {
    Self(None)
  }

  pub fn is_null(&self) -> bool {
    self.0.is_none()
  }
}

impl<'a> From<&'a [u8]> for BinaryData<'a> {
  fn from(value: &'a [u8]) -> Self {
    Self::new(value)
  }
}

impl<'a> From<Option<&'a [u8]>> for BinaryData<'a> {
  fn from(value: Option<&'a [u8]>) -> Self {
    Self(value)
  }
}

impl Encode for BinaryData<'_> {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    bulk(sink, self.0)
  }
}

fn bulk<W: Write + ?Sized>(sink: &mut W, value: Option<&[u8]>) -> io::Result<()> {
  match value {
    Some(bytes) => {
      marker::header(sink, marker::BULK_STRING, bytes.len())?;
      sink.write_all(bytes)?;
      sink.write_all(marker::CRLF)
    }
    None => marker::header(sink, marker::BULK_STRING, marker::NULL_LENGTH),
  }
}

/// The Null Bulk String, for callers that want an explicit "no value".
///
/// # Examples
///
/// ```terminal
/// "$-1\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

impl Encode for Null {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    put(sink, &BulkString::null())
  }
}
