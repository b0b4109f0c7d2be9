use std::io::{self, Write};

/// A value that knows how to write itself as RESP bytes.
///
/// Every value kind in this crate implements `Encode`, and arrays write their
/// items through [`put`], so a new value kind only needs this trait to be
/// usable anywhere, nested arrays included.
///
/// Values borrow the caller's data. The data must stay alive until `write`
/// returns, which the borrow checker already guarantees.
pub trait Encode {
  /// Appends the RESP representation of `self` to `sink`.
  ///
  /// Failures reported by the sink are returned as they are. Nothing is
  /// retried and whatever was written before the failure stays written.
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()>;

  /// Encodes `self` into a new buffer.
  fn encode(&self) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    self.write(&mut buffer)?;
    Ok(buffer)
  }
}

impl<T: Encode + ?Sized> Encode for &T {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    (**self).write(sink)
  }
}

/// Writes `value` to `sink`.
pub fn put<W, T>(sink: &mut W, value: &T) -> io::Result<()>
where
  W: Write + ?Sized,
  T: Encode + ?Sized,
{
  value.write(sink)
}
