//! RESP Arrays are sent using the following format:
//!
//! A "*" character as the first byte, followed by the number of elements in the array as a decimal number, followed by CRLF.
//! An additional RESP type for every element of the Array.
//!
//! The number of elements has to be known before any element is written, so each
//! way of building an array gets its own type:
//!
//! - [`Array`] holds a fixed tuple of values whose arity is the count.
//! - [`ListArray`] holds a list of text items that is walked once to count it and
//!   once more to write it.
//! - [`NullArray`] is the Null Array, which is not the same thing as an empty array.
use std::io::{self, Write};

use crate::encode::{put, Encode};
use crate::marker;
use crate::scalar::SimpleString;

/// An array made of a fixed tuple of values, possibly of different types.
///
/// # Examples
///
/// ```
/// use redis_resp::{Array, BulkString, Encode};
///
/// let command = Array::new((BulkString::new("LLEN"), BulkString::new("mylist")));
///
/// assert_eq!(
///   b"*2\r\n$4\r\nLLEN\r\n$6\r\nmylist\r\n".to_vec(),
///   command.encode().unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Array<T>(T);

impl<T> Array<T> {
  pub fn new(items: T) -> Self {
    Self(items)
  }
}

impl Encode for Array<()> {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    marker::header(sink, marker::ARRAY, 0)
  }
}

macro_rules! tuple_array {
  ($len:literal => $($item:ident: $name:ident),+) => {
    impl<$($name: Encode),+> Encode for Array<($($name,)+)> {
      fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let ($($item,)+) = &self.0;
        marker::header(sink, marker::ARRAY, $len)?;
        $(put(sink, $item)?;)+
        Ok(())
      }
    }
  };
}

tuple_array!(1 => a: A);
tuple_array!(2 => a: A, b: B);
tuple_array!(3 => a: A, b: B, c: C);
tuple_array!(4 => a: A, b: B, c: C, d: D);
tuple_array!(5 => a: A, b: B, c: C, d: D, e: E);
tuple_array!(6 => a: A, b: B, c: C, d: D, e: E, f: F);
tuple_array!(7 => a: A, b: B, c: C, d: D, e: E, f: F, g: G);
tuple_array!(8 => a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
tuple_array!(9 => a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);
tuple_array!(10 => a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J);
tuple_array!(11 => a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K);
tuple_array!(12 => a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J, k: K, l: L);

/// An array of text items whose length is only known by walking them.
///
/// Every item is sent as a Simple String. `items` is cloned and walked twice, once
/// to count and once to write, so it has to yield the same items each time. Borrowed
/// collections (`&Vec<String>`, `&LinkedList<&str>`, `&[&str]`) and their iterators
/// do. A source that can only be read once has to be collected first.
///
/// # Examples
///
/// ```
/// use std::collections::LinkedList;
/// use redis_resp::{Encode, ListArray};
///
/// let list: LinkedList<&str> = ["foo", "bar"].into_iter().collect();
///
/// assert_eq!(
///   b"*2\r\n+foo\r\n+bar\r\n".to_vec(),
///   ListArray::new(&list).encode().unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListArray<I>(I);

impl<I> ListArray<I>
where
  I: IntoIterator + Clone,
  I::Item: AsRef<str>,
{
  pub fn new(items: I) -> Self {
    Self(items)
  }
}

impl<I> Encode for ListArray<I>
where
  I: IntoIterator + Clone,
  I::Item: AsRef<str>,
{
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    let count = self.0.clone().into_iter().count();

    marker::header(sink, marker::ARRAY, count)?;

    for item in self.0.clone() {
      put(sink, &SimpleString::new(item.as_ref()))?;
    }

    Ok(())
  }
}

/// The Null Array.
///
/// # Examples
///
/// ```terminal
/// "*-1\r\n"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullArray;

impl Encode for NullArray {
  fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
    marker::header(sink, marker::ARRAY, marker::NULL_LENGTH)
  }
}

#[cfg(test)]
mod tests {
  use std::collections::LinkedList;

  use super::*;
  use crate::scalar::{BinaryData, BulkString, ErrorMessage, Integer, Null};

  fn encoded<T: Encode>(value: T) -> String {
    String::from_utf8(value.encode().unwrap()).unwrap()
  }

  #[test]
  fn fixed_array() {
    let tests = vec![
      (encoded(Array::new(())), "*0\r\n"),
      (
        encoded(Array::new((BulkString::new("foo"), BulkString::new("bar")))),
        "*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n",
      ),
      (
        encoded(Array::new((Integer::new(1), Integer::new(2), Integer::new(3)))),
        "*3\r\n:1\r\n:2\r\n:3\r\n",
      ),
      (
        encoded(Array::new((
          BulkString::new("foo"),
          Integer::new(1),
          Integer::new(2),
        ))),
        "*3\r\n$3\r\nfoo\r\n:1\r\n:2\r\n",
      ),
      (
        encoded(Array::new((
          BulkString::new("foo"),
          Null,
          BulkString::new("bar"),
        ))),
        "*3\r\n$3\r\nfoo\r\n$-1\r\n$3\r\nbar\r\n",
      ),
      (
        encoded(Array::new((BulkString::new("PING"),))),
        "*1\r\n$4\r\nPING\r\n",
      ),
    ];

    for (actual, expected) in tests {
      assert_eq!(expected, actual);
    }
  }

  #[test]
  fn fixed_array_is_concatenation_of_items() {
    let a = SimpleString::new("a");
    let b = Integer::new(-7);
    let c = BinaryData::new(b"\0\xff");

    let mut expected = b"*3\r\n".to_vec();
    expected.extend(a.encode().unwrap());
    expected.extend(b.encode().unwrap());
    expected.extend(c.encode().unwrap());

    assert_eq!(expected, Array::new((a, b, c)).encode().unwrap());
  }

  #[test]
  fn nested_arrays() {
    let value = Array::new((
      Array::new((Integer::new(1), Integer::new(2), Integer::new(3))),
      Array::new((SimpleString::new("Foo"), ErrorMessage::new("Bar"))),
    ));

    assert_eq!(
      "*2\r\n*3\r\n:1\r\n:2\r\n:3\r\n*2\r\n+Foo\r\n-Bar\r\n",
      encoded(value)
    );
  }

  #[test]
  fn nested_list_and_null_arrays() {
    let keys = vec!["k1", "k2"];

    let value = Array::new((
      BulkString::new("reply"),
      ListArray::new(&keys),
      NullArray,
      Array::new(()),
    ));

    assert_eq!(
      "*4\r\n$5\r\nreply\r\n*2\r\n+k1\r\n+k2\r\n*-1\r\n*0\r\n",
      encoded(value)
    );
  }

  #[test]
  fn twelve_items() {
    let one = Integer::new(1);
    let value = Array::new((one, one, one, one, one, one, one, one, one, one, one, one));

    assert_eq!(format!("*12\r\n{}", ":1\r\n".repeat(12)), encoded(value));
  }

  #[test]
  fn borrowed_items() {
    let foo = BulkString::new("foo");

    assert_eq!("*2\r\n$3\r\nfoo\r\n$3\r\nfoo\r\n", encoded(Array::new((&foo, &foo))));
  }

  #[test]
  fn list_array() {
    let linked: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();
    let owned = vec![String::from("hello"), String::from("world")];
    let empty: Vec<&str> = Vec::new();

    let tests = vec![
      (encoded(ListArray::new(&linked)), "*3\r\n+a\r\n+b\r\n+c\r\n"),
      (encoded(ListArray::new(&owned)), "*2\r\n+hello\r\n+world\r\n"),
      (encoded(ListArray::new(["OK"])), "*1\r\n+OK\r\n"),
      (encoded(ListArray::new(owned.iter())), "*2\r\n+hello\r\n+world\r\n"),
      (encoded(ListArray::new(&empty)), "*0\r\n"),
    ];

    for (actual, expected) in tests {
      assert_eq!(expected, actual);
    }
  }

  #[test]
  fn list_array_can_be_written_twice() {
    let items = vec!["x", "y"];
    let array = ListArray::new(&items);

    let mut sink = Vec::new();
    array.write(&mut sink).unwrap();
    array.write(&mut sink).unwrap();

    assert_eq!(b"*2\r\n+x\r\n+y\r\n*2\r\n+x\r\n+y\r\n", &sink[..]);
  }

  #[test]
  fn null_array() {
    assert_eq!("*-1\r\n", encoded(NullArray));
  }

  #[test]
  fn empty_array_is_not_null_array() {
    let empty: [&str; 0] = [];

    assert_ne!(encoded(NullArray), encoded(ListArray::new(empty)));
    assert_ne!(encoded(NullArray), encoded(Array::new(())));
    assert_eq!(encoded(Array::new(())), encoded(ListArray::new(empty)));
  }
}
