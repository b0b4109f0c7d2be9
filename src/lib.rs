//! Redis Serialization Protocol (RESP) encoder.
//!
//! Typed values are turned into the exact bytes a RESP server reads: each
//! kind starts with its own marker byte, lengths and counts are written as
//! decimal text, and every part ends with "\r\n". A command is usually an
//! [`Array`] of [`BulkString`]s.
//!
//! Every value kind in this crate borrows the caller's data and implements
//! [`Encode`], which writes it to any [`std::io::Write`] sink. Nothing is
//! buffered or kept between calls, so several commands can be written to the
//! same sink back to back (pipelining) as long as the caller does not write
//! to it from more than one thread at a time.
//!
//! ```
//! use redis_resp::{put, Array, BulkString, Integer};
//!
//! let mut sink = Vec::new();
//!
//! put(&mut sink, &Array::new((BulkString::new("SETEX"), BulkString::new("mykey"), Integer::new(10), BulkString::new("Hello")))).unwrap();
//! put(&mut sink, &Array::new((BulkString::new("GET"), BulkString::new("mykey")))).unwrap();
//!
//! assert_eq!(
//!   &b"*4\r\n$5\r\nSETEX\r\n$5\r\nmykey\r\n:10\r\n$5\r\nHello\r\n*2\r\n$3\r\nGET\r\n$5\r\nmykey\r\n"[..],
//!   &sink[..]
//! );
//! ```
mod array;
mod config;
mod encode;
pub mod marker;
mod redis;
mod scalar;

pub use array::{Array, ListArray, NullArray};
pub use config::Config;
pub use encode::{put, Encode};
pub use redis::{ClientError, Pipeline, Redis};
pub use scalar::{BinaryData, BulkString, ErrorMessage, Integer, Integral, Null, SimpleString};
