//! Sending commands to a Redis Server
//!
//! How the interaction between the client and the server works:
//!
//! A client sends the Redis server a RESP Array consisting of just Bulk Strings.
//! A Redis server replies to clients sending any valid RESP data type as reply.
//!
//! Several commands can be sent at once without waiting for the replies in between,
//! which is called pipelining. The replies come back in the same order.
//!
//! # Examples
//!
//! The client sends the command LLEN mylist in order to get the length
//! of the list stored at key mylist, and the server replies with an integer
//! reply:
//!
//! ```terminal
//! client: "*2\r\n$4\r\nLLEN\r\n$6\r\nmylist\r\n" -- the request
//! server: ":48293\r\n"                         -- the reply
//! ```
use std::io;

use miette::Diagnostic;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::encode::{put, Encode};
use crate::marker;

const READ_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Diagnostic, Error)]
pub enum ClientError {
  #[error("failed to connect to {addr}")]
  #[diagnostic(code(redis_resp::connect))]
  Connect {
    addr: String,
    #[source]
    source: io::Error,
  },
  #[error("failed to encode the command")]
  #[diagnostic(code(redis_resp::encode))]
  Encode(#[source] io::Error),
  #[error("failed to write to the connection")]
  #[diagnostic(code(redis_resp::write))]
  Write(#[source] io::Error),
  #[error("failed to read the reply")]
  #[diagnostic(code(redis_resp::read))]
  Read(#[source] io::Error),
  #[error("the server closed the connection")]
  #[diagnostic(code(redis_resp::closed))]
  Closed,
  #[error("unexpected byte {0:#04x} at the start of a reply")]
  #[diagnostic(code(redis_resp::reply))]
  UnexpectedByte(u8),
  #[error("invalid length in a reply")]
  #[diagnostic(code(redis_resp::reply))]
  InvalidLength,
}

/// Commands encoded back to back, waiting to be sent in a single write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
  buffer: Vec<u8>,
  commands: usize,
}

impl Pipeline {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends `command` after the commands already in the pipeline.
  ///
  /// If encoding fails, the pipeline is left as it was before the call.
  pub fn push<T: Encode + ?Sized>(&mut self, command: &T) -> io::Result<&mut Self> {
    let start = self.buffer.len();

    if let Err(error) = put(&mut self.buffer, command) {
      self.buffer.truncate(start);
      return Err(error);
    }

    self.commands += 1;
    Ok(self)
  }

  /// Returns the number of commands in the pipeline.
  pub fn len(&self) -> usize {
    self.commands
  }

  pub fn is_empty(&self) -> bool {
    self.commands == 0
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.buffer
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
    self.commands = 0;
  }
}

#[derive(Debug)]
pub struct Redis {
  stream: TcpStream,
  /// Bytes read from the stream that belong to replies not returned yet.
  buffer: Vec<u8>,
}

impl Redis {
  pub async fn connect(addr: &str) -> Result<Self, ClientError> {
    info!(addr, "connecting");

    let stream = TcpStream::connect(addr)
      .await
      .map_err(|source| ClientError::Connect {
        addr: addr.to_owned(),
        source,
      })?;

    info!(addr, "connected");

    Ok(Self {
      stream,
      buffer: Vec::new(),
    })
  }

  /// Sends one command and returns the raw bytes of its reply.
  pub async fn send<T: Encode + ?Sized>(&mut self, command: &T) -> Result<Vec<u8>, ClientError> {
    let encoded_command = command.encode().map_err(ClientError::Encode)?;

    info!(bytes = encoded_command.len(), "sending command");

    self.write(&encoded_command).await?;

    self.read_replies(1).await
  }

  /// Sends every command in `pipeline` with a single write and returns the raw
  /// bytes of all of their replies, one after the other.
  pub async fn send_pipeline(&mut self, pipeline: &Pipeline) -> Result<Vec<u8>, ClientError> {
    info!(commands = pipeline.len(), "sending pipeline");

    self.write(pipeline.as_bytes()).await?;

    self.read_replies(pipeline.len()).await
  }

  async fn write(&mut self, bytes: &[u8]) -> Result<(), ClientError> {
    debug!("sending RESP: {}", escape(bytes));

    self
      .stream
      .write_all(bytes)
      .await
      .map_err(ClientError::Write)
  }

  /// Reads until `count` complete replies are buffered and returns them.
  ///
  /// Bytes after the last of them stay buffered for the next call.
  async fn read_replies(&mut self, count: usize) -> Result<Vec<u8>, ClientError> {
    let mut chunk = vec![0; READ_BUFFER_SIZE];

    loop {
      if let Some(end) = replies_end(&self.buffer, count)? {
        let rest = self.buffer.split_off(end);
        let replies = std::mem::replace(&mut self.buffer, rest);

        info!(count, "replies: {}", escape(&replies));

        return Ok(replies);
      }

      let bytes_read = self
        .stream
        .read(&mut chunk)
        .await
        .map_err(ClientError::Read)?;

      if bytes_read == 0 {
        return Err(ClientError::Closed);
      }

      self.buffer.extend_from_slice(&chunk[..bytes_read]);
    }
  }
}

/// Returns where the first `count` replies in `buf` end, or `None` if they have
/// not been received completely yet.
fn replies_end(buf: &[u8], count: usize) -> Result<Option<usize>, ClientError> {
  let mut position = 0;

  for _ in 0..count {
    match reply_end(buf, position)? {
      Some(end) => position = end,
      None => return Ok(None),
    }
  }

  Ok(Some(position))
}

/// Finds where the reply starting at `position` ends without decoding it.
fn reply_end(buf: &[u8], position: usize) -> Result<Option<usize>, ClientError> {
  let tag = match buf.get(position) {
    Some(tag) => *tag,
    None => return Ok(None),
  };

  let line_end = match find_crlf(buf, position + 1) {
    Some(line_end) => line_end,
    None => return Ok(None),
  };

  let next = line_end + marker::CRLF.len();

  match tag {
    marker::SIMPLE_STRING | marker::ERROR_MESSAGE | marker::INTEGER => Ok(Some(next)),
    marker::BULK_STRING => {
      let length = match length(&buf[position + 1..line_end])? {
        Some(length) => length,
        None => return Ok(Some(next)),
      };

      let end = next.saturating_add(length).saturating_add(marker::CRLF.len());

      Ok(if buf.len() >= end { Some(end) } else { None })
    }
    marker::ARRAY => match length(&buf[position + 1..line_end])? {
      Some(count) => match replies_end(&buf[next..], count)? {
        Some(end) => Ok(Some(next + end)),
        None => Ok(None),
      },
      None => Ok(Some(next)),
    },
    byte => Err(ClientError::UnexpectedByte(byte)),
  }
}

/// Parses a length or count. `-1` is the null marker and gives `None`.
fn length(bytes: &[u8]) -> Result<Option<usize>, ClientError> {
  let length: i64 = std::str::from_utf8(bytes)
    .ok()
    .and_then(|text| text.parse().ok())
    .ok_or(ClientError::InvalidLength)?;

  match length {
    marker::NULL_LENGTH => Ok(None),
    length => usize::try_from(length)
      .map(Some)
      .map_err(|_| ClientError::InvalidLength),
  }
}

fn find_crlf(buf: &[u8], from: usize) -> Option<usize> {
  buf
    .get(from..)?
    .windows(marker::CRLF.len())
    .position(|window| window == marker::CRLF)
    .map(|offset| from + offset)
}

fn escape(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).escape_debug().to_string()
}
