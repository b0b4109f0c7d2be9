use miette::{IntoDiagnostic, Result};
use redis_resp::{Array, BulkString, Config, Pipeline, Redis};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
  std::env::set_var(
    "RUST_LOG",
    std::env::var("RUST_LOG").unwrap_or(String::from("redis_resp=trace")),
  );

  tracing_subscriber::fmt::init();

  let config = Config::from_env();

  let mut redis = Redis::connect(&config.addr).await?;

  let reply = redis
    .send(&Array::new((BulkString::new("LLEN"), BulkString::new("mylist"))))
    .await?;

  info!("LLEN reply: {}", String::from_utf8_lossy(&reply).escape_debug());

  let mut pipeline = Pipeline::new();
  pipeline
    .push(&Array::new((
      BulkString::new("SETEX"),
      BulkString::new("mykey"),
      BulkString::new("10"),
      BulkString::new("Hello"),
    )))
    .into_diagnostic()?
    .push(&Array::new((BulkString::new("GET"), BulkString::new("mykey"))))
    .into_diagnostic()?;

  let replies = redis.send_pipeline(&pipeline).await?;

  info!(
    commands = pipeline.len(),
    "pipeline replies: {}",
    String::from_utf8_lossy(&replies).escape_debug()
  );

  Ok(())
}
