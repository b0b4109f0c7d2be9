const ADDR_VAR: &str = "REDIS_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:6379";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Address of the Redis server. Read from `REDIS_ADDR`.
  pub addr: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      addr: String::from(DEFAULT_ADDR),
    }
  }
}

impl Config {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = Self::default();

    Self {
      addr: lookup(ADDR_VAR)
        .filter(|addr| !addr.trim().is_empty())
        .unwrap_or(defaults.addr),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_lookup() {
    let tests = vec![
      (None, DEFAULT_ADDR),
      (Some(""), DEFAULT_ADDR),
      (Some("  "), DEFAULT_ADDR),
      (Some("10.0.0.1:6380"), "10.0.0.1:6380"),
    ];

    for (value, expected) in tests {
      let config = Config::from_lookup(|key| {
        assert_eq!(ADDR_VAR, key);
        value.map(String::from)
      });

      assert_eq!(expected, config.addr);
    }
  }
}
