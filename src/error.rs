use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unable to parse key binding `{0}`")]
  KeyBinding(String),
  #[error("unable to parse style `{0}`")]
  Style(String),
  #[error(transparent)]
  Config(#[from] config::ConfigError),
  #[error(transparent)]
  DefaultConfig(#[from] json5::Error),
}
