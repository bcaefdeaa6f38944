/// Startup and window failures. The simulation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("sfml: {0}")]
    Sfml(#[from] sfml::SfError),

    #[error("overlay: {0}")]
    Overlay(String),
}
