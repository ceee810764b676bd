use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("filesystem error: {0}")]
    Fs(#[from] std::io::Error),

    #[error("session file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode session file: {0}")]
    Encode(#[from] toml::ser::Error),
}
