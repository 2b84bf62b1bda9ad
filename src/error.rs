//! Error types for switchpoll.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main error type for switchpoll operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A remote command reported failure
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Report file errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Transport layer errors (SSH connection, authentication, channels).
#[derive(Error, Debug)]
pub enum TransportError {
    /// SSH handshake or protocol error
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// SSH key error
    #[error("SSH key error: {0}")]
    Key(String),

    /// Host key rejected: not present in known_hosts under strict checking
    #[error("Unknown host key for {host}:{port}")]
    HostKeyUnknown { host: String, port: u16 },

    /// Host key rejected: differs from the recorded known_hosts entry
    #[error("Host key for {host}:{port} changed (known_hosts line {line})")]
    HostKeyChanged { host: String, port: u16, line: usize },

    /// known_hosts file could not be read or written
    #[error("known_hosts error: {0}")]
    KnownHosts(String),

    /// Channel closed before the command finished
    #[error("Channel closed while running '{command}'")]
    ChannelClosed { command: String },

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Remote command execution errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command wrote to its error stream; the batch it belongs to
    /// is abandoned without partial results.
    #[error("Command '{command}' failed: {stderr}")]
    Failed { command: String, stderr: String },
}

/// Report file errors (CSV/JSON writing, reset).
#[derive(Error, Debug)]
pub enum ReportError {
    /// CSV serialization or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error on a report file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing environment variable '{name}'")]
    Missing { name: &'static str },

    /// An environment variable holds an unusable value
    #[error("Invalid value '{value}' for '{name}'")]
    Invalid { name: &'static str, value: String },
}

/// Result type alias using switchpoll's Error.
pub type Result<T> = std::result::Result<T, Error>;
