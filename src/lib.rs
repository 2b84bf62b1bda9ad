//! # Switchpoll
//!
//! Async SSH poller for Cisco switches.
//!
//! Switchpoll connects to one switch, runs a fixed set of `show`
//! commands over per-command exec channels, parses the tabular output,
//! and writes normalized reports: CSV files for interface status, the
//! MAC address table, and the ARP table, plus a JSON summary of the
//! switch identity and version.
//!
//! ## Pipeline
//!
//! Two independent passes run against the same host: the table pass
//! (interface/MAC/ARP) and the info pass (identity/version). Each pass
//! is all-or-nothing: a command that reports anything on stderr aborts
//! its batch, and the pass's report files are left untouched. After
//! both passes the reports are handed to dispatch, which clears them
//! for the next cycle.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use switchpoll::{Config, Poller, ReportWriter, parse};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let poller = Poller::new(config.ssh_config());
//!     let writer = ReportWriter::new(&config.report_dir);
//!
//!     let tables = poller.poll_tables().await?;
//!     writer.write_mac_table(&parse::parse_mac_table(&tables.mac_table))?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod parse;
pub mod poller;
pub mod report;
pub mod transport;

// Re-export main types for convenience
pub use config::Config;
pub use dispatch::dispatch;
pub use error::Error;
pub use parse::SwitchInfo;
pub use poller::{Poller, TableOutputs};
pub use report::ReportWriter;
pub use transport::{AuthMethod, CommandOutput, CommandSession, SshConfig, SshSession};
