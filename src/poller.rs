//! Command runner: fixed command batches against one switch.
//!
//! Each polling pass opens its own session, runs its commands in
//! order, and always releases the session afterwards. Batches are
//! all-or-nothing: the first command that reports anything on its
//! error stream abandons the rest of the batch and nothing collected
//! so far is returned.

use log::{debug, warn};

use crate::error::{CommandError, Result};
use crate::parse::{
    SwitchInfo, count_interfaces, parse_loopbacks, parse_model_numbers, parse_switch_name,
};
use crate::transport::{CommandSession, SshConfig, SshSession};

/// Table pass, in report order: connected interfaces, not-connected
/// interfaces, MAC address table, ARP table.
pub const TABLE_COMMANDS: [&str; 4] = [
    "show int status | i connected",
    "show int status | exc connected",
    "show mac address-table",
    "show ip arp",
];

const HOSTNAME_COMMAND: &str = "show running-config | include hostname";
const LOOPBACK_COMMAND: &str = "show ip interface brief | include Loopback";
const VERSION_COMMAND: &str = "show version";
const MODEL_COMMAND: &str = "show version | include Model";
const INTERFACE_BRIEF_COMMAND: &str = "show ip interface brief";

/// Raw text collected by the table pass, one blob per command.
#[derive(Debug, Clone, Default)]
pub struct TableOutputs {
    pub connected: String,
    pub disconnected: String,
    pub mac_table: String,
    pub arp_table: String,
}

/// Run one command and return its output stream, treating anything on
/// the error stream as failure.
pub async fn run_checked<S: CommandSession>(session: &mut S, command: &str) -> Result<String> {
    let output = session.exec(command).await?;
    if !output.is_success() {
        return Err(CommandError::Failed {
            command: command.to_string(),
            stderr: output.stderr,
        }
        .into());
    }
    Ok(output.stdout)
}

/// Run a batch of commands sequentially, aborting on the first
/// failure. On success the outputs are in command order.
pub async fn run_batch<S: CommandSession>(
    session: &mut S,
    commands: &[&str],
) -> Result<Vec<String>> {
    let mut outputs = Vec::with_capacity(commands.len());
    for command in commands {
        outputs.push(run_checked(session, command).await?);
    }
    Ok(outputs)
}

/// Collect the interface/MAC/ARP table outputs over an open session.
pub async fn collect_tables<S: CommandSession>(session: &mut S) -> Result<TableOutputs> {
    let mut outputs = run_batch(session, &TABLE_COMMANDS).await?.into_iter();

    Ok(TableOutputs {
        connected: outputs.next().unwrap_or_default(),
        disconnected: outputs.next().unwrap_or_default(),
        mac_table: outputs.next().unwrap_or_default(),
        arp_table: outputs.next().unwrap_or_default(),
    })
}

/// Collect and assemble switch identity/version metadata over an open
/// session. Each command output gets its own post-processing.
pub async fn collect_switch_info<S: CommandSession>(session: &mut S) -> Result<SwitchInfo> {
    let hostname = run_checked(session, HOSTNAME_COMMAND).await?;
    let loopbacks = run_checked(session, LOOPBACK_COMMAND).await?;
    let version = run_checked(session, VERSION_COMMAND).await?;
    let model = run_checked(session, MODEL_COMMAND).await?;
    let brief = run_checked(session, INTERFACE_BRIEF_COMMAND).await?;

    Ok(SwitchInfo {
        switch_name: parse_switch_name(&hostname),
        loopback_ip: parse_loopbacks(&loopbacks),
        version,
        model: parse_model_numbers(&model),
        interface_count: count_interfaces(&brief),
    })
}

/// Drives the two polling passes against one switch, opening a fresh
/// session per pass.
pub struct Poller {
    ssh: SshConfig,
}

impl Poller {
    /// Create a poller for the given connection settings.
    pub fn new(ssh: SshConfig) -> Self {
        Self { ssh }
    }

    /// Run the interface/MAC/ARP table pass.
    pub async fn poll_tables(&self) -> Result<TableOutputs> {
        let mut session = SshSession::connect(self.ssh.clone()).await?;
        let result = collect_tables(&mut session).await;
        self.release(session).await;
        debug!("table pass against {} finished", self.ssh.host);
        result
    }

    /// Run the switch identity/version pass.
    pub async fn poll_switch_info(&self) -> Result<SwitchInfo> {
        let mut session = SshSession::connect(self.ssh.clone()).await?;
        let result = collect_switch_info(&mut session).await;
        self.release(session).await;
        debug!("info pass against {} finished", self.ssh.host);
        result
    }

    /// The session is released whether or not the batch succeeded; a
    /// close failure must not mask the batch outcome.
    async fn release(&self, session: SshSession) {
        if let Err(e) = session.close().await {
            warn!("Closing session to {} failed: {}", self.ssh.host, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::Error;
    use crate::transport::CommandOutput;

    /// Replays canned (stdout, stderr) pairs in order.
    struct ScriptedSession {
        responses: VecDeque<(String, String)>,
        executed: Vec<String>,
    }

    impl ScriptedSession {
        fn new<const N: usize>(responses: [(&str, &str); N]) -> Self {
            Self {
                responses: responses
                    .iter()
                    .map(|(out, err)| (out.to_string(), err.to_string()))
                    .collect(),
                executed: Vec::new(),
            }
        }
    }

    impl CommandSession for ScriptedSession {
        async fn exec(&mut self, command: &str) -> Result<CommandOutput> {
            self.executed.push(command.to_string());
            let (stdout, stderr) = self.responses.pop_front().unwrap_or_default();
            Ok(CommandOutput::new(command, stdout, stderr))
        }
    }

    #[tokio::test]
    async fn test_batch_returns_outputs_in_order() {
        let mut session = ScriptedSession::new([("one", ""), ("two", ""), ("three", "")]);
        let outputs = run_batch(&mut session, &["a", "b", "c"]).await.unwrap();

        assert_eq!(outputs, ["one", "two", "three"]);
        assert_eq!(session.executed, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_batch_aborts_on_first_stderr() {
        let mut session = ScriptedSession::new([
            ("interface listing", ""),
            ("", "% Invalid input detected"),
            ("never reached", ""),
        ]);
        let result = run_batch(&mut session, &["a", "b", "c"]).await;

        match result {
            Err(Error::Command(CommandError::Failed { command, stderr })) => {
                assert_eq!(command, "b");
                assert_eq!(stderr, "% Invalid input detected");
            }
            other => panic!("expected command failure, got {other:?}"),
        }
        // the batch stops at the failing command
        assert_eq!(session.executed, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_collect_tables_maps_outputs_positionally() {
        let mut session = ScriptedSession::new([
            ("connected table", ""),
            ("disconnected table", ""),
            ("mac table", ""),
            ("arp table", ""),
        ]);
        let tables = collect_tables(&mut session).await.unwrap();

        assert_eq!(tables.connected, "connected table");
        assert_eq!(tables.disconnected, "disconnected table");
        assert_eq!(tables.mac_table, "mac table");
        assert_eq!(tables.arp_table, "arp table");
        assert_eq!(session.executed, TABLE_COMMANDS);
    }

    #[tokio::test]
    async fn test_collect_switch_info_assembles_fields() {
        let mut session = ScriptedSession::new([
            ("hostname SW1-CORE", ""),
            ("Loopback0  192.168.1.1  YES unset up up", ""),
            ("Cisco IOS Software, C2960X ...", ""),
            ("Model number                    : WS-C2960X-48TS-L", ""),
            (
                "Interface  IP-Address  OK? Method Status Protocol\n\
                 Vlan1  10.0.0.2  YES NVRAM up up\n\
                 Fa0/1  unassigned  YES unset up up",
                "",
            ),
        ]);
        let info = collect_switch_info(&mut session).await.unwrap();

        assert_eq!(info.switch_name, "SW1-CORE");
        assert_eq!(info.loopback_ip["Loopback0"], "192.168.1.1");
        assert_eq!(info.version, "Cisco IOS Software, C2960X ...");
        assert_eq!(info.model, ["WS-C2960X-48TS-L"]);
        assert_eq!(info.interface_count, 2);
    }

    #[tokio::test]
    async fn test_collect_switch_info_aborts_without_partial_result() {
        let mut session = ScriptedSession::new([
            ("hostname SW1-CORE", ""),
            ("", "% connection to authentication server lost"),
        ]);
        let result = collect_switch_info(&mut session).await;

        assert!(matches!(result, Err(Error::Command(_))));
        assert_eq!(session.executed.len(), 2);
    }
}
