//! Poll one switch and write its reports.
//!
//! Runs the full poll → parse → write → reset cycle once and exits.
//! Configuration comes from the environment (`HOST`, `USER`, `PASS`,
//! optional `PORT`); there are no flags.

use log::{error, info};

use switchpoll::parse::{parse_arp_table, parse_interface_status, parse_mac_table};
use switchpoll::{Config, Poller, ReportWriter, dispatch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let poller = Poller::new(config.ssh_config());
    let writer = ReportWriter::new(&config.report_dir);

    info!("Polling {}", config.host);

    // A failed pass leaves its report files untouched; the other pass
    // still runs.
    match poller.poll_tables().await {
        Ok(tables) => {
            let connected = parse_interface_status(&tables.connected);
            let disconnected = parse_interface_status(&tables.disconnected);
            writer.write_interface_status(&connected, &disconnected)?;
            writer.write_mac_table(&parse_mac_table(&tables.mac_table))?;
            writer.write_arp_table(&parse_arp_table(&tables.arp_table))?;
        }
        Err(e) => error!("Table pass against {} failed: {e}", config.host),
    }

    match poller.poll_switch_info().await {
        Ok(info) => writer.write_switch_info(&info)?,
        Err(e) => error!("Info pass against {} failed: {e}", config.host),
    }

    dispatch(&writer)?;

    Ok(())
}
