//! Hand-off of finished reports to the downstream consumer.

use log::warn;

use crate::error::ReportError;
use crate::report::ReportWriter;

/// Forward the report set to the administrator, then clear every
/// report for the next polling cycle.
///
/// The forwarding half is a declared gap: reports are only readable
/// from disk until a receiving endpoint exists, and every invocation
/// ends with the reset regardless.
// TODO: push the report set to the admin endpoint once one is stood up
pub fn dispatch(writer: &ReportWriter) -> Result<(), ReportError> {
    warn!("Report transmission is not implemented; clearing report files only");
    writer.reset()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::report::{SWITCH_DATA_JSON, report_file_names};

    #[test]
    fn test_dispatch_clears_all_reports() {
        let dir = TempDir::new().unwrap();
        let writer = ReportWriter::new(dir.path());

        for name in report_file_names() {
            fs::write(dir.path().join(name), "pending report").unwrap();
        }
        dispatch(&writer).unwrap();

        for name in report_file_names() {
            let contents = fs::read_to_string(dir.path().join(name)).unwrap();
            if name == SWITCH_DATA_JSON {
                assert_eq!(contents, "[]");
            } else {
                assert!(contents.is_empty(), "{name} should be empty");
            }
        }
    }
}
