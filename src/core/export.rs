// ClientDesk - core/export.rs
//
// CSV and JSON export of the visible (sorted + filtered) client view.
// Core layer: writes to any Write trait object.

use crate::core::model::Client;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format offered by the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Suggested file name for the save dialog.
    pub fn default_file_name(&self) -> String {
        format!("clients.{}", self.extension())
    }
}

/// Export clients to CSV format.
///
/// Writes: id, name, type, email, status, updated_by, created_at, updated_at
/// with RFC 3339 timestamps.
pub fn export_csv<W: Write>(
    clients: &[Client],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "type",
            "email",
            "status",
            "updated_by",
            "created_at",
            "updated_at",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for client in clients {
        let created = client.created_at.to_rfc3339();
        let updated = client.updated_at.to_rfc3339();
        csv_writer
            .write_record([
                client.id.as_str(),
                client.name.as_str(),
                client.client_type.label(),
                client.email.as_str(),
                client.status.label(),
                client.updated_by.as_str(),
                created.as_str(),
                updated.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(count, path = %export_path.display(), "Exported clients to CSV");
    Ok(count)
}

/// Export clients to JSON format (array of objects).
pub fn export_json<W: Write>(
    clients: &[Client],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, clients).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(count = clients.len(), path = %export_path.display(), "Exported clients to JSON");
    Ok(clients.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ClientStatus, ClientType};
    use chrono::{TimeZone, Utc};

    fn make_client(id: &str, name: &str) -> Client {
        let ts = Utc.with_ymd_and_hms(2025, 4, 5, 6, 7, 8).unwrap();
        Client {
            id: id.to_string(),
            name: name.to_string(),
            client_type: ClientType::Government,
            email: "contact@wayne.io".to_string(),
            status: ClientStatus::Archived,
            updated_by: "Alex Johnson".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_csv_export() {
        let clients = vec![
            make_client("CL-1000", "Wayne Co."),
            make_client("CL-1001", "Stark, Ltd."),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&clients, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,type,email,status,updated_by,created_at,updated_at")
        );
        assert!(output.contains("CL-1000,Wayne Co.,Government"));
        // Embedded commas are quoted.
        assert!(output.contains("\"Stark, Ltd.\""));
        assert!(output.contains("2025-04-05T06:07:08+00:00"));
    }

    #[test]
    fn test_json_export() {
        let clients = vec![make_client("CL-1000", "Wayne Co.")];
        let mut buf = Vec::new();
        let count = export_json(&clients, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let parsed: Vec<Client> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, clients);
    }

    #[test]
    fn test_empty_export_writes_header_only() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
