//! Append-only CSV log of user feedback on answers.

use std::{io, path::Path};

use chrono::Utc;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Append one `timestamp,messageId,feedback` line to the log at `path`.
///
/// The file is created on first use; timestamps are RFC 3339 UTC.
///
/// # Errors
/// Any underlying filesystem error (permissions, full disk) is returned
/// unchanged so the route can answer 500.
pub async fn append(path: impl AsRef<Path>, message_id: &str, feedback: &str) -> io::Result<()> {
    let line = format!("{},{},{}\n", Utc::now().to_rfc3339(), message_id, feedback);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .await?;
    file.write_all(line.as_bytes()).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log_path(tag: &str) -> std::path::PathBuf {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        std::env::temp_dir().join(format!("feedback-{tag}-{nanos}.log"))
    }

    #[tokio::test]
    async fn appends_one_line_per_call() {
        let path = temp_log_path("append");

        append(&path, "req-1", "helpful").await.unwrap();
        append(&path, "req-2", "unhelpful").await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(",req-1,helpful"));
        assert!(lines[1].ends_with(",req-2,unhelpful"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
