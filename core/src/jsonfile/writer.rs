use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

fn audit_preview(s: &str) -> String {
    const MAX: usize = 120;
    if s.len() <= MAX {
        return s.to_string();
    }
    let end = s
        .char_indices()
        .take_while(|(i, _)| *i < MAX)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let mut out = s[..end].to_string();
    out.push('…');
    out
}

/// Capture file for `--jsonfile`: every decoded event, one raw line each.
/// The file is truncated when created.
pub struct JsonFileWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    write_count: usize,
}

impl JsonFileWriter {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        tracing::info!(
            target: "gotestsum.jsonfile",
            path = %path.display(),
            "jsonfile writer started"
        );
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            write_count: 0,
        })
    }

    pub fn write_count(&self) -> usize {
        self.write_count
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.write_count < 5 {
            tracing::debug!(
                target: "gotestsum.jsonfile",
                count = self.write_count,
                bytes = line.len(),
                preview = %audit_preview(line.trim_end()),
                "writing line to jsonfile"
            );
        }
        self.writer.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.write_count += 1;
        Ok(())
    }

    pub fn close(mut self) -> io::Result<()> {
        tracing::debug!(
            target: "gotestsum.jsonfile",
            path = %self.path.display(),
            lines = self.write_count,
            "closing jsonfile"
        );
        self.writer.flush()?;
        self.writer.get_ref().sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "stale\n").unwrap();

        let mut w = JsonFileWriter::create(&path).unwrap();
        w.write_line(r#"{"Action":"run"}"#).unwrap();
        w.write_line("{\"Action\":\"pass\"}\n").unwrap();
        assert_eq!(w.write_count(), 2);
        w.close().unwrap();

        let got = std::fs::read_to_string(&path).unwrap();
        assert_eq!(got, "{\"Action\":\"run\"}\n{\"Action\":\"pass\"}\n");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(200);
        let p = audit_preview(&long);
        assert!(p.ends_with('…'));
        assert!(p.len() < long.len());
        assert_eq!(audit_preview("short"), "short");
    }
}
