//! Output sinks for rendered banners

use crate::core::banner::Banner;
use crate::error::{DisplayError, StorageError};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one line per banner row
    #[default]
    Text,
    /// Pretty-printed JSON array of banners
    Json,
}

/// Where rendered output goes
pub struct OutputSink {
    writer: Box<dyn Write>,
    path: Option<PathBuf>,
}

impl OutputSink {
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
            path: None,
        }
    }

    /// Create (or truncate) `path` and write there
    pub fn file(path: &Path) -> crate::Result<Self> {
        let file = File::create(path).map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self { writer, path: None }
    }

    fn io_error(&self, error: io::Error) -> crate::AppError {
        match &self.path {
            Some(path) => StorageError::FileIo {
                path: path.to_string_lossy().to_string(),
                source: error,
            }
            .into(),
            None => DisplayError::TerminalOutput(error.to_string()).into(),
        }
    }

    pub fn emit_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> crate::Result<()> {
        for line in lines {
            if let Err(e) = writeln!(self.writer, "{}", line.as_ref()) {
                return Err(self.io_error(e));
            }
        }
        self.flush()
    }

    pub fn emit_banners(&mut self, banners: &[Banner], format: OutputFormat) -> crate::Result<()> {
        match format {
            OutputFormat::Text => {
                let lines: Vec<&str> = banners
                    .iter()
                    .flat_map(|b| b.lines.iter().map(String::as_str))
                    .collect();
                self.emit_lines(&lines)
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(banners)
                    .map_err(|e| DisplayError::Serialization(e.to_string()))?;
                self.emit_lines(&[json])
            }
        }
    }

    pub fn flush(&mut self) -> crate::Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::banner::{BannerRenderer, BannerStyle};
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    /// Writer that keeps its bytes reachable after being boxed
    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).expect("utf8")
        }
    }

    #[test]
    fn test_emit_text() {
        let buffer = SharedBuffer::default();
        let mut sink = OutputSink::from_writer(Box::new(buffer.clone()));
        let banners = BannerRenderer::default().render_banners(BannerStyle::Minor, &["HOVER PIDS"]);

        sink.emit_banners(&banners, OutputFormat::Text)
            .expect("emit should succeed");

        let text = buffer.contents();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("||\n"));
    }

    #[test]
    fn test_emit_json() {
        let buffer = SharedBuffer::default();
        let mut sink = OutputSink::from_writer(Box::new(buffer.clone()));
        let banners = BannerRenderer::default().render_banners(BannerStyle::Major, &["NAVIGATION"]);

        sink.emit_banners(&banners, OutputFormat::Json)
            .expect("emit should succeed");

        let value: serde_json::Value =
            serde_json::from_str(&buffer.contents()).expect("valid JSON");
        assert_eq!(value[0]["title"], "NAVIGATION");
        assert_eq!(value[0]["style"], "major");
        assert_eq!(value[0]["lines"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_file_sink() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("banners.txt");

        let mut sink = OutputSink::file(&path).expect("Failed to create sink");
        sink.emit_lines(&["//--||", "//ab||"]).expect("emit should succeed");
        drop(sink);

        let written = std::fs::read_to_string(&path).expect("Failed to read output");
        assert_eq!(written, "//--||\n//ab||\n");
    }

    #[test]
    fn test_file_sink_bad_path() {
        let result = OutputSink::file(Path::new("/nonexistent/dir/banners.txt"));
        assert!(matches!(
            result,
            Err(crate::AppError::Storage(StorageError::FileIo { .. }))
        ));
    }
}
