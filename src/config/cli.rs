use crate::core::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&self, rendered: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, rendered)?;
        tracing::debug!("Report written to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_report(&self, rendered: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            handle.write_all(b"\n")?;
        }
        Ok(())
    }
}
