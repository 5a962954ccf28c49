use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Streaming JSON Lines writer.
/// - one record, one JSON object
/// - every object ends with '\n'
/// - no enclosing array, no commas
pub struct JsonlWriter<W: Write> {
    inner: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.inner, value)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Pretty printed array.
    #[default]
    Json,
    Jsonl,
}

/// Renders a whole table in memory.
pub fn render<T: Serialize>(records: &[T], format: Format) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        Format::Json => write_json(records, &mut buf)?,
        Format::Jsonl => write_jsonl(records, &mut buf)?,
    }
    Ok(buf)
}

/// Writes `records` as a pretty JSON array followed by a newline.
pub fn write_json<T: Serialize, W: Write>(records: &[T], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn write_jsonl<T: Serialize, W: Write>(records: &[T], writer: W) -> Result<()> {
    let mut out = JsonlWriter::new(writer);
    for record in records {
        out.write(record)?;
    }
    out.flush()?;
    Ok(())
}

/// Where a rendered table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn from_arg(out: Option<&Path>) -> Self {
        match out {
            Some(path) => Sink::File(path.to_path_buf()),
            None => Sink::Stdout,
        }
    }

    pub fn write(&self, contents: &[u8]) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(contents)?;
                stdout.flush()?;
            }
            Sink::File(path) => write_atomic(path, contents)?,
        }
        Ok(())
    }

    /// Removes a file target after a failed run. Stdout has nothing to undo.
    pub fn discard(&self) {
        if let Sink::File(path) = self {
            discard(path);
        }
    }
}

/// Removes `path` if present, so a failed run leaves no stale table behind.
pub fn discard(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::info!("[-] Removed stale {}", path.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => log::warn!("Unable to remove {}: {}", path.display(), err),
    }
}

/// Hidden sibling `.<name>.tmp` next to `path`.
pub fn temp_path(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Replaces `path` with `contents`, leaving it untouched on failure.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = temp_path(path);

    let res = File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    res
}
