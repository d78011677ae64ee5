//! File logging
//!
//! The terminal belongs to the console report and the chart viewer, so all
//! tracing output goes to `{data_dir}/rebalance.log` instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "rebalance.log";

/// Trim the log once it grows past this size (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of most recent output kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Keep only the tail of an oversized log, starting at a line boundary.
///
/// Returns `true` when the file was trimmed.
pub fn rotate_log_if_needed(log_path: &Path) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= MAX_LOG_SIZE {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(KEEP_SIZE as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(KEEP_SIZE)))?;
        file.read_to_end(&mut tail)?;
    }

    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[skip..])?;
    Ok(true)
}

/// Hands out writers that share one open log file
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

impl SharedLogWriter {
    // A panic while holding the lock leaves the file usable
    fn lock(&self) -> MutexGuard<'_, File> {
        self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Default filter: `level` for the app, warnings only from the core library
fn default_filter(level: &str) -> String {
    format!("rebalance={level},rebalance_core=warn")
}

/// Initialize logging to `{data_dir}/rebalance.log`.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path) {
        eprintln!("Warning: failed to rotate {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer = SharedLogFile {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "line one\nline two\n").unwrap();

        assert!(!rotate_log_if_needed(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!rotate_log_if_needed(&dir.path().join("absent.log")).unwrap());
    }

    #[test]
    fn test_oversized_log_keeps_whole_lines_from_the_tail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        let line = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcde\n";
        let lines = (MAX_LOG_SIZE as usize / line.len()) + 10;
        fs::write(&path, line.repeat(lines)).unwrap();

        assert!(rotate_log_if_needed(&path).unwrap());

        let trimmed = fs::read(&path).unwrap();
        assert!(trimmed.starts_with(ROTATION_MARKER));
        let body = &trimmed[ROTATION_MARKER.len()..];
        assert!(body.len() as u64 <= KEEP_SIZE);
        assert!(body.starts_with(line.as_bytes()));
        assert_eq!(body.len() % line.len(), 0);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "rebalance=debug,rebalance_core=warn");
    }
}
