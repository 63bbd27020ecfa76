use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

/// Installs the global subscriber: stdout always, plus `log_file` when given.
pub fn init_logging(log_level: Level, log_file: Option<&str>) {
    let level_filter = LevelFilter::from_level(log_level);
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_filter(level_filter);

    let file_layer = log_file.map(|path| {
        let writer = CappedFile::new(PathBuf::from(path), MAX_LOG_BYTES);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .with_filter(level_filter)
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

/// Append-only log file that drops its older half once it reaches `max_len`.
#[derive(Clone)]
struct CappedFile {
    path: PathBuf,
    max_len: u64,
    lock: Arc<Mutex<()>>,
}

impl CappedFile {
    fn new(path: PathBuf, max_len: u64) -> Self {
        Self {
            path,
            max_len,
            lock: Arc::new(Mutex::new(())),
        }
    }
}

fn keep_tail(path: &Path, keep: u64) -> io::Result<()> {
    let mut tail = Vec::new();
    {
        let mut file = OpenOptions::new().read(true).open(path)?;
        let size = file.metadata()?.len();
        file.seek(SeekFrom::Start(size.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(&tail)
}

impl Write for CappedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let len = std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if len >= self.max_len {
            keep_tail(&self.path, self.max_len / 2)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
