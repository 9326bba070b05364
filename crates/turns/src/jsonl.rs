//! Durable turn store backed by an append-only JSONL file.
//!
//! All turns live in `<dir>/turns.jsonl`, one `{"id","text","created_at"}`
//! object per line. The whole log is loaded into an in-memory cache at open;
//! after that reads never touch disk and every append writes through to both.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use ag_domain::error::{Error, Result};
use ag_domain::trace::TraceEvent;
use ag_domain::turn::Turn;

use crate::store::TurnStore;

const FILE_NAME: &str = "turns.jsonl";

pub struct JsonlTurnStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    cache: RwLock<Vec<Turn>>,
    /// Held for the whole append (id, disk write, cache push) so appends
    /// are serialized and ids stay monotonic.
    writer: Mutex<WriterState>,
}

struct WriterState {
    next_id: u64,
    /// The file does not end in `\n` (torn tail from an earlier crash).
    needs_newline: bool,
}

impl JsonlTurnStore {
    /// Open (or create) the log under `dir`. Idempotent.
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(Error::Io)?;
        let path = dir.join(FILE_NAME);

        let (mut turns, needs_newline) = read_jsonl_file(&path)?;
        turns.sort_by_key(|t| t.id);
        let next_id = turns.last().map_or(1, |t| t.id + 1);

        tracing::info!(
            path = %path.display(),
            turns = turns.len(),
            next_id,
            "turn store opened"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                cache: RwLock::new(turns),
                writer: Mutex::new(WriterState {
                    next_id,
                    needs_newline,
                }),
            }),
        })
    }
}

impl Inner {
    /// Assign an id, write the line and publish it to the cache.
    ///
    /// Runs on a blocking thread and always finishes once started, even if
    /// the caller's future is dropped.
    fn append_blocking(&self, text: String) -> Result<Turn> {
        let mut writer = self.writer.lock();

        let turn = Turn {
            id: writer.next_id,
            text,
            created_at: Utc::now(),
        };
        let mut line = serde_json::to_string(&turn)
            .map_err(|e| Error::Other(format!("serializing turn: {e}")))?;
        line.push('\n');
        if writer.needs_newline {
            line.insert(0, '\n');
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(Error::Io)?;
        write_line(&mut file, line.as_bytes())?;

        writer.needs_newline = false;
        writer.next_id += 1;
        self.cache.write().push(turn.clone());
        Ok(turn)
    }
}

/// Append `line`, truncating back to the previous length if the write fails
/// so no partial record is left behind.
fn write_line(file: &mut File, line: &[u8]) -> Result<()> {
    let before = file.metadata().map_err(Error::Io)?.len();
    if let Err(e) = file.write_all(line) {
        if let Err(rollback) = file.set_len(before) {
            tracing::error!(error = %rollback, "failed to roll back partial turn write");
        }
        return Err(Error::Io(e));
    }
    Ok(())
}

#[async_trait::async_trait]
impl TurnStore for JsonlTurnStore {
    async fn append(&self, text: String) -> Result<Turn> {
        let inner = self.inner.clone();
        let turn = tokio::task::spawn_blocking(move || inner.append_blocking(text))
            .await
            .map_err(|e| Error::Other(format!("spawn_blocking join: {e}")))??;

        TraceEvent::TurnAppended {
            turn_id: turn.id,
            chars: turn.text.chars().count(),
        }
        .emit();

        Ok(turn)
    }

    async fn list_ascending(&self) -> Result<Vec<Turn>> {
        Ok(self.inner.cache.read().clone())
    }

    async fn get(&self, id: u64) -> Result<Option<Turn>> {
        let cache = self.inner.cache.read();
        Ok(cache
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|idx| cache[idx].clone()))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.inner.cache.read().len())
    }
}

/// Read and parse the JSONL log. A missing file is an empty log.
///
/// Also reports whether the file ends without a trailing newline.
fn read_jsonl_file(path: &Path) -> Result<(Vec<Turn>, bool)> {
    if !path.exists() {
        return Ok((Vec::new(), false));
    }

    let raw = std::fs::read_to_string(path).map_err(Error::Io)?;
    let needs_newline = !raw.is_empty() && !raw.ends_with('\n');
    let mut turns = Vec::new();
    for (lineno, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Turn>(line) {
            Ok(turn) => turns.push(turn),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    error = %e,
                    "skipping malformed turn line"
                );
            }
        }
    }
    Ok((turns, needs_newline))
}
