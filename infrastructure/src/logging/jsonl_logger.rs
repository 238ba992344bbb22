//! JSONL conversation log.
//!
//! One line per [`ConversationEvent`]. Every line carries the event `type`,
//! an RFC 3339 `timestamp`, a per-file `seq` and the `debate` number, which
//! increases with each `debate_started` so restarted debates in the same
//! process stay distinguishable.
//!
//! The first failed write or flush is reported once through `tracing` and
//! the log is marked degraded; later events are dropped instead of leaving
//! torn lines behind.

use debate_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

struct Sink<W> {
    writer: W,
    seq: u64,
    debate: u64,
    degraded: bool,
}

impl<W: Write> Sink<W> {
    fn stamp(&mut self, event: ConversationEvent) -> Value {
        if event.event_type == "debate_started" {
            self.debate += 1;
        }
        self.seq += 1;

        let mut record = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert("type".to_string(), Value::from(event.event_type));
        record.insert(
            "timestamp".to_string(),
            Value::from(chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)),
        );
        record.insert("seq".to_string(), Value::from(self.seq));
        record.insert("debate".to_string(), Value::from(self.debate));
        Value::Object(record)
    }

    fn append(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        // Each debate event is flushed so an interrupted run keeps its log
        self.writer.flush()
    }
}

/// Append-only JSONL writer for debate events.
pub struct JsonlConversationLogger<W: Write + Send = BufWriter<File>> {
    sink: Mutex<Sink<W>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create (or truncate) the log file, creating parent directories.
    pub fn new(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::from_writer(BufWriter::new(file), path))
    }
}

impl<W: Write + Send> JsonlConversationLogger<W> {
    /// Log into an arbitrary writer; `path` is only reported back.
    pub fn from_writer(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            sink: Mutex::new(Sink {
                writer,
                seq: 0,
                debate: 0,
                degraded: false,
            }),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a write has failed and events are being dropped.
    pub fn is_degraded(&self) -> bool {
        self.sink.lock().map(|s| s.degraded).unwrap_or(true)
    }
}

impl<W: Write + Send> ConversationLogger for JsonlConversationLogger<W> {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };
        if sink.degraded {
            return;
        }

        let event_type = event.event_type;
        let record = sink.stamp(event);
        let result = serde_json::to_string(&record)
            .map_err(io::Error::other)
            .and_then(|line| sink.append(&line));

        if let Err(e) = result {
            sink.degraded = true;
            warn!(
                "Conversation log {} degraded at {} event #{}: {}; further events are dropped",
                self.path.display(),
                event_type,
                sink.seq,
                e
            );
        }
    }
}

impl<W: Write + Send> Drop for JsonlConversationLogger<W> {
    fn drop(&mut self) {
        if let Ok(sink) = self.sink.get_mut()
            && !sink.degraded
            && let Err(e) = sink.writer.flush()
        {
            warn!(
                "Could not flush conversation log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
