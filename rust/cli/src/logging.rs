use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Filter used when `RUST_LOG` is unset and no `-v` flag is given.
pub const DEFAULT_FILTER: &str = "warn,guozha_engine=info";

/// Target prefix shared by the workspace crates; capture ignores everything else.
pub const WORKSPACE_TARGET: &str = "guozha_";

/// One captured event from a workspace crate
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    fn from_event(event: &Event<'_>) -> Self {
        let metadata = event.metadata();
        let mut entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut entry);
        entry
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Visit for LogEntry {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

/// In-memory log of engine, AI and CLI events, for tests that assert on logging.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Entries whose message contains `needle`
    pub fn matching(&self, needle: &str) -> Vec<LogEntry> {
        self.lock()
            .iter()
            .filter(|e| e.message.contains(needle))
            .cloned()
            .collect()
    }

    /// A registry feeding only this capture, restricted to workspace targets.
    /// Install with `tracing::subscriber::with_default`.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + use<> {
        let capture = CaptureLayer(self.clone())
            .with_filter(filter_fn(|meta| meta.target().starts_with(WORKSPACE_TARGET)));
        Registry::default().with(capture)
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().push(LogEntry::from_event(event));
    }
}

/// Filter directive for a `-v` count: 0 keeps the default, 1 shows engine
/// debug output, 2 and above trace everything in the workspace.
pub fn filter_for_verbosity(verbosity: u8) -> String {
    match verbosity {
        0 => DEFAULT_FILTER.to_string(),
        1 => "info,guozha_engine=debug,guozha_ai=debug".to_string(),
        _ => "debug,guozha_engine=trace,guozha_ai=trace,guozha_cli=trace".to_string(),
    }
}

/// Installs the global stderr subscriber. `RUST_LOG` wins over the verbosity
/// flag. Returns false when a subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    } else {
        EnvFilter::new(filter_for_verbosity(verbosity))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
