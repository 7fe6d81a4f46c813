use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use anyhow::Result;

use crate::config::SlicerConfig;
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::slicer::{ChartRegistry, InstanceId};

// ---------------------------------------------------------------------------
// Background loads
// ---------------------------------------------------------------------------

/// A file being read off the UI thread for one chart.
struct PendingLoad {
    id: InstanceId,
    path: PathBuf,
    rx: Receiver<Result<Dataset>>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// All charts on screen.
    pub registry: ChartRegistry,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Loads in flight, at most one per chart.
    pending: Vec<PendingLoad>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SlicerConfig::default())
    }
}

impl AppState {
    /// State with a single chart built from `config`.
    pub fn new(config: SlicerConfig) -> Self {
        let mut registry = ChartRegistry::new(config);
        registry.add_instance();
        Self {
            registry,
            status_message: None,
            pending: Vec::new(),
        }
    }

    pub fn add_chart(&mut self) -> InstanceId {
        self.registry.add_instance()
    }

    /// Drop a chart and any load still running for it.
    pub fn remove_chart(&mut self, id: InstanceId) {
        self.pending.retain(|p| p.id != id);
        if let Err(e) = self.registry.remove_instance(id) {
            log::warn!("{e}");
        }
    }

    /// Whether a file is still being read for `id`.
    pub fn is_loading(&self, id: InstanceId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Read `path` on a worker thread; the result is applied by [`AppState::poll_loads`].
    ///
    /// A newer request for the same chart supersedes an older one.
    pub fn request_load(&mut self, id: InstanceId, path: &Path) {
        let Some(instance) = self.registry.get(id) else {
            log::warn!("load requested for unknown chart {id}");
            return;
        };
        let options = instance.config().ingest.clone();
        let (tx, rx) = mpsc::channel();
        let worker_path = path.to_path_buf();
        std::thread::spawn(move || {
            // The receiver is gone if the chart was removed meanwhile.
            let _ = tx.send(load_file(&worker_path, &options));
        });

        self.pending.retain(|p| p.id != id);
        self.pending.push(PendingLoad {
            id,
            path: path.to_path_buf(),
            rx,
        });
    }

    /// Apply finished loads. Returns `true` if any chart changed.
    pub fn poll_loads(&mut self) -> bool {
        let mut changed = false;
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for load in std::mem::take(&mut self.pending) {
            match load.rx.try_recv() {
                Ok(Ok(dataset)) => {
                    if let Some(instance) = self.registry.get_mut(load.id) {
                        instance.apply_dataset(dataset);
                        self.status_message = None;
                        changed = true;
                    }
                }
                Ok(Err(e)) => {
                    log::error!("Failed to load file: {e:#}");
                    self.status_message = Some(format!("Error: {e:#}"));
                }
                Err(TryRecvError::Empty) => still_pending.push(load),
                Err(TryRecvError::Disconnected) => {
                    log::error!("loader for {} exited without a result", load.path.display());
                    self.status_message =
                        Some(format!("Error: could not load {}", load.path.display()));
                }
            }
        }

        self.pending = still_pending;
        changed
    }

    /// True while any load is outstanding.
    pub fn has_pending_loads(&self) -> bool {
        !self.pending.is_empty()
    }
}
