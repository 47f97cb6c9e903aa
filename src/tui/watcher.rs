//! File system watcher for live reload of lesson modules.
//!
//! Watches the content directory and reports which modules changed so the
//! TUI can drop them from the resolver cache and reload the one on screen.
//! When events were lost the watcher asks for a full rescan instead.

use crate::lesson::FsLoader;
use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use std::collections::BTreeSet;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

/// What changed in the content directory since the last check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChanges {
    /// These module paths changed
    Modules(Vec<String>),
    /// Events were lost, so any module may have changed
    Rescan,
}

/// Watches a content directory for modified lesson modules.
pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    loader: FsLoader,
    /// Changes seen but not yet reported
    pending: BTreeSet<String>,
    rescan: bool,
    /// Debounce: report only after events have been quiet this long
    last_event: Instant,
    debounce_duration: Duration,
}

impl ContentWatcher {
    /// Start watching the loader's content root recursively.
    pub fn new(loader: FsLoader) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(loader.root(), RecursiveMode::Recursive)?;
        tracing::debug!(root = %loader.root().display(), "watching content directory");

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            loader,
            pending: BTreeSet::new(),
            rescan: false,
            last_event: Instant::now(),
            debounce_duration: Duration::from_millis(100),
        })
    }

    /// Changes since the last call, once the debounce window has passed.
    /// `None` when nothing is ready.
    pub fn check_for_changes(&mut self) -> Option<ContentChanges> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => self.record(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if (self.pending.is_empty() && !self.rescan)
            || self.last_event.elapsed() < self.debounce_duration
        {
            return None;
        }
        let modules = std::mem::take(&mut self.pending);
        if std::mem::take(&mut self.rescan) {
            return Some(ContentChanges::Rescan);
        }
        Some(ContentChanges::Modules(modules.into_iter().collect()))
    }

    fn record(&mut self, event: Result<Event, notify::Error>) {
        match event {
            Ok(event) if event.need_rescan() => {
                tracing::debug!("content watcher asked for a rescan");
                self.rescan = true;
                self.last_event = Instant::now();
            }
            Ok(event) => {
                if is_relevant_event(&event) {
                    let modules = event
                        .paths
                        .iter()
                        .filter_map(|p| self.loader.module_for_file(p));
                    let before = self.pending.len();
                    self.pending.extend(modules);
                    if self.pending.len() != before {
                        self.last_event = Instant::now();
                    }
                }
            }
            // An error may have swallowed events
            Err(e) => {
                tracing::warn!("content watch error: {}", e);
                self.rescan = true;
                self.last_event = Instant::now();
            }
        }
    }
}

fn is_relevant_event(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Modify(ModifyKind::Name(_))
            | EventKind::Access(AccessKind::Close(AccessMode::Write))
            | EventKind::Create(_)
            | EventKind::Remove(_)
    )
}
