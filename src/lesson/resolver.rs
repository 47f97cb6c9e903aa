//! On-demand lesson resolution.
//!
//! Loads run on worker threads and report back over a channel that the UI
//! thread drains with [`ContentResolver::poll`]. Every request bumps a
//! generation counter; a completion is committed only if it carries the
//! current generation and the currently selected lesson. Anything else is
//! stale and is dropped on arrival. In-flight loads are never cancelled.
//!
//! Successful loads are cached, unless the module was invalidated while the
//! load was running: each load records the module's invalidation epoch when
//! it starts and is cached only if the epoch is unchanged when it lands.

use super::{ContentModule, ModuleLoader};
use crate::catalog::{ModuleRef, SubcourseKey};
use crate::error::ContentError;
use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Outcome for the currently selected lesson.
#[derive(Debug)]
pub enum Resolution {
    Ready {
        key: SubcourseKey,
        module: Arc<ContentModule>,
    },
    Failed {
        key: SubcourseKey,
        error: ContentError,
    },
}

impl Resolution {
    pub fn key(&self) -> SubcourseKey {
        match self {
            Resolution::Ready { key, .. } | Resolution::Failed { key, .. } => *key,
        }
    }
}

/// Cache epoch: (global, per-module) invalidation counts.
type Epoch = (u64, u64);

struct Completion {
    generation: u64,
    epoch: Epoch,
    key: SubcourseKey,
    module: ModuleRef,
    loaded: bool,
    result: Result<Arc<ContentModule>, ContentError>,
}

pub struct ContentResolver {
    loader: Arc<dyn ModuleLoader>,
    cache: HashMap<ModuleRef, Arc<ContentModule>>,
    cache_epoch: u64,
    module_epochs: HashMap<ModuleRef, u64>,
    sender: Sender<Completion>,
    receiver: Receiver<Completion>,
    generation: u64,
    pending: Option<(u64, SubcourseKey)>,
    in_flight: usize,
    loads_started: usize,
    stale_discarded: usize,
}

impl ContentResolver {
    pub fn new(loader: Arc<dyn ModuleLoader>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            loader,
            cache: HashMap::new(),
            cache_epoch: 0,
            module_epochs: HashMap::new(),
            sender,
            receiver,
            generation: 0,
            pending: None,
            in_flight: 0,
            loads_started: 0,
            stale_discarded: 0,
        }
    }

    pub fn loader(&self) -> &dyn ModuleLoader {
        self.loader.as_ref()
    }

    /// Start resolving `module` for the lesson `key`, superseding any earlier
    /// request. Returns the request's generation.
    pub fn request(&mut self, key: SubcourseKey, module: ModuleRef) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.pending = Some((generation, key));

        if let Some(cached) = self.cache.get(&module) {
            tracing::debug!(%key, %module, "lesson served from cache");
            // Delivered through the channel so callers see one code path
            let _ = self.sender.send(Completion {
                generation,
                epoch: self.epoch(module),
                key,
                module,
                loaded: false,
                result: Ok(Arc::clone(cached)),
            });
            return generation;
        }

        self.spawn_load(generation, key, module);
        generation
    }

    fn spawn_load(&mut self, generation: u64, key: SubcourseKey, module: ModuleRef) {
        let loader = Arc::clone(&self.loader);
        let sender = self.sender.clone();
        let epoch = self.epoch(module);

        self.in_flight += 1;
        self.loads_started += 1;
        tracing::debug!(%key, %module, generation, "loading lesson module");

        let spawned = thread::Builder::new()
            .name(format!("load {module}"))
            .spawn(move || {
                let result = catch_unwind(AssertUnwindSafe(|| loader.load(&module)))
                    .unwrap_or_else(|_| {
                        Err(ContentError::Worker(format!("loader panicked on {module}")))
                    })
                    .map(Arc::new);
                let _ = sender.send(Completion {
                    generation,
                    epoch,
                    key,
                    module,
                    loaded: true,
                    result,
                });
            });

        if let Err(e) = spawned {
            tracing::error!(%module, "failed to spawn loader thread: {}", e);
            let _ = self.sender.send(Completion {
                generation,
                epoch,
                key,
                module,
                loaded: true,
                result: Err(ContentError::Worker(e.to_string())),
            });
        }
    }

    /// Whether the current selection is still waiting for its module.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain finished loads. Returns the resolution of the current selection
    /// if it arrived; stale completions are counted and dropped.
    pub fn poll(&mut self) -> Option<Resolution> {
        let mut committed = None;

        loop {
            let completion = match self.receiver.try_recv() {
                Ok(completion) => completion,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };

            if completion.loaded {
                self.in_flight = self.in_flight.saturating_sub(1);
                if let Ok(module) = &completion.result {
                    if completion.epoch == self.epoch(completion.module) {
                        self.cache.insert(completion.module, Arc::clone(module));
                    } else {
                        tracing::debug!(module = %completion.module, "not caching module invalidated during load");
                    }
                }
            }

            if self.pending != Some((completion.generation, completion.key)) {
                self.stale_discarded += 1;
                tracing::debug!(
                    key = %completion.key,
                    generation = completion.generation,
                    current = self.generation,
                    "discarding stale lesson result"
                );
                continue;
            }

            self.pending = None;
            committed = Some(match completion.result {
                Ok(module) => Resolution::Ready {
                    key: completion.key,
                    module,
                },
                Err(error) => {
                    tracing::warn!(key = %completion.key, module = %completion.module, "lesson failed to load: {}", error);
                    Resolution::Failed {
                        key: completion.key,
                        error,
                    }
                }
            });
        }

        committed
    }

    /// Drop a cached module so the next request loads it again. Loads of it
    /// already in flight will not be cached.
    pub fn invalidate(&mut self, module: ModuleRef) -> bool {
        *self.module_epochs.entry(module).or_default() += 1;
        self.cache.remove(&module).is_some()
    }

    /// Drop every cached module, including loads still in flight.
    pub fn clear_cache(&mut self) {
        self.cache_epoch += 1;
        self.cache.clear();
    }

    fn epoch(&self, module: ModuleRef) -> Epoch {
        let module_epoch = self.module_epochs.get(&module).copied().unwrap_or(0);
        (self.cache_epoch, module_epoch)
    }

    pub fn is_cached(&self, module: ModuleRef) -> bool {
        self.cache.contains_key(&module)
    }

    /// Loads started on worker threads (cache hits excluded).
    pub fn loads_started(&self) -> usize {
        self.loads_started
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::CourseId;
    use crate::lesson::{ComponentUse, Props};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    /// Loader whose modules finish only when the test releases them.
    #[derive(Default)]
    pub(crate) struct GatedLoader {
        gates: Mutex<HashMap<&'static str, Receiver<Result<(), String>>>>,
        pub(crate) loads: AtomicUsize,
    }

    impl GatedLoader {
        /// Register a module; the returned sender releases it (`Ok`) or fails it (`Err`).
        pub(crate) fn gate(&self, module: &'static str) -> Sender<Result<(), String>> {
            let (tx, rx) = mpsc::channel();
            self.gates.lock().unwrap().insert(module, rx);
            tx
        }
    }

    impl ModuleLoader for GatedLoader {
        fn load(&self, module: &ModuleRef) -> Result<ContentModule, ContentError> {
            let gate = self.gates.lock().unwrap().remove(module.as_str());
            self.loads.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = gate {
                gate.recv()
                    .map_err(|e| ContentError::Worker(e.to_string()))?
                    .map_err(ContentError::Worker)?;
            }
            Ok(ContentModule {
                title: Some(module.to_string()),
                components: vec![ComponentUse {
                    name: "Text".into(),
                    props: Props {
                        text: Some(format!("content of {module}")),
                        ..Props::default()
                    },
                }],
            })
        }

        fn describe(&self) -> String {
            "gated".into()
        }
    }

    pub(crate) fn wait_until(mut done: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done() {
            assert!(Instant::now() < deadline, "timed out waiting");
            thread::sleep(Duration::from_millis(2));
        }
    }

    const INTRO: ModuleRef = ModuleRef::new("python/IntroductionPython");
    const GET_STARTED: ModuleRef = ModuleRef::new("python/GetStartedPython");

    fn key(index: usize) -> SubcourseKey {
        SubcourseKey::new(CourseId::Python, index)
    }

    #[test]
    fn test_resolves_selected_lesson() {
        let loader = Arc::new(GatedLoader::default());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        assert!(resolver.is_pending());

        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        let Some(Resolution::Ready { key: got, module }) = result else {
            panic!("expected ready");
        };
        assert_eq!(got, key(0));
        assert_eq!(module.title.as_deref(), Some("python/IntroductionPython"));
        assert!(!resolver.is_pending());
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let loader = Arc::new(GatedLoader::default());
        let release_a = loader.gate(INTRO.as_str());
        let release_b = loader.gate(GET_STARTED.as_str());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        resolver.request(key(1), GET_STARTED);

        // B finishes first and is committed
        release_b.send(Ok(())).unwrap();
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        assert_eq!(result.unwrap().key(), key(1));

        // A finishes afterwards and must not be committed
        release_a.send(Ok(())).unwrap();
        wait_until(|| {
            assert!(resolver.poll().is_none());
            resolver.stale_discarded() == 1
        });
        assert_eq!(resolver.in_flight(), 0);
        // The late module still lands in the cache
        assert!(resolver.is_cached(INTRO));
    }

    #[test]
    fn test_stale_result_arriving_first_is_discarded() {
        let loader = Arc::new(GatedLoader::default());
        let release_a = loader.gate(INTRO.as_str());
        let release_b = loader.gate(GET_STARTED.as_str());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        resolver.request(key(1), GET_STARTED);

        release_a.send(Ok(())).unwrap();
        wait_until(|| {
            assert!(resolver.poll().is_none());
            resolver.stale_discarded() == 1
        });
        assert!(resolver.is_pending());

        release_b.send(Ok(())).unwrap();
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        assert_eq!(result.unwrap().key(), key(1));
    }

    #[test]
    fn test_cache_avoids_second_load() {
        let loader = Arc::new(GatedLoader::default());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        wait_until(|| resolver.poll().is_some());
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);

        resolver.request(key(0), INTRO);
        let result = resolver.poll();
        assert!(matches!(result, Some(Resolution::Ready { .. })));
        assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.loads_started(), 1);

        assert!(resolver.invalidate(INTRO));
        resolver.request(key(0), INTRO);
        wait_until(|| resolver.poll().is_some());
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_failure_is_reported_and_retry_loads_again() {
        let loader = Arc::new(GatedLoader::default());
        let fail = loader.gate(INTRO.as_str());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        fail.send(Err("network down".into())).unwrap();
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        assert!(matches!(result, Some(Resolution::Failed { .. })));
        assert!(!resolver.is_cached(INTRO));

        resolver.request(key(0), INTRO);
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        assert!(matches!(result, Some(Resolution::Ready { .. })));
        assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
    }

    /// Titles each module with the version current when its load started.
    /// The first load waits for the gate, if one is set.
    #[derive(Default)]
    struct VersionedLoader {
        version: AtomicUsize,
        gate: Mutex<Option<Receiver<()>>>,
        started: AtomicUsize,
    }

    impl ModuleLoader for VersionedLoader {
        fn load(&self, _module: &ModuleRef) -> Result<ContentModule, ContentError> {
            let version = self.version.load(Ordering::SeqCst);
            let gate = self.gate.lock().unwrap().take();
            self.started.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = gate {
                gate.recv().map_err(|e| ContentError::Worker(e.to_string()))?;
            }
            Ok(ContentModule {
                title: Some(format!("v{version}")),
                components: Vec::new(),
            })
        }

        fn describe(&self) -> String {
            "versioned".into()
        }
    }

    fn ready_title(resolver: &mut ContentResolver) -> Option<String> {
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        match result {
            Some(Resolution::Ready { module, .. }) => module.title.clone(),
            other => panic!("expected ready, got {other:?}"),
        }
    }

    #[test]
    fn test_load_started_before_invalidate_is_not_cached() {
        let loader = Arc::new(VersionedLoader::default());
        loader.version.store(1, Ordering::SeqCst);
        let (release_v1, gate) = mpsc::channel();
        *loader.gate.lock().unwrap() = Some(gate);
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(0), INTRO);
        wait_until(|| loader.started.load(Ordering::SeqCst) == 1);

        // The file changes while v1 is still loading
        loader.version.store(2, Ordering::SeqCst);
        resolver.invalidate(INTRO);
        resolver.request(key(0), INTRO);
        assert_eq!(ready_title(&mut resolver).as_deref(), Some("v2"));

        release_v1.send(()).unwrap();
        wait_until(|| {
            assert!(resolver.poll().is_none());
            resolver.stale_discarded() == 1
        });

        resolver.request(key(0), INTRO);
        assert_eq!(ready_title(&mut resolver).as_deref(), Some("v2"));
        assert_eq!(loader.started.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_clear_cache_covers_loads_in_flight() {
        let loader = Arc::new(GatedLoader::default());
        let release = loader.gate(INTRO.as_str());
        let mut resolver = ContentResolver::new(loader.clone());

        resolver.request(key(1), GET_STARTED);
        wait_until(|| resolver.poll().is_some());
        resolver.request(key(0), INTRO);
        wait_until(|| loader.loads.load(Ordering::SeqCst) == 2);

        resolver.clear_cache();
        assert!(!resolver.is_cached(GET_STARTED));

        // Still delivered to the waiting selection, just not cached
        release.send(Ok(())).unwrap();
        wait_until(|| resolver.poll().is_some());
        assert!(!resolver.is_cached(INTRO));

        resolver.request(key(0), INTRO);
        wait_until(|| resolver.poll().is_some());
        assert!(resolver.is_cached(INTRO));
        assert_eq!(loader.loads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_reselecting_same_lesson_discards_older_generation() {
        let loader = Arc::new(GatedLoader::default());
        let release_first = loader.gate(INTRO.as_str());
        let mut resolver = ContentResolver::new(loader.clone());

        let first = resolver.request(key(0), INTRO);
        // Make sure the first load holds the gate before the second starts
        wait_until(|| loader.loads.load(Ordering::SeqCst) == 1);
        let second = resolver.request(key(0), INTRO);
        assert!(second > first);

        // The second request loads ungated; the first is stale even though
        // it is for the same lesson.
        let mut result = None;
        wait_until(|| {
            result = resolver.poll();
            result.is_some()
        });
        assert!(matches!(result, Some(Resolution::Ready { .. })));

        release_first.send(Ok(())).unwrap();
        wait_until(|| {
            assert!(resolver.poll().is_none());
            resolver.stale_discarded() == 1
        });
    }
}
