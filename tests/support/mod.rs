pub mod scripted_facade;

pub use scripted_facade::ScriptedFacade;

use rustyremote::config::SyncConfig;
use rustyremote::runtime::TokioLocalSpawner;
use rustyremote::sync::{PlayerFrame, ProgressModel, SyncLoop, ViewRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Keeps every frame it is asked to paint.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: RefCell<Vec<PlayerFrame>>,
}

impl RecordingRenderer {
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last(&self) -> Option<PlayerFrame> {
        self.frames.borrow().last().cloned()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, frame: PlayerFrame) {
        self.frames.borrow_mut().push(frame);
    }
}

/// One-second ticks advancing one second, ten-second fallback duration.
pub fn coarse_config() -> SyncConfig {
    SyncConfig {
        period: Duration::from_millis(1000),
        quantum: 1.0,
        default_duration: 10.0,
        request_timeout: Duration::from_secs(5),
    }
}

pub struct Harness {
    pub sync: SyncLoop,
    pub facade: Rc<ScriptedFacade>,
    pub renderer: Rc<RecordingRenderer>,
}

impl Harness {
    /// Must be created inside a `LocalSet` so tickers can be spawned.
    pub fn new(facade: ScriptedFacade) -> Self {
        let config = coarse_config();
        let facade = Rc::new(facade);
        let renderer = Rc::new(RecordingRenderer::default());
        let model = Rc::new(RefCell::new(ProgressModel::new(config.default_duration)));
        let sync = SyncLoop::new(
            model,
            facade.clone(),
            renderer.clone(),
            Rc::new(TokioLocalSpawner),
            config,
        );
        Self {
            sync,
            facade,
            renderer,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.sync.progress().elapsed()
    }
}

/// Let paused tokio time move forward, driving any armed ticker.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
