use crate::sync::sync_loop::SyncLoop;
use std::cell::Cell;
use std::rc::Rc;

/// Horizontal extent of the timeline in the same coordinate space as pointer X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineBounds {
    pub left: f64,
    pub width: f64,
}

impl TimelineBounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Position of `pointer_x` along the timeline, clamped to `0.0..=1.0`.
    pub fn fraction_at(&self, pointer_x: f64) -> f64 {
        if !self.width.is_finite() || self.width <= 0.0 || !pointer_x.is_finite() {
            return 0.0;
        }
        ((pointer_x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// A press that arrived before the timeline was measured.
#[derive(Debug, Clone, Copy)]
struct PendingPress {
    down_x: f64,
    up_x: Option<f64>,
}

/// Drag-to-seek over the progress bar.
///
/// While a drag is active the ticker leaves the position alone. The new
/// position is local only; nothing is sent to the server.
#[derive(Clone)]
pub struct SeekController {
    sync: SyncLoop,
    bounds: Rc<Cell<Option<TimelineBounds>>>,
    pending: Rc<Cell<Option<PendingPress>>>,
}

impl SeekController {
    pub fn new(sync: SyncLoop) -> Self {
        Self {
            sync,
            bounds: Rc::new(Cell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.sync.progress().is_seeking()
    }

    pub fn begin_seek(&self, pointer_x: f64, bounds: TimelineBounds) {
        self.bounds.set(Some(bounds));
        self.sync.with_model(|m| m.set_seeking(true));
        self.commit(pointer_x, bounds);
    }

    /// Start a drag whose timeline bounds are still being measured. The ticker
    /// is held right away; the position lands once [`Self::resolve_bounds`] runs.
    pub fn begin_seek_deferred(&self, pointer_x: f64) {
        self.pending.set(Some(PendingPress {
            down_x: pointer_x,
            up_x: None,
        }));
        self.sync.with_model(|m| m.set_seeking(true));
        self.sync.render();
    }

    /// Replay a deferred press against freshly measured bounds. No-op when
    /// nothing is pending.
    pub fn resolve_bounds(&self, bounds: TimelineBounds) {
        let Some(press) = self.pending.take() else {
            return;
        };
        self.begin_seek(press.down_x, bounds);
        if let Some(up_x) = press.up_x {
            self.end_seek(up_x);
        }
    }

    /// Drop a deferred press when the timeline could not be measured.
    pub fn abandon_pending(&self) {
        if self.pending.take().is_some() {
            self.sync.with_model(|m| m.set_seeking(false));
            self.sync.render();
        }
    }

    pub fn continue_seek(&self, pointer_x: f64) {
        if !self.is_active() {
            return;
        }
        if let Some(bounds) = self.bounds.get() {
            self.commit(pointer_x, bounds);
        }
    }

    /// Commit the final position and hand authority back to the ticker.
    pub fn end_seek(&self, pointer_x: f64) {
        if !self.is_active() {
            return;
        }
        if let Some(mut press) = self.pending.get() {
            // Released before measurement finished; finish in resolve_bounds.
            press.up_x = Some(pointer_x);
            self.pending.set(Some(press));
            return;
        }
        if let Some(bounds) = self.bounds.take() {
            let fraction = bounds.fraction_at(pointer_x);
            self.sync.with_model(|m| {
                let target = fraction * m.duration();
                m.seek_to(target);
            });
        }
        self.sync.with_model(|m| m.set_seeking(false));
        self.sync.render();
    }

    fn commit(&self, pointer_x: f64, bounds: TimelineBounds) {
        let fraction = bounds.fraction_at(pointer_x);
        self.sync.with_model(|m| {
            let target = fraction * m.duration();
            m.seek_to(target);
        });
        self.sync.render();
    }
}
