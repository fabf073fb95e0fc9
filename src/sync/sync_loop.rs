//! Progress ticker that keeps the local position honest against the server.
//!
//! The loop advances [`ProgressModel`] by a fixed quantum every period and asks
//! the playback authority whether it is still playing. At most one ticker is
//! ever armed: [`SyncLoop::start`] cancels the previous one before spawning the
//! next, so rapid restarts (double-clicking next) never double the speed.

use crate::api::error::PlaybackError;
use crate::api::facade::PlaybackFacade;
use crate::api::models::{CurrentTrack, PlaylistSnapshot, SongEntry};
use crate::config::SyncConfig;
use crate::runtime::{self, Spawner};
use crate::sync::progress::ProgressModel;
use crate::sync::view::{LoopState, PlayerFrame, ViewRenderer};
use futures_util::future::{abortable, AbortHandle};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A seek gesture holds the position; nothing changed.
    Seeking,
    /// The state query failed; retried on the next tick.
    Unreachable,
    Advanced,
    /// The server reports playback paused; ticking stopped.
    Paused,
    /// Track ended with loop-current on and restarted.
    Looped,
    /// Track ended and the server moved on to the next song.
    Completed,
    /// Someone else started or stopped the loop while this tick was waiting.
    Superseded,
}

impl TickOutcome {
    fn keeps_ticking(self) -> bool {
        matches!(self, Self::Seeking | Self::Unreachable | Self::Advanced)
    }
}

/// A different title than the one being displayed means a new track.
pub fn song_changed(previous: Option<&str>, next: &str) -> bool {
    previous != Some(next)
}

struct Inner {
    model: Rc<RefCell<ProgressModel>>,
    facade: Rc<dyn PlaybackFacade>,
    renderer: Rc<dyn ViewRenderer>,
    spawner: Rc<dyn Spawner>,
    config: SyncConfig,
    state: Cell<LoopState>,
    generation: Cell<u64>,
    ticker: RefCell<Option<AbortHandle>>,
    songs: RefCell<Vec<SongEntry>>,
    current: RefCell<CurrentTrack>,
    genres: RefCell<Vec<String>>,
}

/// Handle to the page's single synchronization loop. Clones share state.
#[derive(Clone)]
pub struct SyncLoop {
    inner: Rc<Inner>,
}

impl SyncLoop {
    pub fn new(
        model: Rc<RefCell<ProgressModel>>,
        facade: Rc<dyn PlaybackFacade>,
        renderer: Rc<dyn ViewRenderer>,
        spawner: Rc<dyn Spawner>,
        config: SyncConfig,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                model,
                facade,
                renderer,
                spawner,
                config,
                state: Cell::new(LoopState::Idle),
                generation: Cell::new(0),
                ticker: RefCell::new(None),
                songs: RefCell::new(Vec::new()),
                current: RefCell::new(CurrentTrack::default()),
                genres: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn state(&self) -> LoopState {
        self.inner.state.get()
    }

    pub fn config(&self) -> SyncConfig {
        self.inner.config
    }

    pub fn progress(&self) -> Ref<'_, ProgressModel> {
        self.inner.model.borrow()
    }

    pub fn facade(&self) -> Rc<dyn PlaybackFacade> {
        self.inner.facade.clone()
    }

    /// Last authoritative descriptor of the current track.
    pub fn current(&self) -> CurrentTrack {
        self.inner.current.borrow().clone()
    }

    pub fn songs(&self) -> Vec<SongEntry> {
        self.inner.songs.borrow().clone()
    }

    pub(crate) fn with_model<R>(&self, f: impl FnOnce(&mut ProgressModel) -> R) -> R {
        f(&mut self.inner.model.borrow_mut())
    }

    pub fn frame(&self) -> PlayerFrame {
        PlayerFrame::compose(
            &self.inner.model.borrow(),
            &self.inner.songs.borrow(),
            &self.inner.current.borrow(),
            &self.inner.genres.borrow(),
            self.state(),
        )
    }

    pub fn render(&self) {
        let frame = self.frame();
        self.inner.renderer.render(frame);
    }

    /// Arm a fresh ticker, cancelling any previous one first.
    ///
    /// The reset is skipped while a seek gesture owns the position.
    pub fn start(&self, reset_first: bool) {
        self.cancel_ticker();
        if reset_first {
            self.reset_unless_seeking();
        }
        let generation = self.bump_generation();
        self.inner.state.set(LoopState::Running);
        self.render();

        let (task, handle) = abortable(Self::drive(self.clone(), generation));
        *self.inner.ticker.borrow_mut() = Some(handle);
        debug!("SyncLoop: started generation {} (reset: {})", generation, reset_first);
        self.inner.spawner.spawn_local(Box::pin(async move {
            let _ = task.await;
        }));
    }

    /// Idempotent; safe from any state.
    pub fn stop(&self) {
        self.cancel_ticker();
        self.bump_generation();
        if self.state() != LoopState::Stopped {
            debug!("SyncLoop: stopped");
        }
        self.inner.state.set(LoopState::Stopped);
    }

    /// Ticker body. A driver that was detached rather than aborted notices the
    /// generation moved on and exits at its next wake-up.
    async fn drive(this: SyncLoop, generation: u64) {
        loop {
            runtime::sleep(this.inner.config.period).await;
            if this.inner.generation.get() != generation {
                debug!("SyncLoop: generation {} retired", generation);
                break;
            }
            if !this.tick().await.keeps_ticking() {
                break;
            }
        }
    }

    /// One ticker wake-up. Public so the loop can be stepped by hand; stepping
    /// across the end of a track hands over to a freshly armed ticker.
    pub async fn tick(&self) -> TickOutcome {
        if self.progress().is_seeking() {
            return TickOutcome::Seeking;
        }
        let generation = self.inner.generation.get();

        let snapshot = match self.fetch_state().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("SyncLoop: state query failed, retrying next tick: {}", err);
                return TickOutcome::Unreachable;
            }
        };

        // A drag may have started while the query was in flight.
        if self.progress().is_seeking() {
            return TickOutcome::Seeking;
        }
        if self.inner.generation.get() != generation {
            return TickOutcome::Superseded;
        }

        if self.absorb(snapshot) {
            info!("SyncLoop: server switched track, restarting progress");
            self.with_model(|m| m.reset());
        }

        if !self.inner.current.borrow().is_playing {
            self.stop();
            self.render();
            return TickOutcome::Paused;
        }

        let quantum = self.inner.config.quantum;
        self.with_model(|m| m.advance(quantum));
        self.render();

        if !self.progress().reached_end() {
            return TickOutcome::Advanced;
        }
        self.finish_track().await
    }

    async fn finish_track(&self) -> TickOutcome {
        // Stop without aborting: this very task still has work to do.
        self.inner.ticker.borrow_mut().take();
        let generation = self.bump_generation();
        self.inner.state.set(LoopState::Stopped);

        if self.progress().looping() {
            debug!("SyncLoop: track ended, looping current");
            self.start(true);
            return TickOutcome::Looped;
        }

        debug!("SyncLoop: track ended, advancing to next");
        if let Err(err) = self.inner.facade.advance_next().await {
            warn!("SyncLoop: advance to next failed: {}", err);
        }
        if self.inner.generation.get() != generation {
            return TickOutcome::Superseded;
        }

        // A drag started during the request keeps its position.
        self.reset_unless_seeking();
        if let Err(err) = self.resync(true).await {
            warn!("SyncLoop: resync after track end failed: {}", err);
            if self.inner.generation.get() == generation {
                self.start(true);
            }
        }
        TickOutcome::Completed
    }

    /// Re-fetch authoritative state and restart or halt the ticker to match it.
    ///
    /// A changed track always resets the display, whatever `requested_reset` says,
    /// unless a seek gesture is active. On failure nothing local is touched.
    pub async fn resync(&self, requested_reset: bool) -> Result<(), PlaybackError> {
        let snapshot = self.fetch_state().await?;
        let changed = self.absorb(snapshot);
        if changed {
            debug!("SyncLoop: now on {:?}", self.inner.current.borrow().title);
        }
        let should_reset = requested_reset || changed;

        if self.inner.current.borrow().is_playing {
            self.start(should_reset);
        } else {
            self.stop();
            if should_reset {
                self.reset_unless_seeking();
            }
            self.render();
        }
        Ok(())
    }

    async fn fetch_state(&self) -> Result<PlaylistSnapshot, PlaybackError> {
        let limit = self.inner.config.request_timeout;
        runtime::with_timeout(limit, self.inner.facade.get_state())
            .await
            .unwrap_or(Err(PlaybackError::Timeout(limit)))
    }

    /// Copy authoritative state into the model. Returns whether the track changed.
    fn absorb(&self, snapshot: PlaylistSnapshot) -> bool {
        let PlaylistSnapshot {
            songs,
            current,
            genres,
        } = snapshot;

        let changed = {
            let mut model = self.inner.model.borrow_mut();
            let changed = song_changed(model.track_identity(), &current.title);
            model.set_duration(current.duration_or(self.inner.config.default_duration));
            model.set_looping(current.loop_current);
            model.set_track_identity(Some(current.title.clone()));
            changed
        };

        *self.inner.songs.borrow_mut() = songs;
        *self.inner.current.borrow_mut() = current;
        *self.inner.genres.borrow_mut() = genres;
        changed
    }

    fn reset_unless_seeking(&self) {
        self.with_model(|m| {
            if !m.is_seeking() {
                m.reset();
            }
        });
    }

    fn cancel_ticker(&self) {
        if let Some(handle) = self.inner.ticker.borrow_mut().take() {
            handle.abort();
        }
    }

    fn bump_generation(&self) -> u64 {
        let next = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_change_predicate() {
        assert!(song_changed(None, "A"));
        assert!(song_changed(Some("A"), "B"));
        assert!(!song_changed(Some("A"), "A"));
    }

    #[test]
    fn only_progressing_outcomes_keep_ticking() {
        assert!(TickOutcome::Advanced.keeps_ticking());
        assert!(TickOutcome::Seeking.keeps_ticking());
        assert!(TickOutcome::Unreachable.keeps_ticking());
        assert!(!TickOutcome::Paused.keeps_ticking());
        assert!(!TickOutcome::Looped.keeps_ticking());
        assert!(!TickOutcome::Completed.keeps_ticking());
        assert!(!TickOutcome::Superseded.keeps_ticking());
    }
}
