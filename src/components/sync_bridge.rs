//! Bridges the synchronization core into Dioxus: frames land in a signal and
//! ticker tasks run on the Dioxus executor.

use crate::runtime::Spawner;
use crate::sync::{PlayerFrame, ViewRenderer};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures_util::future::LocalBoxFuture;

/// Latest frame painted by the sync loop.
#[derive(Clone, Copy)]
pub struct PlayerFrameSignal(pub Signal<PlayerFrame>);

/// Message from the last failed command, shown until dismissed.
#[derive(Clone, Copy)]
pub struct CommandErrorSignal(pub Signal<Option<String>>);

pub struct SignalRenderer {
    frame: Signal<PlayerFrame>,
}

impl SignalRenderer {
    pub fn new(frame: Signal<PlayerFrame>) -> Self {
        Self { frame }
    }
}

impl ViewRenderer for SignalRenderer {
    fn render(&self, frame: PlayerFrame) {
        let mut signal = self.frame;
        // Skip identical frames to avoid needless re-renders
        if *signal.peek() != frame {
            signal.set(frame);
        }
    }
}

/// Spawns on the root scope so ticker tasks outlive the component that armed them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DioxusSpawner;

impl Spawner for DioxusSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        let _ = spawn_forever(task);
    }
}
