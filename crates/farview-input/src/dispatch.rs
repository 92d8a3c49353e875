//! Dispatch timer: drains batched pointer state at a fixed interval.
//!
//! Batching coalesces every motion event within a tick period into at most
//! one move command and one position command, trading per-event fidelity
//! for a bounded outbound command rate.

use std::sync::{Arc, Weak};
use std::time::Duration;

use farview_protocol::InputSink;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::handler::PointerState;

/// Drain pending pointer state, emitting at most one move command and one
/// position command.
///
/// This runs once per timer tick, but is callable directly by hosts that
/// drive their own polling loop.
#[allow(clippy::cast_possible_truncation)]
pub fn flush_pending(state: &PointerState, sink: &dyn InputSink) {
    let (dx, dy) = state.deltas.drain();
    if dx != 0 || dy != 0 {
        if let Err(e) = sink.send_move_event(dx, dy) {
            warn!(error = %e, "failed to send move event");
        }
    }

    if state.report.take_updated() {
        // If the lock is held, the event thread is mid-update; its write
        // raises the flag again, so the sample is picked up next tick.
        if let Some(snapshot) = state.report.try_read() {
            let region = state.video_region(snapshot.window_width, snapshot.window_height);
            let (x, y) = region.clamp_local(snapshot.x, snapshot.y);
            if let Err(e) =
                sink.send_position_event(x as i16, y as i16, region.w as i16, region.h as i16)
            {
                warn!(error = %e, "failed to send position event");
            }
        }
    }
}

/// Spawn the dispatch timer task.
///
/// The task holds only a `Weak` reference to the pointer state: once the
/// handler is dropped the next tick fails to upgrade and the task exits,
/// so no tick can ever touch freed state.
#[must_use]
pub fn spawn(
    state: Weak<PointerState>,
    sink: Arc<dyn InputSink>,
    period: Duration,
) -> DispatchHandle {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let Some(state) = state.upgrade() else {
                debug!("pointer state gone, dispatch timer exiting");
                break;
            };
            flush_pending(&state, sink.as_ref());
        }
    });

    DispatchHandle { task }
}

/// Handle to a running dispatch timer. Stops the timer when shut down or
/// dropped, guaranteeing no tick runs after teardown.
#[derive(Debug)]
pub struct DispatchHandle {
    task: JoinHandle<()>,
}

impl DispatchHandle {
    /// Stop the timer. Idempotent.
    pub fn shutdown(&self) {
        self.task.abort();
    }

    /// Whether the timer task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for DispatchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farview_protocol::mock::MockSink;
    use farview_types::InputCommand;

    use crate::report::PositionSnapshot;

    #[test]
    fn flush_emits_single_move_for_accumulated_deltas() {
        let state = PointerState::new(1920, 1080);
        let sink = MockSink::new();
        let commands = sink.handle();

        state.deltas.accumulate(5, -3);
        state.deltas.accumulate(2, 2);
        flush_pending(&state, &sink);

        assert_eq!(commands.commands(), vec![InputCommand::Move { dx: 7, dy: -1 }]);
    }

    #[test]
    fn flush_with_nothing_pending_emits_nothing() {
        let state = PointerState::new(1920, 1080);
        let sink = MockSink::new();
        let commands = sink.handle();

        flush_pending(&state, &sink);
        assert!(commands.is_empty());
    }

    #[test]
    fn flush_clamps_position_into_region() {
        // 800x600 stream in a 1600x900 window -> 1200x900 region at x=200
        let state = PointerState::new(800, 600);
        let sink = MockSink::new();
        let commands = sink.handle();

        state.report.store(PositionSnapshot {
            x: 150,
            y: 50,
            window_width: 1600,
            window_height: 900,
        });
        flush_pending(&state, &sink);

        assert_eq!(
            commands.commands(),
            vec![InputCommand::Position {
                x: 0, // 150 is left of the region edge at 200
                y: 50,
                reference_width: 1200,
                reference_height: 900,
            }]
        );
    }

    #[test]
    fn position_sent_once_per_sample() {
        let state = PointerState::new(1920, 1080);
        let sink = MockSink::new();
        let commands = sink.handle();

        state.report.store(PositionSnapshot {
            x: 10,
            y: 10,
            window_width: 1920,
            window_height: 1080,
        });
        flush_pending(&state, &sink);
        flush_pending(&state, &sink);

        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn fresh_sample_rearms_dispatch() {
        let state = PointerState::new(1920, 1080);
        let sink = MockSink::new();
        let commands = sink.handle();

        state.report.store(PositionSnapshot {
            x: 10,
            y: 10,
            window_width: 1920,
            window_height: 1080,
        });
        flush_pending(&state, &sink);
        assert_eq!(commands.len(), 1);

        state.report.store(PositionSnapshot {
            x: 20,
            y: 20,
            window_width: 1920,
            window_height: 1080,
        });
        flush_pending(&state, &sink);
        assert_eq!(commands.len(), 2);
        assert_eq!(
            commands.commands()[1],
            InputCommand::Position {
                x: 20,
                y: 20,
                reference_width: 1920,
                reference_height: 1080,
            }
        );
    }
}
