//! Event-thread entry points for pointer events.

use std::sync::Arc;
use std::time::Duration;

use farview_protocol::InputSink;
use farview_types::{
    ButtonAction, ButtonState, MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, PointerButton,
    Rect,
};
use tracing::{info, warn};

use crate::accumulator::DeltaAccumulator;
use crate::capture::CaptureState;
use crate::config::MouseConfig;
use crate::dispatch::{self, DispatchHandle};
use crate::report::{PositionReport, PositionSnapshot};
use crate::WindowHandle;

/// Pointer state shared between the event thread and the dispatch timer.
///
/// Created with the handler and shared via `Arc`; the timer holds only a
/// `Weak` reference, so handler teardown makes further ticks no-ops.
#[derive(Debug)]
pub struct PointerState {
    pub capture: CaptureState,
    pub deltas: DeltaAccumulator,
    pub report: PositionReport,
    stream_width: i32,
    stream_height: i32,
}

impl PointerState {
    #[must_use]
    pub fn new(stream_width: i32, stream_height: i32) -> Self {
        Self {
            capture: CaptureState::new(true),
            deltas: DeltaAccumulator::new(),
            report: PositionReport::new(),
            stream_width,
            stream_height,
        }
    }

    /// The video region the stream occupies within a window of the given
    /// size. Recomputed on every use because the window can resize between
    /// samples.
    #[must_use]
    pub fn video_region(&self, window_width: i32, window_height: i32) -> Rect {
        Rect::of_size(self.stream_width, self.stream_height)
            .fit_within(Rect::of_size(window_width, window_height))
    }
}

/// Translates local pointer events into remote-input commands.
///
/// Button and wheel events are forwarded immediately; motion is batched in
/// [`PointerState`] and flushed by the dispatch timer.
pub struct MouseHandler {
    state: Arc<PointerState>,
    sink: Arc<dyn InputSink>,
    window: Arc<dyn WindowHandle>,
    absolute_mode: bool,
    poll_interval: Duration,
}

impl MouseHandler {
    #[must_use]
    pub fn new(
        config: &MouseConfig,
        sink: Arc<dyn InputSink>,
        window: Arc<dyn WindowHandle>,
    ) -> Self {
        Self {
            state: Arc::new(PointerState::new(
                config.stream_width,
                config.stream_height,
            )),
            sink,
            window,
            absolute_mode: config.absolute_mode,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// The shared pointer state, for driving dispatch externally.
    #[must_use]
    pub fn pointer_state(&self) -> Arc<PointerState> {
        Arc::clone(&self.state)
    }

    /// Spawn the dispatch timer for this handler's state, ticking at the
    /// configured poll interval.
    ///
    /// The returned handle stops the timer on `shutdown()` or drop; the
    /// task itself exits once the handler (and with it the pointer state)
    /// is gone.
    #[must_use]
    pub fn start_dispatch(&self) -> DispatchHandle {
        dispatch::spawn(
            Arc::downgrade(&self.state),
            Arc::clone(&self.sink),
            self.poll_interval,
        )
    }

    /// Handle a button press or release from the event thread.
    pub fn handle_button_event(&self, event: &MouseButtonEvent) {
        if event.source.is_synthetic() {
            return;
        }

        if !self.state.capture.is_active() {
            // Capture again if clicked when unbound. Acquisition happens on
            // release rather than press so the host never sees a released
            // event for the click that was consumed here.
            if event.button == PointerButton::Left && event.state == ButtonState::Released {
                self.state.capture.set_active(true);
            }
            return;
        }

        let Some(button) = event.button.to_protocol() else {
            info!(button = ?event.button, "unhandled mouse button");
            return;
        };

        let action = match event.state {
            ButtonState::Pressed => ButtonAction::Press,
            ButtonState::Released => ButtonAction::Release,
        };
        if let Err(e) = self.sink.send_button_event(action, button) {
            warn!(error = %e, "failed to send button event");
        }
    }

    /// Handle pointer motion from the event thread.
    ///
    /// Motion is batched until the next polling tick rather than forwarded
    /// per event; per-event forwarding overwhelms the remote input poll
    /// rate and shows up as input lag.
    pub fn handle_motion_event(&self, event: &MouseMotionEvent) {
        if event.source.is_synthetic() || !self.state.capture.is_active() {
            return;
        }

        if self.absolute_mode {
            // Query the window size before taking the lock to keep the
            // critical section to plain field assignments.
            let (window_width, window_height) = self.window.size();
            self.state.report.store(PositionSnapshot {
                x: event.x,
                y: event.y,
                window_width,
                window_height,
            });
        } else {
            self.state.deltas.accumulate(event.xrel, event.yrel);
        }
    }

    /// Handle a scroll wheel event from the event thread.
    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_wheel_event(&self, event: &MouseWheelEvent) {
        if event.source.is_synthetic() || !self.state.capture.is_active() {
            return;
        }

        if event.delta_y != 0 {
            if let Err(e) = self.sink.send_scroll_event(event.delta_y as i8) {
                warn!(error = %e, "failed to send scroll event");
            }
        }
    }

    /// Whether a window-relative point lies inside the video region.
    ///
    /// Pass `window` when the caller already holds a consistent size (e.g.
    /// from a [`PositionSnapshot`]); `None` queries the window live.
    #[must_use]
    pub fn is_mouse_in_video_region(
        &self,
        px: i32,
        py: i32,
        window: Option<(i32, i32)>,
    ) -> bool {
        let (window_width, window_height) = window.unwrap_or_else(|| self.window.size());
        self.state
            .video_region(window_width, window_height)
            .contains(px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use farview_protocol::mock::MockSink;
    use farview_types::{InputCommand, MouseButton, PointerSource};

    use crate::mock::MockWindow;

    fn handler(config: &MouseConfig) -> (MouseHandler, farview_protocol::mock::MockSinkHandle) {
        let sink = MockSink::new();
        let commands = sink.handle();
        let window = Arc::new(MockWindow::new(1600, 900));
        (MouseHandler::new(config, Arc::new(sink), window), commands)
    }

    fn button_event(button: PointerButton, state: ButtonState) -> MouseButtonEvent {
        MouseButtonEvent {
            source: PointerSource::Hardware,
            button,
            state,
            timestamp_ms: 0,
        }
    }

    #[test]
    fn press_then_release_reacquires_capture_silently() {
        let (handler, commands) = handler(&MouseConfig::default());
        handler.state.capture.set_active(false);

        handler.handle_button_event(&button_event(PointerButton::Left, ButtonState::Pressed));
        assert!(!handler.state.capture.is_active());
        assert!(commands.is_empty());

        handler.handle_button_event(&button_event(PointerButton::Left, ButtonState::Released));
        assert!(handler.state.capture.is_active());
        assert!(commands.is_empty());
    }

    #[test]
    fn press_alone_does_not_acquire_capture() {
        let (handler, commands) = handler(&MouseConfig::default());
        handler.state.capture.set_active(false);

        handler.handle_button_event(&button_event(PointerButton::Left, ButtonState::Pressed));
        assert!(!handler.state.capture.is_active());
        assert!(commands.is_empty());
    }

    #[test]
    fn non_primary_buttons_ignored_while_inactive() {
        let (handler, commands) = handler(&MouseConfig::default());
        handler.state.capture.set_active(false);

        handler.handle_button_event(&button_event(PointerButton::Right, ButtonState::Released));
        handler.handle_button_event(&button_event(PointerButton::X1, ButtonState::Pressed));
        assert!(!handler.state.capture.is_active());
        assert!(commands.is_empty());
    }

    #[test]
    fn active_buttons_forwarded() {
        let (handler, commands) = handler(&MouseConfig::default());

        handler.handle_button_event(&button_event(PointerButton::Right, ButtonState::Pressed));
        handler.handle_button_event(&button_event(PointerButton::Right, ButtonState::Released));

        assert_eq!(
            commands.commands(),
            vec![
                InputCommand::Button {
                    action: ButtonAction::Press,
                    button: MouseButton::Secondary,
                },
                InputCommand::Button {
                    action: ButtonAction::Release,
                    button: MouseButton::Secondary,
                },
            ]
        );
    }

    #[test]
    fn unrecognized_button_dropped() {
        let (handler, commands) = handler(&MouseConfig::default());
        handler.handle_button_event(&button_event(PointerButton::Other(7), ButtonState::Pressed));
        assert!(commands.is_empty());
    }

    #[test]
    fn synthetic_events_ignored() {
        let (handler, commands) = handler(&MouseConfig::default());

        handler.handle_button_event(&MouseButtonEvent {
            source: PointerSource::SyntheticTouch,
            button: PointerButton::Left,
            state: ButtonState::Pressed,
            timestamp_ms: 0,
        });
        handler.handle_motion_event(&MouseMotionEvent {
            source: PointerSource::SyntheticTouch,
            x: 10,
            y: 10,
            xrel: 5,
            yrel: 5,
        });
        handler.handle_wheel_event(&MouseWheelEvent {
            source: PointerSource::SyntheticTouch,
            delta_y: 1,
        });

        assert!(commands.is_empty());
        assert_eq!(handler.state.deltas.drain(), (0, 0));
    }

    #[test]
    fn relative_motion_accumulates_without_sending() {
        let (handler, commands) = handler(&MouseConfig::default());

        handler.handle_motion_event(&MouseMotionEvent {
            source: PointerSource::Hardware,
            x: 100,
            y: 100,
            xrel: 4,
            yrel: -3,
        });
        handler.handle_motion_event(&MouseMotionEvent {
            source: PointerSource::Hardware,
            x: 103,
            y: 98,
            xrel: 3,
            yrel: -2,
        });

        assert!(commands.is_empty());
        assert_eq!(handler.state.deltas.drain(), (7, -5));
    }

    #[test]
    fn motion_ignored_while_inactive() {
        let (handler, _) = handler(&MouseConfig::default());
        handler.state.capture.set_active(false);

        handler.handle_motion_event(&MouseMotionEvent {
            source: PointerSource::Hardware,
            x: 100,
            y: 100,
            xrel: 4,
            yrel: -3,
        });
        assert_eq!(handler.state.deltas.drain(), (0, 0));
    }

    #[test]
    fn absolute_motion_stores_report_with_window_size() {
        let config = MouseConfig {
            absolute_mode: true,
            ..MouseConfig::default()
        };
        let (handler, commands) = handler(&config);

        handler.handle_motion_event(&MouseMotionEvent {
            source: PointerSource::Hardware,
            x: 640,
            y: 480,
            xrel: 1,
            yrel: 1,
        });

        assert!(commands.is_empty());
        assert!(handler.state.report.take_updated());
        assert_eq!(
            handler.state.report.try_read().unwrap(),
            PositionSnapshot {
                x: 640,
                y: 480,
                window_width: 1600,
                window_height: 900,
            }
        );
    }

    #[test]
    fn wheel_forwarded_when_nonzero() {
        let (handler, commands) = handler(&MouseConfig::default());

        handler.handle_wheel_event(&MouseWheelEvent {
            source: PointerSource::Hardware,
            delta_y: 0,
        });
        assert!(commands.is_empty());

        handler.handle_wheel_event(&MouseWheelEvent {
            source: PointerSource::Hardware,
            delta_y: -2,
        });
        assert_eq!(commands.commands(), vec![InputCommand::Scroll { delta: -2 }]);
    }

    #[test]
    fn poll_interval_taken_from_config() {
        let (handler, _) = handler(&MouseConfig {
            poll_interval_ms: 16,
            ..MouseConfig::default()
        });
        assert_eq!(handler.poll_interval, Duration::from_millis(16));
    }

    #[test]
    fn hit_test_uses_letterboxed_region() {
        let (handler, _) = handler(&MouseConfig {
            stream_width: 800,
            stream_height: 600,
            ..MouseConfig::default()
        });

        // 800x600 into 1600x900 -> region x 200..1400
        assert!(!handler.is_mouse_in_video_region(100, 100, None));
        assert!(handler.is_mouse_in_video_region(900, 450, None));
        assert!(handler.is_mouse_in_video_region(900, 450, Some((1600, 900))));
    }
}
