//=========================================================================
// Event Collector
//=========================================================================
//
// Controller-side end of the platform channel.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → Vec<InputEvent>
//
// Polling is non-blocking and bounded per frame; pacing is the clock's
// job. Window close and channel disconnect both become a trailing
// `InputEvent::Quit`, so the event handler sees one quit path.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== EventCollector ======================================================

/// Upper bound on platform messages drained per frame.
pub const MAX_EVENTS_PER_FRAME: usize = 100;

/// Drains pending platform messages into one frame's input events.
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
    closed: bool,
}

impl EventCollector {
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(32),
            closed: false,
        }
    }

    /// Collects everything pending for this frame.
    ///
    /// Once the platform has closed (window closed or sender dropped),
    /// every subsequent call returns a lone `Quit`.
    pub fn collect_frame(&mut self) -> &[InputEvent] {
        self.events.clear();

        if self.closed {
            self.events.push(InputEvent::Quit);
            return &self.events;
        }

        let mut drained = 0;
        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => {
                    debug!("Platform reported window closed");
                    self.close();
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    debug!("Platform channel disconnected");
                    self.close();
                    break;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if self.is_backlogged(drained) {
            warn!(
                "Event queue backlog: drained {} batches, {} still pending",
                drained,
                self.receiver.len()
            );
        }

        &self.events
    }

    /// The per-frame cap was hit and batches are still waiting.
    fn is_backlogged(&self, drained: usize) -> bool {
        drained >= MAX_EVENTS_PER_FRAME && !self.receiver.is_empty()
    }

    /// Whether the platform side has gone away.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn close(&mut self) {
        self.closed = true;
        self.events.push(InputEvent::Quit);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
