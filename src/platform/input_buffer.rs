//=========================================================================
// Input Buffer
//
// Per-frame store for input gathered between two redraws.
//
// - Events keep arrival order.
// - A run of consecutive cursor moves collapses to its latest position,
//   kept where the run sits in the frame.
//
// The buffer is emptied by `drain()` once per frame and keeps its
// allocation for the next one.
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const EVENTS_BASE: usize = 64;

        Self {
            events: Vec::with_capacity(EVENTS_BASE),
        }
    }

    //--- Push -------------------------------------------------------------

    /// Appends `event`, or overwrites the previous entry when both are
    /// cursor moves.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_continuous() {
            if let Some(last) = self.events.last_mut() {
                if last.is_continuous() {
                    *last = event;
                    return;
                }
            }
        }
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------

    /// Takes this frame's events, or `None` if nothing arrived.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
