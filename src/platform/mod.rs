//=========================================================================
// Platform Subsystem
//
// Owns the OS window and forwards its input to the controller thread.
//
// Architecture:
// ```text
//  Main Thread:                     Controller Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  Controller          │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  EventCollector      │
//  │   ├─ Converts Winit      │    │   ↓                  │
//  │   └─ Tracks modifiers    │    │  EventHandler        │
//  │   ↓                      │    │   ↓                  │
//  │  InputBuffer             │    │  Active State        │
//  │   ↓                      │    └──────────────────────┘
//  │  RedrawRequested (flush) │          ↑          │
//  │   ↓                      │          │          │
//  │  Bounded Channel ────────┼──────────┘          │
//  │                          │   PlatformEvent     │
//  │  user_event ◀────────────┼─────────────────────┘
//  └──────────────────────────┘   PlatformSignal (EventLoopProxy)
// ```
//
// - RedrawRequested is the frame boundary: everything buffered since the
//   previous redraw goes out as one batch. Empty batches are not sent.
// - A full channel drops the batch with a warning instead of blocking the
//   event loop.
// - Winit requires the main thread on macOS/iOS, so this runs on the
//   thread that called `Engine::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::config::WindowConfig;
use crate::core::platform_bridge::{PlatformEvent, PlatformSignal};
use crate::error::PlatformError;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== Platform ============================================================

/// Window manager and input forwarder.
///
/// Not `Send`; it stays on the main thread and talks to the controller
/// only through `event_sender` and the event loop proxy.
pub(crate) struct Platform {
    /// Created in `resumed()`.
    window: Option<Window>,
    window_config: WindowConfig,
    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, window_config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            window_config,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
        }
    }

    /// Creates the event loop that carries [`PlatformSignal`]s.
    ///
    /// Call before spawning the controller so it can be handed a proxy.
    pub fn create_event_loop() -> Result<EventLoop<PlatformSignal>, PlatformError> {
        EventLoop::<PlatformSignal>::with_user_event()
            .build()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the controller
    /// signals shutdown.
    ///
    /// # Errors
    ///
    /// [`PlatformError::EventLoopExecution`] if winit reports a failure.
    pub fn run(mut self, event_loop: EventLoop<PlatformSignal>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends everything buffered since the last redraw.
    fn flush_input_buffer(&mut self) {
        let Some(events) = self.buffer.drain() else {
            return;
        };

        let count = events.len();
        trace!(target: "platform::input", "Flushing {} events", count);

        match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping {} events", count);
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!(target: "platform::input", "Controller gone, dropping {} events", count);
            }
        }
    }

    fn notify_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Controller already stopped");
        }
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<PlatformSignal> for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let config = &self.window_config;
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_decorations(!config.borderless);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI (borderless: {})",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor(),
                    config.borderless
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.flush_input_buffer();
                self.notify_closed();
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_processor.update_modifiers(modifiers.state());
                trace!(
                    target: "platform::input",
                    "Modifiers changed: {:?}",
                    self.input_processor.current_modifiers()
                );
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position);
                self.buffer.push(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Key ignored: {:?}", key_event.physical_key),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.buffer.push(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(event) = self.input_processor.process_mouse_wheel(delta) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, signal: PlatformSignal) {
        match signal {
            PlatformSignal::Shutdown => {
                info!(target: "platform", "Controller finished, closing window");
                event_loop.exit();
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
