//=========================================================================
// Engine
//
// Entry point: wires the platform, the channel and the controller thread.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_fps()              ├─ spawns controller thread
//         ├─ with_channel_capacity() ├─ runs platform (main thread)
//         ├─ with_window()           └─ joins controller, reports errors
//         └─ from_config()
// ```
//
// Shutdown paths:
// - Window closed: platform sends WindowClosed, exits its loop, controller
//   sees Quit and returns.
// - Controller finished (or failed, or panicked): a Shutdown signal goes
//   through the event loop proxy and the platform exits.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, error, info};
use winit::event_loop::EventLoopProxy;

//=== Internal Dependencies ===============================================

use crate::config::{GameConfig, WindowConfig};
use crate::constants::{CHANNEL_CAPACITY, FPS};
use crate::core::clock::Clock;
use crate::core::controller::Controller;
use crate::core::display::Display;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, PlatformSignal};
use crate::core::state::{StateKey, StateRegistry};
use crate::error::EngineError;
use crate::platform::Platform;

//=== EngineBuilder =======================================================

/// Configures and constructs an [`Engine`].
///
/// Defaults: 80 fps, channel capacity 128, an 800x600 borderless window.
///
/// ```no_run
/// use state_engine::EngineBuilder;
/// use state_engine::states::{self, GameState};
///
/// EngineBuilder::new()
///     .with_fps(60)
///     .build(states::registry(), GameState::State1)?
///     .run()?;
/// # Ok::<(), state_engine::error::EngineError>(())
/// ```
pub struct EngineBuilder<K: StateKey> {
    fps: u32,
    channel_capacity: usize,
    window: WindowConfig,
    _phantom: std::marker::PhantomData<K>,
}

impl<K: StateKey> EngineBuilder<K> {
    pub fn new() -> Self {
        Self {
            fps: FPS,
            channel_capacity: CHANNEL_CAPACITY,
            window: WindowConfig::default(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Takes fps, channel capacity and window settings from `config`.
    ///
    /// Expects a validated config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new()
            .with_fps(config.timing.fps)
            .with_channel_capacity(config.timing.channel_capacity)
            .with_window(config.window.clone())
    }

    /// Frame-rate cap of the controller loop.
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive");
        self.fps = fps;
        self
    }

    /// Platform → controller channel capacity, in batches.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }

    /// Builds the engine with `initial` as the first active state.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownState`] if `initial` is not in `registry`.
    pub fn build(self, registry: StateRegistry<K>, initial: K) -> Result<Engine<K>, EngineError> {
        info!(
            "Building engine (fps: {}, channel: {}, window: {}x{})",
            self.fps, self.channel_capacity, self.window.width, self.window.height
        );

        let display = Display::new(self.window.width, self.window.height);
        let controller = Controller::new(display, Clock::new(), registry, initial, self.fps)?;

        Ok(Engine {
            controller,
            fps: self.fps,
            channel_capacity: self.channel_capacity,
            window: self.window,
        })
    }
}

impl<K: StateKey> Default for EngineBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A built engine, ready to run.
pub struct Engine<K: StateKey> {
    controller: Controller<K>,
    fps: u32,
    channel_capacity: usize,
    window: WindowConfig,
}

impl<K: StateKey> Engine<K> {
    /// Opens the window and runs the game until it ends.
    ///
    /// Blocks the calling thread, which must be the main thread on
    /// macOS/iOS.
    ///
    /// # Errors
    ///
    /// Platform failures first, then controller failures
    /// ([`EngineError::UnknownState`], [`EngineError::ControllerPanicked`]).
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (fps: {})", self.fps);

        //--- 1. Event loop and its proxy --------------------------------
        let event_loop = Platform::create_event_loop()?;
        let shutdown = ShutdownOnDrop(event_loop.create_proxy());

        //--- 2. Platform → controller channel ---------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        debug!("Channel created (capacity: {})", self.channel_capacity);

        //--- 3. Controller thread ---------------------------------------
        let mut controller = self.controller;
        let handle = thread::Builder::new()
            .name("controller".into())
            .spawn(move || {
                let _shutdown = shutdown;
                let mut collector = EventCollector::new(rx);
                let result = controller.run(&mut collector);
                if let Err(e) = &result {
                    error!("Controller stopped with error: {}", e);
                }
                result
            })
            .map_err(EngineError::ThreadSpawn)?;
        info!("Controller thread spawned");

        //--- 4. Platform on this thread ---------------------------------
        let platform_result = Platform::new(tx, self.window).run(event_loop);
        info!("Platform event loop exited");

        //--- 5. Join -----------------------------------------------------
        let controller_result = match handle.join() {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Controller thread panicked: {}", message);
                Err(EngineError::ControllerPanicked(message))
            }
        };

        platform_result?;
        controller_result?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=== Internal Helpers ====================================================

/// Tells the platform to exit when the controller thread ends, including
/// by panic.
struct ShutdownOnDrop(EventLoopProxy<PlatformSignal>);

impl Drop for ShutdownOnDrop {
    fn drop(&mut self) {
        if self.0.send_event(PlatformSignal::Shutdown).is_err() {
            debug!("Event loop already closed");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
