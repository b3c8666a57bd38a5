//=========================================================================
// Controller
//=========================================================================
//
// Owns the main game loop and the active state.
//
// Each frame:
//  1. Swap in the successor if the active state reports done
//  2. Tick the clock (caps the frame rate, yields dt and measured fps)
//  3. Clear the display
//  4. Dispatch this frame's input events (quit ends the loop here)
//  5. Update the active state
//  6. Render the active state
//  7. Present the display
//
// The loop ends on a quit event (window closed, platform gone) or when a
// finished state names no successor.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::clock::Clock;
use crate::core::display::{Color, Display};
use crate::core::event_handler::{EventHandler, TickControl};
use crate::core::input::InputEvent;
use crate::core::platform_bridge::EventCollector;
use crate::core::state::{State, StateKey, StateRegistry};
use crate::error::EngineError;

//=== Controller ==========================================================

/// Runs states one after another until the game is closed.
pub struct Controller<K: StateKey> {
    display: Display,
    clock: Clock,
    fps: u32,
    registry: StateRegistry<K>,
    current_key: K,
    current: Box<dyn State<K>>,
    event_handler: EventHandler,
    frames: u64,
}

impl<K: StateKey> Controller<K> {
    //--- Construction -----------------------------------------------------

    /// Creates a controller running `starting_state` first.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownState`] if `starting_state` is not registered.
    pub fn new(
        display: Display,
        clock: Clock,
        registry: StateRegistry<K>,
        starting_state: K,
        fps: u32,
    ) -> Result<Self, EngineError> {
        info!(
            "Initializing controller (start: {:?}, fps: {}, states: {})",
            starting_state,
            fps,
            registry.len()
        );

        let current = registry.create(starting_state)?;

        Ok(Self {
            display,
            clock,
            fps,
            registry,
            current_key: starting_state,
            current,
            event_handler: EventHandler::new(),
            frames: 0,
        })
    }

    //--- Main Loop --------------------------------------------------------

    /// Runs frames until the game is told to stop.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownState`] if a finished state names a successor
    /// that is not registered.
    pub fn run(&mut self, collector: &mut EventCollector) -> Result<(), EngineError> {
        info!("Controller loop started in state {:?}", self.current_key);

        loop {
            if self.advance_state()? == TickControl::Exit {
                break;
            }

            let frame_time = self.clock.tick(self.fps);
            let dt = Clock::delta_seconds(frame_time);
            let actual_fps = self.clock.fps();

            let events = collector.collect_frame();
            if self.run_frame(events, dt, actual_fps) == TickControl::Exit {
                break;
            }
        }

        info!(
            "Controller loop stopped after {} frames in state {:?}",
            self.frames, self.current_key
        );
        Ok(())
    }

    /// Runs one frame with explicit timing instead of the clock.
    ///
    /// Performs the state check and everything after the clock tick.
    pub fn frame(
        &mut self,
        events: &[InputEvent],
        dt: f64,
        actual_fps: f64,
    ) -> Result<TickControl, EngineError> {
        if self.advance_state()? == TickControl::Exit {
            return Ok(TickControl::Exit);
        }
        Ok(self.run_frame(events, dt, actual_fps))
    }

    //--- Accessors --------------------------------------------------------

    /// Key of the active state.
    pub fn current_key(&self) -> K {
        self.current_key
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Frames completed (rendered and presented).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn event_handler(&self) -> &EventHandler {
        &self.event_handler
    }

    //--- Internal Helpers -------------------------------------------------

    /// Replaces a finished state with a fresh instance of its successor.
    fn advance_state(&mut self) -> Result<TickControl, EngineError> {
        if !self.current.is_done() {
            return Ok(TickControl::Continue);
        }

        let Some(next) = self.current.next_state() else {
            info!("State {:?} finished with no successor", self.current_key);
            return Ok(TickControl::Exit);
        };

        debug!("Transition {:?} -> {:?}", self.current_key, next);

        self.display.fill(Color::BLACK);
        self.current = self.registry.create(next)?;
        self.current_key = next;

        Ok(TickControl::Continue)
    }

    /// Steps 3-7 of a frame.
    fn run_frame(&mut self, events: &[InputEvent], dt: f64, actual_fps: f64) -> TickControl {
        self.display.fill(Color::BLACK);

        let control = self
            .event_handler
            .handle_events::<K, dyn State<K>>(events, self.current.as_mut());
        if control == TickControl::Exit {
            return TickControl::Exit;
        }

        self.current.update(dt);
        self.current.render(&mut self.display, actual_fps);
        self.display.flip();
        self.frames += 1;

        trace!("Frame {} done (dt: {:.4}s, fps: {:.1})", self.frames, dt, actual_fps);
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{JoystickEvent, KeyCode, KeyEvent, Modifiers, MouseEvent};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestKey {
        Intro,
        Play,
        Missing,
    }

    impl StateKey for TestKey {}

    type Log = Arc<Mutex<Vec<String>>>;

    /// Finishes after `lifetime` updates, logging every hook call.
    struct Scripted {
        name: &'static str,
        lifetime: u32,
        updates: u32,
        next: Option<TestKey>,
        log: Log,
    }

    impl Scripted {
        fn factory(
            name: &'static str,
            lifetime: u32,
            next: Option<TestKey>,
            log: &Log,
        ) -> impl Fn() -> Scripted + Send + 'static {
            let log = Arc::clone(log);
            move || {
                log.lock().unwrap().push(format!("{}:new", name));
                Scripted { name, lifetime, updates: 0, next, log: Arc::clone(&log) }
            }
        }

        fn push(&self, entry: &str) {
            self.log.lock().unwrap().push(format!("{}:{}", self.name, entry));
        }
    }

    impl State<TestKey> for Scripted {
        fn handle_key_event(&mut self, _event: &KeyEvent) {
            self.push("key");
        }
        fn handle_mouse_event(&mut self, _event: &MouseEvent) {
            self.push("mouse");
        }
        fn handle_joystick_event(&mut self, _event: &JoystickEvent) {
            self.push("joystick");
        }
        fn update(&mut self, _dt: f64) {
            self.updates += 1;
            self.push("update");
        }
        fn render(&mut self, display: &mut Display, _actual_fps: f64) {
            display.set_pixel(0, 0, Color::WHITE);
            self.push("render");
        }
        fn is_done(&self) -> bool {
            self.updates >= self.lifetime
        }
        fn next_state(&self) -> Option<TestKey> {
            self.next
        }
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    fn controller(registry: StateRegistry<TestKey>, start: TestKey) -> Controller<TestKey> {
        Controller::new(Display::new(4, 4), Clock::new(), registry, start, 80).unwrap()
    }

    #[test]
    fn unknown_starting_state_is_rejected() {
        let registry = StateRegistry::<TestKey>::new();
        let result = Controller::new(Display::new(1, 1), Clock::new(), registry, TestKey::Intro, 80);

        assert!(matches!(result, Err(EngineError::UnknownState(_))));
    }

    #[test]
    fn frame_runs_events_update_render_in_order() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", u32::MAX, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        let events = [
            InputEvent::Key(KeyEvent::Down { key: KeyCode::KeyA, modifiers: Modifiers::NONE }),
            InputEvent::Mouse(MouseEvent::Moved { x: 0.0, y: 0.0 }),
        ];
        let control = controller.frame(&events, 0.0125, 80.0).unwrap();

        assert_eq!(control, TickControl::Continue);
        assert_eq!(
            entries(&log),
            vec!["intro:new", "intro:key", "intro:mouse", "intro:update", "intro:render"]
        );
        assert_eq!(controller.frames(), 1);
        assert_eq!(controller.display().frames_presented(), 1);
        assert_eq!(controller.display().front_buffer()[0], Color::WHITE.to_argb());
    }

    #[test]
    fn display_is_cleared_before_render() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", u32::MAX, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        controller.frame(&[], 0.0, 0.0).unwrap();

        // Pixel (1, 0) is never drawn; it must stay black on every frame.
        let front = controller.display().front_buffer();
        assert_eq!(front[1], Color::BLACK.to_argb());
        assert_eq!(front[0], Color::WHITE.to_argb());
    }

    #[test]
    fn quit_skips_update_and_render() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", u32::MAX, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        let control = controller.frame(&[InputEvent::Quit], 0.0, 0.0).unwrap();

        assert_eq!(control, TickControl::Exit);
        assert_eq!(entries(&log), vec!["intro:new"]);
        assert_eq!(controller.frames(), 0);
    }

    #[test]
    fn finished_state_is_replaced_on_next_frame() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", 1, Some(TestKey::Play), &log))
            .with(TestKey::Play, Scripted::factory("play", u32::MAX, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        controller.frame(&[], 0.0, 0.0).unwrap();
        assert_eq!(controller.current_key(), TestKey::Intro, "swap happens at frame start");

        controller.frame(&[], 0.0, 0.0).unwrap();
        assert_eq!(controller.current_key(), TestKey::Play);

        assert_eq!(
            entries(&log),
            vec![
                "intro:new",
                "intro:update",
                "intro:render",
                "play:new",
                "play:update",
                "play:render",
            ]
        );
    }

    #[test]
    fn reentering_a_key_builds_a_fresh_state() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", 1, Some(TestKey::Play), &log))
            .with(TestKey::Play, Scripted::factory("play", 1, Some(TestKey::Intro), &log));
        let mut controller = controller(registry, TestKey::Intro);

        for _ in 0..3 {
            controller.frame(&[], 0.0, 0.0).unwrap();
        }

        assert_eq!(controller.current_key(), TestKey::Intro);
        let created = entries(&log).iter().filter(|e| e.ends_with(":new")).count();
        assert_eq!(created, 3);
    }

    #[test]
    fn finished_state_without_successor_stops() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", 1, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        assert_eq!(controller.frame(&[], 0.0, 0.0).unwrap(), TickControl::Continue);
        assert_eq!(controller.frame(&[], 0.0, 0.0).unwrap(), TickControl::Exit);
        assert_eq!(controller.frames(), 1);
    }

    #[test]
    fn unregistered_successor_is_an_error() {
        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", 1, Some(TestKey::Missing), &log));
        let mut controller = controller(registry, TestKey::Intro);

        controller.frame(&[], 0.0, 0.0).unwrap();
        let err = controller.frame(&[], 0.0, 0.0).unwrap_err();

        assert!(matches!(err, EngineError::UnknownState(ref key) if key == "Missing"));
    }

    #[test]
    fn run_stops_on_window_closed() {
        use crate::core::platform_bridge::PlatformEvent;
        use crossbeam_channel::unbounded;

        let log = Log::default();
        let registry = StateRegistry::new()
            .with(TestKey::Intro, Scripted::factory("intro", u32::MAX, None, &log));
        let mut controller = controller(registry, TestKey::Intro);

        let (tx, rx) = unbounded();
        tx.send(PlatformEvent::Inputs(vec![InputEvent::Joystick(JoystickEvent::Added { id: 3 })]))
            .unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        let mut collector = EventCollector::new(rx);
        controller.run(&mut collector).unwrap();

        assert_eq!(entries(&log), vec!["intro:new", "intro:joystick"]);
        assert_eq!(controller.event_handler().stats().quit, 1);
    }
}
