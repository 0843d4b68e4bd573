//! Application shell: setup ordering and the main loop
//!
//! The shell ties the pieces together in a fixed order: window first, then
//! context (negotiated with the window), and only then may a renderer be
//! constructed and handed to [`Shell::run`]. The loop drains all pending
//! events, dispatches them, draws one frame, and presents it, until quit.

use thiserror::Error;

use crate::config::{ConfigError, ShellConfig};
use crate::events::ShellEvent;
use crate::renderer::{PolygonMode, Renderer};
use crate::window::{Window, WindowError};

/// Shell-level errors. Every variant is a fatal setup error: the shell is
/// the top-level process and does not recover, retry, or re-surface them.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Window system or context setup failed.
    #[error("window system error: {0}")]
    Window(#[from] WindowError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Window-state changes requested by the dispatch table, applied by the
/// loop after the event drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowRequest {
    EnterFullscreen,
    ExitFullscreen,
}

/// Wireframe toggle key.
const KEY_WIREFRAME: glfw::Key = glfw::Key::W;
/// Filled-polygon toggle key.
const KEY_FILL: glfw::Key = glfw::Key::S;
/// Enter fullscreen.
const KEY_FULLSCREEN: glfw::Key = glfw::Key::F;
/// Leave fullscreen.
const KEY_WINDOWED: glfw::Key = glfw::Key::G;

/// Event-to-action mapping and loop state.
///
/// Separate from [`Shell`] so the dispatch table can be exercised without a
/// display. The running flag only ever transitions true to false; further
/// quit events are no-ops.
struct Dispatch {
    running: bool,
    pixel_scale: u32,
    display_bounds: (u32, u32),
}

impl Dispatch {
    const fn new(pixel_scale: u32, display_bounds: (u32, u32)) -> Self {
        Self {
            running: true,
            pixel_scale,
            display_bounds,
        }
    }

    const fn running(&self) -> bool {
        self.running
    }

    fn quit(&mut self) {
        if self.running {
            log::info!("Quit requested");
        }
        self.running = false;
    }

    fn handle<R: Renderer>(
        &mut self,
        event: &ShellEvent,
        renderer: &mut R,
    ) -> Option<WindowRequest> {
        match *event {
            ShellEvent::Quit => {
                self.quit();
                None
            }
            ShellEvent::KeyPressed(key) => self.handle_key(key, renderer),
            ShellEvent::MouseMove(ref motion) => {
                renderer.mouse_move(motion);
                None
            }
            ShellEvent::MousePress(ref button) => {
                renderer.mouse_press(button);
                None
            }
            ShellEvent::MouseRelease(ref button) => {
                renderer.mouse_release(button);
                None
            }
            ShellEvent::Wheel(ref wheel) => {
                renderer.wheel(wheel);
                None
            }
            ShellEvent::Resized { width, height } => {
                // Exact doubling on high-density displays
                renderer.resize(width * self.pixel_scale, height * self.pixel_scale);
                None
            }
        }
    }

    fn handle_key<R: Renderer>(
        &mut self,
        key: glfw::Key,
        renderer: &mut R,
    ) -> Option<WindowRequest> {
        match key {
            glfw::Key::Escape => {
                self.quit();
                None
            }
            KEY_WIREFRAME => {
                renderer.set_polygon_mode(PolygonMode::Line);
                None
            }
            KEY_FILL => {
                renderer.set_polygon_mode(PolygonMode::Fill);
                None
            }
            KEY_FULLSCREEN => {
                // Viewport covers double the original display bounds
                let (width, height) = self.display_bounds;
                renderer.resize(width * 2, height * 2);
                Some(WindowRequest::EnterFullscreen)
            }
            KEY_WINDOWED => Some(WindowRequest::ExitFullscreen),
            _ => None,
        }
    }
}

/// The application shell.
///
/// Owns the window and its context. Drawing belongs to the [`Renderer`]
/// passed to [`run`](Self::run), which the caller constructs only after
/// [`Shell::new`] has succeeded, so the renderer can never observe a
/// missing context.
pub struct Shell {
    window: Window,
    dispatch: Dispatch,
}

impl Shell {
    /// Bring up the video subsystem, the window, and the context.
    ///
    /// Any failure here is fatal to the caller by contract; nothing is
    /// retried.
    pub fn new(config: &ShellConfig) -> Result<Self, ShellError> {
        log::info!("Initializing application shell...");
        let window = Window::new(config)?;
        let dispatch = Dispatch::new(window.pixel_scale(), window.display_bounds());
        Ok(Self { window, dispatch })
    }

    /// Look up an OpenGL symbol in the shell's context. Intended for
    /// renderer construction.
    pub fn get_proc_address(&mut self, procname: &str) -> glfw::GLProc {
        self.window.get_proc_address(procname)
    }

    /// Drawable surface size in pixels.
    #[must_use]
    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.window.get_framebuffer_size()
    }

    /// Run the main loop until quit.
    ///
    /// Each iteration drains all pending events non-blockingly, dispatches
    /// them, then draws and presents one frame. A quit observed during the
    /// drain exits before the draw, so a quit that arrives immediately
    /// after startup produces zero draw calls.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), ShellError> {
        log::info!("Entering main loop");

        // Present once before the loop so the window shows something while
        // the renderer warms up
        self.window.swap_buffers();

        while self.dispatch.running() {
            self.window.poll_events();

            let mut requests = Vec::new();
            for (_, event) in self.window.flush_events() {
                log::debug!("Window event: {event:?}");
                if let Some(event) = ShellEvent::from_window_event(&event) {
                    if let Some(request) = self.dispatch.handle(&event, renderer) {
                        requests.push(request);
                    }
                }
            }
            for request in requests {
                match request {
                    WindowRequest::EnterFullscreen => self.window.set_fullscreen(true),
                    WindowRequest::ExitFullscreen => self.window.set_fullscreen(false),
                }
            }

            if !self.dispatch.running() {
                break;
            }

            renderer.draw();
            self.window.swap_buffers();
        }

        log::info!("Main loop finished, shutting down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{MouseButtonEvent, MouseMotion, WheelEvent};

    /// Records every renderer call in order, without touching any GL.
    #[derive(Default)]
    struct RecordingRenderer {
        draws: usize,
        resizes: Vec<(u32, u32)>,
        motions: Vec<MouseMotion>,
        presses: Vec<MouseButtonEvent>,
        releases: Vec<MouseButtonEvent>,
        wheels: Vec<WheelEvent>,
        polygon_modes: Vec<PolygonMode>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self) {
            self.draws += 1;
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.resizes.push((width, height));
        }
        fn mouse_move(&mut self, event: &MouseMotion) {
            self.motions.push(*event);
        }
        fn mouse_press(&mut self, event: &MouseButtonEvent) {
            self.presses.push(*event);
        }
        fn mouse_release(&mut self, event: &MouseButtonEvent) {
            self.releases.push(*event);
        }
        fn wheel(&mut self, event: &WheelEvent) {
            self.wheels.push(*event);
        }
        fn set_polygon_mode(&mut self, mode: PolygonMode) {
            self.polygon_modes.push(mode);
        }
    }

    fn dispatch() -> Dispatch {
        Dispatch::new(1, (1920, 1080))
    }

    #[test]
    fn test_quit_event_stops_running() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        assert!(dispatch.running());
        dispatch.handle(&ShellEvent::Quit, &mut renderer);
        assert!(!dispatch.running());
    }

    #[test]
    fn test_quit_is_idempotent() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(&ShellEvent::Quit, &mut renderer);
        dispatch.handle(&ShellEvent::Quit, &mut renderer);
        dispatch.handle(&ShellEvent::KeyPressed(glfw::Key::Escape), &mut renderer);
        assert!(!dispatch.running());
    }

    #[test]
    fn test_escape_key_acts_as_quit() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(&ShellEvent::KeyPressed(glfw::Key::Escape), &mut renderer);
        assert!(!dispatch.running());
    }

    #[test]
    fn test_quit_before_first_draw_means_zero_draws() {
        // A quit received during the first event drain must exit the loop
        // before any draw call
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(&ShellEvent::Quit, &mut renderer);
        assert!(!dispatch.running());
        assert_eq!(renderer.draws, 0);
    }

    #[test]
    fn test_polygon_mode_last_applied_wins() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(&ShellEvent::KeyPressed(KEY_WIREFRAME), &mut renderer);
        dispatch.handle(&ShellEvent::KeyPressed(KEY_FILL), &mut renderer);
        dispatch.handle(&ShellEvent::KeyPressed(KEY_WIREFRAME), &mut renderer);

        assert_eq!(
            renderer.polygon_modes,
            vec![PolygonMode::Line, PolygonMode::Fill, PolygonMode::Line]
        );
        assert_eq!(renderer.polygon_modes.last(), Some(&PolygonMode::Line));
        assert!(dispatch.running());
    }

    #[test]
    fn test_resize_forwards_exact_size_at_standard_density() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(
            &ShellEvent::Resized {
                width: 800,
                height: 600,
            },
            &mut renderer,
        );

        // Exactly one resize, before any draw
        assert_eq!(renderer.resizes, vec![(800, 600)]);
        assert_eq!(renderer.draws, 0);
    }

    #[test]
    fn test_resize_doubles_exactly_at_high_density() {
        let mut dispatch = Dispatch::new(2, (1920, 1080));
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(
            &ShellEvent::Resized {
                width: 800,
                height: 600,
            },
            &mut renderer,
        );

        assert_eq!(renderer.resizes, vec![(1600, 1200)]);
    }

    #[test]
    fn test_fullscreen_key_requests_and_sets_double_viewport() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        let request = dispatch.handle(&ShellEvent::KeyPressed(KEY_FULLSCREEN), &mut renderer);
        assert_eq!(request, Some(WindowRequest::EnterFullscreen));
        // Double the original display bounds
        assert_eq!(renderer.resizes, vec![(3840, 2160)]);

        let request = dispatch.handle(&ShellEvent::KeyPressed(KEY_WINDOWED), &mut renderer);
        assert_eq!(request, Some(WindowRequest::ExitFullscreen));
        assert_eq!(renderer.resizes.len(), 1);
    }

    #[test]
    fn test_pointer_events_forward_raw_payloads() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        dispatch.handle(
            &ShellEvent::MouseMove(MouseMotion { x: 1.0, y: 2.0 }),
            &mut renderer,
        );
        dispatch.handle(
            &ShellEvent::MousePress(MouseButtonEvent {
                button: glfw::MouseButtonLeft,
            }),
            &mut renderer,
        );
        dispatch.handle(
            &ShellEvent::MouseRelease(MouseButtonEvent {
                button: glfw::MouseButtonLeft,
            }),
            &mut renderer,
        );
        dispatch.handle(
            &ShellEvent::Wheel(WheelEvent { dx: 0.0, dy: -1.0 }),
            &mut renderer,
        );

        assert_eq!(renderer.motions, vec![MouseMotion { x: 1.0, y: 2.0 }]);
        assert_eq!(renderer.presses.len(), 1);
        assert_eq!(renderer.releases.len(), 1);
        assert_eq!(renderer.wheels, vec![WheelEvent { dx: 0.0, dy: -1.0 }]);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut dispatch = dispatch();
        let mut renderer = RecordingRenderer::default();

        let request = dispatch.handle(&ShellEvent::KeyPressed(glfw::Key::A), &mut renderer);
        assert_eq!(request, None);
        assert!(dispatch.running());
        assert_eq!(renderer.resizes.len(), 0);
        assert_eq!(renderer.polygon_modes.len(), 0);
    }
}
