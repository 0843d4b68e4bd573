//! Window management using GLFW
//!
//! Owns the platform window and the OpenGL context bound to it. Context
//! attributes are negotiated through window hints, so the context exists
//! exactly when window creation succeeds and never before.

use glfw::Context;
use thiserror::Error;

use crate::config::ShellConfig;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The video subsystem could not be brought up.
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or context creation failed. GLFW negotiates the context
    /// together with the window, so a rejected attribute set lands here.
    #[error("window or context creation failed")]
    CreationFailed,

    /// Any other platform error, with GLFW's message.
    #[error("GLFW error: {0}")]
    GlfwError(String),
}

/// Convenience alias for window results.
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Field order matters: the window must drop before the GLFW handle so the
/// context is destroyed before the subsystem terminates. Teardown is
/// deterministic rather than left to process exit.
pub struct Window {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    glfw: glfw::Glfw,
    display_bounds: (u32, u32),
    pixel_scale: u32,
    restore_pos: (i32, i32),
    restore_size: (u32, u32),
}

impl Window {
    /// Create a window sized to half the primary display's bounds, with an
    /// OpenGL context negotiated from `config.context`, and make the
    /// context current on this thread.
    pub fn new(config: &ShellConfig) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::log_errors).map_err(|_| WindowError::InitializationFailed)?;

        // Context attributes must be set before the window exists
        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(config.context.gl_major));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(config.context.gl_minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        let samples = (config.context.samples > 0).then_some(config.context.samples);
        glfw.window_hint(glfw::WindowHint::Samples(samples));
        glfw.window_hint(glfw::WindowHint::DepthBits(Some(config.context.depth_bits)));
        glfw.window_hint(glfw::WindowHint::DoubleBuffer(config.context.double_buffer));
        glfw.window_hint(glfw::WindowHint::Resizable(config.window.resizable));
        glfw.window_hint(glfw::WindowHint::CocoaRetinaFramebuffer(true));

        // Half the display's width and height, falling back to the
        // configured size on headless-ish setups
        let display_bounds = glfw.with_primary_monitor(|_, monitor| {
            monitor
                .and_then(|monitor| monitor.get_video_mode())
                .map(|mode| (mode.width, mode.height))
        });
        let (width, height) = display_bounds.map_or(
            (config.window.width, config.window.height),
            |(w, h)| (w / 2, h / 2),
        );

        let (mut window, events) = glfw
            .create_window(
                width.max(1),
                height.max(1),
                &config.window.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        // Event kinds the shell dispatches on
        window.set_key_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        window.make_current();
        glfw.set_swap_interval(if config.window.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        let pixel_scale = detect_pixel_scale(&window);
        let restore_pos = window.get_pos();
        log::info!(
            "Window created: {}x{} (pixel scale {}), GL {}.{} core requested",
            width,
            height,
            pixel_scale,
            config.context.gl_major,
            config.context.gl_minor
        );

        Ok(Self {
            window,
            events,
            glfw,
            display_bounds: display_bounds
                .unwrap_or((config.window.width, config.window.height)),
            pixel_scale,
            restore_pos,
            restore_size: (width.max(1), height.max(1)),
        })
    }

    /// Pump the platform event queue. Non-blocking.
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Iterate over events gathered by the last [`poll_events`](Self::poll_events).
    pub fn flush_events(&self) -> glfw::FlushedMessages<(f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Window size in window coordinates.
    #[must_use]
    pub fn get_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Drawable surface size in pixels.
    #[must_use]
    pub fn get_framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Present the back buffer. Paced by the swap interval.
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Ratio of pixels to window coordinates: 2 on high-density displays,
    /// otherwise 1. Fixed at creation time.
    #[must_use]
    pub const fn pixel_scale(&self) -> u32 {
        self.pixel_scale
    }

    /// Bounds of the primary display at creation time, in window
    /// coordinates.
    #[must_use]
    pub const fn display_bounds(&self) -> (u32, u32) {
        self.display_bounds
    }

    /// Switch between monitor-sized fullscreen and the previous windowed
    /// placement.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if fullscreen {
            self.restore_pos = self.window.get_pos();
            self.restore_size = self.get_size();
            let fallback = self.display_bounds;
            let window = &mut self.window;
            self.glfw.with_primary_monitor(|_, monitor| {
                if let Some(monitor) = monitor {
                    let mode = monitor.get_video_mode();
                    let (width, height) =
                        mode.as_ref().map_or(fallback, |m| (m.width, m.height));
                    let refresh = mode.as_ref().map(|m| m.refresh_rate);
                    window.set_monitor(
                        glfw::WindowMode::FullScreen(monitor),
                        0,
                        0,
                        width,
                        height,
                        refresh,
                    );
                }
            });
        } else {
            let (x, y) = self.restore_pos;
            let (width, height) = self.restore_size;
            self.window
                .set_monitor(glfw::WindowMode::Windowed, x, y, width, height, None);
        }
    }

    /// Look up an OpenGL symbol in this window's context. Only meaningful
    /// once the context is current, which [`Window::new`] guarantees.
    pub fn get_proc_address(&mut self, procname: &str) -> glfw::GLProc {
        self.window.get_proc_address(procname)
    }
}

/// High-density displays report window coordinates in points; the
/// framebuffer is larger by an integral factor.
fn detect_pixel_scale(window: &glfw::PWindow) -> u32 {
    let (logical, _) = window.get_size();
    let (pixels, _) = window.get_framebuffer_size();
    if logical > 0 && pixels > logical {
        (f64::from(pixels) / f64::from(logical)).round() as u32
    } else {
        1
    }
}
