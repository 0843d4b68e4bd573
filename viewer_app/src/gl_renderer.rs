//! Minimal raw-OpenGL renderer
//!
//! Stands in for a real drawing library behind the shell's `Renderer`
//! seam. It owns all drawing state: a clear color driven by mouse drag
//! (hue) and wheel (brightness), the viewport, and the polygon mode. Raw
//! GL calls are confined to this module.

use gl_shell::{MouseButtonEvent, MouseMotion, PolygonMode, Renderer, WheelEvent};

/// Degrees of hue change per pixel of horizontal drag.
const HUE_PER_PIXEL: f32 = 0.5;
/// Brightness change per wheel step.
const BRIGHTNESS_STEP: f32 = 0.05;

/// Renderer that clears the frame with an interactively chosen color.
pub struct GlRenderer {
    hue: f32,
    brightness: f32,
    dragging: bool,
    cursor: (f64, f64),
}

impl GlRenderer {
    /// Load the GL function pointers through `loader` and prepare initial
    /// state. Must be called with a current context; the shell guarantees
    /// this when `loader` wraps its `get_proc_address`.
    pub fn new<F>(mut loader: F, width: u32, height: u32) -> Self
    where
        F: FnMut(&str) -> glfw::GLProc,
    {
        gl::load_with(|symbol| loader(symbol));

        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::Enable(gl::MULTISAMPLE);
            gl::Viewport(0, 0, width as i32, height as i32);
        }
        log::info!("OpenGL loaded, initial viewport {width}x{height}");

        Self {
            hue: 210.0,
            brightness: 0.3,
            dragging: false,
            cursor: (0.0, 0.0),
        }
    }
}

impl Renderer for GlRenderer {
    fn draw(&mut self) {
        let (r, g, b) = shade_color(self.hue, self.brightness);
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Viewport resized to {width}x{height}");
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    fn mouse_move(&mut self, event: &MouseMotion) {
        if self.dragging {
            let dx = (event.x - self.cursor.0) as f32;
            self.hue = (self.hue + dx * HUE_PER_PIXEL).rem_euclid(360.0);
        }
        self.cursor = (event.x, event.y);
    }

    fn mouse_press(&mut self, event: &MouseButtonEvent) {
        if event.button == glfw::MouseButtonLeft {
            self.dragging = true;
        }
    }

    fn mouse_release(&mut self, event: &MouseButtonEvent) {
        if event.button == glfw::MouseButtonLeft {
            self.dragging = false;
        }
    }

    fn wheel(&mut self, event: &WheelEvent) {
        self.brightness = (self.brightness + event.dy as f32 * BRIGHTNESS_STEP).clamp(0.0, 1.0);
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        let gl_mode = match mode {
            PolygonMode::Fill => gl::FILL,
            PolygonMode::Line => gl::LINE,
        };
        unsafe {
            gl::PolygonMode(gl::FRONT_AND_BACK, gl_mode);
        }
    }
}

/// Saturated hue plus brightness to RGB, enough for a clear color.
fn shade_color(hue: f32, brightness: f32) -> (f32, f32, f32) {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = brightness * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (brightness, x, 0.0),
        1 => (x, brightness, 0.0),
        2 => (0.0, brightness, x),
        3 => (0.0, x, brightness),
        4 => (x, 0.0, brightness),
        _ => (brightness, 0.0, x),
    };
    (r, g, b)
}
