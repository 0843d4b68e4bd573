//! # GL Shell
//!
//! A minimal OpenGL application shell: it opens a window, negotiates a
//! hardware-accelerated context, pumps input events, and repeatedly invokes
//! a drawing routine owned by an external [`Renderer`].
//!
//! The shell owns the boilerplate only. All drawing state lives behind the
//! [`Renderer`] trait, so implementations can be swapped without touching
//! the event loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_shell::{Renderer, Shell, ShellConfig};
//!
//! struct MyRenderer;
//!
//! impl Renderer for MyRenderer {
//!     fn draw(&mut self) {}
//!     fn resize(&mut self, _width: u32, _height: u32) {}
//!     fn mouse_move(&mut self, _event: &gl_shell::MouseMotion) {}
//!     fn mouse_press(&mut self, _event: &gl_shell::MouseButtonEvent) {}
//!     fn mouse_release(&mut self, _event: &gl_shell::MouseButtonEvent) {}
//!     fn wheel(&mut self, _event: &gl_shell::WheelEvent) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut shell = Shell::new(&ShellConfig::default())?;
//!     let mut renderer = MyRenderer;
//!     shell.run(&mut renderer)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod events;
pub mod window;

mod renderer;
mod shell;

pub use config::{Config, ConfigError, ContextConfig, ShellConfig, WindowConfig};
pub use events::{MouseButtonEvent, MouseMotion, ShellEvent, WheelEvent};
pub use renderer::{PolygonMode, Renderer};
pub use shell::{Shell, ShellError};
pub use window::{Window, WindowError};

/// Initialize the logging system from the `RUST_LOG` environment.
///
/// Thin wrapper so applications do not need to depend on `env_logger`
/// directly.
pub fn init_logging() {
    env_logger::init();
}
