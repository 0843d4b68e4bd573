//! Event translation from platform window events
//!
//! GLFW reports everything that happens to the window; the shell only acts
//! on a handful of kinds. [`ShellEvent::from_window_event`] narrows the
//! platform stream to that handful, dropping everything else.

/// Pointer motion payload, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMotion {
    /// Cursor x position.
    pub x: f64,
    /// Cursor y position.
    pub y: f64,
}

/// Pointer button payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    /// Which button changed state.
    pub button: glfw::MouseButton,
}

/// Scroll wheel payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Horizontal scroll offset.
    pub dx: f64,
    /// Vertical scroll offset.
    pub dy: f64,
}

/// The subset of window events the shell dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellEvent {
    /// The window close button was pressed.
    Quit,
    /// A key went down.
    KeyPressed(glfw::Key),
    /// The pointer moved.
    MouseMove(MouseMotion),
    /// A pointer button was pressed.
    MousePress(MouseButtonEvent),
    /// A pointer button was released.
    MouseRelease(MouseButtonEvent),
    /// The scroll wheel moved.
    Wheel(WheelEvent),
    /// The window was resized, dimensions in window coordinates.
    Resized {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
}

impl ShellEvent {
    /// Translate a platform event into a shell event.
    ///
    /// Returns `None` for event kinds the shell ignores (focus changes,
    /// key repeats and releases, character input, and so on).
    #[must_use]
    pub fn from_window_event(event: &glfw::WindowEvent) -> Option<Self> {
        match *event {
            glfw::WindowEvent::Close => Some(Self::Quit),
            glfw::WindowEvent::Key(key, _, glfw::Action::Press, _) => {
                Some(Self::KeyPressed(key))
            }
            glfw::WindowEvent::CursorPos(x, y) => {
                Some(Self::MouseMove(MouseMotion { x, y }))
            }
            glfw::WindowEvent::MouseButton(button, glfw::Action::Press, _) => {
                Some(Self::MousePress(MouseButtonEvent { button }))
            }
            glfw::WindowEvent::MouseButton(button, glfw::Action::Release, _) => {
                Some(Self::MouseRelease(MouseButtonEvent { button }))
            }
            glfw::WindowEvent::Scroll(dx, dy) => Some(Self::Wheel(WheelEvent { dx, dy })),
            glfw::WindowEvent::Size(width, height) => Some(Self::Resized {
                width: width.max(0) as u32,
                height: height.max(0) as u32,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::{Action, Key, Modifiers, WindowEvent};

    #[test]
    fn test_close_translates_to_quit() {
        assert_eq!(
            ShellEvent::from_window_event(&WindowEvent::Close),
            Some(ShellEvent::Quit)
        );
    }

    #[test]
    fn test_key_press_translates() {
        let event = WindowEvent::Key(Key::Escape, 0, Action::Press, Modifiers::empty());
        assert_eq!(
            ShellEvent::from_window_event(&event),
            Some(ShellEvent::KeyPressed(Key::Escape))
        );
    }

    #[test]
    fn test_key_release_and_repeat_are_ignored() {
        let release = WindowEvent::Key(Key::W, 0, Action::Release, Modifiers::empty());
        let repeat = WindowEvent::Key(Key::W, 0, Action::Repeat, Modifiers::empty());
        assert_eq!(ShellEvent::from_window_event(&release), None);
        assert_eq!(ShellEvent::from_window_event(&repeat), None);
    }

    #[test]
    fn test_pointer_events_carry_raw_payload() {
        let motion = WindowEvent::CursorPos(12.5, -3.0);
        assert_eq!(
            ShellEvent::from_window_event(&motion),
            Some(ShellEvent::MouseMove(MouseMotion { x: 12.5, y: -3.0 }))
        );

        let press = WindowEvent::MouseButton(
            glfw::MouseButtonLeft,
            Action::Press,
            Modifiers::empty(),
        );
        assert_eq!(
            ShellEvent::from_window_event(&press),
            Some(ShellEvent::MousePress(MouseButtonEvent {
                button: glfw::MouseButtonLeft,
            }))
        );

        let scroll = WindowEvent::Scroll(0.0, 1.5);
        assert_eq!(
            ShellEvent::from_window_event(&scroll),
            Some(ShellEvent::Wheel(WheelEvent { dx: 0.0, dy: 1.5 }))
        );
    }

    #[test]
    fn test_resize_translates_dimensions() {
        let event = WindowEvent::Size(800, 600);
        assert_eq!(
            ShellEvent::from_window_event(&event),
            Some(ShellEvent::Resized {
                width: 800,
                height: 600,
            })
        );
    }

    #[test]
    fn test_unrelated_events_are_dropped() {
        assert_eq!(
            ShellEvent::from_window_event(&WindowEvent::Focus(true)),
            None
        );
        assert_eq!(
            ShellEvent::from_window_event(&WindowEvent::CursorEnter(false)),
            None
        );
    }
}
