//! Terminal rendering layer.
//!
//! The game state is drawn into a plain framebuffer which is then flushed
//! to the terminal backend. Keeping the view pure leaves only the flush
//! itself untestable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
