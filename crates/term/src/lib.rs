//! Terminal presentation for the sweeper.
//!
//! Every frame is composed from scratch into a [`FrameBuffer`] by
//! [`SweeperView`] (frame, header, board or menu box, optional debug lines),
//! then handed to a [`Surface`]. The real terminal surface diffs against the
//! previous frame and repaints only changed runs.
//!
//! Board cells are two columns wide to keep the grid roughly square.

pub mod clock;
pub mod fb;
pub mod game_view;
pub mod menu;
pub mod renderer;

pub use sweeper_core as core;
pub use sweeper_types as types;

pub use clock::{duration_in_words, format_clock};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_origin, symbol_glyph, Rect, Scene, SweeperView, Viewport};
pub use menu::{menu_content, Line, MenuContent, Span};
pub use renderer::{encode_diff_into, encode_full_into, Surface, TerminalRenderer};
