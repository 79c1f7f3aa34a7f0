//! Rendering module for maze passages.
//!
//! Turns room records into Harlowe passage markup, one line per element.
//! Renderers are pure: the same room, index and config always yield the
//! same lines.

mod links;
mod overlay;
mod room;
mod startup;
mod wrap;

pub use links::twine_links;
pub use overlay::{image_map, javascript, overlay_lines};
pub use room::{description, image_ref, intro_lines, RoomRenderer};
pub use startup::startup_lines;
pub use wrap::{fill, wrap, FILL_WIDTH};
