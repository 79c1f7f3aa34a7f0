//! Passage links between rooms.
//!
//! A link to a room of the same type is a plain `[[label->passage]]`.
//! Crossing into a room of another type uses `(link-goto:)` instead so
//! the story format can style the transition differently.

use crate::document::Room;
use crate::error::Result;
use crate::index::RoomTypeIndex;

/// One link line per outgoing link, in link order.
///
/// Fails on the first link whose destination is not in the index.
pub fn twine_links(room: &Room, index: &RoomTypeIndex) -> Result<Vec<String>> {
    room.links
        .iter()
        .map(|link| {
            let dest_kind = index.resolve(room.number, link.dir)?;
            let dir = link.dir;

            let line = if *dest_kind == room.kind {
                format!("[[...room {}->{}]]", dir, dir.padded())
            } else {
                format!("[(link-goto: \"...room {}\", \"{}\")]", dir, dir.padded())
            };
            Ok(line)
        })
        .collect()
}
