//! Clickable image-map overlay.
//!
//! Each link gets a polygon `<area>` on the room image plus a jQuery
//! handler that forwards clicks on the area to the matching passage link.

use crate::document::{Link, Room, RoomNumber};

/// Script and map wrapped in a hook. Empty when the room has no links.
pub fn overlay_lines(room: &Room) -> Vec<String> {
    if !room.has_links() {
        return Vec::new();
    }

    let mut lines = vec!["{".to_string()];
    lines.extend(javascript(&room.links));
    lines.extend(image_map(room.number, &room.links));
    lines.push("}".to_string());
    lines
}

/// `<script>` block registering one click handler per link.
pub fn javascript(links: &[Link]) -> Vec<String> {
    let mut lines = vec!["<script>".to_string()];

    for link in links {
        let dir = link.dir.padded();
        lines.push(format!(
            "$('area[alt=\"{}\"]').on(\"click\", function(e){{",
            dir
        ));
        lines.push("\te.preventDefault();".to_string());
        lines.push(format!(
            "\t$(\"tw-link[passage-name='{}']\").click();",
            dir
        ));
        lines.push("});".to_string());
    }

    lines.push("</script>".to_string());
    lines
}

/// `<map>` block named after the room, one polygon area per link.
pub fn image_map(number: RoomNumber, links: &[Link]) -> Vec<String> {
    let mut lines = vec![format!("<map name=\"room-{}\">", number.padded())];

    lines.extend(links.iter().map(|link| {
        format!(
            "<area shape=\"poly\" coords=\"{}\" alt=\"{}\">",
            link.map,
            link.dir.padded()
        )
    }));

    lines.push("</map>".to_string());
    lines
}
