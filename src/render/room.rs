//! Room passage rendering.

use crate::config::Config;
use crate::document::{Room, RoomNumber};
use crate::error::Result;
use crate::index::RoomTypeIndex;

use super::links::twine_links;
use super::overlay::overlay_lines;
use super::wrap::{fill, FILL_WIDTH};

/// Renders room records into passage lines.
///
/// Output order is fixed: intro, image, description, links, then the
/// clickable overlay (only for rooms with links).
pub struct RoomRenderer<'a> {
    index: &'a RoomTypeIndex,
    config: &'a Config,
}

impl<'a> RoomRenderer<'a> {
    pub fn new(index: &'a RoomTypeIndex, config: &'a Config) -> Self {
        Self { index, config }
    }

    pub fn render(&self, room: &Room) -> Result<Vec<String>> {
        let mut lines = intro_lines(room);
        lines.extend(image_ref(room.number, self.config));
        lines.extend(description(&room.text));
        lines.extend(twine_links(room, self.index)?);
        lines.extend(overlay_lines(room));
        Ok(lines)
    }
}

/// `$intro[...]` hook followed by a blank line.
pub fn intro_lines(room: &Room) -> Vec<String> {
    vec![format!("$intro[{}]", room.intro), String::new()]
}

/// Hook that assembles and prints the room's `<img>` tag.
pub fn image_ref(number: RoomNumber, config: &Config) -> Vec<String> {
    let nn = number.padded();

    vec![
        "{".to_string(),
        format!(
            "\t(set: _img to 'img src=\"' + $imagedir + '/room-{}.{}\"')",
            nn, config.image_ext
        ),
        format!("\t(set: _img to it + ' title=\"Room {}\"')", number),
        format!("\t(set: _img to it + ' usemap=\"#room-{}\"')", nn),
        "\t(set: _img to '<' + _img + '>')".to_string(),
        "\t(set: _img to '<center>' + _img + '</center>')".to_string(),
        "\t(print: _img)".to_string(),
        "}".to_string(),
    ]
}

/// Each blank-line separated paragraph, unwrapped, followed by a blank line.
pub fn description(text: &str) -> Vec<String> {
    text.split("\n\n")
        .flat_map(|para| [fill(para, FILL_WIDTH), String::new()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::MazeError;
    use pretty_assertions::assert_eq;

    fn render_all(doc: &Document) -> Vec<Result<Vec<String>>> {
        let index = RoomTypeIndex::build(&doc.rooms);
        let config = Config::default();
        let renderer = RoomRenderer::new(&index, &config);
        doc.rooms.iter().map(|room| renderer.render(room)).collect()
    }

    #[test]
    fn test_intro_lines() {
        let room = Room::new(1, "cave", "You enter a [dark] cave.", "");
        assert_eq!(intro_lines(&room), vec!["$intro[You enter a [dark] cave.]", ""]);
    }

    #[test]
    fn test_image_ref_references_own_number() {
        let lines = image_ref(RoomNumber::new(7), &Config::default());

        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[1],
            "\t(set: _img to 'img src=\"' + $imagedir + '/room-07.jpg\"')"
        );
        assert_eq!(lines[2], "\t(set: _img to it + ' title=\"Room 7\"')");
        assert_eq!(lines[3], "\t(set: _img to it + ' usemap=\"#room-07\"')");
        assert_eq!(lines.iter().filter(|l| l.contains("room-07")).count(), 2);
    }

    #[test]
    fn test_image_ref_wide_number() {
        let lines = image_ref(RoomNumber::new(123), &Config::default());
        assert!(lines[1].contains("/room-123.jpg"));
        assert!(lines[3].contains("#room-123"));
    }

    #[test]
    fn test_description_paragraphs() {
        assert_eq!(
            description("Alpha.\n\nBeta."),
            vec!["Alpha.", "", "Beta.", ""]
        );
    }

    #[test]
    fn test_description_unwraps_lines() {
        assert_eq!(
            description("A long\nsentence.\n\nNext\nparagraph."),
            vec!["A long sentence.", "", "Next paragraph.", ""]
        );
    }

    #[test]
    fn test_render_room_with_links() {
        let doc = Document::new(vec![
            Room::new(1, "cave", "A damp cave.", "Water drips.\n\nA passage leads on.")
                .with_link(2, "0,0,10,0,10,10")
                .with_link(3, "20,0,30,0,30,10"),
            Room::new(2, "cave", "Deeper.", "Dark."),
            Room::new(3, "hall", "A hall.", "Bright."),
        ]);

        let lines = render_all(&doc).remove(0).unwrap();

        insta::assert_debug_snapshot!(lines, @r###"
        [
            "$intro[A damp cave.]",
            "",
            "{",
            "\t(set: _img to 'img src=\"' + $imagedir + '/room-01.jpg\"')",
            "\t(set: _img to it + ' title=\"Room 1\"')",
            "\t(set: _img to it + ' usemap=\"#room-01\"')",
            "\t(set: _img to '<' + _img + '>')",
            "\t(set: _img to '<center>' + _img + '</center>')",
            "\t(print: _img)",
            "}",
            "Water drips.",
            "",
            "A passage leads on.",
            "",
            "[[...room 2->02]]",
            "[(link-goto: \"...room 3\", \"03\")]",
            "{",
            "<script>",
            "$('area[alt=\"02\"]').on(\"click\", function(e){",
            "\te.preventDefault();",
            "\t$(\"tw-link[passage-name='02']\").click();",
            "});",
            "$('area[alt=\"03\"]').on(\"click\", function(e){",
            "\te.preventDefault();",
            "\t$(\"tw-link[passage-name='03']\").click();",
            "});",
            "</script>",
            "<map name=\"room-01\">",
            "<area shape=\"poly\" coords=\"0,0,10,0,10,10\" alt=\"02\">",
            "<area shape=\"poly\" coords=\"20,0,30,0,30,10\" alt=\"03\">",
            "</map>",
            "}",
        ]
        "###);
    }

    #[test]
    fn test_render_room_without_links_has_no_overlay() {
        let doc = Document::new(vec![Room::new(2, "hall", "Quiet.", "Nothing here.")]);
        let lines = render_all(&doc).remove(0).unwrap();

        assert_eq!(lines.last().map(String::as_str), Some(""));
        assert!(!lines.iter().any(|l| l == "<script>"));
        // Only the image hook opens a brace.
        assert_eq!(lines.iter().filter(|l| *l == "{").count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = Document::new(vec![
            Room::new(1, "a", "i", "t").with_link(2, "m"),
            Room::new(2, "b", "i", "t"),
        ]);

        let first = render_all(&doc);
        let second = render_all(&doc);
        assert_eq!(first[0].as_ref().unwrap(), second[0].as_ref().unwrap());
    }

    #[test]
    fn test_render_unknown_link() {
        let doc = Document::new(vec![Room::new(1, "a", "i", "t").with_link(9, "m")]);
        let result = render_all(&doc).remove(0);

        assert!(matches!(result, Err(MazeError::UnknownRoom { dir: 9, .. })));
    }
}
