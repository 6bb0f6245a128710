use serde::{Deserialize, Serialize};

use crate::hash::SceneHash;
use crate::line::Line;
use crate::scene_number::SceneNumber;

/// A numbered, headered segment of a screenplay document.
///
/// `header` is the raw header line as it appeared in the document,
/// `location` the header text after the number, and `content` every line up
/// to the next header or the end of the document (possibly none).
///
/// `hash` depends on the normalized body only; the header and location do
/// not take part in identity matching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_num: SceneNumber,
    pub header: String,
    pub location: String,
    pub content: Vec<Line>,
    pub start_line: usize,
    pub hash: SceneHash,
}

impl Scene {
    /// Number of body lines.
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the scene has no body lines.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Body lines joined with `\n`, without the header.
    pub fn body_text(&self) -> String {
        self.content
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header followed by the body, as it would appear in a document.
    pub fn to_text(&self) -> String {
        std::iter::once(self.header.as_str())
            .chain(self.content.iter().map(|line| line.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Last document line covered by this scene (the header line when empty).
    pub fn end_line(&self) -> usize {
        self.content
            .last()
            .map_or(self.start_line, |line| line.line_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            scene_num: SceneNumber::from("3"),
            header: "#3. INT. KITCHEN - NIGHT".into(),
            location: "INT. KITCHEN - NIGHT".into(),
            content: vec![Line::new("Rain on the window.", 6), Line::new("", 7)],
            start_line: 5,
            hash: SceneHash::from_hash([7; 32]),
        }
    }

    #[test]
    fn to_text_includes_header_and_blank_lines() {
        assert_eq!(
            scene().to_text(),
            "#3. INT. KITCHEN - NIGHT\nRain on the window.\n"
        );
    }

    #[test]
    fn body_text_excludes_header() {
        assert_eq!(scene().body_text(), "Rain on the window.\n");
    }

    #[test]
    fn end_line_tracks_last_content_line() {
        assert_eq!(scene().end_line(), 7);
        let mut empty = scene();
        empty.content.clear();
        assert!(empty.is_empty());
        assert_eq!(empty.end_line(), 5);
    }

    #[test]
    fn serde_roundtrip_uses_camel_case() {
        let s = scene();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["sceneNum"], "3");
        assert_eq!(json["startLine"], 5);
        let parsed: Scene = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, s);
    }
}
