use std::sync::LazyLock;

use regex::Regex;
use scn_types::{Line, Scene, SceneNumber};
use tracing::debug;

use crate::hasher::ContentHasher;

/// `#<ascii digits>.` then optional whitespace then a non-empty location.
/// Matched against the trimmed line.
static SCENE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9]+)\.\s*(.+)").expect("scene header pattern is valid")
});

/// The two captures of a recognized scene header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneHeader<'a> {
    pub number: &'a str,
    pub location: &'a str,
}

/// Recognize a scene header line.
///
/// The line is trimmed first, so surrounding whitespace never ends up in the
/// location. `#12. EXT. PIER` yields number `12` and location `EXT. PIER`;
/// `#abc. PIER` and a bare `#12.` (trailing spaces or not) are not headers.
pub fn parse_header(line: &str) -> Option<SceneHeader<'_>> {
    let caps = SCENE_HEADER.captures(line.trim())?;
    Some(SceneHeader {
        number: caps.get(1)?.as_str(),
        location: caps.get(2)?.as_str(),
    })
}

/// Split screenplay text into scenes, in document order.
///
/// Line numbers are 1-based over the whole document, counting lines before
/// the first header (which are otherwise dropped). A trailing `\r` is
/// stripped from every line.
pub fn parse_scenes(text: &str) -> Vec<Scene> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut scenes = Vec::new();
    let mut open: Option<OpenScene> = None;
    let mut dropped = 0usize;

    for (idx, raw) in text.split('\n').enumerate() {
        let line_num = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if let Some(header) = parse_header(line) {
            if let Some(done) = open.take() {
                scenes.push(done.finish());
            }
            open = Some(OpenScene {
                scene_num: SceneNumber::from(header.number),
                header: line.to_string(),
                location: header.location.to_string(),
                start_line: line_num,
                content: Vec::new(),
            });
        } else if let Some(scene) = open.as_mut() {
            scene.content.push(Line::new(line, line_num));
        } else {
            dropped += 1;
        }
    }

    if let Some(done) = open {
        scenes.push(done.finish());
    }

    debug!(scenes = scenes.len(), dropped, "parsed screenplay");
    scenes
}

/// Build a scene from parts, hashing its body the same way the parser does.
///
/// The header is rendered as `#<num>. <location>`. Useful for callers that
/// edit scenes in memory and for numbers the parser would never produce.
pub fn assemble_scene(
    scene_num: impl Into<SceneNumber>,
    location: impl Into<String>,
    start_line: usize,
    content: Vec<Line>,
) -> Scene {
    let scene_num = scene_num.into();
    let location = location.into();
    OpenScene {
        header: format!("#{scene_num}. {location}"),
        scene_num,
        location,
        start_line,
        content,
    }
    .finish()
}

struct OpenScene {
    scene_num: SceneNumber,
    header: String,
    location: String,
    start_line: usize,
    content: Vec<Line>,
}

impl OpenScene {
    fn finish(self) -> Scene {
        let hash = ContentHasher::SCENE.hash_lines(&self.content);
        Scene {
            scene_num: self.scene_num,
            header: self.header,
            location: self.location,
            content: self.content,
            start_line: self.start_line,
            hash,
        }
    }
}
