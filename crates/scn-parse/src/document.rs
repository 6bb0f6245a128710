//! Whole-document helpers over parsed scenes.

use scn_types::Scene;

/// Render scenes back to screenplay text: each scene's header and body,
/// joined with `\n`.
///
/// Text before the first header is not part of any scene and is not
/// reproduced. Parsing the result yields the same scene numbers and hashes.
pub fn render_scenes(scenes: &[Scene]) -> String {
    scenes
        .iter()
        .map(Scene::to_text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// First scene with the given number, if any.
pub fn find_scene<'a>(scenes: &'a [Scene], scene_num: &str) -> Option<&'a Scene> {
    scenes.iter().find(|scene| scene.scene_num == scene_num)
}

/// The scene covering a 1-based document line (its header or body).
pub fn scene_at_line(scenes: &[Scene], line_num: usize) -> Option<&Scene> {
    scenes
        .iter()
        .find(|scene| (scene.start_line..=scene.end_line()).contains(&line_num))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_scenes;
    use proptest::prelude::*;

    #[test]
    fn render_drops_preamble_and_keeps_bodies() {
        let scenes = parse_scenes("preamble\n#1. A\none\n\n#2. B\ntwo");
        assert_eq!(render_scenes(&scenes), "#1. A\none\n\n#2. B\ntwo");
    }

    #[test]
    fn render_of_nothing_is_empty() {
        assert_eq!(render_scenes(&[]), "");
    }

    #[test]
    fn find_scene_returns_first_duplicate() {
        let scenes = parse_scenes("#2. FIRST\na\n#2. SECOND\nb");
        assert_eq!(find_scene(&scenes, "2").unwrap().location, "FIRST");
        assert!(find_scene(&scenes, "3").is_none());
    }

    #[test]
    fn scene_at_line_covers_header_and_body() {
        let scenes = parse_scenes("intro\n#1. A\na\nb\n#2. B");
        assert!(scene_at_line(&scenes, 1).is_none());
        assert_eq!(scene_at_line(&scenes, 2).unwrap().scene_num, "1");
        assert_eq!(scene_at_line(&scenes, 4).unwrap().scene_num, "1");
        assert_eq!(scene_at_line(&scenes, 5).unwrap().scene_num, "2");
        assert!(scene_at_line(&scenes, 6).is_none());
    }

    fn screenplay_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Za-z .,!?]{0,20}",
            ("[0-9]{1,3}", "[A-Z .-]{1,12}").prop_map(|(n, loc)| format!("#{n}. {loc}")),
            Just("#x. fake".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn reparse_after_render_keeps_numbers_and_hashes(
            lines in prop::collection::vec(screenplay_line(), 0..40)
        ) {
            let text = lines.join("\n");
            let first = parse_scenes(&text);
            let second = parse_scenes(&render_scenes(&first));

            let key = |scenes: &[Scene]| {
                scenes
                    .iter()
                    .map(|s| (s.scene_num.clone(), s.hash))
                    .collect::<Vec<_>>()
            };
            prop_assert_eq!(key(&first), key(&second));
        }
    }
}
