use scn_types::{Line, SceneHash};

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag that is prepended to every hash
/// computation, so a scene body and a whole document with identical bytes
/// never share a digest.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for normalized scene bodies.
    pub const SCENE: Self = Self {
        domain: "scn-scene-v1",
    };
    /// Hasher for raw document snapshots (cache keys).
    pub const DOCUMENT: Self = Self {
        domain: "scn-document-v1",
    };

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> SceneHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        SceneHash::from_hash(*hasher.finalize().as_bytes())
    }

    /// Hash a scene body after normalizing it with [`normalize_content`].
    pub fn hash_lines(&self, lines: &[Line]) -> SceneHash {
        self.hash(normalize_content(lines).as_bytes())
    }
}

/// Canonical form of a scene body used for identity matching.
///
/// Line texts are joined with `\n`, lowercased, trimmed, and every
/// whitespace run (newlines included) is collapsed to a single space.
/// Line order is preserved, so reordering lines changes the result.
pub fn normalize_content(lines: &[Line]) -> String {
    let joined = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
