use serde::{Deserialize, Serialize};

/// One raw line of a screenplay document.
///
/// `line_num` is the 1-based position of the line in the document it was
/// parsed from, so diff output can point back into either revision.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub text: String,
    pub line_num: usize,
}

impl Line {
    pub fn new(text: impl Into<String>, line_num: usize) -> Self {
        Self {
            text: text.into(),
            line_num,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let line = Line::new("INT. KITCHEN", 3);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["text"], "INT. KITCHEN");
        assert_eq!(json["lineNum"], 3);
    }
}
