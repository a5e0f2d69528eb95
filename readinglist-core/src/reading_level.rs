//! Human-readable explanations of lexile codes

use crate::types::{level_digits, level_value, LexileCode};
use serde::{Deserialize, Serialize};

/// Explanation shown next to a book's lexile badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelExplanation {
    pub title: String,
    pub description: String,
    pub reading_level: String,
}

impl LevelExplanation {
    fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        reading_level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            reading_level: reading_level.into(),
        }
    }
}

/// Explain a lexile code. Returns `None` when there is no code.
///
/// Rules are checked in order: `BR`, `AD`, `GN`, then four bands of plain
/// measures. `NP` has no branch of its own and lands in the lowest band.
pub fn explain(lexile: Option<&str>) -> Option<LevelExplanation> {
    let code = lexile.filter(|c| !c.is_empty())?;

    match LexileCode::parse(code) {
        LexileCode::BeginningReader => Some(LevelExplanation::new(
            "Beginning Reader (BR)",
            "Pre-level books with very simple text. Perfect for kids just starting to read.",
            "Pre-K to Early Grade 1",
        )),
        LexileCode::AdultDirected(level) => {
            let reading_level = if level < 400 {
                "Read-aloud for PreK-Grade 1"
            } else {
                "Read-aloud for Grade 1-3"
            };
            Some(LevelExplanation::new(
                format!("Adult Directed (AD) - {}L", level_digits(code)),
                "Picture book meant to be read aloud by an adult. Rich vocabulary and concepts for shared reading.",
                reading_level,
            ))
        }
        LexileCode::GraphicNovel(level) => {
            let reading_level = if level < 400 { "Grade 1-2" } else { "Grade 2-3" };
            Some(LevelExplanation::new(
                format!("Graphic Novel (GN) - {}L", level_digits(code)),
                "Comic book format with pictures and text bubbles. Great for visual learners!",
                reading_level,
            ))
        }
        // NP has no explanation of its own and is banded like a plain measure
        LexileCode::NonProse | LexileCode::Measure(_) => Some(measure_band(code, level_value(code))),
    }
}

/// One of the four bands for plain measures
fn measure_band(code: &str, level: u32) -> LevelExplanation {
    let title = format!("{} Level", code);
    match level {
        0..=199 => LevelExplanation::new(
            title,
            "Early reader text. Simple sentences and common words.",
            "Kindergarten to Early Grade 1",
        ),
        200..=399 => LevelExplanation::new(
            title,
            "Grade 1 independent reading. Growing vocabulary and sentence complexity.",
            "Grade 1",
        ),
        400..=599 => LevelExplanation::new(
            title,
            "Grade 2-3 reading level. More complex stories and vocabulary.",
            "Grade 2-3 (Advanced for Grade 1)",
        ),
        _ => LevelExplanation::new(
            title,
            "Advanced chapter book. Rich vocabulary and longer narratives.",
            "Grade 3-4 (Very Advanced for Grade 1)",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_code() {
        assert_eq!(explain(None), None);
        assert_eq!(explain(Some("")), None);
    }

    #[test]
    fn test_beginning_reader_ignores_number() {
        let plain = explain(Some("BR")).unwrap();
        let numbered = explain(Some("BR150L")).unwrap();
        assert_eq!(plain, numbered);
        assert_eq!(plain.title, "Beginning Reader (BR)");
    }

    #[test]
    fn test_adult_directed_branches() {
        let low = explain(Some("AD390L")).unwrap();
        assert_eq!(low.title, "Adult Directed (AD) - 390L");
        assert_eq!(low.reading_level, "Read-aloud for PreK-Grade 1");

        let high = explain(Some("AD400L")).unwrap();
        assert_eq!(high.reading_level, "Read-aloud for Grade 1-3");
    }

    #[test]
    fn test_graphic_novel() {
        let gn = explain(Some("GN270L")).unwrap();
        assert_eq!(gn.title, "Graphic Novel (GN) - 270L");
        assert_eq!(gn.reading_level, "Grade 1-2");
        assert_eq!(explain(Some("GN450L")).unwrap().reading_level, "Grade 2-3");
    }

    #[test]
    fn test_measure_bands() {
        assert_eq!(explain(Some("190L")).unwrap().reading_level, "Kindergarten to Early Grade 1");
        assert_eq!(explain(Some("200L")).unwrap().reading_level, "Grade 1");
        assert_eq!(explain(Some("599L")).unwrap().reading_level, "Grade 2-3 (Advanced for Grade 1)");
        assert_eq!(
            explain(Some("600L")).unwrap().reading_level,
            "Grade 3-4 (Very Advanced for Grade 1)"
        );
        assert_eq!(explain(Some("430L")).unwrap().title, "430L Level");
    }

    #[test]
    fn test_non_prose_falls_into_lowest_band() {
        let np = explain(Some("NP")).unwrap();
        assert_eq!(np.title, "NP Level");
        assert_eq!(np.reading_level, "Kindergarten to Early Grade 1");
    }
}
