//! Lexile code decoding

use serde::{Deserialize, Serialize};

/// Sort key for `BR` codes; sorts ahead of every measured level.
pub const LEVEL_FLOOR: i64 = -1;

/// Sort key for `NP`, missing and unparseable codes; sorts after every measured level.
pub const LEVEL_CEILING: i64 = i64::MAX;

/// The five categories a lexile code decodes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum LexileCode {
    /// `BR`: beginning reader, below the measured scale
    BeginningReader,

    /// `AD<n>`: adult directed, meant to be read aloud
    AdultDirected(u32),

    /// `GN<n>`: graphic novel
    GraphicNovel(u32),

    /// `NP`: non-prose
    NonProse,

    /// Plain measure such as `430L`
    Measure(u32),
}

impl LexileCode {
    /// Classify a raw code. Prefixes are case-sensitive; anything without a
    /// known prefix is a plain measure.
    pub fn parse(code: &str) -> Self {
        if code.starts_with("BR") {
            Self::BeginningReader
        } else if code.starts_with("AD") {
            Self::AdultDirected(level_value(code))
        } else if code.starts_with("GN") {
            Self::GraphicNovel(level_value(code))
        } else if code.starts_with("NP") {
            Self::NonProse
        } else {
            Self::Measure(level_value(code))
        }
    }
}

/// Every ASCII digit in the code, concatenated (`"AD5,20L"` -> `"520"`)
pub fn level_digits(code: &str) -> String {
    code.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric portion of the code; 0 when there are no digits.
/// Saturates at `u32::MAX` for absurdly long digit runs.
pub fn level_value(code: &str) -> u32 {
    let digits = level_digits(code);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// Ordering key used when sorting by reading level.
///
/// `BR` sorts first, `NP` and missing codes sort last, and everything else
/// sorts by its first run of digits. A code with no digits at all sorts last.
pub fn sort_key(code: Option<&str>) -> i64 {
    let Some(code) = code else {
        return LEVEL_CEILING;
    };
    match LexileCode::parse(code) {
        LexileCode::BeginningReader => return LEVEL_FLOOR,
        LexileCode::NonProse => return LEVEL_CEILING,
        LexileCode::AdultDirected(_) | LexileCode::GraphicNovel(_) | LexileCode::Measure(_) => {}
    }

    let run: String = code
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if run.is_empty() {
        LEVEL_CEILING
    } else {
        // i64 holds any realistic measure; longer runs are nonsense and sort last
        run.parse().unwrap_or(LEVEL_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_categories() {
        assert_eq!(LexileCode::parse("BR"), LexileCode::BeginningReader);
        assert_eq!(LexileCode::parse("BR120L"), LexileCode::BeginningReader);
        assert_eq!(LexileCode::parse("AD520L"), LexileCode::AdultDirected(520));
        assert_eq!(LexileCode::parse("GN270L"), LexileCode::GraphicNovel(270));
        assert_eq!(LexileCode::parse("NP"), LexileCode::NonProse);
        assert_eq!(LexileCode::parse("430L"), LexileCode::Measure(430));
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        assert_eq!(LexileCode::parse("br"), LexileCode::Measure(0));
        assert_eq!(LexileCode::parse("ad300L"), LexileCode::Measure(300));
    }

    #[test]
    fn test_level_value() {
        assert_eq!(level_value("430L"), 430);
        assert_eq!(level_value("BR"), 0);
        assert_eq!(level_value(""), 0);
        assert_eq!(level_value("1,020L"), 1020);
        assert_eq!(level_value("99999999999999999999L"), u32::MAX);
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(sort_key(Some("BR")), LEVEL_FLOOR);
        assert_eq!(sort_key(Some("BR40L")), LEVEL_FLOOR);
        assert_eq!(sort_key(Some("NP")), LEVEL_CEILING);
        assert_eq!(sort_key(None), LEVEL_CEILING);
        assert_eq!(sort_key(Some("unknown")), LEVEL_CEILING);
        assert_eq!(sort_key(Some("520L")), 520);
        assert_eq!(sort_key(Some("AD500L")), 500);
        assert_eq!(sort_key(Some("GN270L")), 270);
        assert_eq!(sort_key(Some("AD")), LEVEL_CEILING);
        assert_eq!(sort_key(Some("NP12")), LEVEL_CEILING);
    }

    #[test]
    fn test_sort_key_follows_classification() {
        for code in ["BR", "BR120L", "NP", "AD520L", "GN270L", "430L", "AD", "br300L"] {
            let key = sort_key(Some(code));
            match LexileCode::parse(code) {
                LexileCode::BeginningReader => assert_eq!(key, LEVEL_FLOOR, "{}", code),
                LexileCode::NonProse => assert_eq!(key, LEVEL_CEILING, "{}", code),
                _ => assert!(key != LEVEL_FLOOR, "{}", code),
            }
        }
    }
}
