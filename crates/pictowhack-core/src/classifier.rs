//! Pictogram Classifier
//!
//! Decides, per Unicode scalar value, whether a character is a pictogram
//! that should be stripped from text.
//!
//! Rules are evaluated in a fixed order and the first one that applies wins:
//!
//! 1. **Other Symbol** (`So`): removed, unless the name is a box-drawings name.
//! 2. **Keyword**: names containing one of [`KEEP_KEYWORDS`] are kept.
//! 3. **Range**: code points inside [`KEEP_RANGES`] are kept.
//! 4. **Default**: kept.
//!
//! Only rule 1 ever removes anything. Rules 2 and 3 are reached exclusively
//! by characters outside `So`, so they can only produce "keep".

use unicode_general_category::{get_general_category, GeneralCategory};

/// Substring that marks a box-drawings name inside the `So` category
const BOX_DRAWINGS: &str = "box drawings";

/// Names must be strictly longer than this to qualify for the box-drawings exception
const BOX_DRAWINGS_MIN_NAME_LEN: usize = 11;

/// Name keywords that keep a (non-`So`) character
pub const KEEP_KEYWORDS: &[&str] = &[
    "emoji",
    "pictogram",
    "symbol",
    "dingbat",
    "arrow",
    "star",
    "heart",
    "face",
    "hand",
    "gesture",
    "activity",
    "object",
    "flag",
    "sign",
    "mark",
];

/// Inclusive code point ranges that keep a (non-`So`) character
pub const KEEP_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F300, 0x1F5FF), // Misc Symbols and Pictographs
    (0x1F680, 0x1F6FF), // Transport and Map
    (0x1F1E0, 0x1F1FF), // Regional indicators
    (0x2600, 0x26FF),   // Misc Symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x1F926, 0x1F937), // Gestures
    (0x1F918, 0x1F91F), // Hand symbols
    (0x1F980, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x2B00, 0x2BFF),   // Misc Symbols and Arrows
];

/// Callback invoked for every character classified as a pictogram
pub type PictogramCallback<'a> = Option<&'a dyn Fn(&Classification)>;

/// The rule that decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `So` character: removed
    OtherSymbol,
    /// `So` character with a box-drawings name: kept
    BoxDrawings,
    /// Name contains a keep keyword
    Keyword(&'static str),
    /// Code point inside a keep range
    Range { start: u32, end: u32 },
    /// Nothing matched: kept
    Default,
}

/// Classification of a single character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub ch: char,
    pub category: GeneralCategory,
    /// Lower-cased Unicode name; empty when the code point has none
    pub name: String,
    pub rule: Rule,
}

impl Classification {
    /// Whether the character should be removed
    pub fn is_pictogram(&self) -> bool {
        self.rule == Rule::OtherSymbol
    }

    /// Two-letter general category code (e.g. `So`)
    pub fn category_code(&self) -> &'static str {
        category_code(self.category)
    }
}

/// Classify a character, recording which rule decided it
pub fn classify(ch: char) -> Classification {
    let category = get_general_category(ch);
    let name = lower_name(ch);
    let rule = decide(ch, category, &name);

    Classification {
        ch,
        category,
        name,
        rule,
    }
}

/// Whether `ch` is a pictogram to remove.
///
/// Equivalent to `classify(ch).is_pictogram()`, but skips the name lookup
/// for characters outside `So`, which can never be removed.
pub fn is_pictogram(ch: char) -> bool {
    if get_general_category(ch) != GeneralCategory::OtherSymbol {
        return false;
    }
    !is_box_drawings_name(&lower_name(ch))
}

/// Like [`is_pictogram`], reporting removed characters to `on_pictogram`
pub fn is_pictogram_with(ch: char, on_pictogram: PictogramCallback<'_>) -> bool {
    match on_pictogram {
        None => is_pictogram(ch),
        Some(f) => {
            let classification = classify(ch);
            let remove = classification.is_pictogram();
            if remove {
                f(&classification);
            }
            remove
        }
    }
}

fn decide(ch: char, category: GeneralCategory, name: &str) -> Rule {
    if category == GeneralCategory::OtherSymbol {
        if is_box_drawings_name(name) {
            return Rule::BoxDrawings;
        }
        return Rule::OtherSymbol;
    }

    if let Some(keyword) = KEEP_KEYWORDS.iter().copied().find(|k| name.contains(k)) {
        return Rule::Keyword(keyword);
    }

    let code = u32::from(ch);
    if let Some(&(start, end)) = KEEP_RANGES
        .iter()
        .find(|(start, end)| (*start..=*end).contains(&code))
    {
        return Rule::Range { start, end };
    }

    Rule::Default
}

fn is_box_drawings_name(name: &str) -> bool {
    name.len() > BOX_DRAWINGS_MIN_NAME_LEN && name.contains(BOX_DRAWINGS)
}

fn lower_name(ch: char) -> String {
    unicode_names2::name(ch)
        .map(|n| n.to_string().to_lowercase())
        .unwrap_or_default()
}

/// Two-letter code for a general category
pub fn category_code(category: GeneralCategory) -> &'static str {
    use GeneralCategory::*;

    match category {
        UppercaseLetter => "Lu",
        LowercaseLetter => "Ll",
        TitlecaseLetter => "Lt",
        ModifierLetter => "Lm",
        OtherLetter => "Lo",
        NonspacingMark => "Mn",
        SpacingMark => "Mc",
        EnclosingMark => "Me",
        DecimalNumber => "Nd",
        LetterNumber => "Nl",
        OtherNumber => "No",
        ConnectorPunctuation => "Pc",
        DashPunctuation => "Pd",
        OpenPunctuation => "Ps",
        ClosePunctuation => "Pe",
        InitialPunctuation => "Pi",
        FinalPunctuation => "Pf",
        OtherPunctuation => "Po",
        MathSymbol => "Sm",
        CurrencySymbol => "Sc",
        ModifierSymbol => "Sk",
        OtherSymbol => "So",
        SpaceSeparator => "Zs",
        LineSeparator => "Zl",
        ParagraphSeparator => "Zp",
        Control => "Cc",
        Format => "Cf",
        Surrogate => "Cs",
        PrivateUse => "Co",
        _ => "Cn",
    }
}
