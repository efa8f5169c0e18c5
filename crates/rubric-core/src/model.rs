//! Core data model types for rubric.
//!
//! These are the fundamental types the entire rubric system uses to
//! represent submitted answers, rule parameters, and authored interaction
//! content.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single answer or rule-parameter value.
///
/// Exactly one case is populated per value. Values are constructed by the
/// answer-parsing/content-loading layers and consumed read-only by matchers;
/// no case carries implicit normalization (`2:4` and `1:2` are distinct
/// ratio values until a matcher explicitly reduces them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    /// Free-form text, already whitespace/Unicode-normalized upstream.
    NormalizedString(String),
    /// A signed integer.
    SignedInt(i32),
    /// A non-negative integer (e.g. a multiple-choice option index).
    NonNegativeInt(u32),
    /// A real number.
    Real(f64),
    /// An unordered set of HTML answer-choice tokens.
    StringSet(StringSet),
    /// A fraction, possibly with a whole-number part.
    Fraction(Fraction),
    /// A number paired with measurement units.
    NumberWithUnits(NumberWithUnits),
    /// An ordered list of string sets (drag-and-drop orderings).
    ListOfSets(ListOfSets),
    /// A click on an image, resolved upstream to region labels.
    ClickOnImage(ClickOnImage),
    /// An ordered sequence of positive ratio components (e.g. 2:4:6).
    RatioExpression(RatioExpression),
}

impl AnswerValue {
    /// The case tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            AnswerValue::NormalizedString(_) => ValueKind::NormalizedString,
            AnswerValue::SignedInt(_) => ValueKind::SignedInt,
            AnswerValue::NonNegativeInt(_) => ValueKind::NonNegativeInt,
            AnswerValue::Real(_) => ValueKind::Real,
            AnswerValue::StringSet(_) => ValueKind::StringSet,
            AnswerValue::Fraction(_) => ValueKind::Fraction,
            AnswerValue::NumberWithUnits(_) => ValueKind::NumberWithUnits,
            AnswerValue::ListOfSets(_) => ValueKind::ListOfSets,
            AnswerValue::ClickOnImage(_) => ValueKind::ClickOnImage,
            AnswerValue::RatioExpression(_) => ValueKind::RatioExpression,
        }
    }
}

/// Case tags for [`AnswerValue`], used in classification diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    NormalizedString,
    SignedInt,
    NonNegativeInt,
    Real,
    StringSet,
    Fraction,
    NumberWithUnits,
    ListOfSets,
    ClickOnImage,
    RatioExpression,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::NormalizedString => "NORMALIZED_STRING",
            ValueKind::SignedInt => "SIGNED_INT",
            ValueKind::NonNegativeInt => "NON_NEGATIVE_INT",
            ValueKind::Real => "REAL",
            ValueKind::StringSet => "STRING_SET",
            ValueKind::Fraction => "FRACTION",
            ValueKind::NumberWithUnits => "NUMBER_WITH_UNITS",
            ValueKind::ListOfSets => "LIST_OF_SETS",
            ValueKind::ClickOnImage => "CLICK_ON_IMAGE",
            ValueKind::RatioExpression => "RATIO_EXPRESSION",
        };
        write!(f, "{name}")
    }
}

/// The named parameters attached to a rule spec, keyed by parameter name
/// (e.g. `"x"`, `"tol"`). Insertion order is irrelevant; a name a classifier
/// references must be present.
pub type RuleInputs = HashMap<String, AnswerValue>;

/// An unordered collection of opaque HTML string tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSet {
    pub strings: Vec<String>,
}

impl StringSet {
    pub fn new(strings: Vec<String>) -> Self {
        Self { strings }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.strings.iter().any(|s| s == token)
    }

    /// Set equality: same tokens regardless of order or duplication.
    pub fn is_set_equal_to(&self, other: &StringSet) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }

    /// True if every token of `self` appears in `other`.
    pub fn is_subset_of(&self, other: &StringSet) -> bool {
        self.strings.iter().all(|s| other.contains(s))
    }

    /// True if any token appears in both sets.
    pub fn intersects(&self, other: &StringSet) -> bool {
        self.strings.iter().any(|s| other.contains(s))
    }

    /// Distinct token count (duplicates collapsed).
    pub fn distinct_len(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.strings.len());
        for s in &self.strings {
            if !seen.contains(&s.as_str()) {
                seen.push(s);
            }
        }
        seen.len()
    }
}

/// A fraction decomposed the way learners enter it: an optional sign, a
/// whole-number part, and a numerator/denominator pair. The denominator is
/// always positive; the sign lives on `is_negative`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    #[serde(default)]
    pub is_negative: bool,
    #[serde(default)]
    pub whole_number: u32,
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    /// Numerator of the improper form, ignoring sign: `w * d + n`.
    pub fn improper_numerator(&self) -> u32 {
        self.whole_number * self.denominator + self.numerator
    }

    /// The fraction reduced to lowest terms, with the whole-number part
    /// folded back out of the improper form. Sign is preserved.
    pub fn to_simplest_form(&self) -> Fraction {
        let improper = self.improper_numerator();
        let g = gcd(improper, self.denominator).max(1);
        let numerator = improper / g;
        let denominator = self.denominator / g;
        Fraction {
            is_negative: self.is_negative,
            whole_number: numerator / denominator,
            numerator: numerator % denominator,
            denominator,
        }
    }

    /// True if the fraction is already in lowest terms with a proper
    /// numerator.
    pub fn is_in_simplest_form(&self) -> bool {
        *self == self.to_simplest_form()
    }

    /// True unless the magnitude is integral (integral covers `0/3`, `4/2`,
    /// and whole-number entries like `3 2/2`).
    pub fn has_fractional_part(&self) -> bool {
        self.improper_numerator() % self.denominator != 0
    }

    /// Numerator with the sign applied.
    pub fn signed_numerator(&self) -> i32 {
        let n = self.numerator as i32;
        if self.is_negative {
            -n
        } else {
            n
        }
    }

    /// Whole-number part with the sign applied.
    pub fn signed_whole_number(&self) -> i32 {
        let w = self.whole_number as i32;
        if self.is_negative {
            -w
        } else {
            w
        }
    }

    pub fn to_f64(&self) -> f64 {
        let magnitude = self.improper_numerator() as f64 / self.denominator as f64;
        if self.is_negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// A number (real or fraction) paired with measurement units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberWithUnits {
    pub value: UnitValue,
    #[serde(default)]
    pub units: Vec<NumberUnit>,
}

/// The magnitude of a [`NumberWithUnits`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitValue {
    Real(f64),
    Fraction(Fraction),
}

impl UnitValue {
    pub fn to_f64(&self) -> f64 {
        match self {
            UnitValue::Real(r) => *r,
            UnitValue::Fraction(f) => f.to_f64(),
        }
    }
}

/// A single unit with its exponent (e.g. `m` with exponent `-2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberUnit {
    pub unit: String,
    #[serde(default = "default_exponent")]
    pub exponent: i32,
}

fn default_exponent() -> i32 {
    1
}

impl NumberWithUnits {
    /// True if both values carry the same units, irrespective of order.
    pub fn has_same_units_as(&self, other: &NumberWithUnits) -> bool {
        self.units.len() == other.units.len()
            && self.units.iter().all(|u| other.units.contains(u))
            && other.units.iter().all(|u| self.units.contains(u))
    }
}

/// An ordered list of string sets, as produced by drag-and-drop sorting
/// (each set is one group of items sharing a position).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOfSets {
    pub sets: Vec<StringSet>,
}

impl ListOfSets {
    /// 0-based group index of `item`, if present.
    pub fn position_of(&self, item: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.contains(item))
    }

    /// Every item with its 0-based group index.
    pub fn item_positions(&self) -> Vec<(&str, usize)> {
        self.sets
            .iter()
            .enumerate()
            .flat_map(|(index, set)| set.strings.iter().map(move |s| (s.as_str(), index)))
            .collect()
    }
}

/// A learner click on an image. Geometry is resolved upstream; by the time
/// a value reaches classification, `clicked_regions` holds the labels of
/// every authored region containing the click.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickOnImage {
    #[serde(default)]
    pub click_position: Option<ImagePoint>,
    #[serde(default)]
    pub clicked_regions: Vec<String>,
}

/// A point in normalized image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered sequence of positive integer ratio components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioExpression {
    pub components: Vec<u32>,
}

impl RatioExpression {
    pub fn new(components: Vec<u32>) -> Self {
        Self { components }
    }

    pub fn term_count(&self) -> usize {
        self.components.len()
    }

    /// The ratio reduced to lowest form: every component divided by the GCD
    /// of all components. A sequence whose components share no factor is
    /// returned unchanged, so reduction is idempotent.
    pub fn to_lowest_form(&self) -> RatioExpression {
        let g = self.components.iter().copied().fold(0, gcd);
        if g <= 1 {
            return self.clone();
        }
        RatioExpression {
            components: self.components.iter().map(|c| c / g).collect(),
        }
    }
}

/// Greatest common divisor by the Euclidean algorithm. `gcd(0, n) == n`.
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

// ---------------------------------------------------------------------------
// Authored interaction content
// ---------------------------------------------------------------------------

/// An authored interaction: the input widget's id plus the grading content
/// attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction type id (e.g. "TextInput", "RatioInput").
    pub id: String,
    /// Ordered answer groups; the first group with a matching rule spec wins.
    #[serde(default)]
    pub answer_groups: Vec<AnswerGroup>,
    /// Outcome returned when no answer group matches.
    pub default_outcome: Outcome,
}

/// One authored response group: the rule specs that route an answer here
/// and the outcome the learner receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerGroup {
    #[serde(default)]
    pub rule_specs: Vec<RuleSpec>,
    pub outcome: Outcome,
    /// Skill misconception tagged by the author, surfaced with the outcome.
    #[serde(default)]
    pub tagged_skill_misconception_id: Option<String>,
}

/// A named grading predicate with its authored parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule name within the interaction's catalog (e.g. "Equals").
    pub rule_type: String,
    #[serde(default)]
    pub inputs: RuleInputs,
}

/// Where the learner goes next and what feedback they see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub dest_state_name: String,
    pub feedback: Feedback,
    #[serde(default)]
    pub labelled_as_correct: bool,
}

/// Learner-visible feedback HTML with its content id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub content_id: String,
    pub html: String,
}

/// The result of classifying an answer against a full interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationResult {
    /// An outcome with no tagged misconception.
    OutcomeOnly(Outcome),
    /// An outcome whose answer group tagged a skill misconception.
    OutcomeWithMisconception {
        outcome: Outcome,
        tagged_skill_misconception_id: String,
    },
}

impl ClassificationResult {
    /// The resolved outcome, regardless of misconception tagging.
    pub fn outcome(&self) -> &Outcome {
        match self {
            ClassificationResult::OutcomeOnly(outcome) => outcome,
            ClassificationResult::OutcomeWithMisconception { outcome, .. } => outcome,
        }
    }

    /// The tagged misconception id, if any.
    pub fn tagged_skill_misconception_id(&self) -> Option<&str> {
        match self {
            ClassificationResult::OutcomeOnly(_) => None,
            ClassificationResult::OutcomeWithMisconception {
                tagged_skill_misconception_id,
                ..
            } => Some(tagged_skill_misconception_id),
        }
    }
}
