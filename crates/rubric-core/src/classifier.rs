//! Rule classifier construction.
//!
//! A [`RuleClassifier`] binds a declared contract (the answer case a rule
//! expects plus zero, one, or two named input cases) to a pure matcher
//! function. The contract is enforced at call time, where external data
//! enters; everywhere else the compiler's exhaustive case matching makes
//! mismatches unrepresentable.

use crate::error::ClassificationError;
use crate::model::{
    AnswerValue, ClickOnImage, Fraction, ListOfSets, NumberWithUnits, RatioExpression, RuleInputs,
    StringSet, ValueKind,
};

/// Binds a Rust payload type to the [`AnswerValue`] case carrying it.
///
/// `extract` returns `None` on a case mismatch; the classifier turns that
/// into the appropriate typed classification error. The `f64` impl also
/// accepts signed integers, widening them, so integer submissions grade
/// correctly against real-number rules.
pub trait AnswerType: Sized {
    const KIND: ValueKind;

    fn extract(value: &AnswerValue) -> Option<Self>;
}

impl AnswerType for String {
    const KIND: ValueKind = ValueKind::NormalizedString;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::NormalizedString(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl AnswerType for i32 {
    const KIND: ValueKind = ValueKind::SignedInt;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::SignedInt(i) => Some(*i),
            _ => None,
        }
    }
}

impl AnswerType for u32 {
    const KIND: ValueKind = ValueKind::NonNegativeInt;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::NonNegativeInt(i) => Some(*i),
            _ => None,
        }
    }
}

impl AnswerType for f64 {
    const KIND: ValueKind = ValueKind::Real;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::Real(r) => Some(*r),
            // Integer entries are valid real submissions.
            AnswerValue::SignedInt(i) => Some(f64::from(*i)),
            _ => None,
        }
    }
}

impl AnswerType for StringSet {
    const KIND: ValueKind = ValueKind::StringSet;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::StringSet(set) => Some(set.clone()),
            _ => None,
        }
    }
}

impl AnswerType for Fraction {
    const KIND: ValueKind = ValueKind::Fraction;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::Fraction(f) => Some(f.clone()),
            _ => None,
        }
    }
}

impl AnswerType for NumberWithUnits {
    const KIND: ValueKind = ValueKind::NumberWithUnits;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::NumberWithUnits(n) => Some(n.clone()),
            _ => None,
        }
    }
}

impl AnswerType for ListOfSets {
    const KIND: ValueKind = ValueKind::ListOfSets;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::ListOfSets(l) => Some(l.clone()),
            _ => None,
        }
    }
}

impl AnswerType for ClickOnImage {
    const KIND: ValueKind = ValueKind::ClickOnImage;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::ClickOnImage(c) => Some(c.clone()),
            _ => None,
        }
    }
}

impl AnswerType for RatioExpression {
    const KIND: ValueKind = ValueKind::RatioExpression;

    fn extract(value: &AnswerValue) -> Option<Self> {
        match value {
            AnswerValue::RatioExpression(r) => Some(r.clone()),
            _ => None,
        }
    }
}

type CheckFn =
    Box<dyn Fn(&AnswerValue, &RuleInputs) -> Result<bool, ClassificationError> + Send + Sync>;

/// A runtime-invocable grading rule: type-checks the submitted answer and
/// the named parameters, then delegates to a pure matcher.
///
/// Classifiers are stateless and immutable once constructed; sharing one
/// across threads for concurrent calls is safe.
pub struct RuleClassifier {
    check: CheckFn,
}

impl RuleClassifier {
    /// Classifies `answer` against the authored `inputs`.
    ///
    /// `Ok(false)` is a graded non-match; an `Err` always indicates an
    /// authoring or wiring defect.
    pub fn matches(
        &self,
        answer: &AnswerValue,
        inputs: &RuleInputs,
    ) -> Result<bool, ClassificationError> {
        (self.check)(answer, inputs)
    }
}

fn extract_answer<A: AnswerType>(answer: &AnswerValue) -> Result<A, ClassificationError> {
    A::extract(answer).ok_or_else(|| ClassificationError::UnexpectedAnswerType {
        expected: A::KIND,
        actual: answer.kind(),
    })
}

fn get_parameter<'a>(
    inputs: &'a RuleInputs,
    name: &'static str,
) -> Result<&'a AnswerValue, ClassificationError> {
    inputs
        .get(name)
        .ok_or_else(|| ClassificationError::missing_parameter(name, inputs.keys()))
}

fn extract_input<I: AnswerType>(value: &AnswerValue) -> Result<I, ClassificationError> {
    I::extract(value).ok_or_else(|| ClassificationError::UnexpectedInputType {
        expected: I::KIND,
        actual: value.kind(),
    })
}

/// A classifier for rules that read no parameters (the predicate is a
/// property of the answer alone).
pub fn no_input_classifier<A>(matcher: fn(&A) -> bool) -> RuleClassifier
where
    A: AnswerType + 'static,
{
    RuleClassifier {
        check: Box::new(move |answer, _inputs| Ok(matcher(&extract_answer::<A>(answer)?))),
    }
}

/// A classifier whose single parameter has the same case as the answer.
pub fn single_input_classifier<A>(
    parameter: &'static str,
    matcher: fn(&A, &A) -> bool,
) -> RuleClassifier
where
    A: AnswerType + 'static,
{
    multi_type_single_input_classifier::<A, A>(parameter, matcher)
}

/// A classifier whose single parameter has a different case than the
/// answer (e.g. a ratio answer graded against an integer term count).
pub fn multi_type_single_input_classifier<A, I>(
    parameter: &'static str,
    matcher: fn(&A, &I) -> bool,
) -> RuleClassifier
where
    A: AnswerType + 'static,
    I: AnswerType + 'static,
{
    RuleClassifier {
        // Parameter presence is checked before answer and input cases.
        check: Box::new(move |answer, inputs| {
            let value = get_parameter(inputs, parameter)?;
            let answer = extract_answer::<A>(answer)?;
            let input = extract_input::<I>(value)?;
            Ok(matcher(&answer, &input))
        }),
    }
}

/// A classifier reading two named parameters, each with its own case.
pub fn double_input_classifier<A, I1, I2>(
    first_parameter: &'static str,
    second_parameter: &'static str,
    matcher: fn(&A, &I1, &I2) -> bool,
) -> RuleClassifier
where
    A: AnswerType + 'static,
    I1: AnswerType + 'static,
    I2: AnswerType + 'static,
{
    RuleClassifier {
        check: Box::new(move |answer, inputs| {
            let first_value = get_parameter(inputs, first_parameter)?;
            let second_value = get_parameter(inputs, second_parameter)?;
            let answer = extract_answer::<A>(answer)?;
            let first = extract_input::<I1>(first_value)?;
            let second = extract_input::<I2>(second_value)?;
            Ok(matcher(&answer, &first, &second))
        }),
    }
}
