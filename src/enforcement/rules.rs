//! Invariant checks for state records using Validation.

use crate::core::{CalcState, Entry, Numeral};
use crate::enforcement::violations::{InvariantViolation, Slot};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<InvariantViolation>>;

fn require(condition: bool, violation: impl FnOnce() -> InvariantViolation) -> Check {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

fn numeral_checks(numeral: &Numeral, slot: Slot) -> Vec<Check> {
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let integer = numeral.integer_digits();
    let fraction = numeral.fractional_digits();

    vec![
        require(!integer.is_empty(), || {
            InvariantViolation::MissingIntegerDigits(slot)
        }),
        require(digits_only(integer) && digits_only(fraction), || {
            InvariantViolation::InvalidDigits {
                slot,
                text: numeral.to_string(),
            }
        }),
        require(numeral.has_decimal_point() || fraction.is_empty(), || {
            InvariantViolation::FractionWithoutPoint(slot)
        }),
    ]
}

fn entry_checks(entry: &Entry, slot: Slot) -> Vec<Check> {
    match entry {
        Entry::Numeral(numeral) => numeral_checks(numeral, slot),
        Entry::Literal(text) => vec![
            require(!text.is_empty(), || InvariantViolation::EmptyEntry(slot)),
            require(Numeral::parse(text).is_none(), || {
                InvariantViolation::UnclassifiedLiteral {
                    slot,
                    text: text.clone(),
                }
            }),
        ],
    }
}

/// Check every invariant of a state record, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the state is well formed, or
/// `Validation::Failure` with every violation found.
pub fn check_state(state: &CalcState) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let mut checks = entry_checks(&state.current, Slot::Current);
    if let Some(pending) = &state.pending {
        checks.extend(entry_checks(&pending.left, Slot::PendingLeft));
    }
    Validation::all_vec(checks).map(|_| ())
}

/// [`check_state`] flattened into a `Result` for `?` call sites.
pub fn validate_state(state: &CalcState) -> Result<(), Vec<InvariantViolation>> {
    match check_state(state) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(violations) => Err(violations.iter().cloned().collect()),
    }
}
