//! Operator engine: pending binary operators, unary operators and equals.

use super::action::{BinaryOp, UnaryOp};
use super::numeral::Entry;
use super::state::{CalcState, Pending};
use super::transition::Rejection;

/// Evaluate the pending operation against the current value.
///
/// The result's canonical text becomes the current value, the pending
/// operator clears and the reset flag is set.
pub fn calculate(state: &CalcState) -> Result<CalcState, Rejection> {
    let pending = state
        .pending
        .as_ref()
        .ok_or(Rejection::NoPendingOperator)?;
    let left = pending.left.to_f64().ok_or(Rejection::NonNumericOperand)?;
    let right = state.current.to_f64().ok_or(Rejection::NonNumericOperand)?;

    Ok(CalcState {
        current: Entry::from_value(pending.op.apply(left, right)),
        pending: None,
        reset_input: true,
    })
}

/// Evaluate a pending operation first when a right operand has been typed
/// since it was chosen. Returns whether an evaluation happened.
fn settle_chain(state: &mut CalcState) -> bool {
    if state.pending.is_none() || state.reset_input {
        return false;
    }
    match calculate(state) {
        Ok(next) => {
            *state = next;
            true
        }
        Err(_) => false,
    }
}

/// Choose a binary operator, capturing the current value as left operand.
///
/// `3 + 4 ×` evaluates `3 + 4` before recording `×`.
pub fn select_operator(state: &CalcState, op: BinaryOp) -> CalcState {
    let mut next = state.clone();
    settle_chain(&mut next);
    next.pending = Some(Pending {
        left: next.current.clone(),
        op,
    });
    next.reset_input = true;
    next
}

/// Apply a unary operator to the current value immediately.
///
/// The pending operator and reset flag are left as they are. When the
/// current value is not a number the unary step is skipped; the result is
/// only a rejection if the chained evaluation did not change anything
/// either.
pub fn apply_unary(state: &CalcState, op: UnaryOp) -> Result<CalcState, Rejection> {
    let mut next = state.clone();
    let settled = settle_chain(&mut next);
    match next.current.to_f64() {
        Some(value) => {
            next.current = Entry::from_value(op.apply(value));
            Ok(next)
        }
        None if settled => Ok(next),
        None => Err(Rejection::NonNumericOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(left: &str, op: BinaryOp, current: &str, reset_input: bool) -> CalcState {
        CalcState {
            current: Entry::from_text(current),
            pending: Some(Pending {
                left: Entry::from_text(left),
                op,
            }),
            reset_input,
        }
    }

    fn showing(text: &str) -> CalcState {
        CalcState {
            current: Entry::from_text(text),
            ..CalcState::default()
        }
    }

    #[test]
    fn calculate_applies_each_operator() {
        let cases = [
            (BinaryOp::Add, "10"),
            (BinaryOp::Subtract, "6"),
            (BinaryOp::Multiply, "16"),
            (BinaryOp::Divide, "4"),
        ];
        for (op, expected) in cases {
            let next = calculate(&pending("8", op, "2", false)).unwrap();
            assert_eq!(next.current.to_string(), expected);
            assert!(next.pending.is_none());
            assert!(next.reset_input);
        }
    }

    #[test]
    fn calculate_without_pending_operator_is_rejected() {
        assert_eq!(
            calculate(&showing("5")),
            Err(Rejection::NoPendingOperator)
        );
    }

    #[test]
    fn calculate_with_non_numeric_operand_is_rejected() {
        let state = pending("NaN", BinaryOp::Add, "1", false);
        assert_eq!(calculate(&state), Err(Rejection::NonNumericOperand));

        let state = pending("1", BinaryOp::Add, "Infinit", false);
        assert_eq!(calculate(&state), Err(Rejection::NonNumericOperand));
    }

    #[test]
    fn division_by_zero_produces_non_finite_text() {
        let next = calculate(&pending("1", BinaryOp::Divide, "0", false)).unwrap();
        assert_eq!(next.current.to_string(), "Infinity");

        let next = calculate(&pending("-1", BinaryOp::Divide, "0", false)).unwrap();
        assert_eq!(next.current.to_string(), "-Infinity");

        let next = calculate(&pending("0", BinaryOp::Divide, "0", false)).unwrap();
        assert_eq!(next.current.to_string(), "NaN");
    }

    #[test]
    fn infinity_remains_a_usable_operand() {
        let next = calculate(&pending("Infinity", BinaryOp::Subtract, "1", false)).unwrap();
        assert_eq!(next.current.to_string(), "Infinity");
    }

    #[test]
    fn select_operator_records_left_operand() {
        let next = select_operator(&showing("12"), BinaryOp::Add);
        assert_eq!(
            next.pending,
            Some(Pending {
                left: Entry::from_text("12"),
                op: BinaryOp::Add,
            })
        );
        assert!(next.reset_input);
        assert_eq!(next.display().history, "12 +");
    }

    #[test]
    fn select_operator_chains_after_new_operand() {
        let next = select_operator(&pending("3", BinaryOp::Add, "4", false), BinaryOp::Multiply);
        assert_eq!(next.current.to_string(), "7");
        assert_eq!(next.display().history, "7 ×");
    }

    #[test]
    fn select_operator_replaces_operator_without_new_operand() {
        let next = select_operator(&pending("3", BinaryOp::Add, "3", true), BinaryOp::Subtract);
        assert_eq!(next.current.to_string(), "3");
        assert_eq!(next.display().history, "3 -");
    }

    #[test]
    fn square_and_percent_are_immediate() {
        let squared = apply_unary(&showing("5"), UnaryOp::Square).unwrap();
        assert_eq!(squared.current.to_string(), "25");
        assert!(squared.pending.is_none());

        let percent = apply_unary(&showing("50"), UnaryOp::Percent).unwrap();
        assert_eq!(percent.current.to_string(), "0.5");
    }

    #[test]
    fn unary_keeps_pending_operator_while_awaiting_operand() {
        let state = pending("4", BinaryOp::Add, "4", true);
        let next = apply_unary(&state, UnaryOp::Square).unwrap();
        assert_eq!(next.current.to_string(), "16");
        assert_eq!(next.display().history, "4 +");
        assert!(next.reset_input);
    }

    #[test]
    fn unary_settles_chain_first() {
        let next = apply_unary(&pending("2", BinaryOp::Add, "3", false), UnaryOp::Square).unwrap();
        assert_eq!(next.current.to_string(), "25");
        assert!(next.pending.is_none());
        assert!(next.reset_input);
    }

    #[test]
    fn unary_on_nan_is_rejected() {
        assert_eq!(
            apply_unary(&showing("NaN"), UnaryOp::Square),
            Err(Rejection::NonNumericOperand)
        );
    }

    #[test]
    fn unary_after_chain_to_nan_still_applies_chain() {
        let next = apply_unary(&pending("0", BinaryOp::Divide, "0", false), UnaryOp::Percent).unwrap();
        assert_eq!(next.current.to_string(), "NaN");
        assert!(next.pending.is_none());
    }
}
