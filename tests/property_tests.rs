//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use reckon::core::{
    apply, format_number, parse_number, Action, BinaryOp, CalcState, Phase, UnaryOp,
};
use reckon::enforcement::check_state;

fn digit(d: u8) -> Action {
    Action::digit(d).unwrap()
}

fn run(state: CalcState, actions: &[Action]) -> CalcState {
    actions
        .iter()
        .fold(state, |state, action| apply(&state, *action).state)
}

prop_compose! {
    fn arbitrary_binary()(variant in 0..4u8) -> BinaryOp {
        match variant {
            0 => BinaryOp::Add,
            1 => BinaryOp::Subtract,
            2 => BinaryOp::Multiply,
            _ => BinaryOp::Divide,
        }
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0..=9u8).prop_map(digit),
        1 => Just(Action::Decimal),
        2 => arbitrary_binary().prop_map(Action::Binary),
        1 => Just(Action::Unary(UnaryOp::Square)),
        1 => Just(Action::Unary(UnaryOp::Percent)),
        1 => Just(Action::Equals),
        1 => Just(Action::Backspace),
        1 => Just(Action::Clear),
    ]
}

proptest! {
    #[test]
    fn digits_from_fresh_state_concatenate(digits in prop::collection::vec(0..=9u8, 1..20)) {
        let actions: Vec<_> = digits.iter().map(|d| digit(*d)).collect();
        let state = run(CalcState::new(), &actions);

        let typed: String = digits.iter().map(|d| d.to_string()).collect();
        let expected = typed.trim_start_matches('0');
        let expected = if expected.is_empty() { "0" } else { expected };
        prop_assert_eq!(state.display().primary, expected);
    }

    #[test]
    fn never_more_than_one_decimal_point(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut state = CalcState::new();
        for action in actions {
            state = apply(&state, action).state;
            state = apply(&state, Action::Decimal).state;
            state = apply(&state, Action::Decimal).state;
            let points = state.display().primary.matches('.').count();
            prop_assert!(points <= 1, "{:?}", state.display());
        }
    }

    #[test]
    fn digit_after_operator_replaces(
        left in prop::collection::vec(1..=9u8, 1..6),
        op in arbitrary_binary(),
        right in 1..=9u8,
    ) {
        let mut actions: Vec<_> = left.iter().map(|d| digit(*d)).collect();
        actions.push(Action::Binary(op));
        actions.push(digit(right));

        let state = run(CalcState::new(), &actions);
        prop_assert_eq!(state.display().primary, right.to_string());
    }

    #[test]
    fn equals_matches_float_arithmetic(a in 0..1000u32, b in 0..1000u32, op in arbitrary_binary()) {
        let mut actions = Vec::new();
        for c in a.to_string().chars() {
            actions.push(digit(c.to_digit(10).unwrap() as u8));
        }
        actions.push(Action::Binary(op));
        for c in b.to_string().chars() {
            actions.push(digit(c.to_digit(10).unwrap() as u8));
        }
        actions.push(Action::Equals);

        let state = run(CalcState::new(), &actions);
        let expected = format_number(op.apply(f64::from(a), f64::from(b)));
        prop_assert_eq!(state.display().primary, expected);
        prop_assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn clear_always_restores_initial_state(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let state = run(CalcState::new(), &actions);
        let cleared = apply(&state, Action::Clear).state;
        prop_assert_eq!(cleared, CalcState::new());
    }

    #[test]
    fn equals_without_pending_operator_is_a_no_op(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let state = run(CalcState::new(), &actions);
        prop_assume!(state.pending.is_none());

        let step = apply(&state, Action::Equals);
        prop_assert!(!step.outcome.is_applied());
        prop_assert_eq!(step.state, state);
    }

    #[test]
    fn history_line_present_iff_operator_pending(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let state = run(CalcState::new(), &actions);
        let display = state.display();
        prop_assert_eq!(display.history.is_empty(), state.phase() == Phase::Idle);
        prop_assert!(!display.primary.is_empty());
    }

    #[test]
    fn reachable_states_satisfy_invariants(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let mut state = CalcState::new();
        for action in actions {
            state = apply(&state, action).state;
            prop_assert!(check_state(&state).is_success(), "{:?}", state);
        }
    }

    #[test]
    fn square_is_unary_and_immediate(d in 1..=9u8) {
        let state = run(CalcState::new(), &[digit(d), Action::Unary(UnaryOp::Square)]);
        prop_assert_eq!(state.display().primary, (u32::from(d) * u32::from(d)).to_string());
        prop_assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn formatted_numbers_parse_back(value in any::<f64>()) {
        let text = format_number(value);
        match parse_number(&text) {
            Some(parsed) => prop_assert!(parsed == value || (parsed == 0.0 && value == 0.0)),
            None => prop_assert!(value.is_nan()),
        }
    }

    #[test]
    fn quarter_ties_round_to_even_digit(whole in (1u64 << 50)..(1u64 << 51)) {
        // Spacing here is 0.25, so .25 and .75 sit exactly between two
        // 17-digit candidates.
        let base = whole as f64;
        prop_assert_eq!(format_number(base + 0.25), format!("{whole}.2"));
        prop_assert_eq!(format_number(base + 0.5), format!("{whole}.5"));
        prop_assert_eq!(format_number(base + 0.75), format!("{whole}.8"));
        prop_assert_eq!(format_number(-(base + 0.25)), format!("-{whole}.2"));
    }

    #[test]
    fn state_roundtrip_serialization(actions in prop::collection::vec(arbitrary_action(), 0..30)) {
        let state = run(CalcState::new(), &actions);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalcState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
