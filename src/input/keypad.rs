//! On-screen keypad layout.
//!
//! Pointer clicks arrive as a button label or element id; the keypad maps
//! either back to the action the button performs.

use crate::core::{Action, BinaryOp, Digit, UnaryOp};
use serde::{Deserialize, Serialize};

/// A single keypad button definition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDef {
    /// The action this button performs
    pub action: Action,
    /// Text shown on the button
    pub label: String,
    /// Element id in the rendered page
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl ButtonDef {
    pub fn new(action: Action, row: usize, col: usize) -> Self {
        Self {
            label: action.label(),
            id: element_id(&action),
            action,
            row,
            col,
            span: 1,
        }
    }

    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Whether the button covers the given grid cell.
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

fn element_id(action: &Action) -> String {
    match action {
        Action::Digit(d) => format!("btn-{}", d.value()),
        Action::Decimal => "decimal".to_string(),
        Action::Binary(BinaryOp::Add) => "btn-add".to_string(),
        Action::Binary(BinaryOp::Subtract) => "btn-subtract".to_string(),
        Action::Binary(BinaryOp::Multiply) => "btn-multiply".to_string(),
        Action::Binary(BinaryOp::Divide) => "btn-divide".to_string(),
        Action::Unary(UnaryOp::Square) => "square".to_string(),
        Action::Unary(UnaryOp::Percent) => "modulo".to_string(),
        Action::Equals => "equals".to_string(),
        Action::Clear => "clear".to_string(),
        Action::Backspace => "backspace".to_string(),
    }
}

/// Map a button's visible label to its action.
pub fn label_to_action(label: &str) -> Option<Action> {
    let action = match label.trim() {
        "." => Action::Decimal,
        "+" => Action::Binary(BinaryOp::Add),
        "-" => Action::Binary(BinaryOp::Subtract),
        "×" => Action::Binary(BinaryOp::Multiply),
        "/" => Action::Binary(BinaryOp::Divide),
        "x²" => Action::Unary(UnaryOp::Square),
        "%" => Action::Unary(UnaryOp::Percent),
        "=" => Action::Equals,
        "C" => Action::Clear,
        other => {
            let mut chars = other.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Digit::from_char(c).map(Action::Digit),
                _ => None,
            };
        }
    };
    Some(action)
}

/// The full keypad.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    buttons: Vec<ButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The standard five-row layout:
    ///
    /// ```text
    /// C  x²  %  /
    /// 7  8   9  ×
    /// 4  5   6  -
    /// 1  2   3  +
    /// 0      .  =
    /// ```
    pub fn standard() -> Self {
        let digit = |d: usize| Action::Digit(Digit::ALL[d]);
        let mut buttons = vec![
            ButtonDef::new(Action::Clear, 0, 0),
            ButtonDef::new(Action::Unary(UnaryOp::Square), 0, 1),
            ButtonDef::new(Action::Unary(UnaryOp::Percent), 0, 2),
            ButtonDef::new(Action::Binary(BinaryOp::Divide), 0, 3),
        ];

        let operators = [BinaryOp::Multiply, BinaryOp::Subtract, BinaryOp::Add];
        for (row, op) in (1..=3).zip(operators) {
            // Row 1 holds 7-9, row 3 holds 1-3.
            let first = 7 - 3 * (row - 1);
            for col in 0..3 {
                buttons.push(ButtonDef::new(digit(first + col), row, col));
            }
            buttons.push(ButtonDef::new(Action::Binary(op), row, 3));
        }

        buttons.push(ButtonDef::new(digit(0), 4, 0).spanning(2));
        buttons.push(ButtonDef::new(Action::Decimal, 4, 2));
        buttons.push(ButtonDef::new(Action::Equals, 4, 3));

        Self { buttons }
    }

    pub fn buttons(&self) -> &[ButtonDef] {
        &self.buttons
    }

    pub fn find_by_label(&self, label: &str) -> Option<&ButtonDef> {
        let label = label.trim();
        self.buttons.iter().find(|b| b.label == label)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// The button covering a grid cell.
    pub fn at(&self, row: usize, col: usize) -> Option<&ButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    pub fn rows(&self) -> usize {
        self.buttons.iter().map(|b| b.row + 1).max().unwrap_or(0)
    }
}
