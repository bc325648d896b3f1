//! Builder API for ergonomic calculator construction.
//!
//! # Example
//!
//! ```
//! use reckon::builder::CalculatorBuilder;
//! use reckon::shell::RecordingDisplay;
//!
//! let mut calc = CalculatorBuilder::new()
//!     .max_entry_len(16)
//!     .record_transitions(true)
//!     .display(RecordingDisplay::new())
//!     .build()
//!     .unwrap();
//!
//! calc.press_key("5");
//! calc.press_button("x²");
//! assert_eq!(calc.snapshot().primary, "25");
//! assert_eq!(calc.log().map(|log| log.len()), Some(2));
//! ```

pub mod calculator;
pub mod error;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
