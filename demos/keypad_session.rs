//! Keypad Session
//!
//! This example drives a calculator the way a browser page would: key
//! presses and button clicks go in, display frames come out.
//!
//! Key concepts:
//! - Keyboard keys and button labels map onto the same actions
//! - Ignored actions leave the display untouched
//! - The transition log records every dispatched action
//!
//! Run with: cargo run --example keypad_session

use reckon::builder::CalculatorBuilder;
use reckon::input::Keypad;
use reckon::shell::RecordingDisplay;

fn main() {
    println!("=== Keypad Session Example ===\n");

    let keypad = Keypad::standard();
    println!("Layout:");
    for row in 0..keypad.rows() {
        let labels: Vec<&str> = keypad
            .buttons()
            .iter()
            .filter(|button| button.row == row)
            .map(|button| button.label.as_str())
            .collect();
        println!("  {}", labels.join("  "));
    }
    println!();

    let mut calc = match CalculatorBuilder::new()
        .max_entry_len(16)
        .record_transitions(true)
        .display(RecordingDisplay::new())
        .build()
    {
        Ok(calc) => calc,
        Err(err) => {
            eprintln!("Failed to build calculator: {err}");
            return;
        }
    };

    for key in ["3", "+", "4", "*", "2", "=", "=", "."] {
        calc.press_key(key);
    }
    calc.press_button("x²");
    for key in ["/", "0", "Enter"] {
        calc.press_key(key);
    }

    println!("Frames:");
    for (i, frame) in calc.display().frames().iter().enumerate() {
        println!("  {i:>2}: {:>12} | {}", frame.primary, frame.history);
    }

    if let Some(log) = calc.log() {
        println!("\nRejected actions:");
        for (action, rejection) in log.rejections() {
            println!("  {action}: {rejection}");
        }
        println!("\nPhases visited: {:?}", log.get_path());
    }

    match calc.display().to_json() {
        Ok(json) => println!("\nLast frames as JSON: {} bytes", json.len()),
        Err(err) => eprintln!("Failed to serialize frames: {err}"),
    }

    println!("\n=== Example Complete ===");
}
