//! Draft commands

use colored::Colorize;

use checkin_core::FIELDS;

use super::open_controller;
use crate::config::Config;

/// Run one edit through the formatter and mirror it to the draft store.
pub fn set(config: &Config, field: &str, value: &str) -> Result<(), String> {
    let mut controller = open_controller(config)?;
    match controller.input(field, value) {
        Some(sanitized) => {
            println!("{}: {}", field, sanitized);
            Ok(())
        }
        None => {
            let known: Vec<&str> = FIELDS.iter().map(|f| f.identity).collect();
            Err(format!("unknown field '{}', expected one of: {}", field, known.join(", ")))
        }
    }
}

/// Print every field's current draft value in declared order.
pub fn show(config: &Config) -> Result<(), String> {
    let controller = open_controller(config)?;
    for spec in &FIELDS {
        let value = controller.value(spec.identity);
        if value.is_empty() {
            println!("{:>16}: {}", spec.identity, "-".dimmed());
        } else {
            println!("{:>16}: {}", spec.identity, value);
        }
    }
    Ok(())
}

/// The Cancel action: every field reset, the store's namespace emptied.
pub fn clear(config: &Config) -> Result<(), String> {
    let mut controller = open_controller(config)?;
    controller.cancel();
    println!("{}", "Draft cleared".green());
    Ok(())
}
