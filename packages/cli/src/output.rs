//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Colorize;
use filegen_config::ConfigEntry;

/// Print the settings file in use.
pub fn print_settings_info(path: &str) {
    println!("Settings: {}", path.cyan());
}

/// Print configurations and their tasks.
pub fn print_config_list(configs: &[ConfigEntry]) {
    println!(
        "Found {} configuration{}:",
        configs.len(),
        if configs.len() == 1 { "" } else { "s" }
    );
    for config in configs {
        println!(
            "  {} {} - {}",
            "•".dimmed(),
            config.label.yellow(),
            config.description
        );
        for task in &config.tasks {
            let marker = if task.is_default { " (default)" } else { "" };
            println!(
                "      {} {}{} {}",
                "›".dimmed(),
                task.label,
                marker.dimmed(),
                task.command.dimmed()
            );
        }
    }
    println!();
}

/// Print a file being brought to the user's attention.
pub fn print_file(path: &str) {
    println!("  {} {}", "→".dimmed(), path.green());
}

/// Print a planned or applied result for a path.
pub fn print_result(path: &str, result: &str) {
    println!("  {} {}", path, format!("({result})").dimmed());
}

/// Print a command being run.
pub fn print_command(terminal: &str, cmd: &str) {
    println!("  {} {}", format!("[{terminal}] $").dimmed(), cmd);
}

/// Print rendered file content, indented.
pub fn print_content(content: &str) {
    for line in content.lines() {
        println!("    {}", line.dimmed());
    }
}

/// Print an informational message.
pub fn print_info(message: &str) {
    println!("{} {}", "✅", message);
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", "Warning:".yellow().bold(), message);
}
