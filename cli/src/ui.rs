use colored::Colorize;
use std::io::{self, Write};

/// Print the step currently being worked on
pub fn status_message(message: &str) {
    println!("{} {} ... ", "⏳".yellow(), message.bright_white());
    let _ = io::stdout().flush();
}

pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Errors go to stderr so that they survive output redirection
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message);
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {title} ====").cyan().bold());
}

pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Print an entry of a numbered list, e.g. the lines a rewrite left alone
pub fn step_message(step_number: usize, message: &str) {
    println!("  {}. {}", format!("{step_number}").cyan(), message);
}
