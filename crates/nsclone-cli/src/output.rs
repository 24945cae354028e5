//! Formatted output helpers for CLI commands.

use nsclone_common::types::ContainerDescriptor;

/// Bold ANSI escape.
pub const BOLD: &str = "\x1b[1m";
/// Dim ANSI escape.
pub const DIM: &str = "\x1b[2m";
/// Green ANSI escape.
pub const GREEN: &str = "\x1b[32m";
/// Yellow ANSI escape.
pub const YELLOW: &str = "\x1b[33m";
/// Reset ANSI escape.
pub const RESET: &str = "\x1b[0m";

/// Shortens a full container ID to the familiar 12-character form.
#[must_use]
pub fn short_id(id: &str) -> &str {
    if id.len() > 12 { &id[..12] } else { id }
}

/// Prints a resolved container descriptor.
pub fn print_descriptor(descriptor: &ContainerDescriptor) {
    eprintln!("  {BOLD}{}{RESET} {DIM}[{}]{RESET}", descriptor.name, short_id(descriptor.id.as_str()));
    eprintln!("    id:     {}", descriptor.id);
    eprintln!("    status: {}", descriptor.status);
    eprintln!("    image:  {}", descriptor.image);
}

/// Prints a soft-failure warning line.
pub fn print_warning(message: &str) {
    eprintln!("  {YELLOW}warning:{RESET} {message}");
}
