use console::style;
use std::fmt::Display;

/// Green bold: confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: hints and timestamps
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow: non-fatal warnings
pub fn warn<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Cyan bold: the companion's name in front of a reply
pub fn bot_label<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Magenta bold: the user's side of the transcript
pub fn user_label<D: Display>(text: D) -> String {
    style(text).magenta().bold().to_string()
}

/// Subtle marker appended to replies produced without the remote model.
pub fn offline_badge() -> String {
    style("(offline mode)").yellow().dim().italic().to_string()
}
