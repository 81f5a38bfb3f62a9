//! Single-line form fields and shared validation.
//!
//! Fields are grapheme-aware so cursor movement and backspace behave over
//! multi-byte input. Password fields render masked but keep the real value.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// A single-line editable field.
#[derive(Debug, Clone)]
pub struct TextField {
    pub label: &'static str,
    value: String,
    /// Cursor position in graphemes (0..=len).
    cursor: usize,
    masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            cursor: 0,
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_value(label: &'static str, value: &str) -> Self {
        let mut field = Self::new(label);
        field.set_value(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// What the terminal shows: bullets for masked fields.
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.grapheme_count())
        } else {
            self.value.clone()
        }
    }

    /// Cursor position in display columns (graphemes; masks are width 1).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, ch: char) {
        let byte = self.byte_at(self.cursor);
        self.value.insert(byte, ch);
        self.cursor += 1;
    }

    /// Inserts pasted text, dropping line breaks (fields are single-line).
    pub fn insert_str(&mut self, text: &str) {
        let flat: String = text
            .chars()
            .filter(|ch| *ch != '\n' && *ch != '\r')
            .collect();
        if flat.is_empty() {
            return;
        }
        let byte = self.byte_at(self.cursor);
        self.value.insert_str(byte, &flat);
        self.cursor += flat.graphemes(true).count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_at(self.cursor - 1);
        let end = self.byte_at(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_at(self.cursor);
        let end = self.byte_at(self.cursor + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (len for one-past-end).
    fn byte_at(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(byte, _)| byte)
    }
}

/// Routes an editing key to a field. Returns true if the key was consumed.
///
/// Submission, focus movement, and navigation keys are deliberately not
/// handled here; each form decides those.
pub fn field_input(field: &mut TextField, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(ch) if !ctrl => {
            field.insert(ch);
            true
        }
        KeyCode::Backspace => {
            field.backspace();
            true
        }
        KeyCode::Delete => {
            field.delete();
            true
        }
        KeyCode::Left => {
            field.move_left();
            true
        }
        KeyCode::Right => {
            field.move_right();
            true
        }
        KeyCode::Home => {
            field.move_home();
            true
        }
        KeyCode::End => {
            field.move_end();
            true
        }
        KeyCode::Char('u') if ctrl => {
            field.clear();
            true
        }
        _ => false,
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Minimum accepted password length, matching the backend rule.
pub const MIN_PASSWORD_LEN: usize = 8;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Loose phone shape: digits with optional +, spaces, dashes, parens.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    digits >= 7
        && phone
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | ' ' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_is_grapheme_aware() {
        let mut field = TextField::new("Name");
        field.insert_str("año");
        assert_eq!(field.cursor(), 3);
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "ao");
    }

    #[test]
    fn masked_display_hides_content() {
        let mut field = TextField::masked("Password");
        field.insert_str("hunter42");
        assert_eq!(field.display_value(), "••••••••");
        assert_eq!(field.value(), "hunter42");
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut field = TextField::new("Email");
        field.insert_str("kim@\nexample.com\r");
        assert_eq!(field.value(), "kim@example.com");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("kim@example.com"));
        assert!(!is_valid_email("kim@example"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 (555) 014-2222"));
        assert!(is_valid_phone("5550142"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("555"));
    }
}
