use crate::domain::{RoastLevel, RoastRequest};
use roastme_errors::AppError;

pub const MAX_ABOUT_CHARS: usize = 300;

pub struct InputSanitizer;

impl InputSanitizer {
    /// Validates raw form/JSON fields into a [`RoastRequest`].
    ///
    /// Presence of name, profession and level is checked before the level
    /// value itself, so a request missing both reports the missing fields.
    /// Name and profession are only trimmed; `about` is also capped.
    pub fn validate_roast_input(
        name: Option<&str>,
        profession: Option<&str>,
        level: Option<&str>,
        about: Option<&str>,
    ) -> Result<RoastRequest, AppError> {
        let name = name.unwrap_or_default().trim().to_string();
        let profession = profession.unwrap_or_default().trim().to_string();
        let level = level.unwrap_or_default().trim();

        if name.is_empty() || profession.is_empty() || level.is_empty() {
            return Err(AppError::MissingFields);
        }

        let level: RoastLevel = level.parse()?;
        let about = Self::clean_field(about.unwrap_or_default(), MAX_ABOUT_CHARS);

        Ok(RoastRequest::new(name, profession, level, about))
    }

    /// Drops control characters (keeping newlines and tabs), trims, and caps
    /// the result at `max_chars` characters.
    pub fn clean_field(input: &str, max_chars: usize) -> String {
        let cleaned: String = input
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();

        cleaned
            .trim()
            .chars()
            .take(max_chars)
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let request =
            InputSanitizer::validate_roast_input(Some("  Raj "), Some("Student"), Some("SOFT"), None)
                .unwrap();
        assert_eq!(request.name, "Raj");
        assert_eq!(request.profession, "Student");
        assert_eq!(request.level, RoastLevel::Soft);
        assert_eq!(request.about, "");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            InputSanitizer::validate_roast_input(None, Some("Student"), Some("soft"), None),
            Err(AppError::MissingFields)
        );
        assert_eq!(
            InputSanitizer::validate_roast_input(Some("Raj"), Some("   "), Some("soft"), None),
            Err(AppError::MissingFields)
        );
        assert_eq!(
            InputSanitizer::validate_roast_input(Some("Raj"), Some("Student"), None, None),
            Err(AppError::MissingFields)
        );
    }

    #[test]
    fn test_missing_fields_reported_before_invalid_level() {
        assert_eq!(
            InputSanitizer::validate_roast_input(None, Some("Student"), Some("savage"), None),
            Err(AppError::MissingFields)
        );
    }

    #[test]
    fn test_invalid_level() {
        let err =
            InputSanitizer::validate_roast_input(Some("Raj"), Some("Student"), Some("savage"), None)
                .unwrap_err();
        assert!(matches!(err, AppError::InvalidLevel(_)));
    }

    #[test]
    fn test_about_is_capped() {
        let about = "a".repeat(MAX_ABOUT_CHARS + 50);
        let request = InputSanitizer::validate_roast_input(
            Some("Raj"),
            Some("Student"),
            Some("medium"),
            Some(&about),
        )
        .unwrap();
        assert_eq!(request.about.chars().count(), MAX_ABOUT_CHARS);
    }

    #[test]
    fn test_long_name_and_profession_kept_whole() {
        let name = "A".repeat(60);
        let profession = "Senior ".repeat(30);
        let request = InputSanitizer::validate_roast_input(
            Some(&name),
            Some(&profession),
            Some("soft"),
            None,
        )
        .unwrap();
        assert_eq!(request.name, name);
        assert_eq!(request.profession, profession.trim());
    }

    #[test]
    fn test_clean_field_strips_control_chars() {
        assert_eq!(InputSanitizer::clean_field("Ra\u{0}j\u{7}", 50), "Raj");
        assert_eq!(InputSanitizer::clean_field("line one\nline two", 50), "line one\nline two");
    }

    #[test]
    fn test_clean_field_counts_chars_not_bytes() {
        let name = "राहुल".repeat(80);
        let cleaned = InputSanitizer::clean_field(&name, MAX_ABOUT_CHARS);
        assert_eq!(cleaned.chars().count(), MAX_ABOUT_CHARS);
    }
}
