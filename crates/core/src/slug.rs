//! URL slug generation and validation for blogs, initiatives, success
//! stories, and blog taxonomy.

use crate::error::CoreError;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 160;

/// Generate a URL-safe slug from a title.
///
/// Lowercases ASCII, turns every other character into a hyphen, collapses
/// runs of hyphens, and trims them from both ends. Titles written entirely
/// in a non-Latin script produce an empty slug.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }
    while result.ends_with('-') {
        result.pop();
    }
    result.truncate(MAX_SLUG_LEN);
    result.trim_end_matches('-').to_string()
}

/// Validate a slug: non-empty, bounded, lowercase alphanumerics and single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}': use lowercase letters, digits, and single hyphens"
        )));
    }
    Ok(())
}

/// Use the caller's slug if given, otherwise derive one from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let slug = generate_slug(title);
            if slug.is_empty() {
                return Err(CoreError::Validation(
                    "Could not derive a slug from the title; provide one explicitly".into(),
                ));
            }
            Ok(slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn slug_basic_title() {
        assert_eq!(generate_slug("Clean Water Drive 2024"), "clean-water-drive-2024");
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(
            generate_slug("  Health -- Camps: (Rural) Outreach!  "),
            "health-camps-rural-outreach"
        );
    }

    #[test]
    fn slug_of_devanagari_title_is_empty() {
        assert_eq!(generate_slug("स्वच्छ पानी"), "");
    }

    #[test]
    fn slug_mixed_script_keeps_latin_part() {
        assert_eq!(generate_slug("स्वच्छ Water अभियान"), "water");
    }

    #[test]
    fn validate_accepts_generated_slugs() {
        assert!(validate_slug(&generate_slug("Women in STEM")).is_ok());
    }

    #[test]
    fn validate_rejects_bad_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Upper-Case").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("has space").is_err());
    }

    #[test]
    fn resolve_prefers_explicit_slug() {
        assert_eq!(resolve_slug(Some("custom"), "Title").unwrap(), "custom");
        assert_eq!(resolve_slug(Some("  "), "My Title").unwrap(), "my-title");
        assert_eq!(resolve_slug(None, "My Title").unwrap(), "my-title");
    }

    #[test]
    fn resolve_requires_explicit_slug_for_hindi_title() {
        assert_matches!(resolve_slug(None, "नई पहल"), Err(CoreError::Validation(_)));
        assert_eq!(resolve_slug(Some("nayi-pahal"), "नई पहल").unwrap(), "nayi-pahal");
    }
}
