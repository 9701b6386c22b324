pub mod colors;
pub mod constants;
pub mod dates;

/// Returns the text, or `placeholder` when it is absent or blank.
pub fn or_placeholder<'a>(text: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder,
    }
}
