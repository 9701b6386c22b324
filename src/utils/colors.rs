use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Green,
    Yellow,
    Cyan,
}

pub fn paint(text: &str, tone: Tone) -> String {
    match tone {
        Tone::Red => text.red().to_string(),
        Tone::Green => text.green().to_string(),
        Tone::Yellow => text.yellow().to_string(),
        Tone::Cyan => text.cyan().to_string(),
    }
}

/// Paints `text` when a tone is given, returns it untouched otherwise.
pub fn paint_opt(text: &str, tone: Option<Tone>) -> String {
    match tone {
        Some(tone) => paint(text, tone),
        None => text.to_string(),
    }
}
