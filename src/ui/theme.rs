//! Tone helpers shared by banners, badges and toasts.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Info,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "tone-success",
            Tone::Warning => "tone-warning",
            Tone::Error => "tone-error",
            Tone::Info => "tone-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
            Tone::Info => "ℹ️",
        }
    }
}

pub fn banner(tone: Tone) -> String {
    format!("banner {}", tone.class())
}

pub fn badge(tone: Tone) -> String {
    format!("badge {}", tone.class())
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}
