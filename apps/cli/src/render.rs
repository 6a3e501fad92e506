//! # Result Screen Rendering
//!
//! Turns a [`Reading`] into terminal output.
//!
//! ## Text Layout
//! ```text
//! 🔮 Your Reading
//! Life Path Number: 3 → Your life is about expression and creativity. ...
//! Birth Day Number: 6
//! Expression Number: 6
//! Soul Urge Number: 1
//!
//! ℹ 6 appears in more than one of your numbers → its influence is amplified in you.
//! ```

use numero_core::{Language, NumberKind, Reading};

use crate::error::ApiError;
use crate::state::OutputFormat;

/// Fixed interface strings per language.
pub struct UiText {
    pub title: &'static str,
    pub intro: &'static str,
    pub name_prompt: &'static str,
    pub birthdate_prompt: &'static str,
    pub result_heading: &'static str,
    pub name_warning: &'static str,
    pub master_marker: &'static str,
}

const UI_TEXT_EN: UiText = UiText {
    title: "🔢 Numerology Reading",
    intro: "Derive your four core numbers from your birthdate and name.",
    name_prompt: "Name (Latin letters)",
    birthdate_prompt: "Birthdate (YYYY-MM-DD)",
    result_heading: "🔮 Your Reading",
    name_warning: "Please enter your name in Latin letters.",
    master_marker: " (master number)",
};

const UI_TEXT_JA: UiText = UiText {
    title: "🔢 数秘術診断アプリ",
    intro: "あなたの生年月日と名前から、基本的な4つの数を導き出します。",
    name_prompt: "名前（ローマ字）",
    birthdate_prompt: "生年月日を選んでください（YYYY-MM-DD）",
    result_heading: "🔮 診断結果",
    name_warning: "名前をローマ字で入力してください。",
    master_marker: "（マスターナンバー）",
};

/// Interface strings for `language`.
pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::En => &UI_TEXT_EN,
        Language::Ja => &UI_TEXT_JA,
    }
}

/// Renders a reading in the requested format.
pub fn render(reading: &Reading, format: OutputFormat, mark_master: bool) -> Result<String, ApiError> {
    match format {
        OutputFormat::Text => Ok(render_text(reading, mark_master)),
        OutputFormat::Json => render_json(reading),
    }
}

/// Labelled numbers, the life path interpretation and any notices.
pub fn render_text(reading: &Reading, mark_master: bool) -> String {
    let text = ui_text(reading.language);
    let masters = if mark_master {
        reading.profile.master_kinds()
    } else {
        Vec::new()
    };

    let mut lines = vec![text.result_heading.to_string()];
    for (kind, value) in reading.profile.entries() {
        let marker = if masters.contains(&kind) {
            text.master_marker
        } else {
            ""
        };
        let label = kind.label(reading.language);
        if kind == NumberKind::LifePath {
            lines.push(format!("{label}: {value}{marker} → {}", reading.life_path_meaning));
        } else {
            lines.push(format!("{label}: {value}{marker}"));
        }
    }

    if !reading.notices.is_empty() {
        lines.push(String::new());
        lines.extend(reading.notices.iter().map(|notice| format!("ℹ {notice}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-printed JSON of the whole reading.
pub fn render_json(reading: &Reading) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(reading)?)
}

/// Renders the empty-name warning in the requested format.
///
/// JSON output is a single `{"warning": ...}` object so it can be told
/// apart from an [`ApiError`].
pub fn render_warning(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("warning: {message}"),
        OutputFormat::Json => serde_json::json!({ "warning": message }).to_string(),
    }
}

/// Renders a failure in the requested format.
pub fn render_error(err: &ApiError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("error: {}", err.message),
        OutputFormat::Json => serde_json::to_string(err)
            .unwrap_or_else(|_| format!("error: {}", err.message)),
    }
}
