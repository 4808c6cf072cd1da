//! Helpers around the documents: identifiers, HTML forms and response text.

use crate::config::PAYMENT_URL;
use crate::error::Result;
use uuid::Uuid;

/// Lays out 32 hex digits as a GUID: `8-4-4-4-12`.
///
/// Shorter input is sliced as far as it goes, so missing groups come out
/// empty rather than failing.
pub fn format_uuid(hex: &str) -> String {
    let chars: Vec<char> = hex.chars().collect();
    let group = |start: usize, end: usize| -> String {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        chars[start..end].iter().collect()
    };
    format!(
        "{}-{}-{}-{}-{}",
        group(0, 8),
        group(8, 12),
        group(12, 16),
        group(16, 20),
        group(20, chars.len()),
    )
    .trim()
    .to_string()
}

/// A fresh random identifier in GUID layout.
pub fn new_identifier() -> String {
    format_uuid(&Uuid::new_v4().simple().to_string())
}

/// Draws identifiers until `is_unused` accepts one.
///
/// The gateway keeps results per identifier for months, so reusing one would
/// return a stale result. The check decides what "unused" means.
pub fn allocate_identifier(mut is_unused: impl FnMut(&str) -> Result<bool>) -> Result<String> {
    loop {
        let candidate = new_identifier();
        if is_unused(&candidate)? {
            return Ok(candidate);
        }
        tracing::debug!(identifier = %candidate, "identifier already in use");
    }
}

/// Escapes text for use inside HTML attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strips anything before the first `<` and after the last `>`.
///
/// Returns `None` when the text holds no markup at all.
pub fn trim_xml(text: &str) -> Option<&str> {
    let start = text.find('<')?;
    let end = text.rfind('>')? + 1;
    (start < end).then(|| &text[start..end])
}

/// Parameters of the hosted payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    pub action: String,
    pub redirect_url: String,
    pub button_text: String,
    pub target: String,
}

impl FormOptions {
    /// Creates options posting to the gateway payment page in a new window.
    pub fn new(redirect_url: impl Into<String>, button_text: impl Into<String>) -> Self {
        Self {
            action: PAYMENT_URL.to_string(),
            redirect_url: redirect_url.into(),
            button_text: button_text.into(),
            target: "_blank".to_string(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }
}

/// Builds the POST form that hands an encrypted request to the payment page.
pub fn html_form(envelope: &str, options: &FormOptions) -> String {
    format!(
        r#"<form method="POST" action="{action}" target="{target}">
    <input type="hidden" name="request" value="{request}"/>
    <input type="hidden" name="redirect_url" value="{redirect_url}"/>
    <input type="hidden" name="consumer_initiated" value="true"/>
    <input type="submit" value="{button}"/>
</form>"#,
        action = escape_html(&options.action),
        target = escape_html(&options.target),
        request = escape_html(envelope),
        redirect_url = escape_html(&options.redirect_url),
        button = escape_html(&options.button_text),
    )
}
