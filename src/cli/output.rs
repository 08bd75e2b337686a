//! Rendering of a fetched answer for the terminal or as JSON.

use serde::Serialize;

use crate::models::StructuredResult;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Characters of source text kept in JSON output.
pub const JSON_SOURCE_TEXT_CHARS: usize = 300;

/// Characters of source text shown in the text preview.
pub const PREVIEW_SOURCE_TEXT_CHARS: usize = 150;

/// One retrieved source as reported to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSource {
    pub chunk_id: String,
    pub distance: f64,
    pub text: String,
}

/// The answer to one query, shaped for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchReport {
    pub query: String,
    pub product: String,
    pub response: String,
    pub reasoning: String,
    pub num_sources: usize,
    /// Seconds, rounded to two decimals
    pub latency_s: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<ReportSource>>,
}

impl FetchReport {
    /// Build a report; sources are only carried when requested.
    pub fn new(query: &str, result: StructuredResult, show_sources: bool) -> Self {
        let sources = show_sources.then(|| {
            result
                .sources
                .iter()
                .map(|s| ReportSource {
                    chunk_id: s.chunk_id.clone(),
                    distance: s.distance,
                    text: truncate_chars(&s.text, JSON_SOURCE_TEXT_CHARS),
                })
                .collect()
        });

        Self {
            query: query.to_string(),
            product: result.product,
            response: result.text_response,
            reasoning: result.reasoning,
            num_sources: result.sources.len(),
            latency_s: (result.latency_seconds * 100.0).round() / 100.0,
            sources,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(LINE_WIDTH);
        let mut lines = vec![
            format!("Query: {}", self.query),
            format!("Product: {}", self.product),
            format!("Latency: {:.2}s", self.latency_s),
            format!("Sources: {}", self.num_sources),
            String::new(),
            rule.clone(),
            "RESPONSE:".to_string(),
            rule.clone(),
            self.response.clone(),
        ];

        if !self.reasoning.is_empty() {
            lines.push(String::new());
            lines.push("-".repeat(LINE_WIDTH));
            lines.push(format!("Reasoning: {}", self.reasoning));
        }

        if let Some(sources) = self.sources.as_ref().filter(|s| !s.is_empty()) {
            lines.push(String::new());
            lines.push(rule.clone());
            lines.push("SOURCES:".to_string());
            lines.push(rule);
            for (i, source) in sources.iter().enumerate() {
                let preview =
                    truncate_chars(&source.text, PREVIEW_SOURCE_TEXT_CHARS).replace('\n', " ");
                lines.push(String::new());
                lines.push(format!("{}. [{:.4}] {}", i + 1, source.distance, source.chunk_id));
                lines.push(format!("   {}...", preview));
            }
        }

        lines.join("\n")
    }
}

/// Render an error the way the selected output mode expects.
///
/// The hint only shows in text mode; JSON keeps the single `error` key.
pub fn render_error(message: &str, hint: Option<&str>, json: bool) -> String {
    if json {
        return serde_json::json!({ "error": message }).to_string();
    }

    match hint {
        Some(hint) => format!("ERROR: {}\nHint: {}", message, hint),
        None => format!("ERROR: {}", message),
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
