use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Display language requested by the dashboard's language picker.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "en" => "English",
        "es" => "Spanish",
        "zh" => "Simplified Chinese",
        // The dashboard defaults to Portuguese.
        _ => "Portuguese",
    }
}

#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    api_key: String,
    model: String,
}

impl AnalysisClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model,
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn analyze(
        &self,
        symbol: &str,
        name: &str,
        lang: &str,
    ) -> Result<AnalysisResult, String> {
        if !self.has_key() {
            return Err("GEMINI_API_KEY is missing in .env".to_string());
        }

        let prompt = format!(
            "You are a market analyst. Analyze the asset {name} ({symbol}) for a day trader. \
             Respond in {language} with ONLY a JSON object, no markdown, using exactly these keys: \
             {{\"sentiment\": \"Bullish\"|\"Bearish\"|\"Neutral\", \"summary\": string, \
             \"keyLevels\": {{\"support\": [number], \"resistance\": [number]}}, \
             \"recommendation\": string, \
             \"sources\": [{{\"title\": string, \"url\": string, \"snippet\": string}}]}}",
            language = language_name(lang),
        );

        let text = generate_text(&self.http, &self.api_key, &self.model, &prompt).await?;

        serde_json::from_str::<AnalysisResult>(strip_code_fences(&text))
            .map_err(|e| format!("Gemini returned malformed analysis: {e}"))
    }
}

/// One generateContent round trip; returns the first candidate's text.
pub(crate) async fn generate_text(
    http: &Client,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, String> {
    let url = format!("{API_BASE}/{model}:generateContent");

    let body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    let res = http
        .post(&url)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(format!("Gemini request failed: {status} {body}"));
    }

    let parsed = res
        .json::<GenerateResponse>()
        .await
        .map_err(|e| e.to_string())?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or_else(|| "Gemini returned no candidates".to_string())
}

/// Models often wrap JSON answers in ``` fences despite instructions.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub summary: String,

    #[serde(rename = "keyLevels")]
    pub key_levels: KeyLevels,

    pub recommendation: String,

    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_json() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn analysis_result_parses_the_expected_shape() {
        let raw = r#"{
            "sentiment": "Bullish",
            "summary": "Momentum is positive.",
            "keyLevels": { "support": [62000.0], "resistance": [66000.0, 68000.0] },
            "recommendation": "Wait for a pullback.",
            "sources": [{ "title": "Example", "url": "https://example.com" }]
        }"#;

        let parsed: AnalysisResult = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.sentiment, "Bullish");
        assert_eq!(parsed.key_levels.resistance.len(), 2);
        assert!(parsed.sources[0].snippet.is_none());
    }

    #[tokio::test]
    async fn missing_key_is_reported_without_a_network_call() {
        let client = AnalysisClient::new(String::new(), "gemini-2.0-flash".to_string());
        let err = client.analyze("BTCUSD", "Bitcoin", "en").await.unwrap_err();
        assert!(err.contains("GEMINI_API_KEY"));
    }
}
