use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::services::gemini::{generate_text, language_name, strip_code_fences};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub source: String,
    pub title: String,
    pub summary: String,
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    api_key: String,
    model: String,
}

impl NewsClient {
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

    /// Free-text news lookup. Failures come back as an error string so the
    /// dashboard can render a degraded state; the market loop never sees
    /// them.
    pub async fn fetch(&self, query: &str, lang: &str) -> Result<Vec<NewsItem>, String> {
        if !self.has_key() {
            return Err("GEMINI_API_KEY is missing in .env".to_string());
        }

        let prompt = format!(
            "Find up to 6 recent news items about: {query}. \
             Respond in {language} with ONLY a JSON array, no markdown. Each element: \
             {{\"source\": string, \"title\": string, \"summary\": string, \
             \"url\": string, \"time\": string}}. \
             Order from newest to oldest.",
            language = language_name(lang),
        );

        let text = generate_text(&self.http, &self.api_key, &self.model, &prompt).await?;

        serde_json::from_str::<Vec<NewsItem>>(strip_code_fences(&text))
            .map_err(|e| format!("Gemini returned malformed news list: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_items_parse_with_and_without_time() {
        let raw = r#"[
            { "source": "Reuters", "title": "T", "summary": "S", "url": "https://r.example", "time": "2h" },
            { "source": "Bloomberg", "title": "T2", "summary": "S2", "url": "https://b.example" }
        ]"#;

        let items: Vec<NewsItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].time.as_deref(), Some("2h"));
        assert!(items[1].time.is_none());
    }
}
