use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ContentUpdate {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub content: Value,
}

#[derive(Debug, Deserialize)]
pub struct ThemeUpdate {
    #[serde(default)]
    pub theme: Value,
}
