use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewNews {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update payload; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct NewsPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
