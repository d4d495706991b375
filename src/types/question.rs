use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerUpdate {
    #[serde(default)]
    pub answer: Option<String>,
}
