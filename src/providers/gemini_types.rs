use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentRequest {
    pub(super) contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(super) struct Content {
    pub(super) parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub(super) struct Part {
    pub(super) text: String,
}

impl GenerateContentRequest {
    pub(super) fn single_text(text: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GenerateContentResponse {
    pub(super) candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Candidate {
    pub(super) content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CandidateContent {
    #[serde(default)]
    pub(super) parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResponsePart {
    pub(super) text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-empty.
    pub(super) fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|text| !text.is_empty())
    }
}
