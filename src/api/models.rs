use serde::{Deserialize, Serialize};
use crate::keywords::Keyword;

#[derive(Debug, Deserialize)]
pub struct PreprocessRequest {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PreprocessResponse {
    pub keywords: Vec<Keyword>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
