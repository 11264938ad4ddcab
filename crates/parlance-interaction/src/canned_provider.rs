//! CannedProvider - simulated answer provider.
//!
//! Stands in for a real retrieval/LLM backend: sleeps a fixed delay, then
//! returns a templated answer. Exact queries can be scripted with fixed
//! answers for demo transcripts.

use async_trait::async_trait;
use parlance_core::error::ProviderError;
use parlance_core::provider::{AnswerProvider, AnswerRequest};
use std::collections::HashMap;
use std::time::Duration;

/// Delay before each simulated answer, matching the product mock.
const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Answer provider that emits canned responses after a fixed delay.
pub struct CannedProvider {
    response_delay: Duration,
    scripted: HashMap<String, String>,
}

impl CannedProvider {
    /// Creates a provider with the default delay and no scripted answers.
    pub fn new() -> Self {
        Self {
            response_delay: DEFAULT_RESPONSE_DELAY,
            scripted: HashMap::new(),
        }
    }

    /// Overrides the response delay after construction.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Registers a fixed answer for an exact query.
    pub fn with_scripted_answer(
        mut self,
        query: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        self.scripted.insert(query.into(), answer.into());
        self
    }

    fn render(&self, request: &AnswerRequest) -> String {
        if let Some(answer) = self.scripted.get(request.query.as_str()) {
            return answer.clone();
        }
        match &request.file {
            Some(file) => format!(
                "This is a simulated response about \"{}\" to your question: \"{}\"",
                file.name, request.query
            ),
            None => format!(
                "This is a simulated response to your {} domain question: \"{}\"",
                request.domain, request.query
            ),
        }
    }
}

impl Default for CannedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerProvider for CannedProvider {
    async fn answer(&self, request: &AnswerRequest) -> Result<String, ProviderError> {
        tokio::time::sleep(self.response_delay).await;

        let answer = self.render(request);
        tracing::debug!(
            target: "canned_provider",
            "Answered {} query ({} chars)",
            request.domain,
            answer.len()
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parlance_core::domain::Domain;
    use parlance_core::file::{FileRecord, MediaType};

    fn instant() -> CannedProvider {
        CannedProvider::new().with_delay(Duration::ZERO)
    }

    fn file_request(query: &str) -> AnswerRequest {
        AnswerRequest {
            query: query.to_string(),
            domain: Domain::Business,
            file: Some(FileRecord {
                id: "1".to_string(),
                name: "Annual Report 2023.pdf".to_string(),
                media_type: MediaType::Pdf,
                size_bytes: 4_200_000,
                domain: Domain::Business,
                uploaded_at: Utc::now(),
            }),
        }
    }

    #[tokio::test]
    async fn test_file_bound_template_names_the_file() {
        let answer = instant().answer(&file_request("What changed?")).await.unwrap();
        assert_eq!(
            answer,
            "This is a simulated response about \"Annual Report 2023.pdf\" to your question: \"What changed?\""
        );
    }

    #[tokio::test]
    async fn test_open_search_template_names_the_domain() {
        let request = AnswerRequest {
            query: "What is consideration?".to_string(),
            domain: Domain::Legal,
            file: None,
        };
        let answer = instant().answer(&request).await.unwrap();
        assert_eq!(
            answer,
            "This is a simulated response to your legal domain question: \"What is consideration?\""
        );
    }

    #[tokio::test]
    async fn test_scripted_answer_wins_over_template() {
        let provider = instant().with_scripted_answer("What is X?", "X is Y.");
        let answer = provider.answer(&file_request("What is X?")).await.unwrap();
        assert_eq!(answer, "X is Y.");
    }
}
