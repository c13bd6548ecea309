use thiserror::Error;
use tracing::info;
use uniquecode_core::{CodeIssuer, CreateUniqueCodeRequest, UniqueCodeError};

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("malformed request: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Issue(#[from] UniqueCodeError),
    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Handles a single JSON request and returns the JSON response body.
///
/// Blank input is treated as an empty request.
pub async fn invoke(issuer: &dyn CodeIssuer, input: &str) -> Result<String, InvokeError> {
    let request: CreateUniqueCodeRequest = if input.trim().is_empty() {
        CreateUniqueCodeRequest::default()
    } else {
        serde_json::from_str(input).map_err(InvokeError::Decode)?
    };

    info!(?request, "received create request");
    let response = issuer.create(request).await?;

    serde_json::to_string(&response).map_err(InvokeError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;
    use uniquecode_core::{CodeRecord, Repository, StorageError};
    use uniquecode_generator::RandomCodeGenerator;
    use uniquecode_service::UniqueCodeService;
    use uniquecode_storage::InMemoryRepository;

    struct ThrottledRepository;

    #[async_trait]
    impl Repository for ThrottledRepository {
        async fn put(&self, _record: &CodeRecord) -> Result<(), StorageError> {
            Err(StorageError::Operation("throttled".to_string()))
        }
    }

    fn service(
        repo: InMemoryRepository,
    ) -> UniqueCodeService<InMemoryRepository, RandomCodeGenerator> {
        UniqueCodeService::new(repo, RandomCodeGenerator::with_seed(3))
    }

    #[tokio::test]
    async fn invoke_returns_code_body() {
        let repo = InMemoryRepository::new();
        let issuer = service(repo.clone());

        let output = invoke(&issuer, r#"{"length": 10}"#).await.unwrap();

        let body: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(body["code"].as_str().unwrap().len(), 10);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn blank_input_is_an_empty_request() {
        let issuer = service(InMemoryRepository::new());

        let output = invoke(&issuer, "  \n").await.unwrap();

        let body: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(body["code"].as_str().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn malformed_input_is_rejected() {
        let repo = InMemoryRepository::new();
        let issuer = service(repo.clone());

        let err = invoke(&issuer, "{length: ten}").await.unwrap_err();

        assert!(matches!(err, InvokeError::Decode(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_length_is_an_invalid_length() {
        let repo = InMemoryRepository::new();
        let issuer = service(repo.clone());

        let err = invoke(&issuer, r#"{"length":300}"#).await.unwrap_err();

        assert!(matches!(
            err,
            InvokeError::Issue(UniqueCodeError::InvalidLength(message)) if message.ends_with("got 300")
        ));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_produces_no_body() {
        let issuer = UniqueCodeService::new(ThrottledRepository, RandomCodeGenerator::new());

        let err = invoke(&issuer, "{}").await.unwrap_err();

        assert!(matches!(err, InvokeError::Issue(UniqueCodeError::Storage(_))));
    }
}
