use crate::error::UniqueCodeError;
use crate::record::UniqueCodeResponse;
use crate::request::CreateUniqueCodeRequest;
use async_trait::async_trait;

#[async_trait]
pub trait CodeIssuer: Send + Sync + 'static {
    /// Generates a code for the request, records it and returns it.
    ///
    /// Either the record is written and the code returned, or an error is
    /// returned and no code is considered issued.
    async fn create(
        &self,
        request: CreateUniqueCodeRequest,
    ) -> Result<UniqueCodeResponse, UniqueCodeError>;
}
