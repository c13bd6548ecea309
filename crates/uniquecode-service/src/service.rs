use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uniquecode_core::{
    Clock, CodeIssuer, CodeRecord, CoreError, CreateUniqueCodeRequest, Repository, SystemClock,
    UniqueCodeError, UniqueCodeResponse,
};
use uniquecode_generator::Generator;

/// A concrete implementation of the `CodeIssuer` trait.
///
/// This service wraps a `Repository`, a `Generator` and a `Clock` to handle:
/// - Length normalization
/// - Code generation
/// - Writing the stamped record
///
/// Note: no collision check or retry is performed. A failed write is
/// reported as-is and the generated code is discarded.
#[derive(Debug, Clone)]
pub struct UniqueCodeService<R, G, C = SystemClock> {
    repository: Arc<R>,
    generator: Arc<G>,
    clock: C,
}

impl<R: Repository, G: Generator> UniqueCodeService<R, G> {
    /// Creates a new `UniqueCodeService` stamping records with the system clock.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_clock(repository, generator, SystemClock)
    }
}

impl<R: Repository, G: Generator, C: Clock> UniqueCodeService<R, G, C> {
    /// Creates a new `UniqueCodeService` with a custom clock.
    pub fn with_clock(repository: R, generator: G, clock: C) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            clock,
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator, C: Clock> CodeIssuer for UniqueCodeService<R, G, C> {
    async fn create(
        &self,
        request: CreateUniqueCodeRequest,
    ) -> Result<UniqueCodeResponse, UniqueCodeError> {
        let request = request.normalize();
        let length =
            usize::try_from(request.length).map_err(|_| CoreError::InvalidLength(request.length))?;
        let code = self.generator.generate(length)?;
        debug!(code = %code, length, "generated code");

        let record = CodeRecord::from_request(request, code, self.clock.now());

        if let Err(e) = self.repository.put(&record).await {
            warn!(code = %record.code, error = %e, "failed to store code record");
            return Err(e.into());
        }

        info!(code = %record.code, created_on = %record.created_on, "issued code");
        Ok(UniqueCodeResponse { code: record.code })
    }
}
