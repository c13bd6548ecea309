use std::sync::Arc;

use uniquecode_core::CodeIssuer;

#[derive(Clone)]
pub struct AppState {
    issuer: Arc<dyn CodeIssuer>,
}

impl AppState {
    pub fn new(issuer: Arc<dyn CodeIssuer>) -> Self {
        Self { issuer }
    }

    pub fn issuer(&self) -> &dyn CodeIssuer {
        self.issuer.as_ref()
    }
}
