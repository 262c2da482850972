use std::sync::Arc;

use skillnow_store::SkillNowService;

/// Shared handler state. Holds no table data; every request reads storage.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SkillNowService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: SkillNowService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
