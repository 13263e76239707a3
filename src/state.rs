use std::sync::Arc;

use crate::identity::DeploymentIdentity;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<DeploymentIdentity>,
}

impl AppState {
    pub fn new(identity: DeploymentIdentity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}
