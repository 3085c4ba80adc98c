use crate::domain::model::{CrewManifest, LocationReport, PassReport, PassRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three ISS queries. Each call is one independent request.
#[async_trait]
pub trait IssApi: Send + Sync {
    async fn current_location(&self) -> Result<LocationReport>;
    async fn passes(&self, request: &PassRequest) -> Result<PassReport>;
    async fn people_in_space(&self) -> Result<CrewManifest>;
}
