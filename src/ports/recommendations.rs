use async_trait::async_trait;

use crate::domain::listing::Hotel;
use crate::error::Result;

/// External feed of recommended listings. Returns a bounded list to be
/// unioned ahead of the static catalog.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommended(&self) -> Result<Vec<Hotel>>;
}
