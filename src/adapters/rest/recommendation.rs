use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::types::ApiConfig;
use crate::domain::listing::Hotel;
use crate::error::Result;
use crate::ports::recommendations::RecommendationSource;

/// Client for the product feed the catalog treats as a recommendation
/// source. Each product document is reshaped into a `Hotel`.
pub struct RestRecommendationClient {
    http: reqwest::Client,
    base_url: String,
    limit: u32,
}

/// Wire shape of a feed product.
#[derive(Debug, Deserialize)]
struct FeedProduct {
    id: u64,
    title: String,
    price: f64,
    category: String,
    image: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rating: FeedRating,
}

#[derive(Debug, Deserialize, Default)]
struct FeedRating {
    #[serde(default)]
    rate: f64,
}

fn map_product(product: FeedProduct) -> Hotel {
    Hotel {
        id: format!("api-{}", product.id),
        name: product.title,
        location: product.category.to_uppercase(),
        rating: product.rating.rate,
        // Feed prices are single digits to low hundreds; scale into a
        // plausible nightly rate.
        price_per_night: (product.price * 10.0).round(),
        image_url: product.image,
        description: product.description,
        is_recommended: true,
    }
}

impl RestRecommendationClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            limit: config.recommended_limit,
        })
    }

    fn products_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?.join("products")?;
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }
}

#[async_trait]
impl RecommendationSource for RestRecommendationClient {
    async fn fetch_recommended(&self) -> Result<Vec<Hotel>> {
        let url = self.products_url()?;
        tracing::debug!("Fetching recommended listings from {url}");

        let products: Vec<FeedProduct> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hotels: Vec<Hotel> = products.into_iter().map(map_product).collect();
        tracing::debug!("Recommendation feed returned {} listings", hotels.len());
        Ok(hotels)
    }
}
