//! TheMealDB HTTP client.
//!
//! Thin `reqwest` wrapper over the v1 JSON API. The wire format has two
//! quirks the decoder must honor:
//!
//! - every endpoint wraps its payload as `{"meals": [...]}`, and `meals` is
//!   JSON `null` (not an empty array) when nothing matched;
//! - detail responses carry `strYoutube` as an empty string when no video
//!   exists.

use crate::client::RecipeApi;
use crate::model::{LookupError, MealDetail, MealId, MealSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Public v1 base URL of TheMealDB API.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// HTTP client for TheMealDB.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client against the given base URL with a request timeout.
    ///
    /// Network-level timeout policy lives here, not in the engine.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Decode {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            })
    }

    async fn filter(&self, param: &str, value: &str) -> Result<Vec<MealSummary>, LookupError> {
        let envelope: SummaryEnvelope = self.get_json("filter.php", &[(param, value)]).await?;
        summaries_from_wire(envelope, "filter.php")
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn list_categories(&self) -> Vec<String> {
        match self
            .get_json::<CategoryEnvelope>("list.php", &[("c", "list")])
            .await
        {
            Ok(envelope) => envelope
                .meals
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.category)
                .collect(),
            Err(e) => {
                warn!(error = %e, "category listing failed, returning empty option set");
                Vec::new()
            }
        }
    }

    async fn list_areas(&self) -> Vec<String> {
        match self
            .get_json::<AreaEnvelope>("list.php", &[("a", "list")])
            .await
        {
            Ok(envelope) => envelope
                .meals
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.area)
                .collect(),
            Err(e) => {
                warn!(error = %e, "area listing failed, returning empty option set");
                Vec::new()
            }
        }
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, LookupError> {
        self.filter("i", ingredient).await
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<MealSummary>, LookupError> {
        self.filter("c", category).await
    }

    async fn filter_by_area(&self, area: &str) -> Result<Vec<MealSummary>, LookupError> {
        self.filter("a", area).await
    }

    async fn meal_detail(&self, id: &MealId) -> Result<Option<MealDetail>, LookupError> {
        let envelope: DetailEnvelope = self
            .get_json("lookup.php", &[("i", id.as_str())])
            .await?;
        let Some(wire) = envelope.meals.unwrap_or_default().into_iter().next() else {
            return Ok(None);
        };
        detail_from_wire(wire).map(Some)
    }
}

// ===== Wire format =====

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    meals: Option<Vec<WireSummary>>,
}

#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    meals: Option<Vec<WireDetail>>,
}

#[derive(Debug, Deserialize)]
struct WireDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryEnvelope {
    meals: Option<Vec<WireCategory>>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    #[serde(rename = "strCategory")]
    category: String,
}

#[derive(Debug, Deserialize)]
struct AreaEnvelope {
    meals: Option<Vec<WireArea>>,
}

#[derive(Debug, Deserialize)]
struct WireArea {
    #[serde(rename = "strArea")]
    area: String,
}

fn summaries_from_wire(
    envelope: SummaryEnvelope,
    endpoint: &str,
) -> Result<Vec<MealSummary>, LookupError> {
    envelope
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(|wire| {
            Ok(MealSummary {
                id: MealId::new(wire.id).map_err(|e| LookupError::Decode {
                    endpoint: endpoint.to_string(),
                    reason: e.to_string(),
                })?,
                name: wire.name,
                thumbnail_url: wire.thumbnail,
            })
        })
        .collect()
}

fn detail_from_wire(wire: WireDetail) -> Result<MealDetail, LookupError> {
    Ok(MealDetail {
        id: MealId::new(wire.id).map_err(|e| LookupError::Decode {
            endpoint: "lookup.php".to_string(),
            reason: e.to_string(),
        })?,
        name: wire.name,
        thumbnail_url: wire.thumbnail,
        instructions: wire.instructions,
        video_url: wire
            .youtube
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty()),
    })
}
