use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::application::errors::{ApiError, AppError};
use crate::application::state::AppState;
use crate::domain::guides::{Guide, GuideQuery};

#[derive(Debug, Deserialize)]
pub(crate) struct GuideParams {
    city: Option<String>,
    flavor: Option<String>,
}

impl GuideParams {
    /// Validate the raw query parameters, producing field-level messages
    /// before any external capability is invoked.
    fn into_query(self) -> Result<GuideQuery, AppError> {
        let city = self
            .city
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let flavor = self
            .flavor
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match (city, flavor) {
            (Some(city), Some(flavor)) => Ok(GuideQuery { city, flavor }),
            (None, Some(_)) => Err(AppError::validation(
                "the 'city' query parameter is required",
            )),
            (Some(_), None) => Err(AppError::validation(
                "the 'flavor' query parameter is required",
            )),
            (None, None) => Err(AppError::validation(
                "both 'city' and 'flavor' query parameters are required",
            )),
        }
    }
}

#[tracing::instrument(skip(state, params))]
pub(crate) async fn get_guide(
    State(state): State<AppState>,
    Query(params): Query<GuideParams>,
) -> Result<Json<Guide>, ApiError> {
    let query = params.into_query().map_err(ApiError::from)?;
    let guide = state
        .guide_service
        .guide_for(&query)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(guide))
}
