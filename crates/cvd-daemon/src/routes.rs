//! Axum router and all HTTP handlers for cvd-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Every data handler reads its own copy of a cache entry
//! and computes the answer from it; nothing is written on the read path.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use cvd_config::CacheKey;
use cvd_historical::{
    country_request, historical_all, historical_data, CountryResponse, NOT_FOUND_MESSAGE,
};
use cvd_schemas::{JhuLocation, LocationHistory, LocationSnapshot, Timeline, WorldometersRow};
use cvd_scraper::jhu;
use cvd_sources::split_query;
use cvd_store::{get_json, StoreError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use crate::{
    api_types::{
        CountiesResponse, CountyGroups, HealthResponse, MessageResponse, OneOrMany,
        CONTINENT_NOT_FOUND, COUNTRY_NOT_FOUND, COUNTY_NOT_FOUND, DATA_NOT_AVAILABLE,
    },
    params::{HistoricalParams, TableParams},
    state::AppState,
    worldometers,
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (CORS, tracing) are **not** applied here; `main.rs`
/// attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        // worldometers
        .route("/all", get(all))
        .route("/countries", get(countries))
        .route("/countries/:query", get(country))
        .route("/continents", get(continents))
        .route("/continents/:query", get(continent))
        // historical
        .route("/historical", get(historical))
        .route("/historical/all", get(historical_global))
        .route("/historical/:query", get(historical_country))
        .route("/historical/:query/:province", get(historical_province))
        // JHU CSSE
        .route("/jhucsse", get(jhucsse))
        .route("/jhucsse/counties", get(jhucsse_counties))
        .route("/jhucsse/counties/:county", get(jhucsse_county))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) enum ApiError {
    /// 404 with a fixed message.
    NotFound(&'static str),
    /// 503: the scraper has not stored this entry yet.
    Unavailable,
    /// 500: the store failed or held an undecodable value.
    Internal(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            ApiError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, DATA_NOT_AVAILABLE.to_string()),
            ApiError::Internal(e) => {
                error!(error = %e, "cache read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };
        (status, Json(MessageResponse { message })).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Decode the entry under `key`; 503 while it has never been written.
async fn load<T: DeserializeOwned>(st: &AppState, key: CacheKey) -> Result<T, ApiError> {
    get_json(st.store.as_ref(), key)
        .await?
        .ok_or(ApiError::Unavailable)
}

// ---------------------------------------------------------------------------
// GET /v1/health
// ---------------------------------------------------------------------------

pub(crate) async fn health(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            service: st.build.service,
            version: st.build.version,
        }),
    )
}

// ---------------------------------------------------------------------------
// Worldometers
// ---------------------------------------------------------------------------

fn clean(row: WorldometersRow, allow_null: bool) -> WorldometersRow {
    if allow_null {
        row
    } else {
        worldometers::transform_null(row)
    }
}

pub(crate) async fn all(
    State(st): State<Arc<AppState>>,
    Query(p): Query<TableParams>,
) -> ApiResult<Map<String, Value>> {
    let rows: Vec<WorldometersRow> = load(&st, p.day().countries_key()).await?;
    worldometers::world_summary(&rows, p.allow_null())
        .map(Json)
        .ok_or(ApiError::Unavailable)
}

pub(crate) async fn countries(
    State(st): State<Arc<AppState>>,
    Query(p): Query<TableParams>,
) -> ApiResult<Vec<WorldometersRow>> {
    let rows: Vec<WorldometersRow> = load(&st, p.day().countries_key()).await?;
    let out = worldometers::country_rows(rows, p.sort_field())
        .into_iter()
        .map(|r| clean(r, p.allow_null()))
        .collect();
    Ok(Json(out))
}

pub(crate) async fn country(
    State(st): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(p): Query<TableParams>,
) -> ApiResult<OneOrMany<WorldometersRow>> {
    let rows: Vec<WorldometersRow> = load(&st, p.day().countries_key()).await?;
    let rows = worldometers::country_rows(rows, None);

    let found = split_query(&query)
        .iter()
        .filter_map(|q| worldometers::find_country(&rows, q, p.strict(), st.resolver.as_ref()))
        .map(|r| clean(r.clone(), p.allow_null()))
        .collect();

    OneOrMany::from_vec(found)
        .map(Json)
        .ok_or(ApiError::NotFound(COUNTRY_NOT_FOUND))
}

pub(crate) async fn continents(
    State(st): State<Arc<AppState>>,
    Query(p): Query<TableParams>,
) -> ApiResult<Vec<WorldometersRow>> {
    let day = p.day();
    let countries: Vec<WorldometersRow> = load(&st, day.countries_key()).await?;
    let continents: Vec<WorldometersRow> = load(&st, day.continents_key()).await?;

    let mut out: Vec<WorldometersRow> = continents
        .into_iter()
        .map(|c| clean(worldometers::with_countries(c, &countries), p.allow_null()))
        .collect();
    if let Some(field) = p.sort_field() {
        worldometers::sort_descending(&mut out, field);
    }
    Ok(Json(out))
}

pub(crate) async fn continent(
    State(st): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(p): Query<TableParams>,
) -> ApiResult<WorldometersRow> {
    let day = p.day();
    let continents: Vec<WorldometersRow> = load(&st, day.continents_key()).await?;
    let found = worldometers::find_continent(&continents, &query, p.strict())
        .cloned()
        .ok_or(ApiError::NotFound(CONTINENT_NOT_FOUND))?;

    let countries: Vec<WorldometersRow> = load(&st, day.countries_key()).await?;
    Ok(Json(clean(
        worldometers::with_countries(found, &countries),
        p.allow_null(),
    )))
}

// ---------------------------------------------------------------------------
// Historical
// ---------------------------------------------------------------------------

pub(crate) async fn historical(
    State(st): State<Arc<AppState>>,
    Query(p): Query<HistoricalParams>,
) -> ApiResult<Vec<LocationHistory>> {
    let data: Vec<LocationSnapshot> = load(&st, CacheKey::Historical).await?;
    Ok(Json(historical_data(data, p.lastdays())))
}

pub(crate) async fn historical_global(
    State(st): State<Arc<AppState>>,
    Query(p): Query<HistoricalParams>,
) -> ApiResult<Timeline> {
    let data: Vec<LocationSnapshot> = load(&st, CacheKey::Historical).await?;
    Ok(Json(historical_all(&data, p.lastdays())))
}

async fn country_history(
    st: &AppState,
    query: &str,
    province: Option<&str>,
    p: &HistoricalParams,
) -> ApiResult<CountryResponse> {
    let data: Vec<LocationSnapshot> = load(st, CacheKey::Historical).await?;
    country_request(&data, query, province, p.lastdays(), st.resolver.as_ref())
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND_MESSAGE))
}

pub(crate) async fn historical_country(
    State(st): State<Arc<AppState>>,
    Path(query): Path<String>,
    Query(p): Query<HistoricalParams>,
) -> ApiResult<CountryResponse> {
    country_history(&st, &query, None, &p).await
}

pub(crate) async fn historical_province(
    State(st): State<Arc<AppState>>,
    Path((query, province)): Path<(String, String)>,
    Query(p): Query<HistoricalParams>,
) -> ApiResult<CountryResponse> {
    country_history(&st, &query, Some(province.as_str()), &p).await
}

// ---------------------------------------------------------------------------
// JHU CSSE
// ---------------------------------------------------------------------------

pub(crate) async fn jhucsse(State(st): State<Arc<AppState>>) -> ApiResult<Vec<JhuLocation>> {
    let data: Vec<JhuLocation> = load(&st, CacheKey::JhuLocations).await?;
    Ok(Json(jhu::generalized(data)))
}

fn owned(rows: Vec<&JhuLocation>) -> Vec<JhuLocation> {
    rows.into_iter().cloned().collect()
}

fn county_list(rows: Vec<JhuLocation>) -> ApiResult<CountiesResponse> {
    if rows.is_empty() {
        return Err(ApiError::NotFound(COUNTY_NOT_FOUND));
    }
    Ok(Json(CountiesResponse::List(rows)))
}

pub(crate) async fn jhucsse_counties(
    State(st): State<Arc<AppState>>,
) -> ApiResult<CountiesResponse> {
    let data: Vec<JhuLocation> = load(&st, CacheKey::JhuLocations).await?;
    county_list(owned(jhu::counties(&data, None)))
}

pub(crate) async fn jhucsse_county(
    State(st): State<Arc<AppState>>,
    Path(county): Path<String>,
) -> ApiResult<CountiesResponse> {
    let data: Vec<JhuLocation> = load(&st, CacheKey::JhuLocations).await?;
    let requested = split_query(&county);

    if requested.len() <= 1 {
        return county_list(owned(jhu::counties(&data, Some(county.as_str()))));
    }

    let groups: Vec<(String, Vec<JhuLocation>)> = requested
        .into_iter()
        .map(|name| {
            let rows = owned(jhu::counties(&data, Some(name.as_str())));
            (name, rows)
        })
        .filter(|(_, rows)| !rows.is_empty())
        .collect();

    if groups.is_empty() {
        return Err(ApiError::NotFound(COUNTY_NOT_FOUND));
    }
    Ok(Json(CountiesResponse::Grouped(CountyGroups(groups))))
}
