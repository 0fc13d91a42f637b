use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;

use plantopedia_catalog::{
    ArchivePlant, CreatePlant, ListPlant, Plant, PlantCommand, PlantId, RepricePlant,
};
use plantopedia_core::AggregateId;
use plantopedia_pricing::{Rarity, Season};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_plant).get(list_plants))
        .route("/:id", get(get_plant))
        .route("/:id/list", post(list_plant))
        .route("/:id/reprice", post(reprice_plant))
        .route("/:id/archive", post(archive_plant))
}

#[derive(Debug, Deserialize)]
pub struct ListPlantsQuery {
    pub rarity: Option<String>,
    pub season: Option<String>,
}

fn parse_plant_id(id: &str) -> Result<PlantId, axum::response::Response> {
    id.parse::<AggregateId>()
        .map(PlantId::new)
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid plant id"))
}

pub async fn create_plant(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePlantRequest>,
) -> axum::response::Response {
    let base_price_cents = match dto::dollars_to_cents(body.base_price) {
        Some(cents) => cents,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_price",
                "basePrice must be a non-negative amount",
            );
        }
    };

    let agg = AggregateId::new();
    let plant_id = PlantId::new(agg);

    let cmd = PlantCommand::CreatePlant(CreatePlant {
        plant_id,
        name: body.name,
        scientific_name: body.scientific_name,
        description: body.description,
        category: body.category,
        rarity: body.rarity,
        peak_season: body.peak_season,
        available_seasons: body.available_seasons,
        base_price_cents,
        care_level: body.care_level,
        is_native: body.is_native,
        attracts_pollinators: body.attracts_pollinators,
        occurred_at: Utc::now(),
    });

    let committed = match services.dispatch::<Plant>(agg, "catalog.plant", cmd, |aggregate_id| {
        Plant::empty(PlantId::new(aggregate_id))
    }) {
        Ok(c) => c,
        Err(e) => return errors::dispatch_error_to_response(e),
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": agg.to_string(),
            "events_committed": committed.len(),
        })),
    )
        .into_response()
}

pub async fn list_plant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let plant_id = match parse_plant_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let cmd = PlantCommand::ListPlant(ListPlant {
        plant_id,
        occurred_at: Utc::now(),
    });

    dispatch_command(&services, plant_id, cmd)
}

pub async fn reprice_plant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::RepricePlantRequest>,
) -> axum::response::Response {
    let plant_id = match parse_plant_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let base_price_cents = match dto::dollars_to_cents(body.base_price) {
        Some(cents) => cents,
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_price",
                "basePrice must be a non-negative amount",
            );
        }
    };

    let cmd = PlantCommand::RepricePlant(RepricePlant {
        plant_id,
        base_price_cents,
        rarity: body.rarity,
        peak_season: body.peak_season,
        occurred_at: Utc::now(),
    });

    dispatch_command(&services, plant_id, cmd)
}

pub async fn archive_plant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let plant_id = match parse_plant_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let cmd = PlantCommand::ArchivePlant(ArchivePlant {
        plant_id,
        occurred_at: Utc::now(),
    });

    dispatch_command(&services, plant_id, cmd)
}

fn dispatch_command(
    services: &AppServices,
    plant_id: PlantId,
    cmd: PlantCommand,
) -> axum::response::Response {
    let committed = match services.dispatch::<Plant>(plant_id.0, "catalog.plant", cmd, |id| {
        Plant::empty(PlantId::new(id))
    }) {
        Ok(c) => c,
        Err(e) => return errors::dispatch_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "id": plant_id.0.to_string(),
            "events_committed": committed.len(),
        })),
    )
        .into_response()
}

pub async fn get_plant(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let plant_id = match parse_plant_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let current_season = Season::for_date(Utc::now());
    match services.plants_get(&plant_id) {
        Some(rm) => (StatusCode::OK, Json(dto::plant_to_json(&rm, current_season))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "plant not found"),
    }
}

pub async fn list_plants(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<ListPlantsQuery>,
) -> axum::response::Response {
    let rarity = match query.rarity.as_deref() {
        Some(raw) => match raw.parse::<Rarity>() {
            Ok(r) => Some(r),
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_rarity", e.to_string());
            }
        },
        None => None,
    };

    // `season` filters on seasonal availability; it never changes the
    // pricing context, which always comes from the current date.
    let season = match query.season.as_deref() {
        Some(raw) => match raw.parse::<Season>() {
            Ok(s) => Some(s),
            Err(e) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_season", e.to_string());
            }
        },
        None => None,
    };

    let current_season = Season::for_date(Utc::now());

    let data = services
        .plants_list_visible()
        .into_iter()
        .filter(|rm| rarity.is_none_or(|r| rm.rarity == r))
        .filter(|rm| season.is_none_or(|s| rm.available_seasons.contains(&s)))
        .map(|rm| dto::plant_to_json(&rm, current_season))
        .collect::<Vec<_>>();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "data": data,
            "currentSeason": current_season,
            "filters": {
                "rarities": Rarity::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
                "seasons": Season::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            },
        })),
    )
        .into_response()
}
