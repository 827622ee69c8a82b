use actix_web::{web, HttpResponse};
use restaurant_api::{db as db_api, error::ApiError, params};
use sqlx::SqlitePool;

pub(super) struct ApiState {
    db_pool: SqlitePool,
}

impl ApiState {
    pub(super) async fn connect(addr: &str) -> anyhow::Result<Self> {
        let db_pool = db_api::open(addr).await?;
        Ok(Self { db_pool })
    }
}

type ApiResult = Result<HttpResponse, ApiError>;

pub(super) fn routes(cfg: &mut web::ServiceConfig) {
    // Extractor failures answer in the same JSON shape as the handlers.
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(health)
    .service(restaurants)
    .service(restaurant_details)
    .service(restaurants_by_cuisine)
    .service(restaurants_by_filter)
    .service(restaurants_sorted_by_rating)
    .service(dishes)
    .service(dish_details)
    .service(dishes_by_filter)
    .service(dishes_sorted_by_price);
}

#[actix_web::get("/health")]
pub(super) async fn health(data: web::Data<ApiState>) -> HttpResponse {
    match db_api::ping(&data.db_pool).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })),
        Err(err) => {
            tracing::error!("health check failed: {err:#}");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "error": format!("{err:#}"),
            }))
        }
    }
}

pub(super) async fn not_found() -> ApiResult {
    Err(ApiError::NotFound("Route Not Found".to_string()))
}

#[actix_web::get("/restaurants")]
pub(super) async fn restaurants(data: web::Data<ApiState>) -> ApiResult {
    let result = db_api::fetch_all_restaurants(&data.db_pool).await?;
    if result.restaurants.is_empty() {
        return Err(ApiError::NotFound("No Restaurants Found.".to_string()));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/restaurants/details/{id}")]
pub(super) async fn restaurant_details(
    data: web::Data<ApiState>,
    path: web::Path<String>,
) -> ApiResult {
    let id = params::parse_id(&path)?;
    let result = db_api::get_restaurant_by_id(&data.db_pool, id).await?;
    if result.restaurant.is_none() {
        return Err(ApiError::NotFound(format!("No Restaurants Found by Id:{id}")));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/restaurants/cuisine/{cuisine}")]
pub(super) async fn restaurants_by_cuisine(
    data: web::Data<ApiState>,
    path: web::Path<String>,
) -> ApiResult {
    let cuisine = path.into_inner();
    let result = db_api::get_restaurants_by_cuisine(&data.db_pool, &cuisine).await?;
    if result.restaurants.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No Restaurants Found by Cuisine:{cuisine}"
        )));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RestaurantFilterQuery {
    is_veg: Option<String>,
    has_outdoor_seating: Option<String>,
    is_luxury: Option<String>,
}

#[actix_web::get("/restaurants/filter")]
pub(super) async fn restaurants_by_filter(
    data: web::Data<ApiState>,
    query: web::Query<RestaurantFilterQuery>,
) -> ApiResult {
    let filter = db_api::RestaurantFilterBuilder::default()
        .is_veg(params::require_flag("isVeg", query.is_veg.as_deref())?)
        .has_outdoor_seating(params::require_flag(
            "hasOutdoorSeating",
            query.has_outdoor_seating.as_deref(),
        )?)
        .is_luxury(params::require_flag("isLuxury", query.is_luxury.as_deref())?)
        .build()
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let result = db_api::get_restaurants_by_filter(&data.db_pool, filter).await?;
    if result.restaurants.is_empty() {
        return Err(ApiError::NotFound(
            "No Restaurants Found by this Filters".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/restaurants/sort-by-rating")]
pub(super) async fn restaurants_sorted_by_rating(data: web::Data<ApiState>) -> ApiResult {
    let result = db_api::get_restaurants_sorted_by_rating(&data.db_pool).await?;
    if result.restaurants.is_empty() {
        return Err(ApiError::NotFound(
            "No Restaurants Found by this Ratings".to_string(),
        ));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/dishes")]
pub(super) async fn dishes(data: web::Data<ApiState>) -> ApiResult {
    let result = db_api::fetch_all_dishes(&data.db_pool).await?;
    if result.dishes.is_empty() {
        return Err(ApiError::NotFound("No Dishes Found.".to_string()));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/dishes/details/{id}")]
pub(super) async fn dish_details(
    data: web::Data<ApiState>,
    path: web::Path<String>,
) -> ApiResult {
    let id = params::parse_id(&path)?;
    let result = db_api::get_dish_by_id(&data.db_pool, id).await?;
    if result.dish.is_none() {
        return Err(ApiError::NotFound(format!("No Dishes Found by Id:{id}")));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DishFilterQuery {
    is_veg: Option<String>,
}

#[actix_web::get("/dishes/filter")]
pub(super) async fn dishes_by_filter(
    data: web::Data<ApiState>,
    query: web::Query<DishFilterQuery>,
) -> ApiResult {
    let is_veg = params::require_flag("isVeg", query.is_veg.as_deref())?;
    let result = db_api::get_dishes_by_filter(&data.db_pool, is_veg).await?;
    if result.dishes.is_empty() {
        return Err(ApiError::NotFound("No Dishes Found by this Filter".to_string()));
    }
    Ok(HttpResponse::Ok().json(result))
}

#[actix_web::get("/dishes/sort-by-price")]
pub(super) async fn dishes_sorted_by_price(data: web::Data<ApiState>) -> ApiResult {
    let result = db_api::get_dishes_sorted_by_price(&data.db_pool).await?;
    if result.dishes.is_empty() {
        return Err(ApiError::NotFound("No Dishes Found".to_string()));
    }
    Ok(HttpResponse::Ok().json(result))
}
