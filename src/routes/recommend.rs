use crate::config::RecommendSettings;
use crate::core::{RecommendError, Recommender};
use crate::models::{ErrorResponse, HealthResponse, PlacesResponse, RecommendRequest};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Recommender,
    pub recommend: RecommendSettings,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/places", web::get().to(list_places))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
///
/// Reports `degraded` when the catalog failed to load and the service is
/// running on an empty dataset.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.engine.catalog();
    let status = if catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        places: catalog.len(),
    })
}

/// Place name listing endpoint
///
/// GET /api/v1/places
///
/// Sorted, deduplicated names for the caller's selection UI.
async fn list_places(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PlacesResponse {
        places: state.engine.catalog().all_names(),
    })
}

/// Recommendation endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "place": "string",
///   "top_n": 5,
///   "radius": 100.0
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    let top_n = req
        .top_n
        .unwrap_or(state.recommend.default_top_n)
        .min(state.recommend.max_top_n);
    let radius_km = req.radius.unwrap_or(state.recommend.default_radius_km);

    tracing::info!(
        "Recommending for place: {:?}, top_n: {}, radius: {} km",
        req.place,
        top_n,
        radius_km
    );

    match state.engine.recommend(&req.place, top_n, radius_km) {
        Ok(result) => {
            tracing::debug!(
                "Returning {} recommendations for {:?}",
                result.recommendations.len(),
                req.place
            );
            HttpResponse::Ok().json(result)
        }
        Err(err @ RecommendError::PlaceNotFound) => {
            tracing::info!("Place not found: {:?}", req.place);
            HttpResponse::NotFound().json(ErrorResponse::new(err.to_string()))
        }
        Err(err @ RecommendError::InvalidInput(_)) => {
            tracing::info!("Invalid recommend input: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()))
        }
        Err(err @ RecommendError::Corrupt(_)) => {
            tracing::error!("Catalog state error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlaceRecord, SimilarityMatrix};
    use crate::services::CatalogStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn place(nama: &str, lat: f64, lon: f64) -> PlaceRecord {
        PlaceRecord {
            nama: nama.to_string(),
            kategori: "Alam".to_string(),
            rating: Some(4.0),
            jumlah_rating: Some(25),
            kecamatan: Some("Ciawi".to_string()),
            kabupaten_kota: Some("Kabupaten Bogor".to_string()),
            latitude: lat,
            longitude: lon,
            link_gambar: None,
            link: "https://maps.google.com/?q=x".to_string(),
        }
    }

    fn test_state() -> AppState {
        let places = vec![
            place("Kebun Raya Bogor", -6.5971, 106.7990),
            place("Curug Bidadari", -6.6123, 106.9003),
        ];
        let matrix = SimilarityMatrix::new(vec![vec![1.0, 0.73], vec![0.73, 1.0]]).unwrap();
        let catalog = Arc::new(CatalogStore::new(places, matrix).unwrap());
        AppState {
            engine: Recommender::new(catalog),
            recommend: RecommendSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_recommend_success() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(serde_json::json!({"place": "Kebun Raya Bogor"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["source"]["nama"], "Kebun Raya Bogor");
        assert_eq!(body["recommendations"][0]["nama"], "Curug Bidadari");
        assert_eq!(body["recommendations"][0]["sim"], "73.0%");
    }

    #[actix_web::test]
    async fn test_recommend_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(serde_json::json!({"place": "Tidak Ada"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Tempat tidak ditemukan");
    }

    #[actix_web::test]
    async fn test_places_listing() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/places").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["places"],
            serde_json::json!(["Curug Bidadari", "Kebun Raya Bogor"])
        );
    }

    #[actix_web::test]
    async fn test_health_degraded_on_empty_catalog() {
        let state = AppState {
            engine: Recommender::new(Arc::new(CatalogStore::empty())),
            recommend: RecommendSettings::default(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["places"], 0);
    }
}
