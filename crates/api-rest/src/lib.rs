//! # API REST
//!
//! REST API implementation for UveCheck.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for wire types and `uvecheck-core` for the assessment itself.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    AssessmentReq, AssessmentRes, GuidelineDetailsRes, GuidelineSummary, HealthRes,
    HealthService, InputSummaryRes, ListGuidelinesRes, QuestionRes,
};
use uvecheck_core::{AssessmentService, CoreConfig, Guideline, RiskAssessment};

/// Application state for the REST API server.
///
/// Holds the assessment service, which carries the startup configuration.
#[derive(Clone)]
pub struct AppState {
    assessment_service: AssessmentService,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            assessment_service: AssessmentService::new(cfg),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, create_assessment, list_guidelines, get_guideline),
    components(schemas(
        HealthRes,
        AssessmentReq,
        AssessmentRes,
        InputSummaryRes,
        GuidelineSummary,
        ListGuidelinesRes,
        GuidelineDetailsRes,
        QuestionRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST application: routes, Swagger UI and CORS.
pub fn router(cfg: Arc<CoreConfig>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assessments", post(create_assessment))
        .route("/guidelines", get(list_guidelines))
        .route("/guidelines/:id", get(get_guideline))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(cfg))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/assessments",
    request_body = AssessmentReq,
    responses(
        (status = 200, description = "Risk assessment", body = AssessmentRes),
        (status = 400, description = "Malformed date")
    )
)]
/// Assess one patient under the requested guideline
///
/// An unknown guideline is not a request error: the response carries the `Error` risk level and
/// "Guideline not found.".
///
/// # Errors
/// Returns `400 Bad Request` if the birth date or diagnosis date is not `YYYY-MM-DD`.
#[axum::debug_handler]
async fn create_assessment(
    State(state): State<AppState>,
    Json(req): Json<AssessmentReq>,
) -> Result<Json<AssessmentRes>, (StatusCode, &'static str)> {
    let patient = match req.patient_record() {
        Ok(patient) => patient,
        Err(e) => {
            tracing::error!("Invalid assessment request: {}", e);
            return Err((StatusCode::BAD_REQUEST, "Invalid date, expected YYYY-MM-DD"));
        }
    };

    let assessment = match req.guideline.parse::<Guideline>() {
        Ok(guideline) => state.assessment_service.assess(guideline, &patient),
        Err(e) => {
            tracing::warn!("{}", e);
            RiskAssessment::guideline_not_found()
        }
    };

    Ok(Json(AssessmentRes::from(assessment)))
}

#[utoipa::path(
    get,
    path = "/guidelines",
    responses(
        (status = 200, description = "Supported guidelines", body = ListGuidelinesRes)
    )
)]
#[axum::debug_handler]
async fn list_guidelines(State(_state): State<AppState>) -> Json<ListGuidelinesRes> {
    Json(ListGuidelinesRes::all())
}

#[utoipa::path(
    get,
    path = "/guidelines/{id}",
    params(("id" = String, Path, description = "Guideline identifier")),
    responses(
        (status = 200, description = "Guideline with questions", body = GuidelineDetailsRes),
        (status = 404, description = "Unknown guideline")
    )
)]
#[axum::debug_handler]
async fn get_guideline(
    State(_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GuidelineDetailsRes>, (StatusCode, &'static str)> {
    match id.parse::<Guideline>() {
        Ok(guideline) => Ok(Json(GuidelineDetailsRes::from(guideline))),
        Err(_) => Err((StatusCode::NOT_FOUND, "Guideline not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use chrono::NaiveDate;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let today = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
        router(Arc::new(CoreConfig::new(Some(today))))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app().oneshot(request).await.expect("router responds");
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("body is readable")
            .to_bytes()
            .to_vec();
        (status, body)
    }

    async fn post_assessment(body: &str) -> (StatusCode, Vec<u8>) {
        send(
            Request::post("/assessments")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("valid request"),
        )
        .await
    }

    fn json(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).expect("response is JSON")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) =
            send(Request::get("/health").body(Body::empty()).expect("request")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["ok"], true);
    }

    #[tokio::test]
    async fn assessment_uses_configured_day() {
        let (status, body) = post_assessment(
            r#"{
                "guideline": "US_PAKISTAN",
                "birthDate": "2015-01-01",
                "diagnosisDate": "2020-01-01",
                "subDiagnosis": "RF Negative Polyarthritis",
                "ana": "Yes"
            }"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = json(&body);
        assert_eq!(body["riskLevel"], "High Risk");
        assert_eq!(body["followUp"], "Every 3 Months");
        assert_eq!(body["inputs"]["ageAtOnset"], "5 years");
    }

    #[tokio::test]
    async fn unknown_guideline_is_an_error_result() {
        let (status, body) = post_assessment(
            r#"{"guideline": "ATLANTIS", "birthDate": "2015-01-01", "subDiagnosis": "x"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = json(&body);
        assert_eq!(body["riskLevel"], "Error");
        assert_eq!(body["recommendation"], "Guideline not found.");
    }

    #[tokio::test]
    async fn malformed_date_is_bad_request() {
        let (status, _) = post_assessment(
            r#"{
                "guideline": "NORDIC",
                "birthDate": "01/01/2015",
                "subDiagnosis": "Oligoarthritis"
            }"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_and_describes_guidelines() {
        let (status, body) =
            send(Request::get("/guidelines").body(Body::empty()).expect("request")).await;
        assert_eq!(status, StatusCode::OK);
        let body = json(&body);
        assert_eq!(body["guidelines"].as_array().map(Vec::len), Some(8));
        assert_eq!(body["guidelines"][0]["id"], "NORDIC");

        let (status, body) = send(
            Request::get("/guidelines/czech-slovak")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body = json(&body);
        assert_eq!(body["name"], "Czech / Slovak Guidelines");
        assert_eq!(body["defaultSubDiagnosis"], "Persistent Oligoarthritis");

        let (status, _) =
            send(Request::get("/guidelines/ATLANTIS").body(Body::empty()).expect("request")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
