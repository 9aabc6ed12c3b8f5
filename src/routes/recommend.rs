use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::{
    RecommendRequest, RecommendResponse, MAX_SKILLS, NO_SKILLS_MESSAGE, TOO_MANY_SKILLS_MESSAGE,
};
use crate::routes::AppState;

pub const NO_DATA_MESSAGE: &str = "No internship data available. Please try again later.";
pub const NO_MATCHES_MESSAGE: &str =
    "No matching internships found. Try selecting more skills or a different sector or location.";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommend", web::post().to(recommend));
}

/// Recommend internships endpoint
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "skills": ["Python", "Data Analysis"],
///   "interest": "Technology",
///   "location": "Remote"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> Result<HttpResponse, AppError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: {}", errors);
        let message = if req.skills.len() > MAX_SKILLS {
            TOO_MANY_SKILLS_MESSAGE
        } else {
            NO_SKILLS_MESSAGE
        };
        return Err(AppError::Validation(message.to_string()));
    }

    let profile = req.into_inner().to_profile();
    if profile.skills.is_empty() {
        return Err(AppError::Validation(NO_SKILLS_MESSAGE.to_string()));
    }

    if state.catalog.is_empty() {
        tracing::warn!("Recommendation requested but the catalog is empty");
        return Ok(HttpResponse::Ok().json(RecommendResponse {
            matches: vec![],
            total_listings: 0,
            message: Some(NO_DATA_MESSAGE.to_string()),
        }));
    }

    tracing::info!(
        "Ranking for skills={:?}, interest={:?}, location={:?}",
        profile.skills,
        profile.interest,
        profile.location
    );

    // Ranking runs on the blocking pool so a panic is reported as an error
    // instead of taking the worker down with it.
    let ranker = state.ranker.clone();
    let catalog = state.catalog.clone();
    let result = web::block(move || ranker.rank(&profile, catalog.listings())).await?;

    tracing::info!(
        "Returning {} matches ({} qualified of {} listings)",
        result.matches.len(),
        result.qualified,
        result.total_listings
    );

    let message = result.matches.is_empty().then(|| NO_MATCHES_MESSAGE.to_string());

    Ok(HttpResponse::Ok().json(RecommendResponse {
        matches: result.matches,
        total_listings: result.total_listings,
        message,
    }))
}
