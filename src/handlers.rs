use crate::generation::generate_story;
use crate::state::AppState;
use crate::storage::save_story;
use crate::types::{StoryRequest, StoryResponse};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};

/// Every response, success or failure, is JSON and callable cross-origin.
fn respond(status: StatusCode, body: serde_json::Value) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .json(body)
}

pub async fn create_story(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    log::info!("==== Story Request Started ====");

    // The body arrives as raw bytes so that a malformed payload can be
    // reported as a 400 instead of actix's default rejection.
    let request: StoryRequest = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Failed to parse request body: {e}");
            return respond(
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": "Invalid JSON in request body",
                    "details": e.to_string()
                }),
            );
        }
    };

    let topic = match request.story_topic.filter(|t| !t.is_empty()) {
        Some(topic) => topic,
        _none => {
            log::error!("Missing story_topic in request");
            return respond(
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": "Missing story_topic in request" }),
            );
        }
    };

    let story = match generate_story(&state.inference_client, &state.config, &topic).await {
        Ok(story) => story,
        Err(e) => {
            log::error!("Error generating story: {e}");
            return respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": "Internal server error",
                    "details": e.to_string()
                }),
            );
        }
    };

    if story.is_empty() {
        return respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "error": "Story generation failed" }),
        );
    }

    let bucket = &state.config.bucket;
    match save_story(&state.storage_client, &state.config, bucket, &story).await {
        Ok(stored) => {
            log::info!("Returning story, saved at {}", stored.location);
            respond(
                StatusCode::OK,
                serde_json::to_value(StoryResponse {
                    message: "Story generated and saved successfully".into(),
                    story,
                    s3_location: stored.location,
                })
                .unwrap_or_default(),
            )
        }
        Err(e) => {
            log::error!("Failed to save to S3: {e}");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": format!("Failed to save story to S3: {e}"),
                    "story": story
                }),
            )
        }
    }
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "bucket": state.config.bucket,
        "modelId": state.config.model_id
    }))
}
