//! JSON API handlers: complaint CRUD and the admin login endpoint.
//!
//! Every handler converts its failures into [`crate::errors::Error`], whose
//! `IntoResponse` impl produces the `{success:false, error}` body; nothing
//! propagates uncaught to the transport layer. Request and response bodies use
//! the camelCase field names the browser scripts send.

use crate::{
    core::complaint::{self, NewComplaint},
    entities::{ComplaintModel, ComplaintStatus, ImageMeta},
    errors::{Error, Result},
    http::{AppState, auth},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::header,
    response::{AppendHeaders, IntoResponse},
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Maximum number of complaints returned by the list endpoint and the
/// dashboard.
pub const LIST_LIMIT: u64 = 100;

/// Unwraps an extracted JSON body, mapping parse failures to a 400 response.
fn parse_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    let Json(body) = payload.map_err(|rejection| Error::Validation {
        message: format!("Invalid request body: {rejection}"),
    })?;
    Ok(body)
}

/// Submission payload sent by the public form.
///
/// All fields default to empty so a missing field and an empty one fail the
/// same non-empty validation in [`complaint::create_complaint`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    /// Top-level category label
    #[serde(default)]
    pub main_category: String,
    /// Second-level category label, when the category has one
    #[serde(default)]
    pub sub_category: String,
    /// Reporter contact
    #[serde(default)]
    pub contact: String,
    /// Free-text complaint body
    #[serde(default)]
    pub content: String,
    /// Metadata of the attached images; the bytes never cross the wire
    #[serde(default)]
    pub images: Vec<ImageMeta>,
}

/// Body returned by a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintResponse {
    /// Always true here; failures go through the error mapping
    pub success: bool,
    /// Server-generated id of the new record
    pub complaint_id: String,
    /// Human-readable confirmation
    pub message: String,
}

/// `POST /api/complaints` - validates and persists a new complaint.
pub async fn create_complaint(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateComplaintRequest>, JsonRejection>,
) -> Result<Json<CreateComplaintResponse>> {
    let request = parse_body(payload)?;

    let created = complaint::create_complaint(
        &state.db,
        NewComplaint {
            main_category: request.main_category,
            sub_category: request.sub_category,
            contact: request.contact,
            content: request.content,
            images: request.images,
        },
    )
    .await?;

    info!("complaint {} submitted", created.id);
    Ok(Json(CreateComplaintResponse {
        success: true,
        complaint_id: created.id,
        message: "投诉提交成功".to_string(),
    }))
}

/// Body returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct ListComplaintsResponse {
    /// Always true here; failures go through the error mapping
    pub success: bool,
    /// Up to [`LIST_LIMIT`] complaints, newest first
    pub complaints: Vec<ComplaintModel>,
}

/// `GET /api/complaints` - lists up to [`LIST_LIMIT`] complaints, newest
/// first.
pub async fn list_complaints(
    State(state): State<AppState>,
) -> Result<Json<ListComplaintsResponse>> {
    let complaints = complaint::list_complaints(&state.db, LIST_LIMIT).await?;
    Ok(Json(ListComplaintsResponse {
        success: true,
        complaints,
    }))
}

/// Body of a status-update request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// New status; anything outside pending/processing/resolved is a 400
    pub status: ComplaintStatus,
}

/// Body returned by the mutation endpoints.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// Always true here; failures go through the error mapping
    pub success: bool,
    /// Human-readable confirmation
    pub message: String,
}

/// `PUT /api/complaints/:id` - sets the status of one complaint.
///
/// A missing id yields 404; repeating an update the record already carries
/// still succeeds.
pub async fn update_complaint_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>> {
    let request = parse_body(payload)?;

    let updated = complaint::update_complaint_status(&state.db, &id, request.status).await?;
    info!("complaint {} marked {:?}", updated.id, updated.status);
    Ok(Json(ActionResponse {
        success: true,
        message: "状态更新成功".to_string(),
    }))
}

/// `DELETE /api/complaints/:id` - removes one complaint permanently.
pub async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>> {
    complaint::delete_complaint(&state.db, &id).await?;
    info!("complaint {id} deleted");
    Ok(Json(ActionResponse {
        success: true,
        message: "删除成功".to_string(),
    }))
}

/// Login payload; a missing password behaves like a wrong one.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Candidate admin password
    #[serde(default)]
    pub password: String,
}

/// Body returned by a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Always true here; a wrong password yields 401 instead
    pub success: bool,
}

/// `POST /api/admin/login` - checks the admin password and, on a match, sets
/// the signed session cookie.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let request = parse_body(payload)?;

    if request.password != state.config.admin_password {
        return Err(Error::InvalidPassword);
    }

    let token = auth::mint_token(&state.config.session_secret, chrono::Utc::now().timestamp())?;
    info!("admin login succeeded");
    Ok((
        AppendHeaders([(header::SET_COOKIE, auth::session_cookie(&token))]),
        Json(LoginResponse { success: true }),
    ))
}
