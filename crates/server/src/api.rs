use dioxus::prelude::*;
use shared_types::{
    AdmissionStats, ApiResponse, AuthData, Department, Document, DocumentRule, MatrixProgram,
    OversightStats, Position, ProcessingStats, ReviewStats, TraineeDocumentStats,
};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::mock;

// ── Session ────────────────────────────────────────────

/// Current session, if any.
///
/// The admissions backend is not wired up yet; this resolves to the fixture
/// session so every page renders with a signed-in user.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthData>, ServerFnError> {
    Ok(Some(mock::auth_data()))
}

/// Validate credentials and open a session.
#[server]
pub async fn login(email: String, password: String) -> Result<AuthData, ServerFnError> {
    let req = shared_types::LoginRequest { email, password };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!("login accepted against fixture backend");
    Ok(mock::auth_data())
}

/// Close the current session.
///
/// No server-side session store exists; the client clears its own state.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    tracing::info!("session closed");
    Ok(())
}

// ── Reference collections ──────────────────────────────

#[server]
pub async fn get_departments() -> Result<ApiResponse<Vec<Department>>, ServerFnError> {
    Ok(ApiResponse::success(mock::departments()))
}

#[server]
pub async fn get_positions() -> Result<ApiResponse<Vec<Position>>, ServerFnError> {
    Ok(ApiResponse::success(mock::positions()))
}

#[server]
pub async fn get_documents() -> Result<ApiResponse<Vec<Document>>, ServerFnError> {
    Ok(ApiResponse::success(mock::documents()))
}

#[server]
pub async fn get_document_rules() -> Result<ApiResponse<Vec<DocumentRule>>, ServerFnError> {
    Ok(ApiResponse::success(mock::document_rules()))
}

#[server]
pub async fn get_matrix_programs() -> Result<ApiResponse<Vec<MatrixProgram>>, ServerFnError> {
    Ok(ApiResponse::success(mock::matrix_programs()))
}

// ── Dashboard statistics ───────────────────────────────

/// Admission metrics for the admin dashboard. `range` is a display label
/// (e.g. `"30d"`); the fixture data does not vary by it.
#[server]
pub async fn get_admission_stats(range: String) -> Result<AdmissionStats, ServerFnError> {
    Ok(mock::admission_stats(&range))
}

/// Review-queue metrics for the department head dashboard.
#[server]
pub async fn get_review_stats() -> Result<ReviewStats, ServerFnError> {
    Ok(mock::review_stats())
}

/// Document-processing metrics for the academic staff affairs dashboard.
#[server]
pub async fn get_processing_stats(range: String) -> Result<ProcessingStats, ServerFnError> {
    Ok(mock::processing_stats(&range))
}

/// Submission progress for the signed-in trainee.
#[server]
pub async fn get_trainee_document_stats() -> Result<TraineeDocumentStats, ServerFnError> {
    Ok(mock::trainee_document_stats())
}

/// Program oversight metrics for the training director dashboard.
#[server]
pub async fn get_oversight_stats() -> Result<OversightStats, ServerFnError> {
    Ok(mock::oversight_stats())
}
