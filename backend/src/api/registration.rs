//! Registration endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{success, with_campus, ApiResult};
use crate::models::{
    RegisterRepresentativeRequest, RegisterStudentRequest, RepresentativeProfile, StudentProfile,
};
use crate::notify::Delivery;
use crate::AppState;

/// Response body for a student registration.
#[derive(Debug, Serialize)]
pub struct StudentRegistrationResponse {
    pub student: StudentProfile,
    pub notification: Delivery,
}

/// POST /api/students - Register a student and send the confirmation email.
pub async fn register_student(
    State(state): State<AppState>,
    Json(request): Json<RegisterStudentRequest>,
) -> ApiResult<StudentRegistrationResponse> {
    let registration = with_campus(&state, move |campus| {
        campus.registration().register_student(
            &request.name,
            &request.student_number,
            &request.section,
            &request.password,
            &request.email,
        )
    })
    .await?;

    success(StudentRegistrationResponse {
        student: StudentProfile::from(&registration.student),
        notification: registration.notification,
    })
}

/// POST /api/representatives - Register a department representative.
pub async fn register_representative(
    State(state): State<AppState>,
    Json(request): Json<RegisterRepresentativeRequest>,
) -> ApiResult<RepresentativeProfile> {
    let representative = with_campus(&state, move |campus| {
        campus.registration().register_representative(
            &request.department_name,
            &request.username,
            &request.password,
        )
    })
    .await?;

    success(RepresentativeProfile::from(&representative))
}
