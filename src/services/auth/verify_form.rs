use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::users::requests::VerificationFormRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::services::notifications::notify_user;

use super::AuthService;

/// 学员提交认证表单
///
/// 资料落库并把账号状态推进为 verified，随后给本人推一条通知。
pub async fn handle_verification_form(
    service: &AuthService,
    form: VerificationFormRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if form.full_name.trim().is_empty() {
        return Ok(error_response(ErrorCode::Validation, "Full name is required"));
    }

    match storage.submit_verification_form(user_id, form).await {
        Ok(Some(user)) => {
            notify_user(
                &storage,
                user_id,
                "Profile Verified!",
                "Your verification form has been submitted successfully.",
                "Profile",
            )
            .await;

            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "Verification form submitted")))
        }
        Ok(None) => Ok(error_response(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(error_response(
            ErrorCode::InternalServerError,
            format!("Error submitting verification form: {e}"),
        )),
    }
}
