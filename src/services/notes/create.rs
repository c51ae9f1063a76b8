use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NoteService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::notes::requests::CreateNoteRequest;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::services::notifications::notify_user;
use crate::utils::validate::validate_note_content;

/// 创建点评
///
/// 点评可关联一条课程/挑战完成记录；带完成记录的点评会把该记录
/// 的状态推进到 graded，并通知被点评的学员。
pub async fn create_note(
    service: &NoteService,
    request: &HttpRequest,
    note_data: CreateNoteRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(grader) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    if let Err(msg) = validate_note_content(&note_data.content) {
        return Ok(error_response(ErrorCode::NoteContentInvalid, msg));
    }

    // 被点评学员必须存在
    match storage.get_user_by_id(note_data.trainee_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_response(ErrorCode::UserNotFound, "Trainee not found"));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("查询学员失败: {e}"),
            ));
        }
    }

    // 关联的完成记录必须存在
    for (kind, completion_id) in [
        (AssignmentKind::Lesson, note_data.lesson_completion_id),
        (AssignmentKind::Challenge, note_data.challenge_completion_id),
    ] {
        if let Some(completion_id) = completion_id {
            match storage.get_completion_by_id(kind, completion_id).await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    return Ok(error_response(
                        ErrorCode::CompletionNotFound,
                        "completion id not found",
                    ));
                }
                Err(e) => {
                    return Ok(error_response(
                        ErrorCode::InternalServerError,
                        format!("查询完成记录失败: {e}"),
                    ));
                }
            }
        }
    }

    let lesson_completion_id = note_data.lesson_completion_id;
    let challenge_completion_id = note_data.challenge_completion_id;
    let trainee_id = note_data.trainee_id;

    let note = match storage.create_note(grader.id, note_data).await {
        Ok(note) => note,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("创建点评失败: {e}"),
            ));
        }
    };

    // 带完成记录的点评把状态推进到 graded
    if let Some(completion_id) = lesson_completion_id
        && let Err(e) = storage
            .mark_completion_graded(AssignmentKind::Lesson, completion_id)
            .await
    {
        return Ok(error_response(
            ErrorCode::InternalServerError,
            format!("更新点评状态失败: {e}"),
        ));
    }
    if let Some(completion_id) = challenge_completion_id
        && let Err(e) = storage
            .mark_completion_graded(AssignmentKind::Challenge, completion_id)
            .await
    {
        return Ok(error_response(
            ErrorCode::InternalServerError,
            format!("更新点评状态失败: {e}"),
        ));
    }

    notify_user(
        &storage,
        trainee_id,
        "New Feedback",
        "A grader left a note on your submission.",
        "Note",
    )
    .await;

    info!("Note {} created by grader {}", note.id, grader.id);

    Ok(HttpResponse::Created().json(ApiResponse::success(note, "Note created successfully")))
}
