use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CompletionService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::AssignmentKind;
use crate::models::completions::entities::{CompletionStatus, ProgressScope};
use crate::models::completions::requests::RecordCompletionRequest;
use crate::models::completions::responses::CompletionResponse;
use crate::models::files::entities::FileOwnerKind;
use crate::models::{ApiResponse, ErrorCode, error_response};
use crate::services::certificates::issue::issue_certificate_if_eligible;
use crate::services::notifications::notify_user;

/// 提交完成
///
/// 写入走 (用户, 任务) 复合唯一键上的 upsert：重复提交收敛到
/// 同一条记录。已完成的记录直接短路返回，不重复产生附件与通知
/// 这类不幂等的副作用。
pub async fn record_completion(
    service: &CompletionService,
    request: &HttpRequest,
    kind: AssignmentKind,
    assignment_id: i64,
    body: RecordCompletionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_response(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ));
    };

    // 任务必须存在
    let assignment = match storage.get_assignment_by_id(kind, assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            let code = match kind {
                AssignmentKind::Lesson => ErrorCode::LessonNotFound,
                AssignmentKind::Challenge => ErrorCode::ChallengeNotFound,
            };
            return Ok(error_response(
                code,
                format!("{} not found", kind.title_noun()),
            ));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to fetch {}: {e}", kind.noun()),
            ));
        }
    };

    // 只有任务所在班级的学员才能提交
    match storage.is_class_member(assignment.class_id, user.id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(error_response(
                ErrorCode::NotClassMember,
                "You are not a member of this class",
            ));
        }
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to check class membership: {e}"),
            ));
        }
    }

    // 已完成的记录短路返回，避免重复副作用
    match storage.get_completion(kind, user.id, assignment_id).await {
        Ok(Some(existing)) if existing.completed => {
            return Ok(HttpResponse::Ok().json(ApiResponse::success_empty(format!(
                "You already submitted this {}.",
                kind.noun()
            ))));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to check completion: {e}"),
            ));
        }
    }

    // 截止时间判定提交状态（超时记 late）
    let status = CompletionStatus::for_submission(chrono::Utc::now(), assignment.deadline);

    let completion = match storage
        .upsert_completion(kind, user.id, assignment_id, status)
        .await
    {
        Ok(completion) => completion,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to record completion: {e}"),
            ));
        }
    };

    // 挂载本次提交的附件
    if !body.file_tokens.is_empty() {
        let owner_kind = match kind {
            AssignmentKind::Lesson => FileOwnerKind::LessonCompletion,
            AssignmentKind::Challenge => FileOwnerKind::ChallengeCompletion,
        };
        if let Err(e) = storage
            .attach_files_to_owner(&body.file_tokens, owner_kind, completion.id, user.id)
            .await
        {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to attach submission files: {e}"),
            ));
        }
    }

    // 通知提交人；挑战额外通知归属导师
    notify_user(
        &storage,
        user.id,
        &format!("{} Submitted!", kind.title_noun()),
        &format!("Your {} submission has been recorded.", kind.noun()),
        kind.title_noun(),
    )
    .await;

    if kind == AssignmentKind::Challenge {
        notify_user(
            &storage,
            assignment.mentor_id,
            "New Challenge Submission",
            &format!(
                "{} submitted the challenge \"{}\".",
                user.display_name(),
                assignment.title
            ),
            kind.title_noun(),
        )
        .await;
    }

    // 班级口径统计进度，满足条件则尝试签发证书
    let progress = match storage
        .get_progress(user.id, ProgressScope::Class(assignment.class_id))
        .await
    {
        Ok(progress) => progress,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to compute progress: {e}"),
            ));
        }
    };

    let certificate = match issue_certificate_if_eligible(
        &storage,
        &user,
        assignment.class_id,
        &progress,
    )
    .await
    {
        Ok(certificate) => certificate,
        Err(e) => {
            return Ok(error_response(
                ErrorCode::InternalServerError,
                format!("Failed to issue certificate: {e}"),
            ));
        }
    };

    info!(
        "User {} completed {} {} ({}/{} lessons, {}/{} challenges)",
        user.id,
        kind.noun(),
        assignment_id,
        progress.completed_lessons,
        progress.total_lessons,
        progress.completed_challenges,
        progress.total_challenges
    );

    let message = if certificate.is_some() {
        format!(
            "{} completed successfully. You finished {} out of {} lessons and {} out of {} challenges, and a certificate was issued!",
            kind.title_noun(),
            progress.completed_lessons,
            progress.total_lessons,
            progress.completed_challenges,
            progress.total_challenges
        )
    } else {
        format!(
            "{} completed successfully. You finished {} out of {} lessons and {} out of {} challenges.",
            kind.title_noun(),
            progress.completed_lessons,
            progress.total_lessons,
            progress.completed_challenges,
            progress.total_challenges
        )
    };

    let response = CompletionResponse {
        message: message.clone(),
        progress,
        certificate,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
}
