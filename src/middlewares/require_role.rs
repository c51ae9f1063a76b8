/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，用于验证用户是否具有
 * 特定角色权限。角色不在允许列表中的请求一律返回 403。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1/batches")
 *     .wrap(middlewares::RequireJWT)
 *     .route(
 *         "",
 *         web::post()
 *             .to(create_batch)
 *             .wrap(RequireRole::new_any(UserRole::admin_roles())),
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{self, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed_roles: vec![role.clone()],
        }
    }

    /// 创建需要任一角色的中间件
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed_roles: self.allowed_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed_roles: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let allowed_roles = self.allowed_roles.clone();

        Box::pin(async move {
            // 从请求扩展中获取类型化的用户值
            let user = req.extensions().get::<entities::User>().cloned();

            match user {
                Some(user) => {
                    let has_permission = allowed_roles.iter().any(|role| *role == user.role);

                    if has_permission {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    } else {
                        info!(
                            "Access denied for user {} (role: {}). Allowed roles: {:?}",
                            user.id, user.role, allowed_roles
                        );
                        Ok(req.into_response(
                            create_error_response(
                                StatusCode::FORBIDDEN,
                                ErrorCode::Forbidden,
                                "Access denied.",
                            )
                            .map_into_right_body(),
                        ))
                    }
                }
                None => {
                    info!(
                        "Role check failed: No user found in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserProfile, UserStatus};
    use actix_web::dev::Service;
    use actix_web::{App, HttpResponse, test, web};

    fn test_user(role: UserRole) -> User {
        User {
            id: 1,
            email: "trainee@example.com".to_string(),
            password_hash: String::new(),
            role,
            status: UserStatus::Verified,
            profile: UserProfile {
                full_name: Some("Alice".to_string()),
                nickname: None,
                github: None,
                address: None,
                mobile: None,
                avatar_url: None,
            },
            is_logged_in: true,
            refresh_token: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    async fn run_with_role(user_role: UserRole, allowed: &[&UserRole]) -> StatusCode {
        let app = test::init_service(
            App::new().service(
                web::resource("/admin-only")
                    .route(web::get().to(|| async { HttpResponse::Ok().finish() }))
                    .wrap(RequireRole::new_any(allowed)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin-only").to_request();
        // 模拟 RequireJWT 已放入扩展的用户
        req.extensions_mut().insert(test_user(user_role));
        let resp = app.call(req).await.unwrap();
        resp.status()
    }

    #[actix_web::test]
    async fn test_trainee_blocked_from_admin_route() {
        let status = run_with_role(UserRole::Trainee, UserRole::admin_roles()).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_admin_allowed_on_admin_route() {
        let status = run_with_role(UserRole::Admin, UserRole::admin_roles()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_grader_roles_allow_examiner() {
        let status = run_with_role(UserRole::Examiner, UserRole::grader_roles()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::resource("/admin-only")
                    .route(web::get().to(|| async { HttpResponse::Ok().finish() }))
                    .wrap(RequireRole::new(&UserRole::Admin)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin-only").to_request();
        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
