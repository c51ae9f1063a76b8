pub mod login;
pub mod logout;
pub mod register;
pub mod token;
pub mod verify_form;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::requests::{LoginRequest, LogoutRequest};
use crate::models::users::requests::{CreateUserRequest, VerificationFormRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    // 登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        req: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, req).await
    }

    // 注销
    pub async fn logout(
        &self,
        logout_request: LogoutRequest,
        req: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, logout_request, req).await
    }

    // 学员自助注册
    pub async fn register(
        &self,
        user_data: CreateUserRequest,
        req: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, user_data, req).await
    }

    // 刷新访问令牌
    pub async fn refresh_token(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, req).await
    }

    // 校验令牌
    pub async fn verify_token(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_verify_token(self, req).await
    }

    // 当前用户信息
    pub async fn get_user(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_user(self, req).await
    }

    // 当前用户认证状态
    pub async fn get_status(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_status(self, req).await
    }

    // 学员提交认证表单
    pub async fn submit_verification_form(
        &self,
        form: VerificationFormRequest,
        req: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify_form::handle_verification_form(self, form, req).await
    }
}
