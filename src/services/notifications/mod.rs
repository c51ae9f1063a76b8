pub mod count;
pub mod list;
pub mod mark_read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{CreateNotificationRequest, NotificationListQuery};
use crate::services::websocket::push_notification_to_user;
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
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

    // 通知列表
    pub async fn list_notifications(
        &self,
        req: &HttpRequest,
        user_id: i64,
        query: NotificationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, req, user_id, query).await
    }

    // 未读数量
    pub async fn get_unread_count(
        &self,
        req: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        count::get_unread_count(self, req, user_id).await
    }

    // 标记单条已读
    pub async fn mark_as_read(
        &self,
        req: &HttpRequest,
        user_id: i64,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_as_read(self, req, user_id, notification_id).await
    }

    // 标记全部已读
    pub async fn mark_all_as_read(
        &self,
        req: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::mark_all_as_read(self, req, user_id).await
    }

    // 删除通知
    pub async fn delete_notification(
        &self,
        req: &HttpRequest,
        user_id: i64,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        mark_read::delete_notification(self, req, user_id, notification_id).await
    }
}

/// 创建通知记录并实时推送给用户
///
/// 通知是尽力而为的旁路副作用：落库或推送失败只打日志，
/// 不影响主流程的结果。
pub async fn notify_user(
    storage: &Arc<dyn Storage>,
    user_id: i64,
    title: &str,
    description: &str,
    notification_type: &str,
) {
    let req = CreateNotificationRequest {
        user_id,
        title: title.to_string(),
        description: Some(description.to_string()),
        notification_type: notification_type.to_string(),
    };

    match storage.create_notification(req).await {
        Ok(notification) => {
            push_notification_to_user(user_id, notification);
        }
        Err(e) => {
            tracing::warn!("Failed to create notification for user {}: {}", user_id, e);
        }
    }
}
