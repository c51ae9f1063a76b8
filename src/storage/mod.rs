use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentKind, MentorInfo},
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    batches::{
        entities::Batch,
        requests::{BatchListQuery, CreateBatchRequest, UpdateBatchRequest},
        responses::BatchListResponse,
    },
    certificates::{
        entities::{Certificate, CertificateIssue},
        responses::CertificateDetailResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::{ClassDetailResponse, ClassListResponse},
    },
    completions::entities::{Completion, CompletionStatus, Progress, ProgressScope},
    files::entities::{File, FileOwnerKind},
    notes::{entities::Note, requests::CreateNoteRequest, responses::NoteDetailResponse},
    notifications::{
        entities::Notification,
        requests::{CreateNotificationRequest, NotificationListQuery},
        responses::NotificationListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery, VerificationFormRequest},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（邮箱冲突返回 Conflict 错误）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 更新登录状态与存储的刷新令牌（None 表示清除）
    async fn update_login_state(
        &self,
        id: i64,
        is_logged_in: bool,
        refresh_token: Option<String>,
    ) -> Result<bool>;
    // 学员提交认证表单，状态推进为 verified
    async fn submit_verification_form(
        &self,
        id: i64,
        form: VerificationFormRequest,
    ) -> Result<Option<User>>;

    /// 批次管理方法
    // 创建批次（批次号冲突返回 Conflict 错误）
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    // 通过ID获取批次
    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>>;
    // 列出批次
    async fn list_batches_with_pagination(&self, query: BatchListQuery)
    -> Result<BatchListResponse>;
    // 更新批次
    async fn update_batch(&self, batch_id: i64, update: UpdateBatchRequest)
    -> Result<Option<Batch>>;
    // 删除批次
    async fn delete_batch(&self, batch_id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级，可同时挂批次与指派导师
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级（参与人数实时统计）
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 班级详情：批次、导师、学员
    async fn get_class_detail(&self, class_id: i64) -> Result<Option<ClassDetailResponse>>;
    // 列出班级（支持按批次/导师/学员过滤）
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级
    async fn update_class(&self, class_id: i64, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    // 添加班级学员（重复成员静默跳过）
    async fn add_class_users(&self, class_id: i64, user_ids: &[i64]) -> Result<u64>;
    // 指派班级导师（重复指派静默跳过）
    async fn assign_class_mentors(&self, class_id: i64, mentor_ids: &[i64]) -> Result<u64>;
    // 判断用户是否为班级学员
    async fn is_class_member(&self, class_id: i64, user_id: i64) -> Result<bool>;

    /// 任务管理方法（课程任务与实战挑战共用，按 kind 区分）
    // 创建任务
    async fn create_assignment(
        &self,
        kind: AssignmentKind,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取任务
    async fn get_assignment_by_id(
        &self,
        kind: AssignmentKind,
        id: i64,
    ) -> Result<Option<Assignment>>;
    // 列出任务
    async fn list_assignments_with_pagination(
        &self,
        kind: AssignmentKind,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 列出某用户所在班级的全部任务
    async fn list_assignments_for_user(
        &self,
        kind: AssignmentKind,
        user_id: i64,
    ) -> Result<Vec<Assignment>>;
    // 任务归属导师的展示信息
    async fn get_mentor_info(&self, mentor_id: i64) -> Result<Option<MentorInfo>>;
    // 更新任务
    async fn update_assignment(
        &self,
        kind: AssignmentKind,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除任务
    async fn delete_assignment(&self, kind: AssignmentKind, id: i64) -> Result<bool>;

    /// 完成记录方法
    // 获取 (用户, 任务) 的完成记录
    async fn get_completion(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Completion>>;
    // 通过ID获取完成记录
    async fn get_completion_by_id(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<Option<Completion>>;
    // 按复合唯一键 upsert 完成记录（存储层幂等）
    async fn upsert_completion(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
        status: CompletionStatus,
    ) -> Result<Completion>;
    // 点评后把完成记录推进为 graded
    async fn mark_completion_graded(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<bool>;

    /// 进度统计方法
    // 统计用户完成进度，调用方显式选择全局或单班级口径
    async fn get_progress(&self, user_id: i64, scope: ProgressScope) -> Result<Progress>;

    /// 证书方法
    // 尝试签发证书：依赖 (trainee_id, class_id) 唯一约束，
    // 冲突被视为"已签发"而不是错误
    async fn insert_certificate(&self, trainee_id: i64, class_id: i64)
    -> Result<CertificateIssue>;
    // 通过ID获取证书详情
    async fn get_certificate_detail(&self, id: i64) -> Result<Option<CertificateDetailResponse>>;
    // 列出全部证书详情
    async fn list_certificates(&self) -> Result<Vec<CertificateDetailResponse>>;
    // 列出某学员的证书
    async fn list_certificates_for_user(&self, trainee_id: i64) -> Result<Vec<Certificate>>;

    /// 点评方法
    // 创建点评
    async fn create_note(&self, grader_id: i64, req: CreateNoteRequest) -> Result<Note>;
    // 通过ID获取点评
    async fn get_note_by_id(&self, note_id: i64) -> Result<Option<Note>>;
    // 列出某学员的点评；only_for_trainee 时仅返回学员可见的
    async fn list_notes_for_trainee(
        &self,
        trainee_id: i64,
        only_for_trainee: bool,
    ) -> Result<Vec<NoteDetailResponse>>;
    // 列出某点评人的点评，可按可见性过滤
    async fn list_notes_by_grader(
        &self,
        grader_id: i64,
        visibility: Option<crate::models::notes::entities::NoteVisibility>,
    ) -> Result<Vec<NoteDetailResponse>>;
    // 删除点评
    async fn delete_note(&self, note_id: i64) -> Result<bool>;

    /// 通知方法
    // 创建通知
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    // 列出用户通知
    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse>;
    // 未读通知数量
    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64>;
    // 标记通知已读
    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<bool>;
    // 标记用户全部通知已读
    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64>;
    // 删除通知
    async fn delete_notification(&self, notification_id: i64) -> Result<bool>;

    /// 文件方法
    // 登记上传文件
    async fn create_file(&self, file: File) -> Result<File>;
    // 通过下载 token 获取文件
    async fn get_file_by_token(&self, download_token: &str) -> Result<Option<File>>;
    // 把一批已上传文件挂载到归属对象（仅限上传者本人的文件）
    async fn attach_files_to_owner(
        &self,
        tokens: &[String],
        owner_kind: FileOwnerKind,
        owner_id: i64,
        user_id: i64,
    ) -> Result<u64>;
    // 列出归属对象的文件
    async fn list_files_for_owner(
        &self,
        owner_kind: FileOwnerKind,
        owner_id: i64,
    ) -> Result<Vec<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
