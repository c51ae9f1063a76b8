//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod batches;
mod certificates;
mod classes;
mod completions;
mod files;
mod notes;
mod notifications;
mod progress;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TrainSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（从全局配置读取连接参数）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_database_url(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 以显式连接参数创建存储实例
    ///
    /// 测试用内存 SQLite 也从这里进来，迁移在连接后立即执行。
    pub async fn new_with_database_url(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TrainSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TrainSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        if !memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存库的每个连接各自是一张空库，必须收敛到单连接
        let max_connections = if memory { 1 } else { pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| TrainSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TrainSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TrainSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
    notes::{
        entities::{Note, NoteVisibility},
        requests::CreateNoteRequest,
        responses::NoteDetailResponse,
    },
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn update_login_state(
        &self,
        id: i64,
        is_logged_in: bool,
        refresh_token: Option<String>,
    ) -> Result<bool> {
        self.update_login_state_impl(id, is_logged_in, refresh_token)
            .await
    }

    async fn submit_verification_form(
        &self,
        id: i64,
        form: VerificationFormRequest,
    ) -> Result<Option<User>> {
        self.submit_verification_form_impl(id, form).await
    }

    // 批次模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, batch_id: i64) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(batch_id).await
    }

    async fn list_batches_with_pagination(
        &self,
        query: BatchListQuery,
    ) -> Result<BatchListResponse> {
        self.list_batches_with_pagination_impl(query).await
    }

    async fn update_batch(
        &self,
        batch_id: i64,
        update: UpdateBatchRequest,
    ) -> Result<Option<Batch>> {
        self.update_batch_impl(batch_id, update).await
    }

    async fn delete_batch(&self, batch_id: i64) -> Result<bool> {
        self.delete_batch_impl(batch_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_detail(&self, class_id: i64) -> Result<Option<ClassDetailResponse>> {
        self.get_class_detail_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn add_class_users(&self, class_id: i64, user_ids: &[i64]) -> Result<u64> {
        self.add_class_users_impl(class_id, user_ids).await
    }

    async fn assign_class_mentors(&self, class_id: i64, mentor_ids: &[i64]) -> Result<u64> {
        self.assign_class_mentors_impl(class_id, mentor_ids).await
    }

    async fn is_class_member(&self, class_id: i64, user_id: i64) -> Result<bool> {
        self.is_class_member_impl(class_id, user_id).await
    }

    // 任务模块
    async fn create_assignment(
        &self,
        kind: AssignmentKind,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(kind, req).await
    }

    async fn get_assignment_by_id(
        &self,
        kind: AssignmentKind,
        id: i64,
    ) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(kind, id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        kind: AssignmentKind,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(kind, query)
            .await
    }

    async fn list_assignments_for_user(
        &self,
        kind: AssignmentKind,
        user_id: i64,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_for_user_impl(kind, user_id).await
    }

    async fn get_mentor_info(&self, mentor_id: i64) -> Result<Option<MentorInfo>> {
        self.get_mentor_info_impl(mentor_id).await
    }

    async fn update_assignment(
        &self,
        kind: AssignmentKind,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(kind, id, update).await
    }

    async fn delete_assignment(&self, kind: AssignmentKind, id: i64) -> Result<bool> {
        self.delete_assignment_impl(kind, id).await
    }

    // 完成记录模块
    async fn get_completion(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
    ) -> Result<Option<Completion>> {
        self.get_completion_impl(kind, user_id, assignment_id).await
    }

    async fn get_completion_by_id(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<Option<Completion>> {
        self.get_completion_by_id_impl(kind, completion_id).await
    }

    async fn upsert_completion(
        &self,
        kind: AssignmentKind,
        user_id: i64,
        assignment_id: i64,
        status: CompletionStatus,
    ) -> Result<Completion> {
        self.upsert_completion_impl(kind, user_id, assignment_id, status)
            .await
    }

    async fn mark_completion_graded(
        &self,
        kind: AssignmentKind,
        completion_id: i64,
    ) -> Result<bool> {
        self.mark_completion_graded_impl(kind, completion_id).await
    }

    // 进度模块
    async fn get_progress(&self, user_id: i64, scope: ProgressScope) -> Result<Progress> {
        self.get_progress_impl(user_id, scope).await
    }

    // 证书模块
    async fn insert_certificate(
        &self,
        trainee_id: i64,
        class_id: i64,
    ) -> Result<CertificateIssue> {
        self.insert_certificate_impl(trainee_id, class_id).await
    }

    async fn get_certificate_detail(&self, id: i64) -> Result<Option<CertificateDetailResponse>> {
        self.get_certificate_detail_impl(id).await
    }

    async fn list_certificates(&self) -> Result<Vec<CertificateDetailResponse>> {
        self.list_certificates_impl().await
    }

    async fn list_certificates_for_user(&self, trainee_id: i64) -> Result<Vec<Certificate>> {
        self.list_certificates_for_user_impl(trainee_id).await
    }

    // 点评模块
    async fn create_note(&self, grader_id: i64, req: CreateNoteRequest) -> Result<Note> {
        self.create_note_impl(grader_id, req).await
    }

    async fn get_note_by_id(&self, note_id: i64) -> Result<Option<Note>> {
        self.get_note_by_id_impl(note_id).await
    }

    async fn list_notes_for_trainee(
        &self,
        trainee_id: i64,
        only_for_trainee: bool,
    ) -> Result<Vec<NoteDetailResponse>> {
        self.list_notes_for_trainee_impl(trainee_id, only_for_trainee)
            .await
    }

    async fn list_notes_by_grader(
        &self,
        grader_id: i64,
        visibility: Option<NoteVisibility>,
    ) -> Result<Vec<NoteDetailResponse>> {
        self.list_notes_by_grader_impl(grader_id, visibility).await
    }

    async fn delete_note(&self, note_id: i64) -> Result<bool> {
        self.delete_note_impl(note_id).await
    }

    // 通知模块
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification> {
        self.create_notification_impl(req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        self.list_notifications_with_pagination_impl(user_id, query)
            .await
    }

    async fn get_unread_notification_count(&self, user_id: i64) -> Result<i64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    async fn mark_notification_as_read(&self, notification_id: i64) -> Result<bool> {
        self.mark_notification_as_read_impl(notification_id).await
    }

    async fn mark_all_notifications_as_read(&self, user_id: i64) -> Result<i64> {
        self.mark_all_notifications_as_read_impl(user_id).await
    }

    async fn delete_notification(&self, notification_id: i64) -> Result<bool> {
        self.delete_notification_impl(notification_id).await
    }

    // 文件模块
    async fn create_file(&self, file: File) -> Result<File> {
        self.create_file_impl(file).await
    }

    async fn get_file_by_token(&self, download_token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(download_token).await
    }

    async fn attach_files_to_owner(
        &self,
        tokens: &[String],
        owner_kind: FileOwnerKind,
        owner_id: i64,
        user_id: i64,
    ) -> Result<u64> {
        self.attach_files_to_owner_impl(tokens, owner_kind, owner_id, user_id)
            .await
    }

    async fn list_files_for_owner(
        &self,
        owner_kind: FileOwnerKind,
        owner_id: i64,
    ) -> Result<Vec<File>> {
        self.list_files_for_owner_impl(owner_kind, owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notes::entities::NoteVisibility;
    use crate::models::users::entities::UserRole;
    use sea_orm::{EntityTrait, PaginatorTrait};

    /// 内存 SQLite 上跑真实迁移的存储实例
    async fn test_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_database_url("sqlite::memory:", 1, 5)
            .await
            .expect("in-memory storage should initialize")
    }

    async fn seed_user(storage: &SeaOrmStorage, email: &str, role: UserRole) -> User {
        storage
            .create_user_impl(CreateUserRequest {
                email: email.to_string(),
                password: "hash".to_string(),
                role,
                full_name: Some("Alice Tan".to_string()),
                nickname: None,
            })
            .await
            .expect("user should be created")
    }

    async fn seed_class_with_assignments(
        storage: &SeaOrmStorage,
        mentor_id: i64,
    ) -> (i64, i64, i64) {
        let batch = storage
            .create_batch_impl(CreateBatchRequest {
                batch_num: 14,
                title: "Batch 14 - Full Stack Development".to_string(),
                description: None,
                start_date: chrono::Utc::now(),
                end_date: chrono::Utc::now() + chrono::Duration::days(120),
                status: "Ongoing".to_string(),
            })
            .await
            .expect("batch should be created");

        let class = storage
            .create_class_impl(CreateClassRequest {
                class_name: "Full Stack Development".to_string(),
                status: None,
                batch_ids: vec![batch.id],
                mentor_ids: vec![],
            })
            .await
            .expect("class should be created");

        let lesson = storage
            .create_assignment_impl(
                AssignmentKind::Lesson,
                CreateAssignmentRequest {
                    class_id: class.id,
                    batch_id: batch.id,
                    mentor_id: Some(mentor_id),
                    title: "Intro to databases".to_string(),
                    description: None,
                    deadline: None,
                    file_tokens: vec![],
                },
            )
            .await
            .expect("lesson should be created");

        let challenge = storage
            .create_assignment_impl(
                AssignmentKind::Challenge,
                CreateAssignmentRequest {
                    class_id: class.id,
                    batch_id: batch.id,
                    mentor_id: Some(mentor_id),
                    title: "Build a REST API".to_string(),
                    description: None,
                    deadline: None,
                    file_tokens: vec![],
                },
            )
            .await
            .expect("challenge should be created");

        (class.id, lesson.id, challenge.id)
    }

    #[tokio::test]
    async fn test_progress_with_no_assignments_is_all_zero() {
        let storage = test_storage().await;

        // 不存在的用户也只是全零，不报错
        let progress = storage
            .get_progress_impl(9999, ProgressScope::Global)
            .await
            .unwrap();

        assert_eq!(progress.total_lessons, 0);
        assert_eq!(progress.total_challenges, 0);
        assert_eq!(progress.lesson_percentage(), 0.0);
        assert_eq!(progress.challenge_percentage(), 0.0);
        assert!(!progress.is_fully_complete());
    }

    #[tokio::test]
    async fn test_completion_upsert_is_idempotent() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (_class_id, lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        let first = storage
            .upsert_completion_impl(
                AssignmentKind::Lesson,
                trainee.id,
                lesson_id,
                CompletionStatus::Submitted,
            )
            .await
            .unwrap();
        assert!(first.completed);

        // 第二次提交不报错，收敛到同一条记录，completed 不丢失
        let second = storage
            .upsert_completion_impl(
                AssignmentKind::Lesson,
                trainee.id,
                lesson_id,
                CompletionStatus::Submitted,
            )
            .await
            .unwrap();
        assert!(second.completed);
        assert_eq!(first.id, second.id);

        let rows = crate::entity::prelude::LessonCompletions::find()
            .count(&storage.db)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_late_submission_recorded_with_late_status() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (class_id, _lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        // 截止时间在过去的课程任务
        let batch_id = crate::entity::prelude::Batches::find()
            .one(&storage.db)
            .await
            .unwrap()
            .unwrap()
            .id;
        let overdue = storage
            .create_assignment_impl(
                AssignmentKind::Lesson,
                CreateAssignmentRequest {
                    class_id,
                    batch_id,
                    mentor_id: Some(mentor.id),
                    title: "Overdue lesson".to_string(),
                    description: None,
                    deadline: Some(chrono::Utc::now() - chrono::Duration::days(1)),
                    file_tokens: vec![],
                },
            )
            .await
            .unwrap();

        let status = CompletionStatus::for_submission(chrono::Utc::now(), overdue.deadline);
        assert_eq!(status, CompletionStatus::Late);

        let completion = storage
            .upsert_completion_impl(AssignmentKind::Lesson, trainee.id, overdue.id, status)
            .await
            .unwrap();
        assert_eq!(completion.status, CompletionStatus::Late);
    }

    #[tokio::test]
    async fn test_certificate_issue_is_at_most_once() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (class_id, _lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        let first = storage
            .insert_certificate_impl(trainee.id, class_id)
            .await
            .unwrap();
        assert!(matches!(first, CertificateIssue::Created(_)));

        // 第二次签发走唯一约束冲突，报告"已签发"而不是再建一张
        let second = storage
            .insert_certificate_impl(trainee.id, class_id)
            .await
            .unwrap();
        assert!(matches!(second, CertificateIssue::AlreadyIssued(_)));

        let rows = crate::entity::prelude::Certificates::find()
            .count(&storage.db)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_certificate_issue_concurrent_callers_converge() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (class_id, _lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        // 两个并发的合格提交同时尝试签发
        let (a, b) = tokio::join!(
            storage.insert_certificate_impl(trainee.id, class_id),
            storage.insert_certificate_impl(trainee.id, class_id),
        );
        let a = a.unwrap();
        let b = b.unwrap();

        let created = [&a, &b]
            .iter()
            .filter(|r| matches!(r, CertificateIssue::Created(_)))
            .count();
        assert_eq!(created, 1, "exactly one caller wins the insert");

        let rows = crate::entity::prelude::Certificates::find()
            .count(&storage.db)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_full_completion_workflow_issues_certificate() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (class_id, lesson_id, challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        // 只完成课程任务：进度未满，不够资格
        storage
            .upsert_completion_impl(
                AssignmentKind::Lesson,
                trainee.id,
                lesson_id,
                CompletionStatus::Submitted,
            )
            .await
            .unwrap();

        let progress = storage
            .get_progress_impl(trainee.id, ProgressScope::Class(class_id))
            .await
            .unwrap();
        assert_eq!(progress.completed_lessons, 1);
        assert_eq!(progress.total_lessons, 1);
        assert_eq!(progress.completed_challenges, 0);
        assert!(!progress.is_fully_complete());

        // 再完成唯一的挑战：两条进度线都到 100%
        storage
            .upsert_completion_impl(
                AssignmentKind::Challenge,
                trainee.id,
                challenge_id,
                CompletionStatus::Submitted,
            )
            .await
            .unwrap();

        let progress = storage
            .get_progress_impl(trainee.id, ProgressScope::Class(class_id))
            .await
            .unwrap();
        assert!(progress.is_fully_complete());

        let issue = storage
            .insert_certificate_impl(trainee.id, class_id)
            .await
            .unwrap();
        let CertificateIssue::Created(certificate) = issue else {
            panic!("certificate should be issued on first qualification");
        };
        assert_eq!(certificate.trainee_id, trainee.id);
        assert_eq!(certificate.class_id, class_id);

        // 全局口径下还存在其他班级的任务时，两种口径可以不同
        let global = storage
            .get_progress_impl(trainee.id, ProgressScope::Global)
            .await
            .unwrap();
        assert!(global.total_lessons >= progress.total_lessons);
    }

    #[tokio::test]
    async fn test_duplicate_batch_num_is_conflict() {
        let storage = test_storage().await;

        let make_request = || CreateBatchRequest {
            batch_num: 14,
            title: "Batch 14".to_string(),
            description: None,
            start_date: chrono::Utc::now(),
            end_date: chrono::Utc::now() + chrono::Duration::days(30),
            status: "Ongoing".to_string(),
        };

        storage.create_batch_impl(make_request()).await.unwrap();

        let err = storage
            .create_batch_impl(make_request())
            .await
            .expect_err("duplicate batch_num must be rejected");
        assert!(matches!(err, TrainSystemError::Conflict(_)));

        // 失败的创建不会留下半成品记录
        let rows = crate::entity::prelude::Batches::find()
            .count(&storage.db)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_note_visibility_filtering() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;

        storage
            .create_note_impl(
                mentor.id,
                CreateNoteRequest {
                    trainee_id: trainee.id,
                    content: "Great submission.".to_string(),
                    visibility: NoteVisibility::ForTrainee,
                    lesson_completion_id: None,
                    challenge_completion_id: None,
                },
            )
            .await
            .unwrap();
        storage
            .create_note_impl(
                mentor.id,
                CreateNoteRequest {
                    trainee_id: trainee.id,
                    content: "Needs close monitoring.".to_string(),
                    visibility: NoteVisibility::GradersOnly,
                    lesson_completion_id: None,
                    challenge_completion_id: None,
                },
            )
            .await
            .unwrap();

        // 学员视角：只看到 for_trainee
        let trainee_view = storage
            .list_notes_for_trainee_impl(trainee.id, true)
            .await
            .unwrap();
        assert_eq!(trainee_view.len(), 1);
        assert_eq!(
            trainee_view[0].note.visibility,
            NoteVisibility::ForTrainee
        );

        // 点评角色视角：全部可见
        let grader_view = storage
            .list_notes_for_trainee_impl(trainee.id, false)
            .await
            .unwrap();
        assert_eq!(grader_view.len(), 2);
    }

    #[tokio::test]
    async fn test_note_on_completion_marks_it_graded() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (_class_id, lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        let completion = storage
            .upsert_completion_impl(
                AssignmentKind::Lesson,
                trainee.id,
                lesson_id,
                CompletionStatus::Submitted,
            )
            .await
            .unwrap();

        storage
            .mark_completion_graded_impl(AssignmentKind::Lesson, completion.id)
            .await
            .unwrap();

        let reloaded = storage
            .get_completion_by_id_impl(AssignmentKind::Lesson, completion.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.status, CompletionStatus::Graded);
        assert!(reloaded.completed);
    }

    #[tokio::test]
    async fn test_class_participant_count_recomputed_on_read() {
        let storage = test_storage().await;
        let mentor = seed_user(&storage, "mentor@example.com", UserRole::Mentor).await;
        let trainee = seed_user(&storage, "trainee@example.com", UserRole::Trainee).await;
        let (class_id, _lesson_id, _challenge_id) =
            seed_class_with_assignments(&storage, mentor.id).await;

        let class = storage.get_class_by_id_impl(class_id).await.unwrap().unwrap();
        assert_eq!(class.participant_count, 0);

        storage
            .add_class_users_impl(class_id, &[trainee.id])
            .await
            .unwrap();
        // 重复添加静默跳过
        storage
            .add_class_users_impl(class_id, &[trainee.id])
            .await
            .unwrap();

        let class = storage.get_class_by_id_impl(class_id).await.unwrap().unwrap();
        assert_eq!(class.participant_count, 1);
    }
}
