use serde::Deserialize;

use super::entities::NoteVisibility;

/// 创建点评请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub trainee_id: i64,
    pub content: String,
    pub visibility: NoteVisibility,
    pub lesson_completion_id: Option<i64>,
    pub challenge_completion_id: Option<i64>,
}

/// 点评列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct NoteListQuery {
    pub visibility: Option<NoteVisibility>,
}
