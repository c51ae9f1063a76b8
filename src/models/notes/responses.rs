use serde::{Deserialize, Serialize};

use super::entities::Note;

/// 点评相关人员的展示信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotePersonInfo {
    pub id: i64,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub role: String,
}

/// 点评详情（带点评人与学员展示信息）
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteDetailResponse {
    #[serde(flatten)]
    pub note: Note,
    pub grader: Option<NotePersonInfo>,
    pub trainee: Option<NotePersonInfo>,
}
