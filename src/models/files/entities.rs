use serde::{Deserialize, Serialize};

/// 文件归属类别
///
/// 每个文件恰好归属其中一类；上传时即确定类别，
/// 归属对象（owner_id）可在后续业务提交时再挂载。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FileOwnerKind {
    Lesson,
    Challenge,
    LessonCompletion,
    ChallengeCompletion,
    Profile,
    Certificate,
}

impl std::fmt::Display for FileOwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileOwnerKind::Lesson => "lesson",
            FileOwnerKind::Challenge => "challenge",
            FileOwnerKind::LessonCompletion => "lesson_completion",
            FileOwnerKind::ChallengeCompletion => "challenge_completion",
            FileOwnerKind::Profile => "profile",
            FileOwnerKind::Certificate => "certificate",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for FileOwnerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(FileOwnerKind::Lesson),
            "challenge" => Ok(FileOwnerKind::Challenge),
            "lesson_completion" => Ok(FileOwnerKind::LessonCompletion),
            "challenge_completion" => Ok(FileOwnerKind::ChallengeCompletion),
            "profile" => Ok(FileOwnerKind::Profile),
            "certificate" => Ok(FileOwnerKind::Certificate),
            _ => Err(format!("Invalid file owner kind: {s}")),
        }
    }
}

/// 上传文件记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub download_token: String,
    pub original_name: String,
    // 磁盘上的实际文件名（时间戳前缀 + 清洗后的原始名）
    #[serde(skip_serializing, default)]
    pub stored_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub owner_kind: FileOwnerKind,
    pub owner_id: Option<i64>,
    pub user_id: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
