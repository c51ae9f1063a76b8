use serde::{Deserialize, Serialize};

/// 点评内容长度上限（字符数）
pub const NOTE_CONTENT_MAX_LEN: usize = 300;

// 点评可见性
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteVisibility {
    // 学员本人与点评角色可见
    ForTrainee,
    // 仅点评角色可见
    GradersOnly,
}

impl std::fmt::Display for NoteVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteVisibility::ForTrainee => write!(f, "for_trainee"),
            NoteVisibility::GradersOnly => write!(f, "graders_only"),
        }
    }
}

impl std::str::FromStr for NoteVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "for_trainee" => Ok(NoteVisibility::ForTrainee),
            "graders_only" => Ok(NoteVisibility::GradersOnly),
            _ => Err(format!("Invalid note visibility: {s}")),
        }
    }
}

/// 点评
///
/// 可选关联到一条课程/挑战完成记录；带完成记录的点评会把
/// 该记录的状态推进到 graded。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub grader_id: i64,
    pub trainee_id: i64,
    pub lesson_completion_id: Option<i64>,
    pub challenge_completion_id: Option<i64>,
    pub content: String,
    pub visibility: NoteVisibility,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
