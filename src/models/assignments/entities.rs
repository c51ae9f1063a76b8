use serde::{Deserialize, Serialize};

/// 任务类别：课程任务或实战挑战
///
/// 两类任务的表结构平行（各自独立建表、独立完成记录），
/// 业务层统一用该枚举参数化，避免两套重复逻辑。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    Lesson,
    Challenge,
}

impl AssignmentKind {
    /// 对外文案中的单数名词（"lesson" / "challenge"）
    pub fn noun(&self) -> &'static str {
        match self {
            AssignmentKind::Lesson => "lesson",
            AssignmentKind::Challenge => "challenge",
        }
    }

    /// 通知标题使用的首字母大写形式
    pub fn title_noun(&self) -> &'static str {
        match self {
            AssignmentKind::Lesson => "Lesson",
            AssignmentKind::Challenge => "Challenge",
        }
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.noun())
    }
}

impl std::str::FromStr for AssignmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lesson" => Ok(AssignmentKind::Lesson),
            "challenge" => Ok(AssignmentKind::Challenge),
            _ => Err(format!("Invalid assignment kind: {s}")),
        }
    }
}

/// 课程任务 / 实战挑战
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub kind: AssignmentKind,
    pub class_id: i64,
    pub batch_id: i64,
    pub mentor_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 任务归属导师的展示信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorInfo {
    pub id: i64,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
}
