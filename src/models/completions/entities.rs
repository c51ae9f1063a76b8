use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::AssignmentKind;

// 完成记录状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    NotSubmitted, // 未提交
    Submitted,    // 已按时提交
    Late,         // 截止后提交
    Graded,       // 已点评
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionStatus::NotSubmitted => write!(f, "not_submitted"),
            CompletionStatus::Submitted => write!(f, "submitted"),
            CompletionStatus::Late => write!(f, "late"),
            CompletionStatus::Graded => write!(f, "graded"),
        }
    }
}

impl std::str::FromStr for CompletionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_submitted" => Ok(CompletionStatus::NotSubmitted),
            "submitted" => Ok(CompletionStatus::Submitted),
            "late" => Ok(CompletionStatus::Late),
            "graded" => Ok(CompletionStatus::Graded),
            _ => Err(format!("Invalid completion status: {s}")),
        }
    }
}

impl CompletionStatus {
    /// 按提交时间与截止时间判定提交状态
    ///
    /// 截止时间为空的任务不存在迟交。
    pub fn for_submission(
        submitted_at: chrono::DateTime<chrono::Utc>,
        deadline: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Self {
        match deadline {
            Some(deadline) if submitted_at > deadline => CompletionStatus::Late,
            _ => CompletionStatus::Submitted,
        }
    }
}

/// 完成记录：每个 (用户, 任务) 至多一条，由数据库复合唯一约束保证
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub id: i64,
    pub kind: AssignmentKind,
    pub user_id: i64,
    pub assignment_id: i64,
    pub completed: bool,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: CompletionStatus,
}

/// 进度统计范围
///
/// 全局（跨所有班级）与单班级两种口径并存，调用方显式选择，
/// 不在实现里偷偷固定其中一种。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressScope {
    Global,
    Class(i64),
}

/// 进度统计结果
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed_lessons: u64,
    pub total_lessons: u64,
    pub completed_challenges: u64,
    pub total_challenges: u64,
}

/// 完成率，总数为 0 时定义为 0（不做除零）
pub fn percentage(completed: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

impl Progress {
    pub fn lesson_percentage(&self) -> f64 {
        percentage(self.completed_lessons, self.total_lessons)
    }

    pub fn challenge_percentage(&self) -> f64 {
        percentage(self.completed_challenges, self.total_challenges)
    }

    /// 两条进度线都达到 100% 才满足结业条件
    pub fn is_fully_complete(&self) -> bool {
        self.lesson_percentage() == 100.0 && self.challenge_percentage() == 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_percentage_zero_total_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        let progress = Progress::default();
        assert_eq!(progress.lesson_percentage(), 0.0);
        assert_eq!(progress.challenge_percentage(), 0.0);
        assert!(!progress.is_fully_complete());
    }

    #[test]
    fn test_percentage_full() {
        assert_eq!(percentage(3, 3), 100.0);
        assert_eq!(percentage(1, 2), 50.0);
    }

    #[test]
    fn test_fully_complete_requires_both_tracks() {
        let progress = Progress {
            completed_lessons: 2,
            total_lessons: 2,
            completed_challenges: 0,
            total_challenges: 1,
        };
        assert!(!progress.is_fully_complete());

        let progress = Progress {
            completed_lessons: 2,
            total_lessons: 2,
            completed_challenges: 1,
            total_challenges: 1,
        };
        assert!(progress.is_fully_complete());
    }

    #[test]
    fn test_empty_class_is_not_complete() {
        // 没有任何任务的班级不应自动满足结业条件
        assert!(!Progress::default().is_fully_complete());
    }

    #[test]
    fn test_submission_status_by_deadline() {
        let now = Utc::now();
        assert_eq!(
            CompletionStatus::for_submission(now, Some(now + Duration::hours(1))),
            CompletionStatus::Submitted
        );
        assert_eq!(
            CompletionStatus::for_submission(now, Some(now - Duration::hours(1))),
            CompletionStatus::Late
        );
        assert_eq!(
            CompletionStatus::for_submission(now, None),
            CompletionStatus::Submitted
        );
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            CompletionStatus::NotSubmitted,
            CompletionStatus::Submitted,
            CompletionStatus::Late,
            CompletionStatus::Graded,
        ] {
            assert_eq!(status.to_string().parse::<CompletionStatus>().unwrap(), status);
        }
    }
}
