//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod batch_classes;
pub mod batches;
pub mod certificates;
pub mod challenge_completions;
pub mod challenges;
pub mod class_mentors;
pub mod class_users;
pub mod classes;
pub mod files;
pub mod lesson_completions;
pub mod lessons;
pub mod notes;
pub mod notifications;
pub mod users;
