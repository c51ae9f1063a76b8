//! 预导入模块，方便使用

pub use super::batch_classes::{
    ActiveModel as BatchClassActiveModel, Entity as BatchClasses, Model as BatchClassModel,
};
pub use super::batches::{ActiveModel as BatchActiveModel, Entity as Batches, Model as BatchModel};
pub use super::certificates::{
    ActiveModel as CertificateActiveModel, Entity as Certificates, Model as CertificateModel,
};
pub use super::challenge_completions::{
    ActiveModel as ChallengeCompletionActiveModel, Entity as ChallengeCompletions,
    Model as ChallengeCompletionModel,
};
pub use super::challenges::{
    ActiveModel as ChallengeActiveModel, Entity as Challenges, Model as ChallengeModel,
};
pub use super::class_mentors::{
    ActiveModel as ClassMentorActiveModel, Entity as ClassMentors, Model as ClassMentorModel,
};
pub use super::class_users::{
    ActiveModel as ClassUserActiveModel, Entity as ClassUsers, Model as ClassUserModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::files::{ActiveModel as FileActiveModel, Entity as Files, Model as FileModel};
pub use super::lesson_completions::{
    ActiveModel as LessonCompletionActiveModel, Entity as LessonCompletions,
    Model as LessonCompletionModel,
};
pub use super::lessons::{ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel};
pub use super::notes::{ActiveModel as NoteActiveModel, Entity as Notes, Model as NoteModel};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
