pub mod assignments;
pub mod auth;
pub mod batches;
pub mod certificates;
pub mod classes;
pub mod completions;
pub mod files;
pub mod notes;
pub mod notifications;
pub mod users;
pub mod websocket;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use batches::BatchService;
pub use certificates::CertificateService;
pub use classes::ClassService;
pub use completions::CompletionService;
pub use files::FileService;
pub use notes::NoteService;
pub use notifications::NotificationService;
pub use users::UserService;
