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

pub mod ws;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use batches::configure_batches_routes;
pub use certificates::configure_certificates_routes;
pub use classes::configure_classes_routes;
pub use completions::configure_completions_routes;
pub use files::configure_file_routes;
pub use notes::configure_notes_routes;
pub use notifications::configure_notifications_routes;
pub use users::configure_user_routes;
pub use ws::configure_ws_routes;
