mod add_task_form;
mod bucket_column;
mod error_message;
mod loading_spinner;
mod nav_bar;
mod task_row;

pub use add_task_form::AddTaskForm;
pub use bucket_column::BucketColumn;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use nav_bar::NavBar;
pub use task_row::{CompletedRow, TaskRow};
