//! UI Components

mod board_view;
mod column_form;
mod delete_confirm_button;
mod kanban_column;
mod language_switcher;
mod login_page;
mod task_card;
mod task_detail;
mod task_form;

pub use board_view::BoardView;
pub use column_form::ColumnForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_column::KanbanColumn;
pub use language_switcher::LanguageSwitcher;
pub use login_page::LoginPage;
pub use task_card::TaskCard;
pub use task_detail::TaskDetail;
pub use task_form::TaskForm;
