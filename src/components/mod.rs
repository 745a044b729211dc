//! UI Components
//!
//! Leptos views for the auth pages and the todo board.

mod login_form;
mod register_form;
mod todo_page;
mod todo_form_popup;
mod sticky_note;
mod profile_menu;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use todo_page::TodoPage;
pub use todo_form_popup::TodoFormPopup;
pub use sticky_note::StickyNote;
pub use profile_menu::ProfileMenu;
