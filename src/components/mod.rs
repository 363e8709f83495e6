//! UI Components
//!
//! Pages and the reusable pieces they are built from.

mod authenticated_route;
mod delete_confirm_button;
mod department_form;
mod department_list;
mod employee_form;
mod employee_list;
mod footer;
mod form_messages;
mod header;
mod login;
mod pagination;
mod register;
mod search_bar;
mod sort_header;
mod text_field;
mod todo_form;
mod todo_list;

pub use authenticated_route::AuthenticatedRoute;
pub use delete_confirm_button::DeleteConfirmButton;
pub use department_form::DepartmentForm;
pub use department_list::DepartmentList;
pub use employee_form::EmployeeForm;
pub use employee_list::EmployeeList;
pub use footer::Footer;
pub use form_messages::FormMessages;
pub use header::Header;
pub use login::Login;
pub use pagination::Pagination;
pub use register::Register;
pub use search_bar::SearchBar;
pub use sort_header::SortHeader;
pub use text_field::TextField;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
