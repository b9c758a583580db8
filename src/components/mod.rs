//! UI Components
//!
//! Reusable Leptos components.

mod text_field;
mod search_form;
mod film_list;

pub use text_field::TextField;
pub use search_form::SearchForm;
pub use film_list::FilmList;
