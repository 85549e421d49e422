//! HTTP inbound adapter rendering the todo pages.

pub mod error;
pub mod forms;
pub mod pages;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

use actix_web::web;

pub use error::PageResult;

/// Register every page route on `cfg`.
///
/// `/todos/new` is registered before `/todos/{id}` so the literal segment
/// wins. Unmatched paths are left to the app's default service, which should
/// be [`pages::not_found`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::static_pages::home)
        .service(pages::static_pages::about)
        .service(pages::static_pages::error_test)
        .service(pages::static_pages::not_found_page)
        .service(pages::todos_list::todos_list)
        .service(pages::todo_new::create_todo)
        .service(pages::todo_new::new_todo)
        .service(pages::todo_detail::todo_detail)
        .service(pages::todo_edit::edit_todo)
        .service(pages::todo_edit::update_todo)
        .service(pages::actions::toggle_todo)
        .service(pages::actions::delete_todo)
        .service(pages::actions::refresh)
        .service(pages::actions::back);
}
