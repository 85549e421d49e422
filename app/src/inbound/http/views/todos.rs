//! Views for the todo pages: list, detail and the shared task form.

use super::escape;
use super::fallbacks::alert;
use super::layout::breadcrumbs;
use crate::domain::{Task, TaskFilter};
use crate::routing::{AppRoute, TodoListSearch, navigation};

const DELETE_CONFIRM: &str = "return confirm('Are you sure you want to delete this todo?')";

/// Heading shared by every page under `/todos`.
pub fn section(body: &str) -> String {
    format!("<div><h2>Todo Management</h2>{body}</div>")
}

fn created_on(task: &Task) -> String {
    task.created_at.format("%-m/%-d/%Y").to_string()
}

fn status_badge(task: &Task) -> &'static str {
    if task.completed {
        "<span class=\"badge done\">Completed</span>"
    } else {
        "<span class=\"badge open\">Pending</span>"
    }
}

fn title_class(task: &Task) -> &'static str {
    if task.completed { " class=\"done-title\"" } else { "" }
}

/// Single-button form posting a toggle or delete; `return_to` tells the
/// handler which page to land on afterwards.
fn action_form(task: &Task, action: &str, return_to: &str, label: &str, class: &str) -> String {
    let confirm = if action == "delete" {
        format!(" onsubmit=\"{DELETE_CONFIRM}\"")
    } else {
        String::new()
    };
    format!(
        "<form method=\"post\" action=\"/todos/{id}/{action}\" class=\"inline\"{confirm}>\
         <input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\
         <button type=\"submit\" class=\"{class}\">{label}</button></form>",
        id = task.id,
    )
}

fn filter_controls(search: &TodoListSearch) -> String {
    let buttons: String = TaskFilter::ALL
        .into_iter()
        .map(|filter| {
            let href = navigation::to_todos_with_filter(filter, Some(&search.search)).href();
            let class = if filter == search.filter {
                "button current"
            } else {
                "button secondary"
            };
            format!(
                "<a href=\"{}\" class=\"{class}\">{}</a> ",
                escape(&href),
                filter.label()
            )
        })
        .collect();
    let clear = if search.is_filtered() {
        format!(
            "<a href=\"{}\">Clear filters</a>",
            navigation::to_todos_with_filter(TaskFilter::All, None).href()
        )
    } else {
        String::new()
    };
    format!(
        "<div class=\"filters\"><div><label>Filter:</label> {buttons}</div>\
         <form method=\"get\" action=\"/todos\">\
         <input type=\"hidden\" name=\"filter\" value=\"{filter}\">\
         <label for=\"search\">Search:</label> \
         <input type=\"text\" id=\"search\" name=\"search\" value=\"{value}\" placeholder=\"Search todos...\">\
         <button type=\"submit\" class=\"button secondary\">Search</button></form>{clear}</div>",
        filter = search.filter.as_str(),
        value = escape(&search.search),
    )
}

fn list_item(task: &Task) -> String {
    let toggle_label = if task.completed {
        "Mark Pending"
    } else {
        "Mark Done"
    };
    format!(
        "<article class=\"card\"><h4{title_class}>{title}</h4><p>{description}</p>\
         <p>{badge} <small>Created {created}</small></p>\
         <p><a href=\"{view}\">View</a> <a href=\"{edit}\">Edit</a> {toggle} {delete}</p></article>",
        title_class = title_class(task),
        title = escape(task.title.as_ref()),
        description = escape(&task.description),
        badge = status_badge(task),
        created = created_on(task),
        view = navigation::to_todo(task.id).href(),
        edit = navigation::to_edit_todo(task.id).href(),
        toggle = action_form(task, "toggle", "list", toggle_label, "link"),
        delete = action_form(task, "delete", "list", "Delete", "link danger"),
    )
}

/// Body of the list page.
pub fn list(tasks: &[Task], search: &TodoListSearch) -> String {
    let mut html = breadcrumbs(&AppRoute::TodoList(search.clone()).breadcrumbs());

    let qualifier = if search.filter == TaskFilter::All {
        String::new()
    } else {
        format!(" <small>({})</small>", search.filter)
    };
    html.push_str(&format!(
        "<div><h3>Your Todos ({count}){qualifier}</h3>\
         <a href=\"{new}\" class=\"button\">Add New Todo</a></div>",
        count = tasks.len(),
        new = navigation::to_new_todo().href(),
    ));
    html.push_str(&filter_controls(search));

    if tasks.is_empty() {
        if search.is_filtered() {
            html.push_str("<p class=\"empty\">No todos match your criteria.</p>");
        } else {
            html.push_str(&format!(
                "<p class=\"empty\">No todos yet. Create your first one!</p>\
                 <a href=\"{}\" class=\"button\">Create First Todo</a>",
                navigation::to_new_todo().href()
            ));
        }
    } else {
        html.push_str("<div class=\"tasks\">");
        for task in tasks {
            html.push_str(&list_item(task));
        }
        html.push_str("</div>");
    }
    section(&html)
}

/// Body of the detail page, with an optional failure banner.
pub fn detail(task: &Task, banner: Option<&str>) -> String {
    let route = AppRoute::TodoDetail(task.id);
    let mut html = breadcrumbs(&route.breadcrumbs());
    if let Some(message) = banner {
        html.push_str(&alert(message, &route.href()));
    }
    let toggle_label = if task.completed {
        "Mark as Pending"
    } else {
        "Mark as Completed"
    };
    html.push_str(&format!(
        "<article class=\"card\"><h3{title_class}>{title}</h3>{badge}\
         <p>{description}</p><p><small>Created: {created}</small></p>\
         <div>{toggle} <a href=\"{edit}\" class=\"button\">Edit</a> {delete}</div></article>\
         <p><a href=\"/back\">&larr; Back</a></p>",
        title_class = title_class(task),
        title = escape(task.title.as_ref()),
        badge = status_badge(task),
        description = escape(&task.description),
        created = created_on(task),
        toggle = action_form(task, "toggle", "detail", toggle_label, "button"),
        edit = navigation::to_edit_todo(task.id).href(),
        delete = action_form(task, "delete", "detail", "Delete", "button danger"),
    ));
    section(&html)
}

/// Values echoed back into the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
}

impl From<&Task> for FormValues {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.to_string(),
            description: task.description.clone(),
        }
    }
}

/// Create/edit form.
pub struct TaskFormView<'a> {
    pub heading: &'a str,
    pub action: String,
    pub submit_label: &'a str,
    pub cancel_href: String,
    pub values: &'a FormValues,
    pub error: Option<&'a str>,
}

impl TaskFormView<'_> {
    pub fn render(&self) -> String {
        let banner = self
            .error
            .map(|message| alert(message, &self.cancel_href))
            .unwrap_or_default();
        section(&format!(
            "<h3>{heading}</h3>{banner}\
             <form method=\"post\" action=\"{action}\" class=\"card\">\
             <p><label for=\"title\">Title *</label><br>\
             <input type=\"text\" id=\"title\" name=\"title\" value=\"{title}\" \
             placeholder=\"Enter todo title...\" required></p>\
             <p><label for=\"description\">Description</label><br>\
             <textarea id=\"description\" name=\"description\" rows=\"4\" \
             placeholder=\"Enter todo description...\">{description}</textarea></p>\
             <button type=\"submit\" class=\"button\">{submit}</button> \
             <a href=\"{cancel}\" class=\"button secondary\">Cancel</a></form>",
            heading = escape(self.heading),
            action = escape(&self.action),
            title = escape(&self.values.title),
            description = escape(&self.values.description),
            submit = escape(self.submit_label),
            cancel = escape(&self.cancel_href),
        ))
    }
}
