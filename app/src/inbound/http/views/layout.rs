//! Document shell: head, navigation header and breadcrumb trail.

use super::escape;
use crate::routing::{AppRoute, Crumb};

/// Top-level navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Todos,
    About,
}

impl Section {
    const ALL: [Self; 3] = [Self::Home, Self::Todos, Self::About];

    fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Todos => "/todos",
            Self::About => "/about",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Todos => "Todos",
            Self::About => "About",
        }
    }
}

/// What the shell needs to know about the page inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub section: Option<Section>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, section: Option<Section>) -> Self {
        Self {
            title: title.into(),
            section,
        }
    }
}

impl From<&AppRoute> for PageMeta {
    fn from(route: &AppRoute) -> Self {
        let section = match route {
            AppRoute::Home => Some(Section::Home),
            AppRoute::About => Some(Section::About),
            AppRoute::TodoList(_)
            | AppRoute::NewTodo
            | AppRoute::TodoDetail(_)
            | AppRoute::EditTodo(_) => Some(Section::Todos),
            AppRoute::NotFound | AppRoute::ErrorTest => None,
        };
        Self::new(route.title(), section)
    }
}

const STYLES: &str = "\
body{margin:0;font-family:system-ui,sans-serif;color:#111827}\
header{background:#2563eb;color:#fff}\
header .bar{max-width:72rem;margin:0 auto;padding:1rem;display:flex;justify-content:space-between}\
header a{color:#fff;text-decoration:none}\
header nav a{margin-left:1.5rem}\
header nav a.active{font-weight:bold;color:#dbeafe}\
main{max-width:72rem;margin:0 auto;padding:2rem 1rem}\
.crumbs{list-style:none;display:flex;gap:.5rem;padding:0;color:#6b7280;font-size:.875rem}\
.card{border:1px solid #e5e7eb;border-radius:.5rem;padding:1.5rem;margin-bottom:1rem}\
.badge{padding:.25rem .5rem;border-radius:.25rem;font-size:.75rem}\
.badge.done{background:#dcfce7;color:#166534}\
.badge.open{background:#fef9c3;color:#854d0e}\
.done-title{text-decoration:line-through;color:#6b7280}\
.alert{background:#fef2f2;border:1px solid #fecaca;color:#991b1b;padding:1rem;border-radius:.5rem;margin-bottom:1.5rem}\
.button{display:inline-block;background:#2563eb;color:#fff;padding:.5rem 1rem;border:0;border-radius:.25rem;text-decoration:none;cursor:pointer}\
.button.secondary{background:#f3f4f6;color:#374151}\
.button.danger{background:#dc2626}\
.filters{background:#f9fafb;padding:1rem;border-radius:.5rem;margin-bottom:1.5rem}\
.filters a.current{background:#2563eb;color:#fff}\
.skeleton div{background:#e5e7eb;border-radius:.25rem;height:1rem;margin-bottom:.5rem}\
form.inline{display:inline}";

/// Opening half of a document, up to and including `<main>`.
pub fn open(meta: &PageMeta) -> String {
    let nav: String = Section::ALL
        .into_iter()
        .map(|section| {
            let class = if meta.section == Some(section) {
                " class=\"active\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\"{class}>{}</a>",
                section.href(),
                section.label()
            )
        })
        .collect();
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title><style>{STYLES}</style></head><body>\
         <header><div class=\"bar\"><a href=\"/\"><strong>Todo App</strong></a>\
         <nav>{nav}</nav></div></header><main>",
        title = escape(&meta.title),
    )
}

/// Closing half of a document.
pub fn close() -> &'static str {
    "</main></body></html>"
}

/// A complete document around `body`.
pub fn page(meta: &PageMeta, body: &str) -> String {
    let mut doc = open(meta);
    doc.push_str(body);
    doc.push_str(close());
    doc
}

/// "Home / …" trail; the last crumb is the current page and is not a link.
/// Renders nothing for an empty trail.
pub fn breadcrumbs(crumbs: &[Crumb]) -> String {
    let Some((current, parents)) = crumbs.split_last() else {
        return String::new();
    };
    let mut items = String::from("<li><a href=\"/\">Home</a></li>");
    for crumb in parents {
        items.push_str(&format!(
            "<li>/</li><li><a href=\"{}\">{}</a></li>",
            escape(&crumb.href),
            escape(&crumb.label)
        ));
    }
    items.push_str(&format!(
        "<li>/</li><li><strong>{}</strong></li>",
        escape(&current.label)
    ));
    format!("<nav aria-label=\"breadcrumb\"><ol class=\"crumbs\">{items}</ol></nav>")
}
