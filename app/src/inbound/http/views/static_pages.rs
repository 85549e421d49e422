//! Pages without data.

pub fn home() -> &'static str {
    "<h2>Welcome to Todo App</h2>\
     <p>This is a demo application showcasing typed routing with data loaders. \
     Navigate to the Todos section to start managing your tasks!</p>"
}

pub fn about() -> &'static str {
    "<h2>About This App</h2>\
     <p>This Todo application demonstrates the features of its routing layer:</p>\
     <ul>\
     <li>Typed routes with validated search parameters</li>\
     <li>Nested layouts with breadcrumbs</li>\
     <li>Built-in data loading and caching</li>\
     <li>Error boundaries and 404 handling</li>\
     <li>Pending states for slow loaders</li>\
     </ul>"
}

/// Three ways to exercise the error handling.
pub fn error_test() -> &'static str {
    "<section><h2>Error Boundary Testing</h2>\
     <p>This page helps test the error handling capabilities of our Todo app.</p>\
     <p><a href=\"/error-test?trigger=render\" class=\"button danger\">Trigger Component Error</a></p>\
     <p><a href=\"/todos/99999\" class=\"button\">Trigger Loader Error</a></p>\
     <p><a href=\"/non-existent-route\" class=\"button secondary\">Trigger 404 Error</a></p>\
     </section>"
}
