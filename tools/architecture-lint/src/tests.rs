//! Unit tests for the architecture lint.

use std::path::PathBuf;

use rstest::rstest;

use super::*;

fn lint_one(file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
    lint_sources(&[LintSource {
        file: PathBuf::from(file),
        contents: contents.to_owned(),
    }])
}

#[rstest]
#[case(
    "inbound/http/pages/todos_list.rs",
    "use crate::routing::TodoListSearch; use crate::domain::Task; fn handler() {}",
    true
)]
#[case(
    "inbound/http/state.rs",
    "use crate::outbound::memory::InMemoryTaskStore; fn state() { let _ = InMemoryTaskStore::empty; }",
    false
)]
#[case(
    "inbound/http/state.rs",
    "use todo_app::outbound::memory::InMemoryTaskStore; fn state() {}",
    false
)]
#[case(
    "inbound/http/pages/mod.rs",
    "use actix_web::HttpResponse; fn ok() { let _ = HttpResponse::Ok(); }",
    true
)]
#[case(
    "routing/loaders.rs",
    "use crate::domain::TaskService; use tokio::sync::Mutex; fn loader() {}",
    true
)]
#[case(
    "routing/navigation.rs",
    "use crate::inbound::http::session::HistorySession; fn go() {}",
    false
)]
#[case(
    "routing/route.rs",
    "fn href() -> actix_web::HttpResponse { actix_web::HttpResponse::Ok().finish() }",
    false
)]
#[case(
    "domain/task.rs",
    "use super::super::routing::AppRoute; fn thing() {}",
    false
)]
#[case(
    "domain/error.rs",
    "use actix_web::ResponseError; struct Error;",
    false
)]
#[case(
    "outbound/memory/task_store.rs",
    "use crate::domain::ports::TaskRepository; use mockable::Clock; struct Store;",
    true
)]
#[case(
    "outbound/memory/task_store.rs",
    "use crate::routing::LoaderCache; struct Store;",
    false
)]
#[case(
    "outbound/memory/task_store.rs",
    "use actix_session::Session; struct Store;",
    false
)]
fn detects_boundary_violations(#[case] file: &str, #[case] contents: &str, #[case] ok: bool) {
    let result = lint_one(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case("domain/task.rs", Some(ModuleLayer::Domain))]
#[case("routing/cache.rs", Some(ModuleLayer::Routing))]
#[case("inbound/http/mod.rs", Some(ModuleLayer::Inbound))]
#[case("outbound/memory/latency.rs", Some(ModuleLayer::Outbound))]
#[case("middleware/trace.rs", None)]
#[case("lib.rs", None)]
fn infers_layer_from_first_component(#[case] file: &str, #[case] expected: Option<ModuleLayer>) {
    assert_eq!(ModuleLayer::infer_from_path(&PathBuf::from(file)), expected);
}

#[rstest]
fn reports_each_message_once_per_file() {
    let result = lint_one(
        "domain/task.rs",
        "use crate::outbound::memory; fn a() { let _ = crate::outbound::memory::seed_tasks(); }",
    );
    let Err(ArchitectureLintError::Violations(violations)) = result else {
        panic!("expected violations, got {result:?}");
    };
    assert_eq!(violations.len(), 1, "{violations:?}");
    assert_eq!(
        violations.first().map(|v| v.message.as_str()),
        Some("domain module must not depend on crate::outbound")
    );
}

#[rstest]
fn files_outside_layers_are_rejected() {
    let result = lint_one("server/mod.rs", "fn main() {}");
    assert!(matches!(result, Err(ArchitectureLintError::Parse { .. })));
}

#[rstest]
#[case(ModuleLayer::Domain, Dependency::Layer(ModuleLayer::Domain), true)]
#[case(ModuleLayer::Domain, Dependency::Crate("chrono"), true)]
#[case(ModuleLayer::Routing, Dependency::Layer(ModuleLayer::Domain), true)]
#[case(ModuleLayer::Routing, Dependency::Layer(ModuleLayer::Inbound), false)]
#[case(ModuleLayer::Inbound, Dependency::Layer(ModuleLayer::Routing), true)]
#[case(ModuleLayer::Inbound, Dependency::Crate("actix_session"), true)]
#[case(ModuleLayer::Outbound, Dependency::Layer(ModuleLayer::Inbound), false)]
#[case(ModuleLayer::Outbound, Dependency::Crate("actix_rt"), false)]
fn layers_permit_their_dependencies(
    #[case] layer: ModuleLayer,
    #[case] dependency: Dependency<'static>,
    #[case] expected: bool,
) {
    assert_eq!(layer.permits(dependency), expected);
}

#[rstest]
#[case(&["crate", "routing", "AppRoute"], Some(Dependency::Layer(ModuleLayer::Routing)))]
#[case(&["super", "super", "outbound"], Some(Dependency::Layer(ModuleLayer::Outbound)))]
#[case(&["todo_app", "domain", "Task"], Some(Dependency::Layer(ModuleLayer::Domain)))]
#[case(&["super", "error", "Error"], None)]
#[case(&["actix_web", "HttpResponse"], Some(Dependency::Crate("actix_web")))]
fn classifies_leading_segments(
    #[case] raw: &[&str],
    #[case] expected: Option<Dependency<'static>>,
) {
    let segments: Vec<String> = raw.iter().map(|segment| (*segment).to_owned()).collect();
    assert_eq!(classify(&segments), expected);
}

#[test]
fn violations_render_one_line_each() {
    let error = ArchitectureLintError::Violations(vec![Violation {
        file: PathBuf::from("domain/task.rs"),
        message: "domain module must not depend on crate::outbound".to_owned(),
    }]);
    assert_eq!(
        error.to_string(),
        "architecture boundary violations:\n\
         - domain/task.rs: domain module must not depend on crate::outbound\n"
    );
}
