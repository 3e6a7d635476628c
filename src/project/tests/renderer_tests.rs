//! Tests for the template-backed list renderer.

use super::support::{SteppingClock, people};
use crate::project::{
    adapters::template::TemplateRenderer,
    domain::{NewProject, Project, ProjectId, ProjectStatus},
    ports::{ListDescriptor, ListRenderer, MountHandle, RenderError},
};
use rstest::{fixture, rstest};

#[fixture]
fn renderer() -> TemplateRenderer {
    TemplateRenderer::new().expect("built-in templates compile")
}

fn project(title: &str, count: u32, description: &str) -> Project {
    let clock = SteppingClock::starting_at(1_700_000_000);
    Project::open(
        ProjectId::new(),
        NewProject::new(title, people(count), description),
        &clock,
    )
}

#[rstest]
#[case(ProjectStatus::Open, "active-projects", "active-projects-list", "ACTIVE PROJECTS")]
#[case(
    ProjectStatus::Closed,
    "finished-projects",
    "finished-projects-list",
    "FINISHED PROJECTS"
)]
fn descriptors_follow_status_slug(
    #[case] status: ProjectStatus,
    #[case] element_id: &str,
    #[case] list_id: &str,
    #[case] heading: &str,
) {
    let descriptor = ListDescriptor::for_status(status);

    assert_eq!(descriptor.element_id, element_id);
    assert_eq!(descriptor.list_id, list_id);
    assert_eq!(descriptor.heading, heading);
}

#[rstest]
fn mount_renders_an_empty_list(renderer: TemplateRenderer) {
    let handle = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Open))
        .expect("mount succeeds");

    let output = renderer.output(handle).expect("mounted output");
    assert!(output.starts_with("== ACTIVE PROJECTS [active-projects-list] =="));
    assert!(output.contains("(no projects)"));
}

#[rstest]
fn mounts_receive_distinct_handles(renderer: TemplateRenderer) {
    let active = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Open))
        .expect("mount active");
    let finished = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Closed))
        .expect("mount finished");

    assert_ne!(active, finished);
    assert_eq!(
        renderer.descriptor(finished),
        Some(ListDescriptor::for_status(ProjectStatus::Closed))
    );
}

#[rstest]
fn render_lists_every_project_in_order(renderer: TemplateRenderer) {
    let handle = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Open))
        .expect("mount succeeds");
    let first = project("Build API", 3, "REST service");
    let second = project("Ship docs", 1, "Write the guide");

    renderer
        .render(handle, &[first.clone(), second.clone()])
        .expect("render succeeds");

    let output = renderer.output(handle).expect("rendered output");
    let first_line = format!("  * Build API (3 people) #{}", first.id());
    let second_line = format!("  * Ship docs (1 person) #{}", second.id());
    let first_at = output.find(&first_line).expect("first project listed");
    let second_at = output.find(&second_line).expect("second project listed");
    assert!(first_at < second_at);
    assert!(output.contains("    REST service"));
    assert!(!output.contains("(no projects)"));
}

#[rstest]
fn items_are_indented_under_the_heading(renderer: TemplateRenderer) {
    let handle = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Open))
        .expect("mount succeeds");
    let first = project("Build API", 3, "REST service");
    let second = project("Ship docs", 1, "Write the guide");

    renderer
        .render(handle, &[first.clone(), second.clone()])
        .expect("render succeeds");

    let output = renderer.output(handle).expect("rendered output");
    let expected = format!(
        "== ACTIVE PROJECTS [active-projects-list] ==\n  \
         * Build API (3 people) #{}\n    REST service\n  \
         * Ship docs (1 person) #{}\n    Write the guide",
        first.id(),
        second.id()
    );
    assert_eq!(output.trim_end(), expected);
}

#[rstest]
fn render_replaces_previous_output(renderer: TemplateRenderer) {
    let handle = renderer
        .mount(&ListDescriptor::for_status(ProjectStatus::Closed))
        .expect("mount succeeds");
    renderer
        .render(handle, &[project("Old", 2, "Previous render")])
        .expect("first render");

    renderer.render(handle, &[]).expect("second render");

    let output = renderer.output(handle).expect("rendered output");
    assert!(!output.contains("Old"));
    assert!(output.contains("(no projects)"));
}

#[rstest]
fn render_rejects_unknown_handles(renderer: TemplateRenderer) {
    let stray = MountHandle::new(7);

    let result = renderer.render(stray, &[]);

    assert_eq!(result, Err(RenderError::UnknownHandle(stray)));
    assert_eq!(renderer.output(stray), None);
}
