//! Text renderer backed by `minijinja` templates.

use minijinja::{Environment, context};
use std::sync::{PoisonError, RwLock};

use crate::project::{
    domain::Project,
    ports::{ListDescriptor, ListRenderer, MountHandle, RenderError, RenderResult},
};

const PROJECT_LIST_TEMPLATE_NAME: &str = "project-list";
const SINGLE_PROJECT_TEMPLATE_NAME: &str = "single-project";

const PROJECT_LIST_TEMPLATE: &str = "\
== {{ heading }} [{{ list_id }}] ==
{%- for project in projects %}
{% include \"single-project\" %}
{%- else %}
  (no projects)
{%- endfor %}
";

const SINGLE_PROJECT_TEMPLATE: &str = concat!(
    "  * {{ project.title }} ",
    "({{ project.people }} {{ \"person\" if project.people == 1 else \"people\" }}) ",
    "#{{ project.id }}\n",
    "    {{ project.description }}",
);

/// Renderer that keeps one text block per mounted list.
///
/// Each render replaces the mounted block entirely; the renderer keeps no
/// per-item state between renders.
pub struct TemplateRenderer {
    environment: Environment<'static>,
    mounts: RwLock<Vec<MountedList>>,
}

#[derive(Debug)]
struct MountedList {
    descriptor: ListDescriptor,
    output: String,
}

impl TemplateRenderer {
    /// Creates a renderer with the built-in list templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if a built-in template fails to
    /// compile.
    pub fn new() -> RenderResult<Self> {
        let mut environment = Environment::new();
        for (name, source) in [
            (PROJECT_LIST_TEMPLATE_NAME, PROJECT_LIST_TEMPLATE),
            (SINGLE_PROJECT_TEMPLATE_NAME, SINGLE_PROJECT_TEMPLATE),
        ] {
            environment
                .add_template(name, source)
                .map_err(|error| template_error(name, &error))?;
        }
        Ok(Self {
            environment,
            mounts: RwLock::new(Vec::new()),
        })
    }

    /// Returns the latest output of a mounted list.
    #[must_use]
    pub fn output(&self, handle: MountHandle) -> Option<String> {
        self.mounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(handle.slot())
            .map(|mounted| mounted.output.clone())
    }

    /// Returns the descriptor a list was mounted with.
    #[must_use]
    pub fn descriptor(&self, handle: MountHandle) -> Option<ListDescriptor> {
        self.mounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(handle.slot())
            .map(|mounted| mounted.descriptor.clone())
    }

    fn render_list(&self, list: &ListDescriptor, projects: &[Project]) -> RenderResult<String> {
        let template = self
            .environment
            .get_template(PROJECT_LIST_TEMPLATE_NAME)
            .map_err(|error| template_error(PROJECT_LIST_TEMPLATE_NAME, &error))?;
        template
            .render(context! {
                element_id => &list.element_id,
                list_id => &list.list_id,
                heading => &list.heading,
                projects => projects,
            })
            .map_err(|error| template_error(PROJECT_LIST_TEMPLATE_NAME, &error))
    }
}

impl ListRenderer for TemplateRenderer {
    fn mount(&self, list: &ListDescriptor) -> RenderResult<MountHandle> {
        let output = self.render_list(list, &[])?;
        let mut mounts = self.mounts.write().unwrap_or_else(PoisonError::into_inner);
        let handle = MountHandle::new(mounts.len());
        mounts.push(MountedList {
            descriptor: list.clone(),
            output,
        });
        Ok(handle)
    }

    fn render(&self, handle: MountHandle, projects: &[Project]) -> RenderResult<()> {
        let descriptor = self
            .descriptor(handle)
            .ok_or(RenderError::UnknownHandle(handle))?;
        let output = self.render_list(&descriptor, projects)?;
        let mut mounts = self.mounts.write().unwrap_or_else(PoisonError::into_inner);
        let mounted = mounts
            .get_mut(handle.slot())
            .ok_or(RenderError::UnknownHandle(handle))?;
        mounted.output = output;
        Ok(())
    }
}

fn template_error(template: &str, error: &minijinja::Error) -> RenderError {
    RenderError::Template {
        template: template.to_owned(),
        reason: error.to_string(),
    }
}
