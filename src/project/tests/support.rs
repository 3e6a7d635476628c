//! Shared test doubles for project board unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::project::{
    domain::{Project, ProjectId, ProjectSnapshot},
    ports::{ListDescriptor, ListRenderer, MountHandle, ProjectObserver, RenderError, RenderResult},
};

mockall::mock! {
    pub Observer {}

    impl ProjectObserver for Observer {
        fn on_projects_changed(&self, snapshot: ProjectSnapshot);
    }
}

/// Clock that advances one second on every reading.
pub struct SteppingClock {
    next_second: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(second: i64) -> Self {
        Self {
            next_second: AtomicI64::new(second),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let second = self.next_second.fetch_add(1, Ordering::SeqCst);
        Utc.timestamp_opt(second, 0)
            .single()
            .expect("test timestamps are in range")
    }
}

/// Renderer that records every mount and render call.
#[derive(Default)]
pub struct RecordingRenderer {
    mounts: Mutex<Vec<ListDescriptor>>,
    renders: Mutex<Vec<(MountHandle, Vec<ProjectId>)>>,
    failing: AtomicBool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_renders(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn mounts(&self) -> Vec<ListDescriptor> {
        self.mounts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn renders_for(&self, handle: MountHandle) -> Vec<Vec<ProjectId>> {
        self.renders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(rendered, _)| *rendered == handle)
            .map(|(_, ids)| ids.clone())
            .collect()
    }
}

impl ListRenderer for RecordingRenderer {
    fn mount(&self, list: &ListDescriptor) -> RenderResult<MountHandle> {
        let mut mounts = self.mounts.lock().unwrap_or_else(PoisonError::into_inner);
        let handle = MountHandle::new(mounts.len());
        mounts.push(list.clone());
        Ok(handle)
    }

    fn render(&self, handle: MountHandle, projects: &[Project]) -> RenderResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RenderError::Template {
                template: "recording".to_owned(),
                reason: "render failure requested".to_owned(),
            });
        }
        self.renders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((handle, projects.iter().map(Project::id).collect()));
        Ok(())
    }
}

/// Returns the people count used by most tests.
pub fn people(value: u32) -> crate::project::domain::PeopleCount {
    crate::project::domain::PeopleCount::new(value).expect("positive people count")
}
