//! Test doubles and fixtures.

use std::{cell::RefCell, rc::Rc, time::Duration};

use roofmap_entities::{builders::*, category::Category, geo::MapPoint, id::Id, record::*};

use crate::gateways::{MapSurface, Scheduler, Task, TaskHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    PanTo(MapPoint),
    OpenPopup(Id),
    CloseAllPopups,
}

/// Records every command in the order it was issued.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Rc<RefCell<Vec<MapCommand>>>,
}

impl RecordingSurface {
    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands.borrow().clone()
    }
}

impl MapSurface for RecordingSurface {
    fn pan_to(&self, pos: MapPoint) {
        self.commands.borrow_mut().push(MapCommand::PanTo(pos));
    }
    fn open_popup(&self, id: &Id) {
        self.commands
            .borrow_mut()
            .push(MapCommand::OpenPopup(id.clone()));
    }
    fn close_all_popups(&self) {
        self.commands.borrow_mut().push(MapCommand::CloseAllPopups);
    }
}

struct ScheduledTask {
    delay: Duration,
    task: Option<Task>,
}

type TaskQueue = Rc<RefCell<Vec<ScheduledTask>>>;

/// Collects tasks until they are run explicitly.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: TaskQueue,
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|t| t.delay).collect()
    }

    /// Number of tasks that are neither cancelled nor done.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|t| t.task.is_some())
            .count()
    }

    pub fn run_pending(&self) {
        let tasks: Vec<_> = self
            .queue
            .borrow_mut()
            .iter_mut()
            .filter_map(|t| t.task.take())
            .collect();
        for task in tasks {
            task();
        }
    }
}

pub struct ManualHandle {
    index: usize,
    queue: TaskQueue,
}

impl TaskHandle for ManualHandle {
    fn cancel(self) {
        if let Some(t) = self.queue.borrow_mut().get_mut(self.index) {
            t.task = None;
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;
    fn schedule(&self, delay: Duration, task: Task) -> Option<ManualHandle> {
        let mut queue = self.queue.borrow_mut();
        queue.push(ScheduledTask {
            delay,
            task: Some(task),
        });
        Some(ManualHandle {
            index: queue.len() - 1,
            queue: Rc::clone(&self.queue),
        })
    }
}

/// A scheduler without a timer.
pub struct RefusingScheduler;

pub struct NoHandle;

impl TaskHandle for NoHandle {
    fn cancel(self) {}
}

impl Scheduler for RefusingScheduler {
    type Handle = NoHandle;
    fn schedule(&self, _: Duration, _: Task) -> Option<NoHandle> {
        None
    }
}

fn roof(id: &str, category: Category, lat: f64, lng: f64) -> LocationRecord {
    LocationRecord::build()
        .id(id)
        .name(&format!("Dom {id}"))
        .address(&format!("{id}, 59-300 Lubin"))
        .category(category)
        .pos(MapPoint::from_lat_lng_deg(lat, lng))
        .images(vec!["/roof1.png", "/roof2.png"])
        .finish()
}

/// Records of mixed categories in a non-grouped order.
pub fn roofs() -> Vec<LocationRecord> {
    vec![
        roof("koda-1", Category::Koda, 50.843, 16.491),
        roof("titania-1", Category::Titania, 50.846, 16.495),
        roof("koda-2", Category::Koda, 51.3878, 16.1985),
        roof("premion-1", Category::Premion, 51.3429, 16.1503),
        roof("koda-3", Category::Koda, 51.4225, 16.1961),
    ]
}
