use std::time::Duration;

use roofmap_entities::{geo::MapPoint, record::LocationRecord};

use crate::gateways::{MapSurface, Scheduler, TaskHandle};

/// Moves the map to a selected record and opens its popup.
///
/// The popup is opened with a delay so that the pan animation is already
/// running when the popup appears. At most one popup is pending: it is
/// cancelled by the next focus change or when this value is dropped.
pub struct MapFocus<M, S>
where
    S: Scheduler,
{
    surface: M,
    scheduler: S,
    popup_delay: Duration,
    pending_popup: Option<S::Handle>,
}

impl<M, S> MapFocus<M, S>
where
    M: MapSurface + Clone + 'static,
    S: Scheduler,
{
    pub const fn new(surface: M, scheduler: S, popup_delay: Duration) -> Self {
        Self {
            surface,
            scheduler,
            popup_delay,
            pending_popup: None,
        }
    }

    pub const fn surface(&self) -> &M {
        &self.surface
    }

    pub const fn has_pending_popup(&self) -> bool {
        self.pending_popup.is_some()
    }

    pub fn focus_record(&mut self, record: &LocationRecord) {
        self.cancel_pending_popup();
        self.surface.close_all_popups();
        self.surface.pan_to(record.pos);
        let surface = self.surface.clone();
        let id = record.id.clone();
        self.pending_popup = self.scheduler.schedule(
            self.popup_delay,
            Box::new(move || surface.open_popup(&id)),
        );
        if self.pending_popup.is_none() {
            log::warn!("Unable to schedule popup of record {}", record.id);
        }
    }

    /// Only moves the camera, no popup is involved.
    pub fn focus_point(&self, pos: MapPoint) {
        self.surface.pan_to(pos);
    }

    pub fn cancel_pending_popup(&mut self) {
        if let Some(handle) = self.pending_popup.take() {
            log::trace!("Cancel pending popup");
            handle.cancel();
        }
    }
}

impl<M, S> Drop for MapFocus<M, S>
where
    S: Scheduler,
{
    fn drop(&mut self) {
        if let Some(handle) = self.pending_popup.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn pan_first_then_open_popup_delayed() {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let mut focus = MapFocus::new(surface.clone(), scheduler.clone(), DELAY);
        let records = roofs();
        let record = &records[0];

        focus.focus_record(record);
        assert_eq!(
            surface.commands(),
            [MapCommand::CloseAllPopups, MapCommand::PanTo(record.pos)]
        );
        assert_eq!(scheduler.delays(), [DELAY]);

        scheduler.run_pending();
        assert_eq!(
            surface.commands(),
            [
                MapCommand::CloseAllPopups,
                MapCommand::PanTo(record.pos),
                MapCommand::OpenPopup(record.id.clone()),
            ]
        );
    }

    #[test]
    fn next_focus_cancels_pending_popup() {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let mut focus = MapFocus::new(surface.clone(), scheduler.clone(), DELAY);
        let records = roofs();

        focus.focus_record(&records[0]);
        focus.focus_record(&records[1]);
        assert_eq!(scheduler.pending(), 1);
        scheduler.run_pending();

        let opened: Vec<_> = surface
            .commands()
            .into_iter()
            .filter(|c| matches!(c, MapCommand::OpenPopup(_)))
            .collect();
        assert_eq!(opened, [MapCommand::OpenPopup(records[1].id.clone())]);
    }

    #[test]
    fn dropping_cancels_pending_popup() {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let mut focus = MapFocus::new(surface.clone(), scheduler.clone(), DELAY);
        focus.focus_record(&roofs()[0]);
        assert!(focus.has_pending_popup());
        drop(focus);
        assert_eq!(scheduler.pending(), 0);
        scheduler.run_pending();
        assert!(!surface
            .commands()
            .iter()
            .any(|c| matches!(c, MapCommand::OpenPopup(_))));
    }

    #[test]
    fn focus_point_only_pans() {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let focus = MapFocus::new(surface.clone(), scheduler.clone(), DELAY);
        let pos = MapPoint::from_lat_lng_deg(51.39, 16.19);
        focus.focus_point(pos);
        assert_eq!(surface.commands(), [MapCommand::PanTo(pos)]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn failed_scheduling_still_pans() {
        let surface = RecordingSurface::default();
        let mut focus = MapFocus::new(surface.clone(), RefusingScheduler, DELAY);
        let records = roofs();
        let record = &records[2];
        focus.focus_record(record);
        assert!(!focus.has_pending_popup());
        assert_eq!(
            surface.commands(),
            [MapCommand::CloseAllPopups, MapCommand::PanTo(record.pos)]
        );
    }
}
