use roofmap_entities::{anchor::AnchorPoint, category::Category, record::LocationRecord};

use crate::{
    focus::MapFocus,
    gateways::{MapSurface, Scheduler},
    state::SelectionState,
};

/// Keeps the selection state and the map focus in sync.
pub struct SelectionController<M, S>
where
    S: Scheduler,
{
    state: SelectionState,
    focus: MapFocus<M, S>,
}

impl<M, S> SelectionController<M, S>
where
    M: MapSurface + Clone + 'static,
    S: Scheduler,
{
    pub const fn new(focus: MapFocus<M, S>) -> Self {
        Self {
            state: SelectionState::new(),
            focus,
        }
    }

    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.update_state(|s| s.set_category(category));
    }

    pub fn set_category_name(&mut self, name: &str) {
        self.update_state(|s| s.set_category_name(name));
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.update_state(|s| s.toggle_category(category));
    }

    /// Selects `record` and focuses its marker on the map.
    pub fn select_record(&mut self, record: &LocationRecord) {
        self.state.select_record(record);
        self.focus.focus_record(record);
    }

    pub fn clear_selection(&mut self) {
        self.update_state(SelectionState::clear_selection);
    }

    /// The anchor is not a record: only the camera moves.
    pub fn focus_anchor(&self, anchor: &AnchorPoint) {
        self.focus.focus_point(anchor.pos);
    }

    fn update_state(&mut self, update: impl FnOnce(&mut SelectionState)) {
        let was_selected = self.state.active_record().is_some();
        update(&mut self.state);
        if was_selected && self.state.active_record().is_none() {
            self.focus.cancel_pending_popup();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{state::Phase, store::RecordStore, tests::*};
    use roofmap_entities::{builders::*, geo::MapPoint};

    fn controller() -> (
        SelectionController<RecordingSurface, ManualScheduler>,
        RecordingSurface,
        ManualScheduler,
    ) {
        let surface = RecordingSurface::default();
        let scheduler = ManualScheduler::default();
        let focus = MapFocus::new(
            surface.clone(),
            scheduler.clone(),
            Duration::from_millis(300),
        );
        (SelectionController::new(focus), surface, scheduler)
    }

    #[test]
    fn select_single_koda_record() {
        let koda = LocationRecord::build()
            .id("koda-1")
            .category(Category::Koda)
            .pos(MapPoint::from_lat_lng_deg(50.843, 16.491))
            .finish();
        let store = RecordStore::try_new(vec![koda.clone()]).unwrap();
        let (mut ctrl, surface, scheduler) = controller();

        ctrl.set_category_name("KODA");
        assert_eq!(store.filtered(ctrl.state().active_category()), [&koda]);

        ctrl.select_record(&koda);
        assert_eq!(ctrl.state().active_category(), Some(Category::Koda));
        assert_eq!(ctrl.state().active_record(), Some(&koda));
        assert!(surface
            .commands()
            .contains(&MapCommand::PanTo(MapPoint::from_lat_lng_deg(50.843, 16.491))));

        scheduler.run_pending();
        assert_eq!(
            surface.commands().last(),
            Some(&MapCommand::OpenPopup("koda-1".into()))
        );
    }

    #[test]
    fn selecting_a_hidden_record_makes_it_visible() {
        let records = roofs();
        let store = RecordStore::try_new(records.clone()).unwrap();
        let (mut ctrl, _, _) = controller();
        ctrl.set_category(Some(Category::Koda));

        let titania = &records[1];
        ctrl.select_record(titania);
        let visible = store.filtered(ctrl.state().active_category());
        assert!(visible.contains(&titania));
        assert_eq!(ctrl.state().phase(), Phase::CategoryWithSelection);
    }

    #[test]
    fn switching_category_cancels_popup_of_cleared_selection() {
        let records = roofs();
        let (mut ctrl, surface, scheduler) = controller();
        ctrl.select_record(&records[0]);
        ctrl.set_category(Some(Category::Premion));
        assert_eq!(ctrl.state().active_record(), None);

        scheduler.run_pending();
        assert!(!surface
            .commands()
            .iter()
            .any(|c| matches!(c, MapCommand::OpenPopup(_))));
    }

    #[test]
    fn keeping_the_category_keeps_the_popup() {
        let records = roofs();
        let (mut ctrl, surface, scheduler) = controller();
        ctrl.select_record(&records[0]);
        ctrl.set_category(Some(Category::Koda));
        scheduler.run_pending();
        assert_eq!(
            surface.commands().last(),
            Some(&MapCommand::OpenPopup(records[0].id.clone()))
        );
    }

    #[test]
    fn toggle_and_clear() {
        let records = roofs();
        let (mut ctrl, _, scheduler) = controller();

        ctrl.toggle_category(Category::Titania);
        assert_eq!(ctrl.state().phase(), Phase::CategoryWithoutSelection);

        ctrl.select_record(&records[1]);
        ctrl.clear_selection();
        assert_eq!(ctrl.state().phase(), Phase::CategoryWithoutSelection);
        assert_eq!(ctrl.state().active_category(), Some(Category::Titania));
        assert_eq!(scheduler.pending(), 0);

        ctrl.toggle_category(Category::Titania);
        assert_eq!(ctrl.state().phase(), Phase::NoCategory);
    }

    #[test]
    fn anchor_click_does_not_touch_the_selection() {
        let records = roofs();
        let anchor = crate::settings::MapSettings::default().anchor;
        let (mut ctrl, surface, scheduler) = controller();
        ctrl.select_record(&records[3]);
        let before = ctrl.state().clone();

        ctrl.focus_anchor(&anchor);
        assert_eq!(ctrl.state(), &before);
        assert_eq!(surface.commands().last(), Some(&MapCommand::PanTo(anchor.pos)));
        assert_eq!(scheduler.delays().len(), 1);
    }
}
