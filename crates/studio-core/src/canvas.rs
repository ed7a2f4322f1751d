//! The overlay canvas editor: ordered widgets, selection, and drag handling.

use kurbo::{Point, Vec2};

use crate::config::{FormInputPolicy, StudioConfig};
use crate::error::{StudioError, StudioResult};
use crate::geometry::{CanvasViewport, MIN_WIDGET_SIZE, RectField, WidgetRect};
use crate::input::PointerCapture;
use crate::selection::{DragSession, apply_manipulation};
use crate::widget::{Corner, SettingsPatch, Widget, WidgetId, WidgetKind, hit_test_handle};

/// Where newly added widgets are placed.
#[derive(Debug, Clone, Copy)]
struct Placement {
    origin: (i32, i32),
    size: (i32, i32),
    stagger: i32,
}

/// Editing state for one canvas of widgets.
#[derive(Debug)]
pub struct CanvasEditor {
    /// Widgets back to front.
    widgets: Vec<Widget>,
    selected: Option<WidgetId>,
    capture: PointerCapture,
    drag: Option<DragSession>,
    placement: Placement,
    form_policy: FormInputPolicy,
}

impl CanvasEditor {
    /// Create an empty editor.
    pub fn new(config: &StudioConfig) -> Self {
        Self {
            widgets: Vec::new(),
            selected: None,
            capture: PointerCapture::new(),
            drag: None,
            placement: Placement {
                origin: config.new_widget_origin,
                size: config.new_widget_size,
                stagger: config.new_widget_stagger,
            },
            form_policy: config.form_input_policy,
        }
    }

    /// Create an editor holding `widgets`.
    pub fn with_widgets(config: &StudioConfig, widgets: Vec<Widget>) -> Self {
        let mut editor = Self::new(config);
        editor.widgets = widgets;
        editor
    }

    /// Widgets in paint order (back to front).
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn widget_mut(&mut self, id: WidgetId) -> StudioResult<&mut Widget> {
        self.widgets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(StudioError::UnknownWidget(id))
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Copy of the current widget list (for flushing into a preset).
    pub fn snapshot(&self) -> Vec<Widget> {
        self.widgets.clone()
    }

    /// Replace the whole widget list. Ends any drag and clears selection.
    pub fn replace_widgets(&mut self, widgets: Vec<Widget>) {
        self.end_drag();
        self.widgets = widgets;
        self.selected = None;
    }

    // --- Selection ---

    pub fn selected_id(&self) -> Option<WidgetId> {
        self.selected
    }

    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected.and_then(|id| self.widget(id))
    }

    pub fn select(&mut self, id: WidgetId) -> StudioResult<()> {
        if self.widget(id).is_none() {
            return Err(StudioError::UnknownWidget(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Select a widget, keeping the current selection if `id` is unknown.
    pub fn set_selected(&mut self, id: Option<WidgetId>) {
        match id {
            Some(id) if self.widget(id).is_some() => self.selected = Some(id),
            Some(_) => {}
            None => self.selected = None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// A click on empty canvas background.
    pub fn background_click(&mut self) {
        self.clear_selection();
    }

    // --- Widget list ---

    /// Append a new widget of `kind` and select it.
    pub fn add_widget(&mut self, kind: WidgetKind) -> WidgetId {
        let offset = self.placement.stagger * self.widgets.len() as i32;
        let rect = WidgetRect::new(
            self.placement.origin.0 + offset,
            self.placement.origin.1 + offset,
            self.placement.size.0,
            self.placement.size.1,
        );
        let widget = Widget::new(kind, rect);
        let id = widget.id;
        log::debug!("Added {:?} widget {} at {:?}", kind, id, rect);
        self.widgets.push(widget);
        self.selected = Some(id);
        id
    }

    /// Remove a widget. Clears the selection if it was selected.
    pub fn delete_widget(&mut self, id: WidgetId) -> StudioResult<Widget> {
        let index = self
            .widgets
            .iter()
            .position(|w| w.id == id)
            .ok_or(StudioError::UnknownWidget(id))?;
        if self.drag.as_ref().is_some_and(|d| d.widget_id == id) {
            self.end_drag();
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.widgets.remove(index))
    }

    /// Flip visibility. Returns the new value.
    pub fn toggle_visible(&mut self, id: WidgetId) -> StudioResult<bool> {
        let widget = self.widget_mut(id)?;
        widget.visible = !widget.visible;
        Ok(widget.visible)
    }

    pub fn update_settings(&mut self, id: WidgetId, patch: SettingsPatch) -> StudioResult<()> {
        self.widget_mut(id)?.settings.apply(patch)
    }

    /// Set one geometry field as typed into the properties form.
    ///
    /// Under [`FormInputPolicy::Clamp`] width and height are floored at
    /// `MIN_WIDGET_SIZE`, matching interactive resize.
    pub fn set_rect_field(&mut self, id: WidgetId, field: RectField, value: i32) -> StudioResult<WidgetRect> {
        let value = match self.form_policy {
            FormInputPolicy::Clamp if field.is_size() => value.max(MIN_WIDGET_SIZE),
            _ => value,
        };
        let widget = self.widget_mut(id)?;
        widget.rect = widget.rect.with(field, value);
        Ok(widget.rect)
    }

    /// Move a widget by a delta in virtual units.
    pub fn move_by(&mut self, id: WidgetId, delta: Vec2) -> StudioResult<WidgetRect> {
        let widget = self.widget_mut(id)?;
        widget.rect = apply_manipulation(widget.rect, None, delta);
        Ok(widget.rect)
    }

    /// Resize a widget from a corner by a delta in virtual units.
    pub fn resize_by(&mut self, id: WidgetId, corner: Corner, delta: Vec2) -> StudioResult<WidgetRect> {
        let widget = self.widget_mut(id)?;
        widget.rect = apply_manipulation(widget.rect, Some(corner), delta);
        Ok(widget.rect)
    }

    // --- Hit testing ---

    /// Topmost visible widget under a virtual-space point.
    ///
    /// The selected widget is drawn above the others, so it wins.
    pub fn widget_at(&self, point: Point) -> Option<WidgetId> {
        let hit = |w: &&Widget| w.visible && w.rect.contains(point);
        self.selected_widget()
            .filter(hit)
            .or_else(|| self.widgets.iter().rev().find(hit))
            .map(|w| w.id)
    }

    /// Visible widgets in paint order, with the selected one last.
    pub fn paint_order(&self) -> impl Iterator<Item = &Widget> {
        let selected = self.selected;
        self.widgets
            .iter()
            .filter(move |w| w.visible && Some(w.id) != selected)
            .chain(self.selected_widget().filter(|w| w.visible))
    }

    /// Resize handle of the selected widget under a screen point.
    pub fn handle_at(&self, screen_point: Point, viewport: &CanvasViewport, tolerance_px: f64) -> Option<Corner> {
        let widget = self.selected_widget()?;
        let scale = viewport.scale();
        hit_test_handle(
            widget.rect,
            viewport.screen_to_virtual(screen_point),
            tolerance_px * scale.x,
            tolerance_px * scale.y,
        )
    }

    // --- Dragging ---

    /// Start a move (no handle) or resize on `id`, selecting it.
    ///
    /// The canvas scale is measured once from `viewport` here and used for
    /// the rest of the gesture.
    pub fn begin_drag(
        &mut self,
        id: WidgetId,
        handle: Option<Corner>,
        pointer: Point,
        viewport: &CanvasViewport,
    ) -> StudioResult<()> {
        let original = self.widget(id).ok_or(StudioError::UnknownWidget(id))?.rect;
        self.selected = Some(id);
        // Release any previous gesture before capturing for the new one.
        self.drag = None;
        let guard = self.capture.acquire(id);
        self.drag = Some(DragSession::new(id, handle, pointer, viewport, original, guard));
        log::debug!("Drag started on {} with handle {:?}", id, handle);
        Ok(())
    }

    /// Update the dragged widget for a pointer at `pointer` (screen pixels).
    pub fn drag_to(&mut self, pointer: Point) -> StudioResult<WidgetRect> {
        let session = self.drag.as_ref().ok_or(StudioError::NoActiveDrag)?;
        let id = session.widget_id;
        let rect = session.geometry_at(pointer);
        self.widget_mut(id)?.rect = rect;
        Ok(rect)
    }

    /// Finish the current drag, releasing the pointer capture.
    ///
    /// Returns the committed geometry, if a drag was active.
    pub fn end_drag(&mut self) -> Option<WidgetRect> {
        let session = self.drag.take()?;
        let rect = self.widget(session.widget_id).map(|w| w.rect);
        log::debug!("Drag ended on {} at {:?}", session.widget_id, rect);
        rect
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// The capture shared with the view while a drag is active.
    pub fn capture(&self) -> &PointerCapture {
        &self.capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    fn editor() -> CanvasEditor {
        CanvasEditor::new(&StudioConfig::default())
    }

    #[test]
    fn test_add_widget_staggers_and_selects() {
        let mut editor = editor();
        let first = editor.add_widget(WidgetKind::TextAlert);
        let second = editor.add_widget(WidgetKind::Poll);

        assert_eq!(editor.widget(first).unwrap().rect, WidgetRect::new(100, 100, 400, 300));
        assert_eq!(editor.widget(second).unwrap().rect, WidgetRect::new(120, 120, 400, 300));
        assert_eq!(editor.selected_id(), Some(second));
        assert_eq!(editor.widgets()[1].name, "투표 알림");
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut editor = editor();
        let _one = editor.add_widget(WidgetKind::TextAlert);
        let two = editor.add_widget(WidgetKind::VoiceAlert);
        let three = editor.add_widget(WidgetKind::VideoAlert);

        editor.select(two).unwrap();
        editor.delete_widget(two).unwrap();

        assert_eq!(editor.selected_id(), None);
        assert_eq!(editor.len(), 2);
        assert!(editor.widget(three).is_some());
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut editor = editor();
        let one = editor.add_widget(WidgetKind::TextAlert);
        let two = editor.add_widget(WidgetKind::VoiceAlert);

        editor.delete_widget(one).unwrap();
        assert_eq!(editor.selected_id(), Some(two));
    }

    #[test]
    fn test_delete_unknown() {
        let mut editor = editor();
        let id = WidgetId::new();
        assert_eq!(editor.delete_widget(id).unwrap_err(), StudioError::UnknownWidget(id));
    }

    #[test]
    fn test_toggle_visible() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::Quest);
        assert!(!editor.toggle_visible(id).unwrap());
        assert!(editor.toggle_visible(id).unwrap());
    }

    #[test]
    fn test_background_click_clears_selection() {
        let mut editor = editor();
        editor.add_widget(WidgetKind::TextAlert);
        editor.background_click();
        assert!(editor.selected_widget().is_none());
    }

    #[test]
    fn test_set_rect_field_clamps_size() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::TextAlert);

        let rect = editor.set_rect_field(id, RectField::Width, -5).unwrap();
        assert_eq!(rect.width, MIN_WIDGET_SIZE);
        let rect = editor.set_rect_field(id, RectField::X, -40).unwrap();
        assert_eq!(rect.x, -40);
    }

    #[test]
    fn test_set_rect_field_raw_policy() {
        let config = StudioConfig {
            form_input_policy: FormInputPolicy::Raw,
            ..StudioConfig::default()
        };
        let mut editor = CanvasEditor::new(&config);
        let id = editor.add_widget(WidgetKind::TextAlert);

        let rect = editor.set_rect_field(id, RectField::Height, 3).unwrap();
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn test_drag_move_through_scaled_canvas() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::TextAlert);
        editor.clear_selection();
        let viewport = CanvasViewport::new(Rect::new(40.0, 20.0, 1000.0, 560.0));

        editor.begin_drag(id, None, Point::new(300.0, 300.0), &viewport).unwrap();
        assert_eq!(editor.selected_id(), Some(id));
        assert!(editor.capture().is_captured());

        // Half-size canvas: 1 screen pixel = 2 virtual units.
        editor.drag_to(Point::new(310.0, 290.0)).unwrap();
        assert_eq!(editor.widget(id).unwrap().rect, WidgetRect::new(120, 80, 400, 300));

        // Later events are relative to the drag start, not the last event.
        editor.drag_to(Point::new(320.0, 300.0)).unwrap();
        assert_eq!(editor.widget(id).unwrap().rect, WidgetRect::new(140, 100, 400, 300));

        assert_eq!(editor.end_drag(), Some(WidgetRect::new(140, 100, 400, 300)));
        assert!(!editor.capture().is_captured());
        assert_eq!(editor.drag_to(Point::ZERO).unwrap_err(), StudioError::NoActiveDrag);
    }

    #[test]
    fn test_drag_resize_intermediate_states_are_integral() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::TextAlert);
        let viewport = CanvasViewport::new(Rect::new(0.0, 0.0, 700.0, 400.0));

        editor.begin_drag(id, Some(Corner::BottomRight), Point::new(0.0, 0.0), &viewport).unwrap();
        let rect = editor.drag_to(Point::new(13.0, 7.0)).unwrap();
        // 13 * 1920/700 = 35.66, 7 * 1080/400 = 18.9
        assert_eq!(rect, WidgetRect::new(100, 100, 436, 319));
        editor.end_drag();
    }

    #[test]
    fn test_deleting_dragged_widget_releases_capture() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::TextAlert);
        editor.begin_drag(id, None, Point::ZERO, &CanvasViewport::default()).unwrap();

        editor.delete_widget(id).unwrap();
        assert!(!editor.is_dragging());
        assert!(!editor.capture().is_captured());
    }

    #[test]
    fn test_replace_widgets_ends_drag() {
        let mut editor = editor();
        let id = editor.add_widget(WidgetKind::TextAlert);
        editor.begin_drag(id, None, Point::ZERO, &CanvasViewport::default()).unwrap();

        editor.replace_widgets(vec![Widget::starter()]);
        assert!(!editor.capture().is_captured());
        assert_eq!(editor.selected_id(), None);
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_dropping_editor_releases_capture() {
        let capture;
        {
            let mut editor = editor();
            let id = editor.add_widget(WidgetKind::TextAlert);
            editor.begin_drag(id, None, Point::ZERO, &CanvasViewport::default()).unwrap();
            capture = editor.capture().clone();
            assert!(capture.is_captured());
        }
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_widget_at_prefers_topmost_visible() {
        let mut editor = editor();
        let back = editor.add_widget(WidgetKind::TextAlert);
        let front = editor.add_widget(WidgetKind::MiniAlert);
        let point = Point::new(200.0, 200.0);

        assert_eq!(editor.widget_at(point), Some(front));
        editor.toggle_visible(front).unwrap();
        assert_eq!(editor.widget_at(point), Some(back));
        assert_eq!(editor.widget_at(Point::new(1900.0, 1000.0)), None);
    }

    #[test]
    fn test_selected_widget_is_on_top() {
        let mut editor = editor();
        let back = editor.add_widget(WidgetKind::TextAlert);
        let front = editor.add_widget(WidgetKind::MiniAlert);
        let point = Point::new(200.0, 200.0);

        editor.select(back).unwrap();
        assert_eq!(editor.widget_at(point), Some(back));
        let order: Vec<_> = editor.paint_order().map(|w| w.id).collect();
        assert_eq!(order, vec![front, back]);

        editor.clear_selection();
        assert_eq!(editor.widget_at(point), Some(front));
        let order: Vec<_> = editor.paint_order().map(|w| w.id).collect();
        assert_eq!(order, vec![back, front]);
    }

    #[test]
    fn test_handle_at_selected_widget() {
        let mut editor = editor();
        editor.add_widget(WidgetKind::TextAlert);
        let viewport = CanvasViewport::new(Rect::new(0.0, 0.0, 960.0, 540.0));

        // Bottom-right corner (500, 400) is at (250, 200) on screen.
        assert_eq!(editor.handle_at(Point::new(252.0, 199.0), &viewport, 6.0), Some(Corner::BottomRight));
        assert_eq!(editor.handle_at(Point::new(150.0, 150.0), &viewport, 6.0), None);
    }
}
