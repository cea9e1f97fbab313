//! Sidebar layout engine.
//!
//! Stacks an ordered widget list into absolute draw positions: a running
//! vertical cursor starts at the origin, each widget is asked for its
//! height, drawn at the cursor, and the cursor advances by exactly that
//! height. There are no implicit margins - any spacing a widget wants is
//! part of its own height. Content past the bottom of the strip is the
//! caller's problem.
//!
//! The horizontal offset and compact flag ride in the render context and
//! are consumed by the widgets themselves, so the whole stack moves between
//! the display edges without any engine change.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use heapless::Vec;

use crate::config::MAX_SIDEBAR_WIDGETS;
use crate::render::RenderContext;
use crate::widgets::{Widget, WidgetKind, WidgetType};

/// An ordered selection of widgets for one sidebar.
pub struct SidebarLayout {
    widgets: Vec<WidgetKind, MAX_SIDEBAR_WIDGETS>,
}

impl SidebarLayout {
    /// Build a layout from persisted widget tags. At most
    /// [`MAX_SIDEBAR_WIDGETS`] slots are honored; extra tags are ignored.
    pub fn from_types(types: &[WidgetType]) -> Self {
        let mut widgets = Vec::new();
        for &widget_type in types.iter().take(MAX_SIDEBAR_WIDGETS) {
            // push cannot fail: the iterator is capped at the Vec capacity
            let _ = widgets.push(WidgetKind::of(widget_type));
        }
        Self { widgets }
    }

    /// Total pixel height the stack will consume under this context.
    pub fn total_height(&self, ctx: &RenderContext) -> u32 {
        self.widgets.iter().map(|w| w.height(ctx)).sum()
    }

    /// Absolute top edge of each widget, in stack order. Exposed for the
    /// event loop's vertical-centering math and for tests; `render` walks
    /// the same cursor.
    pub fn positions(&self, ctx: &RenderContext, origin_y: i32) -> Vec<i32, MAX_SIDEBAR_WIDGETS> {
        let mut positions = Vec::new();
        let mut cursor = origin_y;
        for widget in &self.widgets {
            let _ = positions.push(cursor);
            cursor += widget.height(ctx) as i32;
        }
        positions
    }

    /// Draw every widget at its stacked position.
    pub fn render<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D, ctx: &RenderContext, origin_y: i32) {
        let mut cursor = origin_y;
        for widget in &self.widgets {
            let height = widget.height(ctx);
            widget.draw(display, ctx, cursor);
            cursor += height as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fixture;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_stack_positions_and_total_height() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let layout = SidebarLayout::from_types(&[WidgetType::Time, WidgetType::Date]);

        let positions = layout.positions(&ctx, 0);
        assert_eq!(positions.as_slice(), &[0, 31], "time is 31px, date starts right below");
        assert_eq!(layout.total_height(&ctx), 89, "31 + 58, no implicit margins");
    }

    #[test]
    fn test_origin_shifts_every_position() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let layout = SidebarLayout::from_types(&[WidgetType::Seconds, WidgetType::Time]);

        let positions = layout.positions(&ctx, 40);
        assert_eq!(positions.as_slice(), &[40, 54]);
    }

    #[test]
    fn test_empty_slots_consume_no_space() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let layout =
            SidebarLayout::from_types(&[WidgetType::Empty, WidgetType::Time, WidgetType::Empty]);

        assert_eq!(layout.positions(&ctx, 0).as_slice(), &[0, 0, 31]);
        assert_eq!(layout.total_height(&ctx), 31);
    }

    #[test]
    fn test_extra_slots_beyond_capacity_are_ignored() {
        let fixture = Fixture::new();
        let ctx = fixture.ctx();
        let layout = SidebarLayout::from_types(&[
            WidgetType::Seconds,
            WidgetType::Seconds,
            WidgetType::Seconds,
            WidgetType::Time,
        ]);

        assert_eq!(layout.total_height(&ctx), 42, "only three slots are honored");
    }

    #[test]
    fn test_render_walks_the_same_cursor() {
        // a draw pass over every widget type must not panic, icons or not
        let mut fixture = Fixture::new();
        fixture.icons = crate::icons::IconSet::missing();

        let ctx = fixture.ctx();
        let layout = SidebarLayout::from_types(&[
            WidgetType::BatteryMeter,
            WidgetType::Time,
            WidgetType::Date,
        ]);

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        layout.render(&mut display, &ctx, 0);
    }
}
