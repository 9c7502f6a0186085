use super::render_tabs;
use crate::app::pages::MappingPage;
use crate::ui::table::{self, EDIT_HINTS};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, area: Rect, page: &MappingPage, focused: bool) {
    let body = render_tabs(frame, area, &page.tabs);
    table::render_resource(frame, body, page.current(), focused, EDIT_HINTS);
}
