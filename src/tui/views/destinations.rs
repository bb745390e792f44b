//! Destinations page. Placeholder until destination pages exist.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::theme;
use crate::tui::services::Services;

pub struct DestinationsViewState {
    names: Vec<String>,
}

impl DestinationsViewState {
    pub fn new(services: &Services) -> Self {
        Self {
            names: services
                .store
                .destinations
                .iter()
                .map(|d| format!("{}, {}", d.name, d.country))
                .collect(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_default("Destinations");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled("Destinations", theme::title())),
            Line::from(Span::styled("Coming soon", theme::muted())),
            Line::raw(""),
            Line::from(Span::styled(
                format!("{} places on the map so far", self.names.len()),
                Style::default().fg(theme::TEXT),
            )),
            Line::raw(""),
        ];
        lines.extend(
            self.names
                .iter()
                .map(|name| Line::from(Span::styled(name.clone(), theme::dim()))),
        );

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}
