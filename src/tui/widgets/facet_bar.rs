//! One-line facet controls: `[t] Tag: All · lake · sunset`.
//!
//! The active value is drawn as a chip; keyboard cycling itself lives in
//! the views via `Selection::cycle`.

use ratatui::text::{Line, Span};

use crate::tui::theme;

/// Build the line for one facet. `selected` is `None` for the "all" sentinel.
pub fn facet_line(key: char, label: &str, options: &[String], selected: Option<&str>) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!(" [{key}] "), theme::key_hint()),
        Span::styled(format!("{label}: "), theme::muted()),
    ];

    let all_style = if selected.is_none() {
        theme::chip_active()
    } else {
        theme::dim()
    };
    spans.push(Span::styled(" All ".to_string(), all_style));

    for option in options {
        let style = if selected == Some(option.as_str()) {
            theme::chip_active()
        } else {
            theme::dim()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {option} "), style));
    }

    Line::from(spans)
}

/// `#tag` spans for a card.
pub fn tag_spans(tags: &[String]) -> Vec<Span<'static>> {
    tags.iter()
        .map(|t| Span::styled(format!("#{t} "), theme::tag()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_facet_line_lists_every_option() {
        let options = vec!["Mohe".to_string(), "Arxan".to_string()];
        let line = facet_line('l', "Location", &options, Some("Arxan"));
        let rendered = text(&line);
        assert!(rendered.contains("[l]"));
        assert!(rendered.contains("Mohe"));
        assert!(rendered.contains("Arxan"));
    }

    #[test]
    fn test_active_chip_style() {
        let options = vec!["Mohe".to_string()];
        let line = facet_line('l', "Location", &options, Some("Mohe"));
        let chip = line.spans.iter().find(|s| s.content.contains("Mohe")).unwrap();
        assert_eq!(chip.style, theme::chip_active());

        let line = facet_line('l', "Location", &options, None);
        let all = line.spans.iter().find(|s| s.content.contains("All")).unwrap();
        assert_eq!(all.style, theme::chip_active());
    }

    #[test]
    fn test_tag_spans() {
        let spans = tag_spans(&["lake".to_string()]);
        assert_eq!(spans[0].content, "#lake ");
    }
}
