use crate::models::Recommendation;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Recommendations list and details. Expects entries already sorted by urgency.
pub struct RecommendationsScreen<'a> {
    pub recommendations: &'a [Recommendation],
    pub selected_index: usize,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(recommendations: &'a [Recommendation]) -> Self {
        Self {
            recommendations,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for RecommendationsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Recommendations", Theme::title()),
            Span::styled(format!(" ({})", self.recommendations.len()), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl RecommendationsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("By Urgency")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.recommendations.is_empty() {
            Paragraph::new(Span::styled("No recommendations", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .recommendations
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let urgency_style = Style::default().fg(rec.urgency.color());
                let type_style = Style::default().fg(rec.recommendation_type.color());

                let line = Line::from(vec![
                    Span::styled(format!("{} ", rec.urgency.symbol()), urgency_style),
                    Span::styled(
                        format!("{:<11}", rec.recommendation_type.as_str()),
                        type_style,
                    ),
                    Span::styled(&rec.title, Theme::normal()),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    #[allow(clippy::vec_init_then_push)]
    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rec = match self.recommendations.get(self.selected_index) {
            Some(r) => r,
            None => {
                Paragraph::new(Span::styled(
                    "Select a recommendation to view details",
                    Theme::dim(),
                ))
                .render(inner, buf);
                return;
            }
        };

        let mut lines = Vec::new();

        lines.push(Line::from(vec![Span::styled(&rec.title, Theme::header())]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![
            Span::styled("Urgency: ", Theme::dim()),
            Span::styled(rec.urgency.as_str(), Style::default().fg(rec.urgency.color())),
            Span::styled("  Type: ", Theme::dim()),
            Span::styled(
                rec.recommendation_type.as_str(),
                Style::default().fg(rec.recommendation_type.color()),
            ),
        ]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![Span::styled("Description:", Theme::dim())]));
        lines.push(Line::from(vec![Span::styled(
            &rec.description,
            Theme::normal(),
        )]));
        lines.push(Line::from(vec![]));

        if !rec.weather_reason.is_empty() {
            lines.push(Line::from(vec![Span::styled("Why:", Theme::dim())]));
            lines.push(Line::from(vec![Span::styled(
                &rec.weather_reason,
                Theme::highlight(),
            )]));
            lines.push(Line::from(vec![]));
        }

        if let Some(ref action_by) = rec.action_by {
            lines.push(Line::from(vec![Span::styled("Act by:", Theme::dim())]));
            lines.push(Line::from(vec![Span::styled(action_by, Theme::success())]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecommendationType, Urgency};

    fn render_text(screen: RecommendationsScreen<'_>) -> String {
        let area = Rect::new(0, 0, 120, 16);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn details_show_reason_and_deadline() {
        let recs = vec![Recommendation::new(
            "strong_wind_precautions",
            RecommendationType::Harvesting,
            Urgency::High,
            "Secure Crops and Equipment",
            "Strong winds expected.",
        )
        .with_reason("Wind speed: 13 m/s")
        .with_action_by("Immediately")];

        let text = render_text(RecommendationsScreen::new(&recs));
        assert!(text.contains("Recommendations (1)"));
        assert!(text.contains("Wind speed: 13 m/s"));
        assert!(text.contains("Immediately"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let text = render_text(RecommendationsScreen::new(&[]));
        assert!(text.contains("No recommendations"));
        assert!(text.contains("Select a recommendation"));
    }
}
