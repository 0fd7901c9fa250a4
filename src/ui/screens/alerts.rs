use crate::models::{Alert, AlertSource};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct AlertsScreen<'a> {
    pub alerts: &'a [Alert],
    pub source: Option<AlertSource>,
    pub selected_index: usize,
}

impl<'a> AlertsScreen<'a> {
    pub fn new(alerts: &'a [Alert], source: Option<AlertSource>) -> Self {
        Self {
            alerts,
            source,
            selected_index: 0,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }
}

impl Widget for AlertsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let mut title = vec![
            Span::styled("Weather Alerts", Theme::title()),
            Span::styled(format!(" ({})", self.alerts.len()), Theme::dim()),
        ];
        if let Some(source) = self.source {
            title.push(Span::styled(format!("  source: {}", source), Theme::dim()));
        }
        Paragraph::new(Line::from(title)).render(chunks[0], buf);

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

impl AlertsScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Alerts")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.alerts.is_empty() {
            Paragraph::new(Span::styled("No weather alerts", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .alerts
            .iter()
            .enumerate()
            .map(|(i, alert)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };

                let severity_style = Style::default().fg(alert.severity.color());
                let line = Line::from(vec![
                    Span::styled(format!("{} ", alert.severity.symbol()), severity_style),
                    Span::styled(
                        format!("{:<9}", alert.alert_type.as_str()),
                        Style::default().fg(alert.alert_type.color()),
                    ),
                    Span::styled(&alert.title, Theme::normal()),
                ]);

                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(alert) = self.alerts.get(self.selected_index) else {
            Paragraph::new(Span::styled(
                "Select an alert to view details",
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        };

        let lines = vec![
            Line::from(Span::styled(&alert.title, Theme::header())),
            Line::default(),
            Line::from(vec![
                Span::styled("Severity: ", Theme::dim()),
                Span::styled(
                    alert.severity.as_str(),
                    Style::default().fg(alert.severity.color()),
                ),
                Span::styled("  Type: ", Theme::dim()),
                Span::styled(
                    alert.alert_type.as_str(),
                    Style::default().fg(alert.alert_type.color()),
                ),
            ]),
            Line::from(vec![
                Span::styled("Valid: ", Theme::dim()),
                Span::styled(
                    format!(
                        "{} to {}",
                        alert.start_time.format("%d %b %H:%M"),
                        alert.end_time.format("%d %b %H:%M UTC")
                    ),
                    Theme::highlight(),
                ),
            ]),
            Line::from(vec![
                Span::styled("Areas: ", Theme::dim()),
                Span::styled(alert.areas.join(", "), Theme::normal()),
            ]),
            Line::default(),
            Line::from(Span::styled("Description:", Theme::dim())),
            Line::from(Span::styled(&alert.description, Theme::normal())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
