use crate::models::{Alert, FarmReport, Recommendation};
use crate::ui::components::{Reading, WeatherGauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

pub struct DashboardScreen<'a> {
    pub report: Option<&'a FarmReport>,
    pub status_message: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(report: Option<&'a FarmReport>) -> Self {
        Self {
            report,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Gauges row
                Constraint::Min(8),    // Forecast, alerts and top actions
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(chunks[2]);

        self.render_forecast(middle[0], buf);
        self.render_alerts(middle[1], buf);
        self.render_top_recommendations(middle[2], buf);

        self.render_status_message(chunks[3], buf);
        self.render_nav(chunks[4], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.report {
            Some(r) => format!("Farmcast - {}", r.location),
            None => "Farmcast - Waiting for weather".to_string(),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let mut spans = Vec::new();
        match self.report {
            Some(r) => {
                spans.push(Span::styled(
                    format!(
                        "Last updated: {}  {}",
                        r.generated_at.format("%Y-%m-%d %H:%M UTC"),
                        r.observation.description
                    ),
                    Theme::dim(),
                ));
                if r.degraded {
                    spans.push(Span::styled("  BASELINE DATA", Theme::warning()));
                }
            }
            None => spans.push(Span::styled("Last updated: Never", Theme::dim())),
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(area);

        let obs = self.report.map(|r| &r.observation);

        let gauges = [
            ("Temperature", Reading::Temperature, obs.map(|o| o.temperature)),
            ("Feels Like", Reading::Temperature, obs.map(|o| o.feels_like)),
            ("Humidity", Reading::Humidity, obs.map(|o| o.humidity)),
            ("Wind", Reading::Wind, obs.map(|o| o.wind_speed)),
            ("UV Index", Reading::Uv, obs.map(|o| o.uv_index)),
        ];
        for ((title, reading, value), chunk) in gauges.into_iter().zip(gauge_chunks.iter()) {
            WeatherGauge::new(title, reading, value).render(*chunk, buf);
        }
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Forecast", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let days = match self.report {
            Some(r) if !r.forecast.is_empty() => &r.forecast.days,
            _ => {
                Paragraph::new(Span::styled("No forecast available", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let items: Vec<ListItem> = days
            .iter()
            .map(|day| {
                let line = Line::from(vec![
                    Span::styled(day.date.format("%a %d").to_string(), Theme::dim()),
                    Span::raw(" "),
                    Span::styled(
                        format!("{:.0}°", day.high),
                        Style::default().fg(Theme::temp_color(day.high)),
                    ),
                    Span::styled(format!("/{:.0}° ", day.low), Theme::dim()),
                    Span::styled(
                        format!("{:.0}% rain", day.precipitation),
                        Style::default().fg(Theme::rain_color(day.precipitation)),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_alerts(&self, area: Rect, buf: &mut Buffer) {
        let source = self
            .report
            .map(|r| format!(" ({})", r.alert_source))
            .unwrap_or_default();
        let block = Block::default()
            .title(Line::from(vec![
                Span::styled("Weather Alerts", Theme::header()),
                Span::styled(source, Theme::dim()),
            ]))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let alerts: Vec<&Alert> = self
            .report
            .map(|r| r.active_alerts().into_iter().take(3).collect())
            .unwrap_or_default();

        if alerts.is_empty() {
            Paragraph::new(Span::styled("No active alerts", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = alerts
            .iter()
            .map(|a| {
                let severity_style = Style::default().fg(a.severity.color());
                let title_line = Line::from(vec![
                    Span::styled(format!("{} ", a.severity.symbol()), severity_style),
                    Span::styled(&a.title, severity_style),
                ]);
                let window_line = Line::from(vec![
                    Span::styled("  until ", Theme::dim()),
                    Span::styled(a.end_time.format("%d %b %H:%M").to_string(), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, window_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_top_recommendations(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Top Actions", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let recommendations: Vec<Recommendation> = self
            .report
            .map(|r| r.recommendations_by_urgency())
            .unwrap_or_default();

        if recommendations.is_empty() {
            Paragraph::new(Span::styled("Nothing to do right now", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = recommendations
            .into_iter()
            .take(3)
            .map(|r| {
                let urgency_style = Style::default().fg(r.urgency.color());
                let title_line = Line::from(vec![
                    Span::styled(format!("{} ", r.urgency.symbol()), urgency_style),
                    Span::styled(r.title, urgency_style),
                ]);
                let action_line = Line::from(vec![
                    Span::styled("  ", Theme::dim()),
                    Span::styled(r.action_by.unwrap_or(r.weather_reason), Theme::dim()),
                ]);
                ListItem::new(vec![title_line, action_line])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("OFFLINE") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("Dashboard ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Alerts ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Recs ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}
