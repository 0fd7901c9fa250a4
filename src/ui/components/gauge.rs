use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Observation field shown by a gauge, with its unit, scale and colour bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Temperature,
    Humidity,
    Wind,
    Uv,
}

impl Reading {
    fn unit(self) -> &'static str {
        match self {
            Reading::Temperature => "°C",
            Reading::Humidity => "%",
            Reading::Wind => " m/s",
            Reading::Uv => "",
        }
    }

    fn decimals(self) -> usize {
        match self {
            Reading::Temperature | Reading::Humidity => 0,
            Reading::Wind | Reading::Uv => 1,
        }
    }

    /// Bar scale as (empty, full)
    fn scale(self) -> (f64, f64) {
        match self {
            Reading::Temperature => (-10.0, 50.0),
            Reading::Humidity => (0.0, 100.0),
            Reading::Wind => (0.0, 20.0),
            Reading::Uv => (0.0, 12.0),
        }
    }

    fn color(self, value: f64) -> Color {
        match self {
            Reading::Temperature => Theme::temp_color(value),
            Reading::Humidity => Theme::humidity_color(value),
            Reading::Wind => Theme::wind_color(value),
            Reading::Uv => Theme::uv_color(value),
        }
    }

    fn fill_ratio(self, value: f64) -> f64 {
        let (empty, full) = self.scale();
        ((value - empty) / (full - empty)).clamp(0.0, 1.0)
    }
}

pub struct WeatherGauge<'a> {
    title: &'a str,
    value: Option<f64>,
    reading: Reading,
}

impl<'a> WeatherGauge<'a> {
    pub fn new(title: &'a str, reading: Reading, value: Option<f64>) -> Self {
        Self {
            title,
            value,
            reading,
        }
    }
}

impl Widget for WeatherGauge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.reading.color(value);
        let label = format!(
            "{:.prec$}{}",
            value,
            self.reading.unit(),
            prec = self.reading.decimals()
        );
        Paragraph::new(Span::styled(label, Style::default().fg(color))).render(inner, buf);

        if inner.height >= 2 {
            let width = inner.width as usize;
            let filled = (width as f64 * self.reading.fill_ratio(value)) as usize;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
            buf.set_string(inner.x, inner.y + 1, bar, Style::default().fg(color));
        }
    }
}
