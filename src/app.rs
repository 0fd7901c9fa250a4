use crate::models::{FarmReport, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Alerts,
    Recommendations,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Alerts),
            '3' => Some(Screen::Recommendations),
            _ => None,
        }
    }
}

/// Cursor over a list that may shrink between refreshes.
#[derive(Debug, Default)]
pub struct ListState {
    pub selected_index: usize,
}

impl ListState {
    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    pub report: Option<FarmReport>,
    /// Urgency-ordered copy of the report's recommendations
    pub sorted_recommendations: Vec<Recommendation>,

    pub alerts_state: ListState,
    pub recommendations_state: ListState,

    pub status_message: Option<String>,
    pub needs_refresh: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            report: None,
            sorted_recommendations: Vec::new(),
            alerts_state: ListState::default(),
            recommendations_state: ListState::default(),
            status_message: None,
            needs_refresh: false,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing data...");
    }

    pub fn update_report(&mut self, report: FarmReport) {
        self.sorted_recommendations = report.recommendations_by_urgency();
        self.alerts_state.clamp(report.alerts.len());
        self.recommendations_state
            .clamp(self.sorted_recommendations.len());
        self.report = Some(report);
    }

    pub fn alert_count(&self) -> usize {
        self.report.as_ref().map(|r| r.alerts.len()).unwrap_or(0)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
