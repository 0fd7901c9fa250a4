use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Warning,
    Watch,
    Advisory,
}

impl AlertType {
    /// Classify an upstream event name such as "Flood Warning".
    pub fn from_event(event: &str) -> Self {
        let event = event.to_lowercase();
        if event.contains("warning") {
            AlertType::Warning
        } else if event.contains("watch") {
            AlertType::Watch
        } else {
            AlertType::Advisory
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Warning => "Warning",
            AlertType::Watch => "Watch",
            AlertType::Advisory => "Advisory",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AlertType::Warning => Color::Red,
            AlertType::Watch => Color::Yellow,
            AlertType::Advisory => Color::Blue,
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Minor,
    Moderate,
    Severe,
    Extreme,
}

impl AlertSeverity {
    /// Highest severity named in an upstream tag list, `Minor` if none match.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let has = |name: &str| tags.iter().any(|t| t.as_ref() == name);
        if has("Extreme") {
            AlertSeverity::Extreme
        } else if has("Severe") {
            AlertSeverity::Severe
        } else if has("Moderate") {
            AlertSeverity::Moderate
        } else {
            AlertSeverity::Minor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Minor => "Minor",
            AlertSeverity::Moderate => "Moderate",
            AlertSeverity::Severe => "Severe",
            AlertSeverity::Extreme => "Extreme",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AlertSeverity::Minor => Color::Gray,
            AlertSeverity::Moderate => Color::Yellow,
            AlertSeverity::Severe => Color::LightRed,
            AlertSeverity::Extreme => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AlertSeverity::Minor => "ℹ",
            AlertSeverity::Moderate => "→",
            AlertSeverity::Severe => "⚠",
            AlertSeverity::Extreme => "!",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub areas: Vec<String>,
}

impl Alert {
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.start_time <= at && at < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn alert_type_from_event_name() {
        assert_eq!(AlertType::from_event("Flood Warning"), AlertType::Warning);
        assert_eq!(AlertType::from_event("TORNADO WATCH"), AlertType::Watch);
        assert_eq!(AlertType::from_event("Heat advisory"), AlertType::Advisory);
        assert_eq!(AlertType::from_event("Dust"), AlertType::Advisory);
    }

    #[test]
    fn severity_from_tags_prefers_highest() {
        assert_eq!(
            AlertSeverity::from_tags(&["Moderate", "Extreme"]),
            AlertSeverity::Extreme
        );
        assert_eq!(
            AlertSeverity::from_tags(&["Wind", "Severe"]),
            AlertSeverity::Severe
        );
        assert_eq!(AlertSeverity::from_tags(&["Moderate"]), AlertSeverity::Moderate);
        let none: [&str; 0] = [];
        assert_eq!(AlertSeverity::from_tags(&none), AlertSeverity::Minor);
        // Tags are case-sensitive upstream
        assert_eq!(AlertSeverity::from_tags(&["severe"]), AlertSeverity::Minor);
    }

    #[test]
    fn severity_ordering() {
        assert!(AlertSeverity::Minor < AlertSeverity::Moderate);
        assert!(AlertSeverity::Severe < AlertSeverity::Extreme);
    }

    #[test]
    fn active_window_is_half_open() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let alert = Alert {
            id: "a".into(),
            alert_type: AlertType::Warning,
            severity: AlertSeverity::Moderate,
            title: "t".into(),
            description: "d".into(),
            start_time: start,
            end_time: start + chrono::Duration::hours(8),
            areas: vec![],
        };
        assert!(alert.is_active_at(start));
        assert!(!alert.is_active_at(start + chrono::Duration::hours(8)));
    }

    #[test]
    fn serializes_type_and_lowercase_tiers() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let alert = Alert {
            id: "strong_wind_1".into(),
            alert_type: AlertType::Advisory,
            severity: AlertSeverity::Severe,
            title: "t".into(),
            description: "d".into(),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            areas: vec!["Your Area".into()],
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "advisory");
        assert_eq!(json["severity"], "severe");
        assert!(json.get("startTime").is_some());
    }
}
