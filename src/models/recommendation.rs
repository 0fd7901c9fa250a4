use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Irrigation,
    Planting,
    Harvesting,
    Pesticide,
    Fertilizer,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Irrigation => "Irrigation",
            RecommendationType::Planting => "Planting",
            RecommendationType::Harvesting => "Harvesting",
            RecommendationType::Pesticide => "Pesticide",
            RecommendationType::Fertilizer => "Fertilizer",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            RecommendationType::Irrigation => Color::Blue,
            RecommendationType::Planting => Color::Green,
            RecommendationType::Harvesting => Color::Yellow,
            RecommendationType::Pesticide => Color::Magenta,
            RecommendationType::Fertilizer => Color::LightGreen,
        }
    }
}

impl std::fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Urgency::Low => Color::Gray,
            Urgency::Medium => Color::Yellow,
            Urgency::High => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Urgency::Low => "→",
            Urgency::Medium => "⚠",
            Urgency::High => "!",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Slug of the rule that produced this recommendation
    pub id: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub title: String,
    pub description: String,
    pub urgency: Urgency,
    pub weather_reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_by: Option<String>,
}

impl Recommendation {
    pub fn new(
        id: impl Into<String>,
        recommendation_type: RecommendationType,
        urgency: Urgency,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            recommendation_type,
            title: title.into(),
            description: description.into(),
            urgency,
            weather_reason: String::new(),
            action_by: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.weather_reason = reason.into();
        self
    }

    pub fn with_action_by(mut self, action_by: impl Into<String>) -> Self {
        self.action_by = Some(action_by.into());
        self
    }
}

/// Stable sort, highest urgency first. Ties keep evaluation order.
pub fn sort_by_urgency(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.urgency.cmp(&a.urgency));
}
