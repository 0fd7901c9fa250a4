use crate::models::FarmReport;
use std::fmt::Write;

/// Plain-text rendering of a report for `farmcast report`.
pub fn report_to_text(report: &FarmReport) -> String {
    let mut out = String::new();
    let obs = &report.observation;

    // Writing to a String cannot fail
    let _ = writeln!(out, "Farmcast - {}", report.location);
    if let Some(coords) = report.coordinates {
        let _ = writeln!(out, "Coordinates: {}", coords);
    }
    let _ = writeln!(
        out,
        "Generated: {}{}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC"),
        if report.degraded { " (baseline data)" } else { "" }
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Now: {}°C (feels like {}°C), {}, humidity {}%, wind {} m/s, UV {}",
        obs.temperature, obs.feels_like, obs.description, obs.humidity, obs.wind_speed, obs.uv_index
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Forecast:");
    for day in &report.forecast.days {
        let _ = writeln!(
            out,
            "  {}  {:>3.0}°/{:<3.0}°  rain {:>3.0}%  {}",
            day.date.format("%a %d %b"),
            day.high,
            day.low,
            day.precipitation,
            day.description
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Alerts ({}):", report.alert_source);
    if report.alerts.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for alert in &report.alerts {
        let _ = writeln!(
            out,
            "  [{}/{}] {} until {}",
            alert.alert_type,
            alert.severity,
            alert.title,
            alert.end_time.format("%d %b %H:%M UTC")
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommendations:");
    let recommendations = report.recommendations_by_urgency();
    if recommendations.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for rec in &recommendations {
        let _ = writeln!(
            out,
            "  [{}] {}: {}",
            rec.urgency, rec.recommendation_type, rec.title
        );
        let _ = writeln!(out, "      {}", rec.weather_reason);
        if let Some(ref action_by) = rec.action_by {
            let _ = writeln!(out, "      Act by: {}", action_by);
        }
    }

    out
}
