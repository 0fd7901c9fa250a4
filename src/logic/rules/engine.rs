use super::{
    cold_protection::ColdProtectionRule, disease_pressure::DiseasePressureRule,
    dry_spell::DrySpellRule, heat_stress::HeatStressRule, heavy_rain::HeavyRainRule,
    low_humidity::LowHumidityRule, optimal_conditions::OptimalConditionsRule,
    rain_forecast::RainForecastRule, uv_protection::UvProtectionRule, wind::StrongWindRule, Rule,
};
use crate::models::{Forecast, Observation, Recommendation};

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    /// Rules run in this order and every match is kept, so the output order
    /// is stable before any urgency sort.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(HeatStressRule),
            Box::new(ColdProtectionRule),
            Box::new(DiseasePressureRule),
            Box::new(LowHumidityRule),
            Box::new(StrongWindRule),
            Box::new(UvProtectionRule),
            Box::new(HeavyRainRule),
            Box::new(RainForecastRule),
            Box::new(DrySpellRule),
            Box::new(OptimalConditionsRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, observation: &Observation, forecast: &Forecast) -> Vec<Recommendation> {
        let mut fired: Vec<Recommendation> = Vec::new();

        for rule in &self.rules {
            let preempted = rule
                .preempted_by()
                .iter()
                .any(|id| fired.iter().any(|r| r.id == *id));
            if preempted {
                tracing::trace!("Rule {} pre-empted", rule.id());
                continue;
            }

            if let Some(rec) = rule.evaluate(observation, forecast) {
                fired.push(rec);
            }
        }

        tracing::debug!(
            "{} of {} rules fired for {}",
            fired.len(),
            self.rules.len(),
            observation.location
        );
        fired
    }

    /// Evaluate one rule in isolation, ignoring pre-emption.
    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        observation: &Observation,
        forecast: &Forecast,
    ) -> Option<Recommendation> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(observation, forecast))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::{forecast_with, neutral};
    use crate::models::Urgency;
    use std::collections::HashSet;

    fn ids(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.id.as_str()).collect()
    }

    /// Neutral except outside the optimal band, so only the rule under test fires
    fn off_optimal() -> Observation {
        Observation {
            wind_speed: 6.0,
            ..neutral()
        }
    }

    #[test]
    fn empty_forecast_neutral_observation_is_only_optimal() {
        let recs = RulesEngine::new().evaluate(&neutral(), &Forecast::default());
        assert_eq!(ids(&recs), vec!["optimal_conditions"]);
    }

    #[test]
    fn stresses_do_not_suppress_each_other() {
        let obs = Observation {
            temperature: 38.0,
            wind_speed: 9.0,
            uv_index: 8.0,
            ..neutral()
        };
        let recs = RulesEngine::new().evaluate(&obs, &Forecast::default());
        assert_eq!(
            ids(&recs),
            vec![
                "high_temp_irrigation",
                "strong_wind_precautions",
                "high_uv_protection"
            ]
        );
    }

    #[test]
    fn optimal_is_additive() {
        let obs = Observation {
            temperature: 25.0,
            humidity: 55.0,
            wind_speed: 2.0,
            uv_index: 8.0,
            ..neutral()
        };
        let recs = RulesEngine::new().evaluate(&obs, &Forecast::default());
        assert_eq!(ids(&recs), vec!["high_uv_protection", "optimal_conditions"]);
    }

    #[test]
    fn heavy_rain_preempts_cumulative_rain() {
        let engine = RulesEngine::new();

        let recs = engine.evaluate(&off_optimal(), &forecast_with(&[75.0]));
        assert_eq!(ids(&recs), vec!["heavy_rain_prep"]);

        let recs = engine.evaluate(&off_optimal(), &forecast_with(&[25.0; 5]));
        assert_eq!(ids(&recs), vec!["rain_forecast_prep"]);
    }

    #[test]
    fn both_rain_conditions_true_fires_heavy_only() {
        // Sum 165 and one day above 70
        let forecast = forecast_with(&[80.0, 30.0, 30.0, 25.0]);
        let engine = RulesEngine::new();
        let recs = engine.evaluate(&off_optimal(), &forecast);
        assert_eq!(ids(&recs), vec!["heavy_rain_prep"]);

        // The cumulative rule on its own would have matched
        assert!(engine
            .evaluate_rule("rain_forecast_prep", &off_optimal(), &forecast)
            .is_some());
    }

    #[test]
    fn dry_spell_needs_both_conditions() {
        let engine = RulesEngine::new();
        let forecast = forecast_with(&[5.0, 5.0, 5.0]);

        let humid = Observation {
            humidity: 60.0,
            ..off_optimal()
        };
        assert!(engine.evaluate(&humid, &forecast).is_empty());

        let dry = Observation {
            humidity: 45.0,
            ..off_optimal()
        };
        assert_eq!(
            ids(&engine.evaluate(&dry, &forecast)),
            vec!["dry_weather_irrigation"]
        );
    }

    #[test]
    fn temperature_boundaries() {
        let engine = RulesEngine::new();
        let at = |t: f64| {
            engine.evaluate(
                &Observation {
                    temperature: t,
                    ..off_optimal()
                },
                &Forecast::default(),
            )
        };

        assert!(at(35.0).is_empty());
        assert_eq!(at(35.01)[0].urgency, Urgency::Medium);
        assert_eq!(at(40.0)[0].urgency, Urgency::Medium);
        assert_eq!(at(40.01)[0].urgency, Urgency::High);
        assert_eq!(ids(&at(9.0)), vec!["cold_protection"]);
    }

    #[test]
    fn humidity_wind_and_uv_boundaries() {
        let engine = RulesEngine::new();
        let run = |obs: Observation| engine.evaluate(&obs, &Forecast::default());

        assert!(run(Observation {
            humidity: 85.0,
            ..off_optimal()
        })
        .is_empty());
        assert_eq!(
            ids(&run(Observation {
                humidity: 85.01,
                ..off_optimal()
            })),
            vec!["high_humidity_disease_watch"]
        );

        // Humidity below 50 with an empty forecast also counts as a dry spell
        assert_eq!(
            ids(&run(Observation {
                humidity: 29.99,
                ..off_optimal()
            })),
            vec!["low_humidity_stress", "dry_weather_irrigation"]
        );
        assert_eq!(
            ids(&run(Observation {
                humidity: 30.0,
                ..off_optimal()
            })),
            vec!["dry_weather_irrigation"]
        );

        assert!(run(Observation {
            wind_speed: 8.0,
            ..neutral()
        })
        .is_empty());
        let wind = run(Observation {
            wind_speed: 12.01,
            ..neutral()
        });
        assert_eq!(ids(&wind), vec!["strong_wind_precautions"]);
        assert_eq!(wind[0].urgency, Urgency::High);

        assert!(run(Observation {
            uv_index: 7.0,
            ..off_optimal()
        })
        .is_empty());
    }

    #[test]
    fn everything_at_once_keeps_fixed_order() {
        let obs = Observation {
            temperature: 42.0,
            humidity: 20.0,
            wind_speed: 14.0,
            uv_index: 11.0,
            ..neutral()
        };
        let recs = RulesEngine::new().evaluate(&obs, &forecast_with(&[5.0, 80.0]));
        assert_eq!(
            ids(&recs),
            vec![
                "high_temp_irrigation",
                "low_humidity_stress",
                "strong_wind_precautions",
                "high_uv_protection",
                "heavy_rain_prep"
            ]
        );
    }

    #[test]
    fn ids_are_unique_within_a_response() {
        let obs = Observation {
            temperature: 5.0,
            humidity: 90.0,
            wind_speed: 10.0,
            uv_index: 9.0,
            ..neutral()
        };
        let recs = RulesEngine::new().evaluate(&obs, &forecast_with(&[30.0; 5]));
        let unique: HashSet<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(unique.len(), recs.len());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = RulesEngine::new();
        let obs = Observation {
            temperature: 36.0,
            humidity: 25.0,
            ..neutral()
        };
        let forecast = forecast_with(&[2.0, 3.0]);
        assert_eq!(
            engine.evaluate(&obs, &forecast),
            engine.evaluate(&obs, &forecast)
        );
    }

    #[test]
    fn rule_ids_match_recommendation_ids() {
        let engine = RulesEngine::new();
        let listed = engine.list_rules();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0].0, "high_temp_irrigation");
        assert_eq!(listed[9].0, "optimal_conditions");

        let rec = engine
            .evaluate_rule("optimal_conditions", &neutral(), &Forecast::default())
            .unwrap();
        assert_eq!(rec.id, "optimal_conditions");
        assert!(engine
            .evaluate_rule("no_such_rule", &neutral(), &Forecast::default())
            .is_none());
    }
}
