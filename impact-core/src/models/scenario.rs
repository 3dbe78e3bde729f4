use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Macro-economic scenario selecting a preset parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scenario {
    Conservative,
    #[default]
    Realistic,
    Optimistic,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "conservative" => Some(Self::Conservative),
            "realistic" => Some(Self::Realistic),
            "optimistic" => Some(Self::Optimistic),
            _ => None,
        }
    }

    /// Preset parameters for this scenario.
    pub fn params(&self) -> ScenarioParams {
        match self {
            Self::Conservative => ScenarioParams {
                base_multiplier: dec!(2.0),
                sector_multiplier: dec!(0.2),
                seasonal_factor: dec!(0.9),
                city_elasticity: dec!(0.10),
                duration_elasticity: dec!(0.08),
            },
            Self::Realistic => ScenarioParams {
                base_multiplier: dec!(2.5),
                sector_multiplier: dec!(0.3),
                seasonal_factor: dec!(1.0),
                city_elasticity: dec!(0.15),
                duration_elasticity: dec!(0.05),
            },
            Self::Optimistic => ScenarioParams {
                base_multiplier: dec!(3.0),
                sector_multiplier: dec!(0.4),
                seasonal_factor: dec!(1.2),
                city_elasticity: dec!(0.20),
                duration_elasticity: dec!(0.03),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioParams {
    pub base_multiplier: Decimal,
    pub sector_multiplier: Decimal,
    pub seasonal_factor: Decimal,
    pub city_elasticity: Decimal,
    pub duration_elasticity: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_roundtrips_every_scenario() {
        for scenario in [
            Scenario::Conservative,
            Scenario::Realistic,
            Scenario::Optimistic,
        ] {
            assert_eq!(Scenario::parse(scenario.as_str()), Some(scenario));
        }
    }

    #[test]
    fn parse_rejects_unknown_name() {
        assert_eq!(Scenario::parse("pessimistic"), None);
    }

    #[test]
    fn optimistic_presets_dominate_conservative() {
        let conservative = Scenario::Conservative.params();
        let optimistic = Scenario::Optimistic.params();

        assert!(optimistic.base_multiplier > conservative.base_multiplier);
        assert!(optimistic.sector_multiplier > conservative.sector_multiplier);
        assert!(optimistic.seasonal_factor > conservative.seasonal_factor);
    }
}
