//! Background season cycle

use super::instance::AnimationInstance;
use super::Lighting;
use crate::models::Season;
use crate::types::Millis;

/// Re-evaluates the season every [`Season::PERIOD_MS`] and relights the scene
#[derive(Debug, Clone)]
pub struct SeasonalCycle {
    next_due: Millis,
    current: Option<Season>,
}

impl SeasonalCycle {
    /// First evaluation happens one period after `now`
    pub fn new(now: Millis) -> Self {
        Self {
            next_due: now + Season::PERIOD_MS,
            current: None,
        }
    }

    pub fn current(&self) -> Option<Season> {
        self.current
    }

    /// Apply the season if the period has elapsed; returns the season applied
    pub fn poll(
        &mut self,
        now: Millis,
        lighting: &mut Lighting,
        instances: &mut [AnimationInstance],
    ) -> Option<Season> {
        if now < self.next_due {
            return None;
        }
        // Missed periods (e.g. a backgrounded tab) collapse into one evaluation
        while self.next_due <= now {
            self.next_due += Season::PERIOD_MS;
        }

        let season = Season::at(now);
        apply_season(season, lighting, instances);
        if self.current != Some(season) {
            tracing::debug!(%season, "Season changed");
        }
        self.current = Some(season);
        Some(season)
    }
}

/// Set the sun to the season's color and intensity and store its multiplier on every plant
pub fn apply_season(season: Season, lighting: &mut Lighting, instances: &mut [AnimationInstance]) {
    lighting.intensity = season.multiplier();
    lighting.color = season.light_color();
    for instance in instances {
        instance.seasonal_multiplier = season.multiplier();
    }
}
