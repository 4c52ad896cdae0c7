use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::entities::Asteroid;
use crate::rounds::RoundParams;

/// Emits one batch of asteroids whenever more than a spawn interval has passed
/// since the previous batch. Lag never produces extra batches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spawner {
    last_spawn_at: Duration,
}

impl Spawner {
    pub fn update(
        &mut self,
        now: Duration,
        params: &RoundParams,
        rng: &mut impl Rng,
        asteroids: &mut Vec<Asteroid>,
    ) -> usize {
        if now.saturating_sub(self.last_spawn_at) <= params.spawn_interval {
            return 0;
        }
        for _ in 0..params.spawn_count {
            asteroids.push(Asteroid::random(rng, params.asteroid_speed));
        }
        self.last_spawn_at = now;
        debug!(
            "Spawned {} asteroid(s) at {:?} with speed {}",
            params.spawn_count, now, params.asteroid_speed
        );
        params.spawn_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounds::{Round, RoundController};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(round: Round) -> RoundParams {
        RoundParams {
            asteroid_speed: 75.0,
            spawn_interval: round.spawn_interval(),
            spawn_count: round.spawn_count(),
        }
    }

    #[test]
    fn waits_for_a_full_interval() {
        let mut spawner = Spawner::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut asteroids = Vec::new();
        let p = params(Round::One);

        assert_eq!(spawner.update(Duration::from_millis(1_000), &p, &mut rng, &mut asteroids), 0);
        assert!(asteroids.is_empty());
        assert_eq!(spawner.update(Duration::from_millis(1_001), &p, &mut rng, &mut asteroids), 1);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].speed, 75.0);
        assert_eq!(spawner.update(Duration::from_millis(2_001), &p, &mut rng, &mut asteroids), 0);
        assert_eq!(spawner.update(Duration::from_millis(2_002), &p, &mut rng, &mut asteroids), 1);
    }

    #[test]
    fn spawns_round_sized_batches() {
        let mut spawner = Spawner::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut asteroids = Vec::new();

        spawner.update(Duration::from_millis(600), &params(Round::Two), &mut rng, &mut asteroids);
        assert_eq!(asteroids.len(), 2);
        spawner.update(Duration::from_millis(901), &params(Round::Three), &mut rng, &mut asteroids);
        assert_eq!(asteroids.len(), 5);
    }

    #[test]
    fn lag_produces_a_single_batch() {
        let mut spawner = Spawner::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut asteroids = Vec::new();

        let spawned = spawner.update(Duration::from_secs(10), &params(Round::One), &mut rng, &mut asteroids);
        assert_eq!(spawned, 1);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(spawner.update(Duration::from_secs(10), &params(Round::One), &mut rng, &mut asteroids), 0);
    }

    #[test]
    fn uses_round_speed() {
        let mut rounds = RoundController::default();
        rounds.update(Duration::from_millis(15_001));
        let p = rounds.params(Duration::from_millis(15_001));
        let mut spawner = Spawner::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut asteroids = Vec::new();
        spawner.update(Duration::from_millis(15_001), &p, &mut rng, &mut asteroids);
        assert!(asteroids.iter().all(|a| a.speed == 100.0));
    }
}
