use std::time::Duration;

use crate::entities::{Asteroid, Bullet};

/// Moves every asteroid down and every active bullet up by `dt`, then drops
/// asteroids that fell out of the field and bullets that are no longer active.
pub fn integrate(asteroids: &mut Vec<Asteroid>, bullets: &mut Vec<Bullet>, dt: Duration) {
    let dt = dt.as_secs_f64();

    asteroids.retain_mut(|asteroid| {
        asteroid.update(dt);
        !asteroid.is_below_field()
    });

    bullets.retain_mut(|bullet| {
        bullet.update(dt);
        bullet.active
    });
}
