use log::{debug, info};

use crate::constants::*;
use crate::entities::{Asteroid, Bullet, Craft};

/// Score and lives, the state the collision passes act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Scoreboard {
            score: 0,
            lives: MAX_LIVES,
            game_over: false,
        }
    }
}

impl Scoreboard {
    /// Takes one life; the last one ends the game.
    pub fn lose_life(&mut self) {
        if self.lives == 0 {
            return;
        }
        self.lives -= 1;
        if self.lives == 0 {
            self.game_over = true;
        }
    }

    pub fn award_hit(&mut self) {
        self.score += SCORE_PER_ASTEROID;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub craft_hits: u32,
    pub asteroids_destroyed: u32,
}

/// Runs the craft pass, then the bullet pass. Once the game is over nothing
/// else is resolved.
pub fn resolve(
    craft: &Craft,
    asteroids: &mut Vec<Asteroid>,
    bullets: &mut Vec<Bullet>,
    scoreboard: &mut Scoreboard,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    if scoreboard.game_over {
        return report;
    }

    asteroids.retain(|asteroid| {
        if scoreboard.game_over || !craft.is_hit_by(asteroid) {
            return true;
        }
        scoreboard.lose_life();
        report.craft_hits += 1;
        info!(
            "Craft hit by asteroid at ({:.1}, {:.1}). Lives: {}",
            asteroid.position.x, asteroid.position.y, scoreboard.lives
        );
        false
    });
    if scoreboard.game_over {
        info!("Lives exhausted. Game over with score {}", scoreboard.score);
        return report;
    }

    for bullet in bullets.iter_mut().filter(|bullet| bullet.active) {
        let Some(index) = asteroids
            .iter()
            .position(|asteroid| asteroid.contains_point(bullet.position))
        else {
            continue;
        };
        asteroids.remove(index);
        bullet.active = false;
        scoreboard.award_hit();
        report.asteroids_destroyed += 1;
        debug!(
            "Bullet hit asteroid at ({:.1}, {:.1}). Score: {}",
            bullet.position.x, bullet.position.y, scoreboard.score
        );
    }
    bullets.retain(|bullet| bullet.active);

    report
}
