use std::time::Duration;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::{self, Scoreboard};
use crate::entities::{Asteroid, Bullet, Craft};
use crate::physics;
use crate::rounds::{Round, RoundController};
use crate::sidebar::{SIDEBAR_BUTTONS, SidebarAction, SidebarButton};
use crate::spawner::Spawner;
use crate::types::Direction;

/// Discrete player commands produced by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Fire,
    Move(Direction),
    TogglePause,
    Restart,
    End,
}

impl From<SidebarAction> for Command {
    fn from(action: SidebarAction) -> Self {
        match action {
            SidebarAction::TogglePause => Command::TogglePause,
            SidebarAction::Restart => Command::Restart,
            SidebarAction::End => Command::End,
        }
    }
}

/// Read-only view of a session for one rendered frame.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub asteroids: &'a [Asteroid],
    pub bullets: &'a [Bullet],
    pub craft: &'a Craft,
    pub score: u32,
    pub lives: u32,
    pub round: Round,
    pub banner: Option<Duration>,
    pub paused: bool,
    pub game_over: bool,
    pub buttons: &'static [SidebarButton],
}

/// The whole game state. Time only advances through [`Session::tick`], so
/// pausing freezes round timers and spawning along with motion.
pub struct Session {
    pub craft: Craft,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub scoreboard: Scoreboard,
    rounds: RoundController,
    spawner: Spawner,
    clock: Duration,
    paused: bool,
    ended: bool,
    dirty: bool,
    rng: StdRng,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Session::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Session {
            craft: Craft::default(),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            scoreboard: Scoreboard::default(),
            rounds: RoundController::default(),
            spawner: Spawner::default(),
            clock: Duration::ZERO,
            paused: false,
            ended: false,
            dirty: true,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score
    }

    pub fn lives(&self) -> u32 {
        self.scoreboard.lives
    }

    pub fn round(&self) -> Round {
        self.rounds.round()
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn tick(&mut self, dt: Duration) {
        self.dirty = true;
        if self.paused || self.scoreboard.game_over || self.ended {
            return;
        }

        self.clock += dt;
        let now = self.clock;

        if let Some(round) = self.rounds.update(now) {
            info!("Round {} started at {:?}", round.number(), self.rounds.round_started_at());
        }
        let params = self.rounds.params(now);
        self.spawner.update(now, &params, &mut self.rng, &mut self.asteroids);
        physics::integrate(&mut self.asteroids, &mut self.bullets, dt);
        let report = collision::resolve(
            &self.craft,
            &mut self.asteroids,
            &mut self.bullets,
            &mut self.scoreboard,
        );
        if report.craft_hits > 0 || report.asteroids_destroyed > 0 {
            debug!(
                "Tick at {:?}: {} craft hit(s), {} asteroid(s) destroyed",
                now, report.craft_hits, report.asteroids_destroyed
            );
        }
    }

    pub fn fire(&mut self) {
        if self.scoreboard.game_over {
            return;
        }
        let nose = self.craft.nose();
        self.bullets.push(Bullet::new(nose));
        self.dirty = true;
        debug!("Bullet fired from ({:.1}, {:.1})", nose.x, nose.y);
    }

    pub fn move_craft(&mut self, direction: Direction) {
        if self.scoreboard.game_over {
            return;
        }
        self.craft.move_by(direction);
        self.dirty = true;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.dirty = true;
        info!("{}", if self.paused { "Game paused." } else { "Game resumed." });
    }

    pub fn restart(&mut self) {
        self.craft = Craft::default();
        self.asteroids.clear();
        self.bullets.clear();
        self.scoreboard = Scoreboard::default();
        self.rounds = RoundController::default();
        self.spawner = Spawner::default();
        self.clock = Duration::ZERO;
        self.paused = false;
        self.dirty = true;
        info!("Game restarted.");
    }

    pub fn end_game(&mut self) {
        self.ended = true;
        info!("End requested. Final score: {}", self.scoreboard.score);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Fire => self.fire(),
            Command::Move(direction) => self.move_craft(direction),
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::End => self.end_game(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            asteroids: &self.asteroids,
            bullets: &self.bullets,
            craft: &self.craft,
            score: self.scoreboard.score,
            lives: self.scoreboard.lives,
            round: self.rounds.round(),
            banner: self.rounds.banner_remaining(self.clock),
            paused: self.paused,
            game_over: self.scoreboard.game_over,
            buttons: &SIDEBAR_BUTTONS,
        }
    }
}
