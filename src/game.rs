use std::io::{self, Write};
use crossterm::event::{self, Event};
use log::{error, info};

use crate::clock::TickClock;
use crate::constants::TICK_INTERVAL;
use crate::rendering::{GameGrid, OutputTarget, draw_snapshot};
use crate::session::Session;
use crate::terminal_io::{SimulatedInput, command_for};

pub struct Game {
    pub session: Session,
    pub stdout_target: OutputTarget,
    game_grid: GameGrid,
    clock: TickClock,
    simulated_input: Option<SimulatedInput>,
    max_frames: Option<u64>,
    frame_count: u64,
}

impl Game {
    pub fn new(
        session: Session,
        terminal_width: u16,
        terminal_height: u16,
        stdout_target: OutputTarget,
        simulated_input: Option<SimulatedInput>,
        max_frames: Option<u64>,
    ) -> Self {
        // Scripted runs step a simulated clock so they replay identically.
        let clock = if simulated_input.is_some() {
            TickClock::fixed(TICK_INTERVAL)
        } else {
            TickClock::real()
        };
        Game {
            session,
            stdout_target,
            game_grid: GameGrid::new(terminal_width, terminal_height),
            clock,
            simulated_input,
            max_frames,
            frame_count: 0,
        }
    }

    fn frames_left(&self) -> bool {
        self.max_frames.is_none_or(|max| self.frame_count < max)
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.game_grid
            .clear_screen_manual(&mut self.stdout_target)
            .map_err(|e| { error!("Failed to clear screen: {}", e); e })?;

        while !self.session.is_ended() && self.frames_left() {
            for event in self.poll_events()? {
                if let Event::Resize(width, height) = event {
                    self.game_grid = GameGrid::new(width, height);
                    info!("Terminal resized to {}x{}", width, height);
                    continue;
                }
                if let Some(command) = command_for(&event, &self.game_grid.viewport) {
                    self.session.apply(command);
                }
                if self.session.is_ended() {
                    break;
                }
            }
            if self.session.is_ended() {
                break;
            }

            let dt = self.clock.tick();
            self.session.tick(dt);

            if self.session.take_dirty() {
                self.render()?;
            }
            self.frame_count += 1;
        }

        info!(
            "Game loop ended after {} frames ({:?} of play). Score: {}, lives: {}, round: {}",
            self.frame_count,
            self.session.elapsed(),
            self.session.score(),
            self.session.lives(),
            self.session.round().number()
        );
        Ok(())
    }

    /// Collects every event that arrives before the next tick is due.
    fn poll_events(&mut self) -> io::Result<Vec<Event>> {
        if let Some(sim_input) = &mut self.simulated_input {
            if sim_input.poll(self.frame_count)? {
                return sim_input.read();
            }
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        let mut timeout = self.clock.until_next_tick(TICK_INTERVAL);
        while event::poll(timeout).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            events.push(event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?);
            timeout = self.clock.until_next_tick(TICK_INTERVAL);
        }
        Ok(events)
    }

    fn render(&mut self) -> io::Result<()> {
        draw_snapshot(&mut self.game_grid, &self.session.snapshot());
        self.game_grid
            .render(&mut self.stdout_target)
            .map_err(|e| { error!("Failed to render game grid: {}", e); e })?;
        self.stdout_target
            .flush()
            .map_err(|e| { error!("Failed to flush stdout after rendering: {}", e); e })?;

        if let OutputTarget::ScreenBuffer(sb) = &self.stdout_target {
            sb.print_to_log();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::ScreenBuffer;
    use crate::rounds::Round;

    fn headless(max_frames: Option<u64>) -> Game {
        Game::new(
            Session::new(42),
            80,
            24,
            OutputTarget::ScreenBuffer(ScreenBuffer::new(80, 24)),
            Some(SimulatedInput::demo_script()),
            max_frames,
        )
    }

    #[test]
    fn demo_script_runs_until_quit() {
        let mut game = headless(None);
        game.run().unwrap();
        assert!(game.session.is_ended());
        assert_eq!(game.frame_count, 200);
        assert_eq!(game.session.round(), Round::One);
    }

    #[test]
    fn max_frames_caps_the_loop() {
        let mut game = headless(Some(10));
        game.run().unwrap();
        assert_eq!(game.frame_count, 10);
        assert!(!game.session.is_ended());
        assert_eq!(game.session.craft.x, 350.0 - 20.0);
    }

    #[test]
    fn frames_are_rendered_into_the_screen_buffer() {
        let mut game = headless(Some(5));
        game.run().unwrap();
        let OutputTarget::ScreenBuffer(sb) = &game.stdout_target else {
            panic!("expected a screen buffer");
        };
        assert!(sb.row_text(0).starts_with("Score: 0"));
        assert!((0..sb.height).any(|y| sb.row_text(y).contains("Round 1")));
    }
}
