mod clock;
mod collision;
mod config;
mod constants;
mod entities;
mod game;
mod physics;
mod rendering;
mod rounds;
mod session;
mod sidebar;
mod spawner;
mod terminal_io;
mod types;

use std::io;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size},
};
use log::{error, info};

use crate::config::Config;
use crate::game::Game;
use crate::rendering::{OutputTarget, ScreenBuffer};
use crate::session::Session;
use crate::terminal_io::SimulatedInput;

fn main() -> io::Result<()> {
    let config = Config::parse();
    simple_logging::log_to_file(&config.log_file, config.log_level())?;
    info!("Starting asteroid-shooter.");

    let seed = config.seed();
    info!("Spawn seed: {}", seed);
    let session = Session::new(seed);

    if config.debug {
        info!("Debug mode enabled. Resolution set to {}x{}", config.width, config.height);
        let mut game = Game::new(
            session,
            config.width,
            config.height,
            OutputTarget::ScreenBuffer(ScreenBuffer::new(config.width, config.height)),
            Some(SimulatedInput::demo_script()),
            config.max_frames,
        );
        return game.run();
    }

    let mut stdout_target = OutputTarget::Stdout(io::stdout());
    info!("Attempting to enable raw mode.");
    enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
    let result = match setup_terminal(&mut stdout_target) {
        Ok((width, height)) => {
            info!("Terminal size: {}x{}", width, height);
            let mut game = Game::new(session, width, height, stdout_target, None, config.max_frames);
            let result = game.run();
            stdout_target = game.stdout_target;
            result
        }
        Err(e) => Err(e),
    };
    restore_terminal(&mut stdout_target);

    if let Err(e) = &result {
        error!("Game exited with error: {}", e);
    }
    info!("Exiting application.");
    result
}

fn setup_terminal(stdout_target: &mut OutputTarget) -> io::Result<(u16, u16)> {
    stdout_target
        .execute_other_command(EnterAlternateScreen)
        .map_err(|e| { error!("Failed to enter alternate screen: {}", e); e })?;
    stdout_target
        .execute_other_command(Hide)
        .map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;
    stdout_target
        .execute_other_command(EnableMouseCapture)
        .map_err(|e| { error!("Failed to enable mouse capture: {}", e); e })?;
    size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })
}

/// Best effort: every step runs even if an earlier one fails.
fn restore_terminal(stdout_target: &mut OutputTarget) {
    if let Err(e) = stdout_target.execute_other_command(DisableMouseCapture) {
        error!("Failed to disable mouse capture on exit: {}", e);
    }
    if let Err(e) = stdout_target.execute_other_command(Show) {
        error!("Failed to show cursor on exit: {}", e);
    }
    if let Err(e) = stdout_target.execute_other_command(LeaveAlternateScreen) {
        error!("Failed to leave alternate screen on exit: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        error!("Failed to disable raw mode on exit: {}", e);
    }
}
