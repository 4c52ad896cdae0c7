use std::collections::HashMap;
use std::io;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::rendering::Viewport;
use crate::session::Command;
use crate::sidebar;
use crate::types::Direction;

// --- SimulatedInput for debugging ---
pub struct SimulatedInput {
    events: HashMap<u64, Vec<Event>>,
    current_frame: u64,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Vec<Event>>) -> Self {
        SimulatedInput { events, current_frame: 0 }
    }

    /// Scripted session used by `--debug`: fire, strafe, pause, resume, restart, quit.
    pub fn demo_script() -> Self {
        let key = |code: KeyCode| Event::Key(KeyEvent::from(code));
        let mut events = HashMap::new();
        events.insert(1, vec![key(KeyCode::Char(' '))]);
        events.insert(2, vec![key(KeyCode::Left), key(KeyCode::Left)]);
        events.insert(3, vec![key(KeyCode::Char(' '))]);
        events.insert(30, vec![key(KeyCode::Right); 5]);
        events.insert(31, vec![key(KeyCode::Char(' '))]);
        events.insert(60, vec![key(KeyCode::Char('p'))]);
        events.insert(90, vec![key(KeyCode::Char('p'))]);
        events.insert(120, vec![key(KeyCode::Char('r'))]);
        events.insert(200, vec![key(KeyCode::Char('q'))]);
        SimulatedInput::new(events)
    }

    pub fn poll(&mut self, frame_count: u64) -> io::Result<bool> {
        self.current_frame = frame_count;
        Ok(self.events.contains_key(&frame_count))
    }

    pub fn read(&mut self) -> io::Result<Vec<Event>> {
        Ok(self.events.remove(&self.current_frame).unwrap_or_default())
    }
}

/// Maps a terminal event to a session command. Mouse cells are converted to
/// window pointer positions through `viewport` before hit-testing the sidebar.
pub fn command_for(event: &Event, viewport: &Viewport) -> Option<Command> {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => match key_event.code {
            KeyCode::Char(' ') => Some(Command::Fire),
            KeyCode::Left | KeyCode::Char('a') => Some(Command::Move(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(Command::Move(Direction::Right)),
            KeyCode::Char('p') => Some(Command::TogglePause),
            KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::End),
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let (x, y) = viewport.to_pointer(*column, *row);
            sidebar::pointer_action(x, y).map(Command::from)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys_map_to_commands() {
        let viewport = Viewport::new(80, 24);
        assert_eq!(command_for(&key(KeyCode::Char(' ')), &viewport), Some(Command::Fire));
        assert_eq!(
            command_for(&key(KeyCode::Left), &viewport),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for(&key(KeyCode::Char('d')), &viewport),
            Some(Command::Move(Direction::Right))
        );
        assert_eq!(command_for(&key(KeyCode::Char('p')), &viewport), Some(Command::TogglePause));
        assert_eq!(command_for(&key(KeyCode::Char('r')), &viewport), Some(Command::Restart));
        assert_eq!(command_for(&key(KeyCode::Esc), &viewport), Some(Command::End));
        assert_eq!(command_for(&key(KeyCode::Char('x')), &viewport), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let viewport = Viewport::new(80, 24);
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(command_for(&release, &viewport), None);
    }

    #[test]
    fn clicks_hit_sidebar_buttons() {
        // 80x24: cells are 10 x 25 window units.
        let viewport = Viewport::new(80, 24);
        assert_eq!(command_for(&click(75, 3), &viewport), Some(Command::TogglePause));
        assert_eq!(command_for(&click(75, 6), &viewport), Some(Command::Restart));
        assert_eq!(command_for(&click(75, 8), &viewport), Some(Command::End));
        assert_eq!(command_for(&click(75, 20), &viewport), None);
        assert_eq!(command_for(&click(30, 3), &viewport), None);
    }

    #[test]
    fn simulated_input_replays_each_frame_once() {
        let mut input = SimulatedInput::demo_script();
        assert!(!input.poll(0).unwrap());
        assert!(input.poll(2).unwrap());
        assert_eq!(input.read().unwrap().len(), 2);
        assert!(!input.poll(2).unwrap());
        assert!(input.read().unwrap().is_empty());
    }
}
