use std::io::{self, Write};
use log::info;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};

use crate::constants::*;
use crate::session::Snapshot;
use crate::sidebar::SidebarButton;

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_char(&mut self, c: char) {
        if self.cursor_y < self.height && self.cursor_x < self.width {
            self.buffer[self.cursor_y as usize][self.cursor_x as usize] = c;
        }
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn row_text(&self, y: u16) -> String {
        self.buffer
            .get(y as usize)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for y in 0..self.height {
            info!("{}", self.row_text(y));
        }
        info!("---------------------");
    }
}

impl Write for ScreenBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.write_str(&s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_move_to(&mut self, command: MoveTo) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(command.0, command.1);
                Ok(())
            }
        }
    }

    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // Ignore in debug mode
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::ScreenBuffer(sb) => sb.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(sb) => sb.flush(),
        }
    }
}

/// Maps window coordinates (bottom-left origin) onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width: width.max(1), height: height.max(1) }
    }

    /// Window units covered by one cell, (horizontal, vertical).
    pub fn cell_size(&self) -> (f64, f64) {
        (WINDOW_WIDTH / self.width as f64, WINDOW_HEIGHT / self.height as f64)
    }

    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !(0.0..WINDOW_WIDTH).contains(&x) || !(0.0..=WINDOW_HEIGHT).contains(&y) {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size();
        let col = (x / cell_w).floor() as u16;
        let row = ((WINDOW_HEIGHT - y) / cell_h).floor() as u16;
        Some((col.min(self.width - 1), row.min(self.height - 1)))
    }

    /// Center of a cell as a pointer position (top-left origin, y grows downward).
    pub fn to_pointer(&self, col: u16, row: u16) -> (f64, f64) {
        let (cell_w, cell_h) = self.cell_size();
        ((col as f64 + 0.5) * cell_w, (row as f64 + 0.5) * cell_h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<Color>,
}

const BLANK: Cell = Cell { ch: ' ', color: None };

// --- GameGrid for geometric rendering ---
pub struct GameGrid {
    pub grid: Vec<Vec<Cell>>,
    pub viewport: Viewport,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let viewport = Viewport::new(width, height);
        GameGrid {
            grid: vec![vec![BLANK; viewport.width as usize]; viewport.height as usize],
            viewport,
        }
    }

    pub fn width(&self) -> u16 {
        self.viewport.width
    }

    pub fn height(&self) -> u16 {
        self.viewport.height
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char, color: Option<Color>) {
        if y < self.height() && x < self.width() {
            self.grid[y as usize][x as usize] = Cell { ch: c, color };
        }
    }

    /// Draws a character at a window position.
    pub fn plot(&mut self, x: f64, y: f64, c: char, color: Option<Color>) {
        if let Some((col, row)) = self.viewport.to_cell(x, y) {
            self.set_char(col, row, c, color);
        }
    }

    /// Writes text starting at the cell holding the window position.
    pub fn write_text(&mut self, x: f64, y: f64, text: &str, color: Option<Color>) {
        if let Some((col, row)) = self.viewport.to_cell(x, y) {
            for (i, c) in text.chars().enumerate() {
                self.set_char(col.saturating_add(i as u16), row, c, color);
            }
        }
    }

    /// Writes text horizontally centered on a window position.
    pub fn write_centered(&mut self, x: f64, y: f64, text: &str, color: Option<Color>) {
        let (cell_w, _) = self.viewport.cell_size();
        let half = text.chars().count() as f64 / 2.0 * cell_w;
        self.write_text((x - half).max(0.0), y, text, color);
    }

    #[cfg(test)]
    pub fn row_text(&self, y: u16) -> String {
        self.grid
            .get(y as usize)
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(BLANK);
        }
    }

    pub fn render(&self, stdout: &mut OutputTarget) -> io::Result<()> {
        for (y, row) in self.grid.iter().enumerate() {
            stdout.execute_move_to(MoveTo(0, y as u16))?;
            let mut color = None;
            let mut run = String::new();
            for cell in row {
                if cell.color != color {
                    write!(stdout, "{}", run)?;
                    run.clear();
                    match cell.color {
                        Some(c) => stdout.execute_other_command(SetForegroundColor(c))?,
                        None => stdout.execute_other_command(ResetColor)?,
                    }
                    color = cell.color;
                }
                run.push(cell.ch);
            }
            write!(stdout, "{}", run)?;
            if color.is_some() {
                stdout.execute_other_command(ResetColor)?;
            }
        }
        Ok(())
    }

    pub fn clear_screen_manual(&self, stdout: &mut OutputTarget) -> io::Result<()> {
        for y in 0..self.height() {
            stdout.execute_move_to(MoveTo(0, y))?;
            write!(stdout, "{}", " ".repeat(self.width() as usize))?;
        }
        stdout.execute_move_to(MoveTo(0, 0))?;
        Ok(())
    }
}

/// Draws a full frame: entities, HUD, overlays and the sidebar.
pub fn draw_snapshot(game_grid: &mut GameGrid, snapshot: &Snapshot<'_>) {
    game_grid.clear();

    for asteroid in snapshot.asteroids {
        asteroid.draw(game_grid);
    }
    for bullet in snapshot.bullets {
        bullet.draw(game_grid);
    }
    snapshot.craft.draw(game_grid);

    draw_hud(game_grid, snapshot);
    draw_sidebar(game_grid, snapshot.buttons);
}

fn draw_hud(game_grid: &mut GameGrid, snapshot: &Snapshot<'_>) {
    let (cell_w, cell_h) = game_grid.viewport.cell_size();
    let white = Some(Color::White);
    game_grid.write_text(cell_w * 0.5, WINDOW_HEIGHT, &format!("Score: {}", snapshot.score), white);

    let lives = format!("[Lives: {}]", snapshot.lives);
    let lives_x = FIELD_WIDTH - (lives.len() as f64 + 1.0) * cell_w;
    game_grid.write_text(lives_x.max(0.0), WINDOW_HEIGHT, &lives, white);

    let center_x = FIELD_WIDTH / 2.0;
    let center_y = WINDOW_HEIGHT / 2.0;
    if snapshot.banner.is_some() {
        let title = format!("Round {}", snapshot.round.number());
        game_grid.write_centered(center_x, center_y + cell_h, &title, Some(Color::Yellow));
    }
    if snapshot.game_over {
        game_grid.write_centered(center_x, center_y, "Game Over", Some(Color::Red));
    } else if snapshot.paused {
        game_grid.write_centered(center_x, center_y, "Paused", white);
    }
}

fn draw_sidebar(game_grid: &mut GameGrid, buttons: &[SidebarButton]) {
    let (_, cell_h) = game_grid.viewport.cell_size();
    let separator = Some(Color::DarkGrey);
    let mut y = WINDOW_HEIGHT;
    while y >= 0.0 {
        game_grid.plot(FIELD_WIDTH, y, '|', separator);
        y -= cell_h;
    }

    for button in buttons {
        let rect = button.rect;
        let Some((left, top)) = game_grid.viewport.to_cell(rect.x, rect.y + rect.height) else {
            continue;
        };
        let Some((right, bottom)) = game_grid.viewport.to_cell(
            (rect.x + rect.width).min(WINDOW_WIDTH - 1.0),
            rect.y,
        ) else {
            continue;
        };
        if bottom > top + 1 {
            for col in left..=right {
                game_grid.set_char(col, top, '-', None);
                game_grid.set_char(col, bottom, '-', None);
            }
        }
        let inner = (right - left + 1) as usize;
        let label: String = button.label.chars().take(inner).collect();
        let offset = (inner - label.chars().count()) / 2;
        let row = top + (bottom - top) / 2;
        for (i, c) in label.chars().enumerate() {
            game_grid.set_char(left + (offset + i) as u16, row, c, Some(Color::White));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn viewport_maps_corners() {
        let viewport = Viewport::new(80, 24);
        assert_eq!(viewport.to_cell(0.0, WINDOW_HEIGHT), Some((0, 0)));
        assert_eq!(viewport.to_cell(0.0, 0.0), Some((0, 23)));
        assert_eq!(viewport.to_cell(799.0, 1.0), Some((79, 23)));
        assert_eq!(viewport.to_cell(800.0, 1.0), None);
        assert_eq!(viewport.to_cell(10.0, 620.0), None);
        assert_eq!(viewport.to_cell(10.0, -1.0), None);
    }

    #[test]
    fn viewport_cell_centers_round_trip() {
        let viewport = Viewport::new(80, 24);
        let (x, y) = viewport.to_pointer(72, 3);
        assert_eq!(viewport.to_cell(x, WINDOW_HEIGHT - y), Some((72, 3)));
    }

    #[test]
    fn screen_buffer_collects_grid_render() {
        let mut grid = GameGrid::new(10, 2);
        grid.set_char(2, 0, 'x', Some(Color::Red));
        grid.set_char(3, 0, 'y', None);
        grid.set_char(9, 1, 'z', None);
        let mut target = OutputTarget::ScreenBuffer(ScreenBuffer::new(10, 2));
        grid.render(&mut target).unwrap();
        let OutputTarget::ScreenBuffer(sb) = target else { unreachable!() };
        assert_eq!(sb.row_text(0), "  xy      ");
        assert_eq!(sb.row_text(1), "         z");
    }

    #[test]
    fn snapshot_draws_hud_and_sidebar() {
        let session = Session::new(3);
        let mut grid = GameGrid::new(80, 24);
        draw_snapshot(&mut grid, &session.snapshot());

        let top = grid.row_text(0);
        assert!(top.starts_with("Score: 0"));
        assert!(top.contains("[Lives: 3]"));

        let screen: Vec<String> = (0..grid.height()).map(|y| grid.row_text(y)).collect();
        assert!(screen.iter().any(|row| row.contains("Round 1")));
        assert!(screen.iter().any(|row| row.contains("Pause/Res")));
        assert!(screen.iter().any(|row| row.contains("End Game")));
        assert!(screen[22].contains('='));
    }

    #[test]
    fn paused_overlay_is_drawn() {
        let mut session = Session::new(3);
        session.toggle_pause();
        let mut grid = GameGrid::new(80, 24);
        draw_snapshot(&mut grid, &session.snapshot());
        assert!((0..grid.height()).any(|y| grid.row_text(y).contains("Paused")));
    }
}
