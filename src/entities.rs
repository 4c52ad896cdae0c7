use crate::constants::*;
use crate::rendering::GameGrid;
use crate::types::{Direction, Vector2D};
use crossterm::style::Color;
use rand::Rng;

// --- Asteroid ---
#[derive(Clone, Debug, PartialEq)]
pub struct Asteroid {
    pub position: Vector2D,
    pub radius: f64,
    pub speed: f64, // Downward, units per second
    pub color: [f32; 3],
    pub display_char: char,
}

impl Asteroid {
    pub fn new(x: f64, y: f64, radius: f64, speed: f64) -> Self {
        Asteroid {
            position: Vector2D::new(x, y),
            radius,
            speed,
            color: [0.6, 0.6, 0.6],
            display_char: '@',
        }
    }

    /// Spawns an asteroid just above the visible top of the field.
    pub fn random(rng: &mut impl Rng, speed: f64) -> Self {
        let x = rng.gen_range(SPAWN_MARGIN..=FIELD_WIDTH - SPAWN_MARGIN);
        let radius = rng.gen_range(ASTEROID_MIN_RADIUS..=ASTEROID_MAX_RADIUS);
        let mut asteroid = Asteroid::new(x, FIELD_HEIGHT + SPAWN_HEIGHT_OFFSET, radius, speed);
        asteroid.color = [
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
            rng.gen_range(0.0..1.0),
        ];
        asteroid
    }

    pub fn update(&mut self, dt: f64) {
        self.position.y -= self.speed * dt;
    }

    /// True once the top edge has dropped below the bottom of the field.
    pub fn is_below_field(&self) -> bool {
        self.position.y + self.radius < 0.0
    }

    pub fn contains_point(&self, point: Vector2D) -> bool {
        self.position.distance_to(point) < self.radius
    }

    pub fn terminal_color(&self) -> Color {
        let [r, g, b] = self.color.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
        Color::Rgb { r, g, b }
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        let color = Some(self.terminal_color());
        let (cell_w, cell_h) = game_grid.viewport.cell_size();
        let mut y = self.position.y - self.radius;
        while y <= self.position.y + self.radius {
            let mut x = self.position.x - self.radius;
            while x <= self.position.x + self.radius {
                if x < FIELD_WIDTH && self.position.distance_to(Vector2D::new(x, y)) <= self.radius {
                    game_grid.plot(x, y, self.display_char, color);
                }
                x += cell_w;
            }
            y += cell_h;
        }
        if self.position.x < FIELD_WIDTH {
            game_grid.plot(self.position.x, self.position.y, self.display_char, color);
        }
    }
}

// --- Bullet struct ---
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub position: Vector2D,
    pub active: bool,
    pub display_char: char,
}

impl Bullet {
    pub fn new(position: Vector2D) -> Self {
        Bullet {
            position,
            active: true,
            display_char: '|',
        }
    }

    pub fn update(&mut self, dt: f64) {
        if !self.active {
            return;
        }
        self.position.y += BULLET_SPEED * dt;
        if self.position.y > FIELD_HEIGHT {
            self.active = false;
        }
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        if self.active {
            game_grid.plot(self.position.x, self.position.y, self.display_char, Some(Color::Red));
        }
    }
}

// --- Craft (the player's plane) ---
#[derive(Clone, Debug, PartialEq)]
pub struct Craft {
    pub x: f64,
}

impl Default for Craft {
    fn default() -> Self {
        Craft { x: FIELD_WIDTH / 2.0 }
    }
}

impl Craft {
    pub fn nose(&self) -> Vector2D {
        Vector2D::new(self.x, CRAFT_Y + CRAFT_NOSE_HEIGHT)
    }

    pub fn move_by(&mut self, direction: Direction) {
        self.x = (self.x + direction.sign() * CRAFT_MOVE_STEP)
            .clamp(CRAFT_HALF_SPAN, FIELD_WIDTH - CRAFT_HALF_SPAN);
    }

    /// Wing span horizontally, nose height vertically.
    pub fn is_hit_by(&self, asteroid: &Asteroid) -> bool {
        asteroid.position.y - asteroid.radius < self.nose().y
            && asteroid.position.x > self.x - CRAFT_HALF_SPAN
            && asteroid.position.x < self.x + CRAFT_HALF_SPAN
    }

    pub fn draw(&self, game_grid: &mut GameGrid) {
        let color = Some(Color::Green);
        let (cell_w, _) = game_grid.viewport.cell_size();
        let mut x = self.x - CRAFT_HALF_SPAN;
        while x <= self.x + CRAFT_HALF_SPAN {
            game_grid.plot(x, CRAFT_Y, '=', color);
            x += cell_w;
        }
        game_grid.plot(self.x - CRAFT_HALF_SPAN, CRAFT_Y, '<', color);
        game_grid.plot(self.x + CRAFT_HALF_SPAN, CRAFT_Y, '>', color);
        game_grid.plot(self.x, CRAFT_Y, 'A', color);
        game_grid.plot(self.x, CRAFT_Y + CRAFT_NOSE_HEIGHT, '^', color);
    }
}
