use log::info;

use crate::canvas::draw_art;
use crate::frames::{frame_size, GAME_OVER, SHIP_FRAMES};
use crate::physics;
use crate::scenario;
use crate::sched::{Context, Flow};
use crate::tasks::{Projectile, Task, TaskKind};

/// Cells kept clear between the ship's frame and the field edge.
const BORDER: f64 = 1.0;
/// Ticks between animation frame flips.
const FRAME_FLIP_TICKS: u32 = 2;

/// The player's ship.  Reads the controls once per tick, integrates
/// velocity, clamps to the bordered field, animates its frame cycle,
/// and runs the collision and fire checks.
pub struct Ship {
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    frame_ix: usize,
    ticks: u32,
    drawn: Option<(f64, f64, usize)>,
}

impl Ship {
    pub fn new(row: f64, col: f64) -> Self {
        Ship {
            row,
            col,
            row_speed: 0.0,
            col_speed: 0.0,
            frame_ix: 0,
            ticks: 0,
            drawn: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.col_speed)
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        let controls = ctx.controls;

        if let Some((row, col, frame_ix)) = self.drawn.take() {
            draw_art(ctx.canvas, row, col, SHIP_FRAMES[frame_ix], true);
        }

        let (rs, cs) = physics::update_speed(
            self.row_speed,
            self.col_speed,
            controls.row_dir,
            controls.col_dir,
        );
        self.row_speed = rs;
        self.col_speed = cs;
        self.row += self.row_speed;
        self.col += self.col_speed;

        self.ticks += 1;
        if self.ticks % FRAME_FLIP_TICKS == 0 {
            self.frame_ix = (self.frame_ix + 1) % SHIP_FRAMES.len();
        }

        // Clamp for the extent of whatever frame is now current (the new
        // frame may be taller or wider than the one just erased).
        self.clamp(ctx.canvas.size());

        let frame = SHIP_FRAMES[self.frame_ix];
        let (height, width) = frame_size(frame);
        let top = self.row.round() as i32;
        let left = self.col.round() as i32;

        if ctx.registry.overlaps(top, left, height, width) {
            // Ship already erased above; terminal event cleanup is ours.
            info!("ship struck at row {top} col {left}");
            ctx.cancel(TaskKind::Projectile);
            ctx.cancel(TaskKind::Obstacle);
            ctx.cancel(TaskKind::Spawner);
            ctx.registry.clear();
            ctx.ship_destroyed = true;
            ctx.spawn(Task::GameOver(GameOverScreen::new()));
            return Flow::Done;
        }

        draw_art(ctx.canvas, self.row, self.col, frame, false);
        self.drawn = Some((self.row, self.col, self.frame_ix));

        if controls.fire && scenario::weapons_unlocked(ctx.scenario.year) {
            let nose_col = self.col + (width / 2) as f64;
            ctx.spawn(Task::Projectile(Projectile::new(
                self.row - 1.0,
                nose_col,
                -1.0,
                0.0,
            )));
        }

        Flow::Sleep(1)
    }

    /// Keep the full frame extent inside the bordered field, zeroing
    /// velocity on any clamped axis.
    fn clamp(&mut self, (rows, cols): (u16, u16)) {
        let (height, width) = frame_size(SHIP_FRAMES[self.frame_ix]);
        let max_row = (rows as f64 - height as f64 - BORDER).max(BORDER);
        let max_col = (cols as f64 - width as f64 - BORDER).max(BORDER);

        if self.row < BORDER {
            self.row = BORDER;
            self.row_speed = 0.0;
        } else if self.row > max_row {
            self.row = max_row;
            self.row_speed = 0.0;
        }
        if self.col < BORDER {
            self.col = BORDER;
            self.col_speed = 0.0;
        } else if self.col > max_col {
            self.col = max_col;
            self.col_speed = 0.0;
        }
    }
}

/// Terminal display task spawned when the ship is destroyed: keeps the
/// game-over art centered, recentering after a resize.
pub struct GameOverScreen {
    drawn: Option<(f64, f64)>,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen { drawn: None }
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        let (rows, cols) = ctx.canvas.size();
        let (height, width) = frame_size(GAME_OVER);
        let top = (rows.saturating_sub(height) / 2) as f64;
        let left = (cols.saturating_sub(width) / 2) as f64;

        if let Some((old_top, old_left)) = self.drawn {
            if (old_top, old_left) != (top, left) {
                draw_art(ctx.canvas, old_top, old_left, GAME_OVER, true);
            }
        }
        draw_art(ctx.canvas, top, left, GAME_OVER, false);
        self.drawn = Some((top, left));
        Flow::Sleep(1)
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
