use crate::entities::Emphasis;
use crate::sched::{Context, Flow};
use crate::tasks::{Explosion, Task};

enum Phase {
    /// First muzzle-flash frame ('*').
    FlashStar,
    /// Second muzzle-flash frame ('O').
    FlashRing,
    /// Constant-velocity travel until a hit or the field edge.
    Travel,
}

/// A fired shot.  On a hit it resolves the obstacle (first writer wins),
/// spawns an explosion at the impact cell, and terminates; a second shot
/// arriving the same tick finds the registry entry gone and passes
/// through.
pub struct Projectile {
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    phase: Phase,
    drawn: Option<(i32, i32)>,
}

impl Projectile {
    pub fn new(row: f64, col: f64, row_speed: f64, col_speed: f64) -> Self {
        Projectile {
            row,
            col,
            row_speed,
            col_speed,
            phase: Phase::FlashStar,
            drawn: None,
        }
    }

    fn glyph(&self) -> char {
        if self.col_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        match self.phase {
            Phase::FlashStar => {
                let (row, col) = (self.row.round() as i32, self.col.round() as i32);
                ctx.canvas.draw(row, col, '*', Emphasis::Normal);
                self.phase = Phase::FlashRing;
                Flow::Sleep(1)
            }
            Phase::FlashRing => {
                let (row, col) = (self.row.round() as i32, self.col.round() as i32);
                ctx.canvas.draw(row, col, 'O', Emphasis::Normal);
                self.drawn = Some((row, col));
                self.phase = Phase::Travel;
                Flow::Sleep(1)
            }
            Phase::Travel => {
                if let Some((row, col)) = self.drawn.take() {
                    ctx.canvas.erase(row, col);
                    self.row += self.row_speed;
                    self.col += self.col_speed;
                }

                let (rows, cols) = ctx.canvas.size();
                let (row, col) = (self.row.round() as i32, self.col.round() as i32);
                if row < 0 || col < 0 || row >= rows as i32 || col >= cols as i32 {
                    return Flow::Done;
                }

                if let Some(id) = ctx.registry.hit_test(row, col) {
                    if ctx.registry.resolve(id) {
                        ctx.spawn(Task::Explosion(Explosion::new(row as f64, col as f64)));
                    }
                    return Flow::Done;
                }

                ctx.canvas.draw(row, col, self.glyph(), Emphasis::Normal);
                self.drawn = Some((row, col));
                Flow::Sleep(1)
            }
        }
    }
}
