use crate::canvas::draw_art;
use crate::frames::frame_size;
use crate::sched::{Context, Flow};

/// A falling hazard.  Owns its registry entry for the duration of its
/// flight: registered on first resume, deregistered on every exit path
/// (fall-through, resolved by a projectile, or cleanup by whichever
/// component cancelled it).
pub struct FallingObstacle {
    frame: &'static str,
    row: f64,
    col: f64,
    speed: f64,
    id: Option<u64>,
    drawn: Option<f64>,
}

impl FallingObstacle {
    pub fn new(col: f64, frame: &'static str, speed: f64) -> Self {
        FallingObstacle {
            frame,
            row: 0.0,
            col,
            speed,
            id: None,
            drawn: None,
        }
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        let (height, width) = frame_size(self.frame);
        let (rows, _) = ctx.canvas.size();

        let id = match self.id {
            Some(id) => id,
            None => {
                let id = ctx.registry.register(self.row, self.col, height, width);
                self.id = Some(id);
                id
            }
        };

        if let Some(row) = self.drawn.take() {
            draw_art(ctx.canvas, row, self.col, self.frame, true);
        }

        // A projectile already destroyed this obstacle (and removed the
        // registry entry); retire without redrawing.
        if ctx.registry.take_resolved(id) {
            return Flow::Done;
        }

        // Lower edge past the bottom boundary: normal fall-through.
        if self.row.round() as i32 + height as i32 >= rows as i32 {
            ctx.registry.deregister(id);
            return Flow::Done;
        }

        draw_art(ctx.canvas, self.row, self.col, self.frame, false);
        self.drawn = Some(self.row);
        self.row += self.speed;
        ctx.registry.update_row(id, self.row);
        Flow::Sleep(1)
    }
}
