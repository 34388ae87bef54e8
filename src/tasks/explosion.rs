use crate::canvas::draw_art;
use crate::frames::{frame_size, EXPLOSION_FRAMES};
use crate::sched::{Context, Flow};

/// Cosmetic puff sequence centered on an impact cell.  Beeps once at
/// the start; never touches the registry.
pub struct Explosion {
    center_row: f64,
    center_col: f64,
    frame_ix: usize,
    drawn: bool,
    started: bool,
}

impl Explosion {
    pub fn new(center_row: f64, center_col: f64) -> Self {
        Explosion {
            center_row,
            center_col,
            frame_ix: 0,
            drawn: false,
            started: false,
        }
    }

    fn corner(&self, frame: &str) -> (f64, f64) {
        let (height, width) = frame_size(frame);
        (
            self.center_row - height as f64 / 2.0,
            self.center_col - width as f64 / 2.0,
        )
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        if !self.started {
            ctx.canvas.beep();
            self.started = true;
        }

        let frame = EXPLOSION_FRAMES[self.frame_ix];
        let (top, left) = self.corner(frame);
        if !self.drawn {
            draw_art(ctx.canvas, top, left, frame, false);
            self.drawn = true;
            Flow::Sleep(1)
        } else {
            draw_art(ctx.canvas, top, left, frame, true);
            self.drawn = false;
            self.frame_ix += 1;
            if self.frame_ix == EXPLOSION_FRAMES.len() {
                Flow::Done
            } else {
                Flow::Sleep(1)
            }
        }
    }
}
