use space_sweeper::canvas::{draw_art, Canvas, GridCanvas};
use space_sweeper::entities::Emphasis;
use space_sweeper::frames::{frame_size, GAME_OVER, HAZARD_FRAMES, SHIP_FRAMES};

// ── Bounds rules ──────────────────────────────────────────────────────────────

#[test]
fn draw_inside_bounds_lands() {
    let mut canvas = GridCanvas::new(10, 10);
    canvas.draw(3, 4, '*', Emphasis::Normal);
    assert_eq!(canvas.glyph_at(3, 4), '*');
}

#[test]
fn draw_out_of_bounds_is_ignored() {
    let mut canvas = GridCanvas::new(10, 10);
    canvas.draw(-1, 4, '*', Emphasis::Normal);
    canvas.draw(4, -1, '*', Emphasis::Normal);
    canvas.draw(10, 4, '*', Emphasis::Normal);
    canvas.draw(4, 10, '*', Emphasis::Normal);
    assert_eq!(canvas.glyph_count(), 0);
}

#[test]
fn reserved_last_row_and_column_are_ignored() {
    let mut canvas = GridCanvas::new(10, 10);
    canvas.draw(9, 5, '*', Emphasis::Normal);
    canvas.draw(5, 9, '*', Emphasis::Normal);
    assert_eq!(canvas.glyph_count(), 0);
}

#[test]
fn erase_never_drawn_cell_is_a_noop() {
    let mut canvas = GridCanvas::new(10, 10);
    canvas.erase(3, 3);
    canvas.erase(-5, 100); // out of bounds too
    assert_eq!(canvas.glyph_count(), 0);
}

#[test]
fn resize_blanks_the_surface() {
    let mut canvas = GridCanvas::new(10, 10);
    canvas.draw(2, 2, '*', Emphasis::Normal);
    canvas.resize(20, 30);
    assert_eq!(canvas.size(), (20, 30));
    assert_eq!(canvas.glyph_count(), 0);
}

// ── Multi-line art ────────────────────────────────────────────────────────────

#[test]
fn draw_art_skips_spaces() {
    let mut canvas = GridCanvas::new(10, 10);
    draw_art(&mut canvas, 1.0, 1.0, "a b\n c ", false);
    assert_eq!(canvas.glyph_at(1, 1), 'a');
    assert_eq!(canvas.glyph_at(1, 2), ' '); // transparent, not overwritten
    assert_eq!(canvas.glyph_at(1, 3), 'b');
    assert_eq!(canvas.glyph_at(2, 2), 'c');
    assert_eq!(canvas.glyph_count(), 3);
}

#[test]
fn draw_art_negative_erases_exactly_the_block() {
    let mut canvas = GridCanvas::new(10, 10);
    draw_art(&mut canvas, 1.0, 1.0, "ab\ncd", false);
    assert_eq!(canvas.glyph_count(), 4);
    draw_art(&mut canvas, 1.0, 1.0, "ab\ncd", true);
    assert_eq!(canvas.glyph_count(), 0);
}

#[test]
fn draw_art_rounds_fractional_positions() {
    let mut canvas = GridCanvas::new(10, 10);
    draw_art(&mut canvas, 1.6, 2.4, "x", false);
    assert_eq!(canvas.glyph_at(2, 2), 'x');
}

#[test]
fn draw_art_clips_at_edges_without_error() {
    let mut canvas = GridCanvas::new(5, 5);
    draw_art(&mut canvas, 3.0, 3.0, "abc\ndef\nghi", false);
    // only the in-bounds corner lands (last row/col reserved)
    assert_eq!(canvas.glyph_at(3, 3), 'a');
    assert_eq!(canvas.glyph_count(), 1);
}

// ── Frame metrics ─────────────────────────────────────────────────────────────

#[test]
fn frame_size_of_simple_block() {
    assert_eq!(frame_size("ab\ncde\nf"), (3, 3));
}

#[test]
fn frame_size_of_empty_text() {
    assert_eq!(frame_size(""), (0, 0));
}

#[test]
fn ship_frames_share_one_extent() {
    let (rows, cols) = frame_size(SHIP_FRAMES[0]);
    assert!(rows > 0 && cols > 0);
    assert_eq!(frame_size(SHIP_FRAMES[1]), (rows, cols));
}

#[test]
fn all_hazard_frames_have_positive_extent() {
    for frame in HAZARD_FRAMES {
        let (rows, cols) = frame_size(frame);
        assert!(rows >= 2, "hazard art should be at least two rows tall");
        assert!(cols > 0);
    }
}

#[test]
fn game_over_block_is_wide() {
    let (rows, cols) = frame_size(GAME_OVER);
    assert!(rows >= 4);
    assert!(cols > 20);
}
