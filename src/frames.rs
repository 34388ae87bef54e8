//! ASCII-art frame assets and frame geometry, no I/O.
//!
//! Frames are opaque multi-line blocks; everything a drawing task needs
//! to know about one is its extent, computed by [`frame_size`].

/// Two-frame ship animation cycle (exhaust flicker).
pub const SHIP_FRAMES: [&str; 2] = [
    r#"  .
 /.\
 |o|
/|=|\
 ' '"#,
    r#"  .
 /.\
 |o|
/|=|\
 . ."#,
];

/// The six falling-hazard variants, picked at random by the spawner.
pub const HAZARD_FRAMES: [&str; 6] = [
    // telescope
    r#" .--.
 |  |
 |  |
 '--'"#,
    // duck
    r#"  _
 ( o)>
  \_)"#,
    // lamp
    r#"  |
 _|_
(___)"#,
    // small scrap
    r#"\ /
 x
/ \"#,
    // fuel tank
    r#" ___
/   \
\___/"#,
    // dead satellite
    r#" +-+
=|#|=
 +-+"#,
];

/// Four-frame dissipating puff shown at an impact cell.
pub const EXPLOSION_FRAMES: [&str; 4] = [
    r#"     (_)
 (  (   (  (
() (  (  )
  ( )  ()"#,
    r#"     (_)
 (  (   (
   (  (  )
    )  ("#,
    r#"      (
    (   (
   (     (
    )  ("#,
    r#"      (
        (
      (
"#,
];

/// Terminal "game over" block shown after the ship is destroyed.
pub const GAME_OVER: &str = r#"  ____                         ___
 / ___| __ _ _ __ ___   ___   / _ \__   _____ _ __
| |  _ / _` | '_ ` _ \ / _ \ | | | \ \ / / _ \ '__|
| |_| | (_| | | | | | |  __/ | |_| |\ V /  __/ |
 \____|\__,_|_| |_| |_|\___|  \___/  \_/ \___|_|"#;

/// Row/column extent of a multi-line art block.
pub fn frame_size(text: &str) -> (u16, u16) {
    let rows = text.lines().count() as u16;
    let cols = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u16;
    (rows, cols)
}
