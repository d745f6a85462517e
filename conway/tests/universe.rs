// Engine behaviour through the public API only.

use conway::{Engine, EngineError};

fn diagonal() -> Engine {
    let mut engine = Engine::new(3, 3, 5).unwrap();
    engine.set_cells(&[(0, 0), (1, 1), (2, 2)]).unwrap();
    engine
}

fn spaceship() -> Engine {
    let mut engine = Engine::new(6, 6, 5).unwrap();
    engine.set_cells(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]).unwrap();
    engine
}

#[test]
fn render() {
    assert_eq!(diagonal().to_string(), "◼◻◻\n◻◼◻\n◻◻◼\n");
}

#[test]
fn toggle_cell() {
    let mut engine = diagonal();
    engine.toggle_cell(0, 0).unwrap();
    assert_eq!(engine.to_string(), "◻◻◻\n◻◼◻\n◻◻◼\n");
}

#[test]
fn tick_moves_spaceship() {
    let mut engine = spaceship();
    engine.tick();

    let mut expected = Engine::new(6, 6, 5).unwrap();
    expected.set_cells(&[(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]).unwrap();

    assert_eq!(engine.to_string(), expected.to_string());
    assert_eq!(engine.as_bytes(), expected.as_bytes());
}

#[test]
fn spaceship_returns_to_shape_after_wrapping() {
    // A glider on a 6x6 torus is back where it started after 24 ticks:
    // 4 ticks per diagonal step, 6 steps to wrap both axes.
    let mut engine = spaceship();
    let start = engine.to_string();
    for _ in 0..24 {
        engine.tick();
        assert_eq!(engine.live_count(), 5);
    }
    assert_eq!(engine.to_string(), start);
    assert_eq!(engine.generation(), 24);
}

#[test]
#[cfg(target_endian = "little")]
fn byte_view_matches_bit_layout() {
    let mut engine = Engine::new(4, 4, 5).unwrap();
    engine.toggle_cell(0, 0).unwrap(); // bit 0
    engine.toggle_cell(2, 1).unwrap(); // bit 9
    assert_eq!(engine.as_bytes(), &[0b0000_0001, 0b0000_0010, 0, 0]);
}

#[test]
fn reset_after_mutations() {
    let mut engine = spaceship();
    engine.tick();
    engine.toggle_cell(0, 0).unwrap();
    engine.reset(20, 10, 3).unwrap();

    assert_eq!(engine.width(), 20);
    assert_eq!(engine.height(), 10);
    assert_eq!(engine.cell_size(), 3);
    assert!(engine.live_cell_positions().is_empty());
    assert_eq!(
        engine.reset(20, 0, 3),
        Err(EngineError::InvalidDimension { width: 20, height: 0 })
    );
}

#[test]
fn randomize_is_repeatable() {
    let mut a = Engine::new(32, 32, 5).unwrap();
    let mut b = Engine::new(32, 32, 5).unwrap();
    a.randomize(7);
    b.randomize(7);
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_eq!(a.generation(), 0);
}
