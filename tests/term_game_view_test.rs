use blub::core::Simulation;
use blub::term::draw::{BACKGROUND_COLOR, ENTITY_COLOR, TEXT_COLOR};
use blub::term::{FrameBuffer, GameView, Viewport};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    fb.row(y)
        .map(|row| row.iter().map(|c| c.ch).collect())
        .unwrap_or_default()
}

fn initial_frame() -> FrameBuffer {
    GameView::default().render(&Simulation::new().snapshot(), Viewport::new(80, 24))
}

#[test]
fn test_border_and_title() {
    // 80x24 lays out a 58x22 field at (11, 1).
    let fb = initial_frame();
    assert_eq!(fb.get(10, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(69, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(10, 23).unwrap().ch, '└');
    assert_eq!(fb.get(69, 23).unwrap().ch, '┘');
    assert!(row_text(&fb, 0).contains(" Blub "));
}

#[test]
fn test_labels_on_separate_rows() {
    let fb = initial_frame();
    assert!(row_text(&fb, 1).contains("Score: 0"));
    assert!(row_text(&fb, 2).contains("High Score: 0"));

    let s = fb.get(11, 1).unwrap();
    assert_eq!(s.ch, 'S');
    assert_eq!(s.style.fg, TEXT_COLOR);
    // The fish sits under the score label at the origin.
    assert_eq!(s.style.bg, ENTITY_COLOR);
}

#[test]
fn test_net_and_background_colors() {
    let fb = initial_frame();
    // Net at (600, 200, 15, 100) covers columns 54..56 and rows 9..14.
    let net = fb.get(65, 12).unwrap();
    assert_eq!(net.style.bg, ENTITY_COLOR);
    assert_eq!(fb.get(67, 12).unwrap().style.bg, BACKGROUND_COLOR);

    let water = fb.get(40, 15).unwrap();
    assert_eq!(water.ch, ' ');
    assert_eq!(water.style.bg, BACKGROUND_COLOR);
}

#[test]
fn test_score_label_follows_simulation() {
    let mut sim = Simulation::new();
    // Catch the fish once: lower the net 20 ticks, then wait.
    for _ in 0..20 {
        sim.update(blub::types::NetInput::DOWN);
    }
    while sim.score() == 0 {
        sim.update(blub::types::NetInput::NONE);
    }
    let fb = GameView::default().render(&sim.snapshot(), Viewport::new(80, 24));
    assert!(row_text(&fb, 1).contains("Score: 1"));
    assert!(row_text(&fb, 2).contains("High Score: 1"));
}

#[test]
fn test_tiny_viewport_is_blank() {
    let fb = GameView::default().render(&Simulation::new().snapshot(), Viewport::new(3, 3));
    assert_eq!(fb.width(), 3);
    assert!(fb.cells().iter().all(|c| c.ch == ' '));
}
