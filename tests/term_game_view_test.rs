use tui_snake::core::{Board, Food, GameState, Snake};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, APPLE_COLOR, BORDER_COLOR, SNAKE_COLOR};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let view = GameView::default();

    // 32 cells * 2 columns + border = 66, 24 rows + border = 26.
    let fb = view.render(&state, Viewport::new(66, 26));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(65, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 25).unwrap().ch, '└');
    assert_eq!(fb.get(65, 25).unwrap().ch, '┘');
    assert_eq!(fb.get(0, 0).unwrap().style.fg, BORDER_COLOR);
}

#[test]
fn term_view_draws_cells_as_bracketed_squares() {
    let board = Board::new(4, 3, 20);
    let snake = Snake::with_body([Cell::new(1, 1), Cell::new(0, 1)], Direction::Right);
    let state = GameState::from_parts(board, snake, Food::at(Cell::new(3, 2)), 1);

    // Frame is 4*2+2 by 3+2; no room for the panel.
    let fb = GameView::default().render(&state, Viewport::new(10, 5));

    // Head (1,1) -> columns 3..=4, row 2.
    let head_l = fb.get(3, 2).unwrap();
    let head_r = fb.get(4, 2).unwrap();
    assert_eq!((head_l.ch, head_r.ch), ('[', ']'));
    assert_eq!(head_l.style.bg, SNAKE_COLOR);
    assert_eq!(head_l.style.fg, BORDER_COLOR);

    // Food (3,2) -> columns 7..=8, row 3.
    let food = fb.get(7, 3).unwrap();
    assert_eq!(food.ch, '[');
    assert_eq!(food.style.bg, APPLE_COLOR);

    // Empty cell stays blank.
    assert_eq!(fb.get(5, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_snake_is_drawn_over_food() {
    let board = Board::new(4, 3, 20);
    let snake = Snake::new(Cell::new(2, 0));
    let state = GameState::from_parts(board, snake, Food::at(Cell::new(2, 0)), 1);
    let fb = GameView::default().render(&state, Viewport::new(10, 5));
    assert_eq!(fb.get(5, 1).unwrap().style.bg, SNAKE_COLOR);
}

#[test]
fn term_view_centers_board_in_larger_viewport() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state, Viewport::new(66, 30));

    // start_y = (30 - 26) / 2 = 2
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state, Viewport::new(100, 26));

    let text = all_text(&fb);
    assert!(text.contains("SNAKE"));
    assert!(text.contains("LENGTH"));
    assert!(text.contains("BEST"));
    assert!(text.contains("EPISODE"));
}

#[test]
fn term_view_omits_panel_on_narrow_viewport() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state, Viewport::new(70, 26));
    assert!(!all_text(&fb).contains("LENGTH"));
}

#[test]
fn term_view_reports_too_small_viewport() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state, Viewport::new(40, 10));

    let text = all_text(&fb);
    assert!(text.contains("TOO SMALL"));
    assert!(text.contains("66x26"));
    assert!(!text.contains('┌'));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state, Viewport::new(66, 26), &mut fb);
    assert_eq!((fb.width(), fb.height()), (66, 26));

    view.render_into(&state, Viewport::new(80, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 30));
    assert_eq!(fb.get(7, 2).unwrap().ch, '┌');
}
