use othello_rules::rules;
use othello_rules::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Play a game where each side always takes its first listed move,
/// passing when it has none, and return the finished game.
fn play_first_moves(black: &str, white: &str) -> Game {
    let mut game = new_game();
    game.register_player(black, Color::Black);
    game.register_player(white, Color::White);

    let mut color = Color::default();
    while !game.is_terminal() {
        let moves = game.available_positions(color);
        if let Some(&mv) = moves.first() {
            let before = game.score();
            match game.attempt_move(color, mv) {
                Outcome::Applied(board) => {
                    assert_eq!(&board, game.board());
                    let after = game.score();
                    assert_eq!(
                        u16::from(after.black) + u16::from(after.white),
                        u16::from(before.black) + u16::from(before.white) + 1
                    );
                }
                other => panic!("legal move {} was not applied: {:?}", mv, other),
            }
        } else {
            assert!(rules::legal_move_exists(game.board(), !color));
        }
        color = !color;
    }

    game
}

#[test]
fn first_move_game_runs_to_completion() {
    init_tracing();
    let game = play_first_moves("Ada", "Grace");

    assert!(rules::is_terminal(game.board()));
    assert!(game.available_positions(Color::Black).is_empty());
    assert!(game.available_positions(Color::White).is_empty());

    let score = game.score();
    assert_eq!(
        score.black as usize + score.white as usize + game.board().count_empty() as usize,
        NUM_SPACES
    );

    let expected = match score.black.cmp(&score.white) {
        std::cmp::Ordering::Equal => WinnerSummary::Tie,
        std::cmp::Ordering::Greater => WinnerSummary::Win {
            color: Color::Black,
            name: Some("Ada".to_string()),
        },
        std::cmp::Ordering::Less => WinnerSummary::Win {
            color: Color::White,
            name: Some("Grace".to_string()),
        },
    };
    assert_eq!(game.winner_summary(), expected);
}

#[test]
fn finished_game_ignores_further_moves() {
    init_tracing();
    let mut game = play_first_moves("Ada", "Grace");
    let board = *game.board();
    let summary = game.winner_summary();

    for loc in Location::interior().take(10) {
        for color in [Color::Black, Color::White] {
            assert_eq!(
                game.attempt_move(color, loc),
                Outcome::GameOver(summary.clone())
            );
        }
    }
    assert_eq!(game.board(), &board);
}

#[test]
fn rendered_board_parses_back() {
    let game = play_first_moves("Ada", "Grace");
    let rows = render_rows(game.board());

    assert_eq!(Board::from_rows(&rows), Ok(*game.board()));
    assert_eq!(game.board().to_string().parse::<Board>(), Ok(*game.board()));
}

#[test]
fn moves_from_notation() {
    init_tracing();
    let mut game = new_game();

    for (color, notation) in [("black", "D3"), ("white", "C3"), ("black", "b3")] {
        let color: Color = color.parse().unwrap();
        let loc: Location = notation.parse().unwrap();
        assert!(game.attempt_move(color, loc).is_applied(), "{} {}", color, notation);
    }

    assert_eq!(game.score(), Score { black: 5, white: 2 });
}
