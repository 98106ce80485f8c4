//! "Perft" performance test: count the number of leaves at a given depth.
//! Exercises legality and flipping together against published move counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::{Color, Game};

/// Count the leaves `depth` plies below the starting position, black to move.
/// A side with no legal placement passes, which uses up a ply.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Game::new(), Color::Black, depth, false)
}

fn leaves_below(game: &Game, color: Color, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = game.available_positions(color);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(game, !color, depth - 1, true);
    }

    all_moves
        .into_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.attempt_move(color, mv);
            leaves_below(&next, !color, depth - 1, false)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
