//! "Perft" move-path test: count the number of leaves at a given depth.
//! Useful for checking the rules engine against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Player};

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Player::Black, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = board.valid_moves(player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, player.opponent(), depth - 1, true);
    }

    all_moves
        .iter()
        .filter_map(|&mv| board.with_move(mv, player))
        .map(|next| leaves_below(next, player.opponent(), depth - 1, false))
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
