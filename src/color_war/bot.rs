//! Greedy color choice for bot-controlled players.
//!
//! The bot estimates what each color would conquer: every free cell touching
//! its territory is labelled with its own color, labels spread through free
//! cells of the same color, and the color with the most labelled cells wins.
//! One ply, no lookahead.

use std::cmp::Reverse;
use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use super::board::{Board, Cell};
use super::color::Color;
use super::player::Player;

/// Cells each color would add to `me` if picked next, indexed by
/// [`Color::index`]
pub fn frontier_tally(board: &Board, me: &Player, rival: &Player) -> [usize; 6] {
    scan_frontier(board, me, rival).counts
}

/// Per-color conquest estimate plus the row-major position of the first
/// cell counted for each color
struct FrontierScan {
    counts: [usize; 6],
    first_seen: [usize; 6],
}

fn scan_frontier(board: &Board, me: &Player, rival: &Player) -> FrontierScan {
    let size = board.size();
    let is_free = |cell: Cell| !me.has_cell(cell) && !rival.has_cell(cell);
    let mut reached = vec![false; board.area()];
    let mut worklist = VecDeque::new();

    for owned in me.territory().cells() {
        for next in owned.neighbors(size) {
            let index = next.row * size + next.col;
            if is_free(next) && !reached[index] {
                reached[index] = true;
                worklist.push_back(next);
            }
        }
    }

    let mut scan = FrontierScan {
        counts: [0; 6],
        first_seen: [usize::MAX; 6],
    };
    while let Some(cell) = worklist.pop_front() {
        let color = board.get(cell);
        scan.counts[color.index()] += 1;
        let first = &mut scan.first_seen[color.index()];
        *first = (*first).min(cell.row * size + cell.col);

        for next in cell.neighbors(size) {
            let index = next.row * size + next.col;
            if !reached[index] && is_free(next) && board.get(next) == color {
                reached[index] = true;
                worklist.push_back(next);
            }
        }
    }

    scan
}

/// Pick the free color with the largest tally, or a random free color when
/// no frontier color is available. Never returns a color held by either
/// player.
pub fn pick_color<R: Rng + ?Sized>(board: &Board, me: &Player, rival: &Player, rng: &mut R) -> Color {
    let is_free = |color: Color| color != me.color && color != rival.color;
    let scan = scan_frontier(board, me, rival);

    // Equal counts go to the color whose cells come first scanning row by row
    let best = Color::ALL
        .iter()
        .copied()
        .filter(|color| is_free(*color) && scan.counts[color.index()] > 0)
        .max_by_key(|color| (scan.counts[color.index()], Reverse(scan.first_seen[color.index()])));

    if let Some(color) = best {
        debug!(player = %me.id, ?color, gain = scan.counts[color.index()], "bot picked frontier color");
        return color;
    }

    let free: Vec<Color> = Color::ALL.iter().copied().filter(|color| is_free(*color)).collect();
    let color = free[rng.gen_range(0..free.len())];
    debug!(player = %me.id, ?color, "bot picked random color");
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_war::player::PlayerId;
    use crate::controller::Controller;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn seat(id: PlayerId, color: Color, board: &Board) -> Player {
        let mut player = Player::new(id, color, Controller::Bot, board.size());
        player.add_cell(id.home(board.size()));
        player
    }

    #[test]
    fn test_tally_spreads_through_same_color() {
        // 1 Blue, 2 Cyan, 3 Green, 5 Red
        let board = Board::from_rows(&[
            &[1, 3, 3, 2],
            &[1, 3, 3, 3],
            &[2, 2, 2, 3],
            &[5, 2, 1, 1],
        ]);
        let me = seat(PlayerId::One, Color::Red, &board);
        let rival = seat(PlayerId::Two, Color::Cyan, &board);

        let tally = frontier_tally(&board, &me, &rival);

        // Frontier of (3, 0) is (2, 0) Cyan and (3, 1) Cyan; the Cyan
        // region they touch spans four cells
        assert_eq!(tally[Color::Cyan.index()], 4);
        assert_eq!(tally[Color::Green.index()], 0);
    }

    #[test]
    fn test_picks_largest_free_color() {
        let board = Board::from_rows(&[
            &[3, 3, 4, 2],
            &[3, 3, 4, 4],
            &[1, 1, 1, 4],
            &[5, 3, 3, 3],
        ]);
        let me = seat(PlayerId::One, Color::Red, &board);
        let rival = seat(PlayerId::Two, Color::Cyan, &board);
        let mut rng = StdRng::seed_from_u64(1);

        // Blue reaches 3 cells above, Green only the 3 cells to the right.
        // Blue shows up first row by row, so it takes the tie.
        assert_eq!(pick_color(&board, &me, &rival, &mut rng), Color::Blue);
    }

    #[test]
    fn test_tie_goes_to_first_color_in_row_order() {
        // 1 Blue, 2 Cyan, 3 Green, 4 Magenta, 5 Red
        let board = Board::from_rows(&[&[4, 4, 2], &[5, 4, 4], &[3, 1, 4]]);
        let me = seat(PlayerId::One, Color::Green, &board);
        let rival = seat(PlayerId::Two, Color::Cyan, &board);
        let mut rng = StdRng::seed_from_u64(5);

        let tally = frontier_tally(&board, &me, &rival);
        assert_eq!(tally[Color::Red.index()], 1);
        assert_eq!(tally[Color::Blue.index()], 1);

        // Red at (1, 0) comes before Blue at (2, 1), despite palette order
        assert_eq!(pick_color(&board, &me, &rival, &mut rng), Color::Red);
    }

    #[test]
    fn test_skips_taken_frontier_color() {
        let board = Board::from_rows(&[&[1, 1, 2], &[2, 2, 2], &[5, 2, 2]]);
        let me = seat(PlayerId::One, Color::Red, &board);
        // The whole frontier is Cyan, which the rival holds
        let rival = seat(PlayerId::Two, Color::Cyan, &board);
        let mut rng = StdRng::seed_from_u64(3);

        let color = pick_color(&board, &me, &rival, &mut rng);

        assert_ne!(color, Color::Cyan);
        assert_ne!(color, Color::Red);
    }

    #[test]
    fn test_random_fallback_when_frontier_is_taken() {
        let board = Board::filled(3, Color::Cyan);
        let me = seat(PlayerId::One, Color::Red, &board);
        let rival = seat(PlayerId::Two, Color::Cyan, &board);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let color = pick_color(&board, &me, &rival, &mut rng);
            assert_ne!(color, Color::Red);
            assert_ne!(color, Color::Cyan);
        }
    }

    proptest! {
        #[test]
        fn prop_never_picks_held_color(
            size in 2usize..=7,
            cells in prop::collection::vec(0usize..6, 49),
            mine in 0usize..6,
            offset in 1usize..6,
            seed in any::<u64>(),
        ) {
            let mut board = Board::filled(size, Color::Blue);
            for row in 0..size {
                for col in 0..size {
                    board.set(Cell::new(row, col), Color::ALL[cells[row * size + col]]);
                }
            }
            let my_color = Color::ALL[mine];
            let rival_color = Color::ALL[(mine + offset) % 6];
            let mut me = seat(PlayerId::One, my_color, &board);
            let mut rival = seat(PlayerId::Two, rival_color, &board);
            me.conquer(&board, &rival);
            rival.conquer(&board, &me);
            let mut rng = StdRng::seed_from_u64(seed);

            let picked = pick_color(&board, &me, &rival, &mut rng);

            prop_assert_ne!(picked, my_color);
            prop_assert_ne!(picked, rival_color);
        }
    }
}
