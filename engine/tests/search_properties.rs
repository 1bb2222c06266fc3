use std::collections::{HashMap, HashSet};

use tictactoe_engine::{
    Board, Mark, Player, SearchConfig, SearchEngine, SearchResult, SearchStepper, SessionRng,
    check_win, check_win_with_line, decide_move,
};

/// Every position reachable from the empty board with A moving first, paired
/// with the player to move. Finished games are left out.
fn reachable_positions() -> Vec<(Board, Player)> {
    fn visit(board: Board, to_move: Player, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Player)>) {
        if !seen.insert(board) {
            return;
        }
        if check_win_with_line(&board).is_some() || board.is_full() {
            return;
        }
        out.push((board, to_move));
        for cell in board.available_moves() {
            let mut next = board;
            next.place(cell, to_move.mark()).unwrap();
            visit(next, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(Board::new(), Player::A, &mut seen, &mut out);
    out
}

fn winning_cells(board: &Board, player: Player) -> Vec<usize> {
    board
        .available_moves()
        .filter(|&cell| {
            let mut next = *board;
            next.place(cell, player.mark()).unwrap();
            check_win(&next, player.mark()).is_some()
        })
        .collect()
}

fn no_shortcuts() -> SearchConfig {
    SearchConfig::without_shortcuts()
}

#[test]
fn test_immediate_win_is_always_taken() {
    let mut checked = 0;
    for (board, player) in reachable_positions() {
        let wins = winning_cells(&board, player);
        if wins.is_empty() {
            continue;
        }
        let result = decide_move(&board, player, &no_shortcuts());
        assert!(
            wins.contains(&result.cell.unwrap()),
            "missed win on\n{}",
            board
        );
        assert_eq!(result.score, player.sign() * 9);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_single_threat_is_always_blocked() {
    let mut checked = 0;
    for (board, player) in reachable_positions() {
        if !winning_cells(&board, player).is_empty() {
            continue;
        }
        let threats = winning_cells(&board, player.opponent());
        if threats.len() != 1 {
            continue;
        }
        let result = decide_move(&board, player, &no_shortcuts());
        assert_eq!(result.cell, Some(threats[0]), "did not block on\n{}", board);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let board = Board::from_layout("XOX XOO OXX").unwrap();
    assert!(check_win_with_line(&board).is_none());
    for player in [Player::A, Player::B] {
        for config in [SearchConfig::default(), no_shortcuts()] {
            assert_eq!(decide_move(&board, player, &config), SearchResult::draw());
        }
    }
}

#[test]
fn test_opening_shortcuts() {
    let config = SearchConfig::default();
    for _ in 0..20 {
        let cell = decide_move(&Board::new(), Player::A, &config).cell.unwrap();
        assert!([0, 2, 6, 8].contains(&cell));
    }

    for opening in 0..9 {
        let mut board = Board::new();
        board.place(opening, Mark::A).unwrap();
        let cell = decide_move(&board, Player::B, &config).cell.unwrap();
        if opening == 4 {
            assert!([0, 2, 6, 8].contains(&cell));
        } else {
            assert_eq!(cell, 4);
        }
    }
}

/// Plays the engine against every possible sequence of opposing moves and
/// fails if any of them beats it.
fn assert_never_loses(
    board: Board,
    to_move: Player,
    engine_side: Player,
    engine: &mut SearchEngine,
    replies: &mut HashMap<Board, usize>,
) {
    if let Some(line) = check_win_with_line(&board) {
        assert_eq!(line.player, engine_side, "engine lost on\n{}", board);
        return;
    }
    if board.is_full() {
        return;
    }

    if to_move == engine_side {
        let cell = *replies
            .entry(board)
            .or_insert_with(|| engine.search(&board, to_move).cell.unwrap());
        let mut next = board;
        next.place(cell, to_move.mark()).unwrap();
        assert_never_loses(next, to_move.opponent(), engine_side, engine, replies);
    } else {
        for cell in board.available_moves() {
            let mut next = board;
            next.place(cell, to_move.mark()).unwrap();
            assert_never_loses(next, to_move.opponent(), engine_side, engine, replies);
        }
    }
}

#[test]
fn test_engine_never_loses_from_empty_board() {
    for engine_side in [Player::A, Player::B] {
        let mut engine = SearchEngine::with_rng(no_shortcuts(), SessionRng::new(1));
        let mut replies = HashMap::new();
        assert_never_loses(Board::new(), Player::A, engine_side, &mut engine, &mut replies);
    }
}

#[test]
fn test_engine_with_shortcuts_never_loses() {
    for engine_side in [Player::A, Player::B] {
        let mut engine = SearchEngine::with_rng(SearchConfig::default(), SessionRng::new(2));
        let mut replies = HashMap::new();
        assert_never_loses(Board::new(), Player::A, engine_side, &mut engine, &mut replies);
    }
}

#[test]
fn test_stepped_and_batch_results_match() {
    let positions = reachable_positions();
    assert!(positions.iter().any(|(board, _)| board.empty_count() == 8));
    assert!(positions.iter().any(|(board, _)| board.empty_count() == 7));

    for (board, player) in positions {
        let batch = SearchEngine::with_rng(no_shortcuts(), SessionRng::new(0)).search(&board, player);
        let stepped = SearchStepper::new(&board, player, false, &mut SessionRng::new(0)).finish();
        assert_eq!(batch, stepped, "mismatch on\n{}", board);
    }
}

#[test]
fn test_stepped_and_batch_match_on_openings() {
    let mut boards = vec![Board::new()];
    for cell in 0..9 {
        let mut board = Board::new();
        board.place(cell, Mark::A).unwrap();
        boards.push(board);
    }

    for board in boards {
        let player = if board.empty_count() == 9 { Player::A } else { Player::B };
        for use_opening_shortcuts in [true, false] {
            let config = SearchConfig {
                use_opening_shortcuts,
                ..SearchConfig::default()
            };
            let batch = SearchEngine::with_rng(config, SessionRng::new(21)).search(&board, player);
            let stepped =
                SearchStepper::new(&board, player, use_opening_shortcuts, &mut SessionRng::new(21))
                    .finish();
            assert_eq!(batch, stepped);
        }
    }
}
