use ferrule_chess::utils::algebraic::from_algebraic;
use ferrule_chess::{ChessError, ChessGame, Color, GameOutcome, Piece, PieceKind, Square};

fn sq(name: &str) -> Square {
    from_algebraic(name).expect("square should parse")
}

fn play(game: &mut ChessGame, moves: &[&str]) -> GameOutcome {
    let mut outcome = game.outcome();
    for text in moves {
        outcome = game
            .submit_move_text(text)
            .unwrap_or_else(|e| panic!("{text} should be accepted: {e}"));
    }
    outcome
}

#[test]
fn fools_mate_sequence_reports_checkmate() {
    let mut game = ChessGame::new();
    let outcome = play(&mut game, &["g2g4", "e7e5", "f2f3", "d8h4"]);

    assert_eq!(
        outcome,
        GameOutcome::Checkmate {
            winner: Color::Black
        }
    );
    assert!(matches!(
        game.submit_move_text("e1f2"),
        Err(ChessError::GameOver(_))
    ));
}

#[test]
fn mated_position_loaded_from_fen_is_terminal() {
    let game = ChessGame::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/8/PPPPP2P/RNBQKBNR w KQkq - 1 2")
        .expect("FEN should parse");
    assert_eq!(
        game.outcome(),
        GameOutcome::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn check_is_reported_for_the_side_to_move() {
    let mut game = ChessGame::new();
    let outcome = play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(outcome, GameOutcome::Check(Color::Black));

    // Black must answer the check; an unrelated move exposes the king.
    let before = game.state().clone();
    assert_eq!(game.submit_move_text("a7a6"), Err(ChessError::Check));
    assert_eq!(game.state(), &before);
    assert_eq!(play(&mut game, &["g7g6"]), GameOutcome::Ongoing);
}

#[test]
fn every_rejection_leaves_the_game_untouched() {
    let mut game = ChessGame::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1").expect("FEN should parse");
    let state_before = game.state().clone();
    let fen_before = game.fen();

    let attempts: Vec<(ChessError, Result<GameOutcome, ChessError>)> = vec![
        (
            ChessError::InvalidCoordinate("Z9".to_owned()),
            game.submit_algebraic("Z9", "E4", None),
        ),
        (ChessError::NoPieceAtSquare(sq("a1")), game.submit_algebraic("a1", "a2", None)),
        (
            ChessError::NotYourTurn {
                mover: Color::Black,
                side_to_move: Color::White,
            },
            game.submit_algebraic("g8", "h8", None),
        ),
        (
            ChessError::InvalidMove {
                from: sq("e2"),
                to: sq("f3"),
            },
            game.submit_algebraic("e2", "f3", None),
        ),
        (ChessError::Check, game.submit_algebraic("e2", "a2", None)),
    ];

    for (expected, result) in attempts {
        assert_eq!(result, Err(expected));
        assert_eq!(game.state(), &state_before);
        assert_eq!(game.fen(), fen_before);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.move_log().is_empty());
    }
}

#[test]
fn castling_disappears_after_rook_leaves_and_returns() {
    let mut game =
        ChessGame::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").expect("FEN should parse");
    let e1 = sq("e1");
    let before = game.legal_destinations(e1).expect("query should succeed");
    assert!(before.contains(&sq("g1")));
    assert!(before.contains(&sq("c1")));

    play(&mut game, &["h1g1", "a7a6", "g1h1", "a6a5"]);

    let after = game.legal_destinations(e1).expect("query should succeed");
    assert!(!after.contains(&sq("g1")));
    assert!(after.contains(&sq("c1")));
    assert_eq!(
        game.submit_move_text("e1g1"),
        Err(ChessError::InvalidMove {
            from: e1,
            to: sq("g1")
        })
    );
    assert!(game.fen().contains(" w Qkq "), "got {}", game.fen());
}

#[test]
fn castling_disappears_after_king_moves_and_returns() {
    let mut game =
        ChessGame::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").expect("FEN should parse");
    play(&mut game, &["e1f1", "e8d8", "f1e1", "d8e8"]);

    let destinations = game.legal_destinations(sq("e1")).expect("query should succeed");
    assert!(!destinations.contains(&sq("g1")));
    assert!(!destinations.contains(&sq("c1")));
    assert!(game.fen().contains(" w - "), "got {}", game.fen());
}

#[test]
fn castling_moves_both_pieces() {
    let mut game =
        ChessGame::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").expect("FEN should parse");
    play(&mut game, &["e1g1", "e8c8"]);

    assert_eq!(game.piece_at(sq("g1")), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(game.piece_at(sq("f1")), Some(Piece::new(PieceKind::Rook, Color::White)));
    assert_eq!(game.piece_at(sq("c8")), Some(Piece::new(PieceKind::King, Color::Black)));
    assert_eq!(game.piece_at(sq("d8")), Some(Piece::new(PieceKind::Rook, Color::Black)));
    assert_eq!(
        game.move_log().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["O-O", "O-O-O"]
    );
}

#[test]
fn en_passant_is_available_only_immediately() {
    let mut game = ChessGame::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert!(game
        .legal_destinations(sq("e5"))
        .expect("query should succeed")
        .contains(&sq("d6")));

    let mut late = game.clone();
    play(&mut late, &["h2h3", "a6a5"]);
    assert_eq!(
        late.submit_move_text("e5d6"),
        Err(ChessError::InvalidMove {
            from: sq("e5"),
            to: sq("d6")
        })
    );

    play(&mut game, &["e5d6"]);
    assert!(game.piece_at(sq("d5")).is_none());
    assert_eq!(game.captured_by(Color::White), &[Piece::new(PieceKind::Pawn, Color::Black)]);
    assert_eq!(game.move_log().last().map(ToString::to_string), Some("exd6".to_owned()));
}

#[test]
fn threefold_repetition_triggers_on_third_occurrence() {
    let mut game = ChessGame::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    for text in shuffle.iter().chain(shuffle[..3].iter()) {
        let outcome = game.submit_move_text(text).expect("move should be accepted");
        assert_eq!(outcome, GameOutcome::Ongoing, "premature draw after {text}");
    }

    let outcome = game.submit_move_text("f6g8").expect("move should be accepted");
    assert_eq!(outcome, GameOutcome::DrawByRepetition);
    assert!(matches!(
        game.submit_move_text("e2e4"),
        Err(ChessError::GameOver(GameOutcome::DrawByRepetition))
    ));
}

#[test]
fn promotion_defaults_to_queen_and_honours_choice() {
    let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";

    let mut game = ChessGame::from_fen(fen).expect("FEN should parse");
    assert_eq!(
        game.submit_algebraic("a7", "a8", None),
        Ok(GameOutcome::Check(Color::Black))
    );
    assert_eq!(game.piece_at(sq("a8")), Some(Piece::new(PieceKind::Queen, Color::White)));

    for (letter, kind) in [
        ('r', PieceKind::Rook),
        ('B', PieceKind::Bishop),
        ('n', PieceKind::Knight),
        ('Q', PieceKind::Queen),
    ] {
        let mut game = ChessGame::from_fen(fen).expect("FEN should parse");
        game.submit_algebraic("a7", "a8", Some(letter))
            .expect("promotion should be accepted");
        assert_eq!(game.piece_at(sq("a8")), Some(Piece::new(kind, Color::White)));
    }

    let mut black = ChessGame::from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1").expect("FEN should parse");
    assert_eq!(
        black.submit_move_text("a2a1"),
        Ok(GameOutcome::Check(Color::White))
    );
    assert_eq!(black.piece_at(sq("a1")), Some(Piece::new(PieceKind::Queen, Color::Black)));
}

#[test]
fn fen_round_trip_after_a_game_fragment() {
    let mut game = ChessGame::new();
    play(&mut game, &["e2e4", "c7c5", "g1f3", "d7d6", "f1b5", "c8d7", "e1g1"]);

    let exported = game.fen();
    assert_eq!(
        exported,
        "rn1qkbnr/pp1bpppp/3p4/1Bp5/4P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 3 4"
    );
    let reloaded = ChessGame::from_fen(&exported).expect("exported FEN should parse");
    assert_eq!(reloaded.fen(), exported);
}
