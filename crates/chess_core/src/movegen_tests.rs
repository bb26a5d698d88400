use super::*;

fn at(name: &str) -> Square {
    name.parse().unwrap()
}

fn set(names: &[&str]) -> BTreeSet<Square> {
    names.iter().map(|n| at(n)).collect()
}

fn place(board: &mut Board, name: &str, color: Color, kind: PieceKind) {
    board.set_piece(at(name), Some(Piece::new(color, kind)));
}

#[test]
fn test_startpos_moves() {
    let b = Board::standard();
    // 16 pawn moves + 4 knight moves per side
    assert_eq!(moves_for(&b, Color::White).len(), 20);
    assert_eq!(moves_for(&b, Color::Black).len(), 20);
}

#[test]
fn test_empty_square_has_no_targets() {
    let empty = Board::empty();
    let start = Board::standard();
    for sq in Square::all() {
        assert!(legal_targets(&empty, sq).is_empty());
        if start.is_empty(sq) {
            assert!(legal_targets(&start, sq).is_empty());
        }
    }
}

#[test]
fn test_pawn_single_and_double_step() {
    let b = Board::standard();
    assert_eq!(legal_targets(&b, at("e2")), set(&["e3", "e4"]));
    assert_eq!(legal_targets(&b, at("d7")), set(&["d6", "d5"]));
}

#[test]
fn test_pawn_double_step_only_from_home_row() {
    let mut b = Board::empty();
    place(&mut b, "e3", Color::White, PieceKind::Pawn);
    place(&mut b, "c6", Color::Black, PieceKind::Pawn);
    assert_eq!(legal_targets(&b, at("e3")), set(&["e4"]));
    assert_eq!(legal_targets(&b, at("c6")), set(&["c5"]));
}

#[test]
fn test_pawn_double_step_blocked() {
    let mut b = Board::standard();
    // blocker directly in front: no moves at all
    place(&mut b, "e3", Color::Black, PieceKind::Knight);
    assert!(legal_targets(&b, at("e2")).is_empty());

    // blocker on the double-step square: single step only
    let mut b = Board::standard();
    place(&mut b, "d4", Color::White, PieceKind::Knight);
    assert_eq!(legal_targets(&b, at("d2")), set(&["d3"]));
}

#[test]
fn test_pawn_captures_only_opponents() {
    let mut b = Board::empty();
    place(&mut b, "e4", Color::White, PieceKind::Pawn);
    place(&mut b, "d5", Color::Black, PieceKind::Pawn);
    place(&mut b, "f5", Color::White, PieceKind::Knight);
    assert_eq!(legal_targets(&b, at("e4")), set(&["e5", "d5"]));
}

#[test]
fn test_pawn_on_last_rank_is_stuck() {
    let mut b = Board::empty();
    place(&mut b, "a8", Color::White, PieceKind::Pawn);
    place(&mut b, "h1", Color::Black, PieceKind::Pawn);
    assert!(legal_targets(&b, at("a8")).is_empty());
    assert!(legal_targets(&b, at("h1")).is_empty());
}

#[test]
fn test_knight_targets() {
    let b = Board::standard();
    assert_eq!(legal_targets(&b, at("g1")), set(&["f3", "h3"]));

    let mut b = Board::empty();
    place(&mut b, "a1", Color::White, PieceKind::Knight);
    place(&mut b, "b3", Color::White, PieceKind::Pawn);
    place(&mut b, "c2", Color::Black, PieceKind::Pawn);
    assert_eq!(legal_targets(&b, at("a1")), set(&["c2"]));
}

#[test]
fn test_rook_rays_stop_at_first_blocker() {
    let mut b = Board::empty();
    place(&mut b, "d4", Color::White, PieceKind::Rook);
    place(&mut b, "d6", Color::Black, PieceKind::Pawn);
    place(&mut b, "f4", Color::White, PieceKind::Pawn);
    let targets = legal_targets(&b, at("d4"));
    assert_eq!(
        targets,
        set(&["d5", "d6", "d3", "d2", "d1", "c4", "b4", "a4", "e4"])
    );
}

#[test]
fn test_bishop_diagonals() {
    let mut b = Board::empty();
    place(&mut b, "c1", Color::White, PieceKind::Bishop);
    place(&mut b, "e3", Color::Black, PieceKind::Knight);
    assert_eq!(legal_targets(&b, at("c1")), set(&["d2", "e3", "b2", "a3"]));
    // bishop boxed in at the start
    assert!(legal_targets(&Board::standard(), at("c1")).is_empty());
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let mut b = Board::empty();
    place(&mut b, "d4", Color::White, PieceKind::Queen);
    place(&mut b, "f6", Color::Black, PieceKind::Rook);
    place(&mut b, "b4", Color::White, PieceKind::Pawn);
    place(&mut b, "d7", Color::Black, PieceKind::Pawn);

    let queen = legal_targets(&b, at("d4"));

    let mut rook_board = b.clone();
    place(&mut rook_board, "d4", Color::White, PieceKind::Rook);
    let mut bishop_board = b.clone();
    place(&mut bishop_board, "d4", Color::White, PieceKind::Bishop);
    let union: BTreeSet<Square> = legal_targets(&rook_board, at("d4"))
        .union(&legal_targets(&bishop_board, at("d4")))
        .copied()
        .collect();

    assert_eq!(queen, union);
    assert!(queen.contains(&at("f6")));
    assert!(!queen.contains(&at("g7")));
    assert!(queen.contains(&at("d7")));
    assert!(!queen.contains(&at("d8")));
    assert!(!queen.contains(&at("b4")));
    assert_eq!(queen.len(), 22);
}

#[test]
fn test_king_steps_without_castling() {
    let mut b = Board::empty();
    place(&mut b, "e1", Color::White, PieceKind::King);
    place(&mut b, "h1", Color::White, PieceKind::Rook);
    place(&mut b, "d2", Color::Black, PieceKind::Queen);
    assert_eq!(
        legal_targets(&b, at("e1")),
        set(&["d1", "f1", "d2", "e2", "f2"])
    );
}

#[test]
fn test_king_may_step_into_attack() {
    // no check detection: the king may walk next to the enemy king
    let mut b = Board::empty();
    place(&mut b, "e4", Color::White, PieceKind::King);
    place(&mut b, "e6", Color::Black, PieceKind::King);
    assert!(legal_targets(&b, at("e4")).contains(&at("e5")));
}

#[test]
fn test_slider_rays_never_pass_blockers() {
    let b = Board::from_placement("r1b1k2r/pp3ppp/2n1pn2/q1bp4/3P4/2N1PN2/PPQB1PPP/R3KB1R")
        .unwrap();
    for color in [Color::White, Color::Black] {
        for (from, pc) in b.pieces(color) {
            let dirs: &[(i8, i8)] = match pc.kind {
                PieceKind::Rook => &ROOK_DIRS,
                PieceKind::Bishop => &BISHOP_DIRS,
                PieceKind::Queen => &QUEEN_DIRS,
                _ => continue,
            };
            let targets = legal_targets(&b, from);
            for &(dr, dc) in dirs {
                let mut blocked = false;
                let mut cur = from.offset(dr, dc);
                while let Some(sq) = cur {
                    if blocked {
                        assert!(!targets.contains(&sq), "{from} reaches past blocker to {sq}");
                    } else if let Some(occ) = b.piece_at(sq) {
                        assert_eq!(targets.contains(&sq), occ.color != color);
                        blocked = true;
                    } else {
                        assert!(targets.contains(&sq));
                    }
                    cur = sq.offset(dr, dc);
                }
            }
        }
    }
}

#[test]
fn test_query_is_idempotent() {
    let b = Board::standard();
    for sq in Square::all() {
        assert_eq!(legal_targets(&b, sq), legal_targets(&b, sq));
    }
}

#[test]
fn test_moves_for_order_is_row_major() {
    let mut b = Board::empty();
    place(&mut b, "h8", Color::Black, PieceKind::King);
    place(&mut b, "a1", Color::Black, PieceKind::Knight);
    let moves = moves_for(&b, Color::Black);
    // king on row 0 comes before the knight on row 7
    assert_eq!(moves.first().unwrap().from, at("h8"));
    assert_eq!(moves.last().unwrap().from, at("a1"));
    assert_eq!(moves.len(), 3 + 2);
}
