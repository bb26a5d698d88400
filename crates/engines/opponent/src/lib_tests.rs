use super::*;
use chess_core::Square;

fn at(name: &str) -> Square {
    name.parse().unwrap()
}

/// Black can take a pawn on a3 with the knight or a queen on h4 with the rook.
const PAWN_OR_QUEEN: &str = "4k3/8/7r/8/7Q/P7/2n5/6K1";

#[test]
fn opponent_returns_generated_move() {
    let board = Board::standard();
    for difficulty in Difficulty::ALL {
        let mut opponent = Opponent::seeded(difficulty, 7);
        let mv = opponent.choose_move(&board, Color::White).unwrap();
        assert!(moves_for(&board, Color::White).contains(&mv));
    }
}

#[test]
fn opponent_without_pieces_has_no_move() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/8").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    for difficulty in Difficulty::ALL {
        assert_eq!(choose_move(&board, Color::White, difficulty, &mut rng), None);
    }
}

#[test]
fn opponent_blocked_in_has_no_move() {
    // lone black pawn blocked on h5, nothing else
    let board = Board::from_placement("8/8/8/7p/7P/8/8/8").unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(choose_move(&board, Color::Black, Difficulty::Hard, &mut rng), None);
}

#[test]
fn hard_always_takes_the_queen() {
    let board = Board::from_placement(PAWN_OR_QUEEN).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let mv = choose_move(&board, Color::Black, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(mv, Move::new(at("h6"), at("h4")));
    }
}

#[test]
fn hard_prefers_the_king_over_everything() {
    let board = Board::from_placement("4k3/8/8/8/7q/8/3r4/4K2Q").unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let mv = choose_move(&board, Color::Black, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.to, at("e1"));
}

#[test]
fn hard_breaks_ties_by_enumeration_order() {
    // three pawn captures of equal value: the rook on row 2 is enumerated
    // before the knight on row 6, and its downward ray before its sideways one
    let board = Board::from_placement("4k3/8/r6P/8/8/8/2n5/P5K1").unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let mv = choose_move(&board, Color::Black, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(mv, Move::new(at("a6"), at("a1")));
    }
}

#[test]
fn hard_without_captures_plays_something() {
    let board = Board::standard();
    let mut rng = StdRng::seed_from_u64(6);
    let mv = choose_move(&board, Color::Black, Difficulty::Hard, &mut rng).unwrap();
    assert!(moves_for(&board, Color::Black).contains(&mv));
}

#[test]
fn medium_captures_about_half_the_time() {
    // a single capture among many quiet moves, so the random fallback
    // almost never lands on it by accident
    let board = Board::from_placement("4k3/8/8/8/8/8/4K3/r6P").unwrap();
    let capture = Move::new(at("a1"), at("h1"));
    let all = moves_for(&board, Color::Black);
    assert!(all.contains(&capture));

    let mut rng = StdRng::seed_from_u64(8);
    let trials = 4000;
    let mut hits = 0;
    for _ in 0..trials {
        let mv = choose_move(&board, Color::Black, Difficulty::Medium, &mut rng).unwrap();
        if mv == capture {
            hits += 1;
        }
    }
    // 0.5 from the capture branch plus 0.5 / n from the fallback
    let expected = 0.5 + 0.5 / all.len() as f64;
    let rate = hits as f64 / trials as f64;
    assert!((rate - expected).abs() < 0.05, "capture rate {rate}, expected {expected}");
}

#[test]
fn easy_ignores_captures() {
    let board = Board::from_placement("4k3/8/8/8/8/8/4K3/r6P").unwrap();
    let capture = Move::new(at("a1"), at("h1"));
    let n = moves_for(&board, Color::Black).len() as f64;

    let mut rng = StdRng::seed_from_u64(9);
    let trials = 4000;
    let hits = (0..trials)
        .filter(|_| choose_move(&board, Color::Black, Difficulty::Easy, &mut rng) == Some(capture))
        .count();
    let rate = hits as f64 / trials as f64;
    assert!((rate - 1.0 / n).abs() < 0.05, "capture rate {rate}");
}

#[test]
fn difficulty_delays_and_names() {
    assert_eq!(Difficulty::Easy.thinking_delay().as_millis(), 500);
    assert_eq!(Difficulty::Medium.thinking_delay().as_millis(), 1000);
    assert_eq!(Difficulty::Hard.thinking_delay().as_millis(), 1500);
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("brutal".parse::<Difficulty>().is_err());
    assert_eq!(Opponent::seeded(Difficulty::Easy, 0).name(), "Opponent (easy)");
}
