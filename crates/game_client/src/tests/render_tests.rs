use super::*;
use serde_json::json;

fn state_with(moves: &[&str], result: Option<GameResult>) -> GameState {
    GameState {
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".into(),
        history: GameHistory {
            moves: moves.iter().map(|m| m.to_string()).collect(),
            result,
            date: json!("2019.06.01"),
        },
    }
}

#[test]
fn result_labels_cover_every_code() {
    assert_eq!(result_to_string(None), "In progress");
    assert_eq!(result_to_string(Some(&GameResult::Draw)), "Draw");
    assert_eq!(result_to_string(Some(&GameResult::WhiteWins)), "Whites win");
    assert_eq!(result_to_string(Some(&GameResult::BlackWins)), "Blacks win");
    assert_eq!(
        result_to_string(Some(&GameResult::Unrecognized(json!(2)))),
        "In progress"
    );
}

#[test]
fn rows_alternate_starting_with_white() {
    let moves: Vec<String> = (0..7).map(|i| format!("m{i}")).collect();
    let rows = history_rows(&moves);
    assert_eq!(rows.len(), 7);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index, i);
        let expected = if i % 2 == 0 { "Whites" } else { "Blacks" };
        assert_eq!(row.side_label(), expected);
        assert_eq!(row.notation, moves[i]);
    }
    assert!(history_rows(&[]).is_empty());
}

#[test]
fn three_moves_render_as_white_black_white() {
    let rendered = RenderedState::from(&state_with(&["e4", "e5", "Nf3"], None));
    let summary: Vec<(usize, &str, &str)> = rendered
        .rows
        .iter()
        .map(|row| (row.index, row.side_label(), row.notation.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(0, "Whites", "e4"), (1, "Blacks", "e5"), (2, "Whites", "Nf3")]
    );
    assert_eq!(rendered.status, "Game state: In progress");
    assert_eq!(rendered.date, "Game date: 2019.06.01");
}

#[test]
fn any_result_stops_dragging() {
    assert!(RenderedState::from(&state_with(&[], None)).draggable);
    for result in [
        GameResult::Draw,
        GameResult::WhiteWins,
        GameResult::BlackWins,
        GameResult::Unrecognized(json!("aborted")),
    ] {
        let rendered = RenderedState::from(&state_with(&["f3", "e5", "g4", "Qh4"], Some(result)));
        assert!(!rendered.draggable);
    }
}
