use super::*;

fn sq(text: &str) -> Square {
    text.parse().expect("square")
}

fn parse(line: &str) -> Command {
    parse_command(line)
        .expect("parse")
        .expect("non-empty line")
}

#[test]
fn parses_drops_in_both_spellings() {
    let expected = Command::Drop {
        source: sq("e2"),
        target: sq("e4"),
    };
    assert_eq!(parse("e2e4"), expected);
    assert_eq!(parse("  e2 e4 "), expected);
    assert_eq!(parse("E2E4"), expected);
}

#[test]
fn parses_session_commands() {
    assert_eq!(parse("promote n"), Command::Promote(PromotionPiece::Knight));
    assert_eq!(parse("p queen"), Command::Promote(PromotionPiece::Queen));
    assert_eq!(parse("reset"), Command::Reset(None));
    assert_eq!(parse("reset black"), Command::Reset(Some(Color::Black)));
    assert_eq!(parse("reset 1"), Command::Reset(Some(Color::White)));
    assert_eq!(parse("switch"), Command::Switch);
    assert_eq!(parse("refresh"), Command::Refresh);
    assert_eq!(parse("delete"), Command::Delete);
    assert_eq!(parse("board"), Command::Board);
    assert_eq!(parse("help"), Command::Help);
    assert_eq!(parse("quit"), Command::Quit);
}

#[test]
fn blank_lines_are_skipped() {
    assert!(parse_command("   ").expect("parse").is_none());
}

#[test]
fn rejects_bad_input() {
    for line in ["e2e9", "promote", "promote k", "reset purple", "castle now please", "€a"] {
        assert!(parse_command(line).is_err(), "{line:?} should be rejected");
    }
}
