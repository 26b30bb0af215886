use hotseat::session::{Session, SessionConfig};
use hotseat::{Color, Scores};

fn run(config: SessionConfig, script: &str) -> (Session, String) {
    let mut s = Session::new(config);
    let mut out = Vec::new();
    s.run_loop(script.as_bytes(), &mut out).expect("session runs");
    (s, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn scripted_capture_reaches_chat_and_score() {
    let script = "click e2\nclick e4\nclick d7\nclick d5\nclick 4,4\nclick 3,3\nsay nice\nchat\n";
    let (s, text) = run(SessionConfig { quiet: true, ascii: true, ..Default::default() }, script);
    assert_eq!(s.game().scores(), Scores { white: 1, black: 0 });
    assert_eq!(s.game().turn(), Color::Black);
    assert!(text.contains("P e4xd5"), "{text}");
    assert!(text.contains("* White captured a pawn on d5 (+1)"), "{text}");
    assert!(text.contains("Black: nice"), "{text}");
    assert_eq!(s.chat().lines().len(), 2);
}

#[test]
fn json_mode_prints_one_snapshot_per_redraw() {
    let (_, text) = run(SessionConfig { json: true, ..Default::default() }, "click g1\nmoves\n");
    let first = text.lines().next().expect("a snapshot line");
    let v: serde_json::Value = serde_json::from_str(first).expect("valid json");
    assert_eq!(v["selection"], "g1");
    assert_eq!(v["turn"], "white");
    assert_eq!(v["placement"], "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    let moves = text.lines().nth(1).expect("moves line");
    let mut m: Vec<&str> = moves.split_whitespace().collect();
    m.sort();
    assert_eq!(m, vec!["f3", "h3"]);
}

#[test]
fn reset_redraws_start_position_and_logs() {
    let (s, text) = run(SessionConfig { ascii: true, ..Default::default() }, "click e2\nclick e4\nreset\n");
    assert!(text.contains("* new game"), "{text}");
    assert!(text.trim_end().ends_with("Score: White 0 - Black 0"), "{text}");
    assert_eq!(s.game().turn(), Color::White);
    assert_eq!(s.game().board(), &hotseat::Board::startpos());
}

#[test]
fn json_mode_emits_events_and_chat_as_json() {
    let script = "click e2\nclick e4\nclick d7\nclick d5\nclick e4\nclick d5\nsay gg\n";
    let (_, text) = run(SessionConfig { json: true, quiet: true, ..Default::default() }, script);
    let values: Vec<serde_json::Value> = text
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str(l).expect("valid json line"))
        .collect();
    let capture = values.iter().find(|v| v["event"] == "capture").expect("capture event line");
    assert_eq!(capture["by"], "white");
    assert_eq!(capture["captured"], "pawn");
    assert_eq!(capture["value"], 1);
    assert_eq!(capture["to"]["row"], 3);
    let chat = values.iter().find(|v| v.get("text").is_some()).expect("chat line");
    assert_eq!(chat["author"]["player"], "black");
    assert_eq!(chat["text"], "gg");
}
