use draughts_arena::config::ArenaConfig;
use draughts_arena::game_runner::{GameRunner, MatchResult};
use draughts_arena::json_output::write_json;
use draughts_core::Layout;
use draughts_engine::{has_any_legal_move, Board};

#[test]
fn preset_drives_a_reproducible_match() {
    let config: ArenaConfig = toml::from_str(
        r#"
[presets.smoke]
games = 3
light = "hard"
dark = "easy"
max_plies = 120
seed = 5
"#,
    )
    .unwrap();
    let preset = config.get_preset("smoke").unwrap();
    let runner = GameRunner::new(preset.light, preset.dark, preset.max_plies);
    let seed = preset.seed.unwrap();

    let first = runner.play_match(preset.games, seed).unwrap();
    let second = runner.play_match(preset.games, seed).unwrap();

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.summary.total(), 3);
    for (a, b) in first.games.iter().zip(&second.games) {
        assert_eq!(a.turns, b.turns);
    }
}

#[test]
fn decisive_games_end_with_the_loser_stuck() {
    let report = GameRunner::new(Default::default(), Default::default(), 300)
        .play_match(8, 77)
        .unwrap();
    for game in &report.games {
        let board = Board::from(&Layout::parse(&game.final_board).unwrap());
        match game.result {
            MatchResult::LightWins => assert!(!has_any_legal_move(&board, draughts_core::Side::Dark)),
            MatchResult::DarkWins => assert!(!has_any_legal_move(&board, draughts_core::Side::Light)),
            MatchResult::Draw => assert_eq!(game.plies, 300),
        }
    }
}

#[test]
fn report_round_trips_through_json() {
    let report = GameRunner::new(Default::default(), Default::default(), 60)
        .play_match(2, 1)
        .unwrap();
    let path = std::env::temp_dir().join("draughts_arena_integration_report.json");
    write_json(&path, &report).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["games"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["light"], "medium");
    assert_eq!(parsed["games"][0]["turns"][0]["side"], "light");

    std::fs::remove_file(&path).ok();
}

#[test]
fn recorded_notation_replays_to_the_final_board() {
    let record = GameRunner::new(Default::default(), Default::default(), 80)
        .play_game(2024)
        .unwrap();

    let mut game = draughts_engine::Game::new();
    for turn in &record.turns {
        for notation in &turn.moves {
            let (from, to, capture) = draughts_core::SourcedMove::parse_notation(notation).unwrap();
            let mov = game.legal_moves(from).find_to(to).unwrap();
            assert_eq!(mov.is_capture(), capture);
            game.play(mov.sourced(from)).unwrap();
        }
    }

    assert_eq!(game.board().to_layout(), record.final_board);
    assert_eq!(game.ply_count(), record.plies);
}
