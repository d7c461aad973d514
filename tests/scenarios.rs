// tests/scenarios.rs
use mower::{
    GridSize, Instructions, Mower, OutputFormat, ParseError, ParserConfig, drive_mower, render,
    run, simulate, simulate_str,
};
use pretty_assertions::assert_eq;

const SAMPLE: &str = "5 5
1 2 N
LFLFLFLFF
3 3 E
FFRFFRFRRF
";

fn finals(input: &str) -> Vec<String> {
    simulate_str(input)
        .unwrap()
        .iter()
        .map(Mower::to_string)
        .collect()
}

#[test]
fn test_scenario_a() {
    // W (0,2) -> S (0,1) -> E (1,1) -> N (1,2) -> (1,3)
    assert_eq!(finals("5 5\n1 2 N\nLFLFLFLFF\n"), vec!["1 3 N"]);
}

#[test]
fn test_scenario_b_clamps_on_the_east_edge() {
    // The second F would reach x = 5; the grid stops it at x = 4.
    assert_eq!(finals("5 5\n3 3 E\nFFRFFRFRRF\n"), vec!["4 1 E"]);
}

#[test]
fn test_sample_file_reports_in_input_order() {
    assert_eq!(finals(SAMPLE), vec!["1 3 N", "4 1 E"]);
}

#[test]
fn test_mowers_do_not_interfere() {
    let together = finals(SAMPLE);
    let first_alone = finals("5 5\n1 2 N\nLFLFLFLFF\n");
    let second_alone = finals("5 5\n3 3 E\nFFRFFRFRRF\n");
    assert_eq!(together, [first_alone, second_alone].concat());

    // Two mowers starting on the same cell end on the same cell.
    assert_eq!(finals("3 3\n1 1 N\nF\n1 1 N\nF\n"), vec!["1 2 N", "1 2 N"]);
}

#[test]
fn test_zero_mowers_is_not_an_error() {
    assert!(finals("5 5\n").is_empty());
    assert!(finals("5 5").is_empty());
}

#[test]
fn test_trailing_mower_without_moves_keeps_its_start() {
    assert_eq!(finals("5 5\n1 2 N\nF\n3 3 E"), vec!["1 3 N", "3 3 E"]);
}

#[test]
fn test_out_of_grid_start_is_clamped_before_moving() {
    assert_eq!(finals("5 5\n9 9 S\nF\n"), vec!["4 3 S"]);
}

#[test]
fn test_parse_error_aborts_before_any_mower_moves() {
    let err = simulate_str("5 5\n1 2 N\nF\n2 2 E\nFF\n3 3 E\nFZ\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidMove { line_no: 7, token: 'Z', .. }), "{err:?}");
}

#[test]
fn test_strict_simulation() {
    let config = ParserConfig { strict: true };
    let err = simulate("5 5\n1 2 N\n".as_bytes(), config.clone()).unwrap_err();
    assert!(matches!(err, ParseError::MissingMoves { .. }), "{err:?}");

    let mowers = simulate(SAMPLE.as_bytes(), config).unwrap();
    assert_eq!(mowers.len(), 2);
}

#[test]
fn test_drive_mower_applies_moves_left_to_right() {
    let instructions: Instructions = "4 4\n0 0 N\nFFRFF\n".parse().unwrap();
    let record = &instructions.records[0];
    let mut mower = record.mower.clone();
    drive_mower(&mut mower, &record.moves);
    assert_eq!(mower.to_string(), "2 2 E");
    assert_eq!(mower.grid(), GridSize::new(4, 4).unwrap());
}

#[test]
fn test_run_preserves_declaration_order() {
    let instructions: Instructions = "10 10\n9 9 S\nFFF\n0 0 N\nFFF\n5 5 W\nLL\n"
        .parse()
        .unwrap();
    let reported: Vec<String> = run(instructions).iter().map(Mower::to_string).collect();
    assert_eq!(reported, vec!["9 6 S", "0 3 N", "5 5 E"]);
}

#[test]
fn test_render_text() {
    let mowers = simulate_str(SAMPLE).unwrap();
    assert_eq!(render(&mowers, OutputFormat::Text).unwrap(), "1 3 N\n4 1 E\n");
    assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
}

#[test]
fn test_render_json() {
    let mowers = simulate_str(SAMPLE).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render(&mowers, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "position": [1, 3], "orientation": "N" },
            { "position": [4, 1], "orientation": "E" },
        ])
    );
}

#[test]
fn test_oversized_coordinates_clamp_onto_the_grid() {
    // 3000000000 does not fit in an i32; it is still a valid non-negative coordinate.
    assert_eq!(finals("5 5\n3000000000 2 N\nF\n"), vec!["4 3 N"]);
    assert_eq!(finals("3000000000 5\n1 2 N\nF\n"), vec!["1 3 N"]);

    let err = simulate("5 5\n3000000000 2 N\nF\n".as_bytes(), ParserConfig { strict: true })
        .unwrap_err();
    assert!(matches!(err, ParseError::InvalidMowerState { line_no: 2, .. }), "{err:?}");

    let err = simulate_str("5 5\n-3000000000 2 N\nF\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidMowerState { .. }), "{err:?}");
}
