use std::io::Cursor;

use fogsweep_cli::{GameSession, SessionConfig, SessionOutcome};
use fogsweep_core::{GameConfig, Grid, MinefieldGenerator, RandomMinefieldGenerator};

fn grid(size: u8, mines: &[(u8, u8)]) -> Grid {
    let mut grid = Grid::new(size);
    for &coords in mines {
        grid.place_mine(coords).unwrap();
    }
    grid
}

fn play(grid: Grid, input: &str) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let outcome = GameSession::new(Cursor::new(input), &mut output)
        .play(grid)
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

fn run(config: SessionConfig, input: &str) -> (SessionOutcome, String) {
    let mut output = Vec::new();
    let outcome = GameSession::new(Cursor::new(input), &mut output)
        .run(config)
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn marking_every_mine_wins() {
    let (outcome, output) = play(grid(3, &[(0, 0)]), "1 1 mine\n");

    assert_eq!(outcome, SessionOutcome::Won);
    assert!(output.contains("1|*..|"));
    assert!(output.ends_with("Congratulations! You found all the mines!\n"));
}

#[test]
fn stepping_on_mine_loses_and_reveals_field() {
    let (outcome, output) = play(grid(3, &[(0, 0), (2, 2)]), "1 1 free\n");

    assert_eq!(outcome, SessionOutcome::Lost);
    assert!(output.contains("1|X..|"));
    assert!(output.contains("3|..X|"));
    assert!(output.ends_with("You stepped on a mine and failed!\n"));
}

#[test]
fn rejected_commands_are_explained_and_retried() {
    let input = concat!(
        "hello\n",
        "4 1 free\n",
        "1 1 dig\n",
        "3 3 free\n",
        "2 2 mine\n",
        "3 3 free\n",
        "1 1 mine\n",
    );

    let (outcome, output) = play(grid(3, &[(0, 0)]), input);

    assert_eq!(outcome, SessionOutcome::Won);
    assert!(output.contains("Expected `<col> <row> <mine|free>`, got 1 values"));
    assert!(output.contains("Field 4 1 is outside the 1..=3 range"));
    assert!(output.contains("Unknown mode `dig`, use `mine` or `free`"));
    assert!(output.contains("1|.1/|\n2|11/|\n3|///|"));
    assert!(output.contains("Field 2 2: Cell shows a hint, can not mark or explore it\n"));
    assert!(output.contains("Field 3 3: Cell is already explored\n"));
}

#[test]
fn revealing_marked_cell_is_refused() {
    let input = "2 3 mine\n2 3 free\n2 3 mine\n1 1 mine\n";

    let (outcome, output) = play(grid(3, &[(0, 0)]), input);

    assert_eq!(outcome, SessionOutcome::Won);
    assert!(output.contains("Field 2 3: Cell is marked as a mine, unmark it before exploring\n"));
}

#[test]
fn closed_input_aborts() {
    let (outcome, output) = play(grid(3, &[(0, 0)]), "");

    assert_eq!(outcome, SessionOutcome::Aborted);
    assert!(output.starts_with(" |123|\n-|---|\n"));
}

#[test]
fn asks_for_mine_count_until_valid() {
    let config = SessionConfig {
        size: 3,
        mines: None,
        seed: 1,
    };

    let (outcome, output) = run(config, "0\nabc\n9\n1\n");

    assert_eq!(outcome, SessionOutcome::Aborted);
    assert_eq!(
        output.matches("How many mines do you want on the field?").count(),
        4
    );
    assert_eq!(
        output
            .matches("Please enter a number of mines between 1 and 8.")
            .count(),
        3
    );
    assert!(output.contains(" |123|"));
}

#[test]
fn invalid_mine_argument_is_an_error() {
    let config = SessionConfig {
        size: 3,
        mines: Some(9),
        seed: 1,
    };

    let mut output = Vec::new();
    let result = GameSession::new(Cursor::new(""), &mut output).run(config);

    assert!(result.is_err());
}

#[test]
fn seeded_game_can_be_won_by_marking_generated_mines() {
    let config = GameConfig::new(9, 10).unwrap();
    let grid = RandomMinefieldGenerator::new(99).generate(config);

    let input: String = grid
        .coords()
        .filter(|&coords| grid.cell_at(coords).unwrap().is_mine())
        .map(|(row, col)| format!("{} {} mine\n", col + 1, row + 1))
        .collect();
    let (outcome, output) = play(grid, &input);

    assert_eq!(outcome, SessionOutcome::Won);
    assert_eq!(output.matches('*').count(), (1..=10).sum::<usize>());
}
