//! Subcommand implementations.
//!
//! Each command writes to a caller-supplied sink so it can be driven from
//! tests as well as from stdout.

use crate::config::Config;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use ttt_minimax::{Action, Board, Game, SearchReport, analyze, best_action, self_play};

/// Prints the optimal move for `board`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_best(board: &Board, json: bool, out: &mut impl Write) -> Result<()> {
    let action = best_action(board);
    if json {
        writeln!(out, "{}", serde_json::to_string(&action)?)?;
        return Ok(());
    }
    match action {
        Some(action) => writeln!(out, "{}", action)?,
        None => writeln!(out, "Game over: no move to make")?,
    }
    Ok(())
}

/// Prints every legal move with its value.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_analyze(board: &Board, json: bool, out: &mut impl Write) -> Result<()> {
    let report = analyze(board);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&report, out)?;
    }
    Ok(())
}

/// Plays both sides from `board` and prints the game.
#[instrument(skip(board, out), fields(board = %board))]
pub fn run_self_play(board: &Board, json: bool, out: &mut impl Write) -> Result<()> {
    let game = self_play(*board);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&game)?)?;
        return Ok(());
    }

    let mut replay = Game::from_board(*game.start());
    writeln!(out, "{}\n", replay.board().render())?;
    for action in game.history() {
        let mover = replay.to_move();
        replay.play(*action)?;
        writeln!(out, "{} plays {}", mover, action)?;
        writeln!(out, "{}\n", replay.board().render())?;
    }
    writeln!(out, "{}", game.status())?;
    Ok(())
}

/// Runs an interactive game between a human and the solver.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn run_play(config: &Config, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut game = Game::new();
    info!("Starting interactive game");

    while !game.status().is_over() {
        writeln!(out, "{}\n", game.board().render())?;

        if game.to_move() == *config.human() {
            let action = prompt_action(input, out)?;
            if let Err(e) = game.play(action) {
                warn!(error = %e, "Rejected move");
                writeln!(out, "Illegal move: {}", e.kind)?;
            }
            continue;
        }

        if *config.show_analysis() {
            write_report(&analyze(game.board()), out)?;
        }
        let action = game.play_best()?;
        writeln!(out, "Solver plays {}", action)?;
    }

    writeln!(out, "{}\n", game.board().render())?;
    writeln!(out, "{}", game.status())?;
    info!(status = %game.status(), "Game finished");
    Ok(())
}

fn prompt_action(input: &mut impl BufRead, out: &mut impl Write) -> Result<Action> {
    loop {
        write!(out, "Your move (row,col): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }
        match line.trim().parse::<Action>() {
            Ok(action) => return Ok(action),
            Err(e) => {
                debug!(error = %e, "Unparseable move");
                writeln!(out, "Enter a row and column from 0 to 2, e.g. 1,1")?;
            }
        }
    }
}

fn write_report(report: &SearchReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{} to move, value {}", report.to_move(), report.value())?;
    for ranked in report.ranked() {
        let marker = if Some(*ranked.action()) == *report.best_action() {
            "*"
        } else {
            " "
        };
        writeln!(out, "{} {} -> {:+}", marker, ranked.action(), ranked.value())?;
    }
    writeln!(out, "{} positions searched", report.nodes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use ttt_minimax::Player;

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_best_text_and_json() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(output_of(|o| run_best(&board, false, o)), "(0, 2)\n");
        assert_eq!(
            output_of(|o| run_best(&board, true, o)),
            "{\"row\":0,\"col\":2}\n"
        );
    }

    #[test]
    fn test_best_on_finished_game() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(output_of(|o| run_best(&board, false, o)).starts_with("Game over"));
        assert_eq!(output_of(|o| run_best(&board, true, o)), "null\n");
    }

    #[test]
    fn test_analyze_marks_best_move() {
        let board: Board = "XX./.O./...".parse().unwrap();
        let text = output_of(|o| run_analyze(&board, false, o));
        assert!(text.starts_with("O to move, value 0"));
        assert!(text.contains("* (0, 2) -> +0"));
        assert!(text.contains("  (1, 0) -> +1"));
        assert!(text.ends_with("positions searched\n"));
    }

    #[test]
    fn test_self_play_from_near_end() {
        let board: Board = "XOX/OXO/OX.".parse().unwrap();
        let text = output_of(|o| run_self_play(&board, false, o));
        assert!(text.contains("X plays (2, 2)"));
        assert!(text.trim_end().ends_with("Player X wins"));
    }

    #[test]
    fn test_play_solver_punishes_blunders() {
        // Human X opens in a corner, then ignores every threat.
        let config = Config::default().with_human(Player::X);
        let mut input = Cursor::new("0,0\n0,1\n2,1\n1,2\n2,0\n");
        let text = output_of(|o| run_play(&config, &mut input, o));
        assert!(text.contains("Solver plays (1, 1)"));
        assert!(text.trim_end().ends_with("Player O wins"));
    }

    #[test]
    fn test_play_retries_bad_input() {
        let config = Config::default().with_human(Player::O);
        let mut input = Cursor::new("nonsense\n0,0\n");
        let err = run_play(&config, &mut input, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Input closed"));
    }

    #[test]
    fn test_play_rejects_occupied_square() {
        let config = Config::default().with_human(Player::O);
        // Solver (X) opens at (0,0); the human tries to take it again.
        let mut input = Cursor::new("0,0\n");
        let mut out = Vec::new();
        assert!(run_play(&config, &mut input, &mut out).is_err());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Solver plays (0, 0)"));
        assert!(text.contains("Illegal move: square (0, 0) is already occupied"));
    }
}
