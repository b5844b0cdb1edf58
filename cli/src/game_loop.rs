use std::io::{self, BufRead, Write};

use tictactoe_common::engine::tictactoe::{Mark, Outcome, TicTacToeSession};
use tictactoe_common::log;

use crate::command::{Command, HELP_TEXT};

pub fn run<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    show_scores: bool,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "You are {}, the computer is {} (difficulty {}). Type 'help' for commands.",
        Mark::Human.symbol(),
        Mark::Computer.symbol(),
        session.settings().difficulty
    )?;
    announce_new_game(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Place(index) => play_turn(session, index, show_scores, output)?,
            Command::Restart => {
                if let Err(e) = session.restart() {
                    log!("[cli] restart failed: {}", e);
                    writeln!(output, "Could not restart: {}", e)?;
                    continue;
                }
                announce_new_game(session, output)?;
            }
            Command::ResetScores => {
                session.reset_scores();
                write_scores(session, output)?;
            }
            Command::Scores => write_scores(session, output)?,
            Command::SetDifficulty(difficulty) => {
                let mut settings = session.settings();
                settings.difficulty = difficulty;
                session.set_settings(settings);
                writeln!(output, "Difficulty set to {}.", difficulty)?;
            }
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Quit => break,
        }
    }

    writeln!(output, "Bye!")?;
    Ok(())
}

fn play_turn<W: Write>(
    session: &mut TicTacToeSession,
    index: usize,
    show_scores: bool,
    output: &mut W,
) -> io::Result<()> {
    let report = match session.play_human_move(index) {
        Ok(report) => report,
        Err(e) => {
            writeln!(output, "{}", e)?;
            return Ok(());
        }
    };

    if let Some(computer_move) = report.computer_move {
        writeln!(output, "Computer plays {}.", computer_move + 1)?;
    }
    write!(output, "{}", session.game_state().board)?;

    if report.outcome.is_over() {
        writeln!(output, "{}", describe_outcome(session, report.outcome))?;
        if show_scores {
            write_scores(session, output)?;
        }
        writeln!(output, "Type 'restart' to play again.")?;
    }
    Ok(())
}

fn announce_new_game<W: Write>(session: &TicTacToeSession, output: &mut W) -> io::Result<()> {
    writeln!(output, "New game.")?;
    if let Some(opening) = session.opening_move() {
        writeln!(output, "Computer opens at {}.", opening + 1)?;
    }
    write!(output, "{}", session.game_state().board)?;
    Ok(())
}

fn describe_outcome(session: &TicTacToeSession, outcome: Outcome) -> String {
    let line = session
        .game_state()
        .winning_line()
        .map(|line| {
            let cells: Vec<String> = line.cells.iter().map(|cell| (cell + 1).to_string()).collect();
            format!(" ({})", cells.join("-"))
        })
        .unwrap_or_default();

    match outcome {
        Outcome::HumanWins => format!("You win!{}", line),
        Outcome::ComputerWins => format!("Computer wins!{}", line),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Ongoing => String::new(),
    }
}

fn write_scores<W: Write>(session: &TicTacToeSession, output: &mut W) -> io::Result<()> {
    let tally = session.tally();
    writeln!(
        output,
        "Scores: you {}, computer {}, draws {}",
        tally.human_wins, tally.computer_wins, tally.draws
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::SessionRng;
    use tictactoe_common::engine::tictactoe::{Difficulty, FirstPlayerMode, TicTacToeSettings};

    fn run_script(settings: TicTacToeSettings, script: &str) -> (TicTacToeSession, String) {
        let mut session = TicTacToeSession::new(settings, SessionRng::new(42)).unwrap();
        let mut output = Vec::new();
        run(&mut session, true, script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    fn easy_human_first() -> TicTacToeSettings {
        TicTacToeSettings {
            difficulty: Difficulty::Easy,
            first_player: FirstPlayerMode::Human,
        }
    }

    #[test]
    fn test_human_beats_easy_computer() {
        let (session, output) = run_script(easy_human_first(), "5\n9\n3\n7\n");
        assert!(output.contains("Computer plays 1."));
        assert!(output.contains("You win! (3-5-7)"));
        assert!(output.contains("Scores: you 1, computer 0, draws 0"));
        assert_eq!(session.tally().human_wins, 1);
    }

    #[test]
    fn test_bad_input_is_reported_and_skipped() {
        let (session, output) = run_script(easy_human_first(), "banana\n0\n5\n5\nquit\n7\n");
        assert!(output.contains("Unknown command 'banana'"));
        assert!(output.contains("Cell must be between 1 and 9, got 0"));
        assert!(output.contains("cell is already marked"));
        // Input after quit is ignored.
        assert_eq!(session.game_state().board.empty_count(), 7);
        assert!(output.ends_with("Bye!\n"));
    }

    #[test]
    fn test_restart_keeps_scores_and_reset_clears_them() {
        let (session, output) =
            run_script(easy_human_first(), "5\n9\n3\n7\nrestart\nscores\nreset\n");
        assert_eq!(output.matches("New game.").count(), 2);
        assert!(output.contains("Scores: you 1, computer 0, draws 0"));
        assert!(output.contains("Scores: you 0, computer 0, draws 0"));
        assert_eq!(session.game_state().board.empty_count(), 9);
    }

    #[test]
    fn test_difficulty_can_change_mid_session() {
        let (session, output) = run_script(easy_human_first(), "difficulty hard\n1\n");
        assert!(output.contains("Difficulty set to hard."));
        assert_eq!(session.settings().difficulty, Difficulty::Hard);
        assert!(output.contains("Computer plays 5."));
    }

    #[test]
    fn test_computer_opening_is_announced() {
        let settings = TicTacToeSettings {
            difficulty: Difficulty::Easy,
            first_player: FirstPlayerMode::Computer,
        };
        let (_, output) = run_script(settings, "");
        assert!(output.contains("Computer opens at 1."));
    }
}
