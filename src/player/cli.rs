#![cfg(feature = "std")]

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{
    core::{
        common::{GameStatus, MoveReport, Winner},
        generator::Generator,
    },
    session::GameSession,
};

/// Parse a typed take. Blank input is a missing amount, not an error.
pub fn parse_take(input: &str) -> Result<Option<i64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("'{}' is not a whole number", input))
}

/// One line describing a report from the result stream.
pub fn format_report(report: &MoveReport) -> String {
    let mut line = if report.player_took == 0 {
        format!("Items in deck: {}", report.remaining)
    } else {
        match report.bot_took {
            Some(b) => format!(
                "You took {}, bot took {}. Items in deck: {}",
                report.player_took, b, report.remaining
            ),
            None => format!(
                "You took {}. Items in deck: {}",
                report.player_took, report.remaining
            ),
        }
    };
    if let Some(w) = report.winner {
        line.push_str(match w {
            Winner::Player => " - you win!",
            Winner::Bot => " - bot wins.",
        });
    }
    line
}

pub fn print_report(report: &MoveReport) {
    println!("{}", format_report(report));
}

fn print_help(min: i64, max: i64) {
    println!("\nTake between {} and {} items per turn; the bot answers each move.", min, max);
    println!("Whoever takes the last item wins. You cannot take more than is left.");
    println!("Enter a number, 'help' for this message, or end input (Ctrl-D) to quit.\n");
}

fn print_outcome(status: GameStatus) {
    match status {
        GameStatus::Won(Winner::Player) => {
            println!("\n🎉 VICTORY! You took the last item.");
        }
        GameStatus::Won(Winner::Bot) => {
            println!("\n💀 DEFEAT. The bot took the last item.");
        }
        GameStatus::InProgress => {
            println!("\nGame abandoned.");
        }
    }
}

/// Play `session` interactively, reading one take per line from `input`.
/// Reports are rendered from the session's result stream.
pub async fn run_cli<G, R>(session: &mut GameSession<G>, input: R) -> anyhow::Result<GameStatus>
where
    G: Generator,
    R: AsyncBufRead + Unpin,
{
    let (min, max) = (session.validator().min(), session.validator().max());
    let mut results = session.subscribe();
    let mut lines = input.lines();

    print_report(&results.borrow_and_update());
    while !session.status().is_over() {
        print!("Take how many ({}-{}, or 'help')? ", min, max);
        io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if line.trim().eq_ignore_ascii_case("help") {
            print_help(min, max);
            continue;
        }
        if let Err(e) = session.submit_line(&line) {
            println!("✗ {}", e);
            continue;
        }
        if results.has_changed()? {
            let report = *results.borrow_and_update();
            print_report(&report);
        }
    }

    print_outcome(session.status());
    Ok(session.status())
}
