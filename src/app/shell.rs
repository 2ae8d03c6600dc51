//! Inspection shell for a finished run.
//!
//! Lets the operator look up a mentee's ranking or a person's merged interests
//! without opening the output file.

use crate::domain::model::{InterestSet, MatchReport};

const HELP: &str = "Commands:
  list               list mentees and mentors
  mentee <name>      show a mentee's interests and top matches
  mentor <name>      show a mentor's interests
  help               show this message
  quit               leave the shell";

/// How many rank slots `mentee <name>` prints.
const TOP_MATCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    Output(String),
    Quit,
}

fn describe_interests(interests: &InterestSet) -> String {
    if interests.is_empty() {
        "(none)".to_string()
    } else {
        interests.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Runs one shell command against `report`.
pub fn evaluate(line: &str, report: &MatchReport) -> ShellReply {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => ShellReply::Output(String::new()),
        "quit" | "exit" | "q" => ShellReply::Quit,
        "help" | "?" => ShellReply::Output(HELP.to_string()),
        "list" => ShellReply::Output(format!(
            "Mentees ({}): {}\nMentors ({}): {}",
            report.mentees.len(),
            report.mentees.names().collect::<Vec<_>>().join(", "),
            report.mentors.len(),
            report.mentors.names().collect::<Vec<_>>().join(", ")
        )),
        "mentee" => {
            let Some(interests) = report.mentees.get(argument) else {
                return ShellReply::Output(format!("No mentee named '{}'", argument));
            };
            let mut lines = vec![format!("Interests: {}", describe_interests(interests))];
            match report.ranking_for(argument) {
                Some(row) => lines.extend(
                    row.ranked
                        .iter()
                        .take(TOP_MATCHES)
                        .enumerate()
                        .map(|(i, entry)| format!("  Rank {}: {}", i + 1, entry)),
                ),
                None => lines.push("Not ranked (no interests listed)".to_string()),
            }
            ShellReply::Output(lines.join("\n"))
        }
        "mentor" => match report.mentors.get(argument) {
            Some(interests) => {
                ShellReply::Output(format!("Interests: {}", describe_interests(interests)))
            }
            None => ShellReply::Output(format!("No mentor named '{}'", argument)),
        },
        other => ShellReply::Output(format!("Unknown command '{}', try 'help'", other)),
    }
}

#[cfg(feature = "cli")]
pub fn run_shell(report: &MatchReport) -> crate::utils::error::Result<()> {
    use crate::utils::error::MatchError;
    use dialoguer::Input;

    println!("{}", HELP);
    loop {
        let line: String = Input::new()
            .with_prompt("match")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| MatchError::ShellError {
                message: e.to_string(),
            })?;

        match evaluate(&line, report) {
            ShellReply::Quit => return Ok(()),
            ShellReply::Output(text) if text.is_empty() => {}
            ShellReply::Output(text) => println!("{}", text),
        }
    }
}
