//! Line-based decisions for a person at a terminal.

use std::io::{BufRead, Write};

use log::warn;

use crate::core::{DecisionError, GameError, PlayerId};
use crate::rules::{GameView, Instruction, Outcome};

use super::{DecisionSource, GainRequest, Question, SelectionRequest};

/// Keyword that selects every eligible card.
pub const SELECT_ALL: &str = "all";

/// Reads answers line by line from `input` and writes prompts to `output`.
///
/// Card lists are comma separated. `y`/`yes` and `n`/`no` answer questions;
/// anything else leaves the question's default. At end of input the source
/// quits the game and gives the smallest acceptable answer to any pending
/// request.
///
/// ```
/// use std::io::Cursor;
/// use rust_dominion::decision::ConsoleDecisions;
///
/// let console = ConsoleDecisions::new(Cursor::new("buy silver\nnext\n"), Vec::new());
/// # let _ = console;
/// ```
pub struct ConsoleDecisions<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecisions<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl std::fmt::Display) {
        if let Err(err) = writeln!(self.output, "{}", text).and_then(|()| self.output.flush()) {
            warn!("console output failed: {}", err);
        }
    }

    /// Prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.say(prompt);
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!("console input failed: {}", err);
                None
            }
        }
    }
}

/// Eligible card names in the request's location, in zone order.
fn eligible(view: &GameView<'_>, request: &SelectionRequest) -> Vec<String> {
    view.zone(request.location)
        .iter()
        .filter(|card| request.filter.accepts(card.info()))
        .map(|card| card.name().to_string())
        .collect()
}

/// Parse a yes/no answer. Anything unrecognized is "no answer".
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated card list. `all` expands to every entry of `eligible`.
#[must_use]
pub fn parse_card_list(answer: &str, eligible: &[String]) -> Vec<String> {
    if answer.trim().eq_ignore_ascii_case(SELECT_ALL) {
        return eligible.to_vec();
    }
    answer
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

impl<R: BufRead, W: Write> DecisionSource for ConsoleDecisions<R, W> {
    fn next_instruction(&mut self, view: &GameView<'_>, me: PlayerId) -> Instruction {
        let prompt = format!("{}> ", view.participant(me).name());
        loop {
            let Some(line) = self.ask(&prompt) else {
                return Instruction::Quit;
            };
            match line.parse() {
                Ok(instruction) => return instruction,
                Err(err) => self.say(err),
            }
        }
    }

    fn select_cards(
        &mut self,
        view: &GameView<'_>,
        me: PlayerId,
        request: &SelectionRequest,
    ) -> Vec<String> {
        let options = eligible(view, request);
        let prompt = format!(
            "{}, {}\n  options: {}",
            view.participant(me).name(),
            request.prompt(),
            options.join(", ")
        );
        match self.ask(&prompt) {
            Some(line) => parse_card_list(&line, &options),
            None => options.into_iter().take(request.min).collect(),
        }
    }

    fn confirm(&mut self, view: &GameView<'_>, me: PlayerId, question: &Question) -> Option<bool> {
        let prompt = format!("{}, {} (y/n)", view.participant(me).name(), question.prompt());
        self.ask(&prompt).as_deref().and_then(parse_yes_no)
    }

    fn name_card(&mut self, view: &GameView<'_>, me: PlayerId, request: &GainRequest) -> String {
        let prompt = format!("{}, {}", view.participant(me).name(), request.prompt());
        self.ask(&prompt).unwrap_or_else(|| {
            let supply = view.supply();
            supply
                .cards()
                .find(|info| request.allows(info) && supply.can_take(&info.name))
                .map(|info| info.name.clone())
                .unwrap_or_default()
        })
    }

    fn decision_rejected(&mut self, _me: PlayerId, error: &DecisionError) {
        self.say(format!("{}, try again", error));
    }

    fn instruction_rejected(&mut self, _me: PlayerId, error: &GameError) {
        self.say(error);
    }

    fn observe(&mut self, _view: &GameView<'_>, _me: PlayerId, outcome: &Outcome) {
        self.say(outcome);
    }
}
