//! Pre-recorded decisions for tests and harnesses.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::{DecisionError, GameError, PlayerId};
use crate::rules::{GameView, Instruction};

use super::{DecisionSource, GainRequest, Question, SelectionRequest};

/// What a scripted source was asked and which answers were rejected.
///
/// Shared with the source, so it stays readable after the source has been
/// boxed into a game.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    inner: Rc<RefCell<TranscriptLog>>,
}

#[derive(Debug, Default)]
struct TranscriptLog {
    requests: Vec<String>,
    rejections: Vec<String>,
}

impl Transcript {
    /// Prompts of every selection, question and gain asked, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }

    /// Messages of every rejected decision or instruction, in order.
    #[must_use]
    pub fn rejections(&self) -> Vec<String> {
        self.inner.borrow().rejections.clone()
    }

    fn request(&self, prompt: String) {
        self.inner.borrow_mut().requests.push(prompt);
    }

    fn reject(&self, message: String) {
        self.inner.borrow_mut().rejections.push(message);
    }
}

/// A decision source that replays queued answers.
///
/// When the instruction queue runs dry the source ends the turn with
/// `Next`. Confirmations fall back to the question's default.
///
/// # Panics
///
/// Asking for a selection or a card name after those queues are empty
/// panics, since the engine would otherwise re-ask forever.
///
/// ```
/// use rust_dominion::decision::ScriptedDecisions;
/// use rust_dominion::rules::Instruction;
///
/// let script = ScriptedDecisions::new()
///     .instruction(Instruction::Play("Chapel".into()))
///     .select(&["Estate", "Copper"]);
/// let transcript = script.transcript();
/// assert!(transcript.requests().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    instructions: VecDeque<Instruction>,
    selections: VecDeque<Vec<String>>,
    confirmations: VecDeque<Option<bool>>,
    gains: VecDeque<String>,
    transcript: Transcript,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push_back(instruction);
        self
    }

    /// Queue several instructions given in text form.
    ///
    /// # Panics
    ///
    /// Panics if one does not parse.
    pub fn instructions(mut self, lines: &[&str]) -> Self {
        for line in lines {
            let instruction = line
                .parse()
                .unwrap_or_else(|err| panic!("bad scripted instruction {:?}: {}", line, err));
            self.instructions.push_back(instruction);
        }
        self
    }

    pub fn select(mut self, names: &[&str]) -> Self {
        self.selections
            .push_back(names.iter().map(|name| name.to_string()).collect());
        self
    }

    pub fn confirm(mut self, answer: bool) -> Self {
        self.confirmations.push_back(Some(answer));
        self
    }

    /// Queue a non-answer, so the question's default applies.
    pub fn no_answer(mut self) -> Self {
        self.confirmations.push_back(None);
        self
    }

    pub fn gain(mut self, name: &str) -> Self {
        self.gains.push_back(name.to_string());
        self
    }

    /// Handle on this source's transcript.
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        self.transcript.clone()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn next_instruction(&mut self, _view: &GameView<'_>, _me: PlayerId) -> Instruction {
        self.instructions.pop_front().unwrap_or(Instruction::Next)
    }

    fn select_cards(
        &mut self,
        _view: &GameView<'_>,
        _me: PlayerId,
        request: &SelectionRequest,
    ) -> Vec<String> {
        self.transcript.request(request.prompt());
        self.selections
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted selection left for: {}", request.prompt()))
    }

    fn confirm(&mut self, _view: &GameView<'_>, _me: PlayerId, question: &Question) -> Option<bool> {
        self.transcript.request(question.prompt());
        self.confirmations.pop_front().flatten()
    }

    fn name_card(&mut self, _view: &GameView<'_>, _me: PlayerId, request: &GainRequest) -> String {
        self.transcript.request(request.prompt());
        self.gains
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted gain left for: {}", request.prompt()))
    }

    fn decision_rejected(&mut self, _me: PlayerId, error: &DecisionError) {
        self.transcript.reject(error.to_string());
    }

    fn instruction_rejected(&mut self, _me: PlayerId, error: &GameError) {
        self.transcript.reject(error.to_string());
    }
}
