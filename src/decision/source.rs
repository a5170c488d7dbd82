//! The decision capability every seat holds.

use crate::core::{DecisionError, GameError, PlayerId};
use crate::rules::{GameView, Instruction, Outcome};

use super::{GainRequest, Question, SelectionRequest};

/// Source of a participant's choices.
///
/// Human and autonomous participants differ only in which implementation
/// their seat was constructed with. The engine validates every answer and
/// asks again after reporting the problem through
/// [`decision_rejected`](Self::decision_rejected), so an implementation never
/// has to pre-validate.
///
/// `me` is always the seat being asked, which is not necessarily the active
/// participant (attack victims answer too).
pub trait DecisionSource {
    /// Next instruction for `me`'s turn.
    fn next_instruction(&mut self, view: &GameView<'_>, me: PlayerId) -> Instruction;

    /// Card names, one entry per card.
    fn select_cards(
        &mut self,
        view: &GameView<'_>,
        me: PlayerId,
        request: &SelectionRequest,
    ) -> Vec<String>;

    /// `None` means "no answer"; the engine applies [`Question::default_answer`].
    fn confirm(&mut self, view: &GameView<'_>, me: PlayerId, question: &Question) -> Option<bool>;

    /// Name of a card to gain from the supply.
    fn name_card(&mut self, view: &GameView<'_>, me: PlayerId, request: &GainRequest) -> String;

    /// The last selection, confirmation or card name was rejected; it will be asked again.
    fn decision_rejected(&mut self, _me: PlayerId, _error: &DecisionError) {}

    /// The last instruction was rejected. Nothing changed.
    fn instruction_rejected(&mut self, _me: PlayerId, _error: &GameError) {}

    /// Result of an instruction `me` issued.
    fn observe(&mut self, _view: &GameView<'_>, _me: PlayerId, _outcome: &Outcome) {}
}
