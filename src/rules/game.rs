//! The turn engine.
//!
//! ## Phases
//!
//! `AwaitingTurn -> Action -> Buy -> Cleanup -> AwaitingTurn`, plus the
//! terminal `Ended`. A purchase moves the turn into `Buy`; `Next` runs
//! cleanup and checks the end condition exactly once.
//!
//! ## Decisions
//!
//! Effects never talk to a `DecisionSource` directly. They go through
//! `Game::select`, `Game::confirm`, `Game::gain_named` and
//! `Game::try_defend`, which skip requests nobody can satisfy, validate
//! every answer and ask again until it is acceptable.

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ai::{AiConfig, AutonomousDecisions, Planner};
use crate::cards::{Card, CardCatalog, CardIndex};
use crate::core::{
    Controller, DecisionError, EntityId, GameConfig, GameError, GameRng, IllegalAction, PlayerId,
    PlayerMap, SetupError,
};
use crate::decision::{DecisionSource, GainRequest, Question, SelectionRequest};
use crate::effects::{ActionCard, EffectResolver};
use crate::supply::{PileLevel, Supply};
use crate::zones::{Zone, ZoneKind};

use super::{GameView, Instruction, Participant, ParticipantSummary, Standings, Table};

/// Card ids picked by a validated selection.
pub(crate) type Selection = SmallVec<[EntityId; 8]>;

/// Where the current turn is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Between turns. `start_turn` moves to the next seat.
    AwaitingTurn,
    /// Action cards may be played.
    Action,
    /// A purchase has been made; only further purchases remain.
    Buy,
    /// Discarding and redrawing.
    Cleanup,
    /// Terminal. Standings are available.
    Ended,
}

/// What an applied instruction did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Played { card: String },
    Bought { card: String },
    Info(ParticipantSummary),
    Supply(Vec<PileLevel>),
    TurnEnded,
    GameEnded(Standings),
}

impl Outcome {
    /// Whether the active turn is over after this outcome.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Outcome::TurnEnded | Outcome::GameEnded(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played { card } => write!(f, "played {}", card),
            Outcome::Bought { card } => write!(f, "bought {}", card),
            Outcome::Info(summary) => write!(f, "{}", summary),
            Outcome::Supply(levels) => {
                for level in levels {
                    writeln!(f, "{}", level)?;
                }
                Ok(())
            }
            Outcome::TurnEnded => f.write_str("turn over"),
            Outcome::GameEnded(standings) => write!(f, "game over\n{}", standings),
        }
    }
}

/// A seat's decision capability plus the planner `SudoAi` consults.
pub(crate) struct Seat {
    pub(crate) source: Box<dyn DecisionSource>,
    pub(crate) planner: Planner,
}

/// One game of 1 to 4 participants.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use rust_dominion::ai::AiConfig;
/// use rust_dominion::cards::CardCatalog;
/// use rust_dominion::core::GameConfig;
/// use rust_dominion::rules::Game;
///
/// let config = GameConfig::new(["Cellar", "Moat", "Village", "Smithy", "Militia",
///                               "Remodel", "Market", "Mine", "Laboratory", "Witch"])
///     .with_seed(42)
///     .with_autonomous("Big Money", AiConfig::big_money())
///     .with_autonomous("Weighted", AiConfig::weighted());
///
/// let mut game = Game::new(Arc::new(CardCatalog::standard()), config, Vec::new()).unwrap();
/// let total = game.view().card_total();
///
/// game.run(20).unwrap();
/// assert_eq!(game.view().card_total(), total);
/// ```
pub struct Game {
    pub(crate) table: Table,
    pub(crate) seats: PlayerMap<Seat>,
    phase: Phase,
    standings: Option<Standings>,
}

impl Game {
    /// Set up a game.
    ///
    /// `human_sources` supplies one decision source per `Controller::Human`
    /// seat, in seat order. An empty kingdom is replaced by a random one.
    pub fn new(
        catalog: Arc<CardCatalog>,
        config: GameConfig,
        human_sources: Vec<Box<dyn DecisionSource>>,
    ) -> Result<Self, SetupError> {
        let player_count = config.seats.len();
        if !(1..=4).contains(&player_count) {
            return Err(SetupError::PlayerCount(player_count));
        }

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let kingdom = if config.kingdom.is_empty() {
            catalog.random_kingdom(&mut rng)?
        } else {
            config.kingdom.clone()
        };

        let mut supply = Supply::build(&catalog, &kingdom, player_count)?;
        let index = CardIndex::build(&catalog, &kingdom);

        let mut humans = human_sources.into_iter();
        let mut seats = Vec::with_capacity(player_count);
        let mut players = Vec::with_capacity(player_count);

        for seat in config.seats {
            let (source, planner): (Box<dyn DecisionSource>, Planner) = match seat.controller {
                Controller::Human => {
                    let source = humans
                        .next()
                        .ok_or_else(|| SetupError::MissingHumanSource(seat.name.clone()))?;
                    (source, Planner::assistant(rng.fork()))
                }
                Controller::Autonomous(ai) => {
                    let source = AutonomousDecisions::new(ai.clone(), rng.fork());
                    (Box::new(source), Planner::autonomous(ai, rng.fork()))
                }
            };
            seats.push(Seat { source, planner });

            let deck = supply.deal_starting_deck()?;
            players.push(Participant::new(seat.name, deck, &mut rng));
        }

        let unused = humans.count();
        if unused > 0 {
            return Err(SetupError::UnusedHumanSources(unused));
        }

        info!(
            "new game: {} seats, kingdom {}",
            player_count,
            kingdom.join(", ")
        );

        Ok(Self {
            table: Table {
                catalog,
                index,
                supply,
                trash: Zone::new(),
                holding: Zone::new(),
                players: PlayerMap::from_vec(players),
                active: None,
                rng,
            },
            seats: PlayerMap::from_vec(seats),
            phase: Phase::AwaitingTurn,
            standings: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        self.table.view()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Final ranking, once the game has ended.
    #[must_use]
    pub fn standings(&self) -> Option<&Standings> {
        self.standings.as_ref()
    }

    // === Turn flow ===

    /// Begin the next participant's turn.
    ///
    /// Returns the active seat. Mid-turn this is a no-op that returns the
    /// current seat; once the game has ended it returns `None`.
    pub fn start_turn(&mut self) -> Option<PlayerId> {
        match self.phase {
            Phase::Ended => None,
            Phase::Action | Phase::Buy | Phase::Cleanup => self.table.active,
            Phase::AwaitingTurn => {
                let count = self.table.players.player_count();
                let next = self
                    .table
                    .active
                    .map_or(PlayerId::new(0), |current| current.next(count));
                self.table.active = Some(next);
                self.phase = Phase::Action;

                let participant = &mut self.table.players[next];
                participant.begin_turn();
                info!("{} starts turn {}", participant.name(), participant.turns());
                Some(next)
            }
        }
    }

    /// Apply one instruction for the active participant.
    ///
    /// Recoverable errors leave the game exactly as it was.
    pub fn apply(&mut self, instruction: Instruction) -> Result<Outcome, GameError> {
        let me = match self.phase {
            Phase::Ended => return Err(IllegalAction::GameOver.into()),
            Phase::AwaitingTurn => return Err(IllegalAction::NoActiveTurn.into()),
            _ => self.table.active.ok_or(IllegalAction::NoActiveTurn)?,
        };

        match instruction {
            Instruction::Play(name) => self.play(me, &name),
            Instruction::Buy(name) => self.buy(me, &name),
            Instruction::Next => Ok(self.end_turn(me)),
            Instruction::Info => Ok(Outcome::Info(self.table.players[me].summary())),
            Instruction::Supply => Ok(Outcome::Supply(self.table.supply.levels())),
            Instruction::Quit => {
                info!("{} quits", self.table.players[me].name());
                Ok(self.finish())
            }
            Instruction::SudoAi => self.sudo_ai(me),
        }
    }

    /// Drive one full turn from the active seat's decision source.
    ///
    /// Returns `Ok(false)` once the game has ended.
    pub fn play_turn(&mut self) -> Result<bool, GameError> {
        let Some(me) = self.start_turn() else {
            return Ok(false);
        };

        loop {
            let instruction = {
                let view = self.table.view();
                self.seats[me].source.next_instruction(&view, me)
            };

            match self.apply(instruction) {
                Ok(outcome) => {
                    let view = self.table.view();
                    self.seats[me].source.observe(&view, me, &outcome);
                    if outcome.ends_turn() {
                        return Ok(!self.is_over());
                    }
                }
                Err(err) if err.is_recoverable() => {
                    warn!("{}: {}", self.table.players[me].name(), err);
                    self.seats[me].source.instruction_rejected(me, &err);
                }
                Err(err) => {
                    error!("{}: {}", self.table.players[me].name(), err);
                    return Err(err);
                }
            }
        }
    }

    /// Play up to `max_turns` turns. Returns the standings if the game ended.
    pub fn run(&mut self, max_turns: u32) -> Result<Option<&Standings>, GameError> {
        for _ in 0..max_turns {
            if !self.play_turn()? {
                break;
            }
        }
        Ok(self.standings.as_ref())
    }

    // === Instructions ===

    fn play(&mut self, me: PlayerId, name: &str) -> Result<Outcome, GameError> {
        let participant = &self.table.players[me];
        if !participant.can_act() {
            return Err(IllegalAction::NoActionsLeft.into());
        }
        let info = self
            .table
            .catalog
            .lookup(name)
            .cloned()
            .ok_or_else(|| IllegalAction::UnknownCard(name.to_string()))?;
        let card = participant
            .zones()
            .hand()
            .find_named(&info.name)
            .map(Card::id)
            .ok_or_else(|| IllegalAction::NotInHand(info.name.clone()))?;
        if !info.is_action() {
            return Err(IllegalAction::NotAnAction(info.name.clone()).into());
        }
        let action = ActionCard::from_name(&info.name)
            .ok_or_else(|| GameError::MissingHandler(info.name.clone()))?;

        self.table.players[me].play_from_hand(card);
        info!("{} plays {}", self.table.players[me].name(), info.name);

        EffectResolver::resolve(self, me, card, action)?;
        Ok(Outcome::Played {
            card: info.name.clone(),
        })
    }

    fn buy(&mut self, me: PlayerId, name: &str) -> Result<Outcome, GameError> {
        let participant = &self.table.players[me];
        if !participant.can_buy() {
            return Err(IllegalAction::NoBuysLeft.into());
        }
        let info = self
            .table
            .catalog
            .lookup(name)
            .cloned()
            .ok_or_else(|| IllegalAction::UnknownCard(name.to_string()))?;
        let available = participant.coins_available();
        if info.cost as i32 > available {
            return Err(IllegalAction::InsufficientCoins {
                card: info.name.clone(),
                cost: info.cost,
                available,
            }
            .into());
        }
        let card = match self.table.supply.remaining(&info.name) {
            None => return Err(IllegalAction::NotInSupply(info.name.clone()).into()),
            Some(0) => return Err(IllegalAction::PileEmpty(info.name.clone()).into()),
            Some(_) => self
                .table
                .supply
                .take(&info.name)
                .ok_or_else(|| IllegalAction::PileEmpty(info.name.clone()))?,
        };

        let participant = &mut self.table.players[me];
        participant.buy(card);
        info!(
            "{} buys {} ({} coins left)",
            participant.name(),
            info.name,
            participant.coins_available()
        );
        self.phase = Phase::Buy;
        Ok(Outcome::Bought {
            card: info.name.clone(),
        })
    }

    fn end_turn(&mut self, me: PlayerId) -> Outcome {
        self.phase = Phase::Cleanup;
        let table = &mut self.table;
        table.players[me].cleanup(&mut table.rng);

        if table.supply.is_dry() {
            self.finish()
        } else {
            self.phase = Phase::AwaitingTurn;
            Outcome::TurnEnded
        }
    }

    fn finish(&mut self) -> Outcome {
        let standings = Standings::rank(&self.table.players);
        info!("game over\n{}", standings);
        self.phase = Phase::Ended;
        self.standings = Some(standings.clone());
        Outcome::GameEnded(standings)
    }

    fn sudo_ai(&mut self, me: PlayerId) -> Result<Outcome, GameError> {
        let instruction = {
            let view = self.table.view();
            self.seats[me].planner.next_instruction(&view, me)
        };
        debug!("{} planner chose {}", self.table.players[me].name(), instruction);

        let instruction = match instruction {
            Instruction::SudoAi => Instruction::Next,
            other => other,
        };
        match self.apply(instruction) {
            Err(err) if err.is_recoverable() => {
                warn!(
                    "{}: planned instruction rejected ({}), ending turn",
                    self.table.players[me].name(),
                    err
                );
                Ok(self.end_turn(me))
            }
            result => result,
        }
    }

    /// Replace one of a participant's zones with the named cards, for test setups.
    ///
    /// The zone's current cards go back to the supply and the new ones are
    /// taken from it, so the card total is unchanged. For the deck, the last
    /// name ends up on top. Only allowed between turns.
    pub fn rig_zone(
        &mut self,
        player: PlayerId,
        kind: ZoneKind,
        names: &[&str],
    ) -> Result<(), GameError> {
        if matches!(self.phase, Phase::Action | Phase::Buy | Phase::Cleanup) {
            return Err(IllegalAction::TurnInProgress.into());
        }
        if let Some(missing) = names.iter().find(|name| self.table.supply.remaining(name).is_none()) {
            return Err(IllegalAction::NotInSupply(missing.to_string()).into());
        }

        let old = self.table.players[player].zones_mut().zone_mut(kind).drain();
        for card in old {
            if let Err(card) = self.table.supply.restore(card) {
                self.table.trash.push(card);
            }
        }
        for name in names {
            let card = self
                .table
                .supply
                .take(name)
                .ok_or_else(|| IllegalAction::PileEmpty(name.to_string()))?;
            self.table.players[player].zones_mut().put(card, kind);
        }
        Ok(())
    }

    // === Decisions ===

    /// Ask `me` to choose cards and return the validated ids.
    ///
    /// Returns an empty selection without asking when no card in the location
    /// passes the filter. `min` and `max` are clamped to the eligible count,
    /// so a mandatory choice stays mandatory only while it can be met.
    pub(crate) fn select(&mut self, me: PlayerId, mut request: SelectionRequest) -> Selection {
        let eligible = self
            .table
            .view()
            .zone(request.location)
            .iter()
            .filter(|card| request.filter.accepts(card.info()))
            .count();
        if eligible == 0 {
            debug!("{:?} skipped: nothing eligible", request.purpose);
            return Selection::new();
        }
        request.max = request.max.min(eligible);
        request.min = request.min.min(request.max);

        loop {
            let answer = {
                let view = self.table.view();
                self.seats[me].source.select_cards(&view, me, &request)
            };
            match self.validate_selection(&request, &answer) {
                Ok(picked) => return picked,
                Err(err) => self.reject(me, err),
            }
        }
    }

    fn validate_selection(
        &self,
        request: &SelectionRequest,
        answer: &[String],
    ) -> Result<Selection, DecisionError> {
        if answer.len() < request.min || answer.len() > request.max {
            return Err(DecisionError::WrongCount {
                min: request.min,
                max: request.max,
                got: answer.len(),
            });
        }

        let zone = self.table.view().zone(request.location);
        let mut picked = Selection::new();
        for name in answer {
            let info = self
                .table
                .catalog
                .lookup(name)
                .ok_or_else(|| DecisionError::UnknownCard(name.clone()))?;
            if zone.find_named(&info.name).is_none() {
                return Err(DecisionError::NotInZone(info.name.clone()));
            }
            if !request.filter.accepts(info) {
                return Err(DecisionError::Ineligible(info.name.clone()));
            }
            let card = zone
                .iter()
                .find(|card| card.is_named(&info.name) && !picked.contains(&card.id()))
                .ok_or_else(|| DecisionError::NotInZone(info.name.clone()))?;
            picked.push(card.id());
        }
        Ok(picked)
    }

    /// Ask a yes/no question, falling back to the question's default.
    pub(crate) fn confirm(&mut self, me: PlayerId, question: Question) -> bool {
        let view = self.table.view();
        let answer = self.seats[me].source.confirm(&view, me, &question);
        answer.unwrap_or_else(|| question.default_answer())
    }

    /// Ask `me` to name a card to gain and move it from the supply into `to`.
    ///
    /// Skipped when no pile satisfies the request.
    pub(crate) fn gain_named(
        &mut self,
        me: PlayerId,
        request: GainRequest,
        to: ZoneKind,
    ) -> Option<EntityId> {
        let supply = &self.table.supply;
        if !supply
            .cards()
            .any(|info| request.allows(info) && supply.can_take(&info.name))
        {
            debug!("{:?} gain skipped: nothing affordable", request.purpose);
            return None;
        }

        loop {
            let answer = {
                let view = self.table.view();
                self.seats[me].source.name_card(&view, me, &request)
            };
            match self.validate_gain(&request, &answer) {
                Ok(name) => return self.table.gain(me, &name, to),
                Err(err) => self.reject(me, err),
            }
        }
    }

    fn validate_gain(&self, request: &GainRequest, answer: &str) -> Result<String, DecisionError> {
        let info = self
            .table
            .catalog
            .lookup(answer)
            .ok_or_else(|| DecisionError::UnknownCard(answer.trim().to_string()))?;
        if !request.filter.accepts(info) {
            return Err(DecisionError::Ineligible(info.name.clone()));
        }
        if info.cost > request.max_cost {
            return Err(DecisionError::TooExpensive {
                card: info.name.clone(),
                cost: info.cost,
                max: request.max_cost,
            });
        }
        if !self.table.supply.can_take(&info.name) {
            return Err(DecisionError::NotInSupply(info.name.clone()));
        }
        Ok(info.name.clone())
    }

    fn reject(&mut self, me: PlayerId, err: DecisionError) {
        warn!("{}: {}", self.table.players[me].name(), err);
        self.seats[me].source.decision_rejected(me, &err);
    }

    /// Offer `victim` the chance to block an attack with a defend card from hand.
    ///
    /// The card is revealed and goes straight back to hand.
    pub(crate) fn try_defend(&mut self, victim: PlayerId) -> bool {
        let Some((card, name)) = self.table.players[victim]
            .zones()
            .hand()
            .iter()
            .find(|card| card.info().is_defend())
            .map(|card| (card.id(), card.name().to_string()))
        else {
            return false;
        };

        if !self.confirm(victim, Question::RevealDefense { card: name.clone() }) {
            return false;
        }
        self.table.move_card(victim, card, ZoneKind::Hand, ZoneKind::Reveal);
        info!("{} reveals {} and is unaffected", self.table.players[victim].name(), name);
        self.table.move_card(victim, card, ZoneKind::Reveal, ZoneKind::Hand);
        true
    }
}

/// Builder for games seated in code rather than from a [`GameConfig`].
///
/// ```
/// use rust_dominion::ai::AiConfig;
/// use rust_dominion::rules::GameBuilder;
///
/// let game = GameBuilder::new()
///     .seed(3)
///     .autonomous("Smithy", AiConfig::grand_smithy())
///     .autonomous("Money", AiConfig::big_money())
///     .build()
///     .unwrap();
///
/// assert_eq!(game.view().player_count(), 2);
/// ```
pub struct GameBuilder {
    catalog: Arc<CardCatalog>,
    config: GameConfig,
    humans: Vec<Box<dyn DecisionSource>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            catalog: Arc::new(CardCatalog::standard()),
            config: GameConfig::default(),
            humans: Vec::new(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(mut self, catalog: Arc<CardCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn kingdom<I, S>(mut self, kingdom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.kingdom = kingdom.into_iter().map(Into::into).collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Seat a participant whose decisions come from `source`.
    pub fn seat(mut self, name: impl Into<String>, source: Box<dyn DecisionSource>) -> Self {
        self.config = self.config.with_human(name);
        self.humans.push(source);
        self
    }

    pub fn autonomous(mut self, name: impl Into<String>, ai: AiConfig) -> Self {
        self.config = self.config.with_autonomous(name, ai);
        self
    }

    pub fn build(self) -> Result<Game, SetupError> {
        Game::new(self.catalog, self.config, self.humans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::ScriptedDecisions;
    use crate::rules::GameResult;

    const KINGDOM: [&str; 10] = [
        "Cellar", "Moat", "Village", "Smithy", "Militia", "Remodel", "Market", "Mine",
        "Laboratory", "Witch",
    ];

    fn two_humans() -> Game {
        GameBuilder::new()
            .kingdom(KINGDOM)
            .seed(11)
            .seat("Alice", Box::new(ScriptedDecisions::new()))
            .seat("Bob", Box::new(ScriptedDecisions::new()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_setup_deals_starting_decks() {
        let game = two_humans();
        let view = game.view();

        for (_, p) in view.participants() {
            assert_eq!(p.zones().hand().len(), 5);
            assert_eq!(p.owned_count(), 10);
            assert_eq!(p.owned_named("Estate"), 3);
        }
        assert_eq!(view.supply().remaining("Estate"), Some(8));
        assert_eq!(view.card_total(), view.supply().initial_total());
    }

    #[test]
    fn test_missing_and_unused_sources() {
        let catalog = Arc::new(CardCatalog::standard());
        let config = GameConfig::new(KINGDOM).with_human("Alice");
        assert_eq!(
            Game::new(Arc::clone(&catalog), config, Vec::new()).err(),
            Some(SetupError::MissingHumanSource("Alice".to_string()))
        );

        let config = GameConfig::new(KINGDOM).with_autonomous("Bot", AiConfig::big_money());
        let sources: Vec<Box<dyn DecisionSource>> = vec![Box::new(ScriptedDecisions::new())];
        assert_eq!(
            Game::new(catalog, config, sources).err(),
            Some(SetupError::UnusedHumanSources(1))
        );
    }

    #[test]
    fn test_no_seats_is_rejected() {
        let result = Game::new(
            Arc::new(CardCatalog::standard()),
            GameConfig::new(KINGDOM),
            Vec::new(),
        );
        assert_eq!(result.err(), Some(SetupError::PlayerCount(0)));
    }

    #[test]
    fn test_instructions_need_a_turn() {
        let mut game = two_humans();
        assert_eq!(
            game.apply(Instruction::Next),
            Err(GameError::Illegal(IllegalAction::NoActiveTurn))
        );

        assert_eq!(game.start_turn(), Some(PlayerId::new(0)));
        assert_eq!(game.start_turn(), Some(PlayerId::new(0)));
        assert_eq!(game.apply(Instruction::Next), Ok(Outcome::TurnEnded));
        assert_eq!(game.start_turn(), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_quit_ends_game() {
        let mut game = two_humans();
        game.start_turn();

        let outcome = game.apply(Instruction::Quit).unwrap();

        assert!(matches!(outcome, Outcome::GameEnded(_)));
        assert!(game.is_over());
        assert_eq!(game.start_turn(), None);
        assert_eq!(
            game.apply(Instruction::Info),
            Err(GameError::Illegal(IllegalAction::GameOver))
        );
        // Level on points, but Bob never took a turn.
        assert_eq!(
            game.standings().unwrap().result(),
            GameResult::Winner(PlayerId::new(1))
        );
    }

    #[test]
    fn test_rig_zone_keeps_total() {
        let mut game = two_humans();
        let total = game.view().card_total();

        game.rig_zone(PlayerId::new(0), ZoneKind::Hand, &["Gold", "Gold", "Smithy"])
            .unwrap();

        let hand = game.view().participant(PlayerId::new(0)).zones().hand().names();
        assert_eq!(hand, vec!["Gold", "Gold", "Smithy"]);
        assert_eq!(game.view().card_total(), total);

        game.start_turn();
        assert_eq!(
            game.rig_zone(PlayerId::new(0), ZoneKind::Hand, &["Gold"]),
            Err(GameError::Illegal(IllegalAction::TurnInProgress))
        );
    }
}
