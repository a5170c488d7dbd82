//! Autonomous player tests.
//!
//! These tests check the heuristics against fixed game positions:
//! - Purchase strategies and the victory threshold
//! - Forced discards and remodel targets
//! - `AutonomousDecisions` answering engine requests
//! - Whole games between autonomous seats

use std::sync::Arc;

use rust_dominion::ai::{
    forced_discard, remodel_trash_target, strategy_purchase, treasure_purchase, victory_purchase,
    AiConfig, AutonomousDecisions, BuyStrategy, Planner, Weights,
};
use rust_dominion::cards::{CardCatalog, CardInfo};
use rust_dominion::core::{GameRng, PlayerId};
use rust_dominion::decision::{
    CardFilter, DecisionSource, GainPurpose, GainRequest, Location, Purpose, Question,
    ScriptedDecisions, SelectionRequest,
};
use rust_dominion::rules::{Game, GameBuilder, Instruction};
use rust_dominion::zones::ZoneKind;

const KINGDOM: [&str; 10] = [
    "Chapel", "Moat", "Village", "Smithy", "Militia", "Remodel", "Market", "Mine", "Laboratory",
    "Witch",
];

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn scripted_game() -> Game {
    GameBuilder::new()
        .kingdom(KINGDOM)
        .seed(13)
        .seat("Alice", Box::new(ScriptedDecisions::new()))
        .seat("Bob", Box::new(ScriptedDecisions::new()))
        .build()
        .unwrap()
}

fn infos<'a>(catalog: &'a CardCatalog, cards: &[&str]) -> Vec<&'a CardInfo> {
    cards
        .iter()
        .map(|name| catalog.lookup(name).map(Arc::as_ref).unwrap())
        .collect()
}

fn purchase(game: &Game, strategy: &BuyStrategy) -> Option<String> {
    let mut rng = GameRng::new(1);
    strategy_purchase(strategy, &game.view(), P0, &mut rng, None)
}

// === Purchases ===

/// Flat priority with 8 coins always buys a Province, never treasure.
#[test]
fn test_flat_priority_buys_province_at_eight() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Gold", "Gold", "Copper", "Copper", "Estate"])
        .unwrap();

    assert_eq!(purchase(&game, &BuyStrategy::FlatPriority).as_deref(), Some("Province"));
}

/// Below 8 coins flat priority steps down through Gold and Silver.
#[test]
fn test_flat_priority_tiers() {
    let mut game = scripted_game();

    game.rig_zone(P0, ZoneKind::Hand, &["Gold", "Silver", "Copper", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &BuyStrategy::FlatPriority).as_deref(), Some("Gold"));

    game.rig_zone(P0, ZoneKind::Hand, &["Copper", "Copper", "Copper", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &BuyStrategy::FlatPriority).as_deref(), Some("Silver"));

    game.rig_zone(P0, ZoneKind::Hand, &["Copper", "Copper", "Estate", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &BuyStrategy::FlatPriority), None);
}

/// The inserted kingdom card is bought until its copy cap is reached.
#[test]
fn test_kingdom_insertion_cap() {
    let strategy = BuyStrategy::KingdomInsertion {
        card: "Smithy".to_string(),
        max_copies: 3,
    };
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Silver", "Estate", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &strategy).as_deref(), Some("Smithy"));

    game.rig_zone(P0, ZoneKind::Discard, &["Smithy", "Smithy", "Smithy"]).unwrap();
    assert_eq!(purchase(&game, &strategy).as_deref(), Some("Silver"));
}

/// The opening card is bought once on a weak hand.
#[test]
fn test_opening_strategy() {
    let strategy = BuyStrategy::Opening {
        card: "Chapel".to_string(),
        max_coins: 4,
    };
    let mut game = scripted_game();

    game.rig_zone(P0, ZoneKind::Hand, &["Copper", "Copper", "Copper", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &strategy).as_deref(), Some("Chapel"));

    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Copper", "Copper", "Copper", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &strategy).as_deref(), Some("Silver"));

    game.rig_zone(P0, ZoneKind::Discard, &["Chapel"]).unwrap();
    game.rig_zone(P0, ZoneKind::Hand, &["Copper", "Copper", "Copper", "Estate", "Estate"])
        .unwrap();
    assert_eq!(purchase(&game, &strategy).as_deref(), Some("Silver"));
}

/// A starting deck has no actions, so the weighted strategy buys one.
#[test]
fn test_weighted_buys_action_first() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Copper", "Copper", "Copper", "Copper", "Copper"])
        .unwrap();

    let card = purchase(&game, &BuyStrategy::Weighted(Weights::default())).unwrap();
    let info = game.view().catalog().lookup(&card).unwrap();
    assert!(info.is_action() && info.is_kingdom());
    assert!(info.cost <= 5);
}

fn weights(action: f64, treasure: f64, max_actions: usize, max_treasure: usize) -> BuyStrategy {
    BuyStrategy::Weighted(Weights {
        action,
        treasure,
        max_actions,
        max_treasure,
    })
}

/// A ten-card deck of one Smithy, seven treasures and two Estates; 4 coins in hand.
fn weighted_game() -> Game {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Copper", "Copper", "Estate", "Estate"])
        .unwrap();
    game.rig_zone(P0, ZoneKind::Deck, &["Smithy", "Copper", "Copper", "Copper", "Copper"])
        .unwrap();
    game
}

/// With the action cap reached and treasure under target, treasure is bought.
#[test]
fn test_weighted_action_cap_buys_treasure() {
    let game = weighted_game();

    assert_eq!(purchase(&game, &weights(0.5, 0.9, 1, 20)).as_deref(), Some("Silver"));
}

/// With both caps reached nothing is bought.
#[test]
fn test_weighted_both_caps_buy_nothing() {
    let game = weighted_game();

    assert_eq!(purchase(&game, &weights(0.5, 0.9, 1, 7)), None);
}

/// With both shares at or over target nothing is bought.
#[test]
fn test_weighted_both_over_target_buys_nothing() {
    let game = weighted_game();

    // Actions 1/10, treasure 7/10.
    assert_eq!(purchase(&game, &weights(0.05, 0.5, 10, 20)), None);
}

/// Equal relative shortfalls favour treasure.
#[test]
fn test_weighted_tie_buys_treasure() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Silver", "Estate", "Estate", "Estate"])
        .unwrap();
    game.rig_zone(P0, ZoneKind::Deck, &["Smithy", "Smithy", "Estate", "Estate", "Estate"])
        .unwrap();

    // Both shares are 2/10 against a target of 0.5.
    assert_eq!(purchase(&game, &weights(0.5, 0.5, 10, 20)).as_deref(), Some("Silver"));
}

/// The victory check runs before any weighting.
#[test]
fn test_weighted_checks_victory_first() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Gold", "Gold", "Silver", "Estate", "Estate"])
        .unwrap();

    // No actions owned against a 0.9 target.
    assert_eq!(purchase(&game, &weights(0.9, 0.1, 10, 20)).as_deref(), Some("Province"));
}

/// With Gold sold out, a Gold-sized hand falls back to Silver.
#[test]
fn test_treasure_purchase_without_gold() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Silver", "Silver", "Estate", "Estate"])
        .unwrap();
    assert_eq!(treasure_purchase(&game.view(), P0).as_deref(), Some("Gold"));

    game.rig_zone(P1, ZoneKind::Discard, &["Gold"; 30]).unwrap();
    assert_eq!(game.view().supply().remaining("Gold"), Some(0));
    assert_eq!(treasure_purchase(&game.view(), P0).as_deref(), Some("Silver"));
}

/// Duchy becomes a purchase at 5 coins only after the first victory round.
#[test]
fn test_duchy_after_victory_round() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Silver", "Copper", "Estate", "Estate"])
        .unwrap();
    game.start_turn();
    assert_eq!(victory_purchase(&game.view(), P0, Some(11)), None);
    game.apply(Instruction::Quit).unwrap();

    let mut game = scripted_game();
    for _ in 0..22 {
        assert!(game.play_turn().unwrap());
    }
    game.rig_zone(P0, ZoneKind::Hand, &["Silver", "Silver", "Copper", "Estate", "Estate"])
        .unwrap();
    game.start_turn();

    assert_eq!(game.view().participant(P0).turns(), 12);
    assert_eq!(victory_purchase(&game.view(), P0, Some(11)).as_deref(), Some("Duchy"));
    assert_eq!(victory_purchase(&game.view(), P0, None), None);
}

// === Choice heuristics ===

/// Forced down to 3 from `[Estate, Estate, Copper, Smithy, Gold]`, both Estates go.
#[test]
fn test_forced_discard_scenario() {
    let catalog = CardCatalog::standard();
    let hand = infos(&catalog, &["Estate", "Estate", "Copper", "Smithy", "Gold"]);

    assert_eq!(forced_discard(&hand, 2), vec!["Estate", "Estate"]);
}

/// An autonomous Militia victim discards its Estates through the engine.
#[test]
fn test_autonomous_victim_discards_estates() {
    let mut game = GameBuilder::new()
        .kingdom(KINGDOM)
        .seed(13)
        .seat("Alice", Box::new(ScriptedDecisions::new()))
        .autonomous("Bot", AiConfig::big_money())
        .build()
        .unwrap();
    game.rig_zone(P0, ZoneKind::Hand, &["Militia", "Copper", "Copper", "Copper", "Copper"])
        .unwrap();
    game.rig_zone(P1, ZoneKind::Hand, &["Estate", "Estate", "Copper", "Smithy", "Gold"])
        .unwrap();

    game.start_turn();
    game.apply(Instruction::Play("Militia".to_string())).unwrap();

    let bot = game.view().participant(P1);
    assert_eq!(bot.zones().hand().names(), vec!["Copper", "Smithy", "Gold"]);
    assert_eq!(bot.zones().discard().names(), vec!["Estate", "Estate"]);
}

/// Negative points beat every other remodel rule.
#[test]
fn test_remodel_trash_scenario() {
    let catalog = CardCatalog::standard();
    let hand = infos(&catalog, &["Curse", "Silver", "Smithy"]);

    assert_eq!(remodel_trash_target(&hand, 1, Some(11)).as_deref(), Some("Curse"));
}

// === AutonomousDecisions ===

fn remodel_trash(game: &Game, config: AiConfig) -> Vec<String> {
    let mut ai = AutonomousDecisions::new(config, GameRng::new(2));
    ai.select_cards(
        &game.view(),
        P0,
        &SelectionRequest {
            purpose: Purpose::RemodelTrash,
            location: Location::Zone(P0, ZoneKind::Hand),
            filter: CardFilter::Any,
            min: 1,
            max: 1,
        },
    )
}

/// Gold is only remodelled once the first victory round has passed.
#[test]
fn test_autonomous_remodel_keeps_gold_before_victory_round() {
    let mut game = scripted_game();
    for _ in 0..14 {
        assert!(game.play_turn().unwrap());
    }
    // Remodel itself is already in play when the trash is chosen.
    game.rig_zone(P0, ZoneKind::Hand, &["Gold", "Copper", "Copper", "Copper", "Estate"])
        .unwrap();
    game.start_turn();
    assert_eq!(game.view().participant(P0).turns(), 8);

    assert_eq!(remodel_trash(&game, AiConfig::weighted()), vec!["Copper"]);
    assert_eq!(
        remodel_trash(&game, AiConfig::weighted().with_first_victory_round(Some(7))),
        vec!["Gold"]
    );
    assert_eq!(
        remodel_trash(&game, AiConfig::weighted().with_first_victory_round(None)),
        vec!["Gold"]
    );
}

/// Chapel trashes curses, then Estates, then Coppers.
#[test]
fn test_autonomous_chapel_trash() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Gold", "Copper", "Estate", "Silver", "Curse"])
        .unwrap();
    let mut ai = AutonomousDecisions::new(AiConfig::default(), GameRng::new(2));

    let picked = ai.select_cards(
        &game.view(),
        P0,
        &SelectionRequest {
            purpose: Purpose::Trash,
            location: Location::Zone(P0, ZoneKind::Hand),
            filter: CardFilter::Any,
            min: 0,
            max: 4,
        },
    );

    assert_eq!(picked, vec!["Curse", "Estate", "Copper"]);
}

/// Spy keeps good cards on its own deck and bad ones on opponents' decks.
#[test]
fn test_autonomous_spy_answers() {
    let game = scripted_game();
    let view = game.view();
    let mut ai = AutonomousDecisions::new(AiConfig::default(), GameRng::new(2));
    let mut ask = |owner, card: &str| {
        ai.confirm(&view, P0, &Question::DiscardRevealed { owner, card: card.to_string() })
    };

    assert_eq!(ask(P0, "Estate"), Some(true));
    assert_eq!(ask(P0, "Gold"), Some(false));
    assert_eq!(ask(P1, "Gold"), Some(true));
    assert_eq!(ask(P1, "Copper"), Some(false));
}

/// Mine gains the best treasure within reach, Workshop the priciest action.
#[test]
fn test_autonomous_gains() {
    let game = scripted_game();
    let view = game.view();
    let mut ai = AutonomousDecisions::new(AiConfig::default(), GameRng::new(2));

    let mine = GainRequest {
        purpose: GainPurpose::Mine { trashed: "Silver".to_string() },
        max_cost: 6,
        filter: CardFilter::Treasure,
    };
    assert_eq!(ai.name_card(&view, P0, &mine), "Gold");

    let workshop = GainRequest {
        purpose: GainPurpose::Workshop,
        max_cost: 4,
        filter: CardFilter::Any,
    };
    let gained = ai.name_card(&view, P0, &workshop);
    let info = view.catalog().lookup(&gained).unwrap();
    assert!(info.is_action());
    assert_eq!(info.cost, 4);
}

/// The autonomous planner plays a drawing card before buying.
#[test]
fn test_planner_plays_draw_card() {
    let mut game = scripted_game();
    game.rig_zone(P0, ZoneKind::Hand, &["Smithy", "Copper", "Copper", "Copper", "Estate"])
        .unwrap();
    game.start_turn();
    let mut planner = Planner::autonomous(AiConfig::big_money(), GameRng::new(4));

    assert_eq!(
        planner.next_instruction(&game.view(), P0),
        Instruction::Play("Smithy".to_string())
    );
}

// === Setup and whole games ===

/// A two-seat supply holds 8 of each victory card, 10 Curses and 10 of each kingdom card.
#[test]
fn test_two_player_supply_counts() {
    let game = scripted_game();
    let supply = game.view().supply();

    for name in ["Estate", "Duchy", "Province"] {
        assert_eq!(supply.remaining(name), Some(8), "{name}");
    }
    assert_eq!(supply.remaining("Curse"), Some(10));
    for name in KINGDOM {
        assert_eq!(supply.remaining(name), Some(10), "{name}");
    }
}

/// Kingdom victory cards use the victory pile size.
#[test]
fn test_gardens_pile() {
    let mut kingdom = KINGDOM;
    kingdom[0] = "Gardens";
    let game = GameBuilder::new()
        .kingdom(kingdom)
        .autonomous("A", AiConfig::big_money())
        .autonomous("B", AiConfig::big_money())
        .autonomous("C", AiConfig::big_money())
        .build()
        .unwrap();

    let supply = game.view().supply();
    assert_eq!(supply.remaining("Gardens"), Some(12));
    assert_eq!(supply.remaining("Curse"), Some(20));
    assert_eq!(supply.remaining("Estate"), Some(12));
}

/// Four autonomous seats with different configurations finish a game.
#[test]
fn test_four_autonomous_seats_finish() {
    let mut game = GameBuilder::new()
        .kingdom([
            "Chapel", "Moat", "Throne Room", "Smithy", "Witch", "Thief", "Spy", "Library", "Feast",
            "Remodel",
        ])
        .seed(2024)
        .autonomous("Money", AiConfig::big_money())
        .autonomous("Smithy", AiConfig::grand_smithy())
        .autonomous("Chapel", AiConfig::chapel())
        .autonomous("Weighted", AiConfig::weighted())
        .build()
        .unwrap();
    let total = game.view().card_total();

    game.run(4000).unwrap();

    assert!(game.is_over());
    assert_eq!(game.view().card_total(), total);
    let standings = game.standings().unwrap();
    let points: Vec<i32> = standings.entries().iter().map(|s| s.victory_points).collect();
    assert!(points.windows(2).all(|pair| pair[0] >= pair[1]));
}
