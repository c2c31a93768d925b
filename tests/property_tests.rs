//! Property-based tests over random play.

use proptest::prelude::*;

use klondike_engine::cards::serializer::{deserialize, deserialize_bottom_card, serialize};
use klondike_engine::{
    Card, CardStack, FoundationPile, GameConfig, GameModel, GameModelView, Location, Move,
    TableauPile, DECK_SIZE,
};

/// Everything a player could see or reach, in a comparable form.
#[derive(Debug, PartialEq)]
struct Snapshot {
    deck: Vec<Card>,
    discard: Vec<Card>,
    foundations: Vec<Vec<Card>>,
    tableau: Vec<Vec<(Card, bool)>>,
}

fn snapshot(model: &GameModel) -> Snapshot {
    Snapshot {
        deck: model.deck().cards().iter().collect(),
        discard: model.discard_pile().iter().collect(),
        foundations: FoundationPile::ALL
            .into_iter()
            .map(|pile| model.foundation_pile(pile).iter().collect())
            .collect(),
        tableau: TableauPile::ALL
            .into_iter()
            .map(|pile| {
                model
                    .tableau_pile(pile)
                    .iter()
                    .map(|card| (card, model.is_visible_in_tableau(card)))
                    .collect()
            })
            .collect(),
    }
}

fn assert_consistent(model: &GameModel) -> Result<(), TestCaseError> {
    let mut ids: Vec<u8> = model.all_cards().map(Card::id).collect();
    ids.sort_unstable();
    prop_assert_eq!(ids, (0..DECK_SIZE as u8).collect::<Vec<_>>());

    let on_foundations: usize = FoundationPile::ALL
        .into_iter()
        .map(|pile| model.foundation_pile(pile).len())
        .sum();
    prop_assert_eq!(model.score(), on_foundations);
    prop_assert_eq!(model.is_completed(), model.score() == DECK_SIZE);

    for pile in TableauPile::ALL {
        let cards: Vec<Card> = model.tableau_pile(pile).iter().collect();
        let first_visible = cards.iter().position(|&card| model.is_visible_in_tableau(card));
        if let Some(start) = first_visible {
            // Face-up cards form a suffix.
            prop_assert!(cards[start..].iter().all(|&card| model.is_visible_in_tableau(card)));
            prop_assert!(model.is_lowest_visible_in_tableau(cards[start]));
        }
    }
    Ok(())
}

/// What a random step did.
#[derive(Debug)]
enum Step {
    Undo,
    Performed(Move),
    ResetDeck { recycled: usize },
}

/// Play one step chosen by `choice`.
fn step(model: &mut GameModel, choice: u8) -> Step {
    if choice % 10 == 0 {
        model.undo_last();
        return Step::Undo;
    }

    let moves = model.legal_moves();
    if choice % 3 != 0 && !moves.is_empty() {
        let mv = moves[choice as usize % moves.len()];
        model.perform(mv);
        Step::Performed(mv)
    } else if !model.is_deck_empty() {
        let mv = model.discard_move();
        model.perform(mv);
        Step::Performed(mv)
    } else {
        let recycled = model.discard_pile().len();
        model.reset_deck();
        Step::ResetDeck { recycled }
    }
}

fn all_cards() -> Vec<Card> {
    Card::all().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // 1. Every card exists exactly once after every step
    #[test]
    fn cards_are_conserved(seed in any::<u64>(), choices in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut model = GameModel::with_seed(seed);
        assert_consistent(&model)?;

        for choice in choices {
            step(&mut model, choice);
            assert_consistent(&model)?;
        }
    }

    // 2. Score only drops when undoing or taking a card off a foundation
    #[test]
    fn score_drops_only_from_foundation(seed in any::<u64>(), choices in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut model = GameModel::with_seed(seed);

        for choice in choices {
            let before = model.score();
            let taken = step(&mut model, choice);
            let after = model.score();

            prop_assert!(after.abs_diff(before) <= 1);
            if after < before {
                let from_foundation = match taken {
                    Step::Undo => true,
                    Step::Performed(mv) => mv
                        .card_move()
                        .is_some_and(|m| matches!(m.origin(), Location::Foundation(_))),
                    Step::ResetDeck { .. } => false,
                };
                prop_assert!(from_foundation, "score dropped after {:?}", taken);
            }
        }
    }

    // 3. Undoing everything restores the deal
    #[test]
    fn undo_all_restores_deal(seed in any::<u64>(), choices in prop::collection::vec(any::<u8>(), 0..150)) {
        let config = GameConfig::new(seed).with_undoable_deck_reset();
        let mut model = GameModel::new(config);
        let initial = snapshot(&model);

        for choice in choices {
            step(&mut model, choice);
        }
        while model.can_undo() {
            model.undo_last();
            assert_consistent(&model)?;
        }
        prop_assert_eq!(snapshot(&model), initial);
    }

    // 4. Each committed move adds exactly one history entry
    #[test]
    fn one_history_entry_per_move(seed in any::<u64>(), choices in prop::collection::vec(1..=9u8, 0..100)) {
        let mut model = GameModel::new(GameConfig::new(seed).with_undoable_deck_reset());

        for choice in choices {
            let before = model.history().len();
            let expected = match step(&mut model, choice) {
                Step::ResetDeck { recycled: 0 } => before,
                _ => before + 1,
            };
            prop_assert_eq!(model.history().len(), expected);
        }
    }

    // 5. Wire format round trip
    #[test]
    fn wire_round_trip(cards in prop::sample::subsequence(all_cards(), 1..=13).prop_shuffle()) {
        let stack = CardStack::from_cards(cards.iter().copied());
        let text = serialize(&stack);

        prop_assert_eq!(deserialize(&text).unwrap(), stack);
        prop_assert_eq!(deserialize_bottom_card(&text).unwrap(), cards[0]);
    }

    // 6. Card tokens parse back to the same card
    #[test]
    fn card_token_round_trip(id in 0..DECK_SIZE as u8) {
        let card = Card::from_id(id).unwrap();
        prop_assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
}
