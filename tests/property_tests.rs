//! Property tests for target resolution.
//!
//! Random boards and cards check the invariants that must hold on any input:
//! - Attack selects exactly the vulnerable, vector-compatible nodes
//! - Exploit never leaves its allowed states
//! - Dual wildcards union, `any` returns the whole board
//! - Precomputed targets pass through untouched
//! - Results are deterministic, deduplicated and in board order

use proptest::prelude::*;

use darknet_targeting::cards::{Board, Card, CardType, InfrastructureCard, WildcardSpec};
use darknet_targeting::core::{AttackVector, InfrastructureState, StateSet};
use darknet_targeting::targeting::{is_compatible, TargetResolver};

const VECTORS: [&str; 8] = [
    "exploit", "ddos", "attack", "network", "web", "social", "malware", "physical",
];

fn state_strategy() -> impl Strategy<Value = InfrastructureState> {
    prop::sample::select(InfrastructureState::ALL.to_vec())
}

fn vector_strategy() -> impl Strategy<Value = AttackVector> {
    prop::sample::select(VECTORS.to_vec()).prop_map(AttackVector::from)
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        (state_strategy(), prop::collection::vec(vector_strategy(), 0..3)),
        0..10,
    )
    .prop_map(|nodes| {
        nodes
            .into_iter()
            .enumerate()
            .map(|(i, (state, vectors))| {
                InfrastructureCard::new(format!("I{:03}", i + 1), state).with_vectors(vectors)
            })
            .collect()
    })
}

fn card_type_strategy() -> impl Strategy<Value = CardType> {
    prop::sample::select(CardType::ALL.to_vec())
}

proptest! {
    /// Attack returns exactly the vulnerable nodes open to its vector.
    #[test]
    fn prop_attack_is_vulnerable_and_compatible(
        board in board_strategy(),
        vector in prop::option::of(vector_strategy()),
    ) {
        let mut card = Card::new("A101", CardType::Attack);
        card.attack_vector = vector.clone();

        let expected: Vec<String> = board
            .iter()
            .filter(|n| n.state == InfrastructureState::Vulnerable)
            .filter(|n| is_compatible(vector.as_ref(), n))
            .map(|n| n.id.clone())
            .collect();

        prop_assert_eq!(TargetResolver::new().valid_targets(&card, &board), expected);
    }

    /// Exploit never selects a node outside secure and fortified states.
    #[test]
    fn prop_exploit_stays_in_allowed_states(
        board in board_strategy(),
        vector in prop::option::of(vector_strategy()),
    ) {
        let mut card = Card::new("A201", CardType::Exploit);
        card.attack_vector = vector;
        let allowed = StateSet::SECURE | StateSet::FORTIFIED | StateSet::FORTIFIED_WEAKEN;

        for id in TargetResolver::new().valid_targets(&card, &board) {
            let node = board.get(&id);
            prop_assert!(node.is_some_and(|n| allowed.has(n.state)), "{} outside allowed states", id);
        }
    }

    /// The exploit-attack wildcard covers both halves of the union.
    #[test]
    fn prop_dual_wildcard_is_union(board in board_strategy()) {
        let resolver = TargetResolver::new();
        let dual = Card::wildcard("A501", WildcardSpec::Dual(CardType::Exploit, CardType::Attack));
        let exploit = Card::new("A201", CardType::Exploit);
        let attack = Card::new("A101", CardType::Attack);

        let union = resolver.valid_targets(&dual, &board);
        for id in resolver
            .valid_targets(&exploit, &board)
            .into_iter()
            .chain(resolver.valid_targets(&attack, &board))
        {
            prop_assert!(union.contains(&id));
        }
    }

    /// The any wildcard returns every node in board order.
    #[test]
    fn prop_any_wildcard_is_full_board(board in board_strategy()) {
        let any = Card::wildcard("A599", WildcardSpec::Any);
        prop_assert_eq!(TargetResolver::new().valid_targets(&any, &board), board.ids());
    }

    /// Precomputed targets are returned verbatim for any card.
    #[test]
    fn prop_override_is_verbatim(
        board in board_strategy(),
        card_type in card_type_strategy(),
        targets in prop::collection::vec("[A-Z][0-9]{3}", 1..5),
    ) {
        let card = Card::new("X001", card_type).with_valid_targets(targets.clone());
        prop_assert_eq!(TargetResolver::new().valid_targets(&card, &board), targets);
    }

    /// A vector no node lists empties the result for state-filtered types.
    #[test]
    fn prop_unlisted_vector_is_empty(
        states in prop::collection::vec(state_strategy(), 0..10),
        card_type in prop::sample::select(vec![
            CardType::Attack,
            CardType::Exploit,
            CardType::Shield,
            CardType::Fortify,
            CardType::Response,
            CardType::Reaction,
        ]),
    ) {
        let board: Board = states
            .into_iter()
            .enumerate()
            .map(|(i, state)| InfrastructureCard::new(format!("I{i}"), state).with_vectors(["web"]))
            .collect();
        let card = Card::new("X001", card_type).with_vector("physical");

        prop_assert!(TargetResolver::new().valid_targets(&card, &board).is_empty());
    }

    /// Results are deterministic, unique and in board order.
    #[test]
    fn prop_deterministic_unique_ordered(
        board in board_strategy(),
        card_type in card_type_strategy(),
        spec in prop::sample::select(vec![
            None,
            Some(WildcardSpec::Any),
            Some(WildcardSpec::Dual(CardType::Exploit, CardType::Attack)),
            Some(WildcardSpec::Dual(CardType::Shield, CardType::Fortify)),
            Some(WildcardSpec::Single(CardType::Special)),
        ]),
    ) {
        let resolver = TargetResolver::new();
        let mut card = Card::new("X001", card_type);
        card.wildcard_type = spec;

        let first = resolver.valid_targets(&card, &board);
        prop_assert_eq!(&first, &resolver.valid_targets(&card, &board));

        let mut positions: Vec<usize> = first
            .iter()
            .filter_map(|id| board.iter().position(|n| &n.id == id))
            .collect();
        prop_assert_eq!(positions.len(), first.len());

        // Unions may interleave, but never repeat a node.
        let unsorted = positions.clone();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), first.len());
        if card_type != CardType::Wildcard {
            prop_assert_eq!(unsorted, positions);
        }
    }

    /// A validated click is always one of the listed targets, and vice versa.
    #[test]
    fn prop_validate_agrees_with_targets(
        board in board_strategy(),
        card_type in card_type_strategy(),
        vector in prop::option::of(vector_strategy()),
    ) {
        let resolver = TargetResolver::new();
        let mut card = Card::new("X001", card_type);
        card.attack_vector = vector;
        let targets = resolver.valid_targets(&card, &board);

        for node in &board {
            let accepted = resolver.validate_target(&card, &board, &node.id).is_ok();
            prop_assert_eq!(accepted, targets.contains(&node.id));
        }
    }

    /// Precomputed targets validate exactly when listed, on or off the board.
    #[test]
    fn prop_validate_agrees_with_precomputed_targets(
        board in board_strategy(),
        card_type in card_type_strategy(),
        targets in prop::collection::vec("I0[0-9]{2}", 1..5),
    ) {
        let resolver = TargetResolver::new();
        let card = Card::new("X001", card_type).with_valid_targets(targets.clone());
        let listed = resolver.valid_targets(&card, &board);

        for id in board.ids().iter().chain(&targets) {
            let accepted = resolver.validate_target(&card, &board, id).is_ok();
            prop_assert_eq!(accepted, listed.contains(id));
        }
    }

    /// Non-wildcards are played as their own type on every listed target.
    #[test]
    fn prop_play_type_matches_targets(
        board in board_strategy(),
        card_type in prop::sample::select(CardType::CONCRETE.to_vec()),
    ) {
        let resolver = TargetResolver::new();
        let card = Card::new("X001", card_type);
        let targets = resolver.valid_targets(&card, &board);

        for node in &board {
            let play_type = resolver.play_type_for_target(&card, &board, &node.id);
            prop_assert_eq!(play_type.is_some(), targets.contains(&node.id));
        }
    }
}
