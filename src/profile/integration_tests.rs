//! Profile-layer integration tests (event delta + snapshot flows)

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::profile::events::{apply_card_added, apply_daily_login, CardVariant};
use crate::profile::snapshot::{snapshot_from_facts, ProfileFacts};
use crate::progression::games::GameId;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn apply_delta(facts: &mut ProfileFacts, game: GameId, variant: CardVariant, today: NaiveDate) {
    // Persist the delta the way the host backend would: one atomic write.
    let delta = apply_card_added(facts, game, variant, today);
    if !matches!(variant, CardVariant::Duplicate) {
        *facts.card_counts.entry(game).or_insert(0) += 1;
    }
    facts.total_xp = delta.new_total_xp;
    facts
        .earned_achievements
        .extend(delta.new_achievement_keys.iter().cloned());
}

#[test]
fn test_collection_growth_cascade() {
    let today = d("2026-08-28");
    let mut facts = ProfileFacts::default();

    // Ten standard Pokémon cards: milestone + its XP land mid-stream.
    for _ in 0..10 {
        apply_delta(&mut facts, GameId::Pokemon, CardVariant::Standard, today);
    }

    assert_eq!(facts.card_counts[&GameId::Pokemon], 10);
    // 10 cards * 10 XP + bronze milestone 25 XP
    assert_eq!(facts.total_xp, 125);
    assert!(facts.earned_achievements.contains("pokemon_novice"));

    let snap = snapshot_from_facts(&facts, today);
    assert_eq!(snap.level.level, 2);
    assert!(snap.unlocked_item_ids.contains(&"frame_bronze"));

    // Re-running the same evaluation after persisting changes nothing.
    let replay = apply_card_added(&facts, GameId::Pokemon, CardVariant::Duplicate, today);
    assert!(replay.new_achievement_keys.is_empty());
    assert!(replay.new_item_ids.is_empty());
}

#[test]
fn test_cross_game_badges_accumulate() {
    let today = d("2026-08-28");
    let mut facts = ProfileFacts::default();

    apply_delta(&mut facts, GameId::Pokemon, CardVariant::Standard, today);
    assert!(!facts.earned_achievements.contains("multi_collector_2"));

    apply_delta(&mut facts, GameId::Yugioh, CardVariant::Standard, today);
    assert!(facts.earned_achievements.contains("multi_collector_2"));

    apply_delta(&mut facts, GameId::Lorcana, CardVariant::FirstEdition, today);
    assert!(facts.earned_achievements.contains("multi_collector_3"));
    assert!(!facts.earned_achievements.contains("multi_collector_all"));

    // 2x10 + 25 (first edition) + bronze 25 + silver 75
    assert_eq!(facts.total_xp, 145);
}

#[test]
fn test_login_streak_feeds_snapshot_and_items() {
    let today = d("2026-08-28");
    let mut facts = ProfileFacts {
        activity_dates: (1..=6).map(|i| today - Days::new(i)).collect(),
        ..Default::default()
    };

    // Seventh consecutive day: streak items unlock in the same delta.
    let delta = apply_daily_login(&facts, today);
    assert_eq!(delta.xp_gained, 5 + 6 * 2);
    assert!(delta.new_item_ids.contains(&"frame_flame"));
    assert!(delta.new_item_ids.contains(&"badge_week_streak"));

    facts.activity_dates.push(today);
    facts.total_xp += delta.xp_gained;

    let snap = snapshot_from_facts(&facts, today);
    assert_eq!(snap.current_streak_days, 7);
    assert_eq!(snap.calendar.current_streak_days, 7);
    assert!(snap.unlocked_item_ids.contains(&"frame_flame"));
}

#[test]
fn test_bulk_import_unlocks_every_tier_at_once() {
    let today = d("2026-08-28");
    let facts = ProfileFacts {
        card_counts: HashMap::from([(GameId::DragonBall, 999)]),
        ..Default::default()
    };

    // The thousandth card qualifies all six tiers in a single evaluation.
    let delta = apply_card_added(&facts, GameId::DragonBall, CardVariant::Standard, today);
    let milestone_keys: Vec<&str> = delta
        .new_achievement_keys
        .iter()
        .filter(|k| k.starts_with("dragonball_"))
        .map(|k| k.as_str())
        .collect();
    assert_eq!(milestone_keys.len(), 6);

    // 10 + 2x25 + 2x75 + 2x200 of tier XP crosses several levels at once.
    assert_eq!(delta.xp_gained, 610);
    let up = delta.level_up.expect("multi-level jump");
    assert_eq!(up.previous_level, 1);
    assert_eq!(up.new_level, 4);
    assert_eq!(delta.levels_crossed, vec![2, 3, 4]);
}

#[test]
fn test_snapshot_is_pure_over_facts() {
    let today = d("2026-08-28");
    let facts = ProfileFacts {
        total_xp: 900,
        card_counts: HashMap::from([(GameId::Mtg, 60), (GameId::OnePiece, 12)]),
        earned_achievements: ["mtg_novice".to_string(), "mtg_apprentice".to_string()]
            .into_iter()
            .collect(),
        activity_dates: vec![today, today - Days::new(1)],
    };

    let a = snapshot_from_facts(&facts, today);
    let b = snapshot_from_facts(&facts, today);

    // Identical facts, identical derived output.
    assert_eq!(
        serde_json::to_value(&a).unwrap(),
        serde_json::to_value(&b).unwrap()
    );
    assert_eq!(a.level.level, 5);
    assert_eq!(a.total_unique_cards, 72);
}
