mod common;

use elective_succession::elective;
use elective_succession::host::{ActiveLaws, HeirDecision, HookError, SuccessionOutcome};
use elective_succession::ids::{HeirGender, LawType, SuccessionOrder};
use elective_succession::Game;

#[test]
fn host_search_ranks_by_order_and_gender() {
    let mut game = common::new_game();
    let (rival, court) = common::add_player_with_court(&mut game, "Rome", false);

    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Primogeniture, HeirGender::Any),
        Some(court.aldric)
    );
    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Ultimogeniture, HeirGender::Any),
        Some(court.corin)
    );
    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Kinship, HeirGender::Any),
        Some(court.berenice)
    );
    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Primogeniture, HeirGender::Female),
        Some(court.berenice)
    );
    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Ultimogeniture, HeirGender::Male),
        Some(court.corin)
    );
}

#[test]
fn elective_player_has_no_heir_under_any_variant() {
    let mut game = common::new_game();
    let (human, _) = common::add_player_with_court(&mut game, "Carthage", true);
    elective::install(&mut game);
    game.start();

    for order in SuccessionOrder::ALL {
        for gender in [HeirGender::Male, HeirGender::Female, HeirGender::Any] {
            assert_eq!(
                game.find_heir(human, order, gender),
                None,
                "{order:?}/{gender:?} should produce no heir"
            );
        }
    }
}

#[test]
fn non_elective_player_is_untouched_by_the_override() {
    let mut game = common::new_game();
    let (rival, court) = common::add_player_with_court(&mut game, "Rome", false);
    elective::install(&mut game);
    game.start();

    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Primogeniture, HeirGender::Any),
        Some(court.aldric)
    );
}

#[test]
fn unresolved_types_fail_closed() {
    // The player carries some law id, but with no data loaded the gate must
    // treat it as not-elective and let the host search run.
    let mut game = Game::unconfigured();
    let (human, court) = common::add_player_with_court(&mut game, "Carthage", true);
    game.world_mut()
        .get_mut::<ActiveLaws>(human)
        .unwrap()
        .0
        .insert(LawType(3));

    elective::install(&mut game);
    assert_eq!(
        game.find_heir(human, SuccessionOrder::Primogeniture, HeirGender::Any),
        Some(court.aldric)
    );
}

#[test]
fn failing_foreign_hook_leaves_host_search_intact() {
    let mut game = common::new_game();
    let (rival, court) = common::add_player_with_court(&mut game, "Rome", false);
    elective::install(&mut game);

    game.hooks_mut().on_heir_lookup(
        "faulty-extension",
        Box::new(|_, _| {
            Err(HookError {
                hook: "faulty",
                message: "lookup exploded".to_string(),
            })
        }),
    );

    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Primogeniture, HeirGender::Any),
        Some(court.aldric)
    );
}

#[test]
fn foreign_no_heir_decision_short_circuits() {
    // Any extension can force "no heir"; the host search must not run.
    let mut game = common::new_game();
    let (rival, _) = common::add_player_with_court(&mut game, "Rome", false);

    game.hooks_mut()
        .on_heir_lookup("other-extension", Box::new(|_, _| Ok(HeirDecision::NoHeir)));

    assert_eq!(
        game.find_heir(rival, SuccessionOrder::Primogeniture, HeirGender::Any),
        None
    );
}

#[test]
fn succession_for_non_elective_installs_the_eldest() {
    let mut game = common::new_game();
    let (rival, court) = common::add_player_with_court(&mut game, "Rome", false);
    elective::install(&mut game);
    game.start();

    let outcome = game.succeed_leader(rival).unwrap();
    assert_eq!(outcome, SuccessionOutcome::Installed(court.aldric));
    assert_eq!(game.leader(rival), Some(court.aldric));
    assert!(!game.election_pending(rival));
}

#[test]
fn succession_for_elective_falls_through_to_election() {
    let mut game = common::new_game();
    let (human, _) = common::add_player_with_court(&mut game, "Carthage", true);
    elective::install(&mut game);
    game.start();

    let outcome = game.succeed_leader(human).unwrap();
    assert_eq!(outcome, SuccessionOutcome::ElectionPending);
    assert_eq!(game.leader(human), None);
    assert!(game.election_pending(human));

    let globals = *game.infos().globals().unwrap();
    let triggers: Vec<_> = game.events().iter().map(|e| e.trigger).collect();
    assert_eq!(triggers, vec![globals.succession_fail]);
}
