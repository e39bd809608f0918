//! Game integration tests.

use test_log::test;
use zombie_dice::{
    CountError, DieType, DrawError, Faces, Game, GameOptions, GameState, NamesError, Outcome,
    StepError,
};

fn uniform(symbols: &str) -> GameOptions {
    let faces = Faces::parse(symbols).unwrap();
    DieType::ALL
        .into_iter()
        .fold(GameOptions::default(), |options, kind| {
            options.with_faces(kind, faces)
        })
}

/// Steps through states that need no input.
fn settle(game: &Game) -> GameState {
    while game.state().input().is_none() && !game.is_over() {
        game.update("").unwrap();
    }
    game.state()
}

/// Runs setup with the given names and stops at the first turn prompt.
fn start(game: &Game, names: &str) {
    settle(game);
    game.update(&names.split(',').count().to_string()).unwrap();
    game.update(names).unwrap();
    assert_eq!(settle(game), GameState::Init);
    game.update("").unwrap();
    assert_eq!(game.state(), GameState::Start);
}

/// Rolls once and stops after the dice are resolved.
fn roll(game: &Game) -> GameState {
    assert_eq!(game.update("").unwrap(), GameState::Rolling);
    assert_eq!(settle(game), GameState::ShowDice);
    game.update("").unwrap();
    settle(game)
}

fn hold(game: &Game) -> GameState {
    assert_eq!(game.update("h").unwrap(), GameState::Holding);
    settle(game)
}

fn set_brains(game: &Game, name: &str, brains: usize) {
    let mut players = game.players.lock();
    let player = players.iter_mut().find(|p| p.name() == name).unwrap();
    player.set_brains(brains);
}

fn brains_of(game: &Game, name: &str) -> usize {
    game.players()
        .iter()
        .find(|p| p.name() == name)
        .map(zombie_dice::Player::brains)
        .unwrap()
}

#[test]
fn setup_flow_reaches_first_turn() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.update("").unwrap(), GameState::Welcome);
    assert_eq!(game.update("").unwrap(), GameState::ReadingSize);
    assert_eq!(game.update("2").unwrap(), GameState::ReadingPlayers);
    assert_eq!(game.update("Ann, Bo").unwrap(), GameState::InitPlayer);
    assert_eq!(game.update("").unwrap(), GameState::Init);
    assert_eq!(game.update("").unwrap(), GameState::Start);

    let names: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, ["Ann", "Bo"]);
    assert!(game.active_index() < 2);
    assert_eq!(game.pool.lock().bag().len(), 13);
}

#[test]
fn player_count_below_two_reprompts() {
    let game = Game::new(GameOptions::default(), 1);
    settle(&game);

    assert_eq!(game.update("1").unwrap(), GameState::LessThanTwo);
    assert_eq!(game.state().input(), Some(zombie_dice::InputKind::PlayerCount));
    assert_eq!(game.update("two").unwrap(), GameState::InvalidSize);
    assert_eq!(game.update("").unwrap(), GameState::InvalidSize);
    assert_eq!(game.update("0").unwrap(), GameState::LessThanTwo);
    assert_eq!(game.update("3").unwrap(), GameState::ReadingPlayers);
    assert_eq!(game.expected_players(), 3);
    assert_eq!(
        zombie_dice::parse_player_count("1"),
        Err(CountError::LessThanTwo)
    );
}

#[test]
fn malformed_names_reprompt() {
    let game = Game::new(GameOptions::default(), 1);
    settle(&game);
    game.update("3").unwrap();

    assert_eq!(
        game.update("").unwrap(),
        GameState::InvalidNames(NamesError::Empty)
    );
    assert_eq!(
        game.update("Ann,,Cy").unwrap(),
        GameState::InvalidNames(NamesError::BlankName)
    );
    assert_eq!(
        game.update("Ann, Bo").unwrap(),
        GameState::InvalidNames(NamesError::WrongCount {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        game.update("Ann, Bo, Ann").unwrap(),
        GameState::InvalidNames(NamesError::Duplicate)
    );
    assert_eq!(game.update("Ann, Bo, Cy").unwrap(), GameState::InitPlayer);
    assert_eq!(game.players().len(), 3);
}

#[test]
fn invalid_command_reprompts() {
    let game = Game::new(GameOptions::default(), 2);
    start(&game, "Ann,Bo");

    assert_eq!(game.update("x").unwrap(), GameState::InvalidOption);
    assert_eq!(game.update("roll").unwrap(), GameState::InvalidOption);
    assert_eq!(game.update("H").unwrap(), GameState::Holding);
}

#[test]
fn three_shots_bust_the_turn() {
    let game = Game::new(uniform("ssssss"), 3);
    start(&game, "Ann,Bo");
    let active = game.active_player().unwrap();

    assert_eq!(roll(&game), GameState::ForceQuit);
    assert_eq!(game.pool.lock().bust_count(), 3);

    assert_eq!(game.update("").unwrap(), GameState::AddingTurn);
    assert_eq!(game.update("").unwrap(), GameState::Preparing);

    let player = game
        .players()
        .into_iter()
        .find(|p| p.name() == active.name())
        .unwrap();
    assert_eq!(player.brains(), 0);
    assert_eq!(player.turns(), 1);
}

#[test]
fn bust_discards_brains_from_earlier_rolls() {
    let game = Game::new(uniform("bbbsss"), 4);
    start(&game, "Ann,Bo");
    let active = game.active_player().unwrap();

    let mut state = roll(&game);
    while state == GameState::ShowScoreboard {
        state = roll(&game);
    }
    assert_eq!(state, GameState::ForceQuit);
    assert_eq!(settle_after_ack(&game), GameState::Init);
    assert_eq!(brains_of(&game, active.name()), 0);
}

fn settle_after_ack(game: &Game) -> GameState {
    game.update("").unwrap();
    settle(game)
}

#[test]
fn hold_commits_the_brain_store() {
    let game = Game::new(uniform("bbbbbb"), 5);
    start(&game, "Ann,Bo");
    let active = game.active_player().unwrap();

    assert_eq!(roll(&game), GameState::ShowScoreboard);
    assert_eq!(game.pool.lock().brains().len(), 3);

    assert_eq!(hold(&game), GameState::Init);
    assert_eq!(brains_of(&game, active.name()), 3);
    assert_ne!(game.active_player().unwrap().name(), active.name());
}

#[test]
fn brains_returned_to_the_bag_are_not_banked() {
    let game = Game::new(uniform("bbbbbb"), 6);
    start(&game, "Ann,Bo");
    let active = game.active_player().unwrap();

    for _ in 0..4 {
        assert_eq!(roll(&game), GameState::ShowScoreboard);
    }
    assert_eq!(game.pool.lock().brains().len(), 12);

    // The bag is down to one die, so the brain store goes back into it.
    assert_eq!(roll(&game), GameState::ShowScoreboard);
    let store = {
        let pool = game.pool.lock();
        assert_eq!(pool.total(), 13);
        pool.brains().len()
    };
    assert_eq!(store, 3);

    hold(&game);
    assert_eq!(brains_of(&game, active.name()), store);
}

#[test]
fn first_to_threshold_wins_once_turns_equalize() {
    let game = Game::new(uniform("bbbbbb").with_brains_to_win(12), 7);
    start(&game, "Ann,Bo");
    let first = game.active_player().unwrap();

    for _ in 0..4 {
        roll(&game);
    }
    assert_eq!(hold(&game), GameState::Init);
    assert_eq!(brains_of(&game, first.name()), 12);

    // The second player gets a turn before the game is decided.
    game.update("").unwrap();
    assert_eq!(game.state(), GameState::Start);
    assert_eq!(hold(&game), GameState::End);

    let result = game.result().unwrap();
    assert_eq!(result.winners().len(), 1);
    assert_eq!(result.winners()[0].name(), first.name());
    assert_eq!(result.eliminated.len(), 1);
    assert_eq!(game.snapshot().rounds_played(), 1);
}

#[test]
fn preset_scores_end_with_sole_winner() {
    let game = Game::new(GameOptions::default(), 8);
    start(&game, "Ann,Bo");
    set_brains(&game, "Ann", 13);

    assert_eq!(hold(&game), GameState::Init);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::End);

    let result = game.result().unwrap();
    assert_eq!(
        result.outcome,
        Outcome::Won {
            winners: result.standings.clone()
        }
    );
    assert_eq!(result.winners()[0].name(), "Ann");
    assert_eq!(result.eliminated[0].name(), "Bo");
    assert!(game.is_over());
}

#[test]
fn tie_break_round_narrows_to_highest_score() {
    let game = Game::new(GameOptions::default(), 9);
    start(&game, "Ann,Bo");
    set_brains(&game, "Ann", 15);
    set_brains(&game, "Bo", 14);

    hold(&game);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::InitTie);
    assert!(game.is_tie_break());
    assert!(game.eliminated().is_empty());
    assert_eq!(game.players().len(), 2);
    assert_eq!(game.pool.lock().bag().len(), 13);

    assert_eq!(settle_after_ack(&game), GameState::Init);
    game.update("").unwrap();
    hold(&game);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::End);

    let result = game.result().unwrap();
    assert_eq!(result.winners().len(), 1);
    assert_eq!(result.winners()[0].name(), "Ann");
    assert_eq!(result.eliminated[0].name(), "Bo");
}

#[test]
fn first_tie_check_drops_players_below_threshold() {
    let game = Game::new(GameOptions::default(), 10);
    start(&game, "Ann,Bo,Cy");
    set_brains(&game, "Ann", 20);
    set_brains(&game, "Bo", 14);
    set_brains(&game, "Cy", 5);

    hold(&game);
    game.update("").unwrap();
    hold(&game);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::InitTie);

    let survivors: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();
    assert_eq!(survivors, ["Ann", "Bo"]);
    assert_eq!(game.eliminated()[0].name(), "Cy");
    assert!(game.active_index() < 2);
}

#[test]
fn unbreakable_tie_declares_co_winners() {
    let game = Game::new(GameOptions::default(), 11);
    start(&game, "Ann,Bo");
    set_brains(&game, "Ann", 14);
    set_brains(&game, "Bo", 14);

    hold(&game);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::InitTie);

    settle_after_ack(&game);
    game.update("").unwrap();
    hold(&game);
    game.update("").unwrap();
    assert_eq!(hold(&game), GameState::End);

    let result = game.result().unwrap();
    assert_eq!(result.winners().len(), 2);
    assert!(result.eliminated.is_empty());
}

#[test]
fn quit_ends_without_winner() {
    let game = Game::new(GameOptions::default(), 12);
    start(&game, "Ann,Bo");

    assert_eq!(game.update("q").unwrap(), GameState::Quit);
    assert!(game.is_over());
    assert_eq!(game.result().unwrap().outcome, Outcome::Abandoned);
    assert_eq!(game.update("").unwrap_err(), StepError::GameOver);
}

#[test]
fn starved_pool_is_reported() {
    let options = GameOptions::default()
        .with_dice(DieType::Weak, 1)
        .with_dice(DieType::Tough, 1)
        .with_dice(DieType::Strong, 0);
    let game = Game::new(options, 13);
    start(&game, "Ann,Bo");

    assert_eq!(game.update("").unwrap(), GameState::Rolling);
    assert_eq!(
        game.update("").unwrap_err(),
        StepError::Draw(DrawError::NotEnoughDice { available: 2 })
    );
    assert_eq!(game.state(), GameState::Rolling);
}

#[test]
fn dice_and_turns_are_conserved_through_a_full_game() {
    let options = GameOptions::default();
    let game = Game::new(options.clone(), 2024);
    start(&game, "Ann,Bo,Cy");

    for _ in 0..100_000 {
        if game.is_over() {
            break;
        }

        let state = game.state();
        if matches!(
            state,
            GameState::Start | GameState::ShowDice | GameState::ShowScoreboard
        ) {
            assert_eq!(game.pool.lock().total(), options.total_dice());
        }

        let turns_before: usize = game.players().iter().map(|p| p.turns()).sum();
        let input = match state {
            GameState::Start | GameState::ShowScoreboard => {
                if game.pool.lock().brains().len() >= 4 {
                    "h"
                } else {
                    ""
                }
            }
            _ => "",
        };
        game.update(input).unwrap();

        if state == GameState::AddingTurn {
            let turns_after: usize = game.players().iter().map(|p| p.turns()).sum();
            assert_eq!(turns_after, turns_before + 1);
        }
    }

    assert_eq!(game.state(), GameState::End);
    let result = game.result().unwrap();
    assert!(!result.winners().is_empty());
    assert!(
        result
            .winners()
            .iter()
            .all(|p| p.brains() >= options.brains_to_win)
    );
}
