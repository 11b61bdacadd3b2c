use snake_engine::log;
use snake_engine::replay::{ReplayPlayer, ReplayRecorder};
use snake_engine::{GameState, MoveOutcome};

use crate::script::Script;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver(MoveOutcome),
    /// The game handed to the driver had already ended.
    AlreadyOver,
    ScriptEnded,
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub score: u32,
    pub stop_reason: StopReason,
}

/// Plays `script` one entry per tick. Turns the game accepts are fed to
/// `recorder` when one is given.
pub fn run_script(
    game: &mut GameState,
    script: &Script,
    tick_limit: u64,
    mut recorder: Option<&mut ReplayRecorder>,
) -> RunSummary {
    let mut turns = script.iter();

    let stop_reason = loop {
        if game.is_game_over() {
            break StopReason::AlreadyOver;
        }
        if game.ticks() >= tick_limit {
            break StopReason::TickLimit;
        }

        let tick = game.ticks();
        match turns.next() {
            None => break StopReason::ScriptEnded,
            Some(Some(direction)) => {
                if game.change_direction(*direction) {
                    if let Some(recorder) = recorder.as_deref_mut() {
                        recorder.record_direction(tick, *direction);
                    }
                } else {
                    log!("Tick {}: turn {:?} rejected", tick, direction);
                }
            }
            Some(None) => {}
        }

        let outcome = game.advance();
        if outcome.is_fatal() {
            break StopReason::GameOver(outcome);
        }
    };

    summarize(game, stop_reason)
}

/// Replays a recorded game until it ends or runs out of recorded ticks.
pub fn run_replay(game: &mut GameState, player: &mut ReplayPlayer, tick_limit: u64) -> RunSummary {
    let last_tick = player.total_ticks().min(tick_limit);

    let stop_reason = loop {
        if game.is_game_over() {
            break StopReason::AlreadyOver;
        }
        if game.ticks() >= last_tick {
            break if last_tick < player.total_ticks() {
                StopReason::TickLimit
            } else {
                StopReason::ScriptEnded
            };
        }

        player.apply_pending(game);
        let outcome = game.advance();
        if outcome.is_fatal() {
            break StopReason::GameOver(outcome);
        }
    };

    summarize(game, stop_reason)
}

fn summarize(game: &GameState, stop_reason: StopReason) -> RunSummary {
    let summary = RunSummary {
        ticks: game.ticks(),
        score: game.score(),
        stop_reason,
    };
    log!(
        "Run finished after {} ticks with score {} ({:?})",
        summary.ticks,
        summary.score,
        summary.stop_reason
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use snake_engine::SessionRng;
    use snake_engine::version::VERSION;

    fn create_game() -> GameState {
        GameState::with_rng(10, 10, SessionRng::new(11)).unwrap()
    }

    #[test]
    fn test_script_runs_until_wall() {
        let mut game = create_game();
        // Straight up from row 5 leaves the board on the sixth tick,
        // unless food is picked up on the way, which does not change that.
        let script = parse_script("u.........").unwrap();
        let summary = run_script(&mut game, &script, 100, None);
        assert_eq!(summary.stop_reason, StopReason::GameOver(MoveOutcome::HitWall));
        assert_eq!(summary.ticks, 6);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_script_can_end_first() {
        let mut game = create_game();
        let script = parse_script("..").unwrap();
        let summary = run_script(&mut game, &script, 100, None);
        assert_eq!(summary.stop_reason, StopReason::ScriptEnded);
        assert_eq!(summary.ticks, 2);
    }

    #[test]
    fn test_tick_limit_stops_the_run() {
        let mut game = create_game();
        let script = parse_script("....").unwrap();
        let summary = run_script(&mut game, &script, 3, None);
        assert_eq!(summary.stop_reason, StopReason::TickLimit);
        assert_eq!(summary.ticks, 3);
    }

    #[test]
    fn test_recorded_run_replays_to_same_board() {
        let mut game = create_game();
        let mut recorder = ReplayRecorder::new(VERSION.to_string(), 10, 10, game.seed());
        let script = parse_script("u.l.d.rr..d.l.u..").unwrap();
        let summary = run_script(&mut game, &script, 100, Some(&mut recorder));

        let mut player = ReplayPlayer::new(recorder.finalize(game.ticks()));
        let mut replayed = player.build_game().unwrap();
        let replay_summary = run_replay(&mut replayed, &mut player, 100);

        assert_eq!(replay_summary.ticks, summary.ticks);
        assert_eq!(replay_summary.score, summary.score);
        assert_eq!(replayed.to_string(), game.to_string());
    }

    #[test]
    fn test_replay_on_finished_game_returns() {
        let mut game = create_game();
        let script = parse_script("u.........").unwrap();
        run_script(&mut game, &script, 100, None);
        assert!(game.is_game_over());
        let ticks = game.ticks();

        let mut recorder = ReplayRecorder::new(VERSION.to_string(), 10, 10, game.seed());
        let mut player = ReplayPlayer::new(recorder.finalize(50));
        let summary = run_replay(&mut game, &mut player, 100);

        assert_eq!(summary.stop_reason, StopReason::AlreadyOver);
        assert_eq!(summary.ticks, ticks);
    }

    #[test]
    fn test_script_on_finished_game_returns() {
        let mut game = create_game();
        let script = parse_script("u.........").unwrap();
        run_script(&mut game, &script, 100, None);
        let ticks = game.ticks();

        let summary = run_script(&mut game, &script, 100, None);
        assert_eq!(summary.stop_reason, StopReason::AlreadyOver);
        assert_eq!(summary.ticks, ticks);
    }
}
