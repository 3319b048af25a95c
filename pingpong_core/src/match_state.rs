//! Match state machine
//!
//! Sole owner of the scores and the winner. Physics only reports which side
//! won a rally; the rules for turning rallies into a match result live here.

use log::info;
use serde::Serialize;

use crate::components::Side;
use crate::params::Params;

/// Match phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Playing,
    Paused,
    /// Match over; only `new_game`/`reset_score` leave this phase
    Finished(Side),
}

/// Score accounting and match lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchState {
    phase: Phase,
    player_score: u32,
    ai_score: u32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: Phase::Playing,
            player_score: 0,
            ai_score: 0,
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False once a side has won
    pub fn is_playing(&self) -> bool {
        !matches!(self.phase, Phase::Finished(_))
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// True when the ball should move this step
    pub fn is_live(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    /// Start playing again, keeping the scores and clearing any winner
    pub fn new_game(&mut self) {
        self.phase = Phase::Playing;
        info!(
            "New game at {}-{} (player-ai)",
            self.player_score, self.ai_score
        );
    }

    /// Swap Playing and Paused. Does nothing once the match is finished.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            finished @ Phase::Finished(_) => finished,
        };
        info!("Pause toggled, phase now {:?}", self.phase);
    }

    /// Zero both scores and start a new game
    pub fn reset_score(&mut self) {
        self.player_score = 0;
        self.ai_score = 0;
        self.new_game();
    }

    /// Credit a rally to `side`. Returns the winner if this point ended the match.
    pub fn record_point(&mut self, side: Side) -> Option<Side> {
        match side {
            Side::Player => self.player_score += 1,
            Side::Ai => self.ai_score += 1,
        }
        info!(
            "{:?} scores, {}-{} (player-ai)",
            side, self.player_score, self.ai_score
        );

        if !self.is_playing() {
            return None;
        }

        let winner = match_winner(self.player_score, self.ai_score)?;
        self.phase = Phase::Finished(winner);
        info!("{:?} wins the match", winner);
        Some(winner)
    }
}

/// Win-by-two: a side wins at `WIN_SCORE` or more only while leading by `WIN_MARGIN`
pub fn match_winner(player_score: u32, ai_score: u32) -> Option<Side> {
    if player_score >= Params::WIN_SCORE && player_score >= ai_score + Params::WIN_MARGIN {
        Some(Side::Player)
    } else if ai_score >= Params::WIN_SCORE && ai_score >= player_score + Params::WIN_MARGIN {
        Some(Side::Ai)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn play_points(state: &mut MatchState, side: Side, n: u32) {
        for _ in 0..n {
            state.record_point(side);
        }
    }

    #[test]
    fn test_starts_playing_at_love_all() {
        let state = MatchState::new();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.player_score(), 0);
        assert_eq!(state.ai_score(), 0);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_eleven_nil_wins() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Player, 10);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.record_point(Side::Player), Some(Side::Player));
        assert_eq!(state.phase(), Phase::Finished(Side::Player));
        assert!(!state.is_playing());
    }

    #[test]
    fn test_deuce_needs_two_point_lead() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Player, 10);
        play_points(&mut state, Side::Ai, 10);

        assert_eq!(state.record_point(Side::Ai), None, "11-10 is not a win");
        assert_eq!(state.record_point(Side::Player), None, "11-11 is not a win");
        assert_eq!(state.record_point(Side::Player), None, "12-11 is not a win");
        assert_eq!(state.record_point(Side::Player), Some(Side::Player));
        assert_eq!(state.player_score(), 13);
        assert_eq!(state.ai_score(), 11);
    }

    #[test]
    fn test_toggle_pause_twice_is_noop() {
        let mut state = MatchState::new();
        let before = state.clone();
        state.toggle_pause();
        assert!(state.is_paused());
        assert!(!state.is_live());
        state.toggle_pause();
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_pause_ignored_when_finished() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Ai, 11);
        state.toggle_pause();
        assert_eq!(state.phase(), Phase::Finished(Side::Ai));
    }

    #[test]
    fn test_new_game_keeps_scores_and_clears_winner() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Ai, 11);
        state.new_game();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.winner(), None);
        assert_eq!(state.ai_score(), 11);
    }

    #[test]
    fn test_new_game_unpauses() {
        let mut state = MatchState::new();
        state.toggle_pause();
        state.new_game();
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn test_reset_score_zeroes_and_restarts() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Player, 11);
        state.reset_score();
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn test_points_after_finish_do_not_change_winner() {
        let mut state = MatchState::new();
        play_points(&mut state, Side::Player, 11);
        play_points(&mut state, Side::Ai, 15);
        assert_eq!(state.winner(), Some(Side::Player));
    }

    proptest! {
        #[test]
        fn prop_scores_never_decrease_and_finish_iff_win_by_two(
            rallies in proptest::collection::vec(any::<bool>(), 0..60)
        ) {
            let mut state = MatchState::new();
            for player_won in rallies {
                let (p, a) = (state.player_score(), state.ai_score());
                let was_playing = state.is_playing();
                state.record_point(if player_won { Side::Player } else { Side::Ai });

                prop_assert!(state.player_score() >= p);
                prop_assert!(state.ai_score() >= a);

                if was_playing {
                    let expected = match_winner(state.player_score(), state.ai_score());
                    prop_assert_eq!(state.winner(), expected);
                } else {
                    prop_assert!(!state.is_playing(), "Finished is sticky");
                }
            }
        }

        #[test]
        fn prop_winner_only_when_not_playing(
            rallies in proptest::collection::vec(any::<bool>(), 0..60)
        ) {
            let mut state = MatchState::new();
            for player_won in rallies {
                state.record_point(if player_won { Side::Player } else { Side::Ai });
                prop_assert_eq!(state.winner().is_some(), !state.is_playing());
            }
        }
    }
}
