use tracing::{debug, info};

use super::{GameFlowService, Inner};
use crate::domain::solution::SolverHandoff;
use crate::domain::state::Phase;
use crate::domain::{declaration, scoring, solution};

impl GameFlowService {
    /// Enter a declaration phase for the current target.
    ///
    /// The phase always runs its full time limit, even once every player has
    /// declared: declaration timing stays fair and predictable instead of
    /// reacting to the fastest declarer.
    pub(super) fn enter_declaration(&self, inner: &mut Inner) {
        inner.game.declarations.clear();
        inner.game.phase = Phase::Declaration;
        debug!("Transition: -> Declaration");
        self.start_phase_timer(inner, self.shared.rules.declaration_time_limit);
        self.publish(inner);
    }

    /// Declaration timer elapsed: freeze the order and hand over to the
    /// solution phase, or advance directly when nobody declared.
    pub(super) fn end_declaration_phase(&self, inner: &mut Inner) {
        match declaration::close_declarations(&mut inner.game) {
            Some(head) => {
                debug!(
                    current_player = head,
                    declared = inner.game.declaration_order.len(),
                    "Declaration phase closed"
                );
                self.enter_solution(inner);
            }
            None => {
                debug!("Declaration phase closed with no declarations");
                self.advance_round(inner);
            }
        }
    }

    /// Enter (or re-enter) the solution phase for the current head of the
    /// declaration order: fresh move history, fresh full timer.
    pub(super) fn enter_solution(&self, inner: &mut Inner) {
        inner.game.round.move_history.clear();
        inner.game.phase = Phase::Solution;
        debug!(current_player = ?inner.game.current_player, "Transition: -> Solution");
        self.start_phase_timer(inner, self.shared.rules.solution_time_limit);
        self.publish(inner);
    }

    /// Solution timer elapsed: the current solver failed. No penalty points
    /// are applied on failure.
    pub(super) fn fail_current_solver(&self, inner: &mut Inner) {
        info!(player = ?inner.game.current_player, "Solution attempt timed out");
        match solution::fail_current_solver(&mut inner.game) {
            SolverHandoff::Next(_) => self.enter_solution(inner),
            SolverHandoff::Exhausted => self.advance_round(inner),
        }
    }

    /// Draw the next target and re-enter declaration, or finish when the
    /// source is exhausted.
    pub(super) fn advance_round(&self, inner: &mut Inner) {
        match inner.cards.draw_next() {
            Some(token) => {
                inner.game.round.remaining_cards = inner.cards.remaining();
                inner.game.round.total_cards = inner.cards.total();
                inner.game.round.current_token = Some(token);
                inner.game.round.move_history.clear();
                inner.game.declaration_order.clear();
                info!(
                    remaining = inner.game.round.remaining_cards,
                    "Drew next target"
                );
                self.enter_declaration(inner);
            }
            None => self.finish_game(inner),
        }
    }

    /// Terminal transition: cancel the timer, compute rankings once, go
    /// read-only.
    pub(super) fn finish_game(&self, inner: &mut Inner) {
        inner.timer.cancel();
        inner.game.phase = Phase::Finished;
        inner.game.round.current_token = None;
        inner.game.round.remaining_cards = inner.cards.remaining();
        scoring::compute_rankings(&mut inner.game);
        info!("Game finished");
        self.publish(inner);
    }
}
