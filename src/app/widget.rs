//! Per-item widget state.
//!
//! Checking an item off is not immediate: the widget first enters
//! [`CountdownState::Pending`] and a progress bar fills over the cancel
//! window. Triggering again inside the window cancels it. Only when the bar
//! fills does the deactivation reach the store.

use crate::countdown::{CountdownSettings, Ticket};
use crate::store::{Action, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Active,
    Pending { ticks: u32 },
    Deactivated,
}

/// What the caller has to do after [`ItemWidget::trigger`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Countdown armed; start a timer for this ticket.
    Armed { ticket: Ticket },
    /// Pending countdown abandoned; stop the timer and dispatch.
    Cancelled { dispatch: Action },
    /// Deactivated item switched back on; dispatch.
    Reactivated { dispatch: Action },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Tick from an old or cancelled run.
    Ignored,
    Advanced,
    /// Window elapsed; the timer is done and the action must be dispatched.
    Completed { dispatch: Action },
}

#[derive(Debug, Clone)]
pub struct ItemWidget {
    item_id: ItemId,
    state: CountdownState,
    progress: f64,
    ticket: Option<Ticket>,
    runs: Ticket,
}

impl ItemWidget {
    pub fn new(item_id: ItemId, active: bool) -> Self {
        Self {
            item_id,
            state: if active {
                CountdownState::Active
            } else {
                CountdownState::Deactivated
            },
            progress: 0.0,
            ticket: None,
            runs: 0,
        }
    }

    /// Progress bar fill, 0 to 100.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, CountdownState::Pending { .. })
    }

    /// Shown with inactive styling: pending or committed.
    pub fn shows_inactive(&self) -> bool {
        self.state != CountdownState::Active
    }

    pub fn trigger(&mut self) -> Transition {
        match self.state {
            CountdownState::Active => {
                self.runs += 1;
                self.ticket = Some(self.runs);
                self.state = CountdownState::Pending { ticks: 0 };
                self.progress = 0.0;
                Transition::Armed { ticket: self.runs }
            }
            CountdownState::Pending { .. } => {
                self.reset();
                self.state = CountdownState::Active;
                Transition::Cancelled {
                    dispatch: Action::ActivateItem(self.item_id),
                }
            }
            CountdownState::Deactivated => {
                self.state = CountdownState::Active;
                Transition::Reactivated {
                    dispatch: Action::ActivateItem(self.item_id),
                }
            }
        }
    }

    pub fn tick(&mut self, ticket: Ticket, settings: &CountdownSettings) -> TickOutcome {
        if self.ticket != Some(ticket) {
            return TickOutcome::Ignored;
        }
        let CountdownState::Pending { ticks } = self.state else {
            return TickOutcome::Ignored;
        };

        let ticks = ticks + 1;
        if ticks < settings.iterations {
            self.state = CountdownState::Pending { ticks };
            self.progress = ticks as f64 * settings.step();
            TickOutcome::Advanced
        } else {
            self.reset();
            self.state = CountdownState::Deactivated;
            TickOutcome::Completed {
                dispatch: Action::DeactivateItem(self.item_id),
            }
        }
    }

    /// Tear down for removal. Returns `true` if a timer was still running.
    pub fn unmount(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.reset();
        was_pending
    }

    fn reset(&mut self) {
        self.progress = 0.0;
        self.ticket = None;
    }
}
