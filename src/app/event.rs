use crate::countdown::Ticket;
use crate::store::ItemId;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One step of a running countdown
    CountdownTick { item_id: ItemId, ticket: Ticket },
}
