use crate::countdown::Ticket;
use crate::store::ItemId;

/// Side effects requested by the handler and carried out by the main loop,
/// which owns the timer tasks and the list file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartCountdown { item_id: ItemId, ticket: Ticket },
    CancelCountdown { item_id: ItemId },
    SaveList,
    Quit,
}
