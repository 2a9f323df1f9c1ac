//! Core application logic: UI state, widget state machines, event handling
//! and the side effects handed back to the main loop.

pub mod effect;
pub mod event;
pub mod handler;
pub mod state;
pub mod widget;
