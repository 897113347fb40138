//! Overlay state ownership.
//!
//! A full-screen overlay has exactly two states, closed and open. The
//! component that renders the overlay's trigger owns the flag through
//! `use_overlay` and hands descendants an `OverlayHandle`, which only
//! exposes intent actions. Children never receive a raw setter.

use yew::prelude::*;

/// Handle to one overlay flag. Cheap to clone, comparable so it can be a
/// component prop.
#[derive(Clone, PartialEq)]
pub struct OverlayHandle {
    flag: UseStateHandle<bool>,
}

impl OverlayHandle {
    pub fn is_open(&self) -> bool {
        *self.flag
    }

    pub fn open(&self) -> Callback<MouseEvent> {
        let flag = self.flag.clone();
        Callback::from(move |_| flag.set(true))
    }

    pub fn close(&self) -> Callback<MouseEvent> {
        let flag = self.flag.clone();
        Callback::from(move |_| flag.set(false))
    }

    pub fn toggle(&self) -> Callback<MouseEvent> {
        let flag = self.flag.clone();
        Callback::from(move |_| flag.set(!*flag))
    }
}

/// Creates an overlay flag owned by the calling component. Starts closed.
#[hook]
pub fn use_overlay() -> OverlayHandle {
    OverlayHandle {
        flag: use_state(|| false),
    }
}
