//! Self-clearing messages.
//!
//! Views that show transient errors set them through `flash`, which clears
//! the slot after `FLASH_CLEAR_MS`. Each message carries a generation, so a
//! timer only ever clears the message it was started for, even when the
//! same text is shown again before it fires.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;

pub const FLASH_CLEAR_MS: u32 = 3_000;

/// A message slot that remembers which `show` put the current text there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashMessage {
    text: Option<String>,
    generation: u64,
}

impl FlashMessage {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.text.is_some()
    }

    /// Replace the message. Returns the generation owning the new text.
    pub fn show(&mut self, text: String) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.text = Some(text);
        self.generation
    }

    pub fn clear(&mut self) {
        self.text = None;
    }

    /// Clear only if `generation` still owns the message.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    /// Generation of the message currently shown.
    pub fn current(&self) -> Option<u64> {
        self.text.as_ref().map(|_| self.generation)
    }
}

/// Show `message` in `slot`, then clear it after the flash delay.
pub fn flash(slot: RwSignal<FlashMessage>, message: String) {
    let Some(generation) = slot.try_update(|current| current.show(message)) else {
        return;
    };
    expire_later(slot, generation);
}

/// Clear the message owned by `generation` after the flash delay.
pub fn expire_later(slot: RwSignal<FlashMessage>, generation: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(FLASH_CLEAR_MS).await;
        // The view may be gone by now; a disposed signal is simply skipped.
        let _ = slot.try_update(|current| current.expire(generation));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (slot, generation);
}
