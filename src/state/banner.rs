//! Shared status banner for success/error feedback.
//!
//! The banner is hidden until a flow settles, then shows one message at a
//! time. A new message overwrites the old one. Auto-hide timers carry the
//! generation they were scheduled for and only hide that message.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub visible: bool,
    pub kind: BannerKind,
    pub text: String,
    generation: u64,
}

impl BannerState {
    /// Show `text` and return the generation a hide timer should target.
    pub fn show(&mut self, kind: BannerKind, text: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.kind = kind;
        self.text = text.into();
        self.generation
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(BannerKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(BannerKind::Error, text)
    }

    /// Hide only if nothing newer was shown since `generation`.
    pub fn hide_if_current(&mut self, generation: u64) -> bool {
        if self.generation != generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// CSS class list for the banner element.
    pub fn class_name(&self) -> &'static str {
        match (self.visible, self.kind) {
            (false, _) => "message hidden",
            (true, BannerKind::Success) => "message success",
            (true, BannerKind::Error) => "message error",
        }
    }
}
