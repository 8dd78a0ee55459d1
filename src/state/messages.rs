//! Transient message banners and the page chrome they render into.
//!
//! DESIGN
//! ======
//! `MessageQueue` is plain data keyed by a millisecond clock so expiry can be
//! tested without timers. In the browser the queue lives in a Leptos signal
//! and a `gloo-timers` timeout prunes it once each banner's time is up.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Banner colors understood by the console stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerColor {
    Green,
    #[default]
    Red,
    Yellow,
    Blue,
}

impl BannerColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub color: BannerColor,
    pub text: String,
    pub expires_at_ms: f64,
}

impl Banner {
    /// CSS class list for the banner element.
    #[must_use]
    pub fn class(&self) -> String {
        format!("ui {} visible message", self.color.as_str())
    }
}

/// Banners currently on screen, newest first.
#[derive(Clone, Debug)]
pub struct MessageQueue {
    pub banners: Vec<Banner>,
    pub timeout_ms: u32,
    next_id: u64,
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MESSAGE_TIMEOUT_MS)
    }
}

impl MessageQueue {
    #[must_use]
    pub fn new(timeout_ms: u32) -> Self {
        Self { banners: Vec::new(), timeout_ms, next_id: 1 }
    }

    /// Insert a banner at the top and return its id.
    pub fn show(&mut self, color: BannerColor, text: impl Into<String>, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.banners.insert(
            0,
            Banner { id, color, text: text.into(), expires_at_ms: now_ms + f64::from(self.timeout_ms) },
        );
        id
    }

    /// Remove one banner. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        self.banners.len() != before
    }

    /// Drop every banner whose timeout has elapsed; returns how many.
    pub fn prune(&mut self, now_ms: f64) -> usize {
        let before = self.banners.len();
        self.banners.retain(|b| b.expires_at_ms > now_ms);
        before - self.banners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

/// Page chrome the console writes to: message banners and the document
/// title.
pub trait Chrome: Send + Sync {
    fn show_message(&self, color: BannerColor, text: &str);
    fn set_title(&self, title: &str);
}
