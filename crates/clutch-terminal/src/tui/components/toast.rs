//! Transient notifications stacked above the bottom-right corner.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::styles::{Styles, ToastLevel};

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

const DEFAULT_TTL: Duration = Duration::from_secs(3);
const MAX_VISIBLE: usize = 3;
const MAX_QUEUED: usize = 8;

/// Identifier of a queued toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        Self(NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One transient message.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Identifier usable for early dismissal.
    pub id: ToastId,
    /// Text shown to the user.
    pub message: String,
    /// Severity used for styling.
    pub level: ToastLevel,
    created: Instant,
    ttl: Duration,
}

impl Toast {
    /// Creates a toast with the default three second lifetime.
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: ToastId::next(),
            message: message.into(),
            level,
            created: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// True once the lifetime has elapsed.
    pub fn expired(&self) -> bool {
        self.created.elapsed() >= self.ttl
    }
}

/// Queue of active toasts, newest at the back.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `message` and returns its id.
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        self.push_toast(Toast::new(message, level))
    }

    /// Queues a preconstructed toast.
    pub fn push_toast(&mut self, toast: Toast) -> ToastId {
        let id = toast.id;
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_QUEUED {
            self.toasts.pop_front();
        }
        id
    }

    /// Removes the toast with `id`, if it is still queued.
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops expired toasts; call once per tick.
    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Iterates over queued toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Draws up to three toasts stacked above the bottom-right corner.
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, styles: &Styles) {
        let width = area.width.saturating_sub(4).min(40);
        if width < 8 || area.height < 4 {
            return;
        }
        let height = 3u16;
        let x = area.right().saturating_sub(width + 2);

        for (slot, toast) in self.toasts.iter().rev().take(MAX_VISIBLE).enumerate() {
            let offset = (slot as u16 + 1) * height + 1;
            if offset + height > area.height {
                break;
            }
            let rect = Rect::new(x, area.bottom().saturating_sub(offset), width, height);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(styles.toast(toast.level));
            let body = Paragraph::new(toast.message.clone())
                .style(styles.toast(toast.level))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(Clear, rect);
            f.render_widget(body, rect);
        }
    }
}
