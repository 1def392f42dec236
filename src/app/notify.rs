// src/app/notify.rs — transient top-right notifications
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui as eg;

use super::types::ToastKind;

pub const AUTO_CLOSE: Duration = Duration::from_millis(1500);
const MAX_VISIBLE: usize = 4;
const TOAST_WIDTH: f32 = 300.0;

#[derive(Clone, Debug)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub message: String,
    elapsed: Duration,
}

impl Toast {
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// 1.0 when just shown, 0.0 when due to close.
    pub fn remaining_fraction(&self) -> f32 {
        let left = AUTO_CLOSE.saturating_sub(self.elapsed);
        left.as_secs_f32() / AUTO_CLOSE.as_secs_f32()
    }

    fn expired(&self) -> bool {
        self.elapsed >= AUTO_CLOSE
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
    next_id: u64,
    last_frame: Option<Instant>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Toast {
            id,
            kind,
            message: message.into(),
            elapsed: Duration::ZERO,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.items.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Age the visible toasts by `dt` and drop the expired ones. A hovered toast holds still.
    pub fn advance(&mut self, dt: Duration, paused: Option<u64>) {
        for t in self.items.iter_mut().take(MAX_VISIBLE) {
            if Some(t.id) != paused {
                t.elapsed += dt;
            }
        }
        self.items.retain(|t| !t.expired());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn render(&mut self, ctx: &eg::Context) {
        if self.items.is_empty() {
            self.last_frame = None;
            return;
        }
        let now = Instant::now();
        let dt = self.last_frame.map_or(Duration::ZERO, |t| now - t);
        self.last_frame = Some(now);

        let mut hovered = None;
        let mut clicked = None;
        eg::Area::new(eg::Id::new("toasts"))
            .anchor(eg::Align2::RIGHT_TOP, eg::vec2(-12.0, 12.0))
            .order(eg::Order::Foreground)
            .show(ctx, |ui| {
                for t in self.items.iter().take(MAX_VISIBLE) {
                    let resp = eg::Frame::popup(ui.style())
                        .fill(toast_fill(t.kind))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH);
                            ui.label(eg::RichText::new(&t.message).color(eg::Color32::WHITE));
                            ui.add(
                                eg::ProgressBar::new(t.remaining_fraction())
                                    .desired_width(TOAST_WIDTH),
                            );
                        })
                        .response
                        .interact(eg::Sense::click());
                    if resp.hovered() {
                        hovered = Some(t.id);
                    }
                    if resp.clicked() {
                        clicked = Some(t.id);
                    }
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = clicked {
            self.dismiss(id);
        }
        self.advance(dt, hovered);
        if !self.items.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

fn toast_fill(kind: ToastKind) -> eg::Color32 {
    match kind {
        ToastKind::Success => eg::Color32::from_rgb(46, 125, 50),
        ToastKind::Warning => eg::Color32::from_rgb(176, 110, 20),
        ToastKind::Error => eg::Color32::from_rgb(178, 40, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_close_after_auto_close() {
        let mut toasts = Toasts::new();
        toasts.push(ToastKind::Error, "404 - not found");
        toasts.advance(Duration::from_millis(1000), None);
        assert_eq!(toasts.len(), 1);
        let left = toasts.iter().next().unwrap().remaining_fraction();
        assert!((left - 1.0 / 3.0).abs() < 0.01);
        toasts.advance(Duration::from_millis(500), None);
        assert!(toasts.is_empty());
    }

    #[test]
    fn hovered_toast_is_paused() {
        let mut toasts = Toasts::new();
        let held = toasts.push(ToastKind::Success, "saved");
        toasts.push(ToastKind::Warning, "other");
        toasts.advance(Duration::from_secs(2), Some(held));
        let ids: Vec<u64> = toasts.iter().map(Toast::id).collect();
        assert_eq!(ids, vec![held]);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut toasts = Toasts::new();
        let a = toasts.push(ToastKind::Error, "a");
        let b = toasts.push(ToastKind::Error, "b");
        assert!(toasts.dismiss(a));
        assert!(!toasts.dismiss(a));
        assert_eq!(toasts.iter().next().map(Toast::id), Some(b));
    }

    #[test]
    fn queued_toasts_wait_their_turn() {
        let mut toasts = Toasts::new();
        for i in 0..(MAX_VISIBLE + 1) {
            toasts.push(ToastKind::Error, format!("n{i}"));
        }
        toasts.advance(AUTO_CLOSE, None);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().message, format!("n{MAX_VISIBLE}"));
    }
}
