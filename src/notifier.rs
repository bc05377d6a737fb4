//! 通知の表示
//!
//! 何を出すかは splitzie_common::notice が決め、ここでは出し方だけを扱う。

use indicatif::{ProgressBar, ProgressStyle};
use splitzie_common::{Notice, NoticeKind};
use std::collections::HashMap;
use std::time::Duration;

/// 表示中の通知のID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

pub trait Notifier {
    /// 一時的な通知（成功・エラー）
    fn show(&mut self, notice: &Notice);

    /// 閉じるまで残る通知
    fn loading(&mut self, notice: &Notice) -> NoticeId;

    fn dismiss(&mut self, id: NoticeId);
}

/// ターミナル表示
///
/// 送信中はスピナー、成功は stdout、エラーは stderr。
#[derive(Default)]
pub struct TerminalNotifier {
    next_id: u64,
    spinners: HashMap<NoticeId, ProgressBar>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TerminalNotifier {
    fn show(&mut self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => println!("✔ {}", notice.message),
            NoticeKind::Error => eprintln!("✖ {}", notice.message),
            NoticeKind::Loading => println!("… {}", notice.message),
        }
    }

    fn loading(&mut self, notice: &Notice) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
            spinner.set_style(style);
        }
        spinner.set_message(notice.message);
        spinner.enable_steady_tick(Duration::from_millis(120));

        self.spinners.insert(id, spinner);
        id
    }

    fn dismiss(&mut self, id: NoticeId) {
        if let Some(spinner) = self.spinners.remove(&id) {
            spinner.finish_and_clear();
        }
    }
}

/// 通知の記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeEvent {
    Shown(Notice),
    Loading(NoticeId, Notice),
    Dismissed(NoticeId),
}

/// 表示せずに記録だけする通知先
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    next_id: u64,
    pub events: Vec<NoticeEvent>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// まだ閉じられていない loading 通知
    pub fn active_loading(&self) -> Vec<NoticeId> {
        let mut active = Vec::new();
        for event in &self.events {
            match event {
                NoticeEvent::Loading(id, _) => active.push(*id),
                NoticeEvent::Dismissed(id) => active.retain(|a| a != id),
                NoticeEvent::Shown(_) => {}
            }
        }
        active
    }

    /// show された通知のメッセージ
    pub fn shown_messages(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                NoticeEvent::Shown(notice) => Some(notice.message),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, notice: &Notice) {
        self.events.push(NoticeEvent::Shown(*notice));
    }

    fn loading(&mut self, notice: &Notice) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.events.push(NoticeEvent::Loading(id, *notice));
        id
    }

    fn dismiss(&mut self, id: NoticeId) {
        self.events.push(NoticeEvent::Dismissed(id));
    }
}
