//! User-facing notices
//!
//! Every outcome the screens need to report (validation failures, transport
//! failures, successful mutations) goes through one board provided via
//! context, so no error is ever silently dropped.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}
impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// The currently visible notices, newest last
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoticeBoard(Vec<Notice>);
impl NoticeBoard {
    pub fn push(&mut self, notice: Notice) {
        self.0.push(notice);
    }

    pub fn dismiss(&mut self, idx: usize) {
        if idx < self.0.len() {
            self.0.remove(idx);
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.0
    }
}

#[component]
pub fn NoticeBoardView() -> impl IntoView {
    let board = expect_context::<RwSignal<NoticeBoard>>();

    view! {
        <div id="notice-board" class="fixed top-2 right-2 z-50 flex flex-col gap-y-2">
            {move || {
                board
                    .get()
                    .notices()
                    .to_vec()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, notice)| {
                        let level_class = match notice.level {
                            NoticeLevel::Success => "bg-green-100 border-green-400 text-green-800",
                            NoticeLevel::Error => "bg-red-100 border-red-400 text-red-800",
                        };
                        view! {
                            <div
                                class=format!(
                                    "cursor-pointer rounded border px-4 py-2 shadow {level_class}",
                                )
                                // click to dismiss
                                on:click=move |_| board.update(|b| b.dismiss(idx))
                            >
                                {notice.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
