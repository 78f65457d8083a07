//! Toast tray for success and error notices.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeLevel, NoticeState};

/// How long a notice stays up before it dismisses itself.
#[cfg(feature = "csr")]
const NOTICE_TTL_MS: u64 = 4_000;

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    }
}

/// Queue a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, level: NoticeLevel, message: impl Into<String>) {
    let Some(id) = notices.try_update(|n| n.push(level, message)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TTL_MS)).await;
        let _ = notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed tray rendering queued notices; clicking one dismisses it.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice_class(notice.level) on:click=move |_| notices.update(|n| n.dismiss(id))>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
