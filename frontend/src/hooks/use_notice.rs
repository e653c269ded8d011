use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTICE_TIMEOUT_MS;

#[derive(Clone, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), description: description.into() }
    }
}

#[derive(Clone)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub show: Callback<Notice>,
    pub dismiss: Callback<()>,
}

/// Toast-style notice that hides itself after a few seconds. A newer notice
/// restarts the countdown; the older timer then finds a different serial
/// and leaves it alone.
#[hook]
pub fn use_notice() -> NoticeState {
    let current = use_state(|| None::<Notice>);
    let serial = use_mut_ref(|| 0u64);

    let show = {
        let current = current.clone();
        let serial = serial.clone();
        Callback::from(move |notice: Notice| {
            let mine = {
                let mut serial = serial.borrow_mut();
                *serial += 1;
                *serial
            };
            current.set(Some(notice));

            let current = current.clone();
            let serial = serial.clone();
            Timeout::new(NOTICE_TIMEOUT_MS, move || {
                if *serial.borrow() == mine {
                    current.set(None);
                }
            })
            .forget();
        })
    };

    let dismiss = {
        let current = current.clone();
        Callback::from(move |_| current.set(None))
    };

    NoticeState {
        current: (*current).clone(),
        show,
        dismiss,
    }
}
