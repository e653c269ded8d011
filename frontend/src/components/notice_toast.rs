use yew::prelude::*;

use crate::hooks::{Notice, NoticeKind};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let tone = match notice.kind {
        NoticeKind::Success => styles::NOTICE_SUCCESS,
        NoticeKind::Error => styles::NOTICE_ERROR,
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!(styles::NOTICE, tone, "animate-fadeIn")} role="status" onclick={dismiss}>
            <div class="font-semibold">{&notice.title}</div>
            <div class="text-sm opacity-80">{&notice.description}</div>
        </div>
    }
}
