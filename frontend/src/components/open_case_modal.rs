use gloo::events::EventListener;
use shared::{Case, RevealPhase, RevealSession, TransitionStage};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::item_tile::{ItemTile, WinnerCard};
use crate::config::format_amount;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OpenCaseModalProps {
    pub case: Case,
    pub session: RevealSession,
    pub reel_stage: Option<TransitionStage>,
    pub on_spin: Callback<()>,
    pub on_open_again: Callback<()>,
    pub on_close: Callback<()>,
}

fn reel_style(stage: &Option<TransitionStage>) -> String {
    match stage {
        Some(stage) => format!(
            "will-change: transform; transition: {}; transform: {};",
            stage.css_transition(),
            stage.css_transform()
        ),
        None => "will-change: transform; transition: none; transform: translateX(0px);".to_string(),
    }
}

#[function_component(OpenCaseModal)]
pub fn open_case_modal(props: &OpenCaseModalProps) -> Html {
    // Escape closes the dialog from any phase
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let spin = {
        let on_spin = props.on_spin.clone();
        Callback::from(move |_: MouseEvent| on_spin.emit(()))
    };
    let open_again = {
        let on_open_again = props.on_open_again.clone();
        Callback::from(move |_: MouseEvent| on_open_again.emit(()))
    };

    let case = &props.case;
    let session = &props.session;
    let spinning = matches!(session.phase, RevealPhase::Spinning(_));

    let body = match session.phase {
        RevealPhase::Ready => html! {
            <div class="flex flex-col items-center py-12 px-4">
                <h2 class={classes!(styles::TEXT_H2, "mb-6")}>{&case.name}</h2>
                <div class="mb-6 relative">
                    <img
                        src={case.image.clone()}
                        alt={case.name.clone()}
                        class={classes!("h-64", "w-64", "object-cover", "rounded-lg", "border-2", case.rarity.style().border_class())}
                    />
                </div>
                <p class={classes!(styles::TEXT_BODY, "mb-6", "text-center")}>
                    {format!("Try your luck with the {}.", case.name)}<br />
                    {"Rare skins and unique weapons are waiting inside!"}
                </p>
                <button type="button" class={styles::BUTTON_PRIMARY_LG} onclick={spin}>
                    {"Open for "}
                    <span class="ml-2 text-yellow-400">{format_amount(case.price as f64)}</span>
                </button>
            </div>
        },
        RevealPhase::Spinning(_) => html! {
            <div class="py-8 overflow-hidden select-none">
                <h2 class="text-2xl font-bold mb-4 text-center">{&case.name}</h2>
                <div class={styles::REEL_WINDOW}>
                    <div class={styles::REEL_MARKER}></div>
                    <div class={styles::REEL_MARKER_DOT}></div>
                    <div class={styles::REEL_FADE_LEFT}></div>
                    <div class={styles::REEL_FADE_RIGHT}></div>
                    <div class={styles::REEL_STRIP} style={reel_style(&props.reel_stage)}>
                        {for session.reel().map(|(index, item)| html! {
                            <ItemTile key={format!("{}-{}", item.id, index)} item={item.clone()} />
                        })}
                    </div>
                </div>
            </div>
        },
        RevealPhase::Result => match &session.winning_item {
            Some(item) => html! {
                <div class="flex flex-col items-center py-12 px-4">
                    <h2 class={classes!(styles::TEXT_H2, "mb-2")}>{"Congratulations!"}</h2>
                    <p class={classes!(styles::TEXT_BODY, "mb-6")}>{"You received:"}</p>
                    <WinnerCard item={item.clone()} />
                    <div class="flex gap-4">
                        <button type="button" class={styles::BUTTON_OUTLINE_ACCENT} onclick={close.clone()}>
                            {"Take"}
                        </button>
                        <button type="button" class={styles::BUTTON_PRIMARY_LG} onclick={open_again}>
                            {"Open again"}
                        </button>
                    </div>
                </div>
            },
            None => html! {},
        },
    };

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={close}>
            <div class={if spinning { styles::MODAL_WRAPPER_FLUSH } else { styles::MODAL_WRAPPER }}>
                <div
                    class={if spinning { styles::MODAL_PANEL_WIDE } else { styles::MODAL_PANEL }}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    {body}
                </div>
            </div>
        </div>
    }
}
