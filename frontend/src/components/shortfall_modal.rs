use yew::prelude::*;

use crate::config::format_amount;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ShortfallModalProps {
    pub required: f64,
    pub balance: f64,
    /// Credits exactly the missing amount.
    pub on_top_up: Callback<f64>,
    pub on_close: Callback<()>,
}

#[function_component(ShortfallModal)]
pub fn shortfall_modal(props: &ShortfallModalProps) -> Html {
    let missing = (props.required - props.balance).max(0.0);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let top_up = {
        let on_top_up = props.on_top_up.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_top_up.emit(missing);
            on_close.emit(());
        })
    };

    html! {
        <div class={styles::MODAL_BACKDROP_TOP} onclick={close.clone()}>
            <div class={styles::MODAL_WRAPPER}>
                <div class={styles::MODAL_PANEL_SM} onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="flex flex-col items-center text-center p-2">
                        <div class="mb-6 flex items-center justify-center h-16 w-16 rounded-full bg-yellow-500/20">
                            <span class="text-3xl text-yellow-400">{"●"}</span>
                        </div>
                        <h2 class="text-2xl font-bold mb-2">{"Not enough funds"}</h2>
                        <p class={classes!(styles::TEXT_BODY, "mb-6")}>
                            {format!(
                                "You are {} short of opening this case. Current balance: {}",
                                format_amount(missing),
                                format_amount(props.balance)
                            )}
                        </p>
                        <div class="flex flex-col w-full gap-3">
                            <button type="button" class={classes!(styles::BUTTON_PRIMARY, "w-full")} onclick={top_up}>
                                {format!("Top up {}", format_amount(missing))}
                            </button>
                            <button type="button" class={classes!(styles::BUTTON_OUTLINE, "w-full")} onclick={close}>
                                {"Cancel"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
