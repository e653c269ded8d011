use shared::ledger::parse_amount;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{format_amount, QUICK_TOP_UPS};
use crate::hooks::Notice;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BalanceDisplayProps {
    pub balance: f64,
    pub on_credit: Callback<f64>,
    pub on_notice: Callback<Notice>,
}

#[function_component(BalanceDisplay)]
pub fn balance_display(props: &BalanceDisplayProps) -> Html {
    let open = use_state(|| false);
    let amount = use_state(String::new);

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };

    let oninput = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let submit = {
        let amount = amount.clone();
        let on_credit = props.on_credit.clone();
        let on_notice = props.on_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match parse_amount(&amount) {
                Ok(value) => {
                    on_credit.emit(value);
                    amount.set(String::new());
                }
                Err(err) => {
                    log::warn!("{}", err);
                    on_notice.emit(Notice::error(
                        "Invalid amount",
                        "Please enter a positive number",
                    ));
                }
            }
        })
    };

    html! {
        <div class="relative">
            <button type="button" class={styles::BUTTON_BALANCE} onclick={toggle}>
                <span class="text-yellow-400">{"●"}</span>
                <span>{format_amount(props.balance)}</span>
            </button>

            if *open {
                <div class={styles::POPOVER} onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <h3 class="text-lg font-semibold mb-2">{"Top up balance"}</h3>
                    <p class="text-sm text-gray-300 mb-4">{"Enter the amount to add to your play balance"}</p>
                    <form class="flex gap-2" onsubmit={submit}>
                        <input
                            type="number"
                            step="any"
                            placeholder="Amount"
                            class={styles::INPUT}
                            value={(*amount).clone()}
                            {oninput}
                        />
                        <button type="submit" class={styles::BUTTON_PRIMARY}>{"Top up"}</button>
                    </form>
                    <div class="flex gap-2 mt-3">
                        {for QUICK_TOP_UPS.iter().map(|&preset| {
                            let on_credit = props.on_credit.clone();
                            html! {
                                <button
                                    type="button"
                                    class={classes!(styles::BUTTON_OUTLINE, "flex-1")}
                                    onclick={Callback::from(move |_| on_credit.emit(preset))}
                                >
                                    {format!("+{}", format_amount(preset))}
                                </button>
                            }
                        })}
                    </div>
                </div>
            }
        </div>
    }
}
