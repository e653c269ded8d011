use shared::Case;
use yew::prelude::*;

use crate::config::format_amount;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CaseCardProps {
    pub case: Case,
    pub on_open: Callback<Case>,
}

#[function_component(CaseCard)]
pub fn case_card(props: &CaseCardProps) -> Html {
    let style = props.case.rarity.style();
    let onclick = {
        let case = props.case.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_| on_open.emit(case.clone()))
    };

    html! {
        <div class="group">
            <div class={classes!(styles::CASE_CARD, style.card_class())}>
                <div class="overflow-hidden p-3">
                    <div class="relative mb-3 overflow-hidden rounded-md">
                        <div
                            class="h-44 w-full bg-cover bg-center transition-transform duration-500 group-hover:scale-110"
                            style={format!("background-image: url({})", props.case.image)}
                        ></div>
                        <div class={styles::RARITY_TAG}>{style.label()}</div>
                    </div>
                    <div class="mb-2 text-lg font-bold">{&props.case.name}</div>
                    <div class="flex items-center justify-between">
                        <div class={styles::TEXT_PRICE}>{format_amount(props.case.price as f64)}</div>
                        <button type="button" class={classes!(styles::BUTTON_PRIMARY, "text-sm")} {onclick}>
                            {"Open"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
