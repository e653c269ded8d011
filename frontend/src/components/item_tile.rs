use shared::Item;
use yew::prelude::*;

use crate::config::format_amount;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ItemTileProps {
    pub item: Item,
}

/// One tile on the reel.
#[function_component(ItemTile)]
pub fn item_tile(props: &ItemTileProps) -> Html {
    let item = &props.item;
    let style = item.rarity.style();

    html! {
        <div class={classes!(styles::ITEM_TILE, style.border_class(), style.gradient_class())}>
            <div class="h-32 mb-2 overflow-hidden rounded">
                <img src={item.image.clone()} alt={item.name.clone()} class="h-full w-full object-cover" draggable="false" />
            </div>
            <div class="text-sm font-medium line-clamp-2 mb-auto">{&item.name}</div>
            <div class="flex justify-between items-center mt-2">
                <div class="text-xs opacity-70">{style.label()}</div>
                <div class={styles::TEXT_PRICE}>{format_amount(item.price as f64)}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerCardProps {
    pub item: Item,
}

/// Large card shown in the result view.
#[function_component(WinnerCard)]
pub fn winner_card(props: &WinnerCardProps) -> Html {
    let item = &props.item;
    let style = item.rarity.style();

    html! {
        <div class={classes!("mb-6", "border-4", "rounded-lg", "p-4", "w-72", "bg-gradient-to-b", style.border_class(), style.gradient_class())}>
            <div class="relative mb-4">
                <img src={item.image.clone()} alt={item.name.clone()} class="h-48 w-full object-cover rounded" />
                if item.rarity.is_premium() {
                    <div class="absolute inset-0 bg-gradient-to-tr from-transparent via-white/20 to-white/10 animate-pulse"></div>
                }
            </div>
            <h3 class="text-xl font-bold mb-2">{&item.name}</h3>
            <div class="flex justify-between items-center">
                <div class="px-2 py-1 rounded text-xs font-medium" style={format!("background-color: {}", style.badge_color())}>
                    {style.label()}
                </div>
                <div class={styles::TEXT_PRICE}>{format_amount(item.price as f64)}</div>
            </div>
        </div>
    }
}
