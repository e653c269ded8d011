use shared::{catalog, open_case, Case, OpenOutcome};
use yew::prelude::*;

use crate::components::{BalanceDisplay, CaseCard, NoticeToast, OpenCaseModal, ShortfallModal};
use crate::config::{format_amount, BRAND};
use crate::hooks::{use_balance, use_notice, use_reveal, Notice};
use crate::styles;

#[derive(Properties, PartialEq)]
struct HeaderProps {
    balance: f64,
    on_credit: Callback<f64>,
    on_notice: Callback<Notice>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class={styles::HEADER}>
            <div class={classes!(styles::CONTAINER, "flex", "items-center", "justify-between", "py-4")}>
                <div class="flex items-center gap-8">
                    <a href="/" class="flex items-center gap-2">
                        <span class={styles::BRAND}>{BRAND}</span>
                        <span class={styles::BETA_BADGE}>{"BETA"}</span>
                    </a>
                    <nav class="hidden md:flex items-center gap-6">
                        <a href="/" class={styles::NAV_ACTIVE}>{"Cases"}</a>
                        <span class={styles::NAV_LINK}>{"Upgrades"}</span>
                        <span class={styles::NAV_LINK}>{"Contracts"}</span>
                    </nav>
                </div>
                <BalanceDisplay
                    balance={props.balance}
                    on_credit={props.on_credit.clone()}
                    on_notice={props.on_notice.clone()}
                />
            </div>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class={styles::FOOTER}>
            <div class={classes!(styles::CONTAINER, "text-center")}>
                <p class={styles::TEXT_MUTED}>
                    {format!("{} is a demo. Balances and items are not real.", BRAND)}
                </p>
            </div>
        </footer>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let balance = use_balance();
    let reveal = use_reveal();
    let notice = use_notice();
    let selected_case = use_state(|| None::<Case>);
    // Price the player tried to pay when the balance fell short
    let shortfall = use_state(|| None::<f64>);

    let on_credit = {
        let balance = balance.clone();
        let show = notice.show.clone();
        Callback::from(move |amount: f64| match balance.credit(amount) {
            Ok(_) => show.emit(Notice::success(
                "Balance topped up",
                format!("Added {}", format_amount(amount)),
            )),
            Err(err) => show.emit(Notice::error("Invalid amount", err.to_string())),
        })
    };

    let on_open = {
        let balance = balance.clone();
        let reveal = reveal.clone();
        let selected_case = selected_case.clone();
        let shortfall = shortfall.clone();
        Callback::from(move |case: Case| {
            let outcome = balance.with_ledger(|ledger| {
                reveal.with_sequencer(|sequencer| {
                    open_case(ledger, sequencer, &case, &mut rand::thread_rng())
                })
            });
            match outcome {
                OpenOutcome::Opened { .. } => selected_case.set(Some(case)),
                OpenOutcome::Shortfall { missing } => {
                    log::debug!("{} short for {}", missing, case.name);
                    shortfall.set(Some(case.price as f64));
                }
            }
        })
    };

    let on_spin = {
        let reveal = reveal.clone();
        Callback::from(move |_| reveal.spin())
    };

    let on_open_again = {
        let reveal = reveal.clone();
        Callback::from(move |_| {
            reveal.with_sequencer(|sequencer| sequencer.open_again(&mut rand::thread_rng()));
        })
    };

    let on_close = {
        let reveal = reveal.clone();
        let selected_case = selected_case.clone();
        let show = notice.show.clone();
        Callback::from(move |_| {
            if let Some(end) = reveal.close() {
                log::info!("Session {:?} closed in {:?}", end.session, end.phase);
                if let Some(item) = end.awarded {
                    show.emit(Notice::success(
                        "Item received",
                        format!("{} ({})", item.name, format_amount(item.price as f64)),
                    ));
                }
            }
            selected_case.set(None);
        })
    };

    let close_shortfall = {
        let shortfall = shortfall.clone();
        Callback::from(move |_| shortfall.set(None))
    };

    let modal = match ((*selected_case).clone(), reveal.session()) {
        (Some(case), Some(session)) => html! {
            <OpenCaseModal
                {case}
                {session}
                reel_stage={reveal.reel_stage()}
                {on_spin}
                {on_open_again}
                on_close={on_close}
            />
        },
        _ => html! {},
    };

    html! {
        <div class={styles::PAGE}>
            <Header
                balance={balance.balance()}
                on_credit={on_credit.clone()}
                on_notice={notice.show.clone()}
            />

            <main class={classes!(styles::CONTAINER, "py-8")}>
                <section class="mb-12 text-center">
                    <h1 class={styles::TEXT_H1}>{"Cases"}</h1>
                    <p class={styles::TEXT_BODY}>{"Open cases and collect rare skins"}</p>
                </section>

                <div class={styles::CASE_GRID}>
                    {for catalog().iter().map(|case| html! {
                        <CaseCard key={case.id} case={case.clone()} on_open={on_open.clone()} />
                    })}
                </div>
            </main>

            <Footer />

            {modal}

            if let Some(required) = *shortfall {
                <ShortfallModal
                    {required}
                    balance={balance.balance()}
                    on_top_up={on_credit}
                    on_close={close_shortfall}
                />
            }

            <NoticeToast notice={notice.current.clone()} on_dismiss={notice.dismiss.clone()} />
        </div>
    }
}
