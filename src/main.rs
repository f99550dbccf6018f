use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent};
use yew::prelude::*;

mod api;
mod format;
mod model;

use format::{amount_class, balance_class, bar_height_pct, date_only, money, signed_money};
use model::{Draft, DraftField, MonthlyReport, Transaction, TransactionKind};

fn refresh_transactions(transactions: UseStateHandle<Vec<Transaction>>) {
    spawn_local(async move {
        match api::fetch_transactions().await {
            Ok(list) => transactions.set(list),
            Err(err) => error!("Error fetching transactions:", err.to_string()),
        }
    });
}

fn refresh_report(report: UseStateHandle<Option<MonthlyReport>>) {
    let (year, month) = model::current_year_month();
    spawn_local(async move {
        match api::fetch_monthly_report(year, month).await {
            Ok(fresh) => report.set(Some(fresh)),
            Err(err) => error!("Error fetching report:", err.to_string()),
        }
    });
}

#[function_component(App)]
fn app() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let report = use_state(|| None::<MonthlyReport>);
    let draft = use_state(Draft::new);
    let busy = use_state(|| false);

    {
        let transactions = transactions.clone();
        let report = report.clone();
        use_effect_with_deps(
            move |_| {
                // Independent fetches, no join between them.
                refresh_transactions(transactions);
                refresh_report(report);
                || ()
            },
            (),
        );
    }

    let on_field = {
        let draft = draft.clone();
        move |field: DraftField| {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*draft).clone();
                next.set_field(field, input.value());
                draft.set(next);
            })
        }
    };

    let on_kind = {
        let draft = draft.clone();
        move |kind: TransactionKind| {
            let draft = draft.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*draft).clone();
                next.set_kind(kind);
                draft.set(next);
            })
        }
    };

    let on_submit = {
        let draft = draft.clone();
        let busy = busy.clone();
        let transactions = transactions.clone();
        let report = report.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);

            let draft = draft.clone();
            let busy = busy.clone();
            let transactions = transactions.clone();
            let report = report.clone();
            let payload = (*draft).clone();
            spawn_local(async move {
                match api::create_transaction(&payload).await {
                    Ok(()) => {
                        draft.set(Draft::new());
                        refresh_transactions(transactions);
                        refresh_report(report);
                    }
                    Err(err) => error!("Error adding transaction:", err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let on_download = Callback::from(move |_: MouseEvent| {
        let (year, month) = model::current_year_month();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&api::download_url(year, month));
        }
    });

    html! {
        <div class="min-h-screen bg-gray-100 p-8">
            <div class="max-w-6xl mx-auto space-y-8">
                <div class="flex justify-between items-center">
                    <h1 class="text-3xl font-bold text-gray-800">{"Finance Manager"}</h1>
                    <button onclick={on_download} class="flex items-center gap-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition">
                        { icon_download() }
                        {"Download Report"}
                    </button>
                </div>

                {
                    if let Some(report) = &*report {
                        html! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                <StatCard title="Total Income" value={report.total_income} icon={StatIcon::TrendingUp} icon_class="bg-green-100 text-green-600" value_class="text-gray-800" />
                                <StatCard title="Total Expenses" value={report.total_expense} icon={StatIcon::TrendingDown} icon_class="bg-red-100 text-red-600" value_class="text-gray-800" />
                                <StatCard title="Balance" value={report.balance} icon={StatIcon::Dollar} icon_class="bg-blue-100 text-blue-600" value_class={balance_class(report.balance)} />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-1">
                        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                            <h2 class="text-xl font-semibold mb-4 text-gray-800">{"Add Transaction"}</h2>
                            <form onsubmit={on_submit} class="space-y-4">
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Type"}</label>
                                    <div class="grid grid-cols-2 gap-4">
                                        <button
                                            type="button"
                                            onclick={on_kind(TransactionKind::Income)}
                                            class={if draft.kind == TransactionKind::Income {
                                                "py-2 rounded-lg border bg-green-50 border-green-200 text-green-700"
                                            } else {
                                                "py-2 rounded-lg border border-gray-200 text-gray-600"
                                            }}
                                        >
                                            {"Income"}
                                        </button>
                                        <button
                                            type="button"
                                            onclick={on_kind(TransactionKind::Expense)}
                                            class={if draft.kind == TransactionKind::Expense {
                                                "py-2 rounded-lg border bg-red-50 border-red-200 text-red-700"
                                            } else {
                                                "py-2 rounded-lg border border-gray-200 text-gray-600"
                                            }}
                                        >
                                            {"Expense"}
                                        </button>
                                    </div>
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Amount"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        required={true}
                                        placeholder="0.00"
                                        value={draft.amount.clone()}
                                        oninput={on_field(DraftField::Amount)}
                                        class="w-full px-4 py-2 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Category"}</label>
                                    <input
                                        type="text"
                                        required={true}
                                        placeholder="e.g., Food, Salary"
                                        value={draft.category.clone()}
                                        oninput={on_field(DraftField::Category)}
                                        class="w-full px-4 py-2 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                                    <input
                                        type="text"
                                        placeholder="Optional details"
                                        value={draft.description.clone()}
                                        oninput={on_field(DraftField::Description)}
                                        class="w-full px-4 py-2 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Date"}</label>
                                    <input
                                        type="date"
                                        required={true}
                                        value={draft.date.clone()}
                                        oninput={on_field(DraftField::Date)}
                                        class="w-full px-4 py-2 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    />
                                </div>

                                <button
                                    type="submit"
                                    disabled={*busy}
                                    class="w-full bg-gray-900 text-white py-2 rounded-lg hover:bg-gray-800 transition flex items-center justify-center gap-2"
                                >
                                    { icon_plus_circle() }
                                    { if *busy { "Saving..." } else { "Add Transaction" } }
                                </button>
                            </form>
                        </div>
                    </div>

                    <div class="lg:col-span-2 space-y-6">
                        {
                            if let Some(report) = &*report {
                                html! {
                                    <OverviewChart income={report.total_income} expense={report.total_expense} />
                                }
                            } else {
                                html! {}
                            }
                        }

                        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
                            <h2 class="text-xl font-semibold mb-4 text-gray-800">{"Recent Transactions"}</h2>
                            <div class="overflow-x-auto">
                                <table class="w-full">
                                    <thead>
                                        <tr class="text-left text-sm text-gray-500 border-b border-gray-100">
                                            <th class="pb-3 font-medium">{"Date"}</th>
                                            <th class="pb-3 font-medium">{"Category"}</th>
                                            <th class="pb-3 font-medium">{"Description"}</th>
                                            <th class="pb-3 font-medium text-right">{"Amount"}</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-gray-50">
                                        { if transactions.is_empty() {
                                            html! {
                                                <tr>
                                                    <td colspan="4" class="py-8 text-center text-gray-500">
                                                        {"No transactions yet. Add one to get started!"}
                                                    </td>
                                                </tr>
                                            }
                                        } else {
                                            html! {
                                                <>
                                                    { for transactions.iter().map(|tx| html! {
                                                        <tr key={tx.id} class="text-sm">
                                                            <td class="py-3 text-gray-600">{ date_only(&tx.date) }</td>
                                                            <td class="py-3">
                                                                <span class="px-2 py-1 bg-gray-100 rounded-full text-xs font-medium text-gray-600">{ &tx.category }</span>
                                                            </td>
                                                            <td class="py-3 text-gray-600">{ tx.description.clone().unwrap_or_default() }</td>
                                                            <td class={classes!("py-3", "text-right", "font-medium", amount_class(tx.kind))}>
                                                                { signed_money(tx.kind, tx.amount) }
                                                            </td>
                                                        </tr>
                                                    }) }
                                                </>
                                            }
                                        }}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StatIcon {
    TrendingUp,
    TrendingDown,
    Dollar,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: f64,
    icon: StatIcon,
    icon_class: &'static str,
    value_class: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
            <div class="flex items-center gap-4">
                <div class={classes!("p-3", "rounded-full", props.icon_class)}>
                    {
                        match props.icon {
                            StatIcon::TrendingUp => icon_trending_up(),
                            StatIcon::TrendingDown => icon_trending_down(),
                            StatIcon::Dollar => icon_dollar(),
                        }
                    }
                </div>
                <div>
                    <p class="text-sm text-gray-500">{ props.title }</p>
                    <p class={classes!("text-2xl", "font-bold", props.value_class)}>{ money(props.value) }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct OverviewChartProps {
    income: f64,
    expense: f64,
}

#[function_component(OverviewChart)]
fn overview_chart(props: &OverviewChartProps) -> Html {
    let max = props.income.max(props.expense);
    let bars = [
        ("Income", props.income, "bg-green-500"),
        ("Expenses", props.expense, "bg-red-500"),
    ];

    html! {
        <div class="bg-white p-6 rounded-xl shadow-sm border border-gray-100">
            <h3 class="text-lg font-semibold mb-4 text-gray-800">{"Monthly Overview"}</h3>
            <div class="flex items-end justify-around gap-8 h-48">
                { for bars.iter().map(|(name, value, color)| html! {
                    <div class="flex flex-col items-center justify-end gap-2 h-full w-24">
                        <span class="text-sm font-medium text-gray-600">{ money(*value) }</span>
                        <div
                            class={classes!("w-full", "rounded-t-lg", *color)}
                            style={format!("height: {}%", bar_height_pct(*value, max))}
                        ></div>
                        <span class="text-sm text-gray-500">{ *name }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
fn icon_plus_circle() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0M12 8v8M8 12h8")
}
fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}

fn main() {
    yew::Renderer::<App>::new().render();
}
