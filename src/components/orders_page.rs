//! Orders Page Component
//!
//! The signed-in user's orders: summary cards, table and a details modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::guard::Page;
use crate::handlers;
use crate::handlers::orders::find_order;
use crate::models::Order;
use crate::notify::Severity;
use crate::tasks::TaskAction;
use crate::view::{estimated_total, OrderRow, OrderSummary};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let unit_estimate = ctx.config().unit_price_estimate;
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);
    let failed = RwSignal::new(false);
    let selected = RwSignal::new(None::<Order>);

    Effect::new(move |_| {
        let session = ctx.session.get();
        let api = ctx.api();
        let tasks = ctx.tasks();
        let target = session.user_id.clone().unwrap_or_default();
        let ticket = tasks.begin(TaskAction::LoadOrders, target);
        spawn_local(async move {
            let result = handlers::orders::load_my_orders(&api, &session).await;
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    failed.set(false);
                    orders.set(loaded);
                }
                Err(e) => {
                    log::error!("[ORDERS] Failed to load orders: {}", e);
                    failed.set(true);
                }
            }
            loading.set(false);
        });
    });

    let show_details = Callback::new(move |id: String| {
        match orders.with_untracked(|all| find_order(all, &id).cloned()) {
            Some(order) => selected.set(Some(order)),
            None => ctx.notifier.notify("Order not found", Severity::Danger),
        }
    });
    let summary = Signal::derive(move || orders.with(|o| OrderSummary::from_orders(o)));

    view! {
        <div class="container">
            <h2 class="mb-4">"My Orders"</h2>
            <Show when=move || !loading.get() && !failed.get() && orders.with(|o| !o.is_empty())>
                <SummaryCards summary=summary />
            </Show>
            <div class="card shadow-sm">
                <div class="card-body">
                    <table class="table table-hover align-middle mb-0">
                        <thead>
                            <tr>
                                <th>"Order ID"</th>
                                <th>"Item"</th>
                                <th class="text-center">"Quantity"</th>
                                <th>"Estimated Total"</th>
                                <th class="text-center">"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                if loading.get() {
                                    loading_row().into_any()
                                } else if failed.get() {
                                    message_row(
                                        "alert alert-danger mb-0",
                                        "bi bi-exclamation-triangle",
                                        " Failed to load orders. Please try again later.",
                                    )
                                    .into_any()
                                } else if orders.with(|o| o.is_empty()) {
                                    empty_row().into_any()
                                } else {
                                    orders
                                        .with(|all| {
                                            all.iter()
                                                .map(|o| OrderRow::from_order(o, unit_estimate))
                                                .collect::<Vec<_>>()
                                        })
                                        .into_iter()
                                        .map(|row| view! {
                                            <OrderTableRow row=row on_details=show_details />
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
            <OrderDetailsModal selected=selected unit_estimate=unit_estimate />
        </div>
    }
}

fn loading_row() -> impl IntoView {
    view! {
        <tr>
            <td colspan="6" class="text-center">
                <div class="spinner-border text-primary" role="status"></div>
                <p class="mt-2">"Loading your orders..."</p>
            </td>
        </tr>
    }
}

fn message_row(class: &'static str, icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan="6">
                <div class=class>
                    <i class=icon></i>
                    {text}
                </div>
            </td>
        </tr>
    }
}

fn empty_row() -> impl IntoView {
    view! {
        <tr>
            <td colspan="6">
                <div class="alert alert-info mb-0">
                    <i class="bi bi-info-circle"></i>
                    " You haven't placed any orders yet. "
                    <a class="alert-link" href=Page::Menu.path()>"Browse Menu"</a>
                </div>
            </td>
        </tr>
    }
}

#[component]
fn OrderTableRow(row: OrderRow, on_details: Callback<String>) -> impl IntoView {
    let id = row.id.clone();
    view! {
        <tr>
            <td>{row.id}</td>
            <td><strong>{row.item_name}</strong></td>
            <td class="text-center">{row.quantity}</td>
            <td>{row.estimated_total}</td>
            <td class="text-center">
                <i class=row.status.icon()></i>" "
                <span class=row.status.tone().badge_class()>{row.status.label()}</span>
            </td>
            <td>
                <button
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| on_details.run(id.clone())
                >
                    <i class="bi bi-eye"></i>" Details"
                </button>
            </td>
        </tr>
    }
}

fn summary_card(
    title: &'static str,
    icon: &'static str,
    tone: &'static str,
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="col-md-4">
            <div class=format!("card text-center border-{}", tone)>
                <div class="card-body">
                    <h5 class=format!("card-title text-{}", tone)>
                        <i class=icon></i>" "{title}
                    </h5>
                    <h2 class="display-4">{move || count.get()}</h2>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SummaryCards(summary: Signal<OrderSummary>) -> impl IntoView {
    let total = Signal::derive(move || summary.get().total);
    let pending = Signal::derive(move || summary.get().pending);
    let completed = Signal::derive(move || summary.get().completed);

    view! {
        <div class="row mb-4">
            {summary_card("Total Orders", "bi bi-bag-check", "primary", total)}
            {summary_card("Pending", "bi bi-clock-history", "warning", pending)}
            {summary_card("Completed", "bi bi-check-circle", "success", completed)}
        </div>
    }
}

#[component]
fn OrderDetailsModal(selected: RwSignal<Option<Order>>, unit_estimate: f64) -> impl IntoView {
    let close = move |_: web_sys::MouseEvent| selected.set(None);

    view! {
        {move || {
            selected.get().map(|order| view! {
                <div class="modal d-block" tabindex="-1" style="background: rgba(0,0,0,0.5)">
                    <div class="modal-dialog">
                        <div class="modal-content">
                            <div class="modal-header bg-primary text-white">
                                <h5 class="modal-title">
                                    <i class="bi bi-receipt"></i>" Order Details"
                                </h5>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white"
                                    on:click=close
                                ></button>
                            </div>
                            <div class="modal-body">
                                <DetailRow label="Order ID:" value=order.id.clone() />
                                <DetailRow label="Item:" value=order.item_name.clone() />
                                <DetailRow label="Quantity:" value=order.quantity.to_string() />
                                <div class="row mb-3">
                                    <div class="col-6"><strong>"Status:"</strong></div>
                                    <div class="col-6">
                                        <span class=order.status.tone().badge_class()>
                                            {order.status.label()}
                                        </span>
                                    </div>
                                </div>
                                <DetailRow
                                    label="Estimated Total:"
                                    value=estimated_total(order.quantity, unit_estimate)
                                />
                                <hr />
                                <div class="alert alert-info mb-0">
                                    <i class="bi bi-info-circle"></i>" "
                                    {order.status.customer_message()}
                                </div>
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" on:click=close>
                                    "Close"
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}

#[component]
fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="row mb-3">
            <div class="col-6"><strong>{label}</strong></div>
            <div class="col-6">{value}</div>
        </div>
    }
}
