//! Admin Orders Table Component
//!
//! Every order with approve / reject / deliver actions. Actions the current
//! status does not allow stay disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::models::Order;
use crate::store::{store_set_order_status, use_admin_store, AdminStateStoreFields};
use crate::tasks::TaskAction;
use crate::view::{AdminOrderRow, StatusAction};

use super::admin_page::refresh_orders;
use super::ConfirmButton;

#[component]
pub fn AdminOrdersTable() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="card shadow-sm mb-4">
            <div class="card-header"><i class="bi bi-receipt"></i>" All Orders"</div>
            <div class="card-body p-0">
                <table class="table table-hover align-middle mb-0">
                    <thead>
                        <tr>
                            <th>"Order ID"</th>
                            <th>"User"</th>
                            <th>"Item"</th>
                            <th class="text-center">"Qty"</th>
                            <th>"Status"</th>
                            <th class="text-end">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || {
                            store.loaded().get() && store.orders().with(|o| o.is_empty())
                        }>
                            <tr>
                                <td colspan="6" class="text-center text-muted">"No orders yet."</td>
                            </tr>
                        </Show>
                        <For
                            each=move || store.orders().get()
                            key=|order| (order.id.clone(), order.status.as_str().to_string())
                            children=move |order| view! { <AdminOrderRowView order=order /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn AdminOrderRowView(order: Order) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let row = AdminOrderRow::from_order(&order);
    let busy = RwSignal::new(false);

    let run = move |action: StatusAction| {
        busy.set(true);
        let api = ctx.api();
        let session = ctx.session.get_untracked();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::ChangeOrderStatus, order.id.clone());
        let order = order.clone();
        spawn_local(async move {
            let result = handlers::admin::change_order_status(&api, &session, &order, action).await;
            busy.set(false);
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(feedback) => {
                    store_set_order_status(&store, &order.id, action.target());
                    ctx.notifier.show(feedback);
                    refresh_orders(ctx, store);
                }
                Err(e) => ctx.notifier.error(&e),
            }
        });
    };

    let buttons = row
        .actions
        .iter()
        .map(|state| {
            let action = state.action;
            let enabled = state.enabled;
            let run = run.clone();
            view! {
                <ConfirmButton
                    label=action.label()
                    button_class=format!("{} ms-1", action.button_class())
                    prompt=action.confirm_prompt()
                    disabled=Signal::derive(move || !enabled || busy.get())
                    on_confirm=Callback::new(move |_: ()| run(action))
                />
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.username}</td>
            <td>{row.item_name}</td>
            <td class="text-center">{row.quantity}</td>
            <td><span class=row.status.tone().badge_class()>{row.status.label()}</span></td>
            <td class="text-end text-nowrap">{buttons}</td>
        </tr>
    }
}
