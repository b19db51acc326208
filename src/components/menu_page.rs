//! Menu Page Component
//!
//! Card grid of menu items with a quantity stepper and "Order Now" on
//! each card. A placed order opens a confirmation modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::error::CommandError;
use crate::guard::Page;
use crate::handlers;
use crate::models::{MenuItem, Order};
use crate::tasks::TaskAction;
use crate::validation::Quantity;
use crate::view::{menu_cards, MenuCard};

use super::QuantitySelector;

#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = use_app_context();
    let items = RwSignal::new(Vec::<MenuItem>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let placed = RwSignal::new(None::<Order>);

    Effect::new(move |_| {
        let api = ctx.api();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::LoadMenu, "");
        spawn_local(async move {
            let result = handlers::menu::load_menu(&api).await;
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    load_error.set(None);
                    items.set(loaded);
                }
                Err(e) => {
                    log::error!("[MENU] Failed to load menu: {}", e);
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="container">
            <h2 class="mb-4">"Our Menu"</h2>
            {move || {
                if loading.get() {
                    view! {
                        <div class="text-center py-5">
                            <div class="spinner-border text-primary" role="status"></div>
                        </div>
                    }
                    .into_any()
                } else if let Some(message) = load_error.get() {
                    view! {
                        <div class="alert alert-danger">
                            <i class="bi bi-exclamation-triangle"></i>
                            " Failed to load menu: "
                            {message}
                        </div>
                    }
                    .into_any()
                } else if items.with(|i| i.is_empty()) {
                    view! {
                        <p class="text-muted text-center">"No menu items available right now."</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="row g-4">
                            <For
                                each=move || items.with(|i| menu_cards(i))
                                key=|card| card.id.clone()
                                children=move |card| {
                                    view! { <MenuCardView card=card placed=placed /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
            <OrderConfirmModal placed=placed />
        </div>
    }
}

#[component]
fn MenuCardView(card: MenuCard, placed: RwSignal<Option<Order>>) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let quantity = RwSignal::new(Quantity::default());
    let ordering = RwSignal::new(false);
    let item_id = card.id.clone();

    let on_order = move |_: web_sys::MouseEvent| {
        if ordering.get_untracked() {
            return;
        }
        let session = ctx.session.get_untracked();
        if !session.is_authenticated() {
            ctx.notifier.error(&CommandError::Unauthenticated);
            navigate(Page::Login.path(), Default::default());
            return;
        }
        ordering.set(true);
        let api = ctx.api();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::PlaceOrder, item_id.clone());
        let item_id = item_id.clone();
        let amount = quantity.get_untracked().get();
        spawn_local(async move {
            let result = handlers::menu::place_order(&api, &session, &item_id, amount).await;
            ordering.set(false);
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(done) => {
                    ctx.notifier.show(done.feedback);
                    quantity.set(Quantity::default());
                    placed.set(Some(done.order));
                }
                Err(e) => ctx.notifier.error(&e),
            }
        });
    };

    view! {
        <div class="col-md-4 col-sm-6">
            <div class="card h-100 shadow-sm menu-card">
                <div class="card-body d-flex flex-column">
                    {card_details(card)}
                    <div class="d-flex align-items-center gap-2">
                        <QuantitySelector quantity=quantity disabled=ordering />
                        <button
                            class="btn btn-success"
                            disabled=move || ordering.get()
                            on:click=on_order
                        >
                            {move || {
                                if ordering.get() {
                                    view! {
                                        <span class="spinner-border spinner-border-sm"></span>
                                        " Ordering..."
                                    }
                                    .into_any()
                                } else {
                                    view! { <i class="bi bi-cart-plus"></i>" Order Now" }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Name, description and price of a card. Names also go into the tooltip.
fn card_details(card: MenuCard) -> impl IntoView {
    let title = card.name.clone();
    view! {
        <h5 class="card-title text-truncate" title=title>{card.name}</h5>
        <p class="card-text text-muted flex-grow-1">{card.description}</p>
        <p class="h5 text-primary mb-3">{card.price}</p>
    }
}

#[component]
fn OrderConfirmModal(placed: RwSignal<Option<Order>>) -> impl IntoView {
    let close = move |_: web_sys::MouseEvent| placed.set(None);

    view! {
        {move || {
            placed.get().map(|order| view! {
                <div class="modal d-block" tabindex="-1" style="background: rgba(0,0,0,0.5)">
                    <div class="modal-dialog">
                        <div class="modal-content">
                            <div class="modal-header bg-success text-white">
                                <h5 class="modal-title">
                                    <i class="bi bi-check-circle"></i>" Order Confirmed!"
                                </h5>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white"
                                    on:click=close
                                ></button>
                            </div>
                            <div class="modal-body">
                                <p><strong>"Order ID: "</strong>{order.id.clone()}</p>
                                <p><strong>"Item: "</strong>{order.item_name.clone()}</p>
                                <p><strong>"Quantity: "</strong>{order.quantity}</p>
                                <p>
                                    <strong>"Status: "</strong>
                                    <span class=order.status.tone().badge_class()>
                                        {order.status.label()}
                                    </span>
                                </p>
                                <p class="text-muted">
                                    "You can check your order status in the Orders section."
                                </p>
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" on:click=close>
                                    "Continue Shopping"
                                </button>
                                <a class="btn btn-primary" href=Page::Orders.path()>
                                    "View Orders"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
