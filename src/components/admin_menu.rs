//! Admin Menu Components
//!
//! Add-item form and the menu table with inline edit and delete.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::handlers;
use crate::models::MenuItem;
use crate::store::{store_remove_menu_item, use_admin_store, AdminStateStoreFields};
use crate::tasks::TaskAction;
use crate::view::MenuRow;

use super::admin_page::refresh_menu;
use super::ConfirmButton;

/// Input values of the add / edit form
#[derive(Clone, Copy)]
struct MenuFormFields {
    name: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    errors: RwSignal<BTreeMap<String, String>>,
}

impl MenuFormFields {
    fn new(item: Option<&MenuItem>) -> Self {
        Self {
            name: RwSignal::new(item.map(|i| i.name.clone()).unwrap_or_default()),
            description: RwSignal::new(
                item.and_then(|i| i.description.clone()).unwrap_or_default(),
            ),
            price: RwSignal::new(item.map(|i| format!("{:.2}", i.price)).unwrap_or_default()),
            errors: RwSignal::new(BTreeMap::new()),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.errors.set(BTreeMap::new());
    }

    fn values(&self) -> (String, String, String) {
        (
            self.name.get_untracked(),
            self.description.get_untracked(),
            self.price.get_untracked(),
        )
    }
}

#[component]
fn MenuFormInputs(fields: MenuFormFields) -> impl IntoView {
    let error = move |field: &'static str| {
        move || {
            fields.errors.with(|errors| {
                errors.get(field).map(|msg| {
                    view! { <div class="invalid-feedback d-block">{msg.clone()}</div> }
                })
            })
        }
    };

    view! {
        <div class="mb-2">
            <input
                type="text"
                class="form-control"
                placeholder="Item name"
                prop:value=move || fields.name.get()
                on:input=move |ev| fields.name.set(event_target_value(&ev))
            />
            {error("name")}
        </div>
        <div class="mb-2">
            <input
                type="text"
                class="form-control"
                placeholder="Description"
                prop:value=move || fields.description.get()
                on:input=move |ev| fields.description.set(event_target_value(&ev))
            />
            {error("description")}
        </div>
        <div class="mb-2">
            <input
                type="number"
                class="form-control"
                placeholder="Price"
                step="0.01"
                min="0"
                prop:value=move || fields.price.get()
                on:input=move |ev| fields.price.set(event_target_value(&ev))
            />
            {error("price")}
        </div>
    }
}

#[component]
pub fn AddMenuItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let fields = MenuFormFields::new(None);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = ctx.api();
        let session = ctx.session.get_untracked();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::CreateMenuItem, "form");
        let (name, description, price) = fields.values();
        spawn_local(async move {
            let result =
                handlers::admin::create_menu_item(&api, &session, &name, &description, &price)
                    .await;
            busy.set(false);
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(feedback) => {
                    fields.clear();
                    ctx.notifier.show(feedback);
                    refresh_menu(ctx, store);
                }
                Err(e) => {
                    fields.errors.set(e.inline_errors());
                    ctx.notifier.error(&e);
                }
            }
        });
    };

    view! {
        <div class="card shadow-sm">
            <div class="card-header"><i class="bi bi-plus-circle"></i>" Add Menu Item"</div>
            <div class="card-body">
                <form on:submit=on_submit>
                    <MenuFormInputs fields=fields />
                    <button type="submit" class="btn btn-primary w-100" disabled=move || busy.get()>
                        {move || if busy.get() { "Adding..." } else { "Add Item" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn AdminMenuTable() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="card shadow-sm">
            <div class="card-header"><i class="bi bi-list-ul"></i>" Menu Items"</div>
            <div class="card-body p-0">
                <table class="table table-hover align-middle mb-0">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Price"</th>
                            <th class="text-end">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || {
                            store.loaded().get() && store.menu_items().with(|m| m.is_empty())
                        }>
                            <tr>
                                <td colspan="4" class="text-center text-muted">
                                    "No menu items yet."
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || store.menu_items().get()
                            key=|item| {
                                (
                                    item.id.clone(),
                                    item.name.clone(),
                                    item.description.clone(),
                                    item.price.to_bits(),
                                )
                            }
                            children=move |item| view! { <MenuItemRow item=item /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn MenuItemRow(item: MenuItem) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let row = MenuRow::from_item(&item);
    let fields = MenuFormFields::new(Some(&item));
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let id = item.id;

    let on_save = {
        let id = id.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let api = ctx.api();
            let session = ctx.session.get_untracked();
            let tasks = ctx.tasks();
            let ticket = tasks.begin(TaskAction::UpdateMenuItem, id.clone());
            let id = id.clone();
            let (name, description, price) = fields.values();
            spawn_local(async move {
                let result = handlers::admin::update_menu_item(
                    &api,
                    &session,
                    &id,
                    &name,
                    &description,
                    &price,
                )
                .await;
                busy.set(false);
                if !tasks.finish(&ticket) {
                    return;
                }
                match result {
                    Ok(feedback) => {
                        editing.set(false);
                        ctx.notifier.show(feedback);
                        refresh_menu(ctx, store);
                    }
                    Err(e) => {
                        fields.errors.set(e.inline_errors());
                        ctx.notifier.error(&e);
                    }
                }
            });
        }
    };

    let on_delete = Callback::new(move |_: ()| {
        busy.set(true);
        let api = ctx.api();
        let session = ctx.session.get_untracked();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(TaskAction::DeleteMenuItem, id.clone());
        let id = id.clone();
        spawn_local(async move {
            let result = handlers::admin::delete_menu_item(&api, &session, &id).await;
            busy.set(false);
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(feedback) => {
                    store_remove_menu_item(&store, &id);
                    ctx.notifier.show(feedback);
                    refresh_menu(ctx, store);
                }
                Err(e) => ctx.notifier.error(&e),
            }
        });
    });

    view! {
        <Show
            when=move || editing.get()
            fallback=move || {
                let row = row.clone();
                view! {
                    <tr>
                        <td><strong>{row.name}</strong></td>
                        <td class="text-muted">{row.description}</td>
                        <td>{row.price}</td>
                        <td class="text-end text-nowrap">
                            <button
                                type="button"
                                class="btn btn-sm btn-outline-primary me-1"
                                disabled=move || busy.get()
                                on:click=move |_| editing.set(true)
                            >
                                <i class="bi bi-pencil"></i>" Edit"
                            </button>
                            <ConfirmButton
                                label="Delete"
                                button_class="btn btn-sm btn-outline-danger"
                                prompt="Delete this menu item?"
                                disabled=busy
                                on_confirm=on_delete
                            />
                        </td>
                    </tr>
                }
            }
        >
            <tr>
                <td colspan="4">
                    <form on:submit=on_save.clone()>
                        <MenuFormInputs fields=fields />
                        <button
                            type="submit"
                            class="btn btn-sm btn-success me-1"
                            disabled=move || busy.get()
                        >
                            "Save"
                        </button>
                        <button
                            type="button"
                            class="btn btn-sm btn-secondary"
                            on:click=move |_| {
                                fields.errors.set(BTreeMap::new());
                                editing.set(false);
                            }
                        >
                            "Cancel"
                        </button>
                    </form>
                </td>
            </tr>
        </Show>
    }
}
