//! Login and Register Pages

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::guard::Page;
use crate::handlers::{self, auth::SignedIn};
use crate::error::CommandResult;
use crate::tasks::TaskAction;

/// Which form a page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Login /> }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthForm mode=AuthMode::Register /> }
}

#[component]
fn AuthForm(mode: AuthMode) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let busy = RwSignal::new(false);

    let (title, submit_label, action) = match mode {
        AuthMode::Login => ("Login", "Login", TaskAction::Login),
        AuthMode::Register => ("Create Account", "Register", TaskAction::Register),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        field_errors.set(BTreeMap::new());

        let api = ctx.api();
        let tasks = ctx.tasks();
        let ticket = tasks.begin(action, "form");
        let navigate = navigate.clone();
        let (name, pass) = (username.get_untracked(), password.get_untracked());
        spawn_local(async move {
            let result: CommandResult<SignedIn> = match mode {
                AuthMode::Login => handlers::auth::login(&api, &name, &pass).await,
                AuthMode::Register => handlers::auth::register(&api, &name, &pass).await,
            };
            busy.set(false);
            if !tasks.finish(&ticket) {
                return;
            }
            match result {
                Ok(signed_in) => {
                    ctx.session.sign_in(&signed_in.user);
                    ctx.notifier.show(signed_in.feedback);
                    navigate(signed_in.landing.path(), Default::default());
                }
                Err(e) => {
                    field_errors.set(e.inline_errors());
                    ctx.notifier.error(&e);
                }
            }
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|errors| {
                errors.get(field).map(|msg| {
                    view! { <div class="invalid-feedback d-block">{msg.clone()}</div> }
                })
            })
        }
    };

    view! {
        <div class="container">
            <div class="row justify-content-center">
                <div class="col-md-5">
                    <div class="card shadow-sm">
                        <div class="card-body p-4">
                            <h3 class="card-title text-center mb-4">{title}</h3>
                            <form on:submit=on_submit>
                                <div class="mb-3">
                                    <label class="form-label" for="username">"Username"</label>
                                    <input
                                        id="username"
                                        type="text"
                                        class="form-control"
                                        autocomplete="username"
                                        prop:value=move || username.get()
                                        on:input=move |ev| username.set(event_target_value(&ev))
                                    />
                                    {field_error("username")}
                                </div>
                                <div class="mb-3">
                                    <label class="form-label" for="password">"Password"</label>
                                    <input
                                        id="password"
                                        type="password"
                                        class="form-control"
                                        autocomplete=match mode {
                                            AuthMode::Login => "current-password",
                                            AuthMode::Register => "new-password",
                                        }
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                    {field_error("password")}
                                    <div class="form-text">
                                        "At least 6 characters, including one of @#$%^&+=!*()"
                                    </div>
                                </div>
                                <button
                                    type="submit"
                                    class="btn btn-primary w-100"
                                    disabled=move || busy.get()
                                >
                                    {move || {
                                        if busy.get() { "Please wait..." } else { submit_label }
                                    }}
                                </button>
                            </form>
                            <p class="text-center mt-3 mb-0">
                                {match mode {
                                    AuthMode::Login => view! {
                                        "No account? "<a href=Page::Register.path()>"Register"</a>
                                    }
                                    .into_any(),
                                    AuthMode::Register => view! {
                                        "Already registered? "<a href=Page::Login.path()>"Login"</a>
                                    }
                                    .into_any(),
                                }}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
