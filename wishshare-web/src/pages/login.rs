use crate::{
    api::WishShareClient,
    models::app_state::AppState,
    routes::MainRoute,
    session,
    validation::{
        ValidationError, validate_confirm_password, validate_email, validate_name,
        validate_password,
    },
};
use shared::models::{SignInRequest, SignUpRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

fn validate_sign_in(email: &str, password: &str) -> Result<(), String> {
    validate_email(email).map_err(describe_email)?;
    validate_password(password).map_err(|_| "Password is required".to_string())?;
    Ok(())
}

fn validate_sign_up(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    validate_name(name).map_err(|_| "Name is required".to_string())?;
    validate_sign_in(email, password)?;
    validate_confirm_password(confirm_password, password)
        .map_err(|_| "Passwords do not match".to_string())?;
    Ok(())
}

fn describe_email(err: ValidationError) -> String {
    match err {
        ValidationError::InvalidEmail => "Enter a valid email address".to_string(),
        _ => "Email is required".to_string(),
    }
}

/// Combined sign-in / sign-up page.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let is_sign_in = use_state(|| true);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let is_sign_in = is_sign_in.clone();
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm_password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let dispatch = dispatch;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let signing_in = *is_sign_in;
            let name_value = (*name_handle).clone();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let confirm_value = (*confirm_handle).clone();

            let validated = if signing_in {
                validate_sign_in(&email_value, &password_value)
            } else {
                validate_sign_up(&name_value, &email_value, &password_value, &confirm_value)
            };
            if let Err(message) = validated {
                error_handle.set(Some(message));
                return;
            }

            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = WishShareClient::shared();
                let granted = if signing_in {
                    client
                        .sign_in(&SignInRequest {
                            email: email_value,
                            password: password_value,
                        })
                        .await
                } else {
                    client
                        .sign_up(&SignUpRequest {
                            name: name_value,
                            email: email_value,
                            password: password_value,
                        })
                        .await
                };

                match granted {
                    Ok(grant) => {
                        let (user, token) = grant.into_parts();
                        session::establish(&dispatch, user, &token);
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        let message = if err.is_unauthorized() {
                            "Invalid credentials".to_string()
                        } else {
                            err.server_message()
                                .map(ToString::to_string)
                                .unwrap_or_else(|| {
                                    if signing_in {
                                        "Sign in failed".to_string()
                                    } else {
                                        "Sign up failed".to_string()
                                    }
                                })
                        };
                        error_ref.set(Some(message));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let select_sign_in = {
        let is_sign_in = is_sign_in.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            is_sign_in.set(true);
            error.set(None);
        })
    };
    let select_sign_up = {
        let is_sign_in = is_sign_in.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            is_sign_in.set(false);
            error.set(None);
        })
    };

    let is_busy = *loading;
    let signing_in = *is_sign_in;
    let tab_class = |active: bool| {
        if active {
            "tab tab-active flex-1 font-medium text-primary"
        } else {
            "tab flex-1"
        }
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold text-primary">{ "WishShare" }</h1>
                        <p class="text-base-content/70">{ "Create and share wishlists with friends" }</p>
                    </div>

                    <div class="tabs tabs-bordered mb-4">
                        <button class={tab_class(signing_in)} type="button" onclick={select_sign_in}>
                            { "Sign In" }
                        </button>
                        <button class={tab_class(!signing_in)} type="button" onclick={select_sign_up}>
                            { "Sign Up" }
                        </button>
                    </div>

                    <form onsubmit={onsubmit}>
                        if let Some(message) = &*error {
                            <div class="alert alert-error mb-4">
                                <span>{message.clone()}</span>
                            </div>
                        }
                        if !signing_in {
                            <div class="form-control mb-2">
                                <label class="label" for="name">
                                    <span class="label-text">{ "Name" }</span>
                                </label>
                                <input
                                    id="name"
                                    class="input input-bordered"
                                    type="text"
                                    placeholder="John"
                                    value={(*name).clone()}
                                    oninput={text_input(&name)}
                                />
                            </div>
                        }
                        <div class="form-control mb-2">
                            <label class="label" for="email">
                                <span class="label-text">{ "Email" }</span>
                            </label>
                            <input
                                id="email"
                                class="input input-bordered"
                                type="email"
                                placeholder="john@example.com"
                                value={(*email).clone()}
                                oninput={text_input(&email)}
                            />
                        </div>
                        <div class="form-control mb-2">
                            <label class="label" for="password">
                                <span class="label-text">{ "Password" }</span>
                            </label>
                            <input
                                id="password"
                                class="input input-bordered"
                                type="password"
                                placeholder="••••••••"
                                value={(*password).clone()}
                                oninput={text_input(&password)}
                            />
                        </div>
                        if !signing_in {
                            <div class="form-control mb-2">
                                <label class="label" for="confirm-password">
                                    <span class="label-text">{ "Confirm password" }</span>
                                </label>
                                <input
                                    id="confirm-password"
                                    class="input input-bordered"
                                    type="password"
                                    value={(*confirm_password).clone()}
                                    oninput={text_input(&confirm_password)}
                                />
                            </div>
                        }
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                {
                                    if is_busy {
                                        "Please wait..."
                                    } else if signing_in {
                                        "Sign In"
                                    } else {
                                        "Create Account"
                                    }
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_email_and_password() {
        assert!(validate_sign_in("dana@example.com", "hunter22").is_ok());
        assert_eq!(
            validate_sign_in("", "hunter22"),
            Err("Email is required".to_string())
        );
        assert_eq!(
            validate_sign_in("dana.example.com", "hunter22"),
            Err("Enter a valid email address".to_string())
        );
        assert_eq!(
            validate_sign_in("dana@example.com", ""),
            Err("Password is required".to_string())
        );
    }

    #[test]
    fn sign_up_requires_name_and_matching_passwords() {
        assert!(validate_sign_up("Dana", "dana@example.com", "hunter22", "hunter22").is_ok());
        assert_eq!(
            validate_sign_up("", "dana@example.com", "hunter22", "hunter22"),
            Err("Name is required".to_string())
        );
        assert_eq!(
            validate_sign_up("Dana", "dana@example.com", "hunter22", "hunter23"),
            Err("Passwords do not match".to_string())
        );
    }
}
