use headhunt_shared::Role;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{use_auth, use_auth_service};
use crate::config::MIN_PASSWORD_LEN;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};

/// Local checks run before anything is sent.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let service = use_auth_service();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (role, set_role) = signal(Role::JobSeeker);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = validate_registration(&email.get(), &password.get(), &confirm.get()) {
            set_error_msg.set(Some(msg));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let service = service.clone();
        spawn_local(async move {
            let result = service
                .register(
                    &auth,
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                    role.get_untracked(),
                )
                .await;
            match result {
                Ok(()) => router.navigate_to(AppRoute::Dashboard),
                Err(err) => log::debug!("[Register] {}", err),
            }
            set_is_submitting.set(false);
        });
    };

    let role_option = move |value: Role, label: &'static str| {
        view! {
            <label class="label cursor-pointer justify-start gap-3">
                <input
                    type="radio"
                    name="role"
                    class="radio radio-primary"
                    prop:checked=move || role.get() == value
                    on:change=move |_| set_role.set(value)
                />
                <span class="label-text">{label}</span>
            </label>
        }
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Create account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            {role_option(Role::JobSeeker, "I am looking for a job")}
                            {role_option(Role::Company, "I am hiring")}
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Register".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                        </p>
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
    fn accepts_matching_long_password() {
        assert_eq!(validate_registration("a@b.c", "hunter22", "hunter22"), Ok(()));
    }

    #[test]
    fn rejects_short_password() {
        let err = validate_registration("a@b.c", "short", "short").unwrap_err();
        assert!(err.contains('8'));
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert_eq!(
            validate_registration("a@b.c", "longenough", "longenougH"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(validate_registration("  ", "longenough", "longenough").is_err());
    }
}
