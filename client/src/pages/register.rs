//! Account registration with client-side checks and a password strength meter.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::toast::show_toast;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::validation::{FormErrors, PasswordStrength, RegisterForm};

const COUNTRIES: [&str; 5] = ["Nigeria", "Ghana", "Kenya", "South Africa", "Other"];

/// Read/write handles for one text field of the form.
fn bind(
    form: RwSignal<RegisterForm>,
    get: fn(&RegisterForm) -> &String,
    set: fn(&mut RegisterForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || get(&form.get()).clone()),
        Callback::new(move |value: String| form.update(|f| set(f, value))),
    )
}

/// Labelled input bound to one `RegisterForm` field.
#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="auth-form__field">
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|m| view! { <p class="field-error">{m}</p> })}
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let strength = Memo::new(move |_| PasswordStrength::of(&form.get().password));

    let error_for = move |field: &'static str| Signal::derive(move || errors.get().get(field));
    let (first_name, set_first_name) = bind(form, |f| &f.first_name, |f, v| f.first_name = v);
    let (last_name, set_last_name) = bind(form, |f| &f.last_name, |f, v| f.last_name = v);
    let (email, set_email) = bind(form, |f| &f.email, |f, v| f.email = v);
    let (phone, set_phone) = bind(form, |f| &f.phone_number, |f, v| f.phone_number = v);
    let (dob, set_dob) = bind(form, |f| &f.date_of_birth, |f, v| f.date_of_birth = v);
    let (password, set_password) = bind(form, |f| &f.password, |f, v| f.password = v);
    let (confirm, set_confirm) = bind(form, |f| &f.confirm_password, |f, v| f.confirm_password = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.get_untracked().validate() {
            Ok(request) => request,
            Err(e) => {
                if let Some(first) = e.first() {
                    show_toast(toasts, ToastKind::Error, first);
                }
                errors.set(e);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(&request).await {
                Ok(_) => {
                    show_toast(
                        toasts,
                        ToastKind::Success,
                        "Account created successfully! Welcome to MentWel!",
                    );
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.message()),
            }
            busy.set(false);
        });
    };

    view! {
        <Title text="Create Account - MentWel"/>
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create Your Account"</h1>
                <p class="auth-card__subtitle">"Start your journey to mental wellness today"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <div class="auth-form__row">
                        <FormField id="firstName" label="First Name" placeholder="First name"
                            value=first_name on_input=set_first_name error=error_for("first_name")/>
                        <FormField id="lastName" label="Last Name" placeholder="Last name"
                            value=last_name on_input=set_last_name error=error_for("last_name")/>
                    </div>
                    <FormField id="email" label="Email Address" kind="email" placeholder="Enter your email"
                        value=email on_input=set_email error=error_for("email")/>
                    <FormField id="phoneNumber" label="Phone Number (Optional)" kind="tel" placeholder="+234 XXX XXX XXXX"
                        value=phone on_input=set_phone error=error_for("phone_number")/>
                    <div class="auth-form__row">
                        <FormField id="dateOfBirth" label="Date of Birth" kind="date"
                            value=dob on_input=set_dob error=error_for("date_of_birth")/>
                        <div class="auth-form__field">
                            <label for="gender">"Gender"</label>
                            <select
                                id="gender"
                                prop:value=move || form.get().gender
                                on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                            >
                                <option value="">"Select"</option>
                                <option value="male">"Male"</option>
                                <option value="female">"Female"</option>
                                <option value="other">"Other"</option>
                            </select>
                            {move || errors.get().get("gender").map(|m| view! { <p class="field-error">{m}</p> })}
                        </div>
                    </div>
                    <div class="auth-form__field">
                        <label for="country">"Country"</label>
                        <select
                            id="country"
                            prop:value=move || form.get().country
                            on:change=move |ev| form.update(|f| f.country = event_target_value(&ev))
                        >
                            <option value="">"Select country"</option>
                            {COUNTRIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect::<Vec<_>>()}
                        </select>
                        {move || errors.get().get("country").map(|m| view! { <p class="field-error">{m}</p> })}
                    </div>
                    <FormField id="password" label="Password" kind="password" placeholder="Create a strong password"
                        value=password on_input=set_password error=error_for("password")/>
                    <Show when=move || !form.get().password.is_empty()>
                        <div class="strength-meter">
                            <div class=move || strength.get().class()></div>
                            <p class="strength-meter__label">{move || strength.get().label()}</p>
                        </div>
                    </Show>
                    <FormField id="confirm_password" label="Confirm Password" kind="password"
                        placeholder="Confirm your password"
                        value=confirm on_input=set_confirm error=error_for("confirm_password")/>
                    <label class="auth-form__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().accept_terms
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        " I agree to the " <a href="/terms" target="_blank">"Terms of Service"</a>
                    </label>
                    {move || errors.get().get("accept_terms").map(|m| view! { <p class="field-error">{m}</p> })}

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
