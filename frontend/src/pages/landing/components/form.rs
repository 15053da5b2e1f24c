use crate::{
    api::Role,
    components::common::MessageBanner,
    pages::landing::{
        utils::{AuthMode, ROLE_TABS},
        view_model::LandingViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-surface px-3 py-2 pl-9 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

#[component]
fn RoleTabs(selected: RwSignal<Role>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-2 rounded-md bg-surface-muted p-1" role="tablist">
            {ROLE_TABS
                .iter()
                .map(|role| {
                    let role = *role;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="rounded px-3 py-1.5 text-sm font-medium"
                            class:bg-action-primary-bg=move || selected.get() == role
                            class:text-action-primary-text=move || selected.get() == role
                            aria-selected=move || (selected.get() == role).to_string()
                            on:click=move |_| selected.set(role)
                        >
                            {role.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn IconInput(
    icon: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <i class=format!("fas {} absolute left-3 top-1/2 -translate-y-1/2 text-fg-muted", icon)></i>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn AuthForm(vm: LandingViewModel, on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let form = vm.form;
    let mode = vm.mode;
    let loading = vm.loading;
    let message = vm.message;
    let toggle_vm = vm.clone();
    let is_signup = move || mode.get() == AuthMode::Signup;

    view! {
        <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
            <h2 class="text-2xl font-bold text-fg">
                {move || if is_signup() { "Create your account" } else { "Welcome back" }}
            </h2>
            <RoleTabs selected=form.role/>
            <Show when=is_signup>
                <IconInput icon="fa-user" input_type="text" placeholder="Username" value=form.username/>
            </Show>
            <IconInput icon="fa-envelope" input_type="email" placeholder="Email address" value=form.email/>
            <IconInput icon="fa-lock" input_type="password" placeholder="Password" value=form.password/>
            <MessageBanner message=message/>
            <button
                type="submit"
                class="w-full rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Processing...".to_string() } else { mode.get().submit_label().to_string() }}
            </button>
            <p class="text-center text-sm text-fg-muted">
                {move || mode.get().switch_prompt().0}
                " "
                <button
                    type="button"
                    class="font-medium text-action-primary-bg hover:underline"
                    on:click=move |_| toggle_vm.toggle_mode()
                >
                    {move || mode.get().switch_prompt().1}
                </button>
            </p>
        </form>
    }
}
