use super::{
    utils::role_badge_class,
    view_model::{use_users_view_model, UsersViewModel},
};
use crate::{
    api::{ManagedUser, RolePermissions},
    components::{
        cards::StatCard,
        common::{Button, ButtonVariant, MessageBanner},
        layout::{ErrorMessage, LoadingSpinner},
    },
    utils::{task::{spawn_scoped, TaskSlot}, time::format_date},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn UserRow(user: ManagedUser) -> impl IntoView {
    let joined = user
        .joined_date
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());
    view! {
        <tr>
            <td class="py-2 pr-4 font-medium">{user.name}</td>
            <td class="py-2 pr-4 text-action-primary-bg">{user.email}</td>
            <td class="py-2 pr-4">{user.department}</td>
            <td class="py-2 pr-4">
                <span class=role_badge_class(&user.role)>{user.role.clone()}</span>
            </td>
            <td class="py-2 pr-4">
                <span class=user.status.badge_class()>{user.status.label()}</span>
            </td>
            <td class="py-2">{joined}</td>
        </tr>
    }
}

#[component]
fn PermissionList(title: &'static str, permissions: Vec<String>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-border p-4">
            <h4 class="font-semibold mb-2">{title}</h4>
            <ul class="space-y-1 text-sm text-fg-muted">
                {permissions.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn RolePermissionsGrid(permissions: RolePermissions) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-5">
            <h3 class="text-base font-semibold mb-4">"Role Permissions Overview"</h3>
            <div class="grid gap-4 md:grid-cols-3">
                <PermissionList title="Admin" permissions=permissions.admin/>
                <PermissionList title="User (Staff/Employee)" permissions=permissions.user/>
                <PermissionList title="Auditor" permissions=permissions.auditor/>
            </div>
        </section>
    }
}

#[component]
fn AddUserForm(vm: UsersViewModel, submit_task: TaskSlot) -> impl IntoView {
    let form = vm.form;
    let submitting = vm.submitting;
    let form_error = vm.form_error;
    let submit_vm = vm.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let vm = submit_vm.clone();
        submit_task.start_if_idle(async move { vm.add_user().await });
    };
    let cancel_vm = vm.clone();

    view! {
        <form class="rounded-lg border border-border p-4 space-y-3" on:submit=on_submit>
            <h4 class="font-semibold">"Add New User"</h4>
            {move || form_error.get().map(|msg| view! { <ErrorMessage message=msg/> })}
            <input
                class="w-full rounded-md border border-border bg-surface px-3 py-2"
                placeholder="Enter full name"
                prop:value=move || form.name.get()
                on:input=move |ev| form.name.set(event_target_value(&ev))
                disabled=move || submitting.get()
            />
            <input
                type="email"
                class="w-full rounded-md border border-border bg-surface px-3 py-2"
                placeholder="Enter email address"
                prop:value=move || form.email.get()
                on:input=move |ev| form.email.set(event_target_value(&ev))
                disabled=move || submitting.get()
            />
            <input
                class="w-full rounded-md border border-border bg-surface px-3 py-2"
                placeholder="Enter department (optional)"
                prop:value=move || form.department.get()
                on:input=move |ev| form.department.set(event_target_value(&ev))
                disabled=move || submitting.get()
            />
            <div class="flex justify-end gap-2">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=submitting
                    on:click=move |_| cancel_vm.close_form()
                    attr:type="button"
                >
                    "Cancel"
                </Button>
                <Button loading=submitting attr:type="submit">
                    {move || if submitting.get() { "Creating..." } else { "Create User" }}
                </Button>
            </div>
        </form>
    }
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let vm = use_users_view_model();
    let load_vm = vm.clone();
    create_effect(move |_| {
        let vm = load_vm.clone();
        spawn_scoped(async move { vm.load().await });
    });

    let directory = vm.directory;
    let loading = vm.loading;
    let load_error = vm.load_error;
    let filtered = vm.filtered_users();
    let query = vm.query;
    let form_open = vm.form_open;
    let notice = vm.notice;
    let stored_vm = store_value(vm);
    // Outlives the form, which closes before the delayed reload finishes.
    let submit_task = TaskSlot::new();

    let count = move |pick: fn(&crate::api::UserDirectory) -> u32| {
        Signal::derive(move || {
            directory.with(|d| d.as_ref().map(pick).unwrap_or_default().to_string())
        })
    };

    view! {
        <div class="space-y-6">
            {move || {
                if loading.get() && directory.with(Option::is_none) {
                    view! { <LoadingSpinner/> }.into_view()
                } else if let Some(err) = load_error.get().filter(|_| directory.with(Option::is_none)) {
                    view! { <ErrorMessage message=format!("Error: {}", err)/> }.into_view()
                } else {
                    ().into_view()
                }
            }}
            <Show when=move || directory.with(Option::is_some)>
                <div class="grid gap-4 sm:grid-cols-3">
                    <StatCard label="Admin Users" value=count(|d| d.admin_users_count) icon="fa-user-shield"/>
                    <StatCard label="Staff/Employees" value=count(|d| d.staff_employees_count) icon="fa-users"/>
                    <StatCard label="Auditors" value=count(|d| d.auditors_count) icon="fa-user-check"/>
                </div>
                <section class="bg-surface-elevated shadow rounded-lg p-5 space-y-4">
                    <div class="flex items-center justify-between">
                        <h3 class="text-base font-semibold">
                            {move || format!("Organization Users ({})", filtered.with(Vec::len))}
                        </h3>
                        <Button on:click=move |_| stored_vm.with_value(UsersViewModel::open_form)>
                            "Add New User"
                        </Button>
                    </div>
                    <MessageBanner message=notice/>
                    <Show when=move || form_open.get()>
                        <AddUserForm vm=stored_vm.get_value() submit_task=submit_task/>
                    </Show>
                    <input
                        class="w-full rounded-md border border-border bg-surface px-3 py-2"
                        placeholder="Search by name, email, or department..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2 pr-4">"Name"</th>
                                <th class="py-2 pr-4">"Email"</th>
                                <th class="py-2 pr-4">"Department"</th>
                                <th class="py-2 pr-4">"Role"</th>
                                <th class="py-2 pr-4">"Status"</th>
                                <th class="py-2">"Joined Date"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || filtered.get()
                                key=|user| user.id.clone()
                                children=|user| view! { <UserRow user=user/> }
                            />
                        </tbody>
                    </table>
                </section>
                {move || {
                    directory
                        .get()
                        .map(|d| d.role_permissions)
                        .filter(|p| !p.is_empty())
                        .map(|permissions| view! { <RolePermissionsGrid permissions=permissions/> })
                }}
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_app, ssr::render_to_string};

    #[test]
    fn renders_spinner_before_first_load() {
        let html = render_to_string(|| {
            provide_app(None);
            view! { <UserManagementPage/> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Organization Users"));
    }
}
