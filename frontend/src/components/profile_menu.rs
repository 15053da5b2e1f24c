use leptos::{html, *};

#[derive(Clone, Copy)]
pub struct ProfileMenuState {
    open: RwSignal<bool>,
}

impl ProfileMenuState {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Document-level pointer-down. Presses inside the menu subtree are left
    /// to the menu's own handlers.
    pub fn handle_pointer_down(&self, inside: bool) {
        if !inside && self.open.get_untracked() {
            self.close();
        }
    }
}

impl Default for ProfileMenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".into()
    } else {
        letters
    }
}

#[cfg(target_arch = "wasm32")]
fn watch_outside_pointer(menu: ProfileMenuState, container: NodeRef<html::Div>) {
    use crate::utils::dom::listeners::DocumentListener;
    use wasm_bindgen::JsCast;

    let listener = DocumentListener::attach("pointerdown", move |event: web_sys::Event| {
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let inside = match (container.get_untracked(), target) {
            (Some(root), Some(node)) => root.contains(Some(&node)),
            _ => false,
        };
        menu.handle_pointer_down(inside);
    });
    if listener.is_none() {
        log::warn!("profile menu: pointerdown listener not attached");
    }
    on_cleanup(move || drop(listener));
}

const ITEM_CLASS: &str =
    "w-full flex items-center gap-2 px-4 py-2 text-sm text-left text-fg hover:bg-action-ghost-bg-hover";

#[component]
pub fn ProfileMenu(
    #[prop(into)] user_name: Signal<String>,
    #[prop(into)] user_role: String,
    on_logout: Callback<()>,
) -> impl IntoView {
    let menu = ProfileMenuState::new();
    let container = create_node_ref::<html::Div>();

    #[cfg(target_arch = "wasm32")]
    watch_outside_pointer(menu, container);

    let role_label = user_role.clone();
    view! {
        <div class="relative" node_ref=container>
            <button
                type="button"
                class="flex items-center gap-2 rounded-full focus:outline-none focus:ring-2 focus:ring-action-primary-focus"
                aria-haspopup="menu"
                aria-expanded=move || menu.is_open().to_string()
                on:click=move |_| menu.toggle()
            >
                <span class="h-9 w-9 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center text-sm font-semibold">
                    {move || initials(&user_name.get())}
                </span>
                <span class="hidden md:flex flex-col items-start leading-tight">
                    <span class="text-sm font-medium">{move || user_name.get()}</span>
                    <span class="text-xs text-fg-muted">{user_role}</span>
                </span>
            </button>
            <Show when=move || menu.is_open()>
                <div
                    role="menu"
                    class="absolute right-0 mt-2 w-56 rounded-md border border-border bg-surface-elevated shadow-lg z-20 py-1"
                >
                    <div class="px-4 py-2 border-b border-border">
                        <p class="text-sm font-medium">{move || user_name.get()}</p>
                        <p class="text-xs text-fg-muted">{role_label.clone()}</p>
                    </div>
                    <button type="button" role="menuitem" class=ITEM_CLASS on:click=move |_| menu.close()>
                        <i class="fas fa-user"></i>"My Account"
                    </button>
                    <button type="button" role="menuitem" class=ITEM_CLASS on:click=move |_| menu.close()>
                        <i class="fas fa-id-card"></i>"Profile Settings"
                    </button>
                    <button type="button" role="menuitem" class=ITEM_CLASS on:click=move |_| menu.close()>
                        <i class="fas fa-sliders"></i>"Preferences"
                    </button>
                    <button
                        type="button"
                        role="menuitem"
                        class=ITEM_CLASS
                        on:click=move |_| {
                            menu.close();
                            on_logout.call(());
                        }
                    >
                        <i class="fas fa-right-from-bracket"></i>"Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn closed_menu_renders_avatar_only() {
        let html = render_to_string(move || {
            view! {
                <ProfileMenu
                    user_name=Signal::derive(|| "Auditor User".to_string())
                    user_role="Auditor"
                    on_logout=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("AU"));
        assert!(html.contains("Auditor User"));
        assert!(!html.contains("Profile Settings"));
    }
}
