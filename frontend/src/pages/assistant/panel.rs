use super::view_model::{AssistantViewModel, Author, ChatMessage, ASSISTANT_NAME, SUGGESTED_QUESTIONS};
use crate::components::common::Button;
use leptos::*;

const CAPABILITIES: [(&str, &str); 4] = [
    ("Trend Analysis", "Identify spending patterns"),
    ("Anomaly Detection", "Explain flagged transactions"),
    ("Report Generation", "Custom insights on demand"),
    ("Smart Recommendations", "Cost-saving opportunities"),
];

const STATS: [(&str, &str); 3] = [
    ("Response Time", "< 2 sec"),
    ("Accuracy Rate", "94.8%"),
    ("Questions Answered", "1,247"),
];

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (who, align, tone) = match message.author {
        Author::Assistant => (ASSISTANT_NAME, "self-start", "bg-surface"),
        Author::User => ("You", "self-end", "bg-action-primary-bg text-action-primary-text"),
    };
    view! {
        <article class=format!("max-w-xl rounded-lg px-4 py-3 space-y-1 {} {}", align, tone) data-author=who>
            <header class="flex items-center gap-2 text-xs opacity-80">
                <i class="fas fa-robot"></i>
                <span>{who}</span>
                <time>{message.time}</time>
            </header>
            {message
                .paragraphs
                .into_iter()
                .map(|p| view! { <p class="text-sm">{p}</p> })
                .collect_view()}
        </article>
    }
}

#[component]
pub fn AssistantPage() -> impl IntoView {
    let vm = AssistantViewModel::default();
    let messages = vm.messages;
    let draft = vm.draft;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.send_draft();
    };

    view! {
        <div class="grid gap-6 xl:grid-cols-3">
            <section class="xl:col-span-2 rounded-lg border border-border bg-surface-elevated flex flex-col">
                <header class="flex items-center justify-between p-4 border-b border-border">
                    <div class="flex items-center gap-3">
                        <div class="h-10 w-10 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center">
                            <i class="fas fa-robot"></i>
                        </div>
                        <div>
                            <h3 class="font-semibold">{ASSISTANT_NAME}</h3>
                            <span class="text-xs text-fg-muted">"Always online and ready to help"</span>
                        </div>
                    </div>
                    <span class="badge green">"Online"</span>
                </header>
                <div class="flex-1 flex flex-col gap-3 p-4 overflow-y-auto">
                    <For
                        each=move || messages.get()
                        key=|message| message.id
                        children=|message| view! { <MessageBubble message=message/> }
                    />
                </div>
                <form class="flex gap-2 p-4 border-t border-border" on:submit=on_submit>
                    <input
                        class="flex-1 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                        placeholder="Ask me anything about your expenses..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <Button attr:type="submit">"Send"</Button>
                </form>
            </section>
            <aside class="space-y-6">
                <section class="rounded-lg border border-border bg-surface-elevated p-4 space-y-2">
                    <h4 class="font-semibold">"Suggested Questions"</h4>
                    {SUGGESTED_QUESTIONS
                        .into_iter()
                        .map(|question| {
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left text-sm rounded-md px-3 py-2 hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| vm.ask(question)
                                >
                                    {question}
                                </button>
                            }
                        })
                        .collect_view()}
                </section>
                <section class="rounded-lg border border-border bg-surface-elevated p-4">
                    <h4 class="font-semibold mb-2">"AI Capabilities"</h4>
                    <ul class="space-y-2 text-sm">
                        {CAPABILITIES
                            .into_iter()
                            .map(|(label, description)| {
                                view! {
                                    <li>
                                        <strong class="block">{label}</strong>
                                        <span class="text-fg-muted">{description}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
                <section class="rounded-lg border border-border bg-surface-elevated p-4 space-y-2">
                    {STATS
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="flex justify-between text-sm">
                                    <span class="text-fg-muted">{label}</span>
                                    <strong>{value}</strong>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </aside>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_welcome_transcript_and_sidebar() {
        let html = render_to_string(|| view! { <AssistantPage/> });
        assert!(html.contains("Always online and ready to help"));
        assert!(html.contains("your intelligent expense assistant"));
        assert_eq!(html.matches("<article").count(), 2);
        assert!(html.contains("What are my top spending categories?"));
        assert!(html.contains("Questions Answered"));
        assert!(html.contains("Ask me anything about your expenses..."));
    }
}
