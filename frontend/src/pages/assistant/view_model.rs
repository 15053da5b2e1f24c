use crate::utils::time::now_clock_label;
use leptos::*;
use uuid::Uuid;

pub const ASSISTANT_NAME: &str = "Smart Auditor AI";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "Why was the Global Airlines transaction flagged?",
    "What are my top spending categories?",
    "How can I improve my expense integrity score?",
    "Explain the recent anomalies detected",
    "What cost-saving opportunities are available?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub time: String,
    pub paragraphs: Vec<String>,
}

impl ChatMessage {
    pub fn new(author: Author, paragraphs: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            time: now_clock_label(),
            paragraphs,
        }
    }

    fn assistant(paragraphs: &[&str]) -> Self {
        Self::new(
            Author::Assistant,
            paragraphs.iter().map(|p| p.to_string()).collect(),
        )
    }
}

pub fn welcome_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::assistant(&[
            "Hello! I'm Smart Auditor AI, your intelligent expense assistant.",
            "I can help you with analyzing expense patterns, explaining flagged transactions, and recommending cost-saving actions.",
        ]),
        ChatMessage::assistant(&[
            "Ask a question to get started, or pick one of the suggested prompts on the right.",
        ]),
    ]
}

/// Canned answer chosen by keyword; there is no model behind the chat.
pub fn canned_reply(question: &str) -> &'static [&'static str] {
    let q = question.to_lowercase();
    if q.contains("global airlines") || q.contains("flagged") {
        &[
            "The Global Airlines charge of $8,900 was flagged as a likely duplicate.",
            "A booking with the same amount and vendor was submitted within 48 hours.",
        ]
    } else if q.contains("categor") {
        &["Your top categories this month are Travel, IT, and Office supplies, with Travel at $8,500."]
    } else if q.contains("score") || q.contains("integrity") {
        &[
            "Attach itemized receipts to every submission and file expenses within 7 days.",
            "Both habits reduce the number of items held for manual review.",
        ]
    } else if q.contains("anomal") {
        &["Six anomalies were detected recently: duplicates, excessive amounts, missing receipts, and unusual vendors."]
    } else if q.contains("saving") || q.contains("cost") {
        &["Consolidating travel bookings and negotiating software licences could save roughly $22,000 this quarter."]
    } else {
        &["I can help with spending trends, flagged transactions, and savings ideas. Try one of the suggested prompts."]
    }
}

#[derive(Clone, Copy)]
pub struct AssistantViewModel {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub draft: RwSignal<String>,
}

impl Default for AssistantViewModel {
    fn default() -> Self {
        Self {
            messages: create_rw_signal(welcome_messages()),
            draft: create_rw_signal(String::new()),
        }
    }
}

impl AssistantViewModel {
    /// Appends the question and a reply. Blank input is ignored.
    pub fn ask(&self, question: &str) {
        let question = question.trim();
        if question.is_empty() {
            return;
        }
        let asked = ChatMessage::new(Author::User, vec![question.to_string()]);
        let answered = ChatMessage::assistant(canned_reply(question));
        self.messages.update(|messages| {
            messages.push(asked);
            messages.push(answered);
        });
    }

    pub fn send_draft(&self) {
        let draft = self.draft.get_untracked();
        self.ask(&draft);
        self.draft.set(String::new());
    }
}
