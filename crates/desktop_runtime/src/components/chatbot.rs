use super::*;

const ASSISTANT_NAME: &str = "MINECRAFTOS-BOT";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatLine {
    Assistant(&'static str),
    User(String),
}

impl ChatLine {
    fn class(&self) -> &'static str {
        match self {
            Self::Assistant(_) => "chat-line chat-line-assistant",
            Self::User(_) => "chat-line chat-line-user",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Assistant(text) => text,
            Self::User(text) => text,
        }
    }
}

fn greeting() -> Vec<ChatLine> {
    vec![
        ChatLine::Assistant("Hello, Archlord!"),
        ChatLine::Assistant("How can I assist you today?"),
    ]
}

/// Appends the trimmed draft as a user line. Blank drafts are dropped.
fn submit_draft(transcript: &mut Vec<ChatLine>, draft: &str) -> bool {
    let text = draft.trim();
    if text.is_empty() {
        return false;
    }
    transcript.push(ChatLine::User(text.to_string()));
    true
}

#[component]
pub(super) fn ChatbotPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let open = move || state.with(|desktop| desktop.overlays.chatbot);

    // Outlives the panel: closing the overlay keeps the transcript.
    let transcript = create_rw_signal(greeting());
    let draft = create_rw_signal(String::new());

    let send = move || {
        let text = draft.get_untracked();
        let mut sent = false;
        transcript.update(|lines| sent = submit_draft(lines, &text));
        if sent {
            draft.set(String::new());
        }
    };

    view! {
        <Show when=open fallback=|| ()>
            <aside
                id="chatbot-panel"
                class="overlay-panel chatbot-panel"
                aria-label="Assistant"
                style=format!("z-index:{OVERLAY_Z_INDEX};")
            >
                <header class="chatbot-header">
                    <span class="chatbot-avatar" aria-hidden="true">"\u{1f916}"</span>
                    <h2>{ASSISTANT_NAME}</h2>
                </header>
                <div class="chatbot-transcript" role="log">
                    {move || {
                        transcript
                            .get()
                            .into_iter()
                            .map(|line| view! { <p class=line.class()>{line.text().to_string()}</p> })
                            .collect_view()
                    }}
                </div>
                <form
                    class="chatbot-input"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    <input
                        type="text"
                        placeholder="Type here..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button type="submit" aria-label="Send">"\u{27a4}"</button>
                </form>
            </aside>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn greeting_opens_the_transcript() {
        let lines: Vec<_> = greeting().iter().map(|line| line.text().to_string()).collect();
        assert_eq!(lines, vec!["Hello, Archlord!", "How can I assist you today?"]);
    }

    #[test]
    fn submit_appends_trimmed_user_lines() {
        let mut transcript = greeting();
        assert!(submit_draft(&mut transcript, "  hi there "));
        assert!(!submit_draft(&mut transcript, "   "));
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2], ChatLine::User("hi there".to_string()));
        assert_eq!(transcript[2].class(), "chat-line chat-line-user");
    }
}
