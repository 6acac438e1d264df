//! Terminal window content: a canned command interpreter with command-history recall.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod commands;
pub mod history;

use desktop_app_contract::{ClockSnapshot, ContentModule, ContentMountContext, WindowContentProps};
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use commands::{run_command, welcome_lines, CommandOutcome, TerminalLine, PROMPT};
pub use history::{CommandHistory, Recall};

/// Content module registered for the terminal window kind.
pub const TERMINAL_CONTENT: ContentModule = ContentModule::new(mount_terminal);

fn mount_terminal(context: ContentMountContext) -> View {
    view! { <TerminalApp props=context.props input_id=context.primary_input_id /> }.into_view()
}

#[component]
/// Terminal window contents.
pub fn TerminalApp(
    /// Focus/close contract for the hosting window.
    props: WindowContentProps,
    /// DOM id for the command input.
    #[prop(default = None)]
    input_id: Option<&'static str>,
) -> impl IntoView {
    let transcript = create_rw_signal(welcome_lines());
    let input = create_rw_signal(String::new());
    let history = store_value(CommandHistory::default());
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        if !props.is_active.get() {
            return;
        }
        if let Some(field) = input_ref.get_untracked() {
            let _ = field.focus();
        }
    });

    let submit = move || {
        let line = input.get_untracked();
        match run_command(&line, ClockSnapshot::now()) {
            CommandOutcome::Ignored => return,
            CommandOutcome::Exit => {
                input.set(String::new());
                props.request_close();
                return;
            }
            CommandOutcome::Clear => transcript.set(Vec::new()),
            CommandOutcome::Append(lines) => transcript.update(|entries| entries.extend(lines)),
        }
        history.update_value(|history| history.push(line.trim()));
        input.set(String::new());
    };

    let recall = move |step: fn(&mut CommandHistory) -> Recall| {
        let mut outcome = Recall::Stay;
        history.update_value(|history| outcome = step(history));
        match outcome {
            Recall::Line(line) => input.set(line),
            Recall::Blank => input.set(String::new()),
            Recall::Stay => {}
        }
    };

    let indexed_lines = move || transcript.get().into_iter().enumerate().collect::<Vec<_>>();

    view! {
        <div
            class="app-shell app-terminal-shell"
            on:mousedown=move |_| {
                if !props.is_active_untracked() {
                    props.request_focus();
                }
            }
        >
            <div class="terminal-screen" role="log" aria-live="polite">
                <For each=indexed_lines key=|(idx, line)| (*idx, line.text().to_string()) let:entry>
                    <div class=entry.1.class()>{entry.1.text().to_string()}</div>
                </For>
                <div class="terminal-input-row">
                    <span class="terminal-prompt">{PROMPT}</span>
                    <input
                        node_ref=input_ref
                        id=input_id
                        class="terminal-input"
                        type="text"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => submit(),
                                "ArrowUp" => {
                                    ev.prevent_default();
                                    recall(CommandHistory::older);
                                }
                                "ArrowDown" => {
                                    ev.prevent_default();
                                    recall(CommandHistory::newer);
                                }
                                _ => {}
                            }
                        }
                        autocomplete="off"
                        spellcheck="false"
                    />
                </div>
            </div>
        </div>
    }
}
