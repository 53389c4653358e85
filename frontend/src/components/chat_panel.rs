use crate::api::HttpGateway;
use shared::chat::GREETING;
use shared::{ChatReply, ChatRole, ChatSession, Gateway, GatewayError};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

/// Where a chat panel is mounted. Each mounted panel owns its own session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChatPlacement {
    Sidebar,
    Floating,
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub placement: ChatPlacement,
}

pub enum ChatMsg {
    SetDraft(String),
    Send,
    Reply(Result<ChatReply, GatewayError>),
    ToggleOpen,
}

pub struct ChatPanel {
    session: ChatSession,
    gateway: HttpGateway,
    open: bool,
    end_ref: NodeRef,
    scrolled_len: usize,
}

impl Component for ChatPanel {
    type Message = ChatMsg;
    type Properties = ChatPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let session = match ctx.props().placement {
            ChatPlacement::Sidebar => ChatSession::new(),
            ChatPlacement::Floating => ChatSession::with_greeting(GREETING),
        };

        Self {
            session,
            gateway: HttpGateway::default(),
            open: false,
            end_ref: NodeRef::default(),
            scrolled_len: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::SetDraft(text) => {
                self.session.set_draft(text);
                true
            }
            ChatMsg::Send => match self.session.begin_send() {
                Ok(text) => {
                    self.send_chat_request(ctx, text);
                    true
                }
                Err(err) => {
                    log::debug!("Chat message not sent: {}", err);
                    false
                }
            },
            ChatMsg::Reply(outcome) => {
                self.session.complete(outcome);
                true
            }
            ChatMsg::ToggleOpen => {
                self.open = !self.open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match ctx.props().placement {
            ChatPlacement::Sidebar => self.render_sidebar_panel(ctx),
            ChatPlacement::Floating => self.render_floating_widget(ctx),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let len = self.session.messages().len();
        if len == self.scrolled_len {
            return;
        }
        if let Some(end) = self.end_ref.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
            self.scrolled_len = len;
        }
    }
}

impl ChatPanel {
    fn send_chat_request(&self, ctx: &Context<Self>, text: String) {
        spawn_local({
            let link = ctx.link().clone();
            let gateway = self.gateway.clone();

            async move {
                let outcome = gateway.send_chat(&text).await;
                link.send_message(ChatMsg::Reply(outcome));
            }
        });
    }

    fn render_input_form(&self, ctx: &Context<Self>, placeholder: &'static str) -> Html {
        let link = ctx.link();
        let handle_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatMsg::Send
        });
        let handle_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatMsg::SetDraft(input.value())
        });

        html! {
            <form class="chat-form" onsubmit={handle_submit}>
                <input
                    type="text"
                    class="chat-input"
                    value={self.session.draft().to_string()}
                    placeholder={placeholder}
                    oninput={handle_input}
                />
                <button type="submit" class="chat-send" title="Send message" disabled={self.session.is_loading()}>
                    <i class="fa-solid fa-paper-plane"></i>
                </button>
            </form>
        }
    }

    fn render_sidebar_panel(&self, ctx: &Context<Self>) -> Html {
        let messages = self.session.messages();

        html! {
            <div class="sidebar-card chat-sidebar">
                <h2><i class="fa-solid fa-comments"></i>{" Intelligent Assistant"}</h2>
                { self.render_input_form(ctx, "Ask about packages or predictions...") }
                if !messages.is_empty() {
                    <div class="chat-log">
                        { for messages.iter().map(|m| {
                            let (class, speaker) = match m.role {
                                ChatRole::User => ("chat-line user", "You: "),
                                ChatRole::Assistant => ("chat-line assistant", "AI: "),
                            };
                            html! {
                                <div class={class}>
                                    <span class="speaker">{ speaker }</span>{ &m.content }
                                </div>
                            }
                        }) }
                        if self.session.is_loading() {
                            <div class="chat-line pending">{"AI is thinking..."}</div>
                        }
                        <div ref={self.end_ref.clone()}></div>
                    </div>
                }
            </div>
        }
    }

    fn render_floating_widget(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatMsg::ToggleOpen);

        if !self.open {
            return html! {
                <button class="chat-bubble" title="Open chat" onclick={toggle}>
                    <i class="fa-solid fa-comment-dots"></i>
                </button>
            };
        }

        html! {
            <div class="chat-widget">
                <div class="chat-widget-header">
                    <span>{"Tracking Chat"}</span>
                    <button title="Close chat" onclick={toggle}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>
                <div class="chat-widget-messages">
                    { for self.session.messages().iter().map(|m| {
                        let class = match m.role {
                            ChatRole::User => "bubble user",
                            ChatRole::Assistant => "bubble assistant",
                        };
                        html! { <div class={class}>{ &m.content }</div> }
                    }) }
                    if self.session.is_loading() {
                        <div class="bubble assistant pending">{"Typing\u{2026}"}</div>
                    }
                    <div ref={self.end_ref.clone()}></div>
                </div>
                { self.render_input_form(ctx, "Type a message\u{2026}") }
            </div>
        }
    }
}
