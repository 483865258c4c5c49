//! Floating "EASI Agent" chat widget. `static/js/chat.js` owns the
//! conversation; the server only renders the shell and the greeting.

use easi_core::chat::{FALLBACK_REPLY, QUICK_PROMPTS, WELCOME_MESSAGE};
use easi_core::html::escape_html;

pub fn chat_widget() -> String {
    let prompts: String = QUICK_PROMPTS
        .iter()
        .map(|prompt| {
            let prompt = escape_html(prompt);
            format!("<button type=\"button\" class=\"quick-prompt\" data-prompt=\"{prompt}\">{prompt}</button>")
        })
        .collect();

    format!(
        r#"<div class="chat-widget" data-chat data-fallback="{fallback}">
<button type="button" class="chat-toggle" aria-label="Open chat assistant" aria-expanded="false" data-chat-toggle>
<img src="/static/img/easi-logo.svg" alt="EASI Agent" width="48" height="48"></button>
<div class="chat-panel" role="dialog" aria-label="EASI Agent" hidden data-chat-panel>
<div class="chat-header"><div><h3>EASI Agent</h3><p>Ask me anything about EASI</p></div><span class="chat-secure">Secure</span></div>
<div class="chat-messages" aria-live="polite" data-chat-messages>
<div class="chat-message assistant" data-welcome>{welcome}</div>
<div class="quick-prompts" data-quick-prompts><p>Quick questions:</p>{prompts}</div>
</div>
<form class="chat-form" data-chat-form>
<input type="text" name="message" placeholder="Ask about EASI..." autocomplete="off" aria-label="Message" maxlength="4000">
<button type="submit" class="chat-send" aria-label="Send message">&#10148;</button>
</form>
</div>
</div>"#,
        fallback = escape_html(FALLBACK_REPLY),
        welcome = escape_html(WELCOME_MESSAGE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_carries_greeting_prompts_and_fallback() {
        let html = chat_widget();
        assert!(html.contains("I&#39;m the EASI Agent"));
        assert_eq!(html.matches("class=\"quick-prompt\"").count(), QUICK_PROMPTS.len());
        assert!(html.contains("data-fallback=\"I apologize"));
    }
}
