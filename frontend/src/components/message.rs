use authview::{Notice, Tone};
use leptos::prelude::*;

fn message_class(notice: Option<&Notice>) -> &'static str {
    match notice.map(|n| n.tone) {
        Some(Tone::Success) => "message success",
        Some(Tone::Error) => "message error",
        Some(Tone::Neutral) | None => "message",
    }
}

/// Inline message under a form.
#[component]
pub fn Message(id: &'static str, #[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    view! {
        <p id=id class=move || notice.with(|n| message_class(n.as_ref()))>
            {move || notice.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_follows_tone() {
        assert_eq!(message_class(None), "message");
        assert_eq!(message_class(Some(&Notice::success("ok"))), "message success");
        assert_eq!(message_class(Some(&Notice::error("no"))), "message error");
        assert_eq!(message_class(Some(&Notice::neutral("bye"))), "message");
    }
}
