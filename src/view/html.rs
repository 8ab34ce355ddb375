//! HTML projection of a [`View`].

use super::{Caret, InlineInputState, TranscriptBlock, View};
use crate::core::output::escape_html_into;
use crate::core::Style;
use std::fmt::Write as _;

/// Stylesheet keeping the prompt field visually part of the terminal.
pub const PROMPT_FIELD_STYLES: &str = "#terminal-prompt-field {
        background-color: transparent;
        font-size: inherit;
        width: 100%;
      }

      #terminal-prompt-field:focus {
        outline: none;
      }
    ";

impl View {
    /// Render the whole terminal, with `field_id` as the prompt input's id.
    ///
    /// User-typed text is always escaped.
    pub fn to_html(&self, field_id: &str) -> String {
        let mut out = String::from("<div><div class='stack-s'>");
        for block in &self.transcript {
            write_block(&mut out, block);
        }
        write_prompt(&mut out, &self.input, field_id);
        out.push_str("</div><style>");
        out.push_str(&PROMPT_FIELD_STYLES.replace("terminal-prompt-field", field_id));
        out.push_str("</style></div>");
        out
    }
}

fn write_block(out: &mut String, block: &TranscriptBlock) {
    let comment = Style::Comment.class();
    let _ = write!(
        out,
        "<div class='stack-xs'><div class='with-icon'><span class='icon {comment}'>&gt;</span><span class='{comment}'>"
    );
    escape_html_into(out, &block.command);
    out.push_str("</span></div>");
    block.output.write_html(out);
    out.push_str("</div>");
}

fn write_prompt(out: &mut String, input: &InlineInputState, field_id: &str) {
    let icon_class = match input.caret.style() {
        Some(style) => format!("icon {}", style.class()),
        None => "icon".to_string(),
    };
    let _ = write!(
        out,
        "<div class='with-icon'><span class='{icon_class}'>&gt;</span><input"
    );
    if input.disabled {
        out.push_str(" disabled");
    }
    out.push_str(" type='text' autocomplete='off' autocapitalize='off' spellcheck='false' value='");
    escape_html_into(out, &input.value);
    out.push_str("' placeholder='");
    escape_html_into(out, &input.placeholder);
    out.push_str("' id='");
    escape_html_into(out, field_id);
    out.push_str("'></div>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;
    use crate::view::view;

    const FIELD: &str = "terminal-prompt-field";

    #[test]
    fn empty_session_renders_only_the_prompt() {
        let html = view(&Session::new(1)).to_html(FIELD);
        assert!(!html.contains("stack-xs"));
        assert!(html.contains("<span class='icon'>&gt;</span><input type='text'"));
        assert!(html.contains("placeholder='try running `gleam test`...'"));
        assert!(html.contains("id='terminal-prompt-field'"));
        assert!(html.contains("#terminal-prompt-field:focus"));
    }

    #[test]
    fn executed_commands_are_echoed() {
        let session = Session::new(1).with_pending_input("gleam test").submit().0;
        let html = view(&session).to_html(FIELD);
        assert!(html.contains(
            "<span class='icon hljs-comment'>&gt;</span><span class='hljs-comment'>gleam test</span>"
        ));
        assert!(html.contains("<code><span class='hljs-shell-error'>panic</span>"));
    }

    #[test]
    fn typed_text_is_escaped() {
        let session = Session::new(1)
            .with_pending_input("<b>hi</b>")
            .submit()
            .0
            .with_pending_input("' onfocus='x");
        let html = view(&session).to_html(FIELD);
        assert!(html.contains("<span class='hljs-comment'>&lt;b&gt;hi&lt;/b&gt;</span>"));
        assert!(html.contains("unknown command: &lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("value='&#39; onfocus=&#39;x'"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn finished_prompt_is_disabled_and_dimmed() {
        let mut session = Session::new(1);
        for text in ["gleam test", "gleam run -m birdie", "a", "gleam test"] {
            session = session.with_pending_input(text).submit().0;
        }
        let view = view(&session);
        assert_eq!(view.input.caret, Caret::Closed);

        let html = view.to_html(FIELD);
        assert!(html.contains("<span class='icon hljs-comment'>&gt;</span><input disabled type='text'"));
        assert!(html.contains("placeholder='the demo is over!'"));
    }

    #[test]
    fn stylesheet_targets_the_given_field() {
        let html = view(&Session::new(1)).to_html("prompt");
        assert!(html.contains("#prompt {"));
        assert!(html.contains("id='prompt'"));
        assert!(!html.contains("terminal-prompt-field"));
    }
}
