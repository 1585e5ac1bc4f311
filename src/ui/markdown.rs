//! Markdown-to-terminal rendering for answer text.
//!
//! We use `termimad` because it produces terminal-friendly markdown layout
//! (lists, headings, code fences, blockquotes, tables) without requiring a
//! full TUI markdown view.

use termimad::MadSkin;

/// Render markdown into plain terminal text with structure preserved.
///
/// The output contains no ANSI styling; the renderer applies its own colors.
pub fn render_markdown_for_terminal(input: &str) -> String {
    let skin = MadSkin::no_style();
    let formatted = skin.text(input, None).to_string();
    formatted.trim_end_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_list_layout() {
        let md = "# Ideas\n\n- unboxing\n- tutorial";
        let out = render_markdown_for_terminal(md);
        assert!(out.contains("Ideas"));
        assert!(out.contains("unboxing"));
        assert!(out.contains("tutorial"));
    }

    #[test]
    fn drops_inline_markers() {
        let out = render_markdown_for_terminal("a **bold** hook");
        assert!(out.contains("bold"));
        assert!(!out.contains("**"), "got: {out}");
    }
}
