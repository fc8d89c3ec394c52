//! Global CSS for the gallery.
//!
//! Everything is rendered from the active token set: the reset reads
//! semantic tokens, every leaf is exported as a custom property, and the
//! component keyframes come from strata-ui.

use std::fmt::Write;

use strata_tokens::TokenSet;
use strata_ui::style::keyframes;

/// Full stylesheet for `tokens`.
pub fn global_styles(tokens: &TokenSet) -> String {
    let sem = tokens.semantic();
    let mut css = tokens.to_css_variables();
    css.push_str(&keyframes(tokens));

    let _ = write!(
        css,
        r#"
/* === Reset === */
*, *::before, *::after {{ box-sizing: border-box; }}

html, body {{
  margin: 0;
  height: 100%;
  background: {canvas};
  color: {text};
  {body}
}}

h1, h2, h3, h4 {{ margin: 0; }}

a {{ color: {link}; text-decoration: none; }}
a:hover {{ color: {link_hover}; }}

code, pre {{ {code} }}

:focus-visible {{
  outline: {ring_width} solid {ring};
  outline-offset: {ring_offset};
}}

::selection {{ background: {selected}; }}

/* === Gallery layout === */
.gallery {{
  display: grid;
  grid-template-columns: 240px 1fr;
  height: 100vh;
}}

.gallery-main {{
  overflow-y: auto;
  padding: {page_padding};
  display: flex;
  flex-direction: column;
  gap: {section_gap};
}}

.gallery-section {{
  display: flex;
  flex-direction: column;
  gap: {stack};
}}

.gallery-row {{
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: {inline};
}}

.gallery-caption {{ color: {muted}; {caption} }}
"#,
        canvas = sem.background.canvas,
        text = sem.text.primary,
        body = sem.typography.body.css(),
        link = sem.text.link,
        link_hover = sem.text.link_hover,
        code = sem.typography.code.css(),
        ring_width = sem.focus.ring_width,
        ring = sem.focus.ring,
        ring_offset = sem.focus.ring_offset,
        selected = sem.background.selected,
        page_padding = sem.space.inset_lg.css(),
        section_gap = sem.space.stack_lg,
        stack = sem.space.stack_sm,
        inline = sem.space.inline_md,
        muted = sem.text.muted,
        caption = sem.typography.caption.css(),
    );
    css
}
