/*!
 * # Editing core
 *
 * The document is Markdown source in a single **`xi_rope::Rope`**. Every
 * mutation is a **`Cmd`** compiled into ordered **`EditStep`**s; nothing else
 * touches the rope.
 *
 * Each applied step flows, in order, through:
 *
 * 1. the rope (authoritative update, version bump)
 * 2. the selection
 * 3. the **`HighlightTracker`**, which re-maps its pinned range with the
 *    position mapping rules in [`mapping`] and goes idle if the range is
 *    destroyed
 * 4. any subscribed observers
 *
 * On top of that sit the read side ([`target`]: what does the current
 * selection point at) and the write side ([`replace`]: swap a range for new
 * text in one step and drop the highlight).
 *
 * ```rust
 * use prose_rewrite_engine::editing::*;
 *
 * let mut doc = Document::from("Hello world\n\nSecond line");
 * let target = resolve_target(&doc, TextRange::caret(18)).unwrap();
 * assert_eq!(target.selected_text, "Second line");
 *
 * doc.pin_highlight(target.range()).unwrap();
 * doc.apply(Cmd::InsertText { at: 0, text: "> ".into() }).unwrap();
 * assert_eq!(doc.highlight(), Some(TextRange::new(15, 26)));
 *
 * replace(&mut doc, TextRange::new(15, 26), "Line two").unwrap();
 * assert_eq!(doc.text(), "> Hello world\n\nLine two");
 * assert_eq!(doc.highlight(), None);
 * ```
 */

pub mod commands;
pub mod document;
pub mod highlight;
pub mod mapping;
pub mod patch;
pub mod range;
pub mod replace;
pub mod target;

pub use commands::{Cmd, Mark, Transaction};
pub use document::Document;
pub use highlight::{HighlightChange, HighlightTracker};
pub use mapping::{Bias, EditStep, MappedOffset, map_offset, map_range, map_range_through};
pub use patch::Patch;
pub use range::TextRange;
pub use replace::{replace, replacement_step};
pub use target::{DEFAULT_PREVIEW_CHARS, TargetRange, preview, resolve_target, target_range};
