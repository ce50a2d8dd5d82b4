use fltk::{app, prelude::*};

use crate::app::theme::ThemePalette;

/// Semantic role a widget registers under. A theme change re-resolves the
/// palette per role; widgets never get walked or recolored individually
/// outside their binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Container,
    Label,
    List,
}

/// Declarative style bindings: each UI element registers once, with its
/// role; `apply` re-resolves every binding against the new palette.
/// Reapplying the same palette is a no-op in effect.
#[derive(Default)]
pub struct StyleBinder {
    bindings: Vec<Box<dyn FnMut(&ThemePalette)>>,
}

impl StyleBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<W: WidgetExt + Clone + 'static>(&mut self, role: Role, widget: &W) {
        let mut widget = widget.clone();
        self.bindings.push(Box::new(move |palette| match role {
            Role::Container => {
                widget.set_color(palette.window_bg());
            }
            Role::Label => {
                widget.set_color(palette.window_bg());
                widget.set_label_color(palette.text_fg());
            }
            Role::List => {
                widget.set_color(palette.text_bg());
                widget.set_selection_color(palette.text_fg());
            }
        }));
    }

    /// Register a custom binding for widgets whose themed properties go
    /// beyond the generic color slots (text editor, filename field).
    pub fn bind_with(&mut self, f: impl FnMut(&ThemePalette) + 'static) {
        self.bindings.push(Box::new(f));
    }

    pub fn apply(&mut self, palette: &ThemePalette) {
        for binding in &mut self.bindings {
            binding(palette);
        }
    }
}

/// Set FLTK's default color scheme from the palette, so widgets that never
/// register a binding still follow the theme (scrollbars, dialogs).
pub fn apply_global_palette(palette: &ThemePalette) {
    let (r, g, b) = palette.window_bg().to_rgb();
    app::background(r, g, b);
    let (r, g, b) = palette.text_bg().to_rgb();
    app::background2(r, g, b);
    let (r, g, b) = palette.text_fg().to_rgb();
    app::foreground(r, g, b);
}
