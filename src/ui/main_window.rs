use fltk::{
    app::{self, Sender},
    button::CheckButton,
    enums::{Event, Font, FrameType},
    group::Flex,
    menu::Choice,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::file_drop;
use crate::app::language::SELECTOR_LANGUAGES;
use crate::app::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 30;

/// The row above the editor: language selector plus the two checkbox
/// triggers.
#[derive(Clone)]
pub struct ToolBar {
    pub row: Flex,
    pub language_choice: Choice,
    pub theme_toggle: CheckButton,
    pub minify_toggle: CheckButton,
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub toolbar: ToolBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 640, 480, "CodePad");
    wind.set_xclass("CodePad");

    let mut flex = Flex::new(0, 0, 640, 480, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut row = Flex::new(0, 0, 640, TOOLBAR_HEIGHT, None);
    row.set_type(fltk::group::FlexType::Row);
    row.set_frame(FrameType::FlatBox);

    let mut language_choice = Choice::default();
    for id in SELECTOR_LANGUAGES {
        language_choice.add_choice(id);
    }
    language_choice.set_value(language_choice.find_index("javascript"));
    row.fixed(&language_choice, 140);

    let mut theme_toggle = CheckButton::default().with_label("Dark Mode");
    row.fixed(&theme_toggle, 100);

    let mut minify_toggle = CheckButton::default().with_label("Minify");
    row.fixed(&minify_toggle, 80);

    row.end();
    flex.fixed(&row, TOOLBAR_HEIGHT);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(TextBuffer::default());
    text_editor.set_text_font(Font::Courier);
    text_editor.set_text_size(14);
    // Width only; the line number colors come from the active theme.
    text_editor.set_linenumber_width(40);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let sender_lang = sender.clone();
    language_choice.set_callback(move |c| {
        if let Some(id) = c.choice() {
            sender_lang.send(Message::LanguageSelected(id));
        }
    });

    let sender_theme = sender.clone();
    theme_toggle.set_callback(move |b| {
        sender_theme.send(Message::ThemeToggled(b.value()));
    });

    // Fires only when checked; unchecking happens programmatically once
    // the minify run completes.
    let sender_minify = sender.clone();
    minify_toggle.set_callback(move |b| {
        if b.value() {
            sender_minify.send(Message::MinifyRequested);
        }
    });

    // Cover the whole window: the editor grabs drops over its own area,
    // the window handler picks up drops landing on the toolbar.
    install_drop_target(&mut text_editor, sender);
    install_drop_target(&mut wind, sender);

    let sender_close = sender.clone();
    wind.set_callback(move |_| {
        sender_close.send(Message::Quit);
    });

    MainWidgets {
        wind,
        flex,
        toolbar: ToolBar {
            row,
            language_choice,
            theme_toggle,
            minify_toggle,
        },
        text_editor,
    }
}

/// Route file drops on `widget` to the channel.
///
/// FLTK delivers the dropped payload through a Paste event, which
/// clipboard pastes use as well; the flag keeps the two apart. Only the
/// first dropped file is taken, the rest of the payload is ignored.
fn install_drop_target<W>(widget: &mut W, sender: &Sender<Message>)
where
    W: WidgetBase,
{
    let sender = sender.clone();
    let mut dnd_active = false;
    widget.handle(move |_, event| match event {
        Event::DndEnter | Event::DndDrag | Event::DndRelease => {
            dnd_active = true;
            true
        }
        Event::DndLeave => {
            dnd_active = false;
            true
        }
        Event::Paste => {
            if !dnd_active {
                return false;
            }
            dnd_active = false;
            let payload = app::event_text();
            if let Some(path) = file_drop::dropped_paths(&payload).into_iter().next() {
                sender.send(Message::FileDropped(path));
            }
            true
        }
        _ => false,
    });
}
