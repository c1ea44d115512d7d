//! FLTK-backed implementations of the toolbar control traits.

use fltk::{button::CheckButton, menu::Choice, prelude::*};

use crate::app::controls::{SelectControl, ToggleControl};

impl SelectControl for Choice {
    fn selected_id(&self) -> Option<String> {
        self.choice()
    }

    fn select_id(&mut self, id: &str) {
        // Ids outside the prepopulated list get appended so the
        // selection always lands on a real entry.
        if self.find_index(id) < 0 {
            self.add_choice(id);
        }
        let index = self.find_index(id);
        if index >= 0 {
            self.set_value(index);
        }
    }
}

impl ToggleControl for CheckButton {
    fn set_on(&mut self, on: bool) {
        self.set_value(on);
    }
}
