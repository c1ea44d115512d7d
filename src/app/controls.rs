/// A control showing one selected identifier out of a list.
pub trait SelectControl {
    fn selected_id(&self) -> Option<String>;
    /// Select `id`, appending it to the list first when it is not present.
    fn select_id(&mut self, id: &str);
}

/// A two-state checkbox control. The app only ever writes it; reads go
/// through the widget callbacks.
pub trait ToggleControl {
    fn set_on(&mut self, on: bool);
}
