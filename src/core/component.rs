//! Component trait.

/// Renderable component interface.
pub trait Component {
    /// Render to a list of lines at the given width.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Handle a single key sequence.
    fn handle_input(&mut self, _data: &str) {}

    /// Invalidate any cached state.
    fn invalidate(&mut self) {}
}
