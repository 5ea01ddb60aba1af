//! Navigation state for the presentation layer.

/// Which screen the presentation layer should render.
///
/// Driven purely by which board operation was last invoked: creating a bounty
/// returns to `Home`, selecting one switches to `Details`, opening the
/// creation form switches to `Create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Create,
    Details,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Create => "create",
            View::Details => "details",
        }
    }
}
