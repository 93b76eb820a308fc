use std::fmt;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    NewProject,
    BuildProject,
    Settings,
    ViewLog,
    Exit,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::NewProject,
        MenuAction::BuildProject,
        MenuAction::Settings,
        MenuAction::ViewLog,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::NewProject => "📁 New Project",
            MenuAction::BuildProject => "🔨 Build Project",
            MenuAction::Settings => "⚙️ Settings",
            MenuAction::ViewLog => "📜 View Log",
            MenuAction::Exit => "[Exit]",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
