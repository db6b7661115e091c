use std::fmt;

/// Top level choices offered by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Login,
    Register,
    Quit,
}

impl Menu {
    /// Display order of the selection prompt
    pub const ALL: [Menu; 3] = [Menu::Login, Menu::Register, Menu::Quit];
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Menu::Login => "Login",
            Menu::Register => "Register",
            Menu::Quit => "Quit",
        };
        f.write_str(label)
    }
}
