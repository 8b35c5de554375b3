use strum::{Display, VariantArray};

/// In-app destinations.
#[derive(VariantArray, Display, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    SignUp,
    About,
    Menu,
}

impl Route {
    /// Destinations listed in the header bar, in display order.
    pub const HEADER: [Route; 4] = [Route::Home, Route::Login, Route::About, Route::Menu];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Login => "/login",
            Route::SignUp => "/signup",
            Route::About => "/about",
            Route::Menu => "/menu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::SignUp => "Sign Up",
            Route::About => "About Me",
            Route::Menu => "Menu",
        }
    }

    /// CLI subcommand that opens this destination.
    pub fn command(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::SignUp => "signup",
            Route::About => "about",
            Route::Menu => "menu",
        }
    }
}

/// Header bar shown on top of every screen, the current one bracketed.
pub fn header(current: Route) -> String {
    let links = Route::HEADER
        .iter()
        .map(|route| {
            if *route == current {
                format!("[{}]", route.label())
            } else {
                route.label().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!("MI AI Dining    {links}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_marks_current_route() {
        assert_eq!(
            header(Route::About),
            "MI AI Dining    Home | Login | [About Me] | Menu"
        );
    }

    #[test]
    fn paths_are_unique() {
        let mut paths = Route::VARIANTS.iter().map(Route::path).collect::<Vec<_>>();
        paths.sort();
        paths.dedup();

        assert_eq!(paths.len(), Route::VARIANTS.len());
    }
}
