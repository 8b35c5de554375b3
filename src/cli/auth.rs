use anyhow::Result;

use crate::{
    config::Config,
    navigation::Route,
    screens::{AuthMode, AuthScreen},
};

pub async fn authenticate(
    config: Config,
    mode: AuthMode,
    uniqname: String,
    password: String,
) -> Result<Route> {
    let client = super::client(&config)?;

    let mut screen = AuthScreen::new(mode);
    let next = screen.submit(&client, &uniqname, &password).await;

    println!("{}", screen.render()?);
    if next != mode.route() {
        super::print_navigation(next);
    }

    Ok(next)
}
