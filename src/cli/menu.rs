use anyhow::Result;

use crate::{config::Config, screens::MenuScreen};

pub async fn menu(config: Config, hall: Option<String>, color: bool) -> Result<()> {
    let client = super::client(&config)?;

    let mut screen = MenuScreen::default();
    screen.mount(&client).await;

    if let Some(hall) = hall {
        screen.retain_hall(&hall);
    }

    println!("{}", screen.render(color)?);
    super::print_alert(screen.alert.as_ref());

    Ok(())
}
