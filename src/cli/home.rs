use anyhow::Result;
use midining_location::{DeniedLocation, FixedLocation, LocationProvider};
use midining_shared::Coordinate;

use crate::{config::Config, screens::HomeScreen};

/// Where the home screen reads the device position from.
pub enum PositionSource {
    Config,
    At(Coordinate),
    Disabled,
}

pub async fn home(config: Config, source: PositionSource, chat: bool) -> Result<()> {
    let client = super::client(&config)?;
    let provider: Box<dyn LocationProvider> = match source {
        PositionSource::Config => config.location.provider(),
        PositionSource::At(position) => Box::new(FixedLocation(position)),
        PositionSource::Disabled => Box::new(DeniedLocation),
    };

    let mut screen = HomeScreen::new(config.hall_directory(), config.location.fallback());
    screen.mount(&client, provider.as_ref()).await;

    println!("{}", screen.render()?);
    super::print_alert(screen.alert.as_ref());

    if chat {
        screen.chat.toggle();
        super::chat_stdio(&mut screen.chat, &client).await?;
        screen.chat.toggle();
    }

    Ok(())
}
