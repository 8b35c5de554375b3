use std::io::Write;

use anyhow::Result;
use midining_client::ChatService;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    config::Config,
    screens::{ChatOverlay, render_messages},
};

const EXIT: &str = "/exit";

pub async fn chat(config: Config, message: Option<String>) -> Result<()> {
    let client = super::client(&config)?;
    let mut overlay = ChatOverlay::default();
    overlay.toggle();

    match message {
        Some(message) => {
            let added = overlay.send(&client, &message).await;
            let start = overlay.messages.len() - added;
            print!("{}", render_messages(&overlay.messages[start..])?);
        }
        None => chat_stdio(&mut overlay, &client).await?,
    }

    Ok(())
}

/// Runs the overlay against the terminal until `/exit` or end of input.
pub async fn chat_stdio(overlay: &mut ChatOverlay, service: &dyn ChatService) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    converse(overlay, service, stdin, &mut stdout).await
}

/// Prints the transcript so far, then one exchange per input line. Only
/// bubbles added by each exchange are printed.
pub async fn converse<R, W>(
    overlay: &mut ChatOverlay,
    service: &dyn ChatService,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render_messages(&overlay.messages)?)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if line.trim() == EXIT {
            break;
        }

        let added = overlay.send(service, &line).await;
        let start = overlay.messages.len() - added;
        write!(out, "{}", render_messages(&overlay.messages[start..])?)?;
    }

    Ok(())
}
