use log::{info, warn};
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::activity::{ActivityLog, Clock};
use crate::auth::LoginSystem;
use crate::session::SessionOutcome;

/// Runs the interactive login loop.
///
/// - Reads one trimmed username and one trimmed password line per attempt.
/// - Echoes the activity entries each attempt produces as soon as it finishes.
/// - Stops on the first success, after `max_attempts` failures, or at end of input.
/// - Always finishes by writing the full activity log.
pub async fn run_session<R, W, C>(
    mut reader: R,
    writer: &mut W,
    system: &mut LoginSystem<ActivityLog<C>>,
    max_attempts: u32,
) -> io::Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Clock,
{
    writer
        .write_all(
            format!(
                "Welcome to the system demo.\nYou will have up to {max_attempts} attempts to log in.\n\n"
            )
            .as_bytes(),
        )
        .await?;

    let mut outcome = SessionOutcome::Exhausted;

    for attempt in 1..=max_attempts {
        writer
            .write_all(format!("Attempt {attempt} of {max_attempts}\n").as_bytes())
            .await?;

        let Some(username) = prompt(&mut reader, writer, "Enter username: ").await? else {
            outcome = SessionOutcome::InputClosed;
            break;
        };
        let Some(password) = prompt(&mut reader, writer, "Enter password: ").await? else {
            outcome = SessionOutcome::InputClosed;
            break;
        };

        info!("Login attempt {} of {} for {:?}", attempt, max_attempts, username);
        let mark = system.sink().len();
        let accepted = system.authenticate(&username, &password);

        for entry in system.sink().entries_since(mark) {
            writer.write_all(format!("{entry}\n").as_bytes()).await?;
        }

        if accepted {
            writer
                .write_all(format!("Login successful. Welcome, {username}!\n\n").as_bytes())
                .await?;
            outcome = SessionOutcome::Authenticated(username);
            break;
        }

        writer.write_all(b"Login failed. Try again.\n\n").await?;
    }

    match outcome {
        SessionOutcome::Exhausted => {
            warn!("Login attempts exhausted");
            writer
                .write_all(b"Too many failed attempts. Exiting...\n\n")
                .await?;
        }
        SessionOutcome::InputClosed => {
            info!("Input closed before login completed");
            writer.write_all(b"\nInput closed. Exiting...\n\n").await?;
        }
        SessionOutcome::Authenticated(ref user) => {
            info!("User {:?} logged in", user);
        }
    }

    writer.write_all(b"Activity log:\n").await?;
    writer.write_all(system.sink().dump().as_bytes()).await?;
    writer.flush().await?;

    Ok(outcome)
}

/// Writes `label`, then reads one line. Returns `None` at end of input.
async fn prompt<R, W>(reader: &mut R, writer: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    match reader.read_line(&mut line).await? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}
