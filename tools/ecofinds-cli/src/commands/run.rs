//! The interactive marketplace loop.

use std::path::Path;

use anyhow::{bail, Result};
use ecofinds_app::{AppState, Command};
use ecofinds_session::ImageCandidate;
use tracing::debug;

use super::RunArgs;
use crate::context::Context;
use crate::screens::{self, UiAction};

/// Run the interactive marketplace until the user quits.
pub async fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive marketplace does not support --json");
    }

    let mut state = ctx.app_state();

    if let Some(email) = args.email {
        state.dispatch(Command::Login {
            email,
            password: String::new(),
        });
    }

    loop {
        for notice in state.drain_notices() {
            ctx.output.notice(&notice);
        }

        let action = screens::show(&state.view(), ctx)?;
        match action {
            UiAction::Command(command) => {
                state.dispatch(command);
            }
            UiAction::Batch(commands) => {
                for command in commands {
                    state.dispatch(command);
                }
            }
            UiAction::UploadPhoto(path) => upload_photo(&mut state, &path, ctx).await,
            UiAction::Quit => break,
        }
    }

    ctx.output.info("Goodbye!");
    Ok(())
}

/// Read a picked image and set it as the profile picture, with a spinner
/// while the file is read.
async fn upload_photo(state: &mut AppState, path: &Path, ctx: &Context) {
    let outcome = match ImageCandidate::from_path(path).await {
        Ok(candidate) => {
            let Ok(read) = state.begin_photo_upload(candidate) else {
                return;
            };
            let spinner = ctx.output.spinner(&format!("Uploading {}", read.file_name()));
            let outcome = read.run().await;
            spinner.finish_and_clear();
            outcome
        }
        Err(e) => {
            ctx.output.debug(&format!("Cannot open {}: {:?}", path.display(), e));
            Err(e)
        }
    };

    if state.finish_photo_upload(outcome).is_ok() {
        debug!(path = %path.display(), "profile picture replaced");
    }
}
