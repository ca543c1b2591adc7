use crate::cli::{
    actions::{auth, navigate, portal, recommend, Action, Portal},
    globals::GlobalArgs,
};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<String> {
    // Offline; no client or session needed.
    if let Action::Recommend { problem } = action {
        return Ok(recommend::recommend(problem));
    }

    let ctx = Portal::from_globals(globals)?;
    execute_with(&ctx, action).await
}

/// Execute against an existing portal context.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute_with(ctx: &Portal, action: Action) -> Result<String> {
    match action {
        Action::Login(args) => auth::login(ctx, args).await,
        Action::Logout => auth::logout(ctx),
        Action::WhoAmI => Ok(auth::whoami(ctx)),
        Action::Register(form) => auth::register(ctx, form).await,
        Action::Open { path } => navigate::open(ctx, &path).await,
        Action::Menu => Ok(navigate::menu(ctx)),
        Action::Notifications => portal::notifications(ctx).await,
        Action::Doctors { specialization } => portal::doctors(ctx, specialization).await,
        Action::Availability { doctor_id } => portal::availability(ctx, &doctor_id).await,
        Action::Appointments => portal::appointments(ctx).await,
        Action::Book(args) => portal::book(ctx, args).await,
        Action::Reports => portal::reports(ctx).await,
        Action::Recommend { problem } => Ok(recommend::recommend(problem)),
    }
}
