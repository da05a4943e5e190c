//! Auth command handlers - session establishment and teardown
//!
//! Thin wrappers over the auth service; credential validation is entirely
//! server-side. A valid session must exist before analyze/history/export
//! calls succeed.

use crate::cli::{CredentialArgs, ResetPasswordArgs};
use crate::client::ApiClient;
use crate::commands::{runtime, CommandContext};
use crate::error::Result;

/// Run the login command
pub fn run_login(args: &CredentialArgs, client: &ApiClient, _ctx: &CommandContext) -> Result<String> {
    runtime()?.block_on(client.login(&args.email, &args.password))?;
    Ok(format!("Logged in as {}\n", args.email))
}

/// Run the signup command
pub fn run_signup(
    args: &CredentialArgs,
    client: &ApiClient,
    _ctx: &CommandContext,
) -> Result<String> {
    runtime()?.block_on(client.signup(&args.email, &args.password))?;
    Ok(format!("Account created for {}\n", args.email))
}

/// Run the logout command
pub fn run_logout(client: &ApiClient, _ctx: &CommandContext) -> Result<String> {
    runtime()?.block_on(client.logout())?;
    Ok("Logged out\n".to_string())
}

/// Run the reset-password command
pub fn run_reset_password(
    args: &ResetPasswordArgs,
    client: &ApiClient,
    _ctx: &CommandContext,
) -> Result<String> {
    runtime()?.block_on(client.reset_password(&args.email, &args.new_password))?;
    Ok(format!("Password reset for {}\n", args.email))
}
