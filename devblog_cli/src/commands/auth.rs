//! The `auth` subcommand: session lookup and the account flows.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use devblog_lib::auth::{self, EmailVerification};
use devblog_lib::CachedClient;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the current session
    Me,
    /// Request a password-reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Set a new password using an emailed token
    ResetPassword {
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    /// Redeem an email-verification token
    VerifyEmail {
        #[arg(long)]
        token: Option<String>,
    },
}

pub async fn run(args: &AuthArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    match &args.command {
        AuthCommands::Login { email, password } => {
            let user = auth::login(client.api(), email, password).await?;
            println!("Signed in as {} <{}>", user.name, user.email);
        }
        AuthCommands::Signup {
            name,
            email,
            password,
        } => {
            let user = auth::signup(client.api(), name, email, password).await?;
            println!("Account created for {} <{}>", user.name, user.email);
        }
        AuthCommands::Me => {
            let state = auth::current_session(client.api()).await;
            if state.has_session_error() {
                bail!(
                    "session lookup failed: {}",
                    state.session_error.as_deref().unwrap_or("unknown error")
                );
            }
            match (&state.user, format) {
                (Some(user), OutputFormat::Json) => print_json(user)?,
                (Some(user), OutputFormat::Table) => {
                    println!(
                        "{} <{}> ({})",
                        user.name,
                        user.email,
                        user.role.map(|r| r.to_string()).unwrap_or_default()
                    );
                }
                (None, _) => println!("Not signed in."),
            }
        }
        AuthCommands::ForgotPassword { email } => {
            auth::request_password_reset(client.api(), email).await?;
            println!(
                "If an account exists for {email}, you will receive a password reset link shortly."
            );
        }
        AuthCommands::ResetPassword {
            token,
            password,
            confirm,
        } => {
            auth::reset_password(client.api(), token.as_deref(), password, confirm).await?;
            println!("Password reset successful. You can now log in with your new password.");
        }
        AuthCommands::VerifyEmail { token } => {
            match auth::verify_email(client.api(), token.as_deref()).await {
                EmailVerification::Verified => println!("Email verified."),
                EmailVerification::Failed { message } => bail!("{message}"),
            }
        }
    }

    Ok(())
}
