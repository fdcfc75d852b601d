use clap::Subcommand;
use focusloop_core::storage::Database;

use super::CliResult;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account and sign it in
    Signup {
        username: String,
        password: String,
    },
    /// Sign in with an existing account
    Signin {
        username: String,
        password: String,
    },
    /// Clear the current session
    Signout,
    /// Print the signed-in username, if any
    Whoami,
}

pub fn run(action: AuthAction) -> CliResult {
    let db = Database::open()?;
    let mut store = db.load_credentials()?;

    match action {
        AuthAction::Signup { username, password } => {
            store.sign_up(&username, &password)?;
            db.save_credentials(&store)?;
            println!("signed in as {}", store.current_user().unwrap_or_default());
        }
        AuthAction::Signin { username, password } => {
            store.sign_in(&username, &password)?;
            db.save_credentials(&store)?;
            println!("signed in as {}", store.current_user().unwrap_or_default());
        }
        AuthAction::Signout => {
            store.sign_out();
            db.save_credentials(&store)?;
            println!("signed out");
        }
        AuthAction::Whoami => match store.current_user() {
            Some(user) => println!("{user}"),
            None => println!("not signed in"),
        },
    }
    Ok(())
}
