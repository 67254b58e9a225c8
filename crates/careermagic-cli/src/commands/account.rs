use std::path::PathBuf;

use anyhow::Result;

use account_store::{AuthService, JsonUserStore};

pub enum AccountAction {
    Register {
        email: String,
        password: String,
        name: String,
    },
    Login { email: String, password: String },
    Logout,
    Whoami,
}

pub fn execute(config_path: Option<PathBuf>, action: AccountAction) -> Result<()> {
    let (config, paths) = super::load_context(config_path)?;

    let store = if config.accounts.seed_demo_user {
        JsonUserStore::open_with_demo_user(&paths.users_db_path)?
    } else {
        JsonUserStore::open(&paths.users_db_path)?
    };
    let mut auth = AuthService::new(store, paths.session_path.clone());

    match action {
        AccountAction::Register {
            email,
            password,
            name,
        } => {
            let user = auth.register(&email, &password, &name)?;
            println!(
                "Welcome, {}!",
                user.display_name.as_deref().unwrap_or("user")
            );
            Ok(())
        }
        AccountAction::Login { email, password } => {
            let user = auth.login(&email, &password)?;
            println!(
                "Welcome back, {}!",
                user.display_name.as_deref().unwrap_or("user")
            );
            Ok(())
        }
        AccountAction::Logout => {
            auth.logout()?;
            println!("You have been successfully logged out.");
            Ok(())
        }
        AccountAction::Whoami => {
            match auth.current_session()? {
                Some(session) => {
                    let name = session.user.display_name.as_deref().unwrap_or("user");
                    println!("Signed in as {} ({})", name, session.user.email);
                }
                None => println!("Not signed in."),
            }
            Ok(())
        }
    }
}
