use anyhow::{anyhow, bail, Context, Result};
use idjassa_core::models::{AnnonceFilters, VerifyOtp};
use idjassa_core::{ApiClient, ApiOutcome, Config};
use serde_json::Value;

use crate::listing;

pub const USAGE: &str = "\
Usage: idjassa <command>

  send-otp [telephone]            Text a sign-in code
  login <telephone> <code> [prenom nom]
                                  Check the code and keep the session
  me                              Show the signed-in profile
  logout                          Forget the session
  categories                      List categories
  annonces [key=value ...]        Search listings (cat, ville, q, min_prix,
                                  max_prix, badge, sort, page)
  annonce <id>                    Show one listing
  rdv                             List my appointments
  rdv-confirm <id>                Confirm an appointment
  notifications                   List notifications
  notifications-read              Mark every notification read
  admin-stats                     Moderation dashboard figures";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SendOtp(Option<String>),
    Login(VerifyOtp),
    Me,
    Logout,
    Categories,
    Annonces(AnnonceFilters),
    Annonce(String),
    Rdv,
    RdvConfirm(String),
    Notifications,
    NotificationsRead,
    AdminStats,
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let (name, rest) = args.split_first().ok_or("Missing command")?;
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
        let command = match (name.as_str(), rest.as_slice()) {
            ("send-otp", []) => Command::SendOtp(None),
            ("send-otp", [telephone]) => Command::SendOtp(Some(telephone.to_string())),
            ("login", [telephone, code]) => Command::Login(VerifyOtp::new(*telephone, *code)),
            ("login", [telephone, code, prenom, nom]) => {
                Command::Login(VerifyOtp::new(*telephone, *code).with_name(*prenom, *nom))
            }
            ("me", []) => Command::Me,
            ("logout", []) => Command::Logout,
            ("categories", []) => Command::Categories,
            ("annonces", pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|pair| {
                        pair.split_once('=')
                            .ok_or_else(|| format!("Expected key=value, got {:?}", pair))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Command::Annonces(AnnonceFilters::from_pairs(pairs).map_err(|e| e.to_string())?)
            }
            ("annonce", [id]) => Command::Annonce(id.to_string()),
            ("rdv", []) => Command::Rdv,
            ("rdv-confirm", [id]) => Command::RdvConfirm(id.to_string()),
            ("notifications", []) => Command::Notifications,
            ("notifications-read", []) => Command::NotificationsRead,
            ("admin-stats", []) => Command::AdminStats,
            (name, _) => return Err(format!("Unknown command or wrong arguments: {}", name)),
        };
        Ok(command)
    }
}

pub async fn run(command: Command, client: &ApiClient, config: &mut Config) -> Result<()> {
    match command {
        Command::SendOtp(telephone) => {
            let telephone = telephone
                .or_else(|| config.last_telephone.clone())
                .ok_or_else(|| anyhow!("No phone number given and none remembered"))?;
            settle(client.auth().send_otp(&telephone).await)?;
            config.last_telephone = Some(telephone.clone());
            config.save().context("Failed to remember phone number")?;
            println!("Code sent to {}", telephone);
        }
        Command::Login(request) => {
            let response = settle(client.auth().verify_otp(&request).await)?;
            match response.user {
                Some(user) if response.token.as_deref().is_some_and(|t| !t.is_empty()) => {
                    println!("Signed in as {}", user.full_name());
                }
                _ => bail!("The server did not open a session for this code"),
            }
        }
        Command::Me => print_json(settle(client.auth().me().await)?)?,
        Command::Logout => {
            let navigation = client.auth().logout()?;
            println!("Signed out ({})", navigation.location());
        }
        Command::Categories => print_json(settle(client.categories().list().await)?)?,
        Command::Annonces(filters) => {
            let page = settle(client.annonces().list(&filters).await)?;
            listing::print_annonces(&page);
        }
        Command::Annonce(id) => print_json(settle(client.annonces().get(&id).await)?)?,
        Command::Rdv => print_json(settle(client.rdv().mine().await)?)?,
        Command::RdvConfirm(id) => print_json(settle(client.rdv().confirm(&id).await)?)?,
        Command::Notifications => print_json(settle(client.notifications().list().await)?)?,
        Command::NotificationsRead => {
            print_json(settle(client.notifications().mark_all_read().await)?)?
        }
        Command::AdminStats => print_json(settle(client.admin().stats().await)?)?,
    }
    Ok(())
}

/// Turn an outcome into a result, explaining what to do on a missing session
fn settle<T>(outcome: ApiOutcome<T>) -> Result<T> {
    match outcome {
        ApiOutcome::Ok(value) => Ok(value),
        ApiOutcome::Unauthenticated(redirect) => bail!(
            "Sign-in required: run `idjassa send-otp` then `idjassa login` (web: {})",
            redirect.location()
        ),
        ApiOutcome::Failed(err) => Err(err.into()),
    }
}

fn print_json(value: Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
