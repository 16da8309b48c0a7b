//! Command line interface
//!
//! Every subcommand drives one page controller and prints what the page
//! would show.

pub mod render;

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::config::Settings;
use crate::forms::{LoginForm, PersonList, RegisterForm, TripForm, ValidationErrors};
use crate::models::{CommentId, Person, TripId, TripStatus};
use crate::pages::{
    AddTripPage, EditTripPage, LoginPage, ProfilePage, RegisterPage, Route, StatusFilter,
    TripDetailsPage, TripsListPage,
};
use crate::services::ServiceFactory;
use crate::utils::date::DisplayLocale;
use crate::utils::errors::{Result, SmartAdventuresError};
use crate::utils::helpers::normalize_optional;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan outdoor trips and share them with your emergency contacts")]
pub struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the configured display locale
    #[arg(long, global = true)]
    pub locale: Option<DisplayLocale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log in
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Ten digits, without country code
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user's profile
    Profile,
    /// List the activities and supplies a trip can include
    Catalog,
    #[command(subcommand)]
    Trips(TripsCommand),
    #[command(subcommand)]
    Comments(CommentsCommand),
}

#[derive(Subcommand, Debug)]
pub enum TripsCommand {
    /// List your trips, earliest departure first
    List {
        /// all, active, inactive, completed or overdue
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show a trip with its comments
    Show { id: TripId },
    /// Plan a new trip
    Add(TripFormArgs),
    /// Change an existing trip
    Edit {
        id: TripId,
        #[command(flatten)]
        form: TripFormArgs,
    },
    Delete { id: TripId },
}

#[derive(Subcommand, Debug)]
pub enum CommentsCommand {
    /// Leave a comment on a trip
    Add {
        trip_id: TripId,
        #[arg(long)]
        username: String,
        #[arg(long)]
        text: String,
    },
    Delete { trip_id: TripId, comment_id: CommentId },
}

/// Trip form fields. Values given here override the draft file.
#[derive(Args, Debug, Default)]
pub struct TripFormArgs {
    /// TOML draft with any of the form fields
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    /// YYYY-MM-DDTHH:MM
    #[arg(long)]
    pub departure: Option<String>,
    /// YYYY-MM-DDTHH:MM
    #[arg(long = "return")]
    pub return_date: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub purpose: Option<String>,
    #[arg(long)]
    pub add_info: Option<String>,
    /// Only allowed when editing
    #[arg(long)]
    pub status: Option<TripStatus>,
    /// Toggle an activity, repeatable
    #[arg(long = "activity")]
    pub activities: Vec<String>,
    /// Toggle a supply, repeatable
    #[arg(long = "supply")]
    pub supplies: Vec<String>,
    #[arg(long = "add-participant", value_name = "FIRST,LAST,EMAIL,PHONE")]
    pub add_participants: Vec<String>,
    /// Row number as shown by `trips show`, starting at 0
    #[arg(long = "remove-participant", value_name = "INDEX")]
    pub remove_participants: Vec<usize>,
    #[arg(long = "add-contact", value_name = "FIRST,LAST,EMAIL,PHONE")]
    pub add_contacts: Vec<String>,
    #[arg(long = "remove-contact", value_name = "INDEX")]
    pub remove_contacts: Vec<usize>,
}

impl TripFormArgs {
    /// Build the form for a new trip
    pub async fn new_form(&self) -> Result<TripForm> {
        let mut form = match &self.file {
            Some(path) => load_draft(path).await?,
            None => TripForm::new(),
        };
        if self.status.is_some() || form.status.is_some() {
            return Err(SmartAdventuresError::InvalidInput(
                "Status can only be set when editing a trip".to_string(),
            ));
        }
        self.apply(&mut form)?;
        Ok(form)
    }

    /// Apply the edits on top of a loaded trip
    pub async fn edit_form(&self, mut form: TripForm) -> Result<TripForm> {
        if let Some(path) = &self.file {
            let status = form.status;
            form = load_draft(path).await?;
            form.status = form.status.or(status);
        }
        self.apply(&mut form)?;
        Ok(form)
    }

    fn apply(&self, form: &mut TripForm) -> Result<()> {
        if let Some(name) = &self.name {
            form.name = name.trim().to_string();
        }
        if let Some(departure) = &self.departure {
            form.departure_date = departure.trim().to_string();
        }
        if let Some(return_date) = &self.return_date {
            form.return_date = return_date.trim().to_string();
        }
        for (value, field) in [
            (&self.location, &mut form.location),
            (&self.purpose, &mut form.purpose),
            (&self.add_info, &mut form.add_info),
        ] {
            if value.is_some() {
                *field = normalize_optional(value.clone()).unwrap_or_default();
            }
        }
        if let Some(status) = self.status {
            form.status = Some(status);
        }

        for label in &self.activities {
            form.toggle_activity(label)?;
        }
        for label in &self.supplies {
            form.toggle_supply(label)?;
        }

        apply_rows(form, PersonList::Participants, &self.remove_participants, &self.add_participants)?;
        apply_rows(form, PersonList::EmergencyContacts, &self.remove_contacts, &self.add_contacts)?;
        Ok(())
    }
}

async fn load_draft(path: &Path) -> Result<TripForm> {
    let contents = tokio::fs::read_to_string(path).await?;
    let form: TripForm = toml::from_str(&contents)?;
    debug!(path = %path.display(), "Loaded trip draft");
    Ok(form)
}

/// Remove rows (indices refer to the list before any change), then fill in new ones
fn apply_rows(form: &mut TripForm, list: PersonList, remove: &[usize], add: &[String]) -> Result<()> {
    let mut indices = remove.to_vec();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    for index in indices {
        if !form.remove_person(list, index) {
            return Err(SmartAdventuresError::InvalidInput(format!(
                "There is no row {} in {}",
                index,
                list.field()
            )));
        }
    }

    for entry in add {
        let person = parse_person(entry)?;
        // Reuse the blank row a new form starts with
        let index = match form.people(list).iter().position(Person::is_blank) {
            Some(index) => index,
            None => form.add_person(list),
        };
        if let Some(row) = form.person_mut(list, index) {
            *row = person;
        }
    }
    Ok(())
}

/// Parse `First,Last,email,phone`; trailing parts may be left out
pub fn parse_person(entry: &str) -> Result<Person> {
    let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
    if parts.len() > 4 {
        return Err(SmartAdventuresError::InvalidInput(format!(
            "Expected FIRST,LAST,EMAIL,PHONE but got: {}",
            entry
        )));
    }
    let part = |i: usize| parts.get(i).copied().unwrap_or_default().to_string();
    Ok(Person {
        first_name: part(0),
        last_name: part(1),
        email: part(2),
        phone: part(3),
    })
}

/// Run a parsed command against the backend
pub async fn run(command: Command, services: &ServiceFactory, locale: DisplayLocale) -> Result<()> {
    let session = &services.session;

    match command {
        Command::Login { email, password } => {
            if Route::Login.resolve(session) != Route::Login {
                println!("Already logged in.");
                return Ok(());
            }
            let mut page = LoginPage::new(services, LoginForm::new(email, password));
            let next = page.submit().await?;
            info!(next = %next, "Login complete");
            println!("Logged in.");
        }
        Command::Register { first_name, last_name, email, phone, password, confirm_password } => {
            if Route::Register.resolve(session) != Route::Register {
                println!("Already logged in.");
                return Ok(());
            }
            let form = RegisterForm { first_name, last_name, email, phone, password, confirm_password };
            let mut page = RegisterPage::new(services, form);
            page.submit().await?;
            println!("Account created, you are now logged in.");
        }
        Command::Logout => {
            let mut page = ProfilePage::new(services);
            page.logout().await?;
            println!("Logged out.");
        }
        Command::Profile => {
            require_access(Route::Profile, services)?;
            let mut page = ProfilePage::new(services);
            match page.load().await? {
                Route::Profile => {
                    if let Some(profile) = &page.profile {
                        print!("{}", render::profile(profile));
                    }
                }
                _ => {
                    return Err(SmartAdventuresError::NotAuthenticated);
                }
            }
        }
        Command::Catalog => print!("{}", render::catalog()),
        Command::Trips(command) => run_trips(command, services, locale).await?,
        Command::Comments(command) => run_comments(command, services, locale).await?,
    }
    Ok(())
}

async fn run_trips(command: TripsCommand, services: &ServiceFactory, locale: DisplayLocale) -> Result<()> {
    match command {
        TripsCommand::List { status } => {
            require_access(Route::Trips, services)?;
            let mut page = TripsListPage::new(services);
            page.load().await?;
            page.select_filter(status);
            print!("{}", render::trip_table(&page.visible_trips(), locale));
        }
        TripsCommand::Show { id } => {
            let mut page = TripDetailsPage::new(services, id);
            page.load().await?;
            print!("{}", render::trip_page(&page, locale, Utc::now()));
        }
        TripsCommand::Add(args) => {
            require_access(Route::AddTrip, services)?;
            let mut page = AddTripPage::with_form(services, args.new_form().await?);
            let result = page.submit().await;
            let next = result.map_err(|e| explain(e, page.field_errors.as_ref()))?;
            println!("Trip saved: {}", next);
        }
        TripsCommand::Edit { id, form } => {
            require_access(Route::EditTrip(id), services)?;
            let mut page = EditTripPage::new(services, id);
            page.load().await?;
            page.form = form.edit_form(page.form.clone()).await?;
            let result = page.submit().await;
            let next = result.map_err(|e| explain(e, page.field_errors.as_ref()))?;
            println!("Trip saved: {}", next);
        }
        TripsCommand::Delete { id } => {
            require_access(Route::Trips, services)?;
            let mut page = TripsListPage::new(services);
            page.delete_trip(id).await?;
            println!("Trip {} deleted. {} trip(s) left.", id, page.user_trips.len());
        }
    }
    Ok(())
}

async fn run_comments(command: CommentsCommand, services: &ServiceFactory, locale: DisplayLocale) -> Result<()> {
    match command {
        CommentsCommand::Add { trip_id, username, text } => {
            let mut page = TripDetailsPage::new(services, trip_id);
            page.comment_form.username = username;
            page.comment_form.text = text;
            let result = page.post_comment().await;
            result.map_err(|e| explain(e, page.field_errors.as_ref()))?;
            print!("{}", render::comments(&page, locale, Utc::now()));
        }
        CommentsCommand::Delete { trip_id, comment_id } => {
            let mut page = TripDetailsPage::new(services, trip_id);
            page.delete_comment(comment_id).await?;
            print!("{}", render::comments(&page, locale, Utc::now()));
        }
    }
    Ok(())
}

fn require_access(route: Route, services: &ServiceFactory) -> Result<()> {
    match route.resolve(&services.session) {
        Route::Login => Err(SmartAdventuresError::NotAuthenticated),
        _ => Ok(()),
    }
}

/// Print field errors before handing the error back
fn explain(error: SmartAdventuresError, field_errors: Option<&ValidationErrors>) -> SmartAdventuresError {
    if let Some(errors) = field_errors {
        eprint!("{}", render::validation_errors(errors));
    }
    error
}

/// Effective display locale: command line first, then settings
pub fn display_locale(cli: &Cli, settings: &Settings) -> DisplayLocale {
    cli.locale.unwrap_or_else(|| settings.display_locale())
}
