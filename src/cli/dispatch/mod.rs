use crate::{
    cli::{
        actions::{auth::LoginArgs, portal::BookArgs, Action},
        commands::{self, auth, portal},
        globals::GlobalArgs,
    },
    features::{
        auth::{signup::SignupForm, Role},
        doctors::{Problem, Specialization},
    },
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if the API URL is missing.
pub fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = matches
        .get_one::<String>(commands::ARG_API_URL)
        .cloned()
        .context("missing required argument: --api-url")?;

    let mut globals = GlobalArgs::new(api_url);
    if let Some(path) = matches.get_one::<String>(commands::ARG_SESSION_FILE) {
        globals.set_session_file(path);
    }
    if let Some(timeout) = matches.get_one::<u64>(commands::ARG_TIMEOUT) {
        globals.set_timeout(*timeout);
    }

    Ok(globals)
}

/// # Errors
/// Returns an error if required arguments are missing or a label does not
/// name a known problem, specialization or role.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        return Err(anyhow!("missing subcommand"));
    };

    let action = match name {
        auth::CMD_LOGIN => Action::Login(LoginArgs {
            email: required(sub, auth::ARG_EMAIL)?,
            password: SecretString::from(required(sub, auth::ARG_PASSWORD)?),
            from: sub.get_one::<String>(auth::ARG_FROM).cloned(),
        }),
        auth::CMD_LOGOUT => Action::Logout,
        auth::CMD_WHOAMI => Action::WhoAmI,
        auth::CMD_REGISTER => Action::Register(signup_form(sub)?),
        portal::CMD_OPEN => Action::Open {
            path: required(sub, portal::ARG_PATH)?,
        },
        portal::CMD_MENU => Action::Menu,
        portal::CMD_NOTIFICATIONS => Action::Notifications,
        portal::CMD_DOCTORS => Action::Doctors {
            specialization: specialization(sub)?,
        },
        portal::CMD_AVAILABILITY => Action::Availability {
            doctor_id: required(sub, portal::ARG_DOCTOR_ID)?,
        },
        portal::CMD_APPOINTMENTS => Action::Appointments,
        portal::CMD_BOOK => Action::Book(BookArgs {
            doctor_id: required(sub, portal::ARG_DOCTOR_ID)?,
            problem: required(sub, portal::ARG_PROBLEM)?.parse::<Problem>()?,
            specialization: specialization(sub)?,
            scheduled_time: required(sub, portal::ARG_TIME)?,
        }),
        portal::CMD_REPORTS => Action::Reports,
        portal::CMD_RECOMMEND => Action::Recommend {
            problem: sub
                .get_one::<String>(portal::ARG_PROBLEM)
                .map(|label| label.parse::<Problem>())
                .transpose()?,
        },
        other => return Err(anyhow!("unknown command: {other}")),
    };

    Ok(action)
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn specialization(matches: &ArgMatches) -> Result<Option<Specialization>> {
    Ok(matches
        .get_one::<String>(portal::ARG_SPECIALIZATION)
        .map(|label| label.parse::<Specialization>())
        .transpose()?)
}

fn signup_form(matches: &ArgMatches) -> Result<SignupForm> {
    let role = required(matches, auth::ARG_ROLE)?.parse::<Role>()?;

    Ok(SignupForm {
        username: required(matches, auth::ARG_USERNAME)?,
        email: required(matches, auth::ARG_EMAIL)?,
        password: SecretString::from(required(matches, auth::ARG_PASSWORD)?),
        role,
        avatar: matches
            .get_one::<String>(auth::ARG_AVATAR)
            .cloned()
            .unwrap_or_default(),
        phone: matches
            .get_one::<String>(auth::ARG_PHONE)
            .cloned()
            .unwrap_or_default(),
        specialization: matches.get_one::<String>(auth::ARG_SPECIALIZATION).cloned(),
        experience: matches.get_one::<u32>(auth::ARG_EXPERIENCE).copied(),
        age: matches.get_one::<u32>(auth::ARG_AGE).copied(),
        secret: matches
            .get_one::<String>(auth::ARG_SECRET)
            .cloned()
            .map(SecretString::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Action> {
        let mut argv = vec!["medinsta"];
        argv.extend_from_slice(args);
        handler(&commands::new().get_matches_from(argv))
    }

    #[test]
    fn test_globals() {
        temp_env::with_vars(
            [
                ("MEDINSTA_API_URL", None::<&str>),
                ("MEDINSTA_SESSION_FILE", None),
                ("MEDINSTA_TIMEOUT", None),
            ],
            || {
                let matches = commands::new().get_matches_from(vec![
                    "medinsta",
                    "whoami",
                    "--session-file",
                    "/tmp/session.json",
                    "--timeout",
                    "4",
                ]);
                let globals = globals(&matches).unwrap();
                assert_eq!(globals.api_url, commands::DEFAULT_API_URL);
                assert_eq!(
                    globals.session_file,
                    std::path::PathBuf::from("/tmp/session.json")
                );
                assert_eq!(globals.timeout, 4);
            },
        );
    }

    #[test]
    fn test_book_uses_labels() {
        let action = parse(&[
            "book",
            "--doctor",
            "d-1",
            "--problem",
            "Mental Health",
            "--specialization",
            "Neurologist",
            "--time",
            "2026-03-14T09:30",
        ])
        .unwrap();

        let Action::Book(args) = action else {
            panic!("expected book, got {action:?}");
        };
        assert_eq!(args.problem, Problem::MentalHealth);
        assert_eq!(args.specialization, Some(Specialization::Neurologist));
    }

    #[test]
    fn test_unknown_problem_is_rejected() {
        let err = parse(&["recommend", "Back pain"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown medical problem: Back pain");
    }

    #[test]
    fn test_doctors_with_spaced_label() {
        let action = parse(&["doctors", "-s", "Psychiatrist / Psychologist"]).unwrap();
        assert!(matches!(
            action,
            Action::Doctors {
                specialization: Some(Specialization::PsychiatristPsychologist)
            }
        ));
    }

    #[test]
    fn test_register_doctor() {
        temp_env::with_vars(
            [
                ("MEDINSTA_PASSWORD", None::<&str>),
                ("MEDINSTA_ADMIN_SECRET", None),
            ],
            || {
                let action = parse(&[
                    "register",
                    "--username",
                    "dr-ana",
                    "--email",
                    "ana@clinic.tld",
                    "--password",
                    "pw",
                    "--role",
                    "doctor",
                    "--specialization",
                    "Cardiologist",
                    "--experience",
                    "7",
                    "--age",
                    "41",
                ])
                .unwrap();

                let Action::Register(form) = action else {
                    panic!("expected register, got {action:?}");
                };
                assert_eq!(form.role, Role::Doctor);
                assert_eq!(form.experience, Some(7));
                assert!(form.secret.is_none());
                assert!(form.validate().is_ok());
            },
        );
    }

    #[test]
    fn test_open_and_menu() {
        assert!(matches!(
            parse(&["open", "/profile"]).unwrap(),
            Action::Open { path } if path == "/profile"
        ));
        assert!(matches!(parse(&["menu"]).unwrap(), Action::Menu));
    }
}
