use clap::{Arg, ArgAction, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_REGISTER: &str = "register";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_FROM: &str = "from";
pub const ARG_USERNAME: &str = "username";
pub const ARG_ROLE: &str = "role";
pub const ARG_AVATAR: &str = "avatar";
pub const ARG_PHONE: &str = "phone";
pub const ARG_SPECIALIZATION: &str = "specialization";
pub const ARG_EXPERIENCE: &str = "experience";
pub const ARG_AGE: &str = "age";
pub const ARG_SECRET: &str = "secret";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and store the session")
                .arg(
                    Arg::new(ARG_EMAIL)
                        .long("email")
                        .help("Account email")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long("password")
                        .help("Account password")
                        .env("MEDINSTA_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_FROM)
                        .long("from")
                        .help("Path to open after signing in, as set by a login redirect"),
                ),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Clear the stored session"))
        .subcommand(Command::new(CMD_WHOAMI).about("Show the signed-in user"))
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create a patient, doctor or admin account")
                .arg(Arg::new(ARG_USERNAME).long("username").required(true))
                .arg(Arg::new(ARG_EMAIL).long("email").required(true))
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long("password")
                        .env("MEDINSTA_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_ROLE)
                        .long("role")
                        .default_value("patient")
                        .value_parser(["patient", "doctor", "admin"]),
                )
                .arg(Arg::new(ARG_AVATAR).long("avatar").default_value(""))
                .arg(Arg::new(ARG_PHONE).long("phone").default_value(""))
                .arg(
                    Arg::new(ARG_SPECIALIZATION)
                        .long("specialization")
                        .help("Doctor specialization, e.g. \"Cardiologist\""),
                )
                .arg(
                    Arg::new(ARG_EXPERIENCE)
                        .long("experience")
                        .help("Doctor experience in years")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new(ARG_AGE)
                        .long("age")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new(ARG_SECRET)
                        .long("secret")
                        .help("Admin secret key")
                        .env("MEDINSTA_ADMIN_SECRET")
                        .hide_env_values(true)
                        .action(ArgAction::Set),
                ),
        )
}
