use clap::{Arg, Command};

pub const CMD_OPEN: &str = "open";
pub const CMD_MENU: &str = "menu";
pub const CMD_NOTIFICATIONS: &str = "notifications";
pub const CMD_DOCTORS: &str = "doctors";
pub const CMD_AVAILABILITY: &str = "availability";
pub const CMD_APPOINTMENTS: &str = "appointments";
pub const CMD_BOOK: &str = "book";
pub const CMD_REPORTS: &str = "reports";
pub const CMD_RECOMMEND: &str = "recommend";

pub const ARG_PATH: &str = "path";
pub const ARG_SPECIALIZATION: &str = "specialization";
pub const ARG_DOCTOR_ID: &str = "doctor-id";
pub const ARG_PROBLEM: &str = "problem";
pub const ARG_TIME: &str = "time";

fn specialization_arg() -> Arg {
    Arg::new(ARG_SPECIALIZATION)
        .short('s')
        .long("specialization")
        .help("Specialization label, e.g. \"Psychiatrist / Psychologist\"")
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_OPEN)
                .about("Open a portal path through the route guard")
                .arg(Arg::new(ARG_PATH).required(true)),
        )
        .subcommand(Command::new(CMD_MENU).about("Show the navigation menu for this session"))
        .subcommand(Command::new(CMD_NOTIFICATIONS).about("List notifications"))
        .subcommand(
            Command::new(CMD_DOCTORS)
                .about("List doctors, optionally filtered by specialization")
                .arg(specialization_arg()),
        )
        .subcommand(
            Command::new(CMD_AVAILABILITY)
                .about("Show a doctor's availability")
                .arg(Arg::new(ARG_DOCTOR_ID).required(true)),
        )
        .subcommand(Command::new(CMD_APPOINTMENTS).about("List your appointments"))
        .subcommand(
            Command::new(CMD_BOOK)
                .about("Request an appointment")
                .arg(
                    Arg::new(ARG_DOCTOR_ID)
                        .long("doctor")
                        .help("Doctor id")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_PROBLEM)
                        .long("problem")
                        .help("Reported problem, e.g. \"Heart Problems\"")
                        .required(true),
                )
                .arg(specialization_arg().help("Override the recommended specialization"))
                .arg(
                    Arg::new(ARG_TIME)
                        .long("time")
                        .help("Scheduled time, e.g. 2026-03-14T09:30")
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_REPORTS).about("List your medical reports"))
        .subcommand(
            Command::new(CMD_RECOMMEND)
                .about("Show the specializations recommended for a problem")
                .arg(Arg::new(ARG_PROBLEM).help("Problem label; lists every problem when omitted")),
        )
}
