use std::path::PathBuf;

/// Relative location of the session file under the home directory.
pub const SESSION_FILE: &str = ".medinsta/session.json";

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_file: PathBuf,
    pub timeout: u64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            session_file: default_session_file(),
            timeout: 0,
        }
    }

    pub fn set_session_file(&mut self, path: impl Into<PathBuf>) {
        self.session_file = path.into();
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }
}

/// `$HOME/.medinsta/session.json`, or the relative path when `HOME` is unset.
#[must_use]
pub fn default_session_file() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map_or_else(|| PathBuf::from(SESSION_FILE), |home| PathBuf::from(home).join(SESSION_FILE))
}
