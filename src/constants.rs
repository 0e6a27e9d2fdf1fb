/// Application constants
///
/// Banner shown on an empty buffer
pub const WELCOME_MESSAGE: &str = "tern - a lightweight terminal text editor";

/// Log file name under the XDG data directory
pub const LOG_FILE_NAME: &str = "tern.log";

/// Status bar label for a pathless buffer
pub const NO_NAME_LABEL: &str = "[No Name]";
